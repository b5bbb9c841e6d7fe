use macro_utils::prelude::*;

const BASE: i64 = 0x100;

define_enum_without_invalid!(
    #[macro_utils(repr = "i64")]
    Register,
    STATUS = BASE,
    CONTROL,
    DATA = CONTROL + 0x10,
    MIRROR = STATUS,
    LAST,
);

fn main() {
    assert_eq!(Register::CONTROL.0, 0x101);
    assert_eq!(Register::DATA.0, 0x111);
    assert_eq!(register_to_string(Register::MIRROR), "STATUS");
    assert_eq!(register_to_string(Register::LAST), "CONTROL");
    assert_eq!(Register::VALUE_COUNT, 5);
}
