use macro_utils::prelude::*;

macro_rules! unit_struct {
    ($name:ident) => {
        #[derive(Debug, Default)]
        pub struct $name;
    };
}

macro_rules! named_value {
    ($name:ident, $value:expr) => {
        pub const $name: u32 = $value;
    };
}

macro_rules! tagged {
    ($tag:literal, $name:ident) => {
        pub const $name: &str = $tag;
    };
}

macro_rules! countdown {
    ($n:literal, $name:ident) => {
        pub const $name: usize = $n;
    };
}

for_each_1!(unit_struct; Alpha, , Beta);

for_each_2!(named_value; ONE, 1, TWO, 1 + 1);

for_each_1_keep_1!(tagged, "shared"; TAG_A, TAG_B);

for_each_1_counted!(countdown; LEFT_THREE, LEFT_TWO, LEFT_ONE);

token_if!(0, { pub const PICKED: u8 = 1; }, { pub const PICKED: u8 = 2; });

token_if!(SOMETHING, { pub const KEPT: bool = true; }, { pub const KEPT: bool = false; });

/// Argument count of a list with an elided middle.
pub const ELIDED: usize = count_arg!(a, , c);
