use macro_utils::prelude::*;

//
// Mode
// declared by hand, names generated
//

#[derive(Clone, Copy, Debug)]
pub struct Mode(pub i32);

impl From<Mode> for i32 {
    fn from(mode: Mode) -> Self {
        mode.0
    }
}

define_enum_strings!(pub Mode, OFF, ON);

//
// Light
// a native enum with matching discriminants
//

#[derive(Clone, Copy, Debug)]
#[repr(i32)]
pub enum Light {
    Red,
    Amber,
    Green = 10,
}

impl From<Light> for i32 {
    fn from(light: Light) -> Self {
        light as Self
    }
}

define_enum_strings_without_invalid!(pub Light, Red, Amber, Green = 10);

//
// TESTS
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_use_the_sentinel_numbering() {
        assert_eq!(mode_to_string(Mode(0)), "Mode_INVALID");
        assert_eq!(mode_to_string(Mode(1)), "OFF");
        assert_eq!(mode_to_string(Mode(2)), "ON");
        assert_eq!(mode_to_string(Mode(3)), "NULL");
    }

    #[test]
    fn strings_name_a_native_enum() {
        assert_eq!(light_to_string(Light::Red), "Red");
        assert_eq!(light_to_string(Light::Amber), "Amber");
        assert_eq!(light_to_string(Light::Green), "Green");
        assert_eq!(enum_to_string!(Light, Light::Green), "Green");
    }
}
