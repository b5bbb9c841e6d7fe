use macro_utils::prelude::*;

/// Referenced from an initializer below.
pub const LIMIT: i32 = 100;

//
// Color
//

define_enum!(pub Color, RED, GREEN, BLUE);

//
// Uber
//

define_enum_without_invalid!(pub Uber, a, b = 42, c, d);

//
// Shared
// several names on one value
//

define_enum_without_invalid!(pub Shared, FIRST = 5, SECOND = 5, THIRD = 4, FOURTH);

//
// Level
//

define_enum_without_invalid!(
    #[macro_utils(repr = "u8", to_string = "level_name", unknown = "?")]
    pub Level,
    LOW = 1,
    MID = LOW * 2,
    HIGH = MID << 2,
);

//
// Bound
//

define_enum_without_invalid!(#[derive(Default)] pub Bound, MIN = -1, MAX = LIMIT, OVER);

//
// Pair
//

define_enum!(pub Pair, a, b);

//
// Documented
//

define_enum!(
    /// Enumerator docs pass through to the associated consts.
    pub Documented,
    /// The only real value.
    ONLY,
);

//
// Keyword
// raw identifiers as enumerators
//

define_enum_without_invalid!(pub Keyword, r#type, r#match = 4, r#loop);

//
// Layout
// generic paths inside initializers
//

/// Combined size of two types.
pub struct Footprint<A, B>(core::marker::PhantomData<(A, B)>);

impl<A, B> Footprint<A, B> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const BYTES: i32 = (size_of::<A>() + size_of::<B>()) as i32;
}

define_enum_without_invalid!(pub Layout, BYTE = 1, PAIR = Footprint::<u8, u16>::BYTES, WIDE);

//
// TESTS
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_values_follow_the_sentinel() {
        assert_eq!(Color::Color_INVALID.0, 0);
        assert_eq!(Color::RED.0, 1);
        assert_eq!(Color::GREEN.0, 2);
        assert_eq!(Color::BLUE.0, 3);
        assert_eq!(Color::VALUE_COUNT, 4);
    }

    #[test]
    fn color_lookup_names_values_and_falls_back() {
        assert_eq!(color_to_string(Color(2)), "GREEN");
        assert_eq!(color_to_string(Color(0)), "Color_INVALID");
        assert_eq!(color_to_string(Color(99)), "NULL");
        assert_eq!(color_to_string(Color(-1)), "NULL");
    }

    #[test]
    fn enum_to_string_dispatches_to_the_generated_function() {
        assert_eq!(enum_to_string!(Color, Color::BLUE), "BLUE");
        assert_eq!(enum_to_string!(Uber, Uber::from(43)), "c");
    }

    #[test]
    fn enum_to_string_reaches_a_renamed_lookup() {
        assert_eq!(enum_to_string!(Level, Level::MID), "MID");
        assert_eq!(enum_to_string!(Level, Level(3)), "?");
        assert_eq!(level_to_string(Level::LOW), level_name(Level::LOW));
    }

    #[test]
    fn raw_enumerators_are_named_without_the_prefix() {
        assert_eq!(Keyword::r#match.0, 4);
        assert_eq!(keyword_to_string(Keyword::r#type), "type");
        assert_eq!(keyword_to_string(Keyword(5)), "loop");
        assert_eq!(Keyword::r#loop.to_string(), "loop");
    }

    #[test]
    fn turbofish_initializers_stay_one_enumerator() {
        assert_eq!(Layout::VALUE_COUNT, 3);
        assert_eq!(Layout::PAIR.0, 3);
        assert_eq!(Layout::WIDE.0, 4);
        assert_eq!(layout_to_string(Layout(3)), "PAIR");
        assert_eq!(
            enum_value_count_without_invalid!(BYTE = 1, PAIR = Footprint::<u8, u16>::BYTES, WIDE),
            Layout::VALUE_COUNT
        );
    }

    #[test]
    fn display_goes_through_the_lookup() {
        assert_eq!(Color::GREEN.to_string(), "GREEN");
        assert_eq!(Color(7).to_string(), "NULL");
        assert_eq!(Level::HIGH.to_string(), "HIGH");
    }

    #[test]
    fn explicit_value_resumes_auto_increment() {
        assert_eq!(Uber::a.0, 0);
        assert_eq!(Uber::b.0, 42);
        assert_eq!(Uber::c.0, 43);
        assert_eq!(Uber::d.0, 44);
        assert_eq!(uber_to_string(Uber(44)), "d");
        assert_eq!(uber_to_string(Uber(1)), "NULL");
    }

    #[test]
    fn duplicates_resolve_to_the_first_declared_name() {
        assert_eq!(Shared::FOURTH, Shared::FIRST);
        assert_eq!(shared_to_string(Shared::SECOND), "FIRST");
        assert_eq!(shared_to_string(Shared::FOURTH), "FIRST");
        assert_eq!(shared_to_string(Shared(4)), "THIRD");
        assert_eq!(Shared::VALUE_COUNT, 4);
    }

    #[test]
    fn options_change_repr_lookup_name_and_fallback() {
        assert_eq!(size_of::<Level>(), 1);
        assert_eq!(Level::MID.0, 2u8);
        assert_eq!(Level::HIGH.0, 8u8);
        assert_eq!(level_name(Level(8)), "HIGH");
        assert_eq!(level_name(Level(3)), "?");
    }

    #[test]
    fn initializers_may_name_outer_constants() {
        assert_eq!(Bound::MIN.0, -1);
        assert_eq!(Bound::MAX.0, LIMIT);
        assert_eq!(Bound::OVER.0, LIMIT + 1);
        assert_eq!(bound_to_string(Bound(101)), "OVER");
        assert_eq!(Bound::default().0, 0);
    }

    #[test]
    fn value_counts_agree_with_the_declared_types() {
        assert_eq!(Pair::VALUE_COUNT, 3);
        assert_eq!(enum_value_count!(a, b), 3);
        assert_eq!(enum_value_count_without_invalid!(a, b), 2);
        assert_eq!(enum_value_count!(RED, GREEN, BLUE), Color::VALUE_COUNT);
    }

    #[test]
    fn conversions_round_trip_the_repr() {
        let raw: i32 = Color::BLUE.into();

        assert_eq!(raw, 3);
        assert_eq!(Color::from(raw), Color::BLUE);
        assert!(Color::RED < Color::BLUE);
    }

    #[test]
    fn documented_enumerators_still_resolve() {
        assert_eq!(documented_to_string(Documented::ONLY), "ONLY");
    }
}
