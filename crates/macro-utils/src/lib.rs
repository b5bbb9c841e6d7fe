//! ## Crate layout
//! - `build`: the generation engine the macros run on, usable directly from
//!   other proc-macro crates and tests.
//! - macros: `define_enum!` and friends, `define_struct!`, and the list
//!   helpers (`count_arg!`, `for_each_1!`, `eat_empty_args!`, ...).
//! - glue: `count_array_items!`, `tostring!`, `failure!` and [`p_or_null`].
//!
//! ```ignore
//! use macro_utils::prelude::*;
//!
//! define_enum!(pub Color, RED, GREEN, BLUE);
//!
//! assert_eq!(color_to_string(Color::GREEN), "GREEN");
//! assert_eq!(color_to_string(Color(99)), "NULL");
//! ```

pub use macro_utils_build as build;

mod macros;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text used in place of missing or unmatched names.
pub const NULL_TEXT: &str = macro_utils_build::UNKNOWN_TEXT;

//
// Macros
//

pub use macro_utils_derive::{
    count_arg, define_enum, define_enum_strings, define_enum_strings_without_invalid,
    define_enum_without_invalid, define_local_enum, define_local_enum_without_invalid,
    define_struct, eat_empty_args, enum_to_string, enum_value_count,
    enum_value_count_without_invalid, for_each_1, for_each_1_counted, for_each_1_keep_1,
    for_each_2, token_if,
};

/// `value`, or `"NULL"` when there is none.
#[must_use]
pub const fn p_or_null(value: Option<&str>) -> &str {
    match value {
        Some(value) => value,
        None => NULL_TEXT,
    }
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        count_arg, count_array_items, define_enum, define_enum_strings,
        define_enum_strings_without_invalid, define_enum_without_invalid, define_local_enum,
        define_local_enum_without_invalid, define_struct, eat_empty_args, enum_to_string,
        enum_value_count, enum_value_count_without_invalid, failure, for_each_1,
        for_each_1_counted, for_each_1_keep_1, for_each_2, p_or_null, token_if, tostring,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_or_null_substitutes_the_placeholder() {
        assert_eq!(p_or_null(Some("RED")), "RED");
        assert_eq!(p_or_null(None), "NULL");
    }

    #[test]
    fn count_array_items_ignores_element_type() {
        const WIDE: [u64; 5] = [0; 5];

        assert_eq!(count_array_items!([1u8, 2, 3]), 3);
        assert_eq!(count_array_items!(WIDE), 5);
        assert_eq!(count_array_items!(["a", "b"]), 2);
    }

    #[test]
    fn tostring_keeps_the_token_text() {
        assert_eq!(tostring!(RED), "RED");
        assert_eq!(tostring!(a + b), "a + b");
    }

    #[test]
    fn failure_is_non_zero() {
        assert_ne!(failure!(), 0);
    }

    #[cfg(not(feature = "optimize-return-codes"))]
    #[test]
    fn failure_names_the_line() {
        let line = line!();
        let code = failure!();

        assert_eq!(code, line + 1);
    }
}
