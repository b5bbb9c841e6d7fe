//! Declaration generators.
//!
//! Each generator takes a parsed node and emits the final items. Generation is
//! pure: the same node always yields the same tokens.

mod enum_decl;
mod record;

pub use enum_decl::{EnumMode, EnumOutput, define_enum};
pub use record::define_record;
