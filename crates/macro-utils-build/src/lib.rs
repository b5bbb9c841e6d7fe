//! Code generation engine behind the `macro-utils` macros.
//!
//! ## Crate layout
//! - `token`: token predicates (`is_empty`, `is_zero`) and argument splitting.
//! - `count`: bounded argument counting.
//! - `iter`: per-item and per-pair iteration over argument lists.
//! - `filter`: removal of elided (empty) arguments.
//! - `node`: parsed enum and record descriptions.
//! - `resolve`: generation-time discriminant folding.
//! - `codegen`: the enum and record declaration generators.
//! - `obs`: generation events and the sink boundary.
//!
//! Everything here runs at macro-expansion time. Nothing survives into the
//! compiled program except the emitted tokens.

pub mod codegen;
pub mod count;
pub mod error;
pub mod filter;
pub mod iter;
pub mod node;
pub mod obs;
pub mod options;
pub mod resolve;
pub mod token;

/// Largest argument list any generator accepts.
pub const MAX_ARITY: usize = 124;

/// Suffix of the sentinel enumerator prepended by the with-sentinel generators.
pub const SENTINEL_SUFFIX: &str = "_INVALID";

/// Text returned by a generated lookup function when no enumerator matches.
pub const UNKNOWN_TEXT: &str = "NULL";

pub use error::GenerateError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        GenerateError, MAX_ARITY, SENTINEL_SUFFIX, UNKNOWN_TEXT,
        codegen::{EnumMode, EnumOutput, define_enum, define_record},
        count::count_args,
        filter::{eat_empty_args, retain_non_empty},
        iter::{for_each, for_each_counted, for_each_keep_1, for_each_pair},
        node::{EnumSpec, EnumeratorSpec, FieldSpec, RecordSpec, Sentinel},
        obs::{GenerationEvent, GenerationSink, with_sink},
        options::{EnumOptions, Repr},
        resolve::{LookupTable, ResolvedValue, resolve_discriminants},
        token::{is_empty, is_zero, split_args, split_expr_args, split_type_args, token_if},
    };
}
