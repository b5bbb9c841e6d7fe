//! Function-like macro entry points for `macro-utils`.
//!
//! Every macro here is a thin shim: convert the input, hand it to the
//! `macro-utils-build` engine, and surface failures as compile errors.

use proc_macro::TokenStream;

mod enumeration;
mod iterate;
mod record;
mod token;

use macro_utils_build::{codegen::EnumMode, node::Sentinel};

// Surface engine errors at the offending tokens.
fn emit<T>(result: Result<proc_macro2::TokenStream, T>) -> TokenStream
where
    T: Into<syn::Error>,
{
    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let err: syn::Error = err.into();
            err.to_compile_error().into()
        }
    }
}

//
// Enums
//

/// Declare an enum type with a leading `<Name>_INVALID` enumerator and its
/// public `<snake_name>_to_string` lookup function.
#[proc_macro]
pub fn define_enum(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::With, EnumMode::Declare))
}

/// Declare an enum type and its public lookup function, no sentinel.
#[proc_macro]
pub fn define_enum_without_invalid(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::Without, EnumMode::Declare))
}

/// Emit only the lookup function for a type declared elsewhere.
#[proc_macro]
pub fn define_enum_strings(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::With, EnumMode::Strings))
}

#[proc_macro]
pub fn define_enum_strings_without_invalid(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::Without, EnumMode::Strings))
}

/// Declare an enum type with a sentinel and a private lookup function.
#[proc_macro]
pub fn define_local_enum(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::With, EnumMode::Local))
}

#[proc_macro]
pub fn define_local_enum_without_invalid(input: TokenStream) -> TokenStream {
    emit(enumeration::define(input.into(), Sentinel::Without, EnumMode::Local))
}

/// `enum_to_string!(Name, value)` calls `<snake_name>_to_string(value)`.
///
/// Enums with a renamed lookup keep a hidden function under that name.
#[proc_macro]
pub fn enum_to_string(input: TokenStream) -> TokenStream {
    emit(enumeration::to_string(input.into()))
}

/// Number of values of a with-sentinel enum declared from this list.
#[proc_macro]
pub fn enum_value_count(input: TokenStream) -> TokenStream {
    emit(enumeration::value_count(input.into(), Sentinel::With))
}

#[proc_macro]
pub fn enum_value_count_without_invalid(input: TokenStream) -> TokenStream {
    emit(enumeration::value_count(input.into(), Sentinel::Without))
}

//
// Records
//

/// `define_struct!(Name, Type1, field1, ...)`
#[proc_macro]
pub fn define_struct(input: TokenStream) -> TokenStream {
    emit(record::define(input.into()))
}

//
// Tokens and lists
//

/// Number of comma-separated arguments, as a `usize` literal.
#[proc_macro]
pub fn count_arg(input: TokenStream) -> TokenStream {
    emit(token::count_arg(input.into()))
}

/// `token_if!(COND, THEN, ELSE)`
#[proc_macro]
pub fn token_if(input: TokenStream) -> TokenStream {
    emit(token::token_if(input.into()))
}

/// `eat_empty_args!(target => a, , b)` expands to `target!(a, b)`.
#[proc_macro]
pub fn eat_empty_args(input: TokenStream) -> TokenStream {
    emit(token::eat_empty_args(input.into()))
}

/// `for_each_1!(rule; a, b)` expands to `rule! { a } rule! { b }`.
#[proc_macro]
pub fn for_each_1(input: TokenStream) -> TokenStream {
    emit(iterate::for_each_1(input.into()))
}

/// `for_each_2!(rule; a, b, c, d)` expands to `rule! { a, b } rule! { c, d }`.
#[proc_macro]
pub fn for_each_2(input: TokenStream) -> TokenStream {
    emit(iterate::for_each_2(input.into()))
}

/// `for_each_1_keep_1!(rule, extra; a, b)` expands to
/// `rule! { extra, a } rule! { extra, b }`.
#[proc_macro]
pub fn for_each_1_keep_1(input: TokenStream) -> TokenStream {
    emit(iterate::for_each_1_keep_1(input.into()))
}

/// `for_each_1_counted!(rule; a, b)` expands to `rule! { 2, a } rule! { 1, b }`.
#[proc_macro]
pub fn for_each_1_counted(input: TokenStream) -> TokenStream {
    emit(iterate::for_each_1_counted(input.into()))
}
