use macro_utils_build::{GenerateError, codegen::define_record, node::RecordSpec};
use proc_macro2::TokenStream;

pub fn define(input: TokenStream) -> Result<TokenStream, GenerateError> {
    let spec = RecordSpec::parse(input)?;

    define_record(&spec)
}
