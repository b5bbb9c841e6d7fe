mod enumeration;
mod record;

pub use enumeration::{EnumSpec, EnumeratorSpec, Sentinel, lookup_fn_ident, sentinel_ident};
pub use record::{FieldSpec, RecordSpec};

use proc_macro2::TokenStream;
use syn::{
    Attribute, Ident, Token, Visibility,
    parse::{ParseStream, Parser},
};

///
/// Header
/// `[#[attr]]* [vis] Name [, rest...]` shared by every generator input
///

pub(crate) struct Header {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub rest: TokenStream,
}

impl Header {
    pub(crate) fn parse(tokens: TokenStream) -> syn::Result<Self> {
        let parser = |input: ParseStream| -> syn::Result<Self> {
            let attrs = input.call(Attribute::parse_outer)?;
            let vis: Visibility = input.parse()?;
            let ident: Ident = input.parse()?;

            let rest = if input.is_empty() {
                TokenStream::new()
            } else {
                input.parse::<Token![,]>()?;
                input.parse::<TokenStream>()?
            };

            Ok(Self {
                attrs,
                vis,
                ident,
                rest,
            })
        };

        parser.parse2(tokens)
    }
}
