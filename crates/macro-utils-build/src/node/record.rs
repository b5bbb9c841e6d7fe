use crate::{
    GenerateError, filter::retain_non_empty, iter::pairs, node::Header, token::split_type_args,
};
use proc_macro2::{Span, TokenStream};
use syn::{Attribute, Ident, Type, Visibility, spanned::Spanned};

///
/// FieldSpec
///

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub ty: Type,
    pub ident: Ident,
}

///
/// RecordSpec
///

#[derive(Clone, Debug)]
pub struct RecordSpec {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub fields: Vec<FieldSpec>,
    pub span: Span,
}

impl RecordSpec {
    /// Parse `[#[attr]]* [vis] Name, Type1, field1, Type2, field2, ...`.
    ///
    /// The flat list must hold an even number of non-empty arguments.
    pub fn parse(tokens: TokenStream) -> Result<Self, GenerateError> {
        let span = tokens.span();
        let Header {
            attrs,
            vis,
            ident,
            rest,
        } = Header::parse(tokens)?;

        let args = retain_non_empty(split_type_args(rest));
        if args.is_empty() {
            return Err(GenerateError::EmptyList {
                what: "(type, field) pair",
                span: ident.span(),
            });
        }

        let mut fields = Vec::with_capacity(args.len() / 2);
        for (ty, field) in pairs(&args, span)? {
            fields.push(FieldSpec {
                ty: syn::parse2(ty.clone())?,
                ident: syn::parse2(field.clone())?,
            });
        }

        for (index, field) in fields.iter().enumerate() {
            if fields[..index].iter().any(|f| f.ident == field.ident) {
                return Err(syn::Error::new(
                    field.ident.span(),
                    format!("field '{}' is declared more than once", field.ident),
                )
                .into());
            }
        }

        Ok(Self {
            attrs,
            vis,
            ident,
            fields,
            span,
        })
    }
}
