use crate::{
    GenerateError,
    node::{FieldSpec, RecordSpec},
    obs::{self, GenerationEvent},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Generate `struct Name { pub field: Type, ... }` with fields in list order.
pub fn define_record(spec: &RecordSpec) -> Result<TokenStream, GenerateError> {
    let name = spec.ident.to_string();
    obs::record(GenerationEvent::RecordGenerated {
        name: &name,
        fields: spec.fields.len(),
    });

    Ok(RecordGen(spec).to_token_stream())
}

///
/// RecordGen
///

struct RecordGen<'a>(&'a RecordSpec);

impl ToTokens for RecordGen<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let RecordSpec {
            attrs,
            vis,
            ident,
            fields,
            ..
        } = self.0;
        let fields = fields.iter().map(|FieldSpec { ty, ident }| quote!(pub #ident: #ty));

        tokens.extend(quote! {
            #(#attrs)*
            #vis struct #ident {
                #(#fields),*
            }
        });
    }
}
