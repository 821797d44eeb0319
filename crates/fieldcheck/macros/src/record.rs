use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type, parse_macro_input};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "#[derive(Record)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Record)] can only be used on structs",
            ));
        }
    };

    let mut entries = Vec::new();
    for field in fields {
        let Some(member) = field.ident.as_ref() else {
            continue;
        };
        let chk = attrs::parse_chk(&field.attrs)?;

        if !is_string_type(&field.ty) {
            if chk.is_some() {
                return Err(diag::error_spanned(
                    &field.ty,
                    "#[chk] can only annotate `String`, `&str` or `Cow<str>` fields",
                ));
            }
            continue;
        }

        let chk = chk.unwrap_or_default();
        let ident = chk
            .rename
            .map_or_else(|| member.unraw().to_string(), |lit| lit.value());
        let with_rules = chk.rules.map(|rules| quote!(.with_rules(#rules)));

        entries.push(quote! {
            ::fieldcheck::record::RecordField::new(
                #ident,
                ::core::convert::AsRef::<str>::as_ref(&self.#member),
            )
            #with_rules
        });
    }

    Ok(quote! {
        impl #impl_generics ::fieldcheck::record::Record for #struct_name #ty_generics #where_clause {
            fn fields(
                &self,
            ) -> ::core::result::Result<
                ::std::vec::Vec<::fieldcheck::record::RecordField<'_>>,
                ::fieldcheck::foundation::CheckError,
            > {
                ::core::result::Result::Ok(::std::vec![#(#entries),*])
            }
        }
    })
}

/// `String`, `&str`, `&mut str` or `Cow<str>`, matched syntactically.
fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_path_named(&reference.elem, "str"),
        Type::Group(group) => is_string_type(&group.elem),
        Type::Paren(paren) => is_string_type(&paren.elem),
        Type::Path(path) => {
            let Some(last) = path.path.segments.last() else {
                return false;
            };
            if last.ident == "String" {
                return last.arguments.is_none();
            }
            if last.ident != "Cow" {
                return false;
            }
            let PathArguments::AngleBracketed(args) = &last.arguments else {
                return false;
            };
            args.args.iter().any(|arg| match arg {
                GenericArgument::Type(inner) => is_path_named(inner, "str"),
                _ => false,
            })
        }
        _ => false,
    }
}

fn is_path_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(name),
        _ => false,
    }
}
