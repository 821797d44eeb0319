use syn::{
    Attribute, Ident, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
};

use crate::support::diag;

/// Parsed `#[chk(...)]` arguments of one field.
#[derive(Debug, Clone, Default)]
pub struct ChkArgs {
    /// Rule chain.
    pub rules: Option<LitStr>,
    /// Replacement identifier.
    pub rename: Option<LitStr>,
}

impl ChkArgs {
    fn set(slot: &mut Option<LitStr>, key: &Ident, value: LitStr) -> Result<()> {
        if slot.is_some() {
            return Err(diag::error_spanned(
                key,
                format!("duplicate `{key}` in #[chk]"),
            ));
        }
        *slot = Some(value);
        Ok(())
    }

    fn merge(&mut self, other: Self, attr: &Attribute) -> Result<()> {
        if let Some(rules) = other.rules {
            if self.rules.is_some() {
                return Err(diag::error_spanned(attr, "rule chain given twice"));
            }
            self.rules = Some(rules);
        }
        if let Some(rename) = other.rename {
            if self.rename.is_some() {
                return Err(diag::error_spanned(attr, "`rename` given twice"));
            }
            self.rename = Some(rename);
        }
        Ok(())
    }
}

/// Collects every `#[chk(...)]` on a field. `None` if there is none.
pub fn parse_chk(attrs: &[Attribute]) -> Result<Option<ChkArgs>> {
    let mut found: Option<ChkArgs> = None;

    for attr in attrs {
        if !attr.path().is_ident("chk") {
            continue;
        }
        let args = match &attr.meta {
            Meta::List(list) => syn::parse2::<ChkArgs>(list.tokens.clone())?,
            Meta::Path(_) | Meta::NameValue(_) => {
                return Err(diag::error_spanned(
                    attr,
                    "expected #[chk(\"...\")] or #[chk(rules = \"...\", rename = \"...\")]",
                ));
            }
        };
        found.get_or_insert_with(ChkArgs::default).merge(args, attr)?;
    }

    Ok(found)
}

impl Parse for ChkArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = Self::default();

        if input.peek(LitStr) {
            args.rules = Some(input.parse()?);
            if input.is_empty() {
                return Ok(args);
            }
            input.parse::<Token![,]>()?;
        }

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            if key == "rules" {
                Self::set(&mut args.rules, &key, value)?;
            } else if key == "rename" {
                if value.value().trim().is_empty() {
                    return Err(diag::error_spanned(&value, "`rename` cannot be empty"));
                }
                Self::set(&mut args.rename, &key, value)?;
            } else {
                return Err(diag::error_spanned(
                    &key,
                    format!("unknown #[chk] key `{key}`, expected `rules` or `rename`"),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}
