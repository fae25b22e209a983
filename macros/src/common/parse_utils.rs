//! Common parsing utilities
//!
//! Shared parsing helpers for `key = value` attribute arguments.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, LitStr, Path, Token,
};

// =============================================================================
// Attribute Arguments: `name = "..", owner = Type, qualname = ".."`
// =============================================================================

/// Arguments of `#[callable(...)]`. All optional.
#[derive(Clone, Default)]
pub struct CallableArgs {
    pub name: Option<LitStr>,
    pub qualname: Option<LitStr>,
    pub owner: Option<Path>,
}

enum CallableArg {
    Name(LitStr),
    Qualname(LitStr),
    Owner(Path),
}

impl Parse for CallableArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        match key.to_string().as_str() {
            "name" => Ok(CallableArg::Name(input.parse()?)),
            "qualname" => Ok(CallableArg::Qualname(input.parse()?)),
            "owner" => Ok(CallableArg::Owner(input.parse()?)),
            other => Err(syn::Error::new(
                key.span(),
                format!("unknown argument `{other}`, expected `name`, `qualname` or `owner`"),
            )),
        }
    }
}

impl Parse for CallableArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = CallableArgs::default();
        let items: Punctuated<CallableArg, Token![,]> = Punctuated::parse_terminated(input)?;
        for item in items {
            match item {
                CallableArg::Name(lit) => set_once(&mut args.name, lit, "name")?,
                CallableArg::Qualname(lit) => set_once(&mut args.qualname, lit, "qualname")?,
                CallableArg::Owner(path) => set_once(&mut args.owner, path, "owner")?,
            }
        }
        if let (Some(qualname), Some(_)) = (&args.qualname, &args.owner) {
            return Err(syn::Error::new(
                qualname.span(),
                "`qualname` and `owner` are mutually exclusive",
            ));
        }
        Ok(args)
    }
}

fn set_once<T: quote::ToTokens>(slot: &mut Option<T>, value: T, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(&value, format!("duplicate `{key}` argument")));
    }
    *slot = Some(value);
    Ok(())
}

/// Render a path as a dotted scope, e.g. `outer::Service` -> `outer.Service`.
pub fn dotted_path(path: &Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        let args: CallableArgs =
            syn::parse_str(r#"name = "login", owner = auth::Service"#).unwrap();
        assert_eq!(args.name.unwrap().value(), "login");
        assert_eq!(dotted_path(&args.owner.unwrap()), "auth.Service");
        assert!(args.qualname.is_none());
    }

    #[test]
    fn test_rejects_duplicates_and_unknown_keys() {
        assert!(syn::parse_str::<CallableArgs>(r#"name = "a", name = "b""#).is_err());
        assert!(syn::parse_str::<CallableArgs>(r#"label = "a""#).is_err());
        assert!(syn::parse_str::<CallableArgs>(r#"qualname = "A.f", owner = A"#).is_err());
    }

    #[test]
    fn test_empty_is_default() {
        let args: CallableArgs = syn::parse_str("").unwrap();
        assert!(args.name.is_none() && args.owner.is_none() && args.qualname.is_none());
    }
}
