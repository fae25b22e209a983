use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, ReturnType};

use crate::common::{check_signature, dotted_path, CallableArgs};

/// #[callable] keeps the function and adds a `<fn>_callable()` constructor
/// returning a `Func` that carries its name metadata.
///
/// `module_path!()` is emitted into the generated body, so it expands at the
/// definition site rather than inside this crate.
pub fn expand_callable(args: CallableArgs, func: ItemFn) -> syn::Result<TokenStream2> {
    check_signature(&func.sig)?;

    let ident = &func.sig.ident;
    let vis = &func.vis;
    let handle = format_ident!("{}_callable", ident);

    let name = args
        .name
        .as_ref()
        .map(|lit| lit.value())
        .unwrap_or_else(|| ident.to_string());
    let qualname = match (&args.qualname, &args.owner) {
        (Some(lit), _) => Some(lit.value()),
        (None, Some(owner)) => Some(format!("{}.{}", dotted_path(owner), name)),
        (None, None) => None,
    };
    let qualified = qualname.map(|q| quote! { .qualified(#q) });

    let arg_names: Vec<_> = (0..func.sig.inputs.len())
        .map(|i| format_ident!("__arg{}", i))
        .collect();
    let arg_types: Vec<_> = func
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(pat_type) => Some(&*pat_type.ty),
            FnArg::Receiver(_) => None,
        })
        .collect();
    let ret = match &func.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, ty) => quote! { #ty },
    };

    let doc = format!("Name-carrying handle for [`{ident}`], selectable as `{name}`.");

    Ok(quote! {
        #func

        #[doc = #doc]
        #[allow(dead_code)]
        #vis fn #handle() -> ::conditional_method::Func<(#(#arg_types,)*), #ret> {
            ::conditional_method::Func::new(|(#(#arg_names,)*): (#(#arg_types,)*)| {
                #ident(#(#arg_names),*)
            })
                .named(#name)
                #qualified
                .in_module(::core::module_path!())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(attr: &str, item: &str) -> syn::Result<String> {
        let args: CallableArgs = syn::parse_str(attr)?;
        let func: ItemFn = syn::parse_str(item)?;
        expand_callable(args, func).map(|ts| ts.to_string())
    }

    #[test]
    fn test_generates_handle_with_names() {
        let out = expand(
            r#"name = "login", owner = Auth"#,
            "pub fn login_dev(user: String) -> bool { true }",
        )
        .unwrap();
        assert!(out.contains("pub fn login_dev_callable"));
        assert!(out.contains(". named (\"login\")"));
        assert!(out.contains(". qualified (\"Auth.login\")"));
        assert!(out.contains("module_path"));
    }

    #[test]
    fn test_defaults_to_fn_name() {
        let out = expand("", "fn ping() {}").unwrap();
        assert!(out.contains(". named (\"ping\")"));
        assert!(!out.contains("qualified"));
    }

    #[test]
    fn test_rejects_borrowed_args() {
        assert!(expand("", "fn f(s: &str) {}").is_err());
    }
}
