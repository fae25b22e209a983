// Signature restrictions for `#[callable]`.
//
// The generated handle stores the function behind `Arc<dyn Fn(A) -> R>`, so
// every argument type must be nameable without the function's own lifetimes.

use proc_macro2::Span;
use syn::{
    spanned::Spanned, visit::Visit, FnArg, Lifetime, Signature, Type, TypeImplTrait, TypeReference,
};

#[derive(Default)]
struct Borrowed {
    found: Option<Span>,
}

impl<'ast> Visit<'ast> for Borrowed {
    fn visit_type_reference(&mut self, node: &'ast TypeReference) {
        let is_static = node.lifetime.as_ref().is_some_and(|l: &Lifetime| l.ident == "static");
        if !is_static && self.found.is_none() {
            self.found = Some(node.span());
        }
        syn::visit::visit_type_reference(self, node);
    }

    fn visit_lifetime(&mut self, node: &'ast Lifetime) {
        if node.ident != "static" && self.found.is_none() {
            self.found = Some(node.span());
        }
    }

    fn visit_type_impl_trait(&mut self, node: &'ast TypeImplTrait) {
        if self.found.is_none() {
            self.found = Some(node.span());
        }
    }
}

fn check_owned(ty: &Type) -> syn::Result<()> {
    let mut visitor = Borrowed::default();
    visitor.visit_type(ty);
    match visitor.found {
        Some(span) => Err(syn::Error::new(
            span,
            "#[callable] needs owned or 'static argument and return types",
        )),
        None => Ok(()),
    }
}

/// Reject what a `Func<(Args,), Ret>` handle cannot express.
pub fn check_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new(token.span(), "#[callable] does not support async fn"));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "#[callable] does not support generic functions",
        ));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new(variadic.span(), "#[callable] does not support variadics"));
    }
    for input in &sig.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "#[callable] applies to free functions; bind receivers with `BoundMethod`",
                ));
            }
            FnArg::Typed(pat_type) => check_owned(&pat_type.ty)?,
        }
    }
    if let syn::ReturnType::Type(_, ty) = &sig.output {
        check_owned(ty)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(src: &str) -> Signature {
        syn::parse_str::<syn::ItemFn>(src).unwrap().sig
    }

    #[test]
    fn test_accepts_owned_and_static() {
        assert!(check_signature(&sig("fn f(a: String, b: u32) -> Vec<u8> {}")).is_ok());
        assert!(check_signature(&sig("fn f(a: &'static str) -> &'static str {}")).is_ok());
    }

    #[test]
    fn test_rejects_unsupported() {
        assert!(check_signature(&sig("fn f(a: &str) {}")).is_err());
        assert!(check_signature(&sig("fn f<T>(a: T) {}")).is_err());
        assert!(check_signature(&sig("async fn f() {}")).is_err());
        assert!(check_signature(&sig("fn f(a: impl Clone) {}")).is_err());
        assert!(check_signature(&sig("fn f(a: Box<dyn Fn() + 'a>) {}")).is_err());
    }
}
