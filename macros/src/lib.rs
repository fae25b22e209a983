//! Procedural macros for conditional-method
//!
//! Rust functions have no runtime names. `#[callable]` supplies the name,
//! qualified name and module that identity resolution needs, so that
//! differently named Rust functions can compete for one identity.
//!
//! ## Example
//!
//! ```ignore
//! use conditional_method::{callable, Condition, Resolver};
//!
//! #[callable(name = "authenticate", owner = Auth)]
//! fn authenticate_dev(token: String) -> bool { true }
//!
//! #[callable(name = "authenticate", owner = Auth)]
//! fn authenticate_prod(token: String) -> bool { verify(&token) }
//!
//! let resolver = Resolver::global();
//! resolver.resolve(authenticate_dev_callable(), &cfg!(debug_assertions).into())?;
//! let auth = resolver.resolve(authenticate_prod_callable(), &(!cfg!(debug_assertions)).into())?;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Generate a `<fn>_callable()` constructor for a free function.
///
/// # Arguments
///
/// - `name = "..."` - selection name (defaults to the function name)
/// - `owner = Type` - qualified name becomes `Type.name`
/// - `qualname = "..."` - explicit qualified name (exclusive with `owner`)
///
/// # Restrictions
///
/// The function must be synchronous, non-generic, take no receiver, and use
/// owned or `'static` types.
#[proc_macro_attribute]
pub fn callable(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as common::CallableArgs);
    let func = parse_macro_input!(item as syn::ItemFn);

    user::expand_callable(args, func)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
