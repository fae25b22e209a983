//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[callable]` | on fn | Generate a name-carrying `Func` handle |

pub mod callable;

pub use callable::expand_callable;
