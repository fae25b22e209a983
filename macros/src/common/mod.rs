// Common utilities shared by the attribute macros
//
// This module contains:
// - parse_utils: `key = value` argument parsing
// - type_checks: signature restrictions for generated handles

mod parse_utils;
mod type_checks;

pub use parse_utils::*;
pub use type_checks::*;
