//! Text parsers for the crate's compact notations
//!
//! `integer` reads radix-checked integer literals and `digit_spec` reads
//! digit-count specifications such as `"1.2-2"`.

mod digit_spec;
mod integer;

pub use digit_spec::parse_digit_spec;
pub use integer::{parse_int_auto_radix, parse_strict};
