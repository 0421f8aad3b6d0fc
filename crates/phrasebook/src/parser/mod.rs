//! Phrase template scanning.
//!
//! Templates are plain text with placeholder tokens such as `%{name}`. The
//! scanner turns a template into literal and token segments for a given
//! [`TokenPattern`]; it never fails, since anything that is not a complete
//! token is literal text.

pub mod ast;
mod pattern;
mod template;

pub use ast::*;
pub use pattern::{
    DEFAULT_PREFIX, DEFAULT_SUFFIX, Interpolation, PLURAL_DELIMITER, TokenPattern,
};
pub use template::{parse_template, split_forms};
