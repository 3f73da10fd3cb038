//! Input handling module

pub mod glob_resolver;
pub mod token_reader;

pub use glob_resolver::resolve_patterns;
pub use token_reader::TokenReader;
