//! Natural-language query understanding

pub mod parser;

pub use parser::QueryParser;
