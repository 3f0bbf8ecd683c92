pub mod parser;
pub mod prompt;
