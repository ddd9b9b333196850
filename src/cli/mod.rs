pub mod help;
pub mod parser;
