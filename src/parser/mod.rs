pub mod ast;
pub mod error_printing;
pub mod lexer;
pub mod parser;
pub mod tokens;
pub mod types;

pub use ast::Puzzle;
pub use parser::{load, PuzzleError};
