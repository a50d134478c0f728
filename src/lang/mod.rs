/*!
# Rust Language Module

This Rust module provides lexical analysis of the tiny language.
Scanning produces a flat sequence of classified tokens; there is no
syntax tree. The machine module executes directly from the tokens.

*/

#[macro_use]
mod error;
mod lex;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use lex::TokenSource;
pub use token::Kind;
pub use token::Token;
