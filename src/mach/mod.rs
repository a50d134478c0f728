/*!
## Rust Machine Module

This Rust module executes tiny programs directly from their tokens.
A single program counter walks the token sequence; loops, branches
and subroutine calls move it by skipping or jumping.

*/

pub type Address = usize;

mod console;
mod control;
mod cursor;
mod expr;
mod program;
mod runtime;
mod stack;
mod var;

#[cfg(test)]
mod tests;

pub use console::Capture;
pub use console::Console;
pub use cursor::Cursor;
pub use program::Program;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
