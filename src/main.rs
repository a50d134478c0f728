//! # tiny
//!
//! Runs a program written in the tiny teaching language.
//!

mod term;

fn main() {
    term::main();
}
