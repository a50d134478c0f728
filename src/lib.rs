//! # tiny
//!
//! A small imperative language for teaching, run straight from its
//! tokens.
//!
//! Install [Rust](https://www.rust-lang.org/tools/install) then
//! the command `cargo install tiny-lang`.
//!
//! Run a program by naming its file.
//! ```text
//! $ tiny factorial.tiny
//! Enter a value for n: 5
//! 120
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
