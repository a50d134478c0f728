use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Input and output seen by a running program
///
/// Calls are synchronous and any failure ends the run.

pub trait Console {
    /// Read one integer for `INPUT name`.
    fn prompt_int(&mut self, name: &str) -> Result<i32>;
    /// Write one line for `PRINT`.
    fn emit(&mut self, value: i32) -> Result<()>;
    /// Report the source line about to execute while tracing.
    fn trace(&mut self, line: usize) -> Result<()>;
}

/// A console that reads from a script and writes to a string.
#[derive(Debug, Default)]
pub struct Capture {
    input: VecDeque<i32>,
    output: String,
}

impl Capture {
    pub fn new() -> Capture {
        Capture::default()
    }

    pub fn with_input<T: IntoIterator<Item = i32>>(input: T) -> Capture {
        Capture {
            input: input.into_iter().collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Console for Capture {
    fn prompt_int(&mut self, name: &str) -> Result<i32> {
        match self.input.pop_front() {
            Some(value) => Ok(value),
            None => Err(error!(InputPastEnd; name)),
        }
    }

    fn emit(&mut self, value: i32) -> Result<()> {
        self.output.push_str(&format!("{}\n", value));
        Ok(())
    }

    fn trace(&mut self, line: usize) -> Result<()> {
        self.output.push_str(&format!("[{}]", line));
        Ok(())
    }
}
