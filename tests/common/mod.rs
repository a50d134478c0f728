use tiny::mach::{Capture, Program, Runtime};

pub fn exec(source: &str) -> String {
    exec_with_input(source, vec![])
}

/// Runs a program to completion and returns everything it printed.
/// An error ends the transcript on its own line.
pub fn exec_with_input(source: &str, input: Vec<i32>) -> String {
    let program: Program = match source.parse() {
        Ok(program) => program,
        Err(error) => return format!("{}\n", error),
    };
    let mut runtime = Runtime::new(program, Capture::with_input(input));
    let result = runtime.run();
    let mut s = runtime.into_console().take_output();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}

#[allow(dead_code)]
pub fn exec_traced(source: &str) -> String {
    let program: Program = source.parse().unwrap();
    let mut runtime = Runtime::new(program, Capture::new());
    runtime.trace(true);
    let result = runtime.run();
    let mut s = runtime.into_console().take_output();
    if let Err(error) = result {
        s.push_str(&format!("{}\n", error));
    }
    s
}
