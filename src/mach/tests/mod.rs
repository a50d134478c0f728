use crate::lang::Error;
use crate::mach::{Capture, Program, Runtime};

mod expr_test;

fn runtime(s: &str) -> Runtime<Capture> {
    let program: Program = s.parse().unwrap();
    Runtime::new(program, Capture::new())
}

fn run(s: &str) -> String {
    run_with_input(s, vec![])
}

fn run_with_input(s: &str, input: Vec<i32>) -> String {
    let program: Program = match s.parse() {
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

fn run_err(s: &str) -> Error {
    let mut runtime = runtime(s);
    match runtime.run() {
        Ok(()) => panic!("program ran to completion: {:?}", runtime.console().output()),
        Err(error) => error,
    }
}
