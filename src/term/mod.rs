extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tiny::error;
use tiny::lang::Error;
use tiny::mach::{Console, Program, Runtime};

type Result<T> = std::result::Result<T, Error>;

#[derive(StructOpt)]
#[structopt(name = "tiny", about = "Runs a program written in the tiny teaching language")]
struct Opts {
    /// Program source file
    #[structopt(parse(from_os_str))]
    file: PathBuf,

    /// Print each source line number as it starts executing
    #[structopt(short, long)]
    trace: bool,
}

pub fn main() {
    let opts = Opts::from_args();
    if let Err(error) = main_loop(&opts) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn main_loop(opts: &Opts) -> Result<()> {
    let program = load(&opts.file)?;
    let mut runtime = Runtime::new(program, TermConsole::new()?);
    runtime.trace(opts.trace);
    runtime.run()
}

fn load(filename: &Path) -> Result<Program> {
    let source = match std::fs::read_to_string(filename) {
        Ok(source) => source,
        Err(error) => {
            let msg = format!("{}: {}", filename.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    source.parse()
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; &error.to_string())
}

struct TermConsole {
    interface: Interface<DefaultTerminal>,
}

impl TermConsole {
    fn new() -> Result<TermConsole> {
        let interface = Interface::new("tiny").map_err(io_error)?;
        Ok(TermConsole { interface })
    }
}

impl Console for TermConsole {
    fn prompt_int(&mut self, name: &str) -> Result<i32> {
        self.interface
            .set_prompt(&format!("Enter a value for {}: ", name))
            .map_err(io_error)?;
        match self.interface.read_line().map_err(io_error)? {
            ReadResult::Input(string) => match string.trim().parse::<i32>() {
                Ok(value) => Ok(value),
                Err(_) => Err(error!(InputError; &format!("EXPECTED INTEGER FOR {}", name))),
            },
            ReadResult::Signal(_) | ReadResult::Eof => Err(error!(InputPastEnd; name)),
        }
    }

    fn emit(&mut self, value: i32) -> Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", value))
            .map_err(io_error)
    }

    fn trace(&mut self, line: usize) -> Result<()> {
        self.interface
            .write_fmt(format_args!("[{}]", line))
            .map_err(io_error)
    }
}
