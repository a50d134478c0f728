use super::{Address, Console, Cursor, Program, Stack, Var};
use crate::error;
use crate::lang::{Error, Kind};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const MAX_CALL_DEPTH: usize = 256;

/// How control leaves a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Next,
    /// A `return` already moved the cursor back to the caller.
    Returned,
}

/// ## Execution context
///
/// Owns everything one run mutates: the cursor, the symbol table,
/// the return addresses and the subroutine marker.
pub struct Runtime<C: Console> {
    pub(super) cursor: Cursor,
    pub(super) vars: Var,
    pub(super) returns: Stack<Address>,
    pub(super) marker: Option<Address>,
    pub(super) console: C,
    tron: bool,
    traced: Option<usize>,
}

impl<C: Console> Runtime<C> {
    pub fn new(program: Program, console: C) -> Runtime<C> {
        Runtime {
            cursor: Cursor::new(program),
            vars: Var::new(),
            returns: Stack::new("CALL STACK OVERFLOW", MAX_CALL_DEPTH),
            marker: None,
            console,
            tron: false,
            traced: None,
        }
    }

    /// `TRON` / `TROFF`
    pub fn trace(&mut self, on: bool) {
        self.tron = on;
        self.traced = None;
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<()> {
        self.vars.clear();
        self.returns.clear();
        self.marker = None;
        self.traced = None;
        self.cursor.jump(0)?;
        match self.program() {
            Ok(()) => Ok(()),
            Err(e) => Err(e.located(self.cursor.line(), self.cursor.position())),
        }
    }

    fn program(&mut self) -> Result<()> {
        self.separators();
        self.cursor.expect(Kind::Program)?;
        self.cursor.name()?;
        self.cursor.expect(Kind::Colon)?;
        self.block()?;
        while !self.cursor.kind().is_end() {
            self.block()?;
        }
        Ok(())
    }

    pub(super) fn separators(&mut self) {
        while self.cursor.kind().is_separator() {
            self.cursor.advance();
        }
    }

    /// One statement and the newlines and comments after it.
    pub(super) fn block(&mut self) -> Result<Flow> {
        let start = self.cursor.position();
        if self.statement()? == Flow::Returned {
            return Ok(Flow::Returned);
        }
        let kind = self.cursor.kind();
        if self.cursor.position() == start && kind.is_terminator() {
            return Err(stray(kind));
        }
        self.separators();
        Ok(Flow::Next)
    }

    fn statement(&mut self) -> Result<Flow> {
        if self.tron {
            self.trace_line()?;
        }
        match self.cursor.kind() {
            Kind::Input => self.r#input()?,
            Kind::Name => {
                self.assignment()?;
            }
            Kind::Print => self.r#print()?,
            Kind::If => return self.r#if(),
            Kind::Else => return self.r#else(),
            Kind::While => return self.r#while(),
            Kind::For => return self.r#for(),
            Kind::Sub => return self.sub(),
            Kind::Call => return self.call(),
            Kind::Return => return self.r#return(),
            Kind::Newline
            | Kind::Comment
            | Kind::End
            | Kind::Endif
            | Kind::Endwhile
            | Kind::Endsub
            | Kind::Endfor => {}
            kind => return Err(error!(UnexpectedToken; &kind.to_string())),
        }
        Ok(Flow::Next)
    }

    fn trace_line(&mut self) -> Result<()> {
        let kind = self.cursor.kind();
        if kind.is_separator() || kind.is_end() {
            return Ok(());
        }
        let line = self.cursor.line();
        if self.traced != Some(line) {
            self.traced = Some(line);
            self.console.trace(line)?;
        }
        Ok(())
    }

    fn r#input(&mut self) -> Result<()> {
        self.cursor.expect(Kind::Input)?;
        let name = self.cursor.name()?;
        let value = self.console.prompt_int(&name)?;
        self.vars.store(&name, value);
        Ok(())
    }

    fn r#print(&mut self) -> Result<()> {
        self.cursor.expect(Kind::Print)?;
        let value = self.expression()?;
        self.console.emit(value)
    }

    pub(super) fn assignment(&mut self) -> Result<Rc<str>> {
        let name = self.cursor.name()?;
        self.cursor.expect(Kind::Assign)?;
        let value = self.expression()?;
        self.vars.store(&name, value);
        Ok(name)
    }
}

fn stray(kind: Kind) -> Error {
    let opener = match kind {
        Kind::Endif => Kind::If,
        Kind::Endwhile => Kind::While,
        Kind::Endfor => Kind::For,
        _ => Kind::Sub,
    };
    error!(UnexpectedToken; &format!("{} WITHOUT {}", kind, opener))
}
