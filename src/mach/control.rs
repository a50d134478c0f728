//! Block-structured statements.
//!
//! Nothing here builds a tree. Branches skip tokens until they reach
//! the keyword they are looking for, and loops re-enter by jumping the
//! cursor back to a saved marker.

use super::runtime::Flow;
use super::{Console, Runtime};
use crate::error;
use crate::lang::{Error, Kind};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

macro_rules! propagate_return {
    ($flow:expr) => {
        if $flow == Flow::Returned {
            return Ok(Flow::Returned);
        }
    };
}

impl<C: Console> Runtime<C> {
    pub(super) fn r#if(&mut self) -> Result<Flow> {
        self.cursor.expect(Kind::If)?;
        let condition = self.conditional()?;
        self.cursor.expect(Kind::Colon)?;
        if condition == 0 {
            // Linear scan; a nested IF in the skipped branch is not counted.
            self.skip_to(&[Kind::Else, Kind::Endif]);
            propagate_return!(self.r#else()?);
        } else {
            while !self.at(&[Kind::Endif, Kind::Else]) {
                propagate_return!(self.block()?);
                if self.cursor.kind() == Kind::If {
                    propagate_return!(self.r#if()?);
                }
                if self.cursor.kind() == Kind::Else {
                    self.skip_to(&[Kind::Endif, Kind::If]);
                }
            }
        }
        if self.cursor.kind().is_end() {
            return Err(error!(UnterminatedBlock; "IF WITHOUT ENDIF"));
        }
        self.cursor.expect(Kind::Endif)?;
        Ok(Flow::Next)
    }

    /// Runs an `ELSE :` body up to, but not including, its `ENDIF`.
    pub(super) fn r#else(&mut self) -> Result<Flow> {
        if self.cursor.kind() != Kind::Else {
            return Ok(Flow::Next);
        }
        self.cursor.expect(Kind::Else)?;
        self.cursor.expect(Kind::Colon)?;
        while !self.at(&[Kind::Endif]) {
            propagate_return!(self.block()?);
        }
        Ok(Flow::Next)
    }

    pub(super) fn r#while(&mut self) -> Result<Flow> {
        self.cursor.expect(Kind::While)?;
        let condition_marker = self.cursor.position();
        let mut condition = self.conditional()?;
        self.cursor.expect(Kind::Colon)?;
        let mut loop_end = None;
        while condition != 0 {
            if self.cursor.kind() != Kind::Endwhile {
                propagate_return!(self.block()?);
            }
            match self.cursor.kind() {
                Kind::Endwhile => {
                    loop_end = Some(self.cursor.position());
                    self.cursor.jump(condition_marker)?;
                    condition = self.conditional()?;
                    self.cursor.expect(Kind::Colon)?;
                }
                Kind::While => {
                    propagate_return!(self.r#while()?);
                }
                kind if kind.is_end() => {
                    return Err(error!(UnterminatedBlock; "WHILE WITHOUT ENDWHILE"));
                }
                _ => {}
            }
        }
        match loop_end {
            Some(addr) => self.cursor.jump(addr)?,
            None => self.skip_block(Kind::While, Kind::Endwhile)?,
        }
        self.cursor.expect(Kind::Endwhile)?;
        Ok(Flow::Next)
    }

    pub(super) fn r#for(&mut self) -> Result<Flow> {
        self.cursor.expect(Kind::For)?;
        let (name, count) = self.for_range()?;
        self.cursor.expect(Kind::Colon)?;
        self.separators();
        let body = self.cursor.position();
        let mut loop_end = None;
        for _ in 0..count.max(0) {
            while self.cursor.kind() != Kind::Endfor {
                if self.cursor.kind().is_end() {
                    return Err(error!(UnterminatedBlock; "FOR WITHOUT ENDFOR"));
                }
                propagate_return!(self.block()?);
            }
            loop_end = Some(self.cursor.position());
            let value = self.vars.fetch(&name)?;
            self.vars.store(&name, value.wrapping_add(1));
            self.cursor.jump(body)?;
        }
        match loop_end {
            Some(addr) => self.cursor.jump(addr)?,
            None => self.skip_block(Kind::For, Kind::Endfor)?,
        }
        self.cursor.expect(Kind::Endfor)?;
        Ok(Flow::Next)
    }

    /// `NAME := start TO bound`. The pass count is fixed here, before
    /// the body can touch the loop variable.
    fn for_range(&mut self) -> Result<(Rc<str>, i32)> {
        let name = self.assignment()?;
        let start = self.vars.fetch(&name)?;
        self.cursor.expect(Kind::To)?;
        let bound = self.expression()?;
        Ok((name, bound.wrapping_sub(start)))
    }

    pub(super) fn sub(&mut self) -> Result<Flow> {
        self.cursor.expect(Kind::Sub)?;
        self.cursor.name()?;
        self.cursor.expect(Kind::Colon)?;
        self.marker = Some(self.cursor.position());
        self.skip_to(&[Kind::Endsub]);
        if self.cursor.kind().is_end() {
            return Err(error!(UnterminatedBlock; "SUB WITHOUT ENDSUB"));
        }
        self.cursor.expect(Kind::Endsub)?;
        self.separators();
        if self.closes_block() {
            return Ok(Flow::Next);
        }
        self.block()
    }

    pub(super) fn call(&mut self) -> Result<Flow> {
        self.cursor.expect(Kind::Call)?;
        let name = match self.cursor.kind() {
            Kind::Name => Some(self.cursor.name()?),
            _ => None,
        };
        let entry = match self.marker {
            Some(entry) => entry,
            None => {
                let msg = match name {
                    Some(name) => format!("NO SUBROUTINE {}", name),
                    None => "NO SUBROUTINE".to_string(),
                };
                return Err(error!(UnknownSymbol; &msg));
            }
        };
        self.returns.push(self.cursor.position())?;
        self.cursor.jump(entry)?;
        loop {
            match self.cursor.kind() {
                Kind::Endsub => {
                    let addr = self.returns.pop()?;
                    self.cursor.jump(addr)?;
                    break;
                }
                kind if kind.is_end() => {
                    return Err(error!(UnterminatedBlock; "SUB WITHOUT ENDSUB"));
                }
                _ => {
                    if self.block()? == Flow::Returned {
                        break;
                    }
                }
            }
        }
        Ok(Flow::Next)
    }

    pub(super) fn r#return(&mut self) -> Result<Flow> {
        if self.returns.is_empty() {
            return Err(error!(EmptyCallStack));
        }
        self.cursor.expect(Kind::Return)?;
        let addr = self.returns.pop()?;
        self.cursor.jump(addr)?;
        Ok(Flow::Returned)
    }

    fn at(&self, kinds: &[Kind]) -> bool {
        let kind = self.cursor.kind();
        kind.is_end() || kinds.contains(&kind)
    }

    fn closes_block(&self) -> bool {
        let kind = self.cursor.kind();
        kind.is_end() || kind.is_terminator() || kind == Kind::Else
    }

    /// Steps over tokens without executing them. Stops at any of
    /// `kinds` or the end of the program, whichever comes first.
    fn skip_to(&mut self, kinds: &[Kind]) {
        while !self.at(kinds) {
            self.cursor.advance();
        }
    }

    /// Steps to the `close` that matches an already consumed `open`.
    fn skip_block(&mut self, open: Kind, close: Kind) -> Result<()> {
        let mut depth = 0;
        loop {
            let kind = self.cursor.kind();
            if kind.is_end() {
                return Err(error!(UnterminatedBlock; &format!("{} WITHOUT {}", open, close)));
            }
            if kind == close {
                if depth == 0 {
                    return Ok(());
                }
                depth -= 1;
            } else if kind == open {
                depth += 1;
            }
            self.cursor.advance();
        }
    }
}
