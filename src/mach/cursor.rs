use super::{Address, Program};
use crate::error;
use crate::lang::{Error, Kind, Token};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program counter
///
/// Every move through the program goes through here. `current` is
/// always the token at `position`; positions move forward one token
/// at a time or are reassigned by `jump`.

#[derive(Debug, Clone)]
pub struct Cursor {
    program: Program,
    position: Address,
    current: Token,
}

impl Cursor {
    pub fn new(program: Program) -> Cursor {
        let current = match program.tokens().first() {
            Some(token) => token.clone(),
            None => Token::new(Kind::Eof),
        };
        Cursor {
            program,
            position: 0,
            current,
        }
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn kind(&self) -> Kind {
        self.current.kind()
    }

    pub fn position(&self) -> Address {
        self.position
    }

    pub fn line(&self) -> usize {
        self.current.line()
    }

    /// Steps one token forward. Stays on the final `Eof`.
    pub fn advance(&mut self) {
        if self.position + 1 < self.program.len() {
            self.position += 1;
            self.current = self.program.tokens()[self.position].clone();
        }
    }

    pub fn expect(&mut self, kind: Kind) -> Result<Token> {
        if self.current.kind() != kind {
            return Err(error!(SyntaxError, self.line(), ..self.position;
                &format!("EXPECTED {}, FOUND {}", kind, self.current.kind())));
        }
        let token = self.current.clone();
        self.advance();
        Ok(token)
    }

    pub fn name(&mut self) -> Result<Rc<str>> {
        let token = self.expect(Kind::Name)?;
        match token.text() {
            Some(text) => Ok(text.clone()),
            None => Err(error!(InternalError; "NAME WITHOUT TEXT")),
        }
    }

    pub fn jump(&mut self, addr: Address) -> Result<()> {
        self.current = self.program.get(addr)?.clone();
        self.position = addr;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(s: &str) -> Cursor {
        Cursor::new(s.parse().unwrap())
    }

    #[test]
    fn test_expect_advances() {
        let mut c = cursor("x := 5");
        assert_eq!(c.name().unwrap().as_ref(), "x");
        assert_eq!(c.position(), 1);
        c.expect(Kind::Assign).unwrap();
        assert_eq!(c.kind(), Kind::Number);
    }

    #[test]
    fn test_expect_mismatch_reports_both_kinds() {
        let mut c = cursor("if x");
        let e = c.expect(Kind::While).unwrap_err();
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN LINE 1 AT 0; EXPECTED WHILE, FOUND IF"
        );
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn test_advance_clamps_at_eof() {
        let mut c = cursor("end");
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.kind(), Kind::Eof);
        assert_eq!(c.position(), 1);
    }

    #[test]
    fn test_jump_refreshes_current() {
        let mut c = cursor("print 1\nprint 2");
        c.jump(4).unwrap();
        assert_eq!(c.current().text().map(|t| t.as_ref()), Some("2"));
        assert!(c.jump(99).is_err());
        assert_eq!(c.position(), 4);
    }
}
