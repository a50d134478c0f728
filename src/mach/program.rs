use super::Address;
use crate::error;
use crate::lang::{lex, Error, Kind, Token, TokenSource};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Materialized token sequence
///
/// Always ends with an `Eof` token so a cursor can never step past it.

#[derive(Debug, Clone)]
pub struct Program {
    tokens: Rc<[Token]>,
}

impl Program {
    pub fn load<T: TokenSource>(source: &mut T) -> Result<Program> {
        let mut tokens = vec![];
        loop {
            let token = source.next_token()?;
            let eof = token.kind() == Kind::Eof;
            tokens.push(token);
            if eof {
                return Ok(Program::from(tokens));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    pub fn get(&self, addr: Address) -> Result<&Token> {
        match self.tokens.get(addr) {
            Some(token) => Ok(token),
            None => Err(error!(InternalError; &format!("NO TOKEN AT {}", addr))),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for Program {
    fn from(mut tokens: Vec<Token>) -> Program {
        match tokens.last().map(|t| (t.kind(), t.line())) {
            Some((Kind::Eof, _)) => {}
            Some((_, line)) => tokens.push(Token::new(Kind::Eof).on_line(line)),
            None => tokens.push(Token::new(Kind::Eof)),
        }
        Program {
            tokens: tokens.into(),
        }
    }
}

impl std::str::FromStr for Program {
    type Err = Error;
    fn from_str(s: &str) -> Result<Program> {
        Ok(Program::from(lex(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lexer;

    #[test]
    fn test_eof_appended() {
        let program = Program::from(vec![Token::name("x").on_line(3)]);
        assert_eq!(program.len(), 2);
        assert_eq!(program.get(1).unwrap().kind(), Kind::Eof);
        assert_eq!(program.get(1).unwrap().line(), 3);
    }

    #[test]
    fn test_load_stops_at_eof() {
        let program = Program::load(&mut Lexer::new("print 1\nend")).unwrap();
        let kinds: Vec<Kind> = program.tokens().iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![Kind::Print, Kind::Number, Kind::Newline, Kind::End, Kind::Eof]
        );
        assert_eq!(program.get(3).unwrap().line(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let program = Program::from(vec![]);
        assert!(program.is_empty());
        assert!(program.get(1).is_err());
    }
}
