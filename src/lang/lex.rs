use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Anything that can hand the machine one token at a time.
/// Once `Eof` has been produced it must keep producing `Eof` (or fail).
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token>;
}

pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(s);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        let eof = token.kind() == Kind::Eof;
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}

fn is_tiny_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

fn is_tiny_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_tiny_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn line(&mut self) -> &mut usize;

    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !is_tiny_digit(pk) {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        Token::with_text(Kind::Number, &s)
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !is_tiny_alphabetic(pk) && !is_tiny_digit(pk) && pk != '_' {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        match Kind::from_keyword(&s) {
            Some(kind) => Token::new(kind),
            None => Token::with_text(Kind::Name, &s),
        }
    }

    fn comment(&mut self) -> Result<Token> {
        let start = *self.line();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('}') => return Ok(Token::new(Kind::Comment)),
                Some('\n') => *self.line() += 1,
                Some(_) => {}
                None => return Err(error!(SyntaxError, start; "UNTERMINATED COMMENT")),
            }
        }
    }

    /// Operators and punctuation, including the two-character forms.
    fn minutia(&mut self) -> Result<Token> {
        let ch = match self.chars().next() {
            Some(ch) => ch,
            None => return Err(error!(InternalError; "SCANNED PAST END OF INPUT")),
        };
        let pk = self.chars().peek().copied();
        let (kind, pair) = match (ch, pk) {
            ('<', Some('=')) => (Kind::LessEqual, true),
            ('<', Some('>')) => (Kind::NotEqual, true),
            ('<', _) => (Kind::Less, false),
            ('>', Some('=')) => (Kind::GreaterEqual, true),
            ('>', _) => (Kind::Greater, false),
            (':', Some('=')) => (Kind::Assign, true),
            (':', _) => (Kind::Colon, false),
            ('=', _) => (Kind::Equal, false),
            ('+', _) => (Kind::Plus, false),
            ('-', _) => (Kind::Minus, false),
            ('*', _) => (Kind::Times, false),
            ('/', _) => (Kind::Divide, false),
            ('%', _) => (Kind::Mod, false),
            ('(', _) => (Kind::LParen, false),
            (')', _) => (Kind::RParen, false),
            (',', _) => (Kind::Comma, false),
            ('"', _) => (Kind::Quote, false),
            _ => {
                let line = *self.line();
                return Err(error!(SyntaxError, line; &format!("UNRECOGNIZED CHARACTER {:?}", ch)));
            }
        };
        if pair {
            self.chars().next();
        }
        Ok(Token::new(kind))
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Tokenizers<'a> for Lexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
    fn line(&mut self) -> &mut usize {
        &mut self.line
    }
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            chars: s.chars().peekable(),
            line: 1,
        }
    }
}

impl<'a> TokenSource for Lexer<'a> {
    fn next_token(&mut self) -> Result<Token> {
        while let Some(&pk) = self.chars.peek() {
            if !is_tiny_whitespace(pk) {
                break;
            }
            self.chars.next();
        }
        let line = self.line;
        let pk = match self.chars.peek() {
            Some(&pk) => pk,
            None => return Ok(Token::new(Kind::Eof).on_line(line)),
        };
        let token = if pk == '\n' {
            self.chars.next();
            self.line += 1;
            Token::new(Kind::Newline)
        } else if is_tiny_digit(pk) {
            self.number()
        } else if is_tiny_alphabetic(pk) {
            self.alphabetic()
        } else if pk == '{' {
            self.comment()?
        } else {
            self.minutia()?
        };
        Ok(token.on_line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<Kind> {
        lex(s).unwrap().iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_relational_pairs() {
        use Kind::*;
        assert_eq!(
            kinds("1<=2<>3>=4<5>6=7"),
            vec![
                Number, LessEqual, Number, NotEqual, Number, GreaterEqual, Number, Less, Number,
                Greater, Number, Equal, Number, Eof
            ]
        );
    }

    #[test]
    fn test_assign_versus_colon() {
        use Kind::*;
        assert_eq!(kinds("x := 1:"), vec![Name, Assign, Number, Colon, Eof]);
    }

    #[test]
    fn test_keywords_ignore_case() {
        use Kind::*;
        assert_eq!(
            kinds("WHILE While wHiLe endWhile"),
            vec![While, While, While, Endwhile, Eof]
        );
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind(), Kind::Name);
        assert_eq!(lexer.next_token().unwrap().kind(), Kind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind(), Kind::Eof);
    }
}
