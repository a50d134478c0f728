use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    Number,
    Name,
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Assign,
    Colon,
    LParen,
    RParen,
    Comma,
    Quote,
    Program,
    End,
    If,
    Else,
    Endif,
    While,
    Endwhile,
    For,
    To,
    Endfor,
    Sub,
    Endsub,
    Call,
    Return,
    Print,
    Input,
    Then,
    Do,
    And,
    Or,
    Not,
    Var,
    Newline,
    Comment,
    Eof,
}

impl Kind {
    pub fn from_keyword(s: &str) -> Option<Kind> {
        use Kind::*;
        let kind = match s.to_ascii_lowercase().as_str() {
            "program" => Program,
            "end" => End,
            "if" => If,
            "else" => Else,
            "endif" => Endif,
            "while" => While,
            "endwhile" => Endwhile,
            "for" => For,
            "to" => To,
            "endfor" => Endfor,
            "sub" => Sub,
            "endsub" => Endsub,
            "call" => Call,
            "return" => Return,
            "print" => Print,
            "input" => Input,
            "then" => Then,
            "do" => Do,
            "and" => And,
            "or" => Or,
            "not" => Not,
            "var" => Var,
            _ => return None,
        };
        Some(kind)
    }

    /// Execution stops here: either the `end` keyword or the scanner's
    /// end-of-program marker.
    pub fn is_end(self) -> bool {
        self == Kind::End || self == Kind::Eof
    }

    pub fn is_separator(self) -> bool {
        self == Kind::Newline || self == Kind::Comment
    }

    /// Closing keyword of a block that only its owning construct consumes.
    pub fn is_terminator(self) -> bool {
        use Kind::*;
        match self {
            Endif | Endwhile | Endfor | Endsub => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Number => write!(f, "NUMBER"),
            Name => write!(f, "NAME"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Times => write!(f, "*"),
            Divide => write!(f, "/"),
            Mod => write!(f, "%"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Assign => write!(f, ":="),
            Colon => write!(f, ":"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Quote => write!(f, "\""),
            Program => write!(f, "PROGRAM"),
            End => write!(f, "END"),
            If => write!(f, "IF"),
            Else => write!(f, "ELSE"),
            Endif => write!(f, "ENDIF"),
            While => write!(f, "WHILE"),
            Endwhile => write!(f, "ENDWHILE"),
            For => write!(f, "FOR"),
            To => write!(f, "TO"),
            Endfor => write!(f, "ENDFOR"),
            Sub => write!(f, "SUB"),
            Endsub => write!(f, "ENDSUB"),
            Call => write!(f, "CALL"),
            Return => write!(f, "RETURN"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Then => write!(f, "THEN"),
            Do => write!(f, "DO"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
            Var => write!(f, "VAR"),
            Newline => write!(f, "NEWLINE"),
            Comment => write!(f, "COMMENT"),
            Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    kind: Kind,
    text: Option<Rc<str>>,
    line: usize,
}

impl Token {
    pub fn new(kind: Kind) -> Token {
        Token {
            kind,
            text: None,
            line: 1,
        }
    }

    pub fn with_text(kind: Kind, text: &str) -> Token {
        Token {
            kind,
            text: Some(text.into()),
            line: 1,
        }
    }

    pub fn number(n: u32) -> Token {
        Token::with_text(Kind::Number, &n.to_string())
    }

    pub fn name(s: &str) -> Token {
        Token::with_text(Kind::Name, s)
    }

    pub fn on_line(self, line: usize) -> Token {
        Token { line, ..self }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn text(&self) -> Option<&Rc<str>> {
        self.text.as_ref()
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.text {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(Kind::from_keyword("ENDWHILE"), Some(Kind::Endwhile));
        assert_eq!(Kind::from_keyword("EndIf"), Some(Kind::Endif));
        assert_eq!(Kind::from_keyword("then"), Some(Kind::Then));
        assert_eq!(Kind::from_keyword("PICKLES"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::name("total").to_string(), "total");
        assert_eq!(Token::new(Kind::LessEqual).to_string(), "<=");
        assert_eq!(Token::number(42).to_string(), "42");
    }
}
