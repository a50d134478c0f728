pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    position: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .at_position($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            position: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_located(&self) -> bool {
        self.position.is_some()
    }

    pub fn in_line(self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn at_position(self, position: usize) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            position: Some(position),
            ..self
        }
    }

    /// Fills in where execution stopped unless a more precise
    /// location was recorded when the error was raised.
    pub fn located(self, line: usize, position: usize) -> Error {
        if self.is_located() {
            return self;
        }
        Error {
            line: self.line.or(Some(line)),
            position: Some(position),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    EmptyCallStack = 3,
    Overflow = 6,
    OutOfMemory = 7,
    DivisionByZero = 11,
    UnknownSymbol = 18,
    UnexpectedToken = 22,
    UnterminatedBlock = 26,
    InputError = 35,
    InternalError = 51,
    FileNotFound = 53,
    InputPastEnd = 62,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX ERROR",
            EmptyCallStack => "RETURN WITHOUT CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            DivisionByZero => "DIVISION BY ZERO",
            UnknownSymbol => "UNKNOWN SYMBOL",
            UnexpectedToken => "UNEXPECTED TOKEN",
            UnterminatedBlock => "UNTERMINATED BLOCK",
            InputError => "INPUT ERROR",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            InputPastEnd => "INPUT PAST END",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" LINE {}", line));
        }
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT {}", position));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "{} IN{}", self.code, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bare_code() {
        assert_eq!(error!(DivisionByZero).to_string(), "DIVISION BY ZERO");
    }

    #[test]
    fn test_display_with_location_and_message() {
        let e = error!(SyntaxError, 3, ..17; "EXPECTED :, FOUND NEWLINE");
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN LINE 3 AT 17; EXPECTED :, FOUND NEWLINE"
        );
    }

    #[test]
    fn test_located_keeps_first_location() {
        let e = error!(UnknownSymbol; "x").located(4, 20).located(9, 90);
        assert_eq!(e.line(), Some(4));
        assert_eq!(e.position(), Some(20));
        assert_eq!(e.code(), ErrorCode::UnknownSymbol);
    }
}
