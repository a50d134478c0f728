use super::{Console, Runtime};
use crate::error;
use crate::lang::{Error, Kind};

type Result<T> = std::result::Result<T, Error>;

impl<C: Console> Runtime<C> {
    /// An expression, optionally compared with exactly one relational
    /// operator. A comparison yields 1 or 0.
    pub(super) fn conditional(&mut self) -> Result<i32> {
        let lhs = self.expression()?;
        let compare: fn(&i32, &i32) -> bool = match self.cursor.kind() {
            Kind::Less => i32::lt,
            Kind::Greater => i32::gt,
            Kind::LessEqual => i32::le,
            Kind::GreaterEqual => i32::ge,
            Kind::Equal => i32::eq,
            Kind::NotEqual => i32::ne,
            _ => return Ok(lhs),
        };
        self.cursor.advance();
        let rhs = self.expression()?;
        Ok(compare(&lhs, &rhs) as i32)
    }

    pub(super) fn expression(&mut self) -> Result<i32> {
        let mut value = self.term()?;
        loop {
            match self.cursor.kind() {
                Kind::Plus => {
                    self.cursor.advance();
                    value = value.wrapping_add(self.term()?);
                }
                Kind::Minus => {
                    self.cursor.advance();
                    value = value.wrapping_sub(self.term()?);
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<i32> {
        let mut value = self.unary()?;
        loop {
            let op = self.cursor.kind();
            match op {
                Kind::Times => {
                    self.cursor.advance();
                    value = value.wrapping_mul(self.unary()?);
                }
                Kind::Divide | Kind::Mod => {
                    let (line, addr) = (self.cursor.line(), self.cursor.position());
                    self.cursor.advance();
                    let rhs = self.unary()?;
                    if rhs == 0 {
                        return Err(error!(DivisionByZero).located(line, addr));
                    }
                    value = if op == Kind::Divide {
                        value.wrapping_div(rhs)
                    } else {
                        value.wrapping_rem(rhs)
                    };
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<i32> {
        if self.cursor.kind() == Kind::Minus {
            self.cursor.advance();
            return Ok(self.factor()?.wrapping_neg());
        }
        self.factor()
    }

    fn factor(&mut self) -> Result<i32> {
        let (line, addr) = (self.cursor.line(), self.cursor.position());
        match self.cursor.kind() {
            Kind::Number => {
                let token = self.cursor.expect(Kind::Number)?;
                let text = token.text().map(|t| t.as_ref()).unwrap_or_default();
                match text.parse::<i32>() {
                    Ok(value) => Ok(value),
                    Err(_) => Err(error!(Overflow; text).located(line, addr)),
                }
            }
            Kind::Name => {
                let name = self.cursor.name()?;
                self.vars.fetch(&name).map_err(|e| e.located(line, addr))
            }
            Kind::LParen => {
                self.cursor.advance();
                let value = self.expression()?;
                self.cursor.expect(Kind::RParen)?;
                Ok(value)
            }
            kind => Err(error!(SyntaxError;
                &format!("EXPECTED NUMBER, NAME OR (, FOUND {}", kind))),
        }
    }
}
