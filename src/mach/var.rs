use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One flat namespace for the whole run. Subroutines and loops
/// share it; there is no declaration step.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<i32> {
        self.vars.get(var_name).copied()
    }

    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(UnknownSymbol; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_then_fetch() {
        let mut var = Var::new();
        let x: Rc<str> = "x".into();
        var.store(&x, 7);
        assert_eq!(var.fetch("x").unwrap(), 7);
        var.store(&x, -2);
        assert_eq!(var.get("x"), Some(-2));
        assert_eq!(var.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut var = Var::new();
        var.store(&"Total".into(), 1);
        assert_eq!(var.fetch("total").unwrap_err().code(), ErrorCode::UnknownSymbol);
    }
}
