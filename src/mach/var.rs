use super::Val;
use crate::error;
use crate::lang::ast::Value;
use crate::lang::{Error, Ident};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Integer and string variables live in separate maps. The sigil on
/// the identifier decides which one; unset names read as `0` or `""`.

#[derive(Debug, Default)]
pub struct Var {
    ints: HashMap<String, i64>,
    strings: HashMap<String, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.ints.clear();
        self.strings.clear();
    }

    pub fn fetch(&self, ident: &Ident) -> Val {
        match ident {
            Ident::Integer(name) => Val::Integer(self.fetch_integer(name)),
            Ident::String(name) => Val::String(self.fetch_string(name).to_string()),
        }
    }

    pub fn fetch_integer(&self, name: &str) -> i64 {
        self.ints.get(name).copied().unwrap_or(0)
    }

    pub fn fetch_string(&self, name: &str) -> &str {
        self.strings.get(name).map(|s| s.as_str()).unwrap_or("")
    }

    /// Resolves a constant or variable to its current value.
    pub fn resolve(&self, value: &Value) -> Val {
        match value {
            Value::Integer(n) => Val::Integer(*n),
            Value::String(s) => Val::String(s.clone()),
            Value::Var(ident) => self.fetch(ident),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        match (ident, value) {
            (Ident::Integer(name), Val::Integer(n)) => {
                self.ints.insert(name.clone(), n);
                Ok(())
            }
            (Ident::String(name), Val::String(s)) => {
                self.strings.insert(name.clone(), s);
                Ok(())
            }
            (ident, _) => Err(error!(TypeMismatch; ident.name())),
        }
    }

    /// Both maps, sorted by name, for display.
    pub fn snapshot(&self) -> (BTreeMap<String, String>, BTreeMap<String, i64>) {
        let strings = self
            .strings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let ints = self.ints.iter().map(|(k, v)| (k.clone(), *v)).collect();
        (strings, ints)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (strings, ints) = self.snapshot();
        write!(f, "Strings: {:?} Integers: {:?}", strings, ints)
    }
}
