use std::fmt;

/// A resolved value: a constant, or the current contents of a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    String(String),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
