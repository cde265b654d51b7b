use super::token::{Ident, Literal, Operator, Token};
use super::LineNumber;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Vec<Assignment>),
    Print(Vec<Value>),
    Input(Value, Ident),
    If(Predicate, Box<Statement>, Option<Box<Statement>>),
    Goto(LineNumber),
    Exit,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    String(String),
    Var(Ident),
}

impl Value {
    pub fn from_token(token: &Token) -> Option<Value> {
        match token {
            Token::Ident(ident) => Some(Value::Var(ident.clone())),
            Token::Literal(Literal::Integer(n)) => Some(Value::Integer(*n)),
            Token::Literal(Literal::String(s)) => Some(Value::String(s.clone())),
            _ => None,
        }
    }
}

/// How a value is folded into the target of a `LET`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Replace,
    Compound(Operator),
}

/// One `target op value [op value ...]` group of a `LET`.
#[derive(Debug, PartialEq, Clone)]
pub struct Assignment {
    pub target: Ident,
    pub steps: Vec<(Mode, Value)>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Predicate {
    pub lhs: Value,
    pub comparator: Operator,
    pub rhs: Value,
}
