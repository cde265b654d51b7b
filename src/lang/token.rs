pub use super::ident::Ident;
use super::LineNumber;

use std::collections::HashMap;

thread_local!(
    static STRING_TO_OPERATOR: HashMap<&'static str, Operator> = Operator::ALL
        .iter()
        .map(|op| (op.symbol(), *op))
        .chain(Some(("==", Operator::Equal)))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Let,
    Print,
    Input,
    Exit,
    Goto(LineNumber),
    If,
    Then,
    Else,
    FieldSep,
    Operator(Operator),
    Ident(Ident),
    Literal(Literal),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Exit => write!(f, "END"),
            Goto(n) => write!(f, "GOTO {}", n),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            Else => write!(f, "ELSE"),
            FieldSep => write!(f, ";"),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
}

impl Operator {
    const ALL: [Operator; 13] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Greater,
        Operator::Less,
        Operator::GreaterEqual,
        Operator::LessEqual,
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::And,
        Operator::Or,
        Operator::Xor,
    ];

    pub fn from_string(s: &str) -> Option<Operator> {
        STRING_TO_OPERATOR.with(|sto| sto.get(s).copied())
    }

    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Greater | Less | GreaterEqual | LessEqual => true,
            Plus | Minus | Multiply | Divide | And | Or | Xor => false,
        }
    }

    pub fn symbol(&self) -> &'static str {
        use Operator::*;
        match self {
            Equal => "=",
            NotEqual => "!=",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            And => "&",
            Or => "|",
            Xor => "^",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
