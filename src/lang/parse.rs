use super::{ast::*, token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Rebuilds the statement tree from a flat token sequence.
pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::iter::Peekable<std::slice::Iter<'a, Token>>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter().peekable(),
        };
        let statement = parse.statement()?;
        match parse.next() {
            None => Ok(statement),
            Some(t) => Err(error!(UnexpectedToken; &t.to_string())),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        self.token_stream.peek()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Let) => self.r#let(),
            Some(Token::Print) => Ok(Statement::Print(self.values())),
            Some(Token::Input) => self.r#input(),
            Some(Token::If) => self.r#if(),
            Some(Token::Goto(n)) => Ok(Statement::Goto(*n)),
            Some(Token::Exit) => Ok(Statement::Exit),
            Some(t) => Err(error!(UnexpectedToken; &t.to_string())),
            None => Err(error!(UnexpectedToken; "EMPTY STATEMENT")),
        }
    }

    fn values(&mut self) -> Vec<Value> {
        let mut v: Vec<Value> = vec![];
        while let Some(token) = self.peek() {
            match Value::from_token(token) {
                Some(value) => v.push(value),
                None => break,
            }
            self.next();
        }
        v
    }

    fn r#let(&mut self) -> Result<Statement> {
        let mut assignments: Vec<Assignment> = vec![];
        let mut target: Option<Assignment> = None;
        let mut mode: Option<Mode> = None;
        loop {
            let token = match self.peek() {
                None | Some(Token::Else) => break,
                Some(token) => *token,
            };
            match token {
                Token::FieldSep => {
                    assignments.push(Parser::finish(target.take(), mode.take())?);
                }
                Token::Ident(ident) if target.is_none() => {
                    target = Some(Assignment {
                        target: ident.clone(),
                        steps: vec![],
                    });
                }
                Token::Operator(op) => {
                    if target.is_none() || mode.is_some() {
                        return Err(error!(BadAssignment; &format!("UNEXPECTED {}", op)));
                    }
                    mode = Some(match op {
                        Operator::Equal => Mode::Replace,
                        op if op.is_comparison() => {
                            return Err(error!(IllegalOperation; &format!("{} IN LET", op)))
                        }
                        op => Mode::Compound(*op),
                    });
                }
                Token::Ident(_) | Token::Literal(_) => {
                    let value = Value::from_token(token);
                    match (target.as_mut(), mode.take(), value) {
                        (Some(assignment), Some(mode), Some(value)) => {
                            assignment.steps.push((mode, value))
                        }
                        _ => return Err(error!(BadAssignment; &format!("UNEXPECTED {}", token))),
                    }
                }
                _ => return Err(error!(BadAssignment; &format!("UNEXPECTED {}", token))),
            }
            self.next();
        }
        assignments.push(Parser::finish(target, mode)?);
        Ok(Statement::Let(assignments))
    }

    fn finish(target: Option<Assignment>, mode: Option<Mode>) -> Result<Assignment> {
        match target {
            Some(assignment) if mode.is_none() && !assignment.steps.is_empty() => Ok(assignment),
            Some(assignment) => Err(error!(BadAssignment; assignment.target.name())),
            None => Err(error!(BadAssignment; "EXPECTED IDENTIFIER")),
        }
    }

    fn r#input(&mut self) -> Result<Statement> {
        let prompt = match self.next() {
            Some(Token::Ident(Ident::String(name))) => Value::Var(Ident::String(name.clone())),
            Some(Token::Literal(Literal::String(s))) => Value::String(s.clone()),
            Some(t) => return Err(error!(TypeMismatch; &format!("PROMPT {}", t))),
            None => return Err(error!(UnexpectedToken; "EXPECTED PROMPT")),
        };
        match self.next() {
            Some(Token::Ident(ident)) => Ok(Statement::Input(prompt, ident.clone())),
            Some(t) => Err(error!(UnexpectedToken; &t.to_string())),
            None => Err(error!(UnexpectedToken; "EXPECTED VARIABLE")),
        }
    }

    fn r#if(&mut self) -> Result<Statement> {
        let mut condition: Vec<&Token> = vec![];
        loop {
            match self.next() {
                Some(Token::Then) => break,
                Some(t) => condition.push(t),
                None => return Err(error!(UnexpectedToken; "EXPECTED THEN")),
            }
        }
        let predicate = Parser::predicate(&condition)?;
        let then = Box::new(self.statement()?);
        let otherwise = match self.peek() {
            Some(Token::Else) => {
                self.next();
                Some(Box::new(self.statement()?))
            }
            _ => None,
        };
        Ok(Statement::If(predicate, then, otherwise))
    }

    fn predicate(condition: &[&Token]) -> Result<Predicate> {
        if condition.len() < 3 {
            return Err(error!(MissingOperand));
        }
        let comparator = match condition[1] {
            Token::Operator(op) if op.is_comparison() => *op,
            t => return Err(error!(NotAComparison; &t.to_string())),
        };
        let operand = |token: &Token| match Value::from_token(token) {
            Some(value) => Ok(value),
            None => Err(error!(MissingOperand; &token.to_string())),
        };
        let lhs = operand(condition[0])?;
        let rhs = operand(condition[2])?;
        if let Some(extra) = condition.get(3) {
            return Err(error!(UnexpectedToken; &extra.to_string()));
        }
        Ok(Predicate {
            lhs,
            comparator,
            rhs,
        })
    }
}
