use super::{Console, Operation, Val, Var};
use crate::error;
use crate::lang::ast::{Assignment, Predicate, Statement, Value};
use crate::lang::token::Token;
use crate::lang::{parse, Error, Ident, LineNumber};
use std::io;

type Result<T> = std::result::Result<T, Error>;

/// Flow change requested by a statement.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Signal {
    Goto(LineNumber),
    Terminate,
}

/// Executes one tokenized statement.
pub fn execute<C: Console + ?Sized>(
    tokens: &[Token],
    vars: &mut Var,
    console: &mut C,
) -> Result<Option<Signal>> {
    let statement = parse(tokens)?;
    Exec::new(vars, console).statement(&statement)
}

pub struct Exec<'a, C: Console + ?Sized> {
    vars: &'a mut Var,
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> Exec<'a, C> {
    pub fn new(vars: &'a mut Var, console: &'a mut C) -> Exec<'a, C> {
        Exec { vars, console }
    }

    pub fn statement(&mut self, statement: &Statement) -> Result<Option<Signal>> {
        log::trace!("{:?}", statement);
        match statement {
            Statement::Let(assignments) => self.r#let(assignments),
            Statement::Print(values) => self.r#print(values),
            Statement::Input(prompt, ident) => self.r#input(prompt, ident),
            Statement::If(predicate, then, otherwise) => {
                if self.predicate(predicate)? {
                    self.statement(then)
                } else if let Some(otherwise) = otherwise {
                    self.statement(otherwise)
                } else {
                    Ok(None)
                }
            }
            Statement::Goto(n) => Ok(Some(Signal::Goto(*n))),
            Statement::Exit => Ok(Some(Signal::Terminate)),
        }
    }

    fn r#let(&mut self, assignments: &[Assignment]) -> Result<Option<Signal>> {
        for assignment in assignments {
            let mut val = self.vars.fetch(&assignment.target);
            for (mode, value) in &assignment.steps {
                let rhs = match value {
                    Value::Var(ident) if *ident == assignment.target => val.clone(),
                    value => self.vars.resolve(value),
                };
                val = Operation::assign(*mode, val, rhs)?;
            }
            self.vars.store(&assignment.target, val)?;
        }
        Ok(None)
    }

    fn r#print(&mut self, values: &[Value]) -> Result<Option<Signal>> {
        let mut s = String::new();
        for value in values {
            s.push_str(&self.vars.resolve(value).to_string());
        }
        s.push('\n');
        match self.console.print(&s) {
            Ok(()) => Ok(None),
            Err(e) => Err(error!(IoError; &e.to_string())),
        }
    }

    fn r#input(&mut self, prompt: &Value, ident: &Ident) -> Result<Option<Signal>> {
        let prompt = self.vars.resolve(prompt).to_string();
        let reply = match ident {
            Ident::String(_) => self.console.read_line(&prompt).map(Val::String),
            Ident::Integer(_) => self.console.read_int(&prompt).map(Val::Integer),
        };
        match reply {
            Ok(val) => {
                self.vars.store(ident, val)?;
                Ok(None)
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(error!(Break)),
            Err(e) => Err(error!(InputPastEnd; &e.to_string())),
        }
    }

    fn predicate(&self, predicate: &Predicate) -> Result<bool> {
        let lhs = self.vars.resolve(&predicate.lhs);
        let rhs = self.vars.resolve(&predicate.rhs);
        Operation::compare(&lhs, predicate.comparator, &rhs)
    }
}
