use super::Val;
use crate::error;
use crate::lang::ast::Mode;
use crate::lang::token::Operator;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Folds `rhs` into the current value of a `LET` target.
    pub fn assign(mode: Mode, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        let op = match mode {
            Mode::Replace => {
                return if lhs.is_string() == rhs.is_string() {
                    Ok(rhs)
                } else {
                    Err(error!(TypeMismatch))
                }
            }
            Mode::Compound(op) => op,
        };
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::integer(lhs, rhs, i64::checked_sub, "-"),
            Multiply => Operation::integer(lhs, rhs, i64::checked_mul, "*"),
            Divide => Operation::divide(lhs, rhs),
            And => Operation::integer(lhs, rhs, |l, r| Some(l & r), "&"),
            Or => Operation::integer(lhs, rhs, |l, r| Some(l | r), "|"),
            Xor => Operation::integer(lhs, rhs, |l, r| Some(l ^ r), "^"),
            Equal | NotEqual | Greater | Less | GreaterEqual | LessEqual => {
                Err(error!(IllegalOperation; op.symbol()))
            }
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            String(l) => match rhs {
                String(r) => Ok(String(l + &r)),
                _ => Err(error!(TypeMismatch)),
            },
            Integer(l) => match rhs {
                Integer(r) => match l.checked_add(r) {
                    Some(i) => Ok(Integer(i)),
                    None => Err(error!(Overflow)),
                },
                _ => Err(error!(TypeMismatch)),
            },
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => {
                    if r == 0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Err(error!(Overflow))
                    }
                }
            },
            (String(_), _) => Err(error!(IllegalOperation; "/")),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn integer<F>(lhs: Val, rhs: Val, f: F, symbol: &str) -> Result<Val>
    where
        F: Fn(i64, i64) -> Option<i64>,
    {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match f(l, r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (String(_), _) => Err(error!(IllegalOperation; symbol)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Evaluates an `IF` condition. Values of the same type compare
    /// naturally. When one side is a string and the other an integer,
    /// the string is replaced by its length in characters.
    pub fn compare(lhs: &Val, comparator: Operator, rhs: &Val) -> Result<bool> {
        use std::cmp::Ordering;
        use Val::*;
        let ordering = match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.cmp(r),
            (String(l), String(r)) => l.cmp(r),
            (Integer(l), String(r)) => l.cmp(&(r.chars().count() as i64)),
            (String(l), Integer(r)) => (l.chars().count() as i64).cmp(r),
        };
        use Operator::*;
        match comparator {
            Equal => Ok(ordering == Ordering::Equal),
            NotEqual => Ok(ordering != Ordering::Equal),
            Greater => Ok(ordering == Ordering::Greater),
            Less => Ok(ordering == Ordering::Less),
            GreaterEqual => Ok(ordering != Ordering::Less),
            LessEqual => Ok(ordering != Ordering::Greater),
            Plus | Minus | Multiply | Divide | And | Or | Xor => {
                Err(error!(NotAComparison; comparator.symbol()))
            }
        }
    }
}
