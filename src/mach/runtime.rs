use super::{execute, Console, Listing, Program, Signal, Var};
use crate::error;
use crate::lang::token::Token;
use crate::lang::{lex, Error, Line, LineNumber, MAX_LINES};

type Result<T> = std::result::Result<T, Error>;

/// Runs the stored program from line 0.
pub fn run<C: Console + ?Sized>(program: &Program, vars: &mut Var, console: &mut C) -> Result<()> {
    run_from(program, vars, console, 0)
}

/// Runs the stored program from `start` until it runs off the end,
/// reaches an `EXIT`, or fails. Errors carry the failing line number.
pub fn run_from<C: Console + ?Sized>(
    program: &Program,
    vars: &mut Var,
    console: &mut C,
    start: LineNumber,
) -> Result<()> {
    log::debug!("run from {}", start);
    let mut index = start as usize;
    while index < MAX_LINES {
        let line = match program.line(index) {
            Some(line) => line,
            None => {
                index += 1;
                continue;
            }
        };
        let number = index as LineNumber;
        if console.interrupted() {
            log::warn!("break in {}", number);
            return Err(error!(Break, number));
        }
        let signal = match line.tokens().first() {
            Some(Token::Exit) => Some(Signal::Terminate),
            Some(Token::Goto(n)) => Some(Signal::Goto(*n)),
            _ => execute(line.tokens(), vars, console).map_err(|e| e.in_line_number(number))?,
        };
        match signal {
            None => index += 1,
            Some(Signal::Goto(n)) => {
                log::trace!("jump {} to {}", number, n);
                index = n as usize;
            }
            Some(Signal::Terminate) => {
                log::debug!("end in {}", number);
                return Ok(());
            }
        }
    }
    log::debug!("ran past last line");
    Ok(())
}

/// A leading word of digits, optionally signed, addresses a line.
fn is_line_number(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// What the shell should do after a line was entered.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
    Ready,
    Exit,
}

/// ## Interpreter session
///
/// Owns the program store and variables and dispatches shell input:
/// the commands `EXIT`, `RUN`, `REM`, `LIST`, `LISTDEBUG`, `VARS` and
/// `NEW`; numbered lines, which are stored; and anything else, which
/// is executed immediately.

pub struct Runtime<C: Console> {
    program: Program,
    vars: Var,
    console: C,
}

impl<C: Console> Runtime<C> {
    pub fn new(console: C) -> Runtime<C> {
        Runtime {
            program: Program::new(),
            vars: Var::new(),
            console,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn enter(&mut self, text: &str) -> Event {
        let mut split = text.trim_start().splitn(2, ' ');
        let first = split.next().unwrap_or_default();
        let rest = split.next().unwrap_or_default();
        if first.is_empty() {
            return Event::Ready;
        }
        match first.to_uppercase().as_str() {
            "EXIT" => return Event::Exit,
            "RUN" => self.run(),
            "REM" => {}
            "LIST" => {
                let s = Listing::new(&self.program).list();
                self.print(&s);
            }
            "LISTDEBUG" => {
                let s = Listing::new(&self.program).list_debug();
                self.print(&s);
            }
            "VARS" => {
                let s = format!("{}\n", self.vars);
                self.print(&s);
            }
            "NEW" => {
                self.program.clear();
                self.vars.clear();
            }
            _ if is_line_number(first) => self.store(first, rest),
            _ => return self.direct(text),
        }
        Event::Ready
    }

    pub fn run(&mut self) {
        if let Err(error) = run(&self.program, &mut self.vars, &mut self.console) {
            self.console.error(&error);
        }
    }

    fn store(&mut self, number: &str, text: &str) {
        let number = match number.parse::<i64>() {
            Ok(index) if index >= 0 => Program::line_number(index as usize),
            _ => Err(error!(LineOutOfRange;
                &format!("{} NOT IN 0-{}", number, MAX_LINES - 1))),
        };
        let number = match number {
            Ok(number) => number,
            Err(error) => return self.console.error(&error),
        };
        match Line::new(text) {
            Ok(line) => self.program.insert(number, line),
            Err(error) => self.console.error(&error.in_line_number(number)),
        }
    }

    fn direct(&mut self, text: &str) -> Event {
        let words: Vec<&str> = text.split(' ').collect();
        let result = lex(&words)
            .and_then(|tokens| execute(&tokens, &mut self.vars, &mut self.console));
        match result {
            Ok(Some(Signal::Terminate)) => return Event::Exit,
            Ok(Some(Signal::Goto(n))) => {
                if let Err(error) = run_from(&self.program, &mut self.vars, &mut self.console, n)
                {
                    self.console.error(&error);
                }
            }
            Ok(None) => {}
            Err(error) => self.console.error(&error),
        }
        Event::Ready
    }

    fn print(&mut self, s: &str) {
        if let Err(e) = self.console.print(s) {
            self.console.error(&error!(IoError; &e.to_string()));
        }
    }
}
