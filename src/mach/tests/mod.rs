use crate::lang::Error;
use crate::mach::{Console, Runtime};
use std::collections::VecDeque;
use std::io;


#[derive(Default)]
struct Script {
    output: String,
    input: VecDeque<String>,
    polls: Option<usize>,
}

impl Console for Script {
    fn print(&mut self, s: &str) -> io::Result<()> {
        self.output.push_str(s);
        Ok(())
    }

    fn error(&mut self, error: &Error) {
        self.output.push_str(&format!("?{}\n", error));
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(s) => Ok(s),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        }
    }

    fn interrupted(&mut self) -> bool {
        match self.polls {
            Some(0) => true,
            Some(n) => {
                self.polls = Some(n - 1);
                false
            }
            None => false,
        }
    }
}

fn runtime() -> Runtime<Script> {
    Runtime::new(Script::default())
}

/// Runtime that reports a break after `polls` lines have started.
fn runtime_breaking_after(polls: usize) -> Runtime<Script> {
    Runtime::new(Script {
        polls: Some(polls),
        ..Script::default()
    })
}

fn exec(runtime: &mut Runtime<Script>) -> String {
    std::mem::take(&mut runtime.console_mut().output)
}
