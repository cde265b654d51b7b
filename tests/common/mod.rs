#![allow(dead_code)]

use linebasic::lang::Error;
use linebasic::mach::{Console, Runtime};
use std::collections::VecDeque;
use std::io;

/// Console that records output and replays queued input lines.
#[derive(Default)]
pub struct Script {
    pub output: String,
    pub input: VecDeque<String>,
    pub polls: Option<usize>,
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

pub fn runtime() -> Runtime<Script> {
    Runtime::new(Script::default())
}

pub fn runtime_with_input(lines: &[&str]) -> Runtime<Script> {
    Runtime::new(Script {
        input: lines.iter().map(|s| s.to_string()).collect(),
        ..Script::default()
    })
}

/// Everything printed since the last call.
pub fn exec(runtime: &mut Runtime<Script>) -> String {
    std::mem::take(&mut runtime.console_mut().output)
}
