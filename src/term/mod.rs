/*!
## Terminal Module

The interactive shell: command line, line editor, Ctrl-C handling and
a `Console` that talks to the terminal.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::{Console, Event, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "linebasic")]
#[command(about = "A tiny line-numbered BASIC")]
#[command(version)]
struct Cli {
    /// Program file, entered line by line as if typed at the prompt
    file: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(cli, interrupted) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(error) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("{}", error);
    }
}

fn main_loop(cli: Cli, interrupted: Arc<AtomicBool>) -> io::Result<()> {
    let mut runtime = Runtime::new(TermConsole::new(interrupted.clone())?);
    if let Some(path) = &cli.file {
        log::info!("loading {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            interrupted.store(false, Ordering::SeqCst);
            if runtime.enter(&line) == Event::Exit {
                break;
            }
        }
        return Ok(());
    }
    while let Some(line) = runtime.console_mut().read_command()? {
        interrupted.store(false, Ordering::SeqCst);
        if runtime.enter(&line) == Event::Exit {
            break;
        }
    }
    Ok(())
}

/// Line editors are only used when stdin is a terminal. Piped input is
/// read a line at a time.
struct TermConsole {
    interrupted: Arc<AtomicBool>,
    command: Option<Interface<DefaultTerminal>>,
    input: Option<Interface<DefaultTerminal>>,
}

impl TermConsole {
    fn new(interrupted: Arc<AtomicBool>) -> io::Result<TermConsole> {
        if !io::stdin().is_terminal() {
            return Ok(TermConsole {
                interrupted,
                command: None,
                input: None,
            });
        }
        let command = Interface::new("linebasic")?;
        command.set_prompt("> ")?;
        let input = Interface::new("input")?;
        input.set_report_signal(Signal::Interrupt, true);
        Ok(TermConsole {
            interrupted,
            command: Some(command),
            input: Some(input),
        })
    }

    fn read_command(&mut self) -> io::Result<Option<String>> {
        let command = match &self.command {
            Some(command) => command,
            None => return read_stdin(),
        };
        match command.read_line()? {
            ReadResult::Input(string) => {
                if !string.trim().is_empty() {
                    command.add_history_unique(string.clone());
                }
                Ok(Some(string))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

fn read_stdin() -> io::Result<Option<String>> {
    let mut string = String::new();
    if io::stdin().lock().read_line(&mut string)? == 0 {
        return Ok(None);
    }
    let len = string.trim_end_matches(&['\r', '\n'][..]).len();
    string.truncate(len);
    Ok(Some(string))
}

impl Console for TermConsole {
    fn print(&mut self, s: &str) -> io::Result<()> {
        match &self.command {
            Some(command) => command.write_fmt(format_args!("{}", s)),
            None => {
                let mut stdout = io::stdout();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()
            }
        }
    }

    fn error(&mut self, error: &Error) {
        let result = match &self.command {
            Some(command) => command.write_fmt(format_args!(
                "?{}\n",
                Style::new().bold().paint(error.to_string())
            )),
            None => writeln!(io::stdout(), "?{}", error),
        };
        if let Err(e) = result {
            log::error!("{}: {}", error, e);
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let input = match &self.input {
            Some(input) => input,
            None => {
                self.print(prompt)?;
                return match read_stdin()? {
                    Some(string) => Ok(string),
                    None => Err(io::Error::from(ErrorKind::UnexpectedEof)),
                };
            }
        };
        input.set_prompt(prompt)?;
        match input.read_line()? {
            ReadResult::Input(string) => Ok(string),
            ReadResult::Signal(Signal::Interrupt) => {
                input.set_buffer("")?;
                input.lock_reader().cancel_read_line()?;
                Err(io::Error::from(ErrorKind::Interrupted))
            }
            ReadResult::Signal(_) | ReadResult::Eof => {
                Err(io::Error::from(ErrorKind::UnexpectedEof))
            }
        }
    }

    fn interrupted(&mut self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}
