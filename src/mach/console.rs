use crate::lang::Error;
use std::io;

/// The machine's view of the outside world.
///
/// `INPUT` reads through it, `PRINT` writes through it and the run loop
/// polls it between lines to learn about a break request.
pub trait Console {
    fn print(&mut self, s: &str) -> io::Result<()>;

    fn error(&mut self, error: &Error);

    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Prompts until the reply parses as an integer.
    fn read_int(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let reply = self.read_line(prompt)?;
            if let Ok(n) = reply.trim().parse::<i64>() {
                return Ok(n);
            }
            log::debug!("not an integer: {:?}", reply);
        }
    }

    fn interrupted(&mut self) -> bool {
        false
    }
}
