use crate::error;
use crate::lang::token::Token;
use crate::lang::{Error, Line, LineNumber, MAX_LINES};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// One slot per addressable line number. The slot index is the line
/// number; unused slots hold no tokens.

#[derive(Debug, Clone)]
pub struct Program {
    lines: Vec<Line>,
}

impl Default for Program {
    fn default() -> Program {
        Program {
            lines: vec![Line::default(); MAX_LINES],
        }
    }
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn line_number(index: usize) -> Result<LineNumber> {
        if index >= MAX_LINES {
            return Err(error!(LineOutOfRange;
                &format!("{} NOT IN 0-{}", index, MAX_LINES - 1)));
        }
        Ok(index as LineNumber)
    }

    pub fn store(&mut self, index: usize, tokens: Vec<Token>, text: &str) -> Result<()> {
        let number = Program::line_number(index)?;
        self.insert(number, Line::from_tokens(tokens, text));
        Ok(())
    }

    /// Overwrites a slot. An unused line clears it.
    pub fn insert(&mut self, number: LineNumber, line: Line) {
        if !line.is_used() {
            self.remove(number);
            return;
        }
        log::debug!("store {}: {}", number, line);
        self.lines[number as usize] = line;
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        let line = std::mem::take(&mut self.lines[number as usize]);
        if line.is_used() {
            log::debug!("remove {}", number);
            Some(line)
        } else {
            None
        }
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index).filter(|line| line.is_used())
    }

    /// Used slots in ascending line order.
    pub fn lines(&self) -> impl Iterator<Item = (LineNumber, &Line)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_used())
            .map(|(index, line)| (index as LineNumber, line))
    }

    pub fn clear(&mut self) {
        for line in self.lines.iter_mut().filter(|line| line.is_used()) {
            *line = Line::default();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }
}
