use super::Program;

/// Renders the program store for `LIST` and `LISTDEBUG`.
pub struct Listing<'a> {
    program: &'a Program,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program }
    }

    /// `N: text` for every used slot, text exactly as it was typed.
    pub fn list(&self) -> String {
        let mut s = String::new();
        for (number, line) in self.program.lines() {
            s.push_str(&format!("{}: {}\n", number, line));
        }
        s
    }

    /// `N:` followed by the canonical text of each stored token.
    pub fn list_debug(&self) -> String {
        let mut s = String::new();
        for (number, line) in self.program.lines() {
            s.push_str(&format!("{}:", number));
            for token in line.tokens() {
                s.push_str(&format!(" {}", token));
            }
            s.push('\n');
        }
        s
    }
}
