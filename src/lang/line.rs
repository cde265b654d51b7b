use super::lex::*;
use super::token::*;
use super::Error;

/// A program line: the text as typed and the tokens it lexed to.
/// An unused line holds no tokens.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Line {
    used: bool,
    text: String,
    tokens: Vec<Token>,
}

impl Line {
    /// Lexes `text`. Blank text makes an unused line.
    pub fn new(text: &str) -> Result<Line, Error> {
        if text.trim().is_empty() {
            return Ok(Line {
                used: false,
                text: text.to_string(),
                tokens: vec![],
            });
        }
        let words: Vec<&str> = text.split(' ').collect();
        Ok(Line::from_tokens(lex(&words)?, text))
    }

    pub fn from_tokens(tokens: Vec<Token>, text: &str) -> Line {
        Line {
            used: !tokens.is_empty(),
            text: text.to_string(),
            tokens,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_kept() {
        let line = Line::new("PRINT  \"a  b\"   X").unwrap();
        assert!(line.is_used());
        assert_eq!(line.to_string(), "PRINT  \"a  b\"   X");
        assert_eq!(line.tokens().len(), 3);
    }

    #[test]
    fn test_blank() {
        let line = Line::new("   ").unwrap();
        assert!(!line.is_used());
        assert!(line.tokens().is_empty());
    }

    #[test]
    fn test_bad_line() {
        assert!(Line::new("PRINT 12q").is_err());
    }
}
