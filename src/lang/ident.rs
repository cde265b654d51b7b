// Used in both Token and Ast

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Integer(String),
    String(String),
}

impl Ident {
    /// Classifies a word. Every character must be a letter, except for
    /// an optional trailing `$` which makes the identifier string-typed.
    pub fn from_word(word: &str) -> Option<Ident> {
        let name = word.strip_suffix('$').unwrap_or(word);
        if name.is_empty() || !name.chars().all(is_letter) {
            return None;
        }
        if name.len() == word.len() {
            Some(Ident::Integer(word.to_string()))
        } else {
            Some(Ident::String(word.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Ident::Integer(s) | Ident::String(s) => s,
        }
    }
}

/// Alphabetic without the letter-like numerals (`Ⅻ`, `ⅷ`).
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigil() {
        assert_eq!(Ident::from_word("NAME$"), Some(Ident::String("NAME$".into())));
        assert_eq!(Ident::from_word("count"), Some(Ident::Integer("count".into())));
        assert_eq!(Ident::from_word("ÄPFEL"), Some(Ident::Integer("ÄPFEL".into())));
    }

    #[test]
    fn test_not_identifiers() {
        assert_eq!(Ident::from_word(""), None);
        assert_eq!(Ident::from_word("$"), None);
        assert_eq!(Ident::from_word("A$$"), None);
        assert_eq!(Ident::from_word("A1"), None);
        assert_eq!(Ident::from_word("$A"), None);
        assert_eq!(Ident::from_word("\"A\""), None);
        assert_eq!(Ident::from_word("Ⅻ"), None);
        assert_eq!(Ident::from_word("AⅫ$"), None);
    }
}
