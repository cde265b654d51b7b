use super::{token::*, Error, LineNumber, MAX_LINES};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Tokenizes one statement. `words[0]` is the keyword; the rest are
/// the words that followed it, split on single spaces.
pub fn lex(words: &[&str]) -> Result<Vec<Token>> {
    BasicLexer::lex(words)
}

/// A closing quote is a trailing `"` after an even run of backslashes.
fn is_closing(word: &str) -> bool {
    match word.strip_suffix('"') {
        Some(body) => (body.len() - body.trim_end_matches('\\').len()) % 2 == 0,
        None => false,
    }
}

/// `\"` is a quote and `\\` a backslash; any other backslash is kept.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn is_blank(words: &[&str]) -> bool {
    words.iter().all(|w| w.is_empty())
}

struct Words<'a> {
    words: &'a [&'a str],
    pos: usize,
}

impl<'a> Words<'a> {
    fn new(words: &'a [&'a str]) -> Words<'a> {
        Words { words, pos: 0 }
    }

    /// Next word, skipping the empty ones left behind by repeated spaces.
    fn next(&mut self) -> Option<&'a str> {
        while let Some(word) = self.next_raw() {
            if !word.is_empty() {
                return Some(word);
            }
        }
        None
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        let word = self.words.get(self.pos)?;
        self.pos += 1;
        Some(*word)
    }

    fn rest(&self) -> &'a [&'a str] {
        &self.words[self.pos..]
    }

    fn remaining(&self) -> usize {
        self.rest().iter().filter(|w| !w.is_empty()).count()
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum LetState {
    Target,
    Assign,
    Value,
    Next,
}

struct BasicLexer<'a> {
    words: Words<'a>,
    tokens: Vec<Token>,
}

impl<'a> BasicLexer<'a> {
    fn new(words: &'a [&'a str]) -> BasicLexer<'a> {
        BasicLexer {
            words: Words::new(words),
            tokens: vec![],
        }
    }

    fn lex(words: &[&str]) -> Result<Vec<Token>> {
        let mut lexer = BasicLexer::new(words);
        let keyword = match lexer.words.next() {
            Some(word) => word.to_uppercase(),
            None => return Err(error!(SyntaxError; "EMPTY STATEMENT")),
        };
        match keyword.as_str() {
            "IF" => lexer.r#if()?,
            "GOTO" => lexer.r#goto()?,
            "EXIT" | "QUIT" | "BYE" | "END" => lexer.tokens.push(Token::Exit),
            "LET" => lexer.r#let()?,
            "PRINT" => lexer.r#print()?,
            "INPUT" => lexer.r#input()?,
            _ => return Err(error!(UnknownKeyword; &keyword)),
        }
        Ok(lexer.tokens)
    }

    fn r#goto(&mut self) -> Result<()> {
        let word = match self.words.next() {
            Some(word) => word,
            None => return Err(error!(SyntaxError; "GOTO REQUIRES A LINE NUMBER")),
        };
        if let Some(extra) = self.words.next() {
            return Err(error!(SyntaxError; &format!("UNEXPECTED {} AFTER GOTO", extra)));
        }
        let number = match word.parse::<i64>() {
            Ok(number) => number,
            Err(e) => {
                return Err(error!(BadNumber; &format!("BAD LINE NUMBER \"{}\": {}", word, e)))
            }
        };
        if number < 0 || number >= MAX_LINES as i64 {
            return Err(error!(LineOutOfRange;
                &format!("{} NOT IN 0-{}", number, MAX_LINES - 1)));
        }
        self.tokens.push(Token::Goto(number as LineNumber));
        Ok(())
    }

    fn r#let(&mut self) -> Result<()> {
        if self.words.remaining() < 3 {
            return Err(error!(SyntaxError; "EXPECTED AT LEAST ONE IDENTIFIER IN LET"));
        }
        self.tokens.push(Token::Let);
        let mut state = LetState::Target;
        while let Some(word) = self.words.next() {
            state = match state {
                LetState::Target => {
                    let ident = self.ident(word)?;
                    self.tokens.push(Token::Ident(ident));
                    LetState::Assign
                }
                LetState::Assign | LetState::Next => {
                    if state == LetState::Next && word == ";" {
                        self.tokens.push(Token::FieldSep);
                        LetState::Target
                    } else if let Some(op) = Operator::from_string(word) {
                        if op.is_comparison() && op != Operator::Equal {
                            return Err(error!(UnsupportedOperator;
                                &format!("{} IN LET", word)));
                        }
                        self.tokens.push(Token::Operator(op));
                        LetState::Value
                    } else {
                        return Err(error!(SyntaxError;
                            &format!("UNKNOWN TOKEN {} IN LET", word)));
                    }
                }
                LetState::Value => {
                    let value = self.value(word)?;
                    self.tokens.push(value);
                    LetState::Next
                }
            }
        }
        match state {
            LetState::Next => Ok(()),
            LetState::Target => Err(error!(SyntaxError; "INCOMPLETE LET; EXPECTED IDENTIFIER")),
            LetState::Assign => Err(error!(SyntaxError; "INCOMPLETE LET; EXPECTED OPERATOR")),
            LetState::Value => Err(error!(SyntaxError; "INCOMPLETE LET; EXPECTED CONSTANT")),
        }
    }

    fn r#print(&mut self) -> Result<()> {
        self.tokens.push(Token::Print);
        while let Some(word) = self.words.next() {
            let value = self.value(word)?;
            self.tokens.push(value);
        }
        Ok(())
    }

    fn r#input(&mut self) -> Result<()> {
        let usage = "INPUT PROMPT VAR";
        if self.words.remaining() < 2 {
            return Err(error!(MalformedInput; usage));
        }
        self.tokens.push(Token::Input);
        let prompt = match self.words.next() {
            Some(word) => word,
            None => return Err(error!(MalformedInput; usage)),
        };
        match Ident::from_word(prompt) {
            Some(Ident::String(name)) => self.tokens.push(Token::Ident(Ident::String(name))),
            Some(Ident::Integer(_)) => {
                return Err(error!(MalformedInput; "CANNOT USE INTEGER VARIABLE AS PROMPT"))
            }
            None if prompt.starts_with('"') => {
                let literal = self.string(prompt)?;
                self.tokens.push(Token::Literal(literal));
            }
            None => return Err(error!(MalformedInput; usage)),
        }
        let var = match self.words.next() {
            Some(word) => self.ident(word)?,
            None => return Err(error!(MalformedInput; usage)),
        };
        if self.words.next().is_some() {
            return Err(error!(MalformedInput; usage));
        }
        self.tokens.push(Token::Ident(var));
        Ok(())
    }

    fn r#if(&mut self) -> Result<()> {
        let words = self.words.rest();
        let mut then_pos = None;
        let mut else_pos = None;
        let mut quoted = false;
        let mut nested = 0;
        let mut statement_start = false;
        for (index, word) in words.iter().enumerate() {
            if quoted {
                quoted = !is_closing(word);
                continue;
            }
            if word.is_empty() {
                continue;
            }
            if word.starts_with('"') {
                quoted = !is_closing(&word[1..]);
                statement_start = false;
                continue;
            }
            let upper = word.to_uppercase();
            if then_pos.is_none() {
                match upper.as_str() {
                    "THEN" => {
                        then_pos = Some(index);
                        statement_start = true;
                    }
                    "ELSE" => return Err(error!(MalformedIf; "ELSE BEFORE THEN")),
                    _ => {}
                }
                continue;
            }
            match upper.as_str() {
                "IF" if statement_start => nested += 1,
                "ELSE" if nested == 0 => {
                    else_pos = Some(index);
                    break;
                }
                "ELSE" => nested -= 1,
                _ => {}
            }
            statement_start = upper == "THEN" || upper == "ELSE";
        }
        let then_pos = match then_pos {
            Some(pos) => pos,
            None => return Err(error!(MalformedIf; "EXPECTED THEN")),
        };
        let condition = &words[..then_pos];
        let (then_words, else_words) = match else_pos {
            Some(pos) => (&words[then_pos + 1..pos], Some(&words[pos + 1..])),
            None => (&words[then_pos + 1..], None),
        };
        if is_blank(condition) {
            return Err(error!(MalformedIf; "EXPECTED CONDITION"));
        }
        self.tokens.push(Token::If);
        let mut expression = BasicLexer::new(condition);
        expression.expression()?;
        self.tokens.append(&mut expression.tokens);
        self.tokens.push(Token::Then);
        self.tokens.append(&mut BasicLexer::branch(then_words)?);
        if let Some(else_words) = else_words {
            self.tokens.push(Token::Else);
            self.tokens.append(&mut BasicLexer::branch(else_words)?);
        }
        Ok(())
    }

    fn branch(words: &[&str]) -> Result<Vec<Token>> {
        if is_blank(words) {
            return Err(error!(MalformedIf; "EMPTY BRANCH"));
        }
        BasicLexer::lex(words)
    }

    fn expression(&mut self) -> Result<()> {
        while let Some(word) = self.words.next() {
            let token = match Operator::from_string(word) {
                Some(op) => Token::Operator(op),
                None => self.value(word)?,
            };
            self.tokens.push(token);
        }
        Ok(())
    }

    fn ident(&self, word: &str) -> Result<Ident> {
        match Ident::from_word(word) {
            Some(ident) => Ok(ident),
            None => Err(error!(InvalidIdentifier; word)),
        }
    }

    fn value(&mut self, word: &'a str) -> Result<Token> {
        if let Some(ident) = Ident::from_word(word) {
            return Ok(Token::Ident(ident));
        }
        if word.starts_with('"') {
            return Ok(Token::Literal(self.string(word)?));
        }
        match word.parse::<i64>() {
            Ok(n) => Ok(Token::Literal(Literal::Integer(n))),
            Err(e) => Err(error!(BadNumber; &format!("\"{}\": {}", word, e))),
        }
    }

    /// Snarfs a string literal that may run across several words.
    fn string(&mut self, first: &'a str) -> Result<Literal> {
        let body = &first[1..];
        if is_closing(body) {
            return Ok(Literal::String(unescape(&body[..body.len() - 1])));
        }
        let mut s = body.to_string();
        while let Some(word) = self.words.next_raw() {
            s.push(' ');
            s.push_str(word);
            if is_closing(word) {
                s.pop();
                return Ok(Literal::String(unescape(&s)));
            }
        }
        Err(error!(UnterminatedString; first))
    }
}
