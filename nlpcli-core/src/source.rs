//! Sentence loading
//!
//! The only accepted input format is a list literal of string literals:
//!
//! ```text
//! [
//!     "This is great!",
//!     'Single quotes work too.',
//! ]
//! ```
//!
//! Plain newline-delimited text is rejected rather than guessed at, so a file
//! is never interpreted two different ways.

use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// Loader for sentence list files
pub struct SentenceSource;

impl SentenceSource {
    /// Read and parse the sentence list stored at `path`
    pub fn load(path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let sentences = Self::parse(&text)?;
        log::debug!(
            "Parsed {} sentences from {}",
            sentences.len(),
            path.display()
        );
        Ok(sentences)
    }

    /// Parse a list literal into trimmed sentences, preserving order
    pub fn parse(text: &str) -> Result<Vec<String>> {
        let mut parser = LiteralParser::new(text);
        let sentences = parser.parse_document()?;
        Ok(sentences
            .into_iter()
            .map(|s| s.trim().to_string())
            .collect())
    }
}

/// Kind of top-level value, used in error messages
fn describe(c: char) -> &'static str {
    match c {
        '"' | '\'' => "a string",
        '0'..='9' | '-' | '+' | '.' => "a number",
        '{' => "a dict or set",
        '(' => "a tuple",
        _ => "plain text",
    }
}

struct LiteralParser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> LiteralParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn parse_document(&mut self) -> Result<Vec<String>> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            None => {
                return Err(Error::Format(
                    "file is empty; expected a list literal such as [\"first sentence\"]"
                        .to_string(),
                ))
            }
            Some((_, '[')) => {}
            Some((_, c)) => {
                return Err(Error::Format(format!(
                    "the file must contain a list of sentences, found {}",
                    describe(c)
                )))
            }
        }
        let items = self.parse_list()?;
        self.skip_whitespace();
        if let Some((pos, _)) = self.chars.peek().copied() {
            return Err(Error::Format(format!(
                "unexpected content after the closing bracket at offset {pos}"
            )));
        }
        Ok(items)
    }

    fn parse_list(&mut self) -> Result<Vec<String>> {
        // opening bracket already peeked
        self.chars.next();
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek().copied() {
                None => return Err(Error::Format("unterminated list literal".to_string())),
                Some((_, ']')) => {
                    self.chars.next();
                    return Ok(items);
                }
                Some((_, '"' | '\'')) => items.push(self.parse_string()?),
                Some((pos, c)) => {
                    return Err(Error::Format(format!(
                        "list element {} at offset {pos} is {}, expected a string",
                        items.len(),
                        describe(c)
                    )))
                }
            }

            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, ']')) => return Ok(items),
                Some((pos, c)) => {
                    return Err(Error::Format(format!(
                        "expected ',' or ']' at offset {pos}, found '{c}'"
                    )))
                }
                None => return Err(Error::Format("unterminated list literal".to_string())),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let (start, quote) = self
            .chars
            .next()
            .ok_or_else(|| Error::Format("expected a string literal".to_string()))?;
        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => {
                    return Err(Error::Format(format!(
                        "unterminated string literal starting at offset {start}"
                    )))
                }
                Some((_, c)) if c == quote => return Ok(value),
                Some((pos, '\n')) => {
                    return Err(Error::Format(format!(
                        "line break inside string literal at offset {pos}"
                    )))
                }
                Some((pos, '\\')) => self.parse_escape(pos, &mut value)?,
                Some((_, c)) => value.push(c),
            }
        }
    }

    /// Decode the escape after the backslash at `pos` into `value`
    ///
    /// Unknown escapes such as `\d` keep their backslash.
    fn parse_escape(&mut self, pos: usize, value: &mut String) -> Result<()> {
        let (_, c) = self
            .chars
            .next()
            .ok_or_else(|| Error::Format(format!("dangling escape at offset {pos}")))?;
        let decoded = match c {
            // line continuation
            '\n' => return Ok(()),
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0b}',
            '0'..='7' => self.parse_octal(pos, c)?,
            'x' => self.parse_code_point(pos, 2)?,
            'u' => self.parse_code_point(pos, 4)?,
            'U' => self.parse_code_point(pos, 8)?,
            'N' => {
                return Err(Error::Format(format!(
                    "named unicode escapes (\\N{{...}}) are not supported, at offset {pos}"
                )))
            }
            other => {
                value.push('\\');
                other
            }
        };
        value.push(decoded);
        Ok(())
    }

    /// One to three octal digits, the first already consumed
    fn parse_octal(&mut self, pos: usize, first: char) -> Result<char> {
        let mut code = first.to_digit(8).unwrap_or_default();
        for _ in 0..2 {
            match self.chars.peek().and_then(|&(_, c)| c.to_digit(8)) {
                Some(digit) => {
                    code = code * 8 + digit;
                    self.chars.next();
                }
                None => break,
            }
        }
        char::from_u32(code)
            .ok_or_else(|| Error::Format(format!("invalid octal escape at offset {pos}")))
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }
}
