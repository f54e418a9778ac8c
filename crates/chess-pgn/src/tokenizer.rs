//! Movetext lexer.
//!
//! A single pass over the text driven by a small state machine: the class of
//! the token being accumulated, the accumulator, and the brace depth of the
//! current comment. A character either extends the current token or flushes
//! it and starts a new one. Only the outermost pair of braces delimits a
//! comment; inner braces are kept as text.

use tracing::trace;

use crate::error::TokenizeError;
use crate::game::Outcome;

/// A lexical unit of movetext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `1.` or `12...`
    MoveNumber(String),
    /// A move in SAN, not yet resolved.
    San(String),
    /// `$14`, `!?`, `□` and friends.
    Annotation(String),
    /// Text between the outermost braces, trimmed.
    Comment(String),
    VariationStart,
    VariationEnd,
    /// The game termination marker.
    Result(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    None,
    MoveNumber,
    San,
    Annotation,
    Comment,
}

impl Class {
    /// The class a token starting with `c` belongs to.
    fn starting_with(c: char) -> Class {
        if c.is_ascii_digit() {
            Class::MoveNumber
        } else if c.is_ascii_alphabetic() {
            Class::San
        } else if matches!(c, '$' | '!' | '?' | '□') {
            Class::Annotation
        } else {
            Class::None
        }
    }

    fn extends(self, c: char) -> bool {
        match self {
            Class::None | Class::Comment => false,
            Class::MoveNumber => c.is_ascii_digit() || c == '.',
            Class::San => c.is_ascii_alphanumeric() || matches!(c, 'x' | '+' | '#' | '=' | '-'),
            Class::Annotation => c.is_ascii_digit() || matches!(c, '$' | '!' | '?' | '□'),
        }
    }
}

/// Splits movetext into tokens.
///
/// A trailing game termination marker is validated and stripped first and
/// comes back as the last token.
pub fn tokenize(movetext: &str) -> Result<Vec<Token>, TokenizeError> {
    let (body, outcome) = split_result(movetext)?;

    let mut lexer = Lexer::default();
    for c in body.chars() {
        lexer.feed(c);
    }
    if lexer.class == Class::Comment {
        return Err(TokenizeError::UnterminatedComment(
            lexer.buffer.trim().to_string(),
        ));
    }
    lexer.flush();

    let mut tokens = lexer.tokens;
    if let Some(outcome) = outcome {
        tokens.push(Token::Result(outcome));
    }
    trace!(tokens = tokens.len(), "tokenized movetext");
    Ok(tokens)
}

/// The last word ends the text; a closing brace or parenthesis also
/// starts a new word.
fn split_result(movetext: &str) -> Result<(&str, Option<Outcome>), TokenizeError> {
    let trimmed = movetext.trim_end();
    let boundary = |c: char| c.is_whitespace() || matches!(c, '}' | ')');
    let (body, last) = match trimmed.rfind(boundary) {
        Some(at) => {
            let width = trimmed[at..].chars().next().map_or(1, char::len_utf8);
            trimmed.split_at(at + width)
        }
        None => ("", trimmed),
    };
    if let Some(outcome) = Outcome::from_token(last) {
        return Ok((body, Some(outcome)));
    }
    if looks_like_result(last) {
        return Err(TokenizeError::InvalidResult(last.to_string()));
    }
    Ok((trimmed, None))
}

fn looks_like_result(word: &str) -> bool {
    word.contains('-')
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '/' | '½'))
}

#[derive(Debug)]
struct Lexer {
    class: Class,
    buffer: String,
    depth: usize,
    tokens: Vec<Token>,
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer {
            class: Class::None,
            buffer: String::new(),
            depth: 0,
            tokens: Vec::new(),
        }
    }
}

impl Lexer {
    fn feed(&mut self, c: char) {
        if self.class == Class::Comment {
            self.feed_comment(c);
            return;
        }
        if self.class.extends(c) {
            self.buffer.push(c);
            return;
        }

        self.flush();
        match c {
            '{' => {
                self.class = Class::Comment;
                self.depth = 1;
            }
            '(' => self.tokens.push(Token::VariationStart),
            ')' => self.tokens.push(Token::VariationEnd),
            _ => {
                self.class = Class::starting_with(c);
                if self.class != Class::None {
                    self.buffer.push(c);
                }
            }
        }
    }

    fn feed_comment(&mut self, c: char) {
        match c {
            '{' => self.depth += 1,
            '}' => {
                self.depth -= 1;
                if self.depth == 0 {
                    self.flush();
                    return;
                }
            }
            _ => {}
        }
        self.buffer.push(c);
    }

    fn flush(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        let class = std::mem::replace(&mut self.class, Class::None);
        let token = match class {
            Class::None => return,
            Class::MoveNumber => Token::MoveNumber(text),
            Class::San => Token::San(text),
            Class::Annotation => Token::Annotation(text),
            Class::Comment => {
                let comment = text.trim();
                if comment.is_empty() {
                    return;
                }
                Token::Comment(comment.to_string())
            }
        };
        self.tokens.push(token);
    }
}
