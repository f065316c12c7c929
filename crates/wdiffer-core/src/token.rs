//! Tokenizer
//!
//! Splits text into the atomic units compared by the diff engine: each
//! whitespace-delimited word, plus one newline token at the end of every line.

use crate::errors::{Result, WdiffError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;

/// Text of the newline token.
pub const NEWLINE: &str = "\n";

/// A word or the newline marker.
///
/// Two tokens are equal iff their text is identical. No normalization of
/// case or punctuation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Create a word token
    pub fn word(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Create the newline token
    pub fn newline() -> Self {
        Self(NEWLINE.to_string())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_newline(&self) -> bool {
        self.0 == NEWLINE
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Ordered tokens of one input file.
pub type TokenSequence = Vec<Token>;

/// Tokenize text into words and newline tokens.
///
/// Every line, including a final line without a trailing terminator,
/// contributes its words followed by exactly one newline token. `\n`, `\r\n`
/// and a bare `\r` all end a line.
pub fn tokenize(text: &str) -> TokenSequence {
    let text: Cow<'_, str> = if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let mut tokens = Vec::new();
    for line in text.lines() {
        tokens.extend(line.split_whitespace().map(Token::word));
        tokens.push(Token::newline());
    }
    tokens
}

/// Read and tokenize a file.
///
/// # Errors
///
/// - `InputUnavailable`: the file cannot be opened, read, or is not UTF-8
pub fn tokenize_file(path: &Path) -> Result<TokenSequence> {
    let content =
        std::fs::read_to_string(path).map_err(|e| WdiffError::input_unavailable(path, &e))?;
    let tokens = tokenize(&content);
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}
