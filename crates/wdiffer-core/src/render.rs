//! Marker configuration and output stream rendering.
//!
//! [`Markers`] decides how each edit is spelled; [`write_stream`] lays the
//! rendered tokens out as text, one space between words on a line and a line
//! break at every newline token.

use crate::diff::model::Edit;
use crate::errors::{Result, WdiffError};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Strings wrapped around deleted and inserted tokens.
///
/// Every field defaults to the empty string, i.e. no visible marking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Inserted before each deleted token
    pub delete_start: String,
    /// Inserted after each deleted token
    pub delete_end: String,
    /// Inserted before each inserted token
    pub insert_start: String,
    /// Inserted after each inserted token
    pub insert_end: String,
}

impl Markers {
    /// Terminal colour preset: deletions in red, insertions in green.
    pub fn ansi_color() -> Self {
        Self {
            delete_start: ANSI_RED.to_string(),
            delete_end: ANSI_RESET.to_string(),
            insert_start: ANSI_GREEN.to_string(),
            insert_end: ANSI_RESET.to_string(),
        }
    }

    /// True if no marker is set
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Check that the markers can be embedded in the line-oriented stream.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration`: a marker contains `\n` or `\r`
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("delete_start", &self.delete_start),
            ("delete_end", &self.delete_end),
            ("insert_start", &self.insert_start),
            ("insert_end", &self.insert_end),
        ];
        for (name, value) in fields {
            if value.contains(['\n', '\r']) {
                return Err(WdiffError::invalid_configuration(format!(
                    "{} marker must not contain a line terminator",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Spell one edit: kept tokens verbatim, changes wrapped in markers.
    pub fn render_edit(&self, edit: &Edit) -> String {
        match edit {
            Edit::Keep(token) => token.as_str().to_string(),
            Edit::Delete(token) => {
                format!("{}{}{}", self.delete_start, token, self.delete_end)
            }
            Edit::Insert(token) => {
                format!("{}{}{}", self.insert_start, token, self.insert_end)
            }
        }
    }
}

/// Write rendered tokens as a text stream.
///
/// A token equal to `"\n"` ends the line. Other tokens are separated by a
/// single space within a line. Empty and carriage-return-only tokens are
/// skipped. A marked newline (e.g. `"[+\n+]"`) is written as-is and the
/// following word continues on the new line after its end marker.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_stream<W, S>(out: &mut W, tokens: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut at_line_start = true;
    for token in tokens {
        let text = token.as_ref();
        if text.is_empty() || text == "\r" {
            continue;
        }
        if text == "\n" {
            out.write_all(b"\n")?;
            at_line_start = true;
            continue;
        }
        if !at_line_start {
            out.write_all(b" ")?;
        }
        out.write_all(text.as_bytes())?;
        at_line_start = text.ends_with('\n');
    }
    Ok(())
}

/// Render tokens into a `String`; see [`write_stream`].
pub fn render_stream<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_stream(&mut buf, tokens);
    String::from_utf8_lossy(&buf).into_owned()
}
