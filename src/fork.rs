//! Fork classification: which distribution channel a comment belongs to.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single comment record. Every field except `commands` is passed through untouched.
pub type Comment = Map<String, Value>;

/// Command that marks a comment as posted anonymously to the main channel.
pub const ANONYMOUS_COMMAND: &str = "184";

/// Distribution channel of a comment.
/// Variant order matches lexical order of the tags, so `Ord` sorts threads the way the viewer expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fork {
    Easy,
    Main,
    Owner,
}

impl Fork {
    pub const ALL: [Fork; 3] = [Fork::Easy, Fork::Main, Fork::Owner];

    pub fn as_str(self) -> &'static str {
        match self {
            Fork::Easy => "easy",
            Fork::Main => "main",
            Fork::Owner => "owner",
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `commands` as a slice; absent, null or non-array values read as empty.
pub fn commands_of(comment: &Comment) -> &[Value] {
    comment
        .get("commands")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Classify a comment:
///  - no commands            -> `owner`
///  - `"184"` among commands -> `main`
///  - anything else          -> `easy`
pub fn classify(comment: &Comment) -> Fork {
    let commands = commands_of(comment);
    if commands.is_empty() {
        Fork::Owner
    } else if commands.iter().any(|c| c.as_str() == Some(ANONYMOUS_COMMAND)) {
        Fork::Main
    } else {
        Fork::Easy
    }
}
