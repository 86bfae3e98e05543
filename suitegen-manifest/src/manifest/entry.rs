//! Parsed manifest entries.

use std::fmt;

/// Whether a fixture is expected to be accepted or rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// `y_` fixtures: valid JSON that must parse.
    Accept,
    /// `n_` fixtures: invalid JSON that must be rejected.
    Reject,
}

impl Polarity {
    /// Polarity for the leading character of a fixture filename.
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'y' => Some(Polarity::Accept),
            'n' => Some(Polarity::Reject),
            _ => None,
        }
    }

    /// The filename prefix character.
    pub fn prefix(&self) -> char {
        match self {
            Polarity::Accept => 'y',
            Polarity::Reject => 'n',
        }
    }

    /// Verb that starts generated test names.
    pub fn verb(&self) -> &'static str {
        match self {
            Polarity::Accept => "yes",
            Polarity::Reject => "no",
        }
    }

    /// What the fixture contains, in words.
    pub fn describe(&self) -> &'static str {
        match self {
            Polarity::Accept => "valid JSON",
            Polarity::Reject => "invalid JSON",
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Polarity::Accept)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// One data line of a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Whether the implementation currently passes this case.
    pub supported: bool,
    /// Expected parser outcome.
    pub polarity: Polarity,
    /// Fixture filename as written in the manifest.
    pub filename: String,
    /// Filename without its polarity prefix and extension.
    pub base_name: String,
    /// PascalCase identifier derived from `base_name`.
    pub identifier: String,
    /// 1 for the first entry with this identifier, counting up on collisions.
    pub occurrence: usize,
    /// 1-based manifest line number.
    pub line: usize,
}

impl Entry {
    /// Disambiguating suffix: empty for the first occurrence, `_N` after that.
    pub fn suffix(&self) -> String {
        if self.occurrence == 1 {
            String::new()
        } else {
            format!("_{}", self.occurrence)
        }
    }

    /// Test method name, e.g. `yesArrayEmpty` or `noFoo_2`.
    pub fn method_name(&self) -> String {
        format!("{}{}{}", self.polarity.verb(), self.identifier, self.suffix())
    }
}
