//! Validated identifiers for the rows and columns of an exact cover
//! matrix.

use crate::Error;
use std::fmt;

/// The name of a single row or column.
///
/// Names are opaque to the solver. They round-trip through the line- and
/// comma-delimited textual renderings used elsewhere in the crate, which is
/// why [`Name::validate`] rejects commas and any whitespace other than the
/// ASCII space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new name.
    ///
    /// The name is not checked here; call [`Name::validate`] (or validate
    /// the containing matrix) before relying on the character rules.
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    /// View the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the name against the character rules.
    pub fn validate(&self) -> Result<(), Error> {
        for character in self.0.chars() {
            if character.is_whitespace() && character != ' ' {
                return Err(Error::InvalidName {
                    name: self.0.clone(),
                    found: "invalid whitespace character",
                });
            }

            if character == ',' {
                return Err(Error::InvalidName {
                    name: self.0.clone(),
                    found: "a comma",
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Name::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Name::new(name)
    }
}

/// Validate a list of names, failing on the first offending element.
pub fn validate_all(names: &[Name]) -> Result<(), Error> {
    names.iter().try_for_each(Name::validate)
}
