use std::fmt;

use serde::{Deserialize, Serialize};

/// Case-sensitive identifier for a section, role or person.
///
/// `"None"` is the reserved unset value; an empty string converts to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const NONE: &'static str = "None";

    pub fn none() -> Self {
        Name(Self::NONE.to_string())
    }

    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::none()
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::none()
        } else {
            Name(value)
        }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::from(value.to_string())
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
