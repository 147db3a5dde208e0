use std::fmt;

use serde::{Deserialize, Serialize};

/// Value object representing a hashed password
///
/// The encoded string belongs to the hashing library. It is stored and passed
/// back verbatim and never inspected here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for HashedPassword {
    fn from(hash: String) -> Self {
        Self::new(hash)
    }
}

impl From<&str> for HashedPassword {
    fn from(hash: &str) -> Self {
        Self::new(hash.to_string())
    }
}

// keep stored hashes out of logs
impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}
