use std::fmt;

use crate::error::{DirectoryError, DirectoryResult};

pub const DEFAULT_MAX_KEY_LEN: usize = 32;

/// A non-empty sequence of ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str, max_len: usize) -> DirectoryResult<Self> {
        if raw.is_empty() {
            return Err(DirectoryError::MissingField("phoneNumber"));
        }

        if let Some((position, _)) = raw.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(DirectoryError::InvalidKey {
                key: raw.to_string(),
                position: raw[..position].chars().count(),
            });
        }

        // all ASCII at this point, so bytes == digits
        if raw.len() > max_len {
            return Err(DirectoryError::KeyTooLong {
                len: raw.len(),
                max: max_len,
            });
        }

        Ok(Self(raw.to_string()))
    }

    /// Rebuilds a number from trie key bytes, which are digits by construction.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        Self(digits.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}
