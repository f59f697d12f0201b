//! Brazilian postal code (CEP) value object.
//!
//! Accepted shapes are `DDDDD-DDD` and `DDDDDDDD` after trimming surrounding
//! whitespace. The eight-digit form is normalised to the dashed form, so a
//! constructed [`PostalCode`] always reads `DDDDD-DDD`.

use std::fmt;
use std::str::FromStr;

/// Validation errors for [`PostalCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeValidationError {
    /// The input was empty or only whitespace.
    Empty,
    /// The input was not `DDDDD-DDD` or `DDDDDDDD`.
    InvalidFormat,
}

impl fmt::Display for PostalCodeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "postal code must not be empty"),
            Self::InvalidFormat => {
                write!(f, "postal code must match DDDDD-DDD or DDDDDDDD")
            }
        }
    }
}

impl std::error::Error for PostalCodeValidationError {}

/// Normalised Brazilian postal code in `DDDDD-DDD` form.
///
/// # Examples
/// ```
/// use cep_weather::domain::PostalCode;
///
/// let code = PostalCode::new(" 01001000 ").expect("valid postal code");
/// assert_eq!(code.as_str(), "01001-000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validate and normalise a raw postal code.
    ///
    /// # Errors
    ///
    /// Returns [`PostalCodeValidationError::Empty`] when nothing but
    /// whitespace was supplied and [`PostalCodeValidationError::InvalidFormat`]
    /// for any other unsupported shape.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PostalCodeValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PostalCodeValidationError::Empty);
        }
        canonicalise(trimmed)
            .map(Self)
            .ok_or(PostalCodeValidationError::InvalidFormat)
    }

    /// Borrow the normalised `DDDDD-DDD` representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn canonicalise(value: &str) -> Option<String> {
    match value.split_once('-') {
        Some((head, tail)) if is_digits(head, 5) && is_digits(tail, 3) => Some(value.to_owned()),
        Some(_) => None,
        None if is_digits(value, 8) => {
            let (head, tail) = value.split_at(5);
            Some(format!("{head}-{tail}"))
        }
        None => None,
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|byte| byte.is_ascii_digit())
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostalCode {
    type Err = PostalCodeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}
