//! Bookmark name validation.
//!
//! Valid names:
//! - 1 to 40 characters long
//! - ASCII alphanumerics, underscores (`_`), periods (`.`), and dashes (`-`)

pub const MAX_NAME_LEN: usize = 40;

/// Validates a bookmark name.
///
/// # Examples
/// ```
/// use dogear::validation::validate_name;
///
/// assert!(validate_name("nickname").is_ok());
/// assert!(validate_name("my.project-2_b").is_ok());
///
/// assert!(validate_name("").is_err());
/// assert!(validate_name("no spaces").is_err());
/// assert!(validate_name("caret^").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if let Some(ch) = name.chars().find(|ch| !is_valid_name_char(*ch)) {
        return Err(NameError::InvalidCharacter(ch));
    }

    // Only ASCII survives the loop above, so byte length equals char count.
    if name.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong(name.len()));
    }

    Ok(())
}

/// Boolean form of [`validate_name`].
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' || ch == '-'
}

/// Reason a bookmark name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameError::Empty => write!(f, "name cannot be empty"),
            NameError::TooLong(len) => write!(
                f,
                "name is {} characters long (at most {} allowed)",
                len, MAX_NAME_LEN
            ),
            NameError::InvalidCharacter(ch) => write!(
                f,
                "name contains invalid character '{}' (only alphanumerics, underscores, periods, and dashes allowed)",
                ch
            ),
        }
    }
}

impl std::error::Error for NameError {}
