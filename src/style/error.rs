//! Style parsing errors.

/// Error returned when a string does not name a known [`Style`](super::Style).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError {
    input: String,
}

impl ParseStyleError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown style '{}'", self.input)
    }
}

impl std::error::Error for ParseStyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_error_display() {
        let err = ParseStyleError::new("fg-purple");
        let msg = err.to_string();
        assert!(msg.contains("unknown style"));
        assert!(msg.contains("fg-purple"));
    }
}
