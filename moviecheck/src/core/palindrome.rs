//! Single-token palindrome predicate.

use crate::core::error::InvalidInputError;

/// True if `token` reads the same forwards and backwards.
///
/// Comparison is case-sensitive and per `char`: `"kayak"` is a palindrome,
/// `"Kayak"` is not. The empty string and single characters are palindromes.
///
/// Returns [`InvalidInputError::Whitespace`] if `token` contains whitespace;
/// callers are expected to tokenize first.
pub fn is_palindrome(token: &str) -> Result<bool, InvalidInputError> {
    if token.chars().any(char::is_whitespace) {
        return Err(InvalidInputError::Whitespace(token.to_string()));
    }
    Ok(token.chars().eq(token.chars().rev()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kayak_is_palindrome() {
        assert_eq!(is_palindrome("kayak"), Ok(true));
    }

    #[test]
    fn splunk_is_not_palindrome() {
        assert_eq!(is_palindrome("splunk"), Ok(false));
    }

    #[test]
    fn empty_and_single_char_are_palindromes() {
        assert_eq!(is_palindrome(""), Ok(true));
        assert_eq!(is_palindrome("x"), Ok(true));
    }

    /// Capitalization is significant: no case folding before comparison.
    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(is_palindrome("Kayak"), Ok(false));
        assert_eq!(is_palindrome("KayaK"), Ok(true));
    }

    #[test]
    fn whitespace_is_rejected() {
        assert_eq!(
            is_palindrome("ka yak"),
            Err(InvalidInputError::Whitespace("ka yak".to_string()))
        );
        assert!(is_palindrome("ka\tyak").is_err());
        assert!(is_palindrome(" ").is_err());
    }

    /// Multi-byte characters are compared as whole chars, not bytes.
    #[test]
    fn compares_chars_not_bytes() {
        assert_eq!(is_palindrome("été"), Ok(true));
        assert_eq!(is_palindrome("ab€ba"), Ok(true));
        assert_eq!(is_palindrome("ab€"), Ok(false));
    }

    #[test]
    fn reversal_preserves_answer() {
        for token in ["kayak", "splunk", "", "a", "ab", "Aba", "racecar", "x-y-x", "Dante"] {
            let reversed: String = token.chars().rev().collect();
            assert_eq!(
                is_palindrome(token),
                is_palindrome(&reversed),
                "token {token:?}"
            );
        }
    }
}
