/// The seven letters a Roman numeral may be built from.
pub const ROMAN_LETTERS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Checks whether a token consists solely of Roman numeral letters.
///
/// Only the uppercase letters `I V X L C D M` are accepted. The empty token is
/// vacuously valid; callers that need a non-empty operand must check that
/// separately.
///
/// # Example
/// ```
/// use roman_words::numeral::is_valid_roman;
///
/// assert!(is_valid_roman("MCMXCIV"));
/// assert!(!is_valid_roman("mcmxciv"));
/// assert!(!is_valid_roman("ABC"));
/// assert!(is_valid_roman(""));
/// ```
#[must_use]
pub fn is_valid_roman(token: &str) -> bool {
    token.chars().all(|c| ROMAN_LETTERS.contains(&c))
}
