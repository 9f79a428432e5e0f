use crate::error::{LineError, LineResult};

/// Returns the base value of a single Roman numeral letter.
///
/// # Returns
/// - `Some(value)` for one of `I V X L C D M`.
/// - `None` for any other character, lowercase letters included.
#[must_use]
pub const fn letter_value(letter: char) -> Option<i64> {
    match letter {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Converts a Roman numeral to its integer value.
///
/// The token is scanned from its last letter to its first. A letter worth
/// less than the letter to its right is subtracted, every other letter is
/// added. Subtractive pairs are not checked for legality, so `IIX` decodes
/// permissively and malformed tokens may yield zero or a negative value.
///
/// # Parameters
/// - `token`: An operand that has already passed validation.
///
/// # Returns
/// The decoded value.
///
/// # Errors
/// Returns `LineError::InvalidNumeral` if the token contains a character that
/// is not a Roman numeral letter. Such a character is never treated as zero.
///
/// # Example
/// ```
/// use roman_words::{error::LineError, numeral::roman_to_decimal};
///
/// assert_eq!(roman_to_decimal("IV").unwrap(), 4);
/// assert_eq!(roman_to_decimal("MCMXCIV").unwrap(), 1994);
/// assert_eq!(roman_to_decimal("IIX").unwrap(), 10);
///
/// let err = roman_to_decimal("XIZ").unwrap_err();
/// assert!(matches!(err, LineError::InvalidNumeral { .. }));
/// ```
pub fn roman_to_decimal(token: &str) -> LineResult<i64> {
    let mut total = 0;
    let mut previous = 0;

    for letter in token.chars().rev() {
        let current =
            letter_value(letter).ok_or_else(|| LineError::InvalidNumeral { token: token.to_string() })?;

        if current < previous {
            total -= current;
        } else {
            total += current;
        }
        previous = current;
    }

    Ok(total)
}
