/// Roman numeral validation.
///
/// Checks that an operand is built solely from the seven legal letters before
/// any conversion is attempted.
pub mod validator;
/// Roman numeral to integer conversion.
///
/// Decodes a validated operand using additive and subtractive notation.
pub mod converter;

pub use converter::{letter_value, roman_to_decimal};
pub use validator::{ROMAN_LETTERS, is_valid_roman};
