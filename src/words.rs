use crate::error::{LineError, LineResult};

/// Words for the digits one through nine, indexed by digit.
pub const ONES: [&str; 10] =
    ["", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE"];
/// Words for ten through nineteen, indexed by `n - 10`.
pub const TEENS: [&str; 10] = ["TEN",
                               "ELEVEN",
                               "TWELVE",
                               "THIRTEEN",
                               "FOURTEEN",
                               "FIFTEEN",
                               "SIXTEEN",
                               "SEVENTEEN",
                               "EIGHTEEN",
                               "NINETEEN"];
/// Words for the multiples of ten from twenty upwards, indexed by tens digit.
pub const TENS: [&str; 10] = ["", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY",
                              "EIGHTY", "NINETY"];
/// Names of the three-digit groups, indexed by place. The units group has no
/// name.
pub const PLACES: [&str; 3] = ["", "THOUSAND", "MILLION"];

/// The word written for a value of zero.
pub const ZERO: &str = "ZERO";
/// The word prefixed to negative values.
pub const NEGATIVE: &str = "NEGATIVE";
/// The word following a hundreds digit.
pub const HUNDRED: &str = "HUNDRED";

/// Largest magnitude that fits in the named groups.
pub const MAX_SPELLABLE: u64 = 999_999_999;

const GROUP_SIZE: u64 = 1000;

/// Spells an integer in uppercase English words.
///
/// Zero is spelled `ZERO` and nothing else. Negative values are prefixed with
/// `NEGATIVE`. The magnitude is split into three-digit groups which are
/// collected least significant first and then joined most significant first,
/// so every word is separated by exactly one space.
///
/// # Parameters
/// - `value`: The integer to spell.
///
/// # Returns
/// The words for `value`.
///
/// # Errors
/// Returns `LineError::RangeExceeded` if the magnitude needs a group beyond
/// millions, that is if it is one billion or more.
///
/// # Example
/// ```
/// use roman_words::{error::LineError, words::to_words};
///
/// assert_eq!(to_words(0).unwrap(), "ZERO");
/// assert_eq!(to_words(-5).unwrap(), "NEGATIVE FIVE");
/// assert_eq!(to_words(1994).unwrap(), "ONE THOUSAND NINE HUNDRED NINETY FOUR");
/// assert_eq!(to_words(2_000_015).unwrap(), "TWO MILLION FIFTEEN");
///
/// let err = to_words(1_000_000_000).unwrap_err();
/// assert!(matches!(err, LineError::RangeExceeded { .. }));
/// ```
pub fn to_words(value: i64) -> LineResult<String> {
    if value == 0 {
        return Ok(ZERO.to_string());
    }

    let magnitude = value.unsigned_abs();
    if magnitude > MAX_SPELLABLE {
        return Err(LineError::RangeExceeded { details: format!("{value} needs more than {} digit groups",
                                                               PLACES.len()) });
    }

    let mut groups = Vec::with_capacity(PLACES.len());
    let mut remaining = magnitude;

    for place in PLACES {
        let chunk = remaining % GROUP_SIZE;
        remaining /= GROUP_SIZE;

        if chunk != 0 {
            let mut group = spell_group(chunk);
            if !place.is_empty() {
                group.push(place);
            }
            groups.push(group);
        }

        if remaining == 0 {
            break;
        }
    }

    let mut words = Vec::new();
    if value < 0 {
        words.push(NEGATIVE);
    }
    words.extend(groups.into_iter().rev().flatten());

    Ok(words.join(" "))
}

/// Spells a single group between 1 and 999 without its place name.
#[allow(clippy::cast_possible_truncation)]
fn spell_group(chunk: u64) -> Vec<&'static str> {
    let chunk = chunk as usize;
    let hundreds = chunk / 100;
    let rest = chunk % 100;

    let mut words = Vec::with_capacity(4);

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push(HUNDRED);
    }

    match rest {
        0 => {},
        1..=9 => words.push(ONES[rest]),
        10..=19 => words.push(TEENS[rest - 10]),
        _ => {
            words.push(TENS[rest / 10]);
            if rest % 10 != 0 {
                words.push(ONES[rest % 10]);
            }
        },
    }

    words
}
