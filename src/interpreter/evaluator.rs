use crate::{
    ast::Operator,
    error::{LineError, LineResult},
};

/// Applies an operator to two converted operands.
///
/// A missing operation passes `first` through unchanged. `Assign` also yields
/// `first`; its second operand is parsed and converted but otherwise ignored.
/// Arithmetic is checked and never wraps.
///
/// # Parameters
/// - `first`: Value of the first operand.
/// - `operation`: The operator together with the value of the second operand.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns `LineError::RangeExceeded` if the result overflows `i64`.
///
/// # Example
/// ```
/// use roman_words::{ast::Operator, interpreter::evaluator::evaluate};
///
/// assert_eq!(evaluate(10, Some((Operator::Subtract, 5))).unwrap(), 5);
/// assert_eq!(evaluate(4, Some((Operator::Multiply, 3))).unwrap(), 12);
/// assert_eq!(evaluate(7, Some((Operator::Assign, 100))).unwrap(), 7);
/// assert_eq!(evaluate(1994, None).unwrap(), 1994);
/// assert!(evaluate(i64::MAX, Some((Operator::Add, 1))).is_err());
/// ```
pub fn evaluate(first: i64, operation: Option<(Operator, i64)>) -> LineResult<i64> {
    let Some((operator, second)) = operation else {
        return Ok(first);
    };

    let result = match operator {
        Operator::Add => first.checked_add(second),
        Operator::Subtract => first.checked_sub(second),
        Operator::Multiply => first.checked_mul(second),
        Operator::Assign => Some(first),
    };

    result.ok_or_else(|| LineError::RangeExceeded { details: format!("{first} {operator} {second} overflows") })
}
