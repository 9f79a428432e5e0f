use logos::Logos;

use crate::{
    ast::Expression,
    error::{LineError, LineResult},
    interpreter::lexer::Token,
};

/// Longest operand the parser accepts.
pub const MAX_TOKEN_LEN: usize = 49;

/// Parses one input line into an [`Expression`].
///
/// The line must start with an operand. After it, whitespace is skipped and
/// exactly one token is taken as the candidate operator. If that token is one
/// of `+ - * =`, the operand following it becomes the second operand;
/// otherwise the candidate is discarded and the line is a single operand.
/// Anything after the second operand is ignored.
///
/// Grammar: `line := operand (operator operand)?`
///
/// # Parameters
/// - `line`: The input line, without its terminator.
///
/// # Returns
/// The parsed expression. Operands are not validated here.
///
/// # Errors
/// - `InvalidNumeral` if the line does not start with an operand or an
///   operator is not followed by one.
/// - `TokenTooLong` if an operand exceeds [`MAX_TOKEN_LEN`] characters.
///
/// # Example
/// ```
/// use roman_words::{
///     ast::{Expression, Operator},
///     interpreter::parser::parse_line,
/// };
///
/// let parsed = parse_line("III + II").unwrap();
/// assert_eq!(parsed,
///            Expression::binary("III".to_string(), Operator::Add, "II".to_string()));
///
/// // The candidate operator `I` is discarded.
/// let parsed = parse_line("III II").unwrap();
/// assert_eq!(parsed, Expression::single("III".to_string()));
///
/// assert!(parse_line("+ II").is_err());
/// ```
pub fn parse_line(line: &str) -> LineResult<Expression> {
    let mut lexer = Token::lexer(line);

    let first = match lexer.next() {
        Some(Ok(Token::Operand(operand))) if lexer.span().start == 0 => operand,
        _ => return Err(missing_operand()),
    };
    check_length(&first)?;

    let operator = match lexer.next() {
        Some(Ok(token)) => token.operator(),
        _ => None,
    };
    let Some(operator) = operator else {
        return Ok(Expression::single(first));
    };

    let second = match lexer.next() {
        Some(Ok(Token::Operand(operand))) => operand,
        _ => return Err(missing_operand()),
    };
    check_length(&second)?;

    Ok(Expression::binary(first, operator, second))
}

fn check_length(operand: &str) -> LineResult<()> {
    if operand.len() > MAX_TOKEN_LEN {
        return Err(LineError::TokenTooLong { length: operand.len(),
                                             max:    MAX_TOKEN_LEN, });
    }
    Ok(())
}

const fn missing_operand() -> LineError {
    LineError::InvalidNumeral { token: String::new() }
}
