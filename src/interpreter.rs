/// The lexer module tokenizes a single input line.
///
/// The lexer reads the raw line and produces operand and operator tokens,
/// skipping whitespace. It is the first stage of line processing.
pub mod lexer;
/// The parser module turns the token stream of a line into an [`Expression`].
///
/// # Responsibilities
/// - Splits the line into at most two operands and one operator.
/// - Enforces the maximum operand length.
/// - Rejects lines without a leading operand.
///
/// [`Expression`]: crate::ast::Expression
pub mod parser;
/// The evaluator module applies an operator to converted operands.
pub mod evaluator;
/// Runs the full pipeline for one line.
///
/// Ties together parsing, validation, conversion, evaluation and spelling,
/// and decides which text is written for a line that fails.
pub mod line;
