use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token of an input line.
///
/// Any run of ASCII letters is an operand; whether it is a Roman numeral is
/// decided later by validation.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of letters, such as `XIV` or `abc`.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Operand(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t\n]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the operator this token stands for, if any.
    ///
    /// # Example
    /// ```
    /// use roman_words::{ast::Operator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::Star.operator(), Some(Operator::Multiply));
    /// assert_eq!(Token::Operand("X".to_string()).operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Subtract),
            Self::Star => Some(Operator::Multiply),
            Self::Equals => Some(Operator::Assign),
            Self::Operand(_) | Self::Ignored => None,
        }
    }
}
