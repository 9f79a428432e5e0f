/// An arithmetic operator that may join two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Assignment (`=`); evaluates to the first operand.
    Assign,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Assign => "=",
        };
        write!(f, "{operator}")
    }
}

/// One parsed input line.
///
/// An expression is either a single operand or two operands joined by an
/// operator. The operator and the second operand always travel together.
/// Operands are kept as written; validation and conversion happen later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The operand at the start of the line.
    pub first:     String,
    /// The operator and the operand following it, if any.
    pub operation: Option<(Operator, String)>,
}

impl Expression {
    /// Creates an expression consisting of a single operand.
    #[must_use]
    pub const fn single(first: String) -> Self {
        Self { first,
               operation: None }
    }

    /// Creates an expression applying `operator` to two operands.
    #[must_use]
    pub const fn binary(first: String, operator: Operator, second: String) -> Self {
        Self { first,
               operation: Some((operator, second)) }
    }

    /// Returns every operand in the order it appears on the line.
    pub fn operands(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.operation
                                                       .as_ref()
                                                       .map(|(_, second)| second.as_str()))
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.operation {
            Some((operator, second)) => write!(f, "{} {operator} {second}", self.first),
            None => write!(f, "{}", self.first),
        }
    }
}
