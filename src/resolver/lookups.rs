use lazy_static::lazy_static;

use crate::ast::operation::OperationType;

/// How eligible an operator is to become the root of a statement, least first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Eligibility {
    Additive,
    Subtractive,
    Multiplicative,
    Divisive,
    Relational,
    Assignment,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Operator {
    Assign,
    Binary(OperationType),
    /// Binary with a left operand, prefix without one (`-`).
    BinaryOrPrefix(OperationType, OperationType),
    Prefix(OperationType),
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorSymbol {
    pub text: &'static str,
    pub eligibility: Eligibility,
    pub operator: Operator,
}

impl OperatorSymbol {
    pub fn is_prefix_capable(&self) -> bool {
        matches!(self.operator, Operator::BinaryOrPrefix(..) | Operator::Prefix(_))
    }
}

const fn symbol(text: &'static str, eligibility: Eligibility, operator: Operator) -> OperatorSymbol {
    OperatorSymbol {
        text,
        eligibility,
        operator,
    }
}

lazy_static! {
    /// Every recognised operator symbol. Two-character symbols come first so
    /// they win over their one-character prefixes.
    pub static ref OPERATOR_SYMBOLS: Vec<OperatorSymbol> = {
        use Eligibility::*;
        use OperationType as Op;

        vec![
            symbol(">=", Relational, Operator::Binary(Op::GreaterThanOrEqualTo)),
            symbol("<=", Relational, Operator::Binary(Op::LessThanOrEqualTo)),
            symbol("!=", Relational, Operator::Binary(Op::NotEqualTo)),
            symbol("==", Relational, Operator::Binary(Op::EqualTo)),
            symbol("||", Relational, Operator::Binary(Op::Or)),
            symbol("&&", Relational, Operator::Binary(Op::And)),
            symbol("<<", Relational, Operator::Binary(Op::ShiftLeftLogical)),
            symbol(">>", Relational, Operator::Binary(Op::ShiftRightLogical)),
            symbol("<", Relational, Operator::Binary(Op::LessThan)),
            symbol(">", Relational, Operator::Binary(Op::GreaterThan)),
            symbol("|", Relational, Operator::Binary(Op::BitwiseOr)),
            symbol("&", Relational, Operator::Binary(Op::BitwiseAnd)),
            symbol("!", Relational, Operator::Prefix(Op::Not)),
            symbol("=", Assignment, Operator::Assign),
            symbol("+", Additive, Operator::Binary(Op::Add)),
            symbol("-", Subtractive, Operator::BinaryOrPrefix(Op::Subtract, Op::Negate)),
            symbol("*", Multiplicative, Operator::Binary(Op::Multiply)),
            symbol("/", Divisive, Operator::Binary(Op::Divide)),
        ]
    };
}

/// Characters that can start an operator symbol.
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '<' | '>' | '=' | '!' | '&' | '|')
}

/// The longest operator symbol starting at byte offset `pos` of `text`.
pub fn symbol_at(text: &str, pos: usize) -> Option<&'static OperatorSymbol> {
    let rest = text.get(pos..)?;
    OPERATOR_SYMBOLS.iter().find(|symbol| rest.starts_with(symbol.text))
}
