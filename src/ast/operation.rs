use std::fmt::Display;

use super::node::Node;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperationType {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Not,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    And,
    Or,
    BitwiseAnd,
    BitwiseOr,
    ShiftLeftLogical,
    ShiftRightLogical,
}

impl OperationType {
    pub fn is_unary(&self) -> bool {
        matches!(self, OperationType::Negate | OperationType::Not)
    }

    /// Number of inputs an operation of this kind takes.
    pub fn operand_count(&self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An operation node and its ordered operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    type_: OperationType,
    inputs: Vec<Node>,
}

impl Operation {
    pub fn unary(type_: OperationType, input: Node) -> Self {
        debug_assert!(type_.is_unary());
        Operation {
            type_,
            inputs: vec![input],
        }
    }

    pub fn binary(type_: OperationType, left: Node, right: Node) -> Self {
        debug_assert!(!type_.is_unary());
        Operation {
            type_,
            inputs: vec![left, right],
        }
    }

    pub fn get_type(&self) -> OperationType {
        self.type_
    }

    pub fn inputs(&self) -> &[Node] {
        &self.inputs
    }
}
