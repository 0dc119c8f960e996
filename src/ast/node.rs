use std::{collections::HashMap, fmt::Debug, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use super::{
    operation::{Operation, OperationType},
    variable::{Variable, VariableRef},
};

/// Bindings visible to the statements being parsed, keyed by identifier.
pub type Scope = HashMap<String, VariableRef>;

lazy_static! {
    static ref INT_LITERAL: Regex = Regex::new("^(0[xX][0-9a-fA-F]+|[0-9]+)([uU]?)$").unwrap();
    static ref FLOAT_LITERAL: Regex = Regex::new(
        "^([0-9]+\\.[0-9]*([eE][+-]?[0-9]+)?|\\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+([eE][+-]?[0-9]+)?)(f|F|lf|LF)?$"
    )
    .unwrap();
}

/// A literal value written directly in source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Literal {
    /// Reads a single source token as a literal, if it is one.
    pub fn from_token(token: &str) -> Option<Literal> {
        match token {
            "true" => return Some(Literal::Bool(true)),
            "false" => return Some(Literal::Bool(false)),
            _ => {}
        }

        if let Some(captures) = INT_LITERAL.captures(token) {
            let digits = &captures[1];
            let unsigned = !captures[2].is_empty();
            let hex = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X"));
            let value = match hex {
                Some(hex) => u64::from_str_radix(hex, 16).ok(),
                None => digits.parse::<u64>().ok(),
            };

            // Integers too large for their type are kept as floats.
            return match value {
                Some(value) if unsigned => Some(Literal::UInt(value)),
                Some(value) => Some(i64::try_from(value).map_or(Literal::Float(value as f64), Literal::Int)),
                None => {
                    let value = match hex {
                        Some(hex) => hex
                            .chars()
                            .filter_map(|c| c.to_digit(16))
                            .fold(0.0, |value, digit| value * 16.0 + f64::from(digit)),
                        None => digits.parse::<f64>().ok()?,
                    };
                    Some(Literal::Float(value))
                }
            };
        }

        if let Some(captures) = FLOAT_LITERAL.captures(token) {
            return captures[1].parse::<f64>().ok().map(Literal::Float);
        }

        None
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Bool(_) => None,
            Literal::Int(value) => Some(*value as f64),
            Literal::UInt(value) => Some(*value as f64),
            Literal::Float(value) => Some(*value),
        }
    }
}

/// A resolved piece of a statement.
#[derive(Clone)]
pub enum Node {
    Operation(Operation),
    Variable(VariableRef),
    Literal(Literal),
    /// A name with no binding in the scope it was resolved against.
    Name(String),
}

impl Node {
    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Node::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableRef> {
        match self {
            Node::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Node::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Kind of the operation at this node, if it is one.
    pub fn operation_type(&self) -> Option<OperationType> {
        self.as_operation().map(Operation::get_type)
    }

    /// Name of the variable at this node, if it is a named variable.
    pub fn variable_name(&self) -> Option<String> {
        self.as_variable()
            .and_then(|variable| variable.borrow().name().map(String::from))
    }
}

impl From<Operation> for Node {
    fn from(operation: Operation) -> Self {
        Node::Operation(operation)
    }
}

impl From<Variable> for Node {
    fn from(variable: Variable) -> Self {
        Node::Variable(variable.into_ref())
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}

// Variables compare by identity: `x = x + 1` makes a variable reachable from its own value.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Operation(left), Node::Operation(right)) => left == right,
            (Node::Variable(left), Node::Variable(right)) => Rc::ptr_eq(left, right),
            (Node::Literal(left), Node::Literal(right)) => left == right,
            (Node::Name(left), Node::Name(right)) => left == right,
            _ => false,
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Operation(operation) => operation.fmt(f),
            Node::Variable(variable) => match variable.try_borrow() {
                Ok(variable) => f
                    .debug_struct("Variable")
                    .field("name", &variable.name())
                    .field("type", &variable.get_type())
                    .finish_non_exhaustive(),
                Err(_) => write!(f, "Variable(<borrowed>)"),
            },
            Node::Literal(literal) => literal.fmt(f),
            Node::Name(name) => f.debug_tuple("Name").field(name).finish(),
        }
    }
}
