use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::ast::{
    node::{Literal, Node, Scope},
    variable::{Qualifier, Variable, VariableType},
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("\\s+").unwrap();
}

const PRECISION_KEYWORDS: [&str; 3] = ["lowp", "mediump", "highp"];

/// Resolves operator-free text: a declaration, a scoped name, a literal, or
/// (failing all of those) the bare text as an unbound name.
pub fn resolve_declaration(text: &str, scope: &Scope) -> Node {
    let text = text.trim();
    let tokens: Vec<&str> = WHITESPACE.split(text).collect();

    if tokens.len() > 1 {
        return match parse_declaration(&tokens) {
            Some(variable) => Node::from(variable),
            None => Node::Name(text.to_string()),
        };
    }

    if let Some(variable) = scope.get(text) {
        return Node::Variable(Rc::clone(variable));
    }

    match Literal::from_token(text) {
        Some(literal) => Node::Literal(literal),
        None => Node::Name(text.to_string()),
    }
}

/// `[qualifier] [precision] type name`, where type is a scalar keyword or a
/// vector keyword such as `vec3` or `ivec2`.
fn parse_declaration(tokens: &[&str]) -> Option<Variable> {
    let mut tokens = tokens.iter().copied().peekable();

    let qualifier = match tokens.peek().and_then(|token| Qualifier::from_keyword(token)) {
        Some(qualifier) => {
            tokens.next();
            qualifier
        }
        None => Qualifier::Local,
    };

    // Precision only matters to code generation.
    tokens.next_if(|token| PRECISION_KEYWORDS.contains(token));

    let type_token = tokens.next()?;
    let name = tokens.next()?.to_string();
    if tokens.next().is_some() {
        return None;
    }

    let variable = match VariableType::from_keyword(type_token) {
        Some(type_) => Variable::new(type_, Some(name)),
        None if type_token.contains("vec") => {
            let prefix = type_token.chars().next()?;
            let arity_offset = if prefix == 'v' { 3 } else { 4 };
            let arity = type_token
                .get(arity_offset..arity_offset + 1)?
                .parse::<usize>()
                .ok()
                .filter(|arity| (2..=4).contains(arity))?;

            Variable::vector(VariableType::from_vector_prefix(prefix), arity, Some(name))
        }
        None => return None,
    };

    Some(variable.with_qualifier(qualifier))
}
