use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;

use crate::{
    ast::{
        node::{Node, Scope},
        operation::Operation,
    },
    errors::errors::{Error, ErrorImpl},
    splitter::splitter::TokenGroup,
};

use super::{
    declaration::resolve_declaration,
    lookups::{is_operator_char, symbol_at, Operator, OperatorSymbol},
};

lazy_static! {
    // Text ending in the mantissa of a number with an exponent, such as `1.5e`.
    static ref EXPONENT_MANTISSA: Regex =
        Regex::new("(^|[^A-Za-z0-9_.])([0-9]+\\.?[0-9]*|\\.[0-9]+)[eE]$").unwrap();
}

/// Resolves a statement's token groups into a single node.
///
/// Returns `None` for a statement with nothing in it. Assignments write into
/// the assigned variable, which may belong to `scope`. Group nesting and
/// operator nesting together may not recurse deeper than `max_depth`.
pub fn resolve_statement(groups: &[TokenGroup], scope: &Scope, max_depth: usize) -> Result<Option<Node>, Error> {
    Resolver { scope, max_depth }.resolve_groups(groups, 0)
}

/// An element of a flattened statement: raw text, or an already resolved group.
#[derive(Debug)]
enum Element {
    Raw(String),
    Resolved(Node),
}

/// The operator a flat sequence is split at.
struct Root {
    index: usize,
    position: usize,
    symbol: &'static OperatorSymbol,
    fragment: String,
}

struct Resolver<'a> {
    scope: &'a Scope,
    max_depth: usize,
}

impl Resolver<'_> {
    fn resolve_groups(&self, groups: &[TokenGroup], depth: usize) -> Result<Option<Node>, Error> {
        if depth > self.max_depth {
            let text = groups.iter().find_map(TokenGroup::as_fragment).unwrap_or_default();
            return Err(self.recursion_limit(text));
        }

        let mut elements = Vec::with_capacity(groups.len());

        for group in groups {
            match group {
                TokenGroup::Fragment(text) => elements.push(Element::Raw(text.clone())),
                TokenGroup::Group(nested) => {
                    if let Some(node) = self.resolve_groups(nested, depth + 1)? {
                        elements.push(Element::Resolved(node));
                    }
                }
            }
        }

        self.resolve_elements(elements, depth)
    }

    fn resolve_elements(&self, mut elements: Vec<Element>, depth: usize) -> Result<Option<Node>, Error> {
        let Some(root) = find_root(&elements) else {
            return Ok(self.resolve_leaf(elements));
        };

        if depth > self.max_depth {
            return Err(self.recursion_limit(&root.fragment));
        }

        trace!(
            "splitting `{}` at `{}` (offset {})",
            root.fragment,
            root.symbol.text,
            root.position
        );

        // Each side's operand is the split text plus every element on that side.
        let mut right_elements = elements.split_off(root.index + 1);
        elements.pop();

        let left_text = root.fragment[..root.position].trim();
        let right_text = root.fragment[root.position + root.symbol.text.len()..].trim();
        if !left_text.is_empty() {
            elements.push(Element::Raw(left_text.to_string()));
        }
        if !right_text.is_empty() {
            right_elements.insert(0, Element::Raw(right_text.to_string()));
        }

        let left = self.resolve_elements(elements, depth + 1)?;
        let right = self.resolve_elements(right_elements, depth + 1)?;

        build_node(&root, left, right).map(Some)
    }

    fn resolve_leaf(&self, elements: Vec<Element>) -> Option<Node> {
        if elements.len() > 1 {
            debug!(
                "no operator between {} elements, keeping the first: {:?}",
                elements.len(),
                elements
            );
        }

        match elements.into_iter().next()? {
            Element::Resolved(node) => Some(node),
            Element::Raw(text) => Some(resolve_declaration(&text, self.scope)),
        }
    }

    fn recursion_limit(&self, text: &str) -> Error {
        Error::new(ErrorImpl::RecursionLimitExceeded { limit: self.max_depth }, text)
    }
}

/// Combines the operands of `root`. Operators with an operand missing, or
/// with one they cannot take, keep what is there rather than failing.
fn build_node(root: &Root, left: Option<Node>, right: Option<Node>) -> Result<Node, Error> {
    match (root.symbol.operator, left, right) {
        (Operator::Assign, Some(Node::Variable(variable)), Some(value)) => {
            variable.borrow_mut().value = Some(value);
            Ok(Node::Variable(variable))
        }
        (Operator::Assign, Some(target), Some(_)) => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget {
                target: describe(&target),
            },
            root.fragment.as_str(),
        )),
        (Operator::Binary(kind), Some(left), Some(right))
        | (Operator::BinaryOrPrefix(kind, _), Some(left), Some(right)) => {
            Ok(Operation::binary(kind, left, right).into())
        }
        (Operator::BinaryOrPrefix(_, kind), None, Some(right)) | (Operator::Prefix(kind), None, Some(right)) => {
            Ok(Operation::unary(kind, right).into())
        }
        (Operator::Prefix(kind), Some(left), Some(right)) => {
            warn!(
                "`{}` takes no left operand, dropping {:?} in `{}`",
                root.symbol.text, left, root.fragment
            );
            Ok(Operation::unary(kind, right).into())
        }
        (_, Some(operand), None) | (_, None, Some(operand)) => {
            warn!(
                "`{}` is missing an operand in `{}`, keeping {:?}",
                root.symbol.text, root.fragment, operand
            );
            Ok(operand)
        }
        (_, None, None) => {
            warn!("`{}` has no operands in `{}`", root.symbol.text, root.fragment);
            Ok(Node::Name(root.fragment.clone()))
        }
    }
}

fn describe(node: &Node) -> String {
    match node {
        Node::Name(name) => name.clone(),
        other => format!("{:?}", other),
    }
}

/// Picks the most eligible operator across the raw fragments. Ties go to the
/// later fragment; within a fragment the leftmost occurrence wins.
fn find_root(elements: &[Element]) -> Option<Root> {
    let mut best: Option<Root> = None;

    for (index, element) in elements.iter().enumerate() {
        let Element::Raw(fragment) = element else {
            continue;
        };
        let Some((position, symbol)) = fragment_root(fragment) else {
            continue;
        };

        if best
            .as_ref()
            .map_or(true, |best| symbol.eligibility >= best.symbol.eligibility)
        {
            best = Some(Root {
                index,
                position,
                symbol,
                fragment: fragment.clone(),
            });
        }
    }

    best
}

fn fragment_root(fragment: &str) -> Option<(usize, &'static OperatorSymbol)> {
    let candidates = operator_candidates(fragment);
    let eligibility = candidates.iter().map(|(_, symbol)| symbol.eligibility).max()?;

    // A lone prefix operator yields to binary operators of the same class.
    candidates
        .into_iter()
        .filter(|(_, symbol)| symbol.eligibility == eligibility)
        .min_by_key(|(position, symbol)| (matches!(symbol.operator, Operator::Prefix(_)), *position))
}

/// Every operator occurrence in `fragment` that can serve as a split point.
fn operator_candidates(fragment: &str) -> Vec<(usize, &'static OperatorSymbol)> {
    let mut candidates = vec![];
    let mut previous: Option<char> = None;
    let mut pos = 0;

    while let Some(c) = fragment[pos..].chars().next() {
        if let Some(symbol) = symbol_at(fragment, pos) {
            if is_split_candidate(fragment, pos, symbol, previous) {
                candidates.push((pos, symbol));
            }
            previous = symbol.text.chars().last();
            pos += symbol.text.len();
            continue;
        }

        if !c.is_whitespace() {
            previous = Some(c);
        }
        pos += c.len_utf8();
    }

    candidates
}

fn is_split_candidate(fragment: &str, pos: usize, symbol: &OperatorSymbol, previous: Option<char>) -> bool {
    if matches!(symbol.text, "+" | "-") && EXPONENT_MANTISSA.is_match(&fragment[..pos]) {
        return false;
    }

    match symbol.operator {
        // `=` directly next to another `=` or a comparison is not an assignment.
        Operator::Assign => {
            let next_is_equals = fragment[pos + 1..].starts_with('=');
            let after_comparison = fragment[..pos].ends_with(|c: char| matches!(c, '<' | '>' | '!' | '='));
            !next_is_equals && !after_comparison
        }
        // A sign right after another operator belongs to the operand.
        _ if symbol.is_prefix_capable() => !previous.is_some_and(is_operator_char),
        _ => true,
    }
}
