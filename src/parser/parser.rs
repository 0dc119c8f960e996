use std::rc::Rc;

use log::debug;

use crate::{
    ast::node::{Node, Scope},
    errors::errors::Error,
    preprocessor::preprocessor::preprocess,
    resolver::resolver::resolve_statement,
    splitter::splitter::{split, BracketPair, TokenGroup},
};

/// Settings for a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest nesting accepted: braces, parentheses, and operators within
    /// a statement.
    pub max_depth: usize,
    /// Add every named variable a statement resolves to into the scope, so
    /// later statements can refer to it.
    pub declare_into_scope: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: 256,
            declare_into_scope: false,
        }
    }
}

/// Parses shader source against a scope of known variables.
///
/// The scope is consulted for every statement. Assignments to scoped
/// variables update those variables in place.
pub struct Parser {
    /// Variables visible to the statements being parsed
    scope: Scope,
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Parser::with_scope(Scope::new(), options)
    }

    pub fn with_scope(scope: Scope, options: ParserOptions) -> Self {
        Parser { scope, options }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_scope(self) -> Scope {
        self.scope
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a whole source, returning its statements in source order.
    ///
    /// Statements inside blocks follow the text preceding the block.
    pub fn parse(&mut self, source: &str) -> Result<Vec<Node>, Error> {
        let source = preprocess(source)?;
        let blocks = split(&source, BracketPair::CURLY, self.options.max_depth)?;

        let mut statements = vec![];
        self.parse_blocks(&blocks, &mut statements)?;

        Ok(statements)
    }

    fn parse_blocks(&mut self, blocks: &[TokenGroup], statements: &mut Vec<Node>) -> Result<(), Error> {
        for block in blocks {
            match block {
                TokenGroup::Fragment(text) => {
                    for statement in text.split(';') {
                        if let Some(node) = self.parse_statement(statement)? {
                            statements.push(node);
                        }
                    }
                }
                TokenGroup::Group(nested) => self.parse_blocks(nested, statements)?,
            }
        }

        Ok(())
    }

    /// Parses a single statement (no trailing `;`). Blank statements give `None`.
    pub fn parse_statement(&mut self, statement: &str) -> Result<Option<Node>, Error> {
        let statement = statement.trim();
        if statement.is_empty() {
            return Ok(None);
        }

        let groups = split(statement, BracketPair::PAREN, self.options.max_depth)?;
        let node = resolve_statement(&groups, &self.scope, self.options.max_depth)?;

        if let Some(node) = &node {
            debug!("resolved `{}` to {:?}", statement, node);

            if self.options.declare_into_scope {
                self.declare(node);
            }
        }

        Ok(node)
    }

    fn declare(&mut self, node: &Node) {
        let Node::Variable(variable) = node else {
            return;
        };

        let name = variable.borrow().name().map(String::from);
        if let Some(name) = name {
            self.scope.insert(name, Rc::clone(variable));
        }
    }
}

/// Parses `source` with default options against a copy of `scope`.
///
/// The copy shares its variables with `scope`, so assignments to them are
/// visible to the caller.
pub fn parse(source: &str, scope: &Scope) -> Result<Vec<Node>, Error> {
    Parser::with_scope(scope.clone(), ParserOptions::default()).parse(source)
}
