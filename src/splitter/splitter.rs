use crate::errors::errors::{Error, ErrorImpl};

/// An element of a split: a trimmed text fragment or a bracketed sub-region.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenGroup {
    Fragment(String),
    Group(Vec<TokenGroup>),
}

impl TokenGroup {
    pub fn as_fragment(&self) -> Option<&str> {
        match self {
            TokenGroup::Fragment(text) => Some(text),
            TokenGroup::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&[TokenGroup]> {
        match self {
            TokenGroup::Fragment(_) => None,
            TokenGroup::Group(groups) => Some(groups),
        }
    }

    /// Nesting depth below this element; a fragment has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            TokenGroup::Fragment(_) => 0,
            TokenGroup::Group(groups) => 1 + groups.iter().map(TokenGroup::depth).max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

impl BracketPair {
    pub const CURLY: BracketPair = BracketPair { open: '{', close: '}' };
    pub const PAREN: BracketPair = BracketPair { open: '(', close: ')' };
}

impl Default for BracketPair {
    fn default() -> Self {
        BracketPair::CURLY
    }
}

/// Splits `text` into fragments and nested groups delimited by `brackets`.
///
/// An unmatched close bracket at the top level is ordinary text. An unmatched
/// open bracket leaves its group holding whatever followed it. Nesting deeper
/// than `max_depth` is an error.
pub fn split(text: &str, brackets: BracketPair, max_depth: usize) -> Result<Vec<TokenGroup>, Error> {
    let splitter = Splitter {
        text,
        brackets,
        max_depth,
    };

    Ok(splitter.split_level(0, 0)?.0)
}

struct Splitter<'a> {
    text: &'a str,
    brackets: BracketPair,
    max_depth: usize,
}

impl Splitter<'_> {
    /// Splits from byte offset `start` until the close bracket ending this
    /// level (or the end of input), returning the groups and the offset just
    /// past what was consumed.
    fn split_level(&self, start: usize, depth: usize) -> Result<(Vec<TokenGroup>, usize), Error> {
        if depth > self.max_depth {
            return Err(Error::new(
                ErrorImpl::RecursionLimitExceeded { limit: self.max_depth },
                self.text,
            ));
        }

        let mut groups = vec![];
        let mut in_double_quoted = false;
        let mut in_single_quoted = false;
        let mut fragment_start = start;
        let mut pos = start;

        while let Some(c) = self.text[pos..].chars().next() {
            let next = pos + c.len_utf8();

            match c {
                '"' if !in_single_quoted => in_double_quoted = !in_double_quoted,
                '\'' if !in_double_quoted => in_single_quoted = !in_single_quoted,
                _ if in_double_quoted || in_single_quoted => {}
                c if c == self.brackets.open => {
                    push_fragment(&mut groups, &self.text[fragment_start..pos]);
                    let (nested, end) = self.split_level(next, depth + 1)?;
                    groups.push(TokenGroup::Group(nested));
                    fragment_start = end;
                    pos = end;
                    continue;
                }
                c if c == self.brackets.close && depth > 0 => {
                    push_fragment(&mut groups, &self.text[fragment_start..pos]);
                    return Ok((groups, next));
                }
                _ => {}
            }

            pos = next;
        }

        push_fragment(&mut groups, &self.text[fragment_start..]);
        Ok((groups, self.text.len()))
    }
}

fn push_fragment(groups: &mut Vec<TokenGroup>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        groups.push(TokenGroup::Fragment(fragment.to_string()));
    }
}
