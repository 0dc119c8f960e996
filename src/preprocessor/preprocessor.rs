use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::errors::errors::{Error, ErrorImpl};

lazy_static! {
    static ref BLOCK_COMMENT: Regex = Regex::new("(?s)/\\*.*?\\*/").unwrap();
    static ref LINE_BREAK: Regex = Regex::new("\r?\n").unwrap();
    static ref WHITESPACE: Regex = Regex::new("\\s+").unwrap();
}

/// A `#define` substitution, applied textually to every later line.
#[derive(Debug, Clone, PartialEq)]
pub struct Macro {
    pub find: String,
    pub replace: String,
}

impl Macro {
    fn apply(&self, line: &str) -> String {
        line.replace(&self.find, &self.replace)
    }
}

/// Strips comments and directives from `source` and expands its macros.
///
/// Macros apply to the lines after their definition only, oldest first.
/// The returned text holds the retained lines, trimmed and joined by `\n`.
pub fn preprocess(source: &str) -> Result<String, Error> {
    let source = BLOCK_COMMENT.replace_all(source, "");
    let source = source.replace("!!", "");

    let mut macros: Vec<Macro> = vec![];
    let mut processed_lines = vec![];

    for raw_line in LINE_BREAK.split(&source) {
        let line = macros
            .iter()
            .fold(raw_line.to_string(), |line, macro_| macro_.apply(&line));
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(directive) = line.strip_prefix('#') {
            if let Some(macro_) = parse_directive(directive.trim(), line)? {
                debug!("defined macro `{}` as `{}`", macro_.find, macro_.replace);
                macros.push(macro_);
            }
            continue;
        }

        let code = strip_line_comment(line).trim_end();
        if !code.is_empty() {
            processed_lines.push(code.to_string());
        }
    }

    Ok(processed_lines.join("\n"))
}

/// Parses the body of a directive line (after `#`). Only `define` produces a
/// macro; any other directive is dropped.
fn parse_directive(directive: &str, line: &str) -> Result<Option<Macro>, Error> {
    let directive = strip_line_comment(directive);
    let mut words = WHITESPACE.splitn(directive.trim(), 3);

    match words.next() {
        Some("define") => {
            let find = words.next().filter(|word| !word.is_empty());
            let replace = words.next().map(str::trim).filter(|word| !word.is_empty());

            match (find, replace) {
                (Some(find), Some(replace)) => Ok(Some(Macro {
                    find: find.to_string(),
                    replace: replace.to_string(),
                })),
                _ => Err(Error::new(
                    ErrorImpl::MalformedMacroDirective {
                        directive: directive.trim().to_string(),
                    },
                    line,
                )),
            }
        }
        _ => {
            warn!("dropping unsupported directive `{}`", line);
            Ok(None)
        }
    }
}

/// Cuts `line` at the first `//` outside a quoted string.
fn strip_line_comment(line: &str) -> &str {
    let mut in_double_quoted = false;
    let mut in_single_quoted = false;
    let mut chars = line.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '"' if !in_single_quoted => in_double_quoted = !in_double_quoted,
            '\'' if !in_double_quoted => in_single_quoted = !in_single_quoted,
            '/' if !in_double_quoted && !in_single_quoted => {
                if chars.next_if(|&(_, next)| next == '/').is_some() {
                    return &line[..pos];
                }
            }
            _ => {}
        }
    }

    line
}
