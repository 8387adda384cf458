//! Path template compilation.
//!
//! # Responsibilities
//! - Parse `{name}` placeholders out of a route template
//! - Compile the template into an anchored regular expression
//! - Extract placeholder values from a matching request path
//!
//! # Design Decisions
//! - Literal text is regex-escaped; only placeholders are special
//! - Anchored `^...$`: a template never matches a substring of the path
//! - Placeholders match one or more characters up to the next `/`
//! - A single trailing slash is dropped from the template, as `normalize`
//!   drops it from request paths; `/` stays `/`
//! - Groups are positional; names are kept alongside, so any identifier
//!   made of letters, digits and `_` is accepted

use regex::Regex;
use thiserror::Error;

use crate::routing::Params;

/// Expression substituted for every placeholder.
const SEGMENT: &str = "([^/]+)";

/// Reasons a path template cannot be compiled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// `{` without a closing `}`.
    #[error("unclosed '{{' at byte {0}")]
    UnclosedBrace(usize),

    /// `}` without an opening `{`.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),

    /// `{` inside a placeholder.
    #[error("nested '{{' at byte {0}")]
    NestedBrace(usize),

    /// `{}` with no name.
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    /// Name contains something other than letters, digits or `_`.
    #[error("invalid placeholder name: {0:?}")]
    InvalidName(String),

    /// The same name appears twice in one template.
    #[error("duplicate placeholder name: {0}")]
    DuplicateName(String),

    /// The generated expression was rejected by the regex engine.
    #[error("regex compilation failed: {0}")]
    Regex(#[from] regex::Error),
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct Pattern {
    template: String,
    regex: Regex,
    names: Vec<String>,
}

impl Pattern {
    /// Compile `template` into a matcher.
    ///
    /// ```
    /// use route_table::routing::Pattern;
    ///
    /// let pattern = Pattern::compile("/users/{id}").unwrap();
    /// assert!(pattern.is_match("/users/42"));
    /// assert!(!pattern.is_match("/users/42/edit"));
    /// ```
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let mut expr = String::with_capacity(template.len() + 2);
        let mut names: Vec<String> = Vec::new();
        let mut literal = String::new();
        let body = match template.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => template,
        };
        let mut chars = body.char_indices();

        expr.push('^');

        while let Some((start, c)) = chars.next() {
            match c {
                '{' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((pos, '{')) => return Err(PatternError::NestedBrace(pos)),
                            Some((_, c)) => name.push(c),
                            None => return Err(PatternError::UnclosedBrace(start)),
                        }
                    }

                    if name.is_empty() {
                        return Err(PatternError::EmptyPlaceholder(start));
                    }
                    if !is_identifier(&name) {
                        return Err(PatternError::InvalidName(name));
                    }
                    if names.contains(&name) {
                        return Err(PatternError::DuplicateName(name));
                    }

                    expr.push_str(SEGMENT);
                    names.push(name);
                }
                '}' => return Err(PatternError::UnmatchedBrace(start)),
                c => literal.push(c),
            }
        }

        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        Ok(Self {
            template: template.to_string(),
            regex: Regex::new(&expr)?,
            names,
        })
    }

    /// The source template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns true if the whole `path` matches.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and collect the placeholder values.
    ///
    /// Returns `None` when the path does not match.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = Params::with_capacity(self.names.len());

        for (i, name) in self.names.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                params.push(name.clone(), m.as_str().to_string());
            }
        }

        Some(params)
    }
}

fn is_identifier(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
