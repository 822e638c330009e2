//! Template syntax: tokenizer and block parser.
//!
//! ```text
//! {{path.to.value}}          interpolation
//! {{#if path}} .. {{else}} .. {{/if}}
//! {{#unless path}} .. {{/unless}}
//! {{#each path}} .. {{this}} .. {{/each}}
//! ```
//!
//! A block tag alone on its line (only whitespace around it) is
//! "standalone": the whole line, including its newline, is dropped from the
//! output. Interpolations never are.

use thiserror::Error;

/// Errors raised while parsing or evaluating a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed tag starting at line {line}")]
    UnclosedTag { line: usize },

    #[error("empty tag at line {line}")]
    EmptyTag { line: usize },

    #[error("unknown block '{name}' at line {line}")]
    UnknownBlock { name: String, line: usize },

    #[error("'{found}' at line {line} does not close an open block")]
    UnexpectedClose { found: String, line: usize },

    #[error("'else' at line {line} is not inside an if or unless block")]
    UnexpectedElse { line: usize },

    #[error("block '{block}' opened at line {line} is never closed")]
    UnclosedBlock { block: String, line: usize },

    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("variable '{0}' is null")]
    NullVariable(String),

    #[error("variable '{0}' is not a list")]
    NotIterable(String),
}

/// Parsed template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Variable(String),
    Conditional {
        path: String,
        negated: bool,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    Each {
        path: String,
        body: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    If,
    Unless,
    Each,
}

impl BlockKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "if" => Some(Self::If),
            "unless" => Some(Self::Unless),
            "each" => Some(Self::Each),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Unless => "unless",
            Self::Each => "each",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tag {
    Variable(String),
    Open(BlockKind, String),
    Else,
    Close(String),
}

impl Tag {
    fn is_block(&self) -> bool {
        !matches!(self, Tag::Variable(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Tag { tag: Tag, line: usize },
}

/// Parse template source into a node tree.
pub fn parse(source: &str) -> Result<Vec<Node>, TemplateError> {
    let mut tokens = tokenize(source)?;
    strip_standalone_lines(&mut tokens);
    build_tree(tokens)
}

fn tokenize(source: &str) -> Result<Vec<Token>, TemplateError> {
    let mut tokens = Vec::new();
    let mut rest = source;
    let mut line = 1;

    while let Some(start) = rest.find("{{") {
        let (text, tail) = rest.split_at(start);
        if !text.is_empty() {
            line += text.matches('\n').count();
            tokens.push(Token::Text(text.to_string()));
        }

        let tail = &tail[2..];
        let end = tail.find("}}").ok_or(TemplateError::UnclosedTag { line })?;
        let inner = &tail[..end];
        tokens.push(Token::Tag {
            tag: classify(inner.trim(), line)?,
            line,
        });
        line += inner.matches('\n').count();
        rest = &tail[end + 2..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest.to_string()));
    }
    Ok(tokens)
}

fn classify(inner: &str, line: usize) -> Result<Tag, TemplateError> {
    if inner.is_empty() {
        return Err(TemplateError::EmptyTag { line });
    }

    if let Some(open) = inner.strip_prefix('#') {
        let mut parts = open.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let kind = BlockKind::parse(name).ok_or_else(|| TemplateError::UnknownBlock {
            name: name.to_string(),
            line,
        })?;
        let path = parts.next().ok_or(TemplateError::EmptyTag { line })?;
        return Ok(Tag::Open(kind, path.to_string()));
    }

    if let Some(close) = inner.strip_prefix('/') {
        return Ok(Tag::Close(close.trim().to_string()));
    }

    if inner == "else" {
        return Ok(Tag::Else);
    }

    Ok(Tag::Variable(inner.to_string()))
}

/// Remove the lines of standalone block tags.
///
/// Standalone-ness is decided on the untrimmed tokens first; trims are
/// applied afterwards so that neighbouring standalone tags see the original
/// text between them.
fn strip_standalone_lines(tokens: &mut [Token]) {
    let last = tokens.len().saturating_sub(1);
    let standalone: Vec<bool> = (0..tokens.len())
        .map(|i| match &tokens[i] {
            Token::Tag { tag, .. } if tag.is_block() => {
                let before = match i.checked_sub(1).map(|p| &tokens[p]) {
                    None => true,
                    Some(Token::Text(text)) => {
                        let (head, tail) = split_last_line(text);
                        (head.is_some() || i == 1) && is_blank(tail)
                    }
                    Some(Token::Tag { .. }) => false,
                };
                let after = match tokens.get(i + 1) {
                    None => true,
                    Some(Token::Text(text)) => {
                        let (head, tail) = split_first_line(text);
                        (tail.is_some() || i + 1 == last) && is_blank(head)
                    }
                    Some(Token::Tag { .. }) => false,
                };
                before && after
            }
            _ => false,
        })
        .collect();

    // Byte ranges of each text token to keep.
    let mut keep: Vec<(usize, usize)> = tokens
        .iter()
        .map(|t| match t {
            Token::Text(text) => (0, text.len()),
            Token::Tag { .. } => (0, 0),
        })
        .collect();

    for (i, is_standalone) in standalone.iter().enumerate() {
        if !is_standalone {
            continue;
        }
        if let Some(Token::Text(text)) = i.checked_sub(1).map(|p| &tokens[p]) {
            keep[i - 1].1 = text.rfind('\n').map_or(0, |nl| nl + 1);
        }
        if let Some(Token::Text(text)) = tokens.get(i + 1) {
            keep[i + 1].0 = text.find('\n').map_or(text.len(), |nl| nl + 1);
        }
    }

    for (token, (start, end)) in tokens.iter_mut().zip(keep) {
        if let Token::Text(text) = token {
            *text = if start < end {
                text[start..end].to_string()
            } else {
                String::new()
            };
        }
    }
}

/// Text before the last newline (if any) and the trailing partial line.
fn split_last_line(text: &str) -> (Option<&str>, &str) {
    match text.rfind('\n') {
        Some(nl) => (Some(&text[..nl]), &text[nl + 1..]),
        None => (None, text),
    }
}

/// Leading partial line and the text after the first newline (if any).
fn split_first_line(text: &str) -> (&str, Option<&str>) {
    match text.find('\n') {
        Some(nl) => (&text[..nl], Some(&text[nl + 1..])),
        None => (text, None),
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// A block being filled while parsing.
struct Frame {
    kind: BlockKind,
    path: String,
    line: usize,
    then: Vec<Node>,
    otherwise: Option<Vec<Node>>,
}

impl Frame {
    fn target(&mut self) -> &mut Vec<Node> {
        match &mut self.otherwise {
            Some(otherwise) => otherwise,
            None => &mut self.then,
        }
    }

    fn finish(self) -> Node {
        match self.kind {
            BlockKind::Each => Node::Each {
                path: self.path,
                body: self.then,
            },
            kind => Node::Conditional {
                path: self.path,
                negated: kind == BlockKind::Unless,
                then: self.then,
                otherwise: self.otherwise.unwrap_or_default(),
            },
        }
    }
}

fn build_tree(tokens: Vec<Token>) -> Result<Vec<Node>, TemplateError> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) if text.is_empty() => continue,
            Token::Text(text) => Node::Text(text),
            Token::Tag { tag, line } => match tag {
                Tag::Variable(path) => Node::Variable(path),
                Tag::Open(kind, path) => {
                    stack.push(Frame {
                        kind,
                        path,
                        line,
                        then: Vec::new(),
                        otherwise: None,
                    });
                    continue;
                }
                Tag::Else => {
                    match stack.last_mut() {
                        Some(frame) if frame.kind != BlockKind::Each && frame.otherwise.is_none() => {
                            frame.otherwise = Some(Vec::new());
                        }
                        _ => return Err(TemplateError::UnexpectedElse { line }),
                    }
                    continue;
                }
                Tag::Close(name) => match stack.pop() {
                    Some(frame) if frame.kind.as_str() == name => frame.finish(),
                    _ => {
                        return Err(TemplateError::UnexpectedClose {
                            found: format!("/{name}"),
                            line,
                        });
                    }
                },
            },
        };

        match stack.last_mut() {
            Some(frame) => frame.target().push(node),
            None => root.push(node),
        }
    }

    match stack.pop() {
        Some(frame) => Err(TemplateError::UnclosedBlock {
            block: frame.kind.as_str().to_string(),
            line: frame.line,
        }),
        None => Ok(root),
    }
}
