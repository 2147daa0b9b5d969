//! Parameterized messages and mustache template rendering.
//!
//! Supported tags:
//! - `{{name}}` inserts the HTML-escaped value
//! - `{{{name}}}` and `{{& name}}` insert the raw value
//! - `{{#name}}...{{/name}}` renders its body when `name` is set
//! - `{{^name}}...{{/name}}` renders its body when `name` is not set
//! - `{{! comment }}` and `{{> partial}}` render nothing (no partials exist)
//!
//! A variable without a matching parameter renders as nothing. Set-delimiter
//! tags are not supported and are kept as written. A template with unbalanced
//! section tags is returned unrendered.

use super::database::StringDatabase;
use super::error::Result;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Template parameters: placeholder name -> value.
pub type Parameters = BTreeMap<String, String>;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

// Group 1: triple-brace name. Group 2: sigil. Group 3: name or comment body.
fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\{\s*([^{}]*?)\s*\}\}\}|\{\{\s*([#^/!&>=]?)\s*([^{}]*?)\s*\}\}")
            .expect("tag pattern is valid")
    })
}

#[derive(Debug, PartialEq, Error)]
enum SyntaxError {
    #[error("section '{0}' is never closed")]
    UnclosedSection(String),

    #[error("closing tag '{0}' has no matching section")]
    UnexpectedClose(String),
}

#[derive(Debug)]
enum Node<'t> {
    Text(&'t str),
    Variable {
        name: &'t str,
        raw: bool,
    },
    Section {
        name: &'t str,
        inverted: bool,
        children: Vec<Node<'t>>,
    },
}

struct OpenSection<'t> {
    name: &'t str,
    inverted: bool,
    children: Vec<Node<'t>>,
}

fn parse(template: &str) -> std::result::Result<Vec<Node<'_>>, SyntaxError> {
    let mut root: Vec<Node<'_>> = Vec::new();
    let mut open: Vec<OpenSection<'_>> = Vec::new();
    let mut last = 0;

    for caps in tag_regex().captures_iter(template) {
        let Some(tag) = caps.get(0) else { continue };
        if tag.start() > last {
            innermost(&mut root, &mut open).push(Node::Text(&template[last..tag.start()]));
        }
        last = tag.end();

        if let Some(name) = caps.get(1) {
            innermost(&mut root, &mut open).push(Node::Variable {
                name: name.as_str(),
                raw: true,
            });
            continue;
        }

        let sigil = caps.get(2).map_or("", |m| m.as_str());
        let name = caps.get(3).map_or("", |m| m.as_str());
        match sigil {
            "#" | "^" => open.push(OpenSection {
                name,
                inverted: sigil == "^",
                children: Vec::new(),
            }),
            "/" => {
                let section = match open.pop() {
                    Some(section) if section.name == name => section,
                    _ => return Err(SyntaxError::UnexpectedClose(name.to_string())),
                };
                innermost(&mut root, &mut open).push(Node::Section {
                    name: section.name,
                    inverted: section.inverted,
                    children: section.children,
                });
            }
            "!" | ">" => {}
            "=" => innermost(&mut root, &mut open).push(Node::Text(tag.as_str())),
            _ => innermost(&mut root, &mut open).push(Node::Variable {
                name,
                raw: sigil == "&",
            }),
        }
    }

    if let Some(section) = open.pop() {
        return Err(SyntaxError::UnclosedSection(section.name.to_string()));
    }
    if last < template.len() {
        root.push(Node::Text(&template[last..]));
    }
    Ok(root)
}

fn innermost<'a, 't>(
    root: &'a mut Vec<Node<'t>>,
    open: &'a mut [OpenSection<'t>],
) -> &'a mut Vec<Node<'t>> {
    match open.last_mut() {
        Some(section) => &mut section.children,
        None => root,
    }
}

fn render_nodes(nodes: &[Node<'_>], params: &Parameters, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { name, raw: true } => out.push_str(lookup(params, name)),
            Node::Variable { name, raw: false } => out.push_str(&escape_html(lookup(params, name))),
            Node::Section {
                name,
                inverted,
                children,
            } => {
                if params.contains_key(*name) != *inverted {
                    render_nodes(children, params, out);
                }
            }
        }
    }
}

/// Render `template` with `params`.
pub fn render_template(template: &str, params: &Parameters) -> String {
    match parse(template) {
        Ok(nodes) => {
            let mut out = String::with_capacity(template.len());
            render_nodes(&nodes, params, &mut out);
            out
        }
        Err(e) => {
            warn!("Leaving template unrendered: {}", e);
            template.to_string()
        }
    }
}

fn lookup<'a>(params: &'a Parameters, name: &str) -> &'a str {
    params.get(name).map_or("", String::as_str)
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fetch the template for `key` in `lang` and fill in `params`.
///
/// # Errors
/// Fails with `InvalidMessageId` when the key is unknown even in the default
/// language.
pub fn expand_parameterized_string(
    db: &StringDatabase,
    lang: &str,
    key: &str,
    params: &Parameters,
) -> Result<String> {
    let template = db.get(lang, key)?;
    Ok(render_template(template, params))
}

/// A message id with its parameters, rendered once the language is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterizedMessage {
    message_key: String,
    params: Parameters,
}

impl ParameterizedMessage {
    /// Create a message without parameters.
    pub fn new(message_key: impl Into<String>) -> Self {
        Self::with_params(message_key, Parameters::new())
    }

    pub fn with_params(message_key: impl Into<String>, params: Parameters) -> Self {
        Self {
            message_key: message_key.into(),
            params,
        }
    }

    /// Add one parameter while building the message.
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Render the message in `lang`.
    pub fn get_text(&self, db: &StringDatabase, lang: &str) -> Result<String> {
        expand_parameterized_string(db, lang, &self.message_key, &self.params)
    }
}
