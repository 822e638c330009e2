//! Simple template renderer: interpolation, conditionals and loops.

use serde_json::Value;
use tracing::instrument;

use foxx_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, TemplateName, entities::template::lookup_in},
    error::FoxxResult,
};

use super::syntax::{self, Node, TemplateError};

/// Renderer for the built-in template language.
///
/// Output is never escaped; templates produce source code and plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render `source` against `context`, reporting template errors as is.
    pub fn render_str(
        &self,
        source: &str,
        context: &RenderContext,
    ) -> Result<String, TemplateError> {
        let nodes = syntax::parse(source)?;
        let mut out = String::with_capacity(source.len());
        Scope::root(context).render(&nodes, &mut out)?;
        Ok(out)
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(template = %name))]
    fn render(
        &self,
        name: TemplateName,
        source: &str,
        context: &RenderContext,
    ) -> FoxxResult<String> {
        self.render_str(source, context).map_err(|e| {
            ApplicationError::Render {
                template: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Variable scope: the context plus the current `each` item, if any.
struct Scope<'a> {
    context: &'a RenderContext,
    item: Option<&'a Value>,
}

impl<'a> Scope<'a> {
    fn root(context: &'a RenderContext) -> Self {
        Self {
            context,
            item: None,
        }
    }

    fn with_item(&self, item: &'a Value) -> Self {
        Self {
            context: self.context,
            item: Some(item),
        }
    }

    /// `this` and `this.x` address the current item; other paths are looked
    /// up in the item first (if it is an object), then in the context.
    fn resolve(&self, path: &str) -> Result<&'a Value, TemplateError> {
        let unknown = || TemplateError::UnknownVariable(path.to_string());

        if let Some(item) = self.item {
            if path == "this" {
                return Ok(item);
            }
            if let Some(rest) = path.strip_prefix("this.") {
                return match item {
                    Value::Object(map) => lookup_in(map, rest).ok_or_else(unknown),
                    Value::Null => Ok(item),
                    _ => Err(unknown()),
                };
            }
            if let Value::Object(map) = item {
                if let Some(value) = lookup_in(map, path) {
                    return Ok(value);
                }
            }
        }

        self.context.lookup(path).ok_or_else(unknown)
    }

    fn render(&self, nodes: &[Node], out: &mut String) -> Result<(), TemplateError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable(path) => interpolate(path, self.resolve(path)?, out)?,
                Node::Conditional {
                    path,
                    negated,
                    then,
                    otherwise,
                } => {
                    if is_truthy(self.resolve(path)?) != *negated {
                        self.render(then, out)?;
                    } else {
                        self.render(otherwise, out)?;
                    }
                }
                Node::Each { path, body } => match self.resolve(path)? {
                    Value::Array(items) => {
                        for item in items {
                            self.with_item(item).render(body, out)?;
                        }
                    }
                    Value::Null => {}
                    _ => return Err(TemplateError::NotIterable(path.clone())),
                },
            }
        }
        Ok(())
    }
}

fn interpolate(path: &str, value: &Value, out: &mut String) -> Result<(), TemplateError> {
    match value {
        Value::Null => return Err(TemplateError::NullVariable(path.to_string())),
        Value::String(s) => out.push_str(s),
        // Numbers, booleans and structured values use their JSON text.
        other => out.push_str(&other.to_string()),
    }
    Ok(())
}

/// `null`, `false`, `""`, `0` and `[]` are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
