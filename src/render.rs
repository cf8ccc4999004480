//! Rendering collected documents through a template
//!
//! Delegates formatting to minijinja. A user-supplied template file wins;
//! otherwise a built-in template marks each entry with a `##` heading and
//! prints the description verbatim beneath it.

use crate::error::{Error, Result};
use crate::types::Document;
use minijinja::{Environment, context};
use std::fs;
use std::path::Path;

/// Built-in template used when no template file is configured
const DEFAULT_TEMPLATE: &str = "\
{% for doc in docs %}## {{ doc.title }}
{{ doc.description }}

{% endfor %}";

/// Render the ordered document sequence to final text.
///
/// `template` points at a minijinja template file receiving the documents
/// as `docs`. Load and render failures are both fatal.
pub fn render_docs(docs: &[Document], template: Option<&Path>) -> Result<String> {
    let source = match template {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| Error::Template(format!("failed to read {}: {e}", path.display())))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.add_template("doc", &source)
        .map_err(|e| Error::Template(format!("failed to parse template: {e}")))?;

    let tmpl = env
        .get_template("doc")
        .map_err(|e| Error::Template(e.to_string()))?;

    tmpl.render(context! { docs })
        .map_err(|e| Error::Template(format!("failed to render template: {e}")))
}
