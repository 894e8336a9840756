//! Built-in templates and `{{ variable }}` rendering.
//!
//! Templates are plain text with `{{ name }}` placeholders. Every placeholder
//! must have a value; rendering fails on unknown variables instead of
//! emitting empty strings into generated JavaScript.

use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{bail, Context, Result};
use regex::{Captures, Regex};

use crate::core::probe::ProjectType;
use crate::util::fs::write_string;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

/// Wrapper module loading the runtime, vendor and entry bundles and
/// re-exporting the entry's value under a namespaced AMD name.
pub const EXPORT_MODULE: &str = r#"Liferay.Loader.define(
	'{{ moduleName }}',
	[
		'module',
		'{{ bundlesLocation }}/runtime.bundle',
		'{{ bundlesLocation }}/vendor.bundle',
		'{{ bundlesLocation }}/{{ id }}.bundle'
	],
	function(module, runtime, vendor, entry) {
		module.exports = entry;
	}
);
"#;

const ANGULAR_CLI_ADAPT_RT: &str = r#"// Adapter runtime for {{ name }}@{{ version }} ({{ projectType }})

let params;

export function init(portletParams) {
	params = portletParams;
}

export function adaptStaticURL(url) {
	return params.contextPath + '/' + url;
}

export function getPortletElement() {
	return document.getElementById(params.portletElementId);
}

export function bootstrap(platformBrowserDynamic, AppModule) {
	const el = getPortletElement();
	const root = document.createElement('app-root');

	el.appendChild(root);

	return platformBrowserDynamic().bootstrapModule(AppModule);
}
"#;

const CREATE_REACT_APP_ADAPT_RT: &str = r#"// Adapter runtime for {{ name }}@{{ version }} ({{ projectType }})

let params;

export function init(portletParams) {
	params = portletParams;
}

export function adaptStaticURL(url) {
	return params.contextPath + '/' + url;
}

export function getPortletElement() {
	return document.getElementById(params.portletElementId);
}

export function render(ReactDOM, element) {
	ReactDOM.render(element, getPortletElement());
}
"#;

const VUE_CLI_ADAPT_RT: &str = r#"// Adapter runtime for {{ name }}@{{ version }} ({{ projectType }})

let params;

export function init(portletParams) {
	params = portletParams;
}

export function adaptStaticURL(url) {
	return params.contextPath + '/' + url;
}

export function getPortletElement() {
	return document.getElementById(params.portletElementId);
}

export function mount(app) {
	const el = getPortletElement();
	const root = document.createElement('div');

	el.appendChild(root);

	return app.$mount(root);
}
"#;

const INDEX: &str = r#"// Portlet entry point for {{ name }}@{{ version }}

import {init} from './adapt-rt';

export default function main(params) {
	init(params);

	require('../src/main');
}
"#;

/// Look up a built-in template by project type and file name.
pub fn template(project_type: ProjectType, name: &str) -> Option<&'static str> {
    match (project_type, name) {
        (ProjectType::AngularCli, "adapt-rt.js") => Some(ANGULAR_CLI_ADAPT_RT),
        (ProjectType::CreateReactApp, "adapt-rt.js") => Some(CREATE_REACT_APP_ADAPT_RT),
        (ProjectType::VueCli, "adapt-rt.js") => Some(VUE_CLI_ADAPT_RT),
        (_, "index.js") => Some(INDEX),
        _ => None,
    }
}

/// Substitute `{{ name }}` placeholders in `template`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut missing = Vec::new();

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match vars.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => (*value).to_string(),
            None => {
                missing.push(name.to_string());
                String::new()
            }
        }
    });

    if !missing.is_empty() {
        missing.dedup();
        bail!("template variables without a value: {}", missing.join(", "));
    }

    Ok(rendered.into_owned())
}

/// Escape `value` for use inside a single-quoted JavaScript string literal.
pub fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders the per-framework adapter templates into an output directory.
#[derive(Debug)]
pub struct Renderer {
    project_type: ProjectType,
    out_dir: PathBuf,
}

impl Renderer {
    /// Create a renderer for `project_type` writing into `out_dir`.
    pub fn new(project_type: ProjectType, out_dir: impl Into<PathBuf>) -> Self {
        Renderer {
            project_type,
            out_dir: out_dir.into(),
        }
    }

    /// Render template `name` to `<out_dir>/<name>`.
    pub fn render(&self, name: &str, vars: &[(&str, &str)]) -> Result<PathBuf> {
        let Some(template) = template(self.project_type, name) else {
            bail!("no `{}` template for {} projects", name, self.project_type);
        };

        let contents = render(template, vars)
            .with_context(|| format!("failed to render template `{}`", name))?;
        let path = self.out_dir.join(name);
        write_string(&path, &contents)?;

        tracing::debug!("Rendered {}", path.display());
        Ok(path)
    }
}
