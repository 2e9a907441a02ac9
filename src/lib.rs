// Library exports for c3config

pub mod chart;
pub mod error;
pub mod node;
pub mod options;
pub mod render;
pub mod script;
pub mod tree;
pub mod value;

pub use chart::Chart;
pub use error::{ConfigError, Result};
pub use node::ConfigNode;
pub use script::ScriptLiteral;
pub use tree::Tree;
pub use value::ConfigValue;

use serde::Deserialize;

/// Keyword placed in front of the rendered assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum Declaration {
    #[serde(rename = "none")]
    #[default]
    None,
    #[serde(rename = "var")]
    Var,
    #[serde(rename = "let")]
    Let,
    #[serde(rename = "const")]
    Const,
}

impl Declaration {
    pub fn prefix(self) -> &'static str {
        match self {
            Declaration::None => "",
            Declaration::Var => "var ",
            Declaration::Let => "let ",
            Declaration::Const => "const ",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_variable")]
    pub variable: String,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_generator")]
    pub generator: String,
    #[serde(default)]
    pub declaration: Declaration,
}

fn default_variable() -> String { "chart".to_string() }
fn default_generator() -> String { "c3.generate".to_string() }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            variable: default_variable(),
            pretty: false,
            generator: default_generator(),
            declaration: Declaration::None,
        }
    }
}

impl RenderOptions {
    pub fn new(variable: impl Into<String>, pretty: bool) -> Self {
        Self {
            variable: variable.into(),
            pretty,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults_from_json() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.variable, "chart");
        assert!(!options.pretty);
        assert_eq!(options.generator, "c3.generate");
        assert_eq!(options.declaration, Declaration::None);
    }

    #[test]
    fn test_render_options_from_json() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"variable": "sales", "pretty": true, "declaration": "const"}"#)
                .unwrap();
        assert_eq!(options.variable, "sales");
        assert!(options.pretty);
        assert_eq!(options.declaration.prefix(), "const ");
    }
}
