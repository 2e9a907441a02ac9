// Raw script fragments emitted unquoted in the rendered output

/// A piece of JavaScript (usually a function literal) that is written into the
/// configuration verbatim instead of as a quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptLiteral {
    script: String,
}

impl ScriptLiteral {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Replace the code held by this literal
    pub fn set_script(&mut self, script: impl Into<String>) {
        self.script = script.into();
    }
}

impl From<&str> for ScriptLiteral {
    fn from(script: &str) -> Self {
        Self::new(script)
    }
}

impl From<String> for ScriptLiteral {
    fn from(script: String) -> Self {
        Self::new(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_script_replaces_content() {
        let mut literal = ScriptLiteral::new("function(){return 1;}");
        literal.set_script("function(){return 2;}");
        assert_eq!(literal.script(), "function(){return 2;}");
    }
}
