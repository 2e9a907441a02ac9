// Tooltip options

use crate::script::ScriptLiteral;

config_domain! {
    /// The `tooltip` option group
    Tooltip
}

impl Tooltip {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    /// Show every series at the hovered x in one tooltip
    pub fn with_grouped(self, grouped: bool) -> Self {
        self.set(&["grouped"], grouped)
    }

    pub fn with_format_title(self, format: ScriptLiteral) -> Self {
        self.set(&["format", "title"], format)
    }

    pub fn with_format_name(self, format: ScriptLiteral) -> Self {
        self.set(&["format", "name"], format)
    }

    pub fn with_format_value(self, format: ScriptLiteral) -> Self {
        self.set(&["format", "value"], format)
    }

    pub fn with_position(self, position: ScriptLiteral) -> Self {
        self.set(&["position"], position)
    }

    /// Function building the tooltip HTML
    pub fn with_contents(self, contents: ScriptLiteral) -> Self {
        self.set(&["contents"], contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use serde_json::json;

    #[test]
    fn test_format_functions_grouped_under_format() {
        let tooltip = Tooltip::new()
            .with_grouped(false)
            .with_format_title(ScriptLiteral::new("function(x){return 'Data ' + x;}"))
            .with_format_value(ScriptLiteral::new("function(v){return v;}"));
        let tree = Tree::from_value(&tooltip.into()).unwrap();
        assert_eq!(tree.raw_count(), 2);
        assert_eq!(
            tree.to_json("<raw>"),
            json!({"grouped": false, "format": {"title": "<raw>", "value": "<raw>"}})
        );
    }
}
