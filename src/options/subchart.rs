use crate::script::ScriptLiteral;

config_domain! {
    /// The `subchart` option group
    Subchart
}

impl Subchart {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    pub fn with_size_height(self, height: u32) -> Self {
        self.set(&["size", "height"], height)
    }

    /// Called when the subchart selection changes
    pub fn with_on_brush(self, callback: ScriptLiteral) -> Self {
        self.set(&["onbrush"], callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use serde_json::json;

    #[test]
    fn test_subchart_height_and_brush() {
        let subchart = Subchart::new()
            .with_visibility(true)
            .with_size_height(30)
            .with_on_brush(ScriptLiteral::new("function(domain){}"));
        let tree = Tree::from_value(&subchart.into()).unwrap();
        assert_eq!(tree.raw_count(), 1);
        assert_eq!(
            tree.to_json("<raw>"),
            json!({"show": true, "size": {"height": 30}, "onbrush": "<raw>"})
        );
    }
}
