use super::Numeric;
use crate::script::ScriptLiteral;
use crate::value::ConfigValue;

config_domain! {
    /// The `zoom` option group
    Zoom
}

impl Zoom {
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.set(&["enabled"], enabled)
    }

    /// Rescale the y axis to the visible range while zooming
    pub fn with_rescale(self, rescale: bool) -> Self {
        self.set(&["rescale"], rescale)
    }

    /// Allowed zoom scale, `[min, max]`
    pub fn with_extent(self, min: impl Numeric, max: impl Numeric) -> Self {
        self.set(&["extent"], ConfigValue::Sequence(vec![min.into(), max.into()]))
    }

    pub fn with_on_zoom(self, callback: ScriptLiteral) -> Self {
        self.set(&["onzoom"], callback)
    }

    pub fn with_on_zoom_start(self, callback: ScriptLiteral) -> Self {
        self.set(&["onzoomstart"], callback)
    }

    pub fn with_on_zoom_end(self, callback: ScriptLiteral) -> Self {
        self.set(&["onzoomend"], callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    #[test]
    fn test_zoom_callbacks_are_raw() {
        let zoom = Zoom::new()
            .with_enabled(true)
            .with_extent(1, 10)
            .with_on_zoom_end(ScriptLiteral::new("function(domain){}"));
        let tree = Tree::from_value(&zoom.into()).unwrap();
        assert_eq!(tree.raw_count(), 1);
        assert_eq!(
            tree.to_json("<raw>"),
            serde_json::json!({"enabled": true, "extent": [1, 10], "onzoomend": "<raw>"})
        );
    }
}
