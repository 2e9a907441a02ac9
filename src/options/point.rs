// Point options for line-like charts

use super::Numeric;

config_domain! {
    /// The `point` option group
    Point
}

impl Point {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    /// Radius of each point
    pub fn with_r(self, r: impl Numeric) -> Self {
        self.set(&["r"], r)
    }

    pub fn with_focus_expand_enabled(self, enabled: bool) -> Self {
        self.set(&["focus", "expand", "enabled"], enabled)
    }

    pub fn with_focus_expand_r(self, r: impl Numeric) -> Self {
        self.set(&["focus", "expand", "r"], r)
    }

    pub fn with_select_r(self, r: impl Numeric) -> Self {
        self.set(&["select", "r"], r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use serde_json::json;

    #[test]
    fn test_focus_expand_shares_parent() {
        let point = Point::new()
            .with_r(2.5)
            .with_focus_expand_enabled(true)
            .with_focus_expand_r(4);
        let json = Tree::from_value(&point.into()).unwrap().to_json("<raw>");
        assert_eq!(
            json,
            json!({"r": 2.5, "focus": {"expand": {"enabled": true, "r": 4}}})
        );
    }
}
