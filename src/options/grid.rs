// Grid options and additional grid lines

use super::sequence;
use crate::node::ConfigNode;
use crate::value::ConfigValue;

option_enum! {
    /// Where a grid line label is drawn
    GridLinePosition {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
}

/// An extra line drawn across the chart at `value`
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub value: ConfigValue,
    pub text: Option<String>,
    pub class: Option<String>,
    pub position: Option<GridLinePosition>,
}

impl GridLine {
    pub fn new(value: impl Into<ConfigValue>) -> Self {
        Self {
            value: value.into(),
            text: None,
            class: None,
            position: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_position(mut self, position: GridLinePosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl From<GridLine> for ConfigValue {
    fn from(line: GridLine) -> Self {
        let mut node = ConfigNode::new();
        node.set(&["value"], line.value);
        if let Some(text) = line.text {
            node.set(&["text"], text);
        }
        if let Some(class) = line.class {
            node.set(&["class"], class);
        }
        if let Some(position) = line.position {
            node.set(&["position"], position);
        }
        ConfigValue::Node(node)
    }
}

config_domain! {
    /// The `grid` option group
    Grid
}

impl Grid {
    pub fn with_x_visibility(self, show: bool) -> Self {
        self.set(&["x", "show"], show)
    }

    pub fn with_x_lines(self, lines: impl IntoIterator<Item = GridLine>) -> Self {
        self.set(&["x", "lines"], sequence(lines))
    }

    pub fn with_y_visibility(self, show: bool) -> Self {
        self.set(&["y", "show"], show)
    }

    pub fn with_y_lines(self, lines: impl IntoIterator<Item = GridLine>) -> Self {
        self.set(&["y", "lines"], sequence(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use serde_json::json;

    #[test]
    fn test_grid_lines_skip_unset_fields() {
        let grid = Grid::new()
            .with_x_visibility(true)
            .with_y_lines(vec![
                GridLine::new(50).with_text("Label 50"),
                GridLine::new(100)
                    .with_class("threshold")
                    .with_position(GridLinePosition::Start),
            ]);
        let json = Tree::from_value(&grid.into()).unwrap().to_json("<raw>");
        assert_eq!(
            json,
            json!({
                "x": {"show": true},
                "y": {"lines": [
                    {"value": 50, "text": "Label 50"},
                    {"value": 100, "class": "threshold", "position": "start"}
                ]}
            })
        );
    }

    #[test]
    fn test_empty_lines_are_kept() {
        let grid = Grid::new().with_x_lines(Vec::new());
        let json = Tree::from_value(&grid.into()).unwrap().to_json("<raw>");
        assert_eq!(json, json!({"x": {"lines": []}}));
    }
}
