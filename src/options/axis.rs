// Axis options: `axis.rotated`, `axis.x`, `axis.y`, `axis.y2`

use super::{sequence, Formatter, LabelPosition, Numeric};
use crate::value::ConfigValue;

option_enum! {
    /// Scale type of the x axis
    AxisType {
        Timeseries => "timeseries",
        Category => "category",
        Indexed => "indexed",
    }
}

config_domain! {
    /// The `axis` option group
    Axis
}

impl Axis {
    /// Switch x and y axis position
    pub fn with_rotated(self, rotated: bool) -> Self {
        self.set(&["rotated"], rotated)
    }

    pub fn with_x(self, x: XAxis) -> Self {
        self.set(&["x"], x)
    }

    pub fn with_y(self, y: YAxis) -> Self {
        self.set(&["y"], y)
    }

    pub fn with_y2(self, y2: YAxis) -> Self {
        self.set(&["y2"], y2)
    }
}

config_domain! {
    /// Options for the horizontal axis (`axis.x`)
    XAxis
}

impl XAxis {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    pub fn with_type(self, axis_type: AxisType) -> Self {
        self.set(&["type"], axis_type)
    }

    /// Treat timeseries x values as local time
    pub fn with_localtime(self, localtime: bool) -> Self {
        self.set(&["localtime"], localtime)
    }

    /// Category names on a category axis
    pub fn with_categories<I, T>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.set(&["categories"], sequence(categories.into_iter().map(Into::<String>::into)))
    }

    pub fn with_tick_centered(self, centered: bool) -> Self {
        self.set(&["tick", "centered"], centered)
    }

    pub fn with_tick_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["tick", "format"], Into::<Formatter>::into(format))
    }

    /// Enable or disable tick culling. Replaces any `culling.max` already set.
    pub fn with_tick_culling(self, culling: bool) -> Self {
        self.set(&["tick", "culling"], culling)
    }

    /// Cull ticks down to `max`. Replaces a boolean `culling` already set.
    pub fn with_tick_culling_max(self, max: u32) -> Self {
        self.set(&["tick", "culling", "max"], max)
    }

    pub fn with_tick_count(self, count: u32) -> Self {
        self.set(&["tick", "count"], count)
    }

    pub fn with_tick_fit(self, fit: bool) -> Self {
        self.set(&["tick", "fit"], fit)
    }

    pub fn with_tick_values<I, T>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ConfigValue>,
    {
        self.set(&["tick", "values"], sequence(values))
    }

    pub fn with_tick_rotate(self, angle: i32) -> Self {
        self.set(&["tick", "rotate"], angle)
    }

    pub fn with_tick_outer(self, outer: bool) -> Self {
        self.set(&["tick", "outer"], outer)
    }

    /// Max of the x range. Accepts numbers or timeseries strings.
    pub fn with_max(self, max: impl Into<ConfigValue>) -> Self {
        self.set(&["max"], max)
    }

    pub fn with_min(self, min: impl Into<ConfigValue>) -> Self {
        self.set(&["min"], min)
    }

    pub fn with_padding_left(self, left: impl Numeric) -> Self {
        self.set(&["padding", "left"], left)
    }

    pub fn with_padding_right(self, right: impl Numeric) -> Self {
        self.set(&["padding", "right"], right)
    }

    /// Height of the axis in pixels
    pub fn with_height(self, height: u32) -> Self {
        self.set(&["height"], height)
    }

    /// Default extent for subchart and zoom
    pub fn with_extent(self, start: impl Into<ConfigValue>, end: impl Into<ConfigValue>) -> Self {
        self.set(&["extent"], ConfigValue::Sequence(vec![start.into(), end.into()]))
    }

    pub fn with_label_text(self, text: impl Into<String>) -> Self {
        self.set(&["label", "text"], ConfigValue::String(text.into()))
    }

    pub fn with_label_position(self, position: LabelPosition) -> Self {
        self.set(&["label", "position"], position)
    }
}

config_domain! {
    /// Options for a vertical axis (`axis.y` or `axis.y2`)
    YAxis
}

impl YAxis {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    /// Draw the axis inside the chart area
    pub fn with_inner(self, inner: bool) -> Self {
        self.set(&["inner"], inner)
    }

    pub fn with_max(self, max: impl Numeric) -> Self {
        self.set(&["max"], max)
    }

    pub fn with_min(self, min: impl Numeric) -> Self {
        self.set(&["min"], min)
    }

    pub fn with_inverted(self, inverted: bool) -> Self {
        self.set(&["inverted"], inverted)
    }

    pub fn with_center(self, center: impl Numeric) -> Self {
        self.set(&["center"], center)
    }

    pub fn with_label_text(self, text: impl Into<String>) -> Self {
        self.set(&["label", "text"], ConfigValue::String(text.into()))
    }

    pub fn with_label_position(self, position: LabelPosition) -> Self {
        self.set(&["label", "position"], position)
    }

    pub fn with_tick_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["tick", "format"], Into::<Formatter>::into(format))
    }

    pub fn with_tick_outer(self, outer: bool) -> Self {
        self.set(&["tick", "outer"], outer)
    }

    pub fn with_tick_values<I, T>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Numeric,
    {
        self.set(&["tick", "values"], sequence(values))
    }

    pub fn with_tick_count(self, count: u32) -> Self {
        self.set(&["tick", "count"], count)
    }

    pub fn with_tick_fit(self, fit: bool) -> Self {
        self.set(&["tick", "fit"], fit)
    }

    pub fn with_tick_rotate(self, angle: i32) -> Self {
        self.set(&["tick", "rotate"], angle)
    }

    pub fn with_padding_top(self, top: impl Numeric) -> Self {
        self.set(&["padding", "top"], top)
    }

    pub fn with_padding_bottom(self, bottom: impl Numeric) -> Self {
        self.set(&["padding", "bottom"], bottom)
    }

    /// Default visible range of the axis
    pub fn with_default(self, min: impl Numeric, max: impl Numeric) -> Self {
        self.set(&["default"], ConfigValue::Sequence(vec![min.into(), max.into()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use serde_json::json;

    fn json_of(value: impl Into<ConfigValue>) -> serde_json::Value {
        Tree::from_value(&value.into()).unwrap().to_json("<raw>")
    }

    #[test]
    fn test_category_axis() {
        let axis = Axis::new().with_x(
            XAxis::new()
                .with_type(AxisType::Category)
                .with_categories(["a", "b", "c"]),
        );
        assert_eq!(
            json_of(axis),
            json!({"x": {"type": "category", "categories": ["a", "b", "c"]}})
        );
    }

    #[test]
    fn test_tick_culling_polymorphism() {
        let x = XAxis::new().with_tick_culling(true).with_tick_culling_max(4);
        assert_eq!(json_of(x), json!({"tick": {"culling": {"max": 4}}}));

        let x = XAxis::new().with_tick_culling_max(4).with_tick_culling(false);
        assert_eq!(json_of(x), json!({"tick": {"culling": false}}));
    }

    #[test]
    fn test_y_axes_share_builder() {
        let axis = Axis::new()
            .with_rotated(false)
            .with_y(YAxis::new().with_max(100).with_padding_bottom(0))
            .with_y2(YAxis::new().with_visibility(true).with_default(0.5, 1.5));
        assert_eq!(
            json_of(axis),
            json!({
                "rotated": false,
                "y": {"max": 100, "padding": {"bottom": 0}},
                "y2": {"show": true, "default": [0.5, 1.5]}
            })
        );
    }

    #[test]
    fn test_tick_format_function() {
        let x = XAxis::new()
            .with_tick_format(crate::ScriptLiteral::new("function(x){return x;}"));
        assert_eq!(json_of(x), json!({"tick": {"format": "<raw>"}}));
    }
}
