// Options specific to one chart type (`line`, `area`, `bar`, `pie`, `donut`, `gauge`)

use super::{Formatter, Numeric};
use crate::value::ConfigValue;

option_enum! {
    /// Interpolation of step lines
    StepType {
        Step => "step",
        StepBefore => "step-before",
        StepAfter => "step-after",
    }
}

config_domain! {
    /// The `line` option group
    Line
}

impl Line {
    /// Connect the line across null data points
    pub fn with_connect_null(self, connect: bool) -> Self {
        self.set(&["connectNull"], connect)
    }

    pub fn with_step_type(self, step_type: StepType) -> Self {
        self.set(&["step", "type"], step_type)
    }
}

config_domain! {
    /// The `area` option group
    Area
}

impl Area {
    pub fn with_zerobased(self, zerobased: bool) -> Self {
        self.set(&["zerobased"], zerobased)
    }
}

config_domain! {
    /// The `bar` option group
    Bar
}

impl Bar {
    /// Fixed bar width in pixels. Replaces a width ratio already set.
    pub fn with_width(self, width: u32) -> Self {
        self.set(&["width"], width)
    }

    /// Bar width relative to the tick spacing. Replaces a fixed width already set.
    pub fn with_width_ratio(self, ratio: f64) -> Self {
        self.set(&["width", "ratio"], ratio)
    }

    pub fn with_zerobased(self, zerobased: bool) -> Self {
        self.set(&["zerobased"], zerobased)
    }
}

config_domain! {
    /// The `pie` option group
    Pie
}

impl Pie {
    pub fn with_label_visibility(self, show: bool) -> Self {
        self.set(&["label", "show"], show)
    }

    pub fn with_label_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["label", "format"], Into::<Formatter>::into(format))
    }

    /// Hide labels of slices smaller than this ratio
    pub fn with_label_threshold(self, threshold: f64) -> Self {
        self.set(&["label", "threshold"], threshold)
    }

    pub fn with_expand(self, expand: bool) -> Self {
        self.set(&["expand"], expand)
    }
}

config_domain! {
    /// The `donut` option group
    Donut
}

impl Donut {
    pub fn with_label_visibility(self, show: bool) -> Self {
        self.set(&["label", "show"], show)
    }

    pub fn with_label_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["label", "format"], Into::<Formatter>::into(format))
    }

    pub fn with_label_threshold(self, threshold: f64) -> Self {
        self.set(&["label", "threshold"], threshold)
    }

    pub fn with_expand(self, expand: bool) -> Self {
        self.set(&["expand"], expand)
    }

    /// Width of the ring in pixels
    pub fn with_width(self, width: u32) -> Self {
        self.set(&["width"], width)
    }

    /// Text in the middle of the ring
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.set(&["title"], ConfigValue::String(title.into()))
    }
}

config_domain! {
    /// The `gauge` option group
    Gauge
}

impl Gauge {
    pub fn with_label_visibility(self, show: bool) -> Self {
        self.set(&["label", "show"], show)
    }

    pub fn with_label_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["label", "format"], Into::<Formatter>::into(format))
    }

    pub fn with_expand(self, expand: bool) -> Self {
        self.set(&["expand"], expand)
    }

    pub fn with_min(self, min: impl Numeric) -> Self {
        self.set(&["min"], min)
    }

    pub fn with_max(self, max: impl Numeric) -> Self {
        self.set(&["max"], max)
    }

    pub fn with_units(self, units: impl Into<String>) -> Self {
        self.set(&["units"], ConfigValue::String(units.into()))
    }

    pub fn with_width(self, width: u32) -> Self {
        self.set(&["width"], width)
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
    fn test_step_type() {
        let line = Line::new()
            .with_connect_null(true)
            .with_step_type(StepType::StepAfter);
        assert_eq!(
            json_of(line),
            json!({"connectNull": true, "step": {"type": "step-after"}})
        );
    }

    #[test]
    fn test_bar_width_ratio_nests_under_width() {
        let bar = Bar::new().with_width(10).with_width_ratio(0.5);
        assert_eq!(json_of(bar), json!({"width": {"ratio": 0.5}}));
    }

    #[test]
    fn test_gauge_and_donut() {
        let gauge = Gauge::new().with_min(0).with_max(100).with_units(" %");
        assert_eq!(json_of(gauge), json!({"min": 0, "max": 100, "units": " %"}));

        let donut = Donut::new().with_title("").with_label_threshold(0.05);
        assert_eq!(
            json_of(donut),
            json!({"title": "", "label": {"threshold": 0.05}})
        );
    }

    #[test]
    fn test_pie_label_format_pattern() {
        let pie = Pie::new().with_label_visibility(false).with_label_format("%");
        assert_eq!(
            json_of(pie),
            json!({"label": {"show": false, "format": "%"}})
        );
    }
}
