// Data options: where the series come from and how they are drawn

use super::{mapping, sequence, Formatter, Hide};
use crate::error::Result;
use crate::script::ScriptLiteral;
use crate::value::ConfigValue;

option_enum! {
    /// How a series is drawn
    DataType {
        Line => "line",
        Spline => "spline",
        Step => "step",
        Area => "area",
        AreaSpline => "area-spline",
        AreaStep => "area-step",
        Bar => "bar",
        Scatter => "scatter",
        Pie => "pie",
        Donut => "donut",
        Gauge => "gauge",
    }
}

/// Stacking order of series. C3 also accepts a comparison function.
#[derive(Debug, Clone, PartialEq)]
pub enum Order {
    Desc,
    Asc,
    Custom(ScriptLiteral),
}

impl From<Order> for ConfigValue {
    fn from(order: Order) -> Self {
        match order {
            Order::Desc => ConfigValue::String("desc".to_string()),
            Order::Asc => ConfigValue::String("asc".to_string()),
            Order::Custom(script) => ConfigValue::Script(script),
        }
    }
}

fn string_pairs<I, K, V>(pairs: I) -> ConfigValue
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    mapping(pairs.into_iter().map(|(k, v)| (k, Into::<String>::into(v))))
}

fn strings<I, T>(items: I) -> ConfigValue
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    sequence(items.into_iter().map(Into::<String>::into))
}

fn table<I, R, T>(rows: I) -> ConfigValue
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Into<ConfigValue>,
{
    sequence(rows.into_iter().map(sequence))
}

config_domain! {
    /// The `data` option group
    Data
}

impl Data {
    /// Load data from a URL instead of inline values
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.set(&["url"], ConfigValue::String(url.into()))
    }

    /// Inline JSON data. Fails on values that cannot be rendered, such as `null`
    /// or integers above `i64::MAX`.
    pub fn with_json(self, json: serde_json::Value) -> Result<Self> {
        let value = ConfigValue::try_from(json)?;
        Ok(self.set(&["json"], value))
    }

    /// Row-oriented data; the first row holds the series ids
    pub fn with_rows<I, R, T>(self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<ConfigValue>,
    {
        self.set(&["rows"], table(rows))
    }

    /// Column-oriented data; each column starts with its series id
    pub fn with_columns<I, R, T>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: Into<ConfigValue>,
    {
        self.set(&["columns"], table(columns))
    }

    pub fn with_mime_type(self, mime: impl Into<String>) -> Self {
        self.set(&["mimeType"], ConfigValue::String(mime.into()))
    }

    pub fn with_keys_value<I, T>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.set(&["keys", "value"], strings(fields))
    }

    pub fn with_keys_x(self, field: impl Into<String>) -> Self {
        self.set(&["keys", "x"], ConfigValue::String(field.into()))
    }

    /// Id of the series holding x values
    pub fn with_x(self, x: impl Into<String>) -> Self {
        self.set(&["x"], ConfigValue::String(x.into()))
    }

    /// Per-series x value ids
    pub fn with_xs<I, K, V>(self, xs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set(&["xs"], string_pairs(xs))
    }

    pub fn with_x_format(self, format: impl Into<String>) -> Self {
        self.set(&["xFormat"], ConfigValue::String(format.into()))
    }

    pub fn with_names<I, K, V>(self, names: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set(&["names"], string_pairs(names))
    }

    pub fn with_classes<I, K, V>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set(&["classes"], string_pairs(classes))
    }

    /// Series stacked together, one list of ids per group
    pub fn with_groups<I, G, T>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.set(&["groups"], sequence(groups.into_iter().map(strings)))
    }

    /// Bind series to the `y` or `y2` axis
    pub fn with_axes<I, K, V>(self, axes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set(&["axes"], string_pairs(axes))
    }

    pub fn with_type(self, data_type: DataType) -> Self {
        self.set(&["type"], data_type)
    }

    pub fn with_types<I, K>(self, types: I) -> Self
    where
        I: IntoIterator<Item = (K, DataType)>,
        K: AsRef<str>,
    {
        self.set(&["types"], mapping(types))
    }

    /// Show data labels. Replaces a label format already set.
    pub fn with_labels(self, labels: bool) -> Self {
        self.set(&["labels"], labels)
    }

    /// Show data labels with a formatter. Replaces a boolean `labels` already set.
    pub fn with_labels_format(self, format: impl Into<Formatter>) -> Self {
        self.set(&["labels", "format"], Into::<Formatter>::into(format))
    }

    pub fn with_order(self, order: Order) -> Self {
        self.set(&["order"], order)
    }

    /// Dashed/styled regions per series, e.g. `{"data1": [{"start": 1, "end": 2}]}`
    pub fn with_regions(self, regions: serde_json::Value) -> Result<Self> {
        let value = ConfigValue::try_from(regions)?;
        Ok(self.set(&["regions"], value))
    }

    /// Function deciding the color of each data point
    pub fn with_color(self, color: ScriptLiteral) -> Self {
        self.set(&["color"], color)
    }

    pub fn with_colors<I, K, V>(self, colors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set(&["colors"], string_pairs(colors))
    }

    pub fn with_hide(self, hide: impl Into<Hide>) -> Self {
        self.set(&["hide"], Into::<Hide>::into(hide))
    }

    /// Text shown when there is nothing to draw
    pub fn with_empty_label_text(self, text: impl Into<String>) -> Self {
        self.set(&["empty", "label", "text"], ConfigValue::String(text.into()))
    }

    pub fn with_selection_enabled(self, enabled: bool) -> Self {
        self.set(&["selection", "enabled"], enabled)
    }

    pub fn with_selection_grouped(self, grouped: bool) -> Self {
        self.set(&["selection", "grouped"], grouped)
    }

    pub fn with_selection_multiple(self, multiple: bool) -> Self {
        self.set(&["selection", "multiple"], multiple)
    }

    pub fn with_selection_draggable(self, draggable: bool) -> Self {
        self.set(&["selection", "draggable"], draggable)
    }

    pub fn with_selection_is_selectable(self, callback: ScriptLiteral) -> Self {
        self.set(&["selection", "isselectable"], callback)
    }

    pub fn with_on_click(self, callback: ScriptLiteral) -> Self {
        self.set(&["onclick"], callback)
    }

    pub fn with_on_mouseover(self, callback: ScriptLiteral) -> Self {
        self.set(&["onmouseover"], callback)
    }

    pub fn with_on_mouseout(self, callback: ScriptLiteral) -> Self {
        self.set(&["onmouseout"], callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::tree::Tree;
    use serde_json::json;

    fn json_of(data: Data) -> serde_json::Value {
        Tree::from_value(&data.into()).unwrap().to_json("<raw>")
    }

    #[test]
    fn test_columns_mix_ids_and_numbers() {
        let data = Data::new()
            .with_columns(vec![
                vec![ConfigValue::from("data1"), 30.into(), 200.into()],
                vec![ConfigValue::from("data2"), 50.into(), 20.5.into()],
            ])
            .with_type(DataType::Bar);
        assert_eq!(
            json_of(data),
            json!({"columns": [["data1", 30, 200], ["data2", 50, 20.5]], "type": "bar"})
        );
    }

    #[test]
    fn test_types_and_groups() {
        let data = Data::new()
            .with_types([("data1", DataType::AreaSpline), ("data2", DataType::Step)])
            .with_groups([["data1", "data2"]])
            .with_names([("data1", "Sales")]);
        assert_eq!(
            json_of(data),
            json!({
                "types": {"data1": "area-spline", "data2": "step"},
                "groups": [["data1", "data2"]],
                "names": {"data1": "Sales"}
            })
        );
    }

    #[test]
    fn test_selection_and_callbacks() {
        let data = Data::new()
            .with_selection_enabled(true)
            .with_selection_grouped(false)
            .with_on_click(ScriptLiteral::new("function(d, el){}"));
        assert_eq!(
            json_of(data),
            json!({"selection": {"enabled": true, "grouped": false}, "onclick": "<raw>"})
        );
    }

    #[test]
    fn test_json_rejects_null() {
        let result = Data::new().with_json(json!([{"a": 1, "b": null}]));
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedValueType { ref path, .. }) if path == "[0].b"
        ));
    }

    #[test]
    fn test_labels_format_replaces_flag() {
        let data = Data::new()
            .with_labels(true)
            .with_labels_format(ScriptLiteral::new("function(v){return v;}"));
        assert_eq!(json_of(data), json!({"labels": {"format": "<raw>"}}));
    }

    #[test]
    fn test_order_and_hide() {
        let data = Data::new()
            .with_order(Order::Asc)
            .with_hide(vec!["data2"])
            .with_empty_label_text("");
        assert_eq!(
            json_of(data),
            json!({"order": "asc", "hide": ["data2"], "empty": {"label": {"text": ""}}})
        );
    }
}
