//! The top-level chart configuration.
//!
//! [`Chart`] owns one root [`ConfigNode`] keyed by C3's top-level option
//! names. Domain builders and callbacks are attached under their slot; the
//! order in which slots are first attached is the order they are rendered in.

use crate::error::Result;
use crate::node::ConfigNode;
use crate::options::{
    sequence, Area, Axis, Bar, Data, Donut, Gauge, Grid, Legend, Line, Pie, Point, Region,
    Subchart, Tooltip, Zoom,
};
use crate::render;
use crate::script::ScriptLiteral;
use crate::tree::Tree;
use crate::value::ConfigValue;
use crate::RenderOptions;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    options: ConfigNode,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// All options attached so far
    pub fn options(&self) -> &ConfigNode {
        &self.options
    }

    /// Write any option path, for settings without a dedicated method
    pub fn with_option<K: AsRef<str>>(mut self, path: &[K], value: impl Into<ConfigValue>) -> Self {
        self.options.set(path, value);
        self
    }

    fn attach(self, slot: &str, value: impl Into<ConfigValue>) -> Self {
        self.with_option(&[slot], value)
    }

    /// CSS selector of the element the chart is bound to
    pub fn with_bindto(self, selector: impl Into<String>) -> Self {
        self.attach("bindto", ConfigValue::String(selector.into()))
    }

    pub fn with_size_width(self, width: u32) -> Self {
        self.with_option(&["size", "width"], width)
    }

    pub fn with_size_height(self, height: u32) -> Self {
        self.with_option(&["size", "height"], height)
    }

    pub fn with_padding_top(self, padding: i32) -> Self {
        self.with_option(&["padding", "top"], padding)
    }

    pub fn with_padding_right(self, padding: i32) -> Self {
        self.with_option(&["padding", "right"], padding)
    }

    pub fn with_padding_bottom(self, padding: i32) -> Self {
        self.with_option(&["padding", "bottom"], padding)
    }

    pub fn with_padding_left(self, padding: i32) -> Self {
        self.with_option(&["padding", "left"], padding)
    }

    /// Colors assigned to series in order, as CSS color strings
    pub fn with_color_pattern<I, T>(self, pattern: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.with_option(
            &["color", "pattern"],
            sequence(pattern.into_iter().map(Into::<String>::into)),
        )
    }

    pub fn with_interaction_enabled(self, enabled: bool) -> Self {
        self.with_option(&["interaction", "enabled"], enabled)
    }

    /// Animation duration in milliseconds
    pub fn with_transition_duration(self, duration: u32) -> Self {
        self.with_option(&["transition", "duration"], duration)
    }

    pub fn with_data(self, data: Data) -> Self {
        self.attach("data", data)
    }

    pub fn with_axis(self, axis: Axis) -> Self {
        self.attach("axis", axis)
    }

    pub fn with_grid(self, grid: Grid) -> Self {
        self.attach("grid", grid)
    }

    /// Append a region to the `regions` list
    pub fn add_region(mut self, region: Region) -> Self {
        if let Some(ConfigValue::Sequence(regions)) = self.options.get_mut(&["regions"]) {
            regions.push(region.into());
            return self;
        }
        self.attach("regions", vec![region])
    }

    /// Replace the whole `regions` list
    pub fn with_regions(self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.attach("regions", sequence(regions))
    }

    pub fn with_legend(self, legend: Legend) -> Self {
        self.attach("legend", legend)
    }

    pub fn with_tooltip(self, tooltip: Tooltip) -> Self {
        self.attach("tooltip", tooltip)
    }

    pub fn with_subchart(self, subchart: Subchart) -> Self {
        self.attach("subchart", subchart)
    }

    pub fn with_zoom(self, zoom: Zoom) -> Self {
        self.attach("zoom", zoom)
    }

    pub fn with_point(self, point: Point) -> Self {
        self.attach("point", point)
    }

    pub fn with_line(self, line: Line) -> Self {
        self.attach("line", line)
    }

    pub fn with_area(self, area: Area) -> Self {
        self.attach("area", area)
    }

    pub fn with_bar(self, bar: Bar) -> Self {
        self.attach("bar", bar)
    }

    pub fn with_pie(self, pie: Pie) -> Self {
        self.attach("pie", pie)
    }

    pub fn with_donut(self, donut: Donut) -> Self {
        self.attach("donut", donut)
    }

    pub fn with_gauge(self, gauge: Gauge) -> Self {
        self.attach("gauge", gauge)
    }

    pub fn with_on_init(self, callback: ScriptLiteral) -> Self {
        self.attach("oninit", callback)
    }

    pub fn with_on_rendered(self, callback: ScriptLiteral) -> Self {
        self.attach("onrendered", callback)
    }

    pub fn with_on_mouseover(self, callback: ScriptLiteral) -> Self {
        self.attach("onmouseover", callback)
    }

    pub fn with_on_mouseout(self, callback: ScriptLiteral) -> Self {
        self.attach("onmouseout", callback)
    }

    pub fn with_on_resize(self, callback: ScriptLiteral) -> Self {
        self.attach("onresize", callback)
    }

    pub fn with_on_resized(self, callback: ScriptLiteral) -> Self {
        self.attach("onresized", callback)
    }

    pub fn to_tree(&self) -> Result<Tree> {
        self.options.to_tree()
    }

    /// Render `<variable> = c3.generate(<options>);`
    pub fn render(&self, variable: &str, pretty: bool) -> Result<String> {
        self.render_with(&RenderOptions::new(variable, pretty))
    }

    pub fn render_with(&self, options: &RenderOptions) -> Result<String> {
        let tree = self.to_tree()?;
        render::render_statement(&tree, options)
    }

    /// Render straight into `writer`
    pub fn write_rendering<W: Write>(&self, writer: &mut W, options: &RenderOptions) -> Result<()> {
        let rendering = self.render_with(options)?;
        writer.write_all(rendering.as_bytes())?;
        Ok(())
    }
}
