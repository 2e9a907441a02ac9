// Legend options

use super::Hide;
use crate::script::ScriptLiteral;

option_enum! {
    LegendPosition {
        Bottom => "bottom",
        Right => "right",
        Inset => "inset",
    }
}

option_enum! {
    /// Corner an inset legend is anchored to
    InsetAnchor {
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

config_domain! {
    /// The `legend` option group
    Legend
}

impl Legend {
    pub fn with_visibility(self, show: bool) -> Self {
        self.set(&["show"], show)
    }

    /// Hide every legend item, or only the listed series
    pub fn with_hide(self, hide: impl Into<Hide>) -> Self {
        self.set(&["hide"], Into::<Hide>::into(hide))
    }

    pub fn with_position(self, position: LegendPosition) -> Self {
        self.set(&["position"], position)
    }

    pub fn with_inset_anchor(self, anchor: InsetAnchor) -> Self {
        self.set(&["inset", "anchor"], anchor)
    }

    pub fn with_inset_x(self, x: i32) -> Self {
        self.set(&["inset", "x"], x)
    }

    pub fn with_inset_y(self, y: i32) -> Self {
        self.set(&["inset", "y"], y)
    }

    /// Number of items per column of an inset legend
    pub fn with_inset_step(self, step: u32) -> Self {
        self.set(&["inset", "step"], step)
    }

    pub fn with_item_on_click(self, callback: ScriptLiteral) -> Self {
        self.set(&["item", "onclick"], callback)
    }

    pub fn with_item_on_mouseover(self, callback: ScriptLiteral) -> Self {
        self.set(&["item", "onmouseover"], callback)
    }

    pub fn with_item_on_mouseout(self, callback: ScriptLiteral) -> Self {
        self.set(&["item", "onmouseout"], callback)
    }
}
