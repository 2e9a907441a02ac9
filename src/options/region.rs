// Highlighted chart regions (`regions: [...]`)

use crate::value::ConfigValue;

option_enum! {
    RegionAxis {
        X => "x",
        Y => "y",
        Y2 => "y2",
    }
}

config_domain! {
    /// One entry of the top-level `regions` list
    Region
}

impl Region {
    pub fn with_axis(self, axis: RegionAxis) -> Self {
        self.set(&["axis"], axis)
    }

    /// Where the region begins. Numbers, or date strings on a timeseries axis.
    pub fn with_start(self, start: impl Into<ConfigValue>) -> Self {
        self.set(&["start"], start)
    }

    pub fn with_end(self, end: impl Into<ConfigValue>) -> Self {
        self.set(&["end"], end)
    }

    /// CSS class applied to the region
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.set(&["class"], ConfigValue::String(class.into()))
    }
}
