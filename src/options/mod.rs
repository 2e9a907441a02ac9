//! Typed setters for each C3 configuration domain.
//!
//! Every domain type wraps a [`ConfigNode`](crate::node::ConfigNode) and
//! writes one leaf (or replaces one subtree) per setter. Options without a
//! dedicated setter can still be written with `with_option`.

use crate::script::ScriptLiteral;
use crate::value::ConfigValue;

/// Declares a domain builder backed by a `ConfigNode`
macro_rules! config_domain {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            node: $crate::node::ConfigNode,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Options written so far
            pub fn node(&self) -> &$crate::node::ConfigNode {
                &self.node
            }

            /// Write an option that has no dedicated setter
            pub fn with_option<K: AsRef<str>>(
                self,
                path: &[K],
                value: impl Into<$crate::value::ConfigValue>,
            ) -> Self {
                self.set(path, value)
            }

            fn set<K: AsRef<str>>(
                mut self,
                path: &[K],
                value: impl Into<$crate::value::ConfigValue>,
            ) -> Self {
                self.node.set(path, value);
                self
            }
        }

        impl From<$name> for $crate::value::ConfigValue {
            fn from(domain: $name) -> Self {
                $crate::value::ConfigValue::Node(domain.node)
            }
        }

        impl From<$name> for $crate::node::ConfigNode {
            fn from(domain: $name) -> Self {
                domain.node
            }
        }
    };
}

/// Declares a closed set of string constants accepted by an option
macro_rules! option_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),*
                }
            }
        }

        impl From<$name> for $crate::value::ConfigValue {
            fn from(value: $name) -> Self {
                $crate::value::ConfigValue::String(value.as_str().to_string())
            }
        }
    };
}

pub mod axis;
pub mod charts;
pub mod data;
pub mod grid;
pub mod legend;
pub mod point;
pub mod region;
pub mod subchart;
pub mod tooltip;
pub mod zoom;

pub use axis::{Axis, AxisType, XAxis, YAxis};
pub use charts::{Area, Bar, Donut, Gauge, Line, Pie, StepType};
pub use data::{Data, DataType, Order};
pub use grid::{Grid, GridLine, GridLinePosition};
pub use legend::{InsetAnchor, Legend, LegendPosition};
pub use point::Point;
pub use region::{Region, RegionAxis};
pub use subchart::Subchart;
pub use tooltip::Tooltip;
pub use zoom::Zoom;

/// Numeric option values. Integers stay integers in the output.
pub trait Numeric: Into<ConfigValue> {}

impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u32 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

/// Either a format string understood by C3/d3 or a formatting function
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    Pattern(String),
    Script(ScriptLiteral),
}

impl From<&str> for Formatter {
    fn from(pattern: &str) -> Self {
        Formatter::Pattern(pattern.to_string())
    }
}

impl From<String> for Formatter {
    fn from(pattern: String) -> Self {
        Formatter::Pattern(pattern)
    }
}

impl From<ScriptLiteral> for Formatter {
    fn from(script: ScriptLiteral) -> Self {
        Formatter::Script(script)
    }
}

impl From<Formatter> for ConfigValue {
    fn from(formatter: Formatter) -> Self {
        match formatter {
            Formatter::Pattern(pattern) => ConfigValue::String(pattern),
            Formatter::Script(script) => ConfigValue::Script(script),
        }
    }
}

/// `hide` options accept either a flag for every target or a list of ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hide {
    All(bool),
    Targets(Vec<String>),
}

impl From<bool> for Hide {
    fn from(hide: bool) -> Self {
        Hide::All(hide)
    }
}

impl From<&str> for Hide {
    fn from(target: &str) -> Self {
        Hide::Targets(vec![target.to_string()])
    }
}

impl From<Vec<String>> for Hide {
    fn from(targets: Vec<String>) -> Self {
        Hide::Targets(targets)
    }
}

impl From<Vec<&str>> for Hide {
    fn from(targets: Vec<&str>) -> Self {
        Hide::Targets(targets.into_iter().map(str::to_string).collect())
    }
}

impl From<Hide> for ConfigValue {
    fn from(hide: Hide) -> Self {
        match hide {
            Hide::All(flag) => ConfigValue::Bool(flag),
            Hide::Targets(targets) => targets.into(),
        }
    }
}

option_enum! {
    /// Placement of an axis label
    LabelPosition {
        InnerRight => "inner-right",
        InnerCenter => "inner-center",
        InnerLeft => "inner-left",
        OuterRight => "outer-right",
        OuterCenter => "outer-center",
        OuterLeft => "outer-left",
        InnerTop => "inner-top",
        InnerMiddle => "inner-middle",
        InnerBottom => "inner-bottom",
        OuterTop => "outer-top",
        OuterMiddle => "outer-middle",
        OuterBottom => "outer-bottom",
    }
}

/// Collect items into a sequence value
pub(crate) fn sequence<I, T>(items: I) -> ConfigValue
where
    I: IntoIterator<Item = T>,
    T: Into<ConfigValue>,
{
    ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
}

/// Collect `(key, value)` pairs into a node, keeping their order
pub(crate) fn mapping<I, K, V>(pairs: I) -> ConfigValue
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<ConfigValue>,
{
    let mut node = crate::node::ConfigNode::new();
    for (key, value) in pairs {
        node.set(&[key], value);
    }
    ConfigValue::Node(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_variants() {
        assert_eq!(ConfigValue::from(Hide::from(true)), ConfigValue::Bool(true));
        assert_eq!(
            ConfigValue::from(Hide::from(vec!["data1", "data2"])),
            ConfigValue::Sequence(vec![
                ConfigValue::String("data1".to_string()),
                ConfigValue::String("data2".to_string()),
            ])
        );
    }

    #[test]
    fn test_formatter_script_stays_script() {
        let value: ConfigValue = Formatter::from(ScriptLiteral::new("d3.format('$')")).into();
        assert_eq!(value.kind(), "script");
        let value: ConfigValue = Formatter::from("%Y-%m-%d").into();
        assert_eq!(value.as_str(), Some("%Y-%m-%d"));
    }

    #[test]
    fn test_mapping_preserves_order() {
        let value = mapping(vec![("data2", "bar"), ("data1", "line")]);
        let keys: Vec<&str> = value.as_node().unwrap().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["data2", "data1"]);
    }
}
