//! SDC command templates.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::deps::arcstr::ArcStr;

/// An SDC directive without its port target.
///
/// A template is completed by appending ` [get_ports {<port>}]`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CommandTemplate(ArcStr);

impl CommandTemplate {
    #[inline]
    pub fn new(text: impl Into<ArcStr>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Applies this template to a single port target.
    pub fn apply(&self, target: &str) -> String {
        format!("{} [get_ports {{{}}}]", self.0, target)
    }
}

impl Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&'static str> for CommandTemplate {
    fn from(value: &'static str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl From<ArcStr> for CommandTemplate {
    fn from(value: ArcStr) -> Self {
        Self(value)
    }
}

pub const INPUT_DELAY_MAX: ArcStr =
    arcstr::literal!("set_input_delay -max 10 -clock [get_clocks {clk}]");
pub const INPUT_DELAY_MIN: ArcStr =
    arcstr::literal!("set_input_delay -min 0 -clock [get_clocks {clk}]");
pub const INPUT_TRANSITION_MAX: ArcStr = arcstr::literal!("set_input_transition -max 0.44");
pub const INPUT_TRANSITION_MIN: ArcStr = arcstr::literal!("set_input_transition -min 0.05");
pub const OUTPUT_DELAY_MAX: ArcStr =
    arcstr::literal!("set_output_delay -max 10 -clock [get_clocks {clk}]");
pub const OUTPUT_DELAY_MIN: ArcStr =
    arcstr::literal!("set_output_delay -min 0 -clock [get_clocks {clk}]");
pub const LOAD: ArcStr = arcstr::literal!("set_load 0.14");

/// The seven templates shared by every built-in variant, in emission order.
pub fn default_commands() -> Vec<CommandTemplate> {
    [
        INPUT_DELAY_MAX,
        INPUT_DELAY_MIN,
        INPUT_TRANSITION_MAX,
        INPUT_TRANSITION_MIN,
        OUTPUT_DELAY_MAX,
        OUTPUT_DELAY_MIN,
        LOAD,
    ]
    .into_iter()
    .map(CommandTemplate)
    .collect()
}
