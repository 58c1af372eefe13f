use serde::{Deserialize, Serialize};

use crate::deps::arcstr::ArcStr;

/// An enumeration of bus formatting styles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum BusFmt {
    /// Delimits the bus index using two characters, eg. `data[3]`.
    DoubleDelimiter(char, char),

    /// Delimits the bus index using one character, eg. `data_3`.
    SingleDelimiter(char),
}

impl Default for BusFmt {
    fn default() -> Self {
        Self::DoubleDelimiter('[', ']')
    }
}

/// Formats bit `idx` of a port that is `width` bits wide.
///
/// Scalar ports (`width == 1`) are returned unchanged.
pub fn format_signal(name: impl Into<ArcStr>, idx: usize, width: usize, format: BusFmt) -> ArcStr {
    let name = name.into();
    if width == 1 {
        name
    } else {
        format_bus(&name, idx, format)
    }
}

pub fn format_bus(name: &str, idx: usize, format: BusFmt) -> ArcStr {
    use BusFmt::*;
    match format {
        DoubleDelimiter(a, b) => arcstr::format!("{name}{a}{idx}{b}"),
        SingleDelimiter(d) => arcstr::format!("{name}{d}{idx}"),
    }
}
