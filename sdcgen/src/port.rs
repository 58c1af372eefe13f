//! Port tables.

use serde::{Deserialize, Serialize};

use crate::deps::arcstr::ArcStr;
use crate::fmt::signal::{format_signal, BusFmt};

/// A named port and its width in bits.
///
/// A width of 1 denotes a scalar port; wider ports are emitted once per bit.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PortSpec {
    name: ArcStr,
    width: usize,
}

impl PortSpec {
    #[inline]
    pub fn scalar(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            width: 1,
        }
    }

    #[inline]
    pub fn vector(name: impl Into<ArcStr>, width: usize) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.width == 1
    }

    /// The formatted name of bit `idx` of this port.
    #[inline]
    pub fn bit(&self, idx: usize, format: BusFmt) -> ArcStr {
        format_signal(self.name.clone(), idx, self.width, format)
    }

    /// Iterates over the formatted names of every bit, in ascending order.
    pub fn bits(&self, format: BusFmt) -> impl Iterator<Item = ArcStr> + '_ {
        (0..self.width).map(move |i| self.bit(i, format))
    }
}

/// A run of ports driven from one shared bit loop.
///
/// Every member of a group with more than one port is expected to have
/// the same width.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PortGroup {
    ports: Vec<PortSpec>,
}

impl PortGroup {
    pub fn single(port: PortSpec) -> Self {
        Self { ports: vec![port] }
    }

    /// Creates a group of vector ports that all share `width`.
    pub fn bundle<I, N>(width: usize, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ArcStr>,
    {
        Self {
            ports: names
                .into_iter()
                .map(|name| PortSpec::vector(name, width))
                .collect(),
        }
    }

    #[inline]
    pub fn ports(&self) -> &[PortSpec] {
        &self.ports
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// The widest member of the group.
    pub fn max_width(&self) -> usize {
        self.ports.iter().map(PortSpec::width).max().unwrap_or(0)
    }
}

impl FromIterator<PortSpec> for PortGroup {
    fn from_iter<T: IntoIterator<Item = PortSpec>>(iter: T) -> Self {
        Self {
            ports: iter.into_iter().collect(),
        }
    }
}

impl From<PortSpec> for PortGroup {
    fn from(value: PortSpec) -> Self {
        Self::single(value)
    }
}

/// An ordered table of ports.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PortSet {
    groups: Vec<PortGroup>,
}

impl PortSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scalar port.
    pub fn scalar(mut self, name: impl Into<ArcStr>) -> Self {
        self.groups.push(PortSpec::scalar(name).into());
        self
    }

    /// Appends several scalar ports, one group each.
    pub fn scalars<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ArcStr>,
    {
        self.groups
            .extend(names.into_iter().map(|n| PortSpec::scalar(n).into()));
        self
    }

    /// Appends a single vector port.
    pub fn vector(mut self, name: impl Into<ArcStr>, width: usize) -> Self {
        self.groups.push(PortSpec::vector(name, width).into());
        self
    }

    /// Appends a group of equal-width vector ports.
    pub fn bundle<I, N>(mut self, width: usize, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ArcStr>,
    {
        self.groups.push(PortGroup::bundle(width, names));
        self
    }

    pub fn push(&mut self, group: impl Into<PortGroup>) {
        self.groups.push(group.into());
    }

    #[inline]
    pub fn groups(&self) -> &[PortGroup] {
        &self.groups
    }

    /// Iterates over every port in table order.
    pub fn ports(&self) -> impl Iterator<Item = &PortSpec> {
        self.groups.iter().flat_map(|g| g.ports.iter())
    }

    /// Looks up a port by name.
    pub fn get(&self, name: &str) -> Option<&PortSpec> {
        self.ports().find(|p| p.name.as_str() == name)
    }

    /// The number of ports, counting each member of a group.
    pub fn len(&self) -> usize {
        self.groups.iter().map(PortGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sum of all port widths.
    pub fn total_bits(&self) -> usize {
        self.ports().map(PortSpec::width).sum()
    }
}

impl FromIterator<PortSpec> for PortSet {
    fn from_iter<T: IntoIterator<Item = PortSpec>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().map(PortGroup::single).collect(),
        }
    }
}

impl FromIterator<PortGroup> for PortSet {
    fn from_iter<T: IntoIterator<Item = PortGroup>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
