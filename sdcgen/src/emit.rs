//! The constraint line emitter.
//!
//! Lines are produced command-major: every port bit receives the first
//! command before any port bit receives the second.

use std::io::Write;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::constraint::{default_commands, CommandTemplate};
use crate::deps::arcstr::ArcStr;
use crate::error::{ErrorSource, Result};
use crate::fmt::signal::BusFmt;
use crate::port::PortSet;
use crate::variants::Variant;

/// The order in which port bits are visited within a single command.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EmitOrder {
    /// Each port is exhausted, bit 0 upwards, before the next port starts.
    #[default]
    PortMajor,
    /// Within a port group, bit `i` of every member precedes bit `i + 1`.
    ///
    /// Groups with a single member are emitted exactly as in [`EmitOrder::PortMajor`].
    BitInterleaved,
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[allow(clippy::needless_borrow)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ConstraintSet {
    /// Command templates, in emission order.
    #[builder(setter(into))]
    commands: Vec<CommandTemplate>,
    /// The ports each command is applied to.
    ports: PortSet,
    #[builder(default)]
    order: EmitOrder,
    /// How vector bits are written, `name[i]` by default.
    #[builder(default)]
    bus_format: BusFmt,
}

impl ConstraintSetBuilder {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(ref commands) = self.commands {
            if commands.is_empty() {
                return Err("at least one command template is required".to_string());
            }
        }
        if let Some(ref ports) = self.ports {
            if ports.is_empty() {
                return Err("at least one port is required".to_string());
            }
        }
        Ok(())
    }
}

impl From<ConstraintSetBuilderError> for ErrorSource {
    fn from(value: ConstraintSetBuilderError) -> Self {
        Self::InvalidArgs(value.to_string())
    }
}

impl ConstraintSet {
    #[inline]
    pub fn builder() -> ConstraintSetBuilder {
        ConstraintSetBuilder::default()
    }

    /// The seven default commands applied to the ports of `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            commands: default_commands(),
            ports: variant.port_set(),
            order: EmitOrder::default(),
            bus_format: BusFmt::default(),
        }
    }

    /// Returns a copy of this set that visits port bits in `order`.
    pub fn with_order(mut self, order: EmitOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn commands(&self) -> &[CommandTemplate] {
        &self.commands
    }

    #[inline]
    pub fn ports(&self) -> &PortSet {
        &self.ports
    }

    #[inline]
    pub fn order(&self) -> EmitOrder {
        self.order
    }

    #[inline]
    pub fn bus_format(&self) -> BusFmt {
        self.bus_format
    }

    /// The number of lines [`ConstraintSet::lines`] yields.
    pub fn line_count(&self) -> usize {
        self.commands.len() * self.ports.total_bits()
    }

    /// Formatted port targets for a single command, in visiting order.
    pub fn targets(&self) -> Vec<ArcStr> {
        let fmt = self.bus_format;
        match self.order {
            EmitOrder::PortMajor => self.ports.ports().flat_map(|p| p.bits(fmt)).collect(),
            EmitOrder::BitInterleaved => self
                .ports
                .groups()
                .iter()
                .flat_map(|group| {
                    (0..group.max_width()).flat_map(move |i| {
                        group
                            .ports()
                            .iter()
                            .filter(move |p| i < p.width())
                            .map(move |p| p.bit(i, fmt))
                    })
                })
                .collect(),
        }
    }

    /// Lazily produces every constraint line, without trailing newlines.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            commands: &self.commands,
            targets: self.targets(),
            command: 0,
            target: 0,
        }
    }

    /// Writes every line to `out`, each terminated by a newline.
    pub fn write(&self, out: &mut dyn Write) -> Result<()> {
        use crate::log::debug;
        debug!(
            "writing {} constraint lines for {} ports",
            self.line_count(),
            self.ports.len()
        );
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Renders the whole constraint file into a string.
    pub fn render(&self) -> String {
        let mut sdc = String::new();
        for line in self.lines() {
            sdc.push_str(&line);
            sdc.push('\n');
        }
        sdc
    }
}

/// An iterator over the lines of a [`ConstraintSet`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    commands: &'a [CommandTemplate],
    targets: Vec<ArcStr>,
    command: usize,
    target: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.targets.is_empty() {
            return None;
        }
        let command = self.commands.get(self.command)?;
        let line = command.apply(&self.targets[self.target]);
        self.target += 1;
        if self.target == self.targets.len() {
            self.target = 0;
            self.command += 1;
        }
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.targets.is_empty() {
            0
        } else {
            self.commands.len().saturating_sub(self.command) * self.targets.len() - self.target
        };
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Lines<'a> {}
