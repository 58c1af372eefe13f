//! Built-in port tables.
//!
//! Each table lists its ports in the order the generated file visits them.
//! Ports that share a bit loop are grouped with [`PortSet::bundle`].

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::port::PortSet;

/// A hardware interface with a fixed port table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// A generic datapath with 31-bit data and address buses.
    Datapath,
    /// The accelerator control unit.
    ControlUnit,
    /// A Wishbone slave controller, including logic analyzer and chip I/O pins.
    WishboneSlave,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::Datapath,
        Variant::ControlUnit,
        Variant::WishboneSlave,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Datapath => "datapath",
            Variant::ControlUnit => "ctrl_unit",
            Variant::WishboneSlave => "wb_slave_ctl",
        }
    }

    pub fn port_set(&self) -> PortSet {
        match self {
            Variant::Datapath => datapath(),
            Variant::ControlUnit => control_unit(),
            Variant::WishboneSlave => wishbone_slave(),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn datapath() -> PortSet {
    PortSet::new()
        .bundle(31, ["data_i", "data_o", "addr_o"])
        .scalars(["reset", "enable", "done"])
}

pub fn control_unit() -> PortSet {
    PortSet::new().bundle(32, ["status", "operation"]).scalars([
        "reset",
        "finished",
        "matrix_mult_done",
        "matrix_conv_done",
        "multiplier_enable",
        "convolution_enable",
    ])
}

pub fn wishbone_slave() -> PortSet {
    PortSet::new()
        // Wishbone bus
        .vector("wb_sel_i", 4)
        .bundle(32, ["wb_adr_i", "wb_data_i", "wb_data_o"])
        .scalars(["wb_rst_i", "wb_stb_i", "wb_cyc_i", "wb_we_i", "wb_ack_o"])
        // Controller
        .scalars(["reset", "finished"])
        .bundle(
            32,
            [
                "status",
                "operation",
                "wbctrl_mem_addr",
                "wbctrl_mem_data",
                "sram_data",
            ],
        )
        .vector("wbctrl_mem_op", 2)
        .vector("irq", 3)
        // Logic analyzer
        .bundle(128, ["la_data_in", "la_data_out", "la_oenb"])
        // Chip I/O
        .bundle(16, ["io_in", "io_out", "io_oeb"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_bits() {
        assert_eq!(datapath().total_bits(), 3 * 31 + 3);
        assert_eq!(control_unit().total_bits(), 2 * 32 + 6);
        assert_eq!(
            wishbone_slave().total_bits(),
            4 + 3 * 32 + 5 + 2 + 5 * 32 + 2 + 3 + 3 * 128 + 3 * 16
        );
    }

    #[test]
    fn port_counts() {
        assert_eq!(datapath().len(), 6);
        assert_eq!(control_unit().len(), 8);
        assert_eq!(wishbone_slave().len(), 24);
    }
}
