//! SDC port constraints for the control unit.

use sdcgen::Variant;

pub fn main() {
    make_sdc::main(Variant::ControlUnit);
}
