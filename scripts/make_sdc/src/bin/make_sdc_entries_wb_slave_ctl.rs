//! SDC port constraints for the Wishbone slave controller.

use sdcgen::Variant;

pub fn main() {
    make_sdc::main(Variant::WishboneSlave);
}
