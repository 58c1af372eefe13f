//! SDC port constraints for the generic datapath.

use sdcgen::Variant;

pub fn main() {
    make_sdc::main(Variant::Datapath);
}
