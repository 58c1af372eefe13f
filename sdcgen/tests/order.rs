use sdcgen::{ConstraintSet, EmitOrder, Variant};

#[test]
fn interleaved_follows_shared_bit_loops() {
    let set = ConstraintSet::for_variant(Variant::Datapath).with_order(EmitOrder::BitInterleaved);
    let lines: Vec<_> = set.lines().take(7).collect();
    let cmd = "set_input_delay -max 10 -clock [get_clocks {clk}]";
    assert_eq!(
        lines,
        vec![
            format!("{cmd} [get_ports {{data_i[0]}}]"),
            format!("{cmd} [get_ports {{data_o[0]}}]"),
            format!("{cmd} [get_ports {{addr_o[0]}}]"),
            format!("{cmd} [get_ports {{data_i[1]}}]"),
            format!("{cmd} [get_ports {{data_o[1]}}]"),
            format!("{cmd} [get_ports {{addr_o[1]}}]"),
            format!("{cmd} [get_ports {{data_i[2]}}]"),
        ]
    );
}

#[test]
fn interleaved_wishbone_tail() {
    let set =
        ConstraintSet::for_variant(Variant::WishboneSlave).with_order(EmitOrder::BitInterleaved);
    let targets: Vec<_> = set.targets().iter().map(|t| t.to_string()).collect();
    let tail = &targets[targets.len() - 6..];
    assert_eq!(
        tail,
        ["io_in[14]", "io_out[14]", "io_oeb[14]", "io_in[15]", "io_out[15]", "io_oeb[15]"]
    );
    assert_eq!(&targets[..2], ["wb_sel_i[0]", "wb_sel_i[1]"]);
    assert_eq!(targets[4], "wb_adr_i[0]");
    assert_eq!(targets[5], "wb_data_i[0]");
}

#[test]
fn orders_agree_on_content() {
    for variant in Variant::ALL {
        let port_major = ConstraintSet::for_variant(variant);
        let interleaved = port_major.clone().with_order(EmitOrder::BitInterleaved);

        let mut a: Vec<_> = port_major.lines().collect();
        let mut b: Vec<_> = interleaved.lines().collect();
        assert_eq!(a.len(), b.len());
        a.sort();
        b.sort();
        assert_eq!(a, b, "{variant}");
    }
}
