use sdcgen::constraint::default_commands;
use sdcgen::{ConstraintSet, Variant};

mod common;
use common::{count_target, expected_lines};

#[test]
fn line_counts() {
    let expected = [
        (Variant::Datapath, 672),
        (Variant::ControlUnit, 490),
        (Variant::WishboneSlave, 4928),
    ];
    for (variant, lines) in expected {
        let set = ConstraintSet::for_variant(variant);
        let sdc = set.render();
        assert_eq!(sdc.lines().count(), lines, "{variant}");
        assert_eq!(set.line_count(), lines, "{variant}");
        assert_eq!(expected_lines(set.ports()), lines, "{variant}");
    }
}

#[test]
fn every_bit_once_per_command() {
    let commands = default_commands().len();
    for variant in Variant::ALL {
        let set = ConstraintSet::for_variant(variant);
        let sdc = set.render();
        for port in set.ports().ports() {
            if port.is_scalar() {
                assert_eq!(count_target(&sdc, port.name()), commands, "{}", port.name());
            } else {
                for i in 0..port.width() {
                    let target = format!("{}[{}]", port.name(), i);
                    assert_eq!(count_target(&sdc, &target), commands, "{target}");
                }
                assert_eq!(count_target(&sdc, port.name()), 0, "{}", port.name());
            }
        }
    }
}

#[test]
fn scalars_have_no_index() {
    let sdc = ConstraintSet::for_variant(Variant::WishboneSlave).render();
    for name in [
        "wb_rst_i", "wb_stb_i", "wb_cyc_i", "wb_we_i", "wb_ack_o", "reset", "finished",
    ] {
        assert_eq!(count_target(&sdc, name), 7);
        assert!(!sdc.contains(&format!("{{{name}[")));
    }
}

#[test]
fn output_is_stable() {
    for variant in Variant::ALL {
        let first = ConstraintSet::for_variant(variant).render();
        let second = ConstraintSet::for_variant(variant).render();
        assert_eq!(first, second);
    }
}

#[test]
fn datapath_layout() {
    let sdc = ConstraintSet::for_variant(Variant::Datapath).render();
    let lines: Vec<_> = sdc.lines().collect();
    assert_eq!(
        lines[0],
        "set_input_delay -max 10 -clock [get_clocks {clk}] [get_ports {data_i[0]}]"
    );
    assert_eq!(
        lines[30],
        "set_input_delay -max 10 -clock [get_clocks {clk}] [get_ports {data_i[30]}]"
    );
    assert_eq!(
        lines[31],
        "set_input_delay -max 10 -clock [get_clocks {clk}] [get_ports {data_o[0]}]"
    );
    assert_eq!(
        lines[95],
        "set_input_delay -max 10 -clock [get_clocks {clk}] [get_ports {done}]"
    );
    assert_eq!(
        lines[96],
        "set_input_delay -min 0 -clock [get_clocks {clk}] [get_ports {data_i[0]}]"
    );
    assert_eq!(lines[671], "set_load 0.14 [get_ports {done}]");
    assert!(!sdc.contains("data_i[31]"));
    assert!(sdc.ends_with('\n'));
}
