#![allow(dead_code)]

use sdcgen::constraint::default_commands;
use sdcgen::port::PortSet;

/// Counts the lines of `sdc` whose port target is exactly `target`.
pub fn count_target(sdc: &str, target: &str) -> usize {
    let needle = format!("[get_ports {{{target}}}]");
    sdc.lines().filter(|line| line.ends_with(&needle)).count()
}

/// The line count every port table must produce with the default commands.
pub fn expected_lines(ports: &PortSet) -> usize {
    default_commands().len() * ports.ports().map(|p| p.width()).sum::<usize>()
}
