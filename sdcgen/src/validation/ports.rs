//! Checks a port table for authoring mistakes.
//!
//! These mistakes cannot be recovered from at emission time: a zero-width
//! port silently disappears from the output and a duplicated name
//! constrains the same port twice.

use std::collections::HashSet;
use std::fmt::Display;

use crate::deps::arcstr::ArcStr;
use crate::error::{ErrorSource, Result};
use crate::log::Log;
use crate::port::{PortGroup, PortSet, PortSpec};
use crate::validation::{Empty, ValidatorOutput};

/// Validates the names and widths of every port in `ports`.
pub fn validate_ports(ports: &PortSet) -> PortValidatorOutput {
    PortValidator {
        ports,
        output: ValidatorOutput::default(),
    }
    .validate()
}

/// Validates `ports`, logging every problem and returning the first as an error.
pub fn ensure_valid(ports: &PortSet) -> Result<()> {
    let output = validate_ports(ports);
    output.log();
    match output.first_error() {
        Some(err) => Err(ErrorSource::InvalidPorts(err).into()),
        None => Ok(()),
    }
}

struct PortValidator<'a> {
    ports: &'a PortSet,
    output: PortValidatorOutput,
}

#[derive(Default, Debug)]
pub struct PortValidatorData {
    ports: usize,
    bits: usize,
}

impl PortValidatorData {
    #[inline]
    pub fn ports(&self) -> usize {
        self.ports
    }

    #[inline]
    pub fn bits(&self) -> usize {
        self.bits
    }
}

impl Log for PortValidatorData {
    fn log(&self) {
        use crate::log::debug;
        debug!("validated {} ports ({} bits)", self.ports, self.bits);
    }
}

pub type PortValidatorOutput = ValidatorOutput<Empty, Empty, Error, PortValidatorData>;

/// Data for an error.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Error {
    /// Index of the offending group within the port table.
    group: usize,
    cause: ErrorCause,
}

/// An enumeration of causes for an error.
#[non_exhaustive]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ErrorCause {
    /// The name is empty or contains whitespace or braces.
    InvalidName { name: ArcStr },
    /// The port has a width of zero.
    ZeroWidth { name: ArcStr },
    /// Multiple ports have the same name.
    DuplicateName { name: ArcStr },
    /// Members of a shared bit loop have different widths.
    MismatchedGroupWidth {
        name: ArcStr,
        width: usize,
        expected: usize,
    },
}

impl Error {
    pub fn new(group: usize, cause: ErrorCause) -> Self {
        Self { group, cause }
    }

    #[inline]
    pub fn cause(&self) -> &ErrorCause {
        &self.cause
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            ErrorCause::InvalidName { name } => {
                write!(f, "invalid port name: `{}` in group {}", name, self.group)
            }
            ErrorCause::ZeroWidth { name } => {
                write!(f, "port `{}` has zero width", name)
            }
            ErrorCause::DuplicateName { name } => {
                write!(f, "duplicate port name: `{}` in group {}", name, self.group)
            }
            ErrorCause::MismatchedGroupWidth {
                name,
                width,
                expected,
            } => write!(
                f,
                "port `{}` has width {} but the rest of group {} has width {}",
                name, width, self.group, expected
            ),
        }
    }
}

impl Log for Error {
    fn log(&self) {
        use crate::log::error;
        error!("{self}");
    }
}

/// Checks if the given string `name` is usable inside `get_ports {...}`.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(char::is_whitespace)
        && !name.contains(['{', '}', '[', ']'])
}

impl<'a> PortValidator<'a> {
    fn validate(mut self) -> PortValidatorOutput {
        let mut names = HashSet::with_capacity(self.ports.len());
        for (i, group) in self.ports.groups().iter().enumerate() {
            self.validate_group(i, group, &mut names);
        }
        self.output.data = PortValidatorData {
            ports: self.ports.len(),
            bits: self.ports.total_bits(),
        };
        self.output
    }

    fn validate_group(&mut self, idx: usize, group: &PortGroup, names: &mut HashSet<ArcStr>) {
        let expected = group.ports().first().map(PortSpec::width);
        for port in group.ports() {
            self.validate_port(idx, port, names);
            if let Some(expected) = expected {
                if port.width() != expected {
                    self.output.errors.push(Error::new(
                        idx,
                        ErrorCause::MismatchedGroupWidth {
                            name: port.name().clone(),
                            width: port.width(),
                            expected,
                        },
                    ));
                }
            }
        }
    }

    fn validate_port(&mut self, idx: usize, port: &PortSpec, names: &mut HashSet<ArcStr>) {
        let name = port.name();
        if !is_valid_name(name) {
            self.output
                .errors
                .push(Error::new(idx, ErrorCause::InvalidName { name: name.clone() }));
        }
        if port.width() == 0 {
            self.output
                .errors
                .push(Error::new(idx, ErrorCause::ZeroWidth { name: name.clone() }));
        }
        if !names.insert(name.clone()) {
            self.output.errors.push(Error::new(
                idx,
                ErrorCause::DuplicateName { name: name.clone() },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::Variant;

    #[test]
    fn builtin_tables_are_clean() {
        for variant in Variant::ALL {
            let output = validate_ports(&variant.port_set());
            assert!(!output.has_errors(), "{variant}: {:?}", output.first_error());
        }
    }

    #[test]
    fn reports_authoring_mistakes() {
        let mut ports = PortSet::new()
            .vector("status", 32)
            .vector("status", 32)
            .vector("irq", 0)
            .scalar("");
        ports.push(PortGroup::from_iter([
            PortSpec::vector("la_data_in", 128),
            PortSpec::vector("la_oenb", 64),
        ]));

        let output = validate_ports(&ports);
        let causes: Vec<_> = output.errors().iter().map(Error::cause).collect();
        assert_eq!(causes.len(), 4);
        assert!(matches!(causes[0], ErrorCause::DuplicateName { .. }));
        assert!(matches!(causes[1], ErrorCause::ZeroWidth { .. }));
        assert!(matches!(causes[2], ErrorCause::InvalidName { .. }));
        assert!(matches!(
            causes[3],
            ErrorCause::MismatchedGroupWidth {
                width: 64,
                expected: 128,
                ..
            }
        ));
        assert_eq!(output.data().ports(), 6);
    }

    #[test]
    fn ensure_valid_fails_on_first_error() {
        let ports = PortSet::new().scalar("wb_we_i").scalar("wb_we_i");
        let err = ensure_valid(&ports).unwrap_err();
        assert!(matches!(err.source(), ErrorSource::InvalidPorts(msg) if msg.contains("wb_we_i")));
    }
}
