use snafu::prelude::*;
use std::num::ParseIntError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RegError {
    #[snafu(display("Unknown register: {}", name))]
    UnknownRegister { name: String },
    #[snafu(display("Unknown flag: {}", name))]
    UnknownFlag { name: String },
    #[snafu(display("Malformed assignment (expected <register>=<value>): {}", text))]
    MalformedAssignment { text: String },
    #[snafu(display("Invalid value: {}", text))]
    InvalidValue { text: String, source: ParseIntError },
    #[snafu(display("Value ${:04x} does not fit in register {}", value, target))]
    ValueOutOfRange { target: String, value: u16 },
    #[snafu(display("Failed to install logger"))]
    LoggerSetup { source: log::SetLoggerError },
}
