use crate::error::{InvalidValueSnafu, MalformedAssignmentSnafu, RegError, ValueOutOfRangeSnafu};
use crate::lr35902::registers::{Register, RegisterFile, RegisterPair};
use regex::Regex;
use snafu::prelude::*;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Register(Register),
    Pair(RegisterPair),
    Sp,
    Pc,
}

impl Target {
    fn is_wide(&self) -> bool {
        !matches!(self, Target::Register(_))
    }
}

impl FromStr for Target {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sp" => Ok(Target::Sp),
            "pc" => Ok(Target::Pc),
            name if name.len() == 2 => Ok(Target::Pair(name.parse()?)),
            name => Ok(Target::Register(name.parse()?)),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Target::Register(register) => write!(f, "{}", register),
            Target::Pair(pair) => write!(f, "{}", pair),
            Target::Sp => write!(f, "sp"),
            Target::Pc => write!(f, "pc"),
        }
    }
}

/// A single `target=value` write, e.g. `hl=0xbeef` or `a=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub target: Target,
    pub value: u16,
}

impl Assignment {
    pub fn apply(&self, registers: &mut RegisterFile) {
        match self.target {
            Target::Register(register) => registers.write_register(register, self.value as u8),
            Target::Pair(pair) => registers.write_pair(pair, self.value),
            Target::Sp => registers.set_sp(self.value),
            Target::Pc => registers.set_pc(self.value),
        }
    }
}

fn assignment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*([A-Za-z]{1,2})\s*=\s*(0[xX][0-9A-Fa-f]+|[0-9]+)\s*$").unwrap())
}

fn parse_value(text: &str) -> Result<u16, RegError> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse::<u16>(),
    };

    parsed.context(InvalidValueSnafu { text })
}

impl FromStr for Assignment {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = assignment_regex()
            .captures(s)
            .context(MalformedAssignmentSnafu { text: s })?;

        let target: Target = captures[1].parse()?;
        let value = parse_value(&captures[2])?;

        ensure!(
            target.is_wide() || value <= 0xff,
            ValueOutOfRangeSnafu {
                target: target.to_string(),
                value
            }
        );

        Ok(Assignment { target, value })
    }
}
