use crate::error::{RegError, UnknownFlagSnafu, UnknownRegisterSnafu};
use bitflags::bitflags;
use log::{debug, trace};
use snafu::prelude::*;
use std::str::FromStr;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Flags: u8 {
        const ZERO       = 0b1000_0000;
        const SUBTRACT   = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY      = 0b0001_0000;
    }
}

impl From<u8> for Flags {
    fn from(byte: u8) -> Self {
        Self::from_bits_truncate(byte)
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Self::from_bits_truncate(flag.mask())
    }
}

/// One of the eight 8-bit slots. The discriminant is the slot's position in
/// the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A = 0,
    F = 1,
    B = 2,
    C = 3,
    D = 4,
    E = 5,
    H = 6,
    L = 7,
}

impl Register {
    pub const ALL: [Register; 8] = [
        Register::A,
        Register::F,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::H,
        Register::L,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A 16-bit view over two slots, high byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    AF,
    BC,
    DE,
    HL,
}

impl RegisterPair {
    pub const ALL: [RegisterPair; 4] = [RegisterPair::AF, RegisterPair::BC, RegisterPair::DE, RegisterPair::HL];

    pub const fn high(self) -> Register {
        match self {
            RegisterPair::AF => Register::A,
            RegisterPair::BC => Register::B,
            RegisterPair::DE => Register::D,
            RegisterPair::HL => Register::H,
        }
    }

    pub const fn low(self) -> Register {
        match self {
            RegisterPair::AF => Register::F,
            RegisterPair::BC => Register::C,
            RegisterPair::DE => Register::E,
            RegisterPair::HL => Register::L,
        }
    }
}

/// Status bits of F. The discriminant is the bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Carry = 4,
    HalfCarry = 5,
    Subtract = 6,
    Zero = 7,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::Zero, Flag::Subtract, Flag::HalfCarry, Flag::Carry];

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }
}

/// Well-known register contents right after the boot ROM hands over control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PowerUpState {
    Zero,
    Dmg,
    Mgb,
    Cgb,
}

impl PowerUpState {
    // A F B C D E H L, SP, PC
    fn values(self) -> ([u8; 8], u16, u16) {
        match self {
            PowerUpState::Zero => ([0x00; 8], 0x0000, 0x0000),
            PowerUpState::Dmg => ([0x01, 0xb0, 0x00, 0x13, 0x00, 0xd8, 0x01, 0x4d], 0xfffe, 0x0100),
            PowerUpState::Mgb => ([0xff, 0xb0, 0x00, 0x13, 0x00, 0xd8, 0x01, 0x4d], 0xfffe, 0x0100),
            PowerUpState::Cgb => ([0x11, 0x80, 0x00, 0x00, 0xff, 0x56, 0x00, 0x0d], 0xfffe, 0x0100),
        }
    }
}

/// Register file of the LR35902.
///
/// A, F, B, C, D, E, H and L live in one ordered array so that every pair is
/// two neighbouring slots. SP and PC are kept apart since they never pair
/// with anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    slots: [u8; 8],
    sp: u16,
    pc: u16,
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        RegisterFile::with_state(PowerUpState::Zero)
    }

    pub fn with_state(state: PowerUpState) -> RegisterFile {
        let (slots, sp, pc) = state.values();
        debug!("Loaded {:?} power-up register state", state);

        RegisterFile { slots, sp, pc }
    }

    #[inline]
    pub fn read_register(&self, register: Register) -> u8 {
        self.slots[register.index()]
    }

    pub fn write_register(&mut self, register: Register, data: u8) {
        trace!("{} <- ${:02x}", register, data);
        self.slots[register.index()] = data;
    }

    #[inline]
    pub fn read_pair(&self, pair: RegisterPair) -> u16 {
        u16::from_be_bytes([self.read_register(pair.high()), self.read_register(pair.low())])
    }

    pub fn write_pair(&mut self, pair: RegisterPair, value: u16) {
        trace!("{} <- ${:04x}", pair, value);
        let [high, low] = value.to_be_bytes();
        self.slots[pair.high().index()] = high;
        self.slots[pair.low().index()] = low;
    }

    /// Clears every bit of F, the unused low nibble included.
    pub fn reset_flags(&mut self) {
        trace!("f <- $00 (reset)");
        self.slots[Register::F.index()] = 0;
    }

    pub fn set_flag(&mut self, flag: Flag) {
        trace!("set flag {}", flag);
        self.slots[Register::F.index()] |= flag.mask();
    }

    pub fn clear_flag(&mut self, flag: Flag) {
        trace!("clear flag {}", flag);
        self.slots[Register::F.index()] &= !flag.mask();
    }

    pub fn update_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.set_flag(flag);
        } else {
            self.clear_flag(flag);
        }
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.read_register(Register::F) & flag.mask() != 0
    }

    /// Typed view of the four meaningful bits of F.
    pub fn flags(&self) -> Flags {
        Flags::from(self.read_register(Register::F))
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    pub fn set_sp(&mut self, value: u16) {
        trace!("sp <- ${:04x}", value);
        self.sp = value;
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        trace!("pc <- ${:04x}", value);
        self.pc = value;
    }
}

impl Default for RegisterFile {
    fn default() -> RegisterFile {
        RegisterFile::new()
    }
}

impl std::fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for register in Register::ALL {
            write!(f, "{}: ${:02x}  ", register.to_string().to_uppercase(), self.read_register(register))?;
        }

        write!(f, "SP: ${:04x}  PC: ${:04x}", self.sp, self.pc)
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letters = [
            (Flags::ZERO, 'Z'),
            (Flags::SUBTRACT, 'N'),
            (Flags::HALF_CARRY, 'H'),
            (Flags::CARRY, 'C'),
        ];

        let output: String = letters
            .iter()
            .map(|(flag, letter)| if self.contains(*flag) { *letter } else { '-' })
            .collect();

        write!(f, "{}", output)
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let output = match self {
            Register::A => "a",
            Register::F => "f",
            Register::B => "b",
            Register::C => "c",
            Register::D => "d",
            Register::E => "e",
            Register::H => "h",
            Register::L => "l",
        };

        write!(f, "{}", output)
    }
}

impl std::fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let output = match self {
            RegisterPair::AF => "af",
            RegisterPair::BC => "bc",
            RegisterPair::DE => "de",
            RegisterPair::HL => "hl",
        };

        write!(f, "{}", output)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let output = match self {
            Flag::Zero => "z",
            Flag::Subtract => "n",
            Flag::HalfCarry => "h",
            Flag::Carry => "c",
        };

        write!(f, "{}", output)
    }
}

impl FromStr for Register {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register::ALL
            .into_iter()
            .find(|register| register.to_string().eq_ignore_ascii_case(s))
            .context(UnknownRegisterSnafu { name: s })
    }
}

impl FromStr for RegisterPair {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegisterPair::ALL
            .into_iter()
            .find(|pair| pair.to_string().eq_ignore_ascii_case(s))
            .context(UnknownRegisterSnafu { name: s })
    }
}

impl FromStr for Flag {
    type Err = RegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "z" | "zero" => Ok(Flag::Zero),
            "n" | "subtract" => Ok(Flag::Subtract),
            "h" | "half-carry" => Ok(Flag::HalfCarry),
            "c" | "carry" => Ok(Flag::Carry),
            _ => UnknownFlagSnafu { name: s }.fail(),
        }
    }
}
