//! Register names and the fixed map from 8-bit registers onto their pairs.
//!
//! Byte order is little-endian by convention: the low byte of a pair sits at
//! shift 0 / byte index 0, the high byte at shift 8 / byte index 1. This is a
//! property of the table below and never of the host.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::enum_map::EnumIndex;

/// 8-bit registers, in low/high order within each pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reg8 {
    C,
    B,
    E,
    D,
    L,
    H,
    F,
    A,
}

/// 16-bit register pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    AF,
    SP,
    PC,
}

impl Reg8 {
    pub const COUNT: usize = 8;
    pub const ALL: [Reg8; Self::COUNT] = [
        Reg8::C,
        Reg8::B,
        Reg8::E,
        Reg8::D,
        Reg8::L,
        Reg8::H,
        Reg8::F,
        Reg8::A,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The pair this register is half of.
    #[inline]
    pub const fn pair(self) -> Reg16 {
        match self {
            Reg8::B | Reg8::C => Reg16::BC,
            Reg8::D | Reg8::E => Reg16::DE,
            Reg8::H | Reg8::L => Reg16::HL,
            Reg8::A | Reg8::F => Reg16::AF,
        }
    }

    /// Bit offset of this register inside its pair: 8 for the high byte,
    /// 0 for the low byte.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Reg8::B | Reg8::D | Reg8::H | Reg8::A => 8,
            Reg8::C | Reg8::E | Reg8::L | Reg8::F => 0,
        }
    }

    /// Position of this register in the pair's byte storage (0 = low).
    #[inline]
    pub const fn byte_index(self) -> usize {
        (self.shift() / 8) as usize
    }

    #[inline]
    pub const fn is_high(self) -> bool {
        self.shift() == 8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Reg8::C => "C",
            Reg8::B => "B",
            Reg8::E => "E",
            Reg8::D => "D",
            Reg8::L => "L",
            Reg8::H => "H",
            Reg8::F => "F",
            Reg8::A => "A",
        }
    }
}

impl Reg16 {
    pub const COUNT: usize = 6;
    pub const ALL: [Reg16; Self::COUNT] = [
        Reg16::BC,
        Reg16::DE,
        Reg16::HL,
        Reg16::AF,
        Reg16::SP,
        Reg16::PC,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `(high, low)` halves of the pair. SP and PC are only addressable
    /// as a whole.
    pub const fn halves(self) -> Option<(Reg8, Reg8)> {
        match self {
            Reg16::BC => Some((Reg8::B, Reg8::C)),
            Reg16::DE => Some((Reg8::D, Reg8::E)),
            Reg16::HL => Some((Reg8::H, Reg8::L)),
            Reg16::AF => Some((Reg8::A, Reg8::F)),
            Reg16::SP | Reg16::PC => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Reg16::BC => "BC",
            Reg16::DE => "DE",
            Reg16::HL => "HL",
            Reg16::AF => "AF",
            Reg16::SP => "SP",
            Reg16::PC => "PC",
        }
    }
}

impl EnumIndex for Reg8 {
    const COUNT: usize = Reg8::COUNT;

    fn all() -> &'static [Self] {
        &Reg8::ALL
    }

    #[inline]
    fn index(self) -> usize {
        Reg8::index(self)
    }
}

impl EnumIndex for Reg16 {
    const COUNT: usize = Reg16::COUNT;

    fn all() -> &'static [Self] {
        &Reg16::ALL
    }

    #[inline]
    fn index(self) -> usize {
        Reg16::index(self)
    }
}

impl fmt::Display for Reg8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown register name {0:?}")]
pub struct ParseRegisterError(pub String);

impl FromStr for Reg8 {
    type Err = ParseRegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reg8::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRegisterError(s.to_string()))
    }
}

impl FromStr for Reg16 {
    type Err = ParseRegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reg16::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseRegisterError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order_arithmetic() {
        // Registers are declared low/high per pair, pairs in the same order,
        // so idx / 2 picks the pair and idx % 2 picks the half.
        for reg in Reg8::ALL {
            let idx = reg.index();
            assert_eq!(reg.pair().index(), idx / 2, "{reg}");
            assert_eq!(reg.shift(), (idx as u32 % 2) * 8, "{reg}");
        }
    }

    #[test]
    fn halves_invert_pair_and_shift() {
        let mut seen = 0;
        for pair in Reg16::ALL {
            match pair.halves() {
                Some((hi, lo)) => {
                    assert_eq!(hi.pair(), pair);
                    assert_eq!(lo.pair(), pair);
                    assert!(hi.is_high());
                    assert!(!lo.is_high());
                    assert_eq!(hi.byte_index(), 1);
                    assert_eq!(lo.byte_index(), 0);
                    seen += 2;
                }
                None => assert!(matches!(pair, Reg16::SP | Reg16::PC)),
            }
        }
        assert_eq!(seen, Reg8::COUNT);
    }

    #[test]
    fn names_parse_case_insensitively() {
        for reg in Reg8::ALL {
            assert_eq!(reg.to_string().parse::<Reg8>(), Ok(reg));
            assert_eq!(reg.to_string().to_lowercase().parse::<Reg8>(), Ok(reg));
        }
        for pair in Reg16::ALL {
            assert_eq!(pair.to_string().to_lowercase().parse::<Reg16>(), Ok(pair));
        }
        assert_eq!("hL".parse::<Reg16>(), Ok(Reg16::HL));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "IX".parse::<Reg16>(),
            Err(ParseRegisterError("IX".to_string()))
        );
        assert!("".parse::<Reg8>().is_err());
        assert!("SP".parse::<Reg8>().is_err());
        let err = "Q".parse::<Reg8>().unwrap_err();
        assert_eq!(err.to_string(), "unknown register name \"Q\"");
    }
}
