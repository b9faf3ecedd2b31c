//! Register file stored as byte pairs that double as 16-bit values.
//!
//! Each pair keeps its two bytes side by side; the 16-bit view is rebuilt
//! from them in little-endian order, so an 8-bit access touches exactly one
//! array slot and needs no masking.

use crate::reg::{Reg16, Reg8};
use crate::RegisterFile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PairBytes {
    /// `parts[0]` is the low byte, `parts[1]` the high byte.
    pub parts: [u8; 2],
}

impl PairBytes {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self {
            parts: value.to_le_bytes(),
        }
    }

    #[inline]
    pub const fn combined(&self) -> u16 {
        u16::from_le_bytes(self.parts)
    }

    #[inline]
    pub fn set_combined(&mut self, value: u16) {
        self.parts = value.to_le_bytes();
    }

    #[inline]
    pub const fn low(&self) -> u8 {
        self.parts[0]
    }

    #[inline]
    pub const fn high(&self) -> u8 {
        self.parts[1]
    }

    #[inline]
    pub fn set_low(&mut self, value: u8) {
        self.parts[0] = value;
    }

    #[inline]
    pub fn set_high(&mut self, value: u8) {
        self.parts[1] = value;
    }

    #[inline]
    pub fn parts(&self) -> &[u8; 2] {
        &self.parts
    }

    #[inline]
    pub fn parts_mut(&mut self) -> &mut [u8; 2] {
        &mut self.parts
    }
}

impl From<u16> for PairBytes {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<PairBytes> for u16 {
    fn from(pair: PairBytes) -> Self {
        pair.combined()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayRegisters {
    pub bc: PairBytes,
    pub de: PairBytes,
    pub hl: PairBytes,
    pub af: PairBytes,
    pub sp: PairBytes,
    pub pc: PairBytes,
}

impl OverlayRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&self, pair: Reg16) -> &PairBytes {
        match pair {
            Reg16::BC => &self.bc,
            Reg16::DE => &self.de,
            Reg16::HL => &self.hl,
            Reg16::AF => &self.af,
            Reg16::SP => &self.sp,
            Reg16::PC => &self.pc,
        }
    }

    pub fn pair_mut(&mut self, pair: Reg16) -> &mut PairBytes {
        match pair {
            Reg16::BC => &mut self.bc,
            Reg16::DE => &mut self.de,
            Reg16::HL => &mut self.hl,
            Reg16::AF => &mut self.af,
            Reg16::SP => &mut self.sp,
            Reg16::PC => &mut self.pc,
        }
    }
}

impl RegisterFile for OverlayRegisters {
    #[inline]
    fn read16(&self, pair: Reg16) -> u16 {
        self.pair(pair).combined()
    }

    #[inline]
    fn write16(&mut self, pair: Reg16, value: u16) {
        self.pair_mut(pair).set_combined(value);
    }

    #[inline]
    fn read8(&self, reg: Reg8) -> u8 {
        self.pair(reg.pair()).parts[reg.byte_index()]
    }

    #[inline]
    fn write8(&mut self, reg: Reg8, value: u8) {
        self.pair_mut(reg.pair()).parts[reg.byte_index()] = value;
    }
}
