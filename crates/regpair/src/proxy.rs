//! Register file stored as one `u16` per pair, with 8-bit registers reached
//! through a short-lived [`BytePort`] that masks the right half in and out.

use std::ops::{Index, IndexMut};

use crate::enum_map::PairMap;
use crate::reg::{Reg16, Reg8};
use crate::RegisterFile;

/// Handle to one byte of a register pair.
///
/// Holds the pair's storage by reference, so a `set` is immediately visible
/// through the owning register file.
pub struct BytePort<'a> {
    target: &'a mut u16,
    shift: u32,
}

impl<'a> BytePort<'a> {
    #[inline]
    pub fn new(target: &'a mut u16, shift: u32) -> Self {
        debug_assert!(shift == 0 || shift == 8, "bad byte shift {}", shift);
        Self { target, shift }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        (*self.target >> self.shift) as u8
    }

    #[inline]
    pub fn set(&mut self, value: u8) -> &mut Self {
        *self.target &= !(0xFF << self.shift);
        *self.target |= (value as u16) << self.shift;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProxyRegisters {
    pairs: PairMap<u16>,
}

impl ProxyRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: PairMap<u16>) -> Self {
        Self { pairs }
    }

    /// Port onto the byte of `reg` inside its pair.
    #[inline]
    pub fn byte(&mut self, reg: Reg8) -> BytePort<'_> {
        BytePort::new(&mut self.pairs[reg.pair()], reg.shift())
    }
}

impl Index<Reg16> for ProxyRegisters {
    type Output = u16;

    #[inline]
    fn index(&self, pair: Reg16) -> &u16 {
        &self.pairs[pair]
    }
}

impl IndexMut<Reg16> for ProxyRegisters {
    #[inline]
    fn index_mut(&mut self, pair: Reg16) -> &mut u16 {
        &mut self.pairs[pair]
    }
}

impl RegisterFile for ProxyRegisters {
    #[inline]
    fn read16(&self, pair: Reg16) -> u16 {
        self.pairs[pair]
    }

    #[inline]
    fn write16(&mut self, pair: Reg16, value: u16) {
        self.pairs[pair] = value;
    }

    #[inline]
    fn read8(&self, reg: Reg8) -> u8 {
        ((self.pairs[reg.pair()] >> reg.shift()) & 0xFF) as u8
    }

    #[inline]
    fn write8(&mut self, reg: Reg8, value: u8) {
        self.byte(reg).set(value);
    }

    fn snapshot(&self) -> PairMap<u16> {
        self.pairs
    }

    fn restore(&mut self, snap: &PairMap<u16>) {
        self.pairs = *snap;
    }
}
