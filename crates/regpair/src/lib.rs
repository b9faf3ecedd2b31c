pub mod enum_map;
pub mod flags;
pub mod overlay;
pub mod proxy;
pub mod reg;

pub use enum_map::{EnumIndex, EnumMap, PairMap};
pub use flags::Flags;
pub use overlay::{OverlayRegisters, PairBytes};
pub use proxy::{BytePort, ProxyRegisters};
pub use reg::{ParseRegisterError, Reg16, Reg8};

use std::fmt;

/// Common access surface for an 8080/Z80 register file.
///
/// Both storage layouts implement this so that a CPU context (or a test) can
/// drive either one without knowing how the pairs are laid out.
pub trait RegisterFile {
    fn read16(&self, pair: Reg16) -> u16;
    fn write16(&mut self, pair: Reg16, value: u16);

    fn read8(&self, reg: Reg8) -> u8;
    fn write8(&mut self, reg: Reg8, value: u8);

    /// Copy of all six pairs.
    fn snapshot(&self) -> PairMap<u16> {
        let mut snap = PairMap::default();
        for pair in Reg16::ALL {
            snap[pair] = self.read16(pair);
        }
        snap
    }

    fn restore(&mut self, snap: &PairMap<u16>) {
        for (pair, value) in snap.iter() {
            self.write16(pair, *value);
        }
    }

    fn reset(&mut self) {
        log::trace!("register file reset");
        for pair in Reg16::ALL {
            self.write16(pair, 0);
        }
    }

    /// The F register viewed through the 8080 flag layout.
    #[inline]
    fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.read8(Reg8::F))
    }

    #[inline]
    fn set_flags(&mut self, flags: Flags) {
        self.write8(Reg8::F, flags.bits());
    }
}

// Same order as a debugger register dump: AF first, then the general pairs.
const DUMP_ORDER: [Reg16; 6] = [
    Reg16::AF,
    Reg16::BC,
    Reg16::DE,
    Reg16::HL,
    Reg16::SP,
    Reg16::PC,
];

fn dump(regs: &impl RegisterFile, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, pair) in DUMP_ORDER.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}={:04X}", pair, regs.read16(*pair))?;
    }
    Ok(())
}

impl fmt::Display for ProxyRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump(self, f)
    }
}

impl fmt::Display for OverlayRegisters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump(self, f)
    }
}
