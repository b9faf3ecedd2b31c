use bitflags::bitflags;

bitflags! {
    /// Bit layout of the 8080 F register.
    ///
    /// Bit 1 always reads as 1 on real hardware; bits 3 and 5 always read
    /// as 0. The register file stores whatever byte is written, so those
    /// bits are only a convention for code that builds a fresh F value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// sign
        const S = 0x80;
        /// zero
        const Z = 0x40;
        /// auxiliary carry
        const AC = 0x10;
        /// parity
        const P = 0x04;
        const ALWAYS_ONE = 0x02;
        /// carry
        const CY = 0x01;
    }
}
