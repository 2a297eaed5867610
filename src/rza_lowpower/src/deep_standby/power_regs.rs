//! Bit layouts of the power-down mode registers. The addresses are supplied
//! by [`DeepStandbyOptions`](super::cfg::DeepStandbyOptions).

tock_registers::register_bitfields! {u8,
    /// Standby Control Register 1
    pub STBCR1 [
        /// Deep standby (with `STBY`)
        DEEP OFFSET(6) NUMBITS(1) [],
        /// Enter a standby mode on the next `WFI`
        STBY OFFSET(7) NUMBITS(1) []
    ]
}

tock_registers::register_bitfields! {u8,
    /// Deep Standby Control Register
    pub DSCTR [
        /// Boot from the on-chip data-retention RAM on cancellation
        RAMBOOT OFFSET(6) NUMBITS(1) [],
        /// Retain the external memory control pins
        EBUSKEEPE OFFSET(7) NUMBITS(1) []
    ]
}

tock_registers::register_bitfields! {u16,
    /// Deep Standby Cancel Source Flag Register. The other bits share the
    /// layout of `DSSSR`.
    pub DSFR [
        /// The pin states are held since the cancellation
        IOKEEP OFFSET(15) NUMBITS(1) []
    ]
}

/// The bits of `DSFR` that report a cancel source.
pub const DSFR_CAUSE_MASK: u16 = 0x7fff;
