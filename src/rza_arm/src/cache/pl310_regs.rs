#![allow(non_snake_case)]
use tock_registers::registers::{ReadOnly, ReadWrite};

/// The register block of the Arm CoreLink Level 2 Cache Controller L2C-310
/// (PL310).
#[repr(C)]
pub struct Pl310 {
    /// Cache ID Register
    pub CacheId: ReadOnly<u32>,
    /// Cache Type Register
    pub CacheType: ReadOnly<u32>,
    _reserved1: [u32; 62],
    /// Control Register
    pub Control: ReadWrite<u32, Control::Register>,
    /// Auxiliary Control Register
    pub AuxControl: ReadWrite<u32, AuxControl::Register>,
    _reserved2: [u32; 394],
    /// Cache Sync
    pub CacheSync: ReadWrite<u32>,
    _reserved3: [u32; 15],
    /// Invalidate Line by PA
    pub InvPa: ReadWrite<u32>,
    _reserved4: [u32; 2],
    /// Invalidate by Way
    pub InvWay: ReadWrite<u32>,
    _reserved5: [u32; 12],
    /// Clean Line by PA
    pub CleanPa: ReadWrite<u32>,
    _reserved6: [u32; 2],
    /// Clean by Way
    pub CleanWay: ReadWrite<u32>,
    _reserved7: [u32; 12],
    /// Clean and Invalidate Line by PA
    pub CleanInvPa: ReadWrite<u32>,
    _reserved8: [u32; 2],
    /// Clean and Invalidate by Way
    pub CleanInvWay: ReadWrite<u32>,
    _reserved9: [u32; 480],
    /// Power Control Register
    pub PowerCtrl: ReadWrite<u32, PowerCtrl::Register>,
}

tock_registers::register_bitfields! {u32,
    pub Control [
        /// L2 cache enable
        Enable OFFSET(0) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ]
    ]
}

tock_registers::register_bitfields! {u32,
    pub AuxControl [
        /// Associativity
        Associativity OFFSET(16) NUMBITS(1) [
            EightWay = 0,
            SixteenWay = 1
        ]
    ]
}

tock_registers::register_bitfields! {u32,
    pub PowerCtrl [
        /// Standby mode enable. The controller stops its clock while the
        /// processor is in WFI standby.
        StandbyModeEn OFFSET(0) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ],
        /// Dynamic clock gating enable
        DynamicClkGatingEn OFFSET(1) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ]
    ]
}

/// The offset of [`Pl310::PowerCtrl`] from the base address.
pub const POWER_CTRL_OFFSET: usize = 0xf80;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_offsets() {
        assert_eq!(memoffset::offset_of!(Pl310, Control), 0x100);
        assert_eq!(memoffset::offset_of!(Pl310, CacheSync), 0x730);
        assert_eq!(memoffset::offset_of!(Pl310, InvPa), 0x770);
        assert_eq!(memoffset::offset_of!(Pl310, InvWay), 0x77c);
        assert_eq!(memoffset::offset_of!(Pl310, CleanPa), 0x7b0);
        assert_eq!(memoffset::offset_of!(Pl310, CleanWay), 0x7bc);
        assert_eq!(memoffset::offset_of!(Pl310, CleanInvPa), 0x7f0);
        assert_eq!(memoffset::offset_of!(Pl310, CleanInvWay), 0x7fc);
        assert_eq!(memoffset::offset_of!(Pl310, PowerCtrl), POWER_CTRL_OFFSET);
    }
}
