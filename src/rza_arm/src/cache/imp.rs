//! Cache maintenance for Cortex-A9 (L1) and PL310 (L2).
use tock_registers::interfaces::{Readable, Writeable};

use super::{cfg::CacheMaintenance, pl310_regs};

/// The options for [`Pl310Cache`].
pub trait Pl310Options {
    /// The base address of the PL310 memory-mapped registers.
    ///
    /// Defaults to `0x3fff_f000` (RZ/A1H).
    const PL310_BASE: usize = 0x3fff_f000;
}

/// The L2 cache controller.
#[derive(Clone, Copy)]
pub struct Pl310Cache {
    regs: &'static pl310_regs::Pl310,
}

impl Pl310Cache {
    /// Get a handle to the PL310 described by `Options`.
    ///
    /// # Safety
    ///
    /// `Options::PL310_BASE` must point to a PL310 register block.
    pub unsafe fn new<Options: Pl310Options>() -> Self {
        // Safety: Verified by the caller
        unsafe { Self::from_regs(&*(Options::PL310_BASE as *const pl310_regs::Pl310)) }
    }

    /// Get a handle to the given register block.
    ///
    /// # Safety
    ///
    /// `regs` must be a PL310 register block or plain memory.
    pub const unsafe fn from_regs(regs: &'static pl310_regs::Pl310) -> Self {
        Self { regs }
    }

    fn way_mask(&self) -> u32 {
        if self.regs.AuxControl.is_set(pl310_regs::AuxControl::Associativity) {
            0xffff
        } else {
            0xff
        }
    }

    fn sync(&self) {
        self.regs.CacheSync.set(0);
        while self.regs.CacheSync.get() & 1 != 0 {}
    }

    /// Issue a background by-way operation and wait for it to finish.
    fn by_way(&self, reg: &tock_registers::registers::ReadWrite<u32>) {
        let mask = self.way_mask();
        reg.set(mask);
        while reg.get() & mask != 0 {}
        self.sync();
    }

    /// Clean the whole L2 cache.
    pub fn clean_all(&self) {
        self.by_way(&self.regs.CleanWay);
    }

    /// Invalidate the whole L2 cache.
    pub fn invalidate_all(&self) {
        self.by_way(&self.regs.InvWay);
    }

    /// Clean and invalidate the whole L2 cache.
    pub fn clean_invalidate_all(&self) {
        self.by_way(&self.regs.CleanInvWay);
    }

    /// Clean the line containing the physical address `pa`.
    pub fn clean_line(&self, pa: usize) {
        self.regs.CleanPa.set(pa as u32 & !0x1f);
        self.sync();
    }

    /// Invalidate the line containing the physical address `pa`.
    pub fn invalidate_line(&self, pa: usize) {
        self.regs.InvPa.set(pa as u32 & !0x1f);
        self.sync();
    }

    /// Clean and invalidate the line containing the physical address `pa`.
    pub fn clean_invalidate_line(&self, pa: usize) {
        self.regs.CleanInvPa.set(pa as u32 & !0x1f);
        self.sync();
    }
}

/// The L1 data cache of the executing Cortex-A9 core.
#[cfg(target_os = "none")]
#[derive(Clone, Copy, Default)]
pub struct L1Cache;

#[cfg(target_os = "none")]
impl L1Cache {
    /// Apply a set/way operation to every line of every data or unified cache
    /// up to the level of coherency.
    fn for_each_set_way(op: impl Fn(u32)) {
        use crate::arm;

        // Based on the section “8.9.1. Example code for cache maintenance
        // operations” of Cortex-A Series Programmers Guide 4.0.
        let clidr = arm::CLIDR.extract();
        let level_of_coherency = clidr.read(arm::CLIDR::LoC);
        for level in 0..level_of_coherency {
            let cache_type = (clidr.get() >> (level * 3)) & 0b111;

            // Does this cache level include a data or unified cache?
            if cache_type < 2 {
                continue;
            }

            arm::CSSELR.set(level * 2);
            arm::isb();

            let ccsidr = arm::CCSIDR.extract();
            let log2_line_size = ccsidr.read(arm::CCSIDR::LineSize) + 4;
            let max_way_index = ccsidr.read(arm::CCSIDR::Associativity);
            let max_set_index = ccsidr.read(arm::CCSIDR::NumSets);

            let way_offset = max_way_index.leading_zeros();

            for way in (0..=max_way_index).rev() {
                for set in (0..=max_set_index).rev() {
                    let set_way = (level << 1)
                        | way.checked_shl(way_offset).unwrap_or(0)
                        | (set << log2_line_size);
                    op(set_way);
                }
            }
        }
        arm::dsb();
    }
}

#[cfg(target_os = "none")]
impl CacheMaintenance for L1Cache {
    fn clean_invalidate_dcache_all(&self) {
        Self::for_each_set_way(|x| crate::arm::DCCISW.set(x));
    }

    fn clean_dcache_all(&self) {
        Self::for_each_set_way(|x| crate::arm::DCCSW.set(x));
    }

    fn clean_dcache_line(&self, addr: usize) {
        crate::arm::DCCMVAC.set(addr as u32);
        crate::arm::dsb();
    }

    fn invalidate_dcache_line(&self, addr: usize) {
        crate::arm::DCIMVAC.set(addr as u32);
        crate::arm::dsb();
    }

    fn clean_invalidate_dcache_line(&self, addr: usize) {
        crate::arm::DCCIMVAC.set(addr as u32);
        crate::arm::dsb();
    }
}

/// L1 plus the PL310 outer cache.
///
/// The memory map is assumed to be identity-mapped, so virtual addresses are
/// passed to the PL310 unchanged.
#[cfg(target_os = "none")]
#[derive(Clone, Copy)]
pub struct CortexA9Cache {
    pub l1: L1Cache,
    pub l2: Pl310Cache,
}

#[cfg(target_os = "none")]
impl CacheMaintenance for CortexA9Cache {
    fn clean_invalidate_dcache_all(&self) {
        self.l1.clean_invalidate_dcache_all();
    }

    fn clean_dcache_all(&self) {
        self.l1.clean_dcache_all();
    }

    fn clean_invalidate_l2_all(&self) {
        self.l2.clean_invalidate_all();
    }

    fn clean_dcache_line(&self, addr: usize) {
        self.l1.clean_dcache_line(addr);
        self.l2.clean_line(addr);
    }

    fn invalidate_dcache_line(&self, addr: usize) {
        // Outer first so that L1 can't refill from a stale L2 line
        self.l2.invalidate_line(addr);
        self.l1.invalidate_dcache_line(addr);
    }

    fn clean_invalidate_dcache_line(&self, addr: usize) {
        self.l1.clean_dcache_line(addr);
        self.l2.clean_invalidate_line(addr);
        self.l1.invalidate_dcache_line(addr);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::boxed::Box;

    fn fake_pl310() -> &'static pl310_regs::Pl310 {
        // Safety: Every field is a plain `u32` cell, for which all-zero is
        // valid
        Box::leak(Box::new(unsafe { core::mem::zeroed::<pl310_regs::Pl310>() }))
    }

    #[test]
    fn line_ops_write_aligned_pa() {
        let regs = fake_pl310();
        let l2 = unsafe { Pl310Cache::from_regs(regs) };

        l2.clean_line(0x2000_1234);
        assert_eq!(regs.CleanPa.get(), 0x2000_1220);

        l2.invalidate_line(0x2000_003f);
        assert_eq!(regs.InvPa.get(), 0x2000_0020);

        l2.clean_invalidate_line(0x2001_0000);
        assert_eq!(regs.CleanInvPa.get(), 0x2001_0000);
    }

    #[test]
    fn way_mask_follows_associativity() {
        let regs = fake_pl310();
        let l2 = unsafe { Pl310Cache::from_regs(regs) };
        assert_eq!(l2.way_mask(), 0xff);

        regs.AuxControl
            .write(pl310_regs::AuxControl::Associativity::SixteenWay);
        assert_eq!(l2.way_mask(), 0xffff);
    }
}
