//! The register bus through which the drivers of this crate access their
//! peripherals.

/// Byte/halfword/word access to memory-mapped registers by absolute address.
///
/// Every access is performed exactly once, in program order, with the
/// requested width.
pub trait RegisterBus {
    fn read8(&self, addr: usize) -> u8;
    fn read16(&self, addr: usize) -> u16;
    fn read32(&self, addr: usize) -> u32;
    fn write8(&self, addr: usize, value: u8);
    fn write16(&self, addr: usize, value: u16);
    fn write32(&self, addr: usize, value: u32);
}

impl<T: RegisterBus + ?Sized> RegisterBus for &T {
    #[inline]
    fn read8(&self, addr: usize) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn read16(&self, addr: usize) -> u16 {
        (**self).read16(addr)
    }

    #[inline]
    fn read32(&self, addr: usize) -> u32 {
        (**self).read32(addr)
    }

    #[inline]
    fn write8(&self, addr: usize, value: u8) {
        (**self).write8(addr, value)
    }

    #[inline]
    fn write16(&self, addr: usize, value: u16) {
        (**self).write16(addr, value)
    }

    #[inline]
    fn write32(&self, addr: usize, value: u32) {
        (**self).write32(addr, value)
    }
}

/// Volatile accesses to the physical address space.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Construct `Mmio`.
    ///
    /// # Safety
    ///
    /// Every address subsequently passed to the methods of the returned
    /// object must be a valid, suitably aligned register or RAM location
    /// whose access has no effect beyond what the calling driver intends.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline]
    fn read8(&self, addr: usize) -> u8 {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *const u8).read_volatile() }
    }

    #[inline]
    fn read16(&self, addr: usize) -> u16 {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *const u16).read_volatile() }
    }

    #[inline]
    fn read32(&self, addr: usize) -> u32 {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *const u32).read_volatile() }
    }

    #[inline]
    fn write8(&self, addr: usize, value: u8) {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *mut u8).write_volatile(value) }
    }

    #[inline]
    fn write16(&self, addr: usize, value: u16) {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *mut u16).write_volatile(value) }
    }

    #[inline]
    fn write32(&self, addr: usize, value: u32) {
        // Safety: Verified by the creator of `self`
        unsafe { (addr as *mut u32).write_volatile(value) }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn mmio_accesses_memory() {
        let mut cell = [0u32; 2];
        let base = cell.as_mut_ptr() as usize;
        let bus = unsafe { Mmio::new() };

        bus.write32(base, 0x1234_5678);
        bus.write16(base + 4, 0xabcd);
        bus.write8(base + 6, 0xef);
        assert_eq!(bus.read32(base), 0x1234_5678);
        assert_eq!(bus.read16(base + 4), 0xabcd);
        assert_eq!(bus.read8(base + 6), 0xef);
        assert_eq!(cell[0], 0x1234_5678);
    }
}
