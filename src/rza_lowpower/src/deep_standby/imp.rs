//! The implementation of the deep standby sequencer.
use core::marker::PhantomData;
use rza_arm::{
    cache::pl310_regs::{PowerCtrl, POWER_CTRL_OFFSET},
    CacheMaintenance, Cpu, InterruptController,
};
use tock_registers::LocalRegisterCopy;

use super::{
    cfg::{
        CancelSource, DeepStandbyOptions, DirectCancelSource, DirectRetentionRequest,
        RetentionRequest,
    },
    power_regs::{DSFR, DSFR_CAUSE_MASK, STBCR1},
};
use crate::bus::RegisterBus;

/// The deep standby sequencer.
///
/// `H` provides register access to the power-down mode registers and the
/// retention RAM, maintenance of the data cache hierarchy, the interrupt
/// controller, and the executing core.
///
/// # Wake sources
///
/// A request that enables no usable wake source puts the device into a
/// state it can only leave through a reset. Nothing here checks the wake
/// source configuration against the board.
pub struct DeepStandby<Traits, H> {
    hw: H,
    _traits: PhantomData<fn() -> Traits>,
}

impl<Traits, H> DeepStandby<Traits, H>
where
    Traits: DeepStandbyOptions,
    H: RegisterBus + CacheMaintenance + InterruptController + Cpu,
{
    pub const fn new(hw: H) -> Self {
        Self {
            hw,
            _traits: PhantomData,
        }
    }

    /// Enter deep standby. Never returns: the next instruction executed
    /// after a cancellation is the reset vector.
    pub fn enter(&self, request: &RetentionRequest) -> ! {
        self.enter_direct(&request.into())
    }

    /// [`enter`](Self::enter) with raw register values.
    pub fn enter_direct(&self, request: &DirectRetentionRequest) -> ! {
        let hw = &self.hw;
        log::debug!("entering deep standby with {request:?}");

        // Let the L2 cache controller cooperate with the standby mode
        let pcr_addr = Traits::PL310_BASE + POWER_CTRL_OFFSET;
        let mut pcr = LocalRegisterCopy::<u32, PowerCtrl::Register>::new(hw.read32(pcr_addr));
        pcr.modify(PowerCtrl::StandbyModeEn::Enable);
        self.write32_sync(pcr_addr, pcr.get());

        log::trace!("programming the retention and cancel source registers");
        self.write8_sync(Traits::RRAMKP, request.rramkp);
        self.write8_sync(Traits::DSCTR, request.dsctr);
        self.write16_sync(Traits::DSSSR, request.dsssr);
        self.write16_sync(Traits::DSESR, request.dsesr);
        if let Some(usbdsssr) = Traits::USBDSSSR {
            self.write8_sync(usbdsssr, request.usbdsssr);
        }
        self.write8_sync(Traits::DSCNT, 0);

        log::trace!("flushing the data cache");
        hw.clean_invalidate_dcache_all();
        hw.clean_invalidate_l2_all();

        // Touch each kept bank so that its final contents are latched
        for (i, &addr) in Traits::RETENTION_BANKS.iter().enumerate() {
            if request.rramkp & (1 << i) != 0 {
                let value = hw.read32(addr);
                hw.write32(addr, value);
            }
        }

        hw.clean_dcache_all();

        // Point of no return
        hw.disable_irq();

        let mut stbcr1 = LocalRegisterCopy::<u8, STBCR1::Register>::new(0);
        stbcr1.write(STBCR1::STBY::SET + STBCR1::DEEP::SET);
        self.write8_sync(Traits::STBCR1, stbcr1.get());

        self.write16_sync(Traits::DSFR, 0);
        if let Some(usbdsfr) = Traits::USBDSFR {
            self.write8_sync(usbdsfr, 0);
        }

        hw.mask_all_but_nmi();

        loop {
            hw.wait_for_interrupt();
        }
    }

    /// Get the cause of the last deep standby cancellation. Returns `None`
    /// after a reset not caused by a cancellation.
    ///
    /// The cause flags are captured once and then cleared, so the next call
    /// returns `None`. `IOKEEP` is left untouched (see
    /// [`release_io_retention`](Self::release_io_retention)).
    pub fn query_cancel_source(&self) -> Option<CancelSource> {
        let raw = self.query_cancel_source_direct()?;

        self.write16_sync(Traits::DSFR, raw.dsfr & !DSFR_CAUSE_MASK);
        if let Some(usbdsfr) = Traits::USBDSFR {
            self.write8_sync(usbdsfr, 0);
        }

        let source = CancelSource::from(raw);
        log::debug!("resumed from deep standby: {source:?}");
        Some(source)
    }

    /// Get the raw cancel source flags. Returns `None` if no flag is set.
    /// Doesn't modify any registers.
    pub fn query_cancel_source_direct(&self) -> Option<DirectCancelSource> {
        let raw = DirectCancelSource {
            dsfr: self.hw.read16(Traits::DSFR),
            usbdsfr: Traits::USBDSFR.map_or(0, |addr| self.hw.read8(addr)),
        };
        raw.has_cause().then_some(raw)
    }

    /// Check if the current boot is a deep standby cancellation without
    /// clearing anything.
    pub fn is_resumed_from_deep_standby(&self) -> bool {
        self.query_cancel_source_direct().is_some()
    }

    /// Release the pins held since the cancellation. The application should
    /// call this after re-initializing its peripherals.
    pub fn release_io_retention(&self) {
        let mut dsfr = LocalRegisterCopy::<u16, DSFR::Register>::new(self.hw.read16(Traits::DSFR));
        if !dsfr.is_set(DSFR::IOKEEP) {
            return;
        }
        // Writing `1` to a cause flag leaves it unchanged
        dsfr.modify(DSFR::IOKEEP::CLEAR);
        self.write16_sync(Traits::DSFR, dsfr.get());
    }

    /// Write a register and read it back so that the write completes before
    /// anything that follows.
    fn write8_sync(&self, addr: usize, value: u8) {
        self.hw.write8(addr, value);
        let _ = self.hw.read8(addr);
    }

    fn write16_sync(&self, addr: usize, value: u16) {
        self.hw.write16(addr, value);
        let _ = self.hw.read16(addr);
    }

    fn write32_sync(&self, addr: usize, value: u32) {
        self.hw.write32(addr, value);
        let _ = self.hw.read32(addr);
    }
}
