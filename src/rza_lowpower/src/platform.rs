//! Composes independent hardware interface implementations into the single
//! object the drivers of this crate are parameterized with.
use rza_arm::{
    CacheMaintenance, Cpu, InterruptController, InterruptHandler, InterruptLineError,
    InterruptLineTriggerMode, InterruptNum, InterruptPriority, SetInterruptLineTriggerModeError,
};

use crate::bus::RegisterBus;

/// A set of hardware interfaces.
///
/// ```rust,ignore
/// static GIC_HANDLERS: [rza_arm::HandlerSlot; 512] = [rza_arm::HandlerSlot::INIT; 512];
///
/// let platform = rza_lowpower::Platform {
///     bus: unsafe { rza_lowpower::Mmio::new() },
///     cache: rza_arm::CortexA9Cache {
///         l1: rza_arm::L1Cache,
///         l2: unsafe { rza_arm::Pl310Cache::new::<Board>() },
///     },
///     interrupts: unsafe { rza_arm::Gic::new::<Board>(&GIC_HANDLERS) },
///     cpu: rza_arm::ArmCpu,
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Platform<Bus, Cache, Interrupts, Core> {
    pub bus: Bus,
    pub cache: Cache,
    pub interrupts: Interrupts,
    pub cpu: Core,
}

impl<Bus: RegisterBus, Cache, Interrupts, Core> RegisterBus
    for Platform<Bus, Cache, Interrupts, Core>
{
    #[inline]
    fn read8(&self, addr: usize) -> u8 {
        self.bus.read8(addr)
    }

    #[inline]
    fn read16(&self, addr: usize) -> u16 {
        self.bus.read16(addr)
    }

    #[inline]
    fn read32(&self, addr: usize) -> u32 {
        self.bus.read32(addr)
    }

    #[inline]
    fn write8(&self, addr: usize, value: u8) {
        self.bus.write8(addr, value)
    }

    #[inline]
    fn write16(&self, addr: usize, value: u16) {
        self.bus.write16(addr, value)
    }

    #[inline]
    fn write32(&self, addr: usize, value: u32) {
        self.bus.write32(addr, value)
    }
}

impl<Bus, Cache: CacheMaintenance, Interrupts, Core> CacheMaintenance
    for Platform<Bus, Cache, Interrupts, Core>
{
    #[inline]
    fn clean_invalidate_dcache_all(&self) {
        self.cache.clean_invalidate_dcache_all()
    }

    #[inline]
    fn clean_dcache_all(&self) {
        self.cache.clean_dcache_all()
    }

    #[inline]
    fn clean_invalidate_l2_all(&self) {
        self.cache.clean_invalidate_l2_all()
    }

    #[inline]
    fn clean_dcache_line(&self, addr: usize) {
        self.cache.clean_dcache_line(addr)
    }

    #[inline]
    fn invalidate_dcache_line(&self, addr: usize) {
        self.cache.invalidate_dcache_line(addr)
    }

    #[inline]
    fn clean_invalidate_dcache_line(&self, addr: usize) {
        self.cache.clean_invalidate_dcache_line(addr)
    }
}

impl<Bus, Cache, Interrupts: InterruptController, Core> InterruptController
    for Platform<Bus, Cache, Interrupts, Core>
{
    #[inline]
    fn set_interrupt_line_priority(
        &self,
        num: InterruptNum,
        priority: InterruptPriority,
    ) -> Result<(), InterruptLineError> {
        self.interrupts.set_interrupt_line_priority(num, priority)
    }

    #[inline]
    fn set_interrupt_line_trigger_mode(
        &self,
        num: InterruptNum,
        mode: InterruptLineTriggerMode,
    ) -> Result<(), SetInterruptLineTriggerModeError> {
        self.interrupts.set_interrupt_line_trigger_mode(num, mode)
    }

    #[inline]
    fn enable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.interrupts.enable_interrupt_line(num)
    }

    #[inline]
    fn disable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.interrupts.disable_interrupt_line(num)
    }

    #[inline]
    fn register_interrupt_handler(
        &self,
        num: InterruptNum,
        handler: InterruptHandler,
    ) -> Result<(), InterruptLineError> {
        self.interrupts.register_interrupt_handler(num, handler)
    }

    #[inline]
    fn mask_all_but_nmi(&self) {
        self.interrupts.mask_all_but_nmi()
    }
}

impl<Bus, Cache, Interrupts, Core: Cpu> Cpu for Platform<Bus, Cache, Interrupts, Core> {
    #[inline]
    fn wait_for_interrupt(&self) {
        self.cpu.wait_for_interrupt()
    }

    #[inline]
    fn disable_irq(&self) {
        self.cpu.disable_irq()
    }
}
