//! Core-local operations.

/// An abstract interface to the executing processor core.
pub trait Cpu {
    /// Complete all outstanding memory accesses and suspend execution until
    /// a wake-up event (e.g., an interrupt) occurs.
    fn wait_for_interrupt(&self);

    /// Mask IRQs at the core (`CPSR.I = 1`).
    fn disable_irq(&self);
}

impl<T: Cpu + ?Sized> Cpu for &T {
    #[inline]
    fn wait_for_interrupt(&self) {
        (**self).wait_for_interrupt()
    }

    #[inline]
    fn disable_irq(&self) {
        (**self).disable_irq()
    }
}

/// The Armv7-A core executing this code.
#[cfg(target_os = "none")]
#[derive(Clone, Copy, Default)]
pub struct ArmCpu;

#[cfg(target_os = "none")]
impl Cpu for ArmCpu {
    #[inline]
    fn wait_for_interrupt(&self) {
        crate::arm::dsb();
        unsafe { core::arch::asm!("wfi") };
    }

    #[inline]
    fn disable_irq(&self) {
        unsafe { core::arch::asm!("cpsid i") };
        crate::arm::isb();
    }
}
