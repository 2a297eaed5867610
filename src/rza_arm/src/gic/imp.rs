//! The implementation of the GIC driver.
use core::{
    ptr,
    sync::atomic::{AtomicPtr, Ordering},
};
use tock_registers::{
    fields::FieldValue,
    interfaces::{ReadWriteable, Readable, Writeable},
};

use super::{
    cfg::{
        GicOptions, InterruptController, InterruptHandler, InterruptLineError,
        InterruptLineTriggerMode, InterruptNum, InterruptPriority,
        SetInterruptLineTriggerModeError,
    },
    gic_regs,
};

/// The interrupt ID the GIC reports when nothing is pending.
const SPURIOUS_INTERRUPT_ID: InterruptNum = 1023;

/// One entry of the handler table passed to [`Gic::new`].
pub struct HandlerSlot(AtomicPtr<()>);

impl HandlerSlot {
    /// An empty slot.
    #[allow(clippy::declare_interior_mutable_const)]
    pub const INIT: Self = Self(AtomicPtr::new(ptr::null_mut()));

    fn set(&self, handler: InterruptHandler) {
        self.0.store(handler as *mut (), Ordering::Release);
    }

    fn get(&self) -> Option<InterruptHandler> {
        let p = self.0.load(Ordering::Acquire);
        if p.is_null() {
            None
        } else {
            // Safety: Only `set` stores non-null values, which are
            // `InterruptHandler`s
            Some(unsafe { core::mem::transmute::<*mut (), InterruptHandler>(p) })
        }
    }
}

/// A handle to the system-global GIC instance and its handler table.
#[derive(Clone, Copy)]
pub struct Gic {
    distributor: &'static gic_regs::GicDistributor,
    cpu_interface: &'static gic_regs::GicCpuInterface,
    handlers: &'static [HandlerSlot],
}

impl Gic {
    /// Get a handle to the GIC described by `Options`. Interrupt lines
    /// beyond `handlers.len()` are treated as nonexistent.
    ///
    /// # Safety
    ///
    /// `Options` must describe the GIC of the target, and its memory-mapped
    /// registers should be accessible.
    pub unsafe fn new<Options: GicOptions>(handlers: &'static [HandlerSlot]) -> Self {
        // Safety: Verified by the caller
        unsafe {
            Self::from_regs(
                &*(Options::GIC_DISTRIBUTOR_BASE as *const gic_regs::GicDistributor),
                &*(Options::GIC_CPU_BASE as *const gic_regs::GicCpuInterface),
                handlers,
            )
        }
    }

    /// Get a handle to the given register blocks.
    ///
    /// # Safety
    ///
    /// The register blocks must belong to a GIC or be plain memory.
    pub const unsafe fn from_regs(
        distributor: &'static gic_regs::GicDistributor,
        cpu_interface: &'static gic_regs::GicCpuInterface,
        handlers: &'static [HandlerSlot],
    ) -> Self {
        Self {
            distributor,
            cpu_interface,
            handlers,
        }
    }

    /// Get the number of supported interrupt lines.
    pub fn num_interrupt_lines(&self) -> InterruptNum {
        let raw = self
            .distributor
            .TYPER
            .read(gic_regs::GICD_TYPER::ITLinesNumber);
        ((raw as usize + 1) * 32).min(self.handlers.len())
    }

    fn check_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        if num < self.num_interrupt_lines() {
            Ok(())
        } else {
            Err(InterruptLineError::BadParam)
        }
    }

    /// Initialize the distributor and the CPU interface. Every line starts
    /// disabled with the lowest priority, and the priority mask lets every
    /// priority through.
    pub fn init(&self) {
        let distributor = self.distributor;
        let cpu_interface = self.cpu_interface;

        distributor.CTLR.modify(gic_regs::GICD_CTLR::Enable::Disable);

        let num_lines = self.num_interrupt_lines();
        for i in 0..num_lines.div_ceil(32) {
            distributor.ICENABLER[i].set(0xffff_ffff);
            distributor.ICPENDR[i].set(0xffff_ffff);
        }
        for i in 0..num_lines {
            distributor.IPRIORITYR[i].set(0xff);
        }
        // Route every SPI to CPU0
        for i in 32..num_lines {
            distributor.ITARGETSR[i].set(0x01);
        }

        cpu_interface.PMR.set(0xff);
        cpu_interface.BPR.set(0);
        cpu_interface.CTLR.modify(gic_regs::GICC_CTLR::Enable::Enable);
        distributor.CTLR.modify(gic_regs::GICD_CTLR::Enable::Enable);
    }

    /// Acknowledge the signaled interrupt, call its handler, and signal the
    /// end of interrupt. Meant to be called from the IRQ vector.
    pub fn handle_irq(&self) {
        let iar = self.cpu_interface.IAR.get();
        let num = (iar & 0x3ff) as InterruptNum;
        if num == SPURIOUS_INTERRUPT_ID {
            return;
        }

        match self.handlers.get(num).and_then(HandlerSlot::get) {
            Some(handler) => handler(),
            None => log::warn!("unhandled interrupt {num}"),
        }

        self.cpu_interface.EOIR.set(iar);
    }
}

impl InterruptController for Gic {
    fn set_interrupt_line_priority(
        &self,
        num: InterruptNum,
        priority: InterruptPriority,
    ) -> Result<(), InterruptLineError> {
        self.check_line(num)?;
        self.distributor.IPRIORITYR[num].set(priority);
        Ok(())
    }

    fn set_interrupt_line_trigger_mode(
        &self,
        num: InterruptNum,
        mode: InterruptLineTriggerMode,
    ) -> Result<(), SetInterruptLineTriggerModeError> {
        // SGI (num = `0..16`) doesn't support changing trigger mode
        if num < 16 || num >= self.num_interrupt_lines() {
            return Err(SetInterruptLineTriggerModeError::BadParam);
        }

        let int_config = mode as u32 * 2;
        self.distributor.ICFGR[num / 16].modify(FieldValue::<u32, ()>::new(
            0b10,
            (num % 16) * 2,
            int_config,
        ));

        Ok(())
    }

    fn enable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.check_line(num)?;
        self.distributor.ISENABLER[num / 32].set(1 << (num % 32));
        Ok(())
    }

    fn disable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.check_line(num)?;
        self.distributor.ICENABLER[num / 32].set(1 << (num % 32));
        Ok(())
    }

    fn register_interrupt_handler(
        &self,
        num: InterruptNum,
        handler: InterruptHandler,
    ) -> Result<(), InterruptLineError> {
        self.check_line(num)?;
        self.handlers[num].set(handler);
        Ok(())
    }

    fn mask_all_but_nmi(&self) {
        // Priority 0 is never lower than the mask, so nothing gets through
        self.cpu_interface.PMR.set(0);
        let _ = self.cpu_interface.PMR.get();
    }
}
