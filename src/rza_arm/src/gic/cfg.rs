//! The public interface of the GIC driver.

/// Interrupt ID as seen by the GIC.
pub type InterruptNum = usize;

/// Interrupt priority. Lower values represent higher priorities.
pub type InterruptPriority = u8;

/// A first-level interrupt handler. Called in an IRQ context with the
/// interrupt acknowledged.
pub type InterruptHandler = fn();

/// Specifies the type of signal transition that pends an interrupt.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum InterruptLineTriggerMode {
    /// Asserts an interrupt whenever the interrupt signal level is active and
    /// deasserts whenever the level is not active.
    Level = 0,
    /// Asserts an interrupt upon detection of a rising edge of an interrupt
    /// signal.
    RisingEdge = 1,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SetInterruptLineTriggerModeError {
    /// The interrupt number is out of range or designates an SGI.
    BadParam,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InterruptLineError {
    /// The interrupt number is out of range.
    BadParam,
}

/// The options for [`Gic::new`].
///
/// [`Gic::new`]: crate::Gic::new
pub trait GicOptions {
    /// The base address of GIC distributor registers.
    ///
    /// Defaults to `0xe820_1000` (RZ/A1H).
    const GIC_DISTRIBUTOR_BASE: usize = 0xe820_1000;

    /// The base address of GIC CPU interface registers.
    ///
    /// Defaults to `0xe820_2000` (RZ/A1H).
    const GIC_CPU_BASE: usize = 0xe820_2000;
}

/// An abstract interface to an interrupt controller.
pub trait InterruptController {
    /// Set the priority of the specified interrupt line.
    fn set_interrupt_line_priority(
        &self,
        num: InterruptNum,
        priority: InterruptPriority,
    ) -> Result<(), InterruptLineError>;

    /// Set the trigger mode of the specified interrupt line.
    fn set_interrupt_line_trigger_mode(
        &self,
        num: InterruptNum,
        mode: InterruptLineTriggerMode,
    ) -> Result<(), SetInterruptLineTriggerModeError>;

    /// Enable (unmask) the specified interrupt line.
    fn enable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError>;

    /// Disable (mask) the specified interrupt line.
    fn disable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError>;

    /// Register the handler to be called when the specified interrupt line is
    /// taken. Replaces any previously registered handler.
    fn register_interrupt_handler(
        &self,
        num: InterruptNum,
        handler: InterruptHandler,
    ) -> Result<(), InterruptLineError>;

    /// Mask every interrupt except non-maskable ones and wait until the
    /// change has taken effect.
    fn mask_all_but_nmi(&self);
}

impl<T: InterruptController + ?Sized> InterruptController for &T {
    #[inline]
    fn set_interrupt_line_priority(
        &self,
        num: InterruptNum,
        priority: InterruptPriority,
    ) -> Result<(), InterruptLineError> {
        (**self).set_interrupt_line_priority(num, priority)
    }

    #[inline]
    fn set_interrupt_line_trigger_mode(
        &self,
        num: InterruptNum,
        mode: InterruptLineTriggerMode,
    ) -> Result<(), SetInterruptLineTriggerModeError> {
        (**self).set_interrupt_line_trigger_mode(num, mode)
    }

    #[inline]
    fn enable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        (**self).enable_interrupt_line(num)
    }

    #[inline]
    fn disable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        (**self).disable_interrupt_line(num)
    }

    #[inline]
    fn register_interrupt_handler(
        &self,
        num: InterruptNum,
        handler: InterruptHandler,
    ) -> Result<(), InterruptLineError> {
        (**self).register_interrupt_handler(num, handler)
    }

    #[inline]
    fn mask_all_but_nmi(&self) {
        (**self).mask_all_but_nmi()
    }
}
