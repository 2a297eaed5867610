//! The public interface for the RTC alarm wake source.
use rza_arm::{InterruptHandler, InterruptLineTriggerMode, InterruptNum, InterruptPriority};

use super::encoding::AlarmRegisters;

/// A user handler invoked from the alarm interrupt.
pub type WakeCallback = fn();

/// The options for [`AlarmTimer`].
///
/// [`AlarmTimer`]: crate::AlarmTimer
///
/// [`ALARM_HANDLER`](Self::ALARM_HANDLER) needs `&mut` access to the same
/// `AlarmTimer` the application arms from thread context. The application
/// must call [`arm`] and [`disarm`] with the alarm interrupt line (or IRQs
/// altogether) masked so that the handler can't preempt them.
///
/// [`arm`]: crate::AlarmTimer::arm
/// [`disarm`]: crate::AlarmTimer::disarm
///
/// ```rust,ignore
/// struct Board;
///
/// impl rza_lowpower::RtcAlarmOptions for Board {
///     type Registers = rza_lowpower::CalendarBcd;
///     const ALARM_HANDLER: rza_arm::InterruptHandler = alarm_isr;
/// }
///
/// static ALARM: IrqMutex<Option<AlarmTimer<Board, Hw>>> = IrqMutex::new(None);
///
/// fn alarm_isr() {
///     if let Some(alarm) = ALARM.lock().as_mut() {
///         alarm.handle_interrupt();
///     }
/// }
///
/// fn schedule_wakeup(time: &WakeAlarmTime) -> Result<(), ArmAlarmError> {
///     // `lock` masks IRQs until the guard is dropped
///     ALARM.lock().as_mut().unwrap().arm(time)
/// }
/// ```
pub trait RtcAlarmOptions {
    /// The register encoding of the RTC: [`CalendarBcd`] (RZ/A1) or
    /// [`BinaryCounter`] (RZ/A2M).
    ///
    /// [`CalendarBcd`]: crate::CalendarBcd
    /// [`BinaryCounter`]: crate::BinaryCounter
    type Registers: AlarmRegisters;

    /// The base address of the RTC's memory-mapped registers.
    ///
    /// Defaults to `0xfcff_1000`.
    const RTC_BASE: usize = 0xfcff_1000;

    /// The alarm interrupt (`ARM`) number.
    ///
    /// Defaults to `296`.
    const INTERRUPT_ALM: InterruptNum = 296;

    /// The interrupt priority of the alarm interrupt line.
    ///
    /// Defaults to `0xc0`.
    const INTERRUPT_ALM_PRIORITY: InterruptPriority = 0xc0;

    /// The trigger mode of the alarm interrupt line.
    ///
    /// Defaults to [`InterruptLineTriggerMode::Level`].
    const INTERRUPT_ALM_TRIGGER: InterruptLineTriggerMode = InterruptLineTriggerMode::Level;

    /// How many times [`AlarmTimer::arm`] reads back the alarm interrupt
    /// enable bit while waiting for it to clear.
    ///
    /// [`AlarmTimer::arm`]: crate::AlarmTimer::arm
    ///
    /// Defaults to `1000`.
    const DISABLE_POLL_BUDGET: u32 = 1000;

    /// The function registered on the alarm interrupt line. It should call
    /// [`AlarmTimer::handle_interrupt`] on the application's instance.
    ///
    /// [`AlarmTimer::handle_interrupt`]: crate::AlarmTimer::handle_interrupt
    const ALARM_HANDLER: InterruptHandler;
}

/// Error type for [`AlarmTimer::arm`].
///
/// [`AlarmTimer::arm`]: crate::AlarmTimer::arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmAlarmError {
    /// The RTC counter hasn't been started. No registers were written.
    HardwareNotReady,
}

/// The lifecycle of an [`AlarmTimer`].
///
/// [`AlarmTimer`]: crate::AlarmTimer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// The interrupt line hasn't been configured yet.
    Uninitialized,
    /// The interrupt line is configured and the alarm is disabled.
    Idle,
    /// The compare fields are loaded and the alarm interrupt is enabled.
    Armed,
}
