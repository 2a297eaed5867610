//! The implementation of the RTC alarm wake source.
use core::marker::PhantomData;
use rza_arm::InterruptController;

use super::{
    cfg::{AlarmState, ArmAlarmError, RtcAlarmOptions, WakeCallback},
    encoding::AlarmRegisters,
    time::WakeAlarmTime,
};
use crate::bus::RegisterBus;

/// One-shot RTC alarm with a single callback slot.
///
/// An RTC has exactly one alarm comparator, so there should be exactly one
/// `AlarmTimer` per RTC. [`attach`](Self::attach) replaces the callback;
/// there's no way to register two.
///
/// `H` provides register access to the RTC and the interrupt controller the
/// alarm interrupt is routed through.
pub struct AlarmTimer<Traits, H> {
    hw: H,
    state: AlarmState,
    handler: Option<WakeCallback>,
    _traits: PhantomData<fn() -> Traits>,
}

impl<Traits: RtcAlarmOptions, H: RegisterBus + InterruptController> AlarmTimer<Traits, H> {
    pub const fn new(hw: H) -> Self {
        Self {
            hw,
            state: AlarmState::Uninitialized,
            handler: None,
            _traits: PhantomData,
        }
    }

    /// Replace the callback invoked when the alarm fires. Doesn't touch the
    /// hardware.
    #[inline]
    pub fn attach(&mut self, handler: WakeCallback) {
        self.handler = Some(handler);
    }

    #[inline]
    pub fn state(&self) -> AlarmState {
        self.state
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state == AlarmState::Armed
    }

    /// Program the alarm to fire once at `time`.
    ///
    /// Fails with [`ArmAlarmError::HardwareNotReady`] without writing any
    /// registers if the RTC isn't running.
    pub fn arm(&mut self, time: &WakeAlarmTime) -> Result<(), ArmAlarmError> {
        let bus = &self.hw;
        let base = Traits::RTC_BASE;

        if !Traits::Registers::is_running(bus, base) {
            return Err(ArmAlarmError::HardwareNotReady);
        }

        Traits::Registers::set_interrupt_enable(bus, base, false);
        let acknowledged = (0..Traits::DISABLE_POLL_BUDGET)
            .any(|_| !Traits::Registers::is_interrupt_enabled(bus, base));
        if !acknowledged {
            log::warn!(
                "alarm interrupt enable still set after {} polls; continuing",
                Traits::DISABLE_POLL_BUDGET
            );
        }

        Traits::Registers::clear_flag(bus, base);

        if self.state == AlarmState::Uninitialized {
            self.wire_interrupt();
            self.state = AlarmState::Idle;
            log::debug!("alarm interrupt {} configured", Traits::INTERRUPT_ALM);
        }

        let bus = &self.hw;
        Traits::Registers::disable_compare(bus, base);
        Traits::Registers::load_compare(bus, base, time);

        // The interrupt is enabled only after every compare field is valid
        Traits::Registers::clear_flag(bus, base);
        Traits::Registers::set_interrupt_enable(bus, base, true);

        self.state = AlarmState::Armed;
        log::debug!("alarm armed for {time:?}");
        Ok(())
    }

    /// Cancel a pending alarm. The attached callback stays attached.
    pub fn disarm(&mut self) {
        if self.state == AlarmState::Uninitialized {
            return;
        }
        self.quiesce();
        self.state = AlarmState::Idle;
    }

    /// The top half of the alarm interrupt. Disables the alarm and then
    /// calls the attached callback.
    ///
    /// The alarm is one-shot: the callback may re-arm it by its own means,
    /// but must not call back into this `AlarmTimer`.
    pub fn handle_interrupt(&mut self) {
        self.quiesce();

        let was_armed = self.state == AlarmState::Armed;
        if self.state != AlarmState::Uninitialized {
            self.state = AlarmState::Idle;
        }

        if !was_armed {
            log::trace!("stray alarm interrupt");
            return;
        }

        if let Some(handler) = self.handler {
            handler();
        }
    }

    /// Disable the alarm interrupt, clear the flag, and clear every
    /// compare-enable bit, in this order.
    fn quiesce(&self) {
        let bus = &self.hw;
        let base = Traits::RTC_BASE;
        Traits::Registers::set_interrupt_enable(bus, base, false);
        Traits::Registers::clear_flag(bus, base);
        Traits::Registers::disable_compare(bus, base);
    }

    fn wire_interrupt(&self) {
        let ic = &self.hw;
        let num = Traits::INTERRUPT_ALM;

        if let Err(e) = ic.set_interrupt_line_priority(num, Traits::INTERRUPT_ALM_PRIORITY) {
            log::error!("failed to set the priority of interrupt {num}: {e:?}");
        }
        if let Err(e) = ic.set_interrupt_line_trigger_mode(num, Traits::INTERRUPT_ALM_TRIGGER) {
            log::error!("failed to set the trigger mode of interrupt {num}: {e:?}");
        }
        if let Err(e) = ic.register_interrupt_handler(num, Traits::ALARM_HANDLER) {
            log::error!("failed to register the handler of interrupt {num}: {e:?}");
        }
        if let Err(e) = ic.enable_interrupt_line(num) {
            log::error!("failed to enable interrupt {num}: {e:?}");
        }
    }
}
