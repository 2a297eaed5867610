//! Low-power support for Renesas RZ/A: the RTC alarm as a wake source
//! ([`AlarmTimer`]) and the deep standby sequencer ([`DeepStandby`]).
//!
//! Both drivers access the hardware only through the traits [`RegisterBus`],
//! [`rza_arm::CacheMaintenance`], [`rza_arm::InterruptController`], and
//! [`rza_arm::Cpu`]. [`Platform`] combines implementations of them into one
//! object.
//!
//! <div class="warning">
//!
//! **A misconfigured wake source leaves the device in deep standby until
//! it's reset.** [`DeepStandby::enter`] programs the cancel sources exactly as
//! requested. Make sure that at least one of them (e.g., the RTC alarm armed
//! with [`AlarmTimer::arm`], or a pin that is actually wired) can fire.
//!
//! </div>
//!
//! # Typical usage
//!
//! ```rust,ignore
//! if let Some(source) = STANDBY.query_cancel_source() {
//!     // Resumed; re-initialize the peripherals, then
//!     STANDBY.release_io_retention();
//! }
//!
//! alarm.arm(&WakeAlarmTime::from_unix_seconds(now + 60).unwrap())?;
//! STANDBY.enter(
//!     &RetentionRequest::new()
//!         .keep(RetentionBanks::BANK0)
//!         .wake_on_rtc(),
//! );
//! ```
#![deny(unsafe_op_in_unsafe_fn)]
#![no_std]

mod bus;
mod platform;

/// The RTC alarm wake source.
#[doc(hidden)]
pub mod rtc_alarm {
    pub mod cfg;
    pub mod encoding;
    pub mod imp;
    pub mod rtc_regs;
    pub mod time;
    #[cfg(test)]
    mod tests;
}

/// The deep standby sequencer.
#[doc(hidden)]
pub mod deep_standby {
    pub mod cfg;
    pub mod imp;
    pub mod power_regs;
    #[cfg(test)]
    mod tests;
}

#[cfg(test)]
mod mock;

pub use self::bus::*;
pub use self::deep_standby::{cfg::*, imp::DeepStandby};
pub use self::platform::*;
pub use self::rtc_alarm::{
    cfg::*,
    encoding::{
        from_bcd16, from_bcd8, to_bcd16, to_bcd8, AlarmRegisters, BinaryCounter, CalendarBcd,
    },
    imp::AlarmTimer,
    time::{TryFromDateTimeError, WakeAlarmTime},
};
