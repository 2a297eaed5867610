//! Alarm register encodings. The variant is selected at build time through
//! [`RtcAlarmOptions::Registers`].
//!
//! [`RtcAlarmOptions::Registers`]: super::cfg::RtcAlarmOptions::Registers
use core::ops::RangeInclusive;
use tock_registers::LocalRegisterCopy;

use super::{
    rtc_regs::{binary, calendar},
    time::WakeAlarmTime,
};
use crate::bus::RegisterBus;

/// Encode `0..=99` as two BCD digits. A result outside the two-digit range
/// (e.g., `105` → `0xa5`) collapses to `0`.
pub const fn to_bcd8(value: u8) -> u8 {
    let v = value as u16;
    let encoded = ((v / 10) << 4) | (v % 10);
    if encoded > 0x99 {
        0
    } else {
        encoded as u8
    }
}

/// Encode `0..=9999` as four BCD digits. A result outside the four-digit
/// range collapses to `0`.
pub const fn to_bcd16(value: u16) -> u16 {
    let v = value as u32;
    let encoded = ((v / 1000) << 12) | ((v / 100 % 10) << 8) | ((v / 10 % 10) << 4) | (v % 10);
    if encoded > 0x9999 {
        0
    } else {
        encoded as u16
    }
}

/// Decode two BCD digits.
pub const fn from_bcd8(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0xf)
}

/// Decode four BCD digits.
pub const fn from_bcd16(bcd: u16) -> u16 {
    (bcd >> 12) * 1000 + (bcd >> 8 & 0xf) * 100 + (bcd >> 4 & 0xf) * 10 + (bcd & 0xf)
}

/// The register protocol of one RTC variant.
///
/// `base` is the base address of the RTC register block. Each method
/// performs the minimal sequence of accesses for its effect; ordering between
/// methods is the caller's responsibility.
pub trait AlarmRegisters {
    /// Read the "counter running" status bit. Must not write anything.
    fn is_running<B: RegisterBus>(bus: &B, base: usize) -> bool;

    /// Set or clear the global alarm interrupt enable bit.
    fn set_interrupt_enable<B: RegisterBus>(bus: &B, base: usize, enable: bool);

    /// Read back the global alarm interrupt enable bit.
    fn is_interrupt_enabled<B: RegisterBus>(bus: &B, base: usize) -> bool;

    /// Clear the alarm-pending flag.
    fn clear_flag<B: RegisterBus>(bus: &B, base: usize);

    /// Clear every compare-enable bit.
    fn disable_compare<B: RegisterBus>(bus: &B, base: usize);

    /// Load every compare field with its compare-enable bit set. Expects
    /// [`Self::disable_compare`] to have been called.
    fn load_compare<B: RegisterBus>(bus: &B, base: usize, time: &WakeAlarmTime);
}

/// RZ/A1: calendar alarm fields in BCD.
#[derive(Debug, Clone, Copy)]
pub enum CalendarBcd {}

impl CalendarBcd {
    fn rcr1<B: RegisterBus>(
        bus: &B,
        base: usize,
    ) -> LocalRegisterCopy<u8, calendar::RCR1::Register> {
        LocalRegisterCopy::new(bus.read8(base + calendar::RCR1))
    }

    /// Encode an alarm field with its compare-enable bit set. A value outside
    /// `range` collapses to `0`.
    fn alarm_field(value: u8, range: RangeInclusive<u8>) -> u8 {
        let value = if range.contains(&value) { value } else { 0 };
        let mut r = LocalRegisterCopy::<u8, calendar::ALARM::Register>::new(0);
        r.write(calendar::ALARM::VALUE.val(to_bcd8(value)) + calendar::ALARM::ENB::SET);
        r.get()
    }
}

impl AlarmRegisters for CalendarBcd {
    fn is_running<B: RegisterBus>(bus: &B, base: usize) -> bool {
        LocalRegisterCopy::<u8, calendar::RCR2::Register>::new(bus.read8(base + calendar::RCR2))
            .is_set(calendar::RCR2::START)
    }

    fn set_interrupt_enable<B: RegisterBus>(bus: &B, base: usize, enable: bool) {
        let mut rcr1 = Self::rcr1(bus, base);
        // Writing `1` to `AF` has no effect, so a read-modify-write can't set
        // it by accident
        rcr1.modify(if enable {
            calendar::RCR1::AIE::SET
        } else {
            calendar::RCR1::AIE::CLEAR
        });
        bus.write8(base + calendar::RCR1, rcr1.get());
    }

    fn is_interrupt_enabled<B: RegisterBus>(bus: &B, base: usize) -> bool {
        Self::rcr1(bus, base).is_set(calendar::RCR1::AIE)
    }

    fn clear_flag<B: RegisterBus>(bus: &B, base: usize) {
        let mut rcr1 = Self::rcr1(bus, base);
        rcr1.modify(calendar::RCR1::AF::CLEAR);
        bus.write8(base + calendar::RCR1, rcr1.get());
    }

    fn disable_compare<B: RegisterBus>(bus: &B, base: usize) {
        for reg in [
            calendar::RSECAR,
            calendar::RMINAR,
            calendar::RHRAR,
            calendar::RWKAR,
            calendar::RDAYAR,
            calendar::RMONAR,
        ] {
            bus.write8(base + reg, 0);
        }
        bus.write8(base + calendar::RCR3, 0);
    }

    fn load_compare<B: RegisterBus>(bus: &B, base: usize, time: &WakeAlarmTime) {
        bus.write8(base + calendar::RSECAR, Self::alarm_field(time.second, 0..=59));
        bus.write8(base + calendar::RMINAR, Self::alarm_field(time.minute, 0..=59));
        bus.write8(base + calendar::RHRAR, Self::alarm_field(time.hour, 0..=23));
        bus.write8(base + calendar::RDAYAR, Self::alarm_field(time.day, 1..=31));
        bus.write8(base + calendar::RMONAR, Self::alarm_field(time.month, 1..=12));
        bus.write16(base + calendar::RYRAR, to_bcd16(time.year));

        let mut rcr3 = LocalRegisterCopy::<u8, calendar::RCR3::Register>::new(0);
        rcr3.write(calendar::RCR3::ENB::SET);
        bus.write8(base + calendar::RCR3, rcr3.get());
    }
}

/// RZ/A2M: the 32-bit seconds counter compared byte by byte.
#[derive(Debug, Clone, Copy)]
pub enum BinaryCounter {}

impl BinaryCounter {
    /// The counter value corresponding to `time`. Times the 32-bit counter
    /// can't represent collapse to `0`.
    pub fn counter_value(time: &WakeAlarmTime) -> u32 {
        time.to_unix_seconds()
            .and_then(|secs| u32::try_from(secs).ok())
            .unwrap_or(0)
    }
}

impl AlarmRegisters for BinaryCounter {
    fn is_running<B: RegisterBus>(bus: &B, base: usize) -> bool {
        LocalRegisterCopy::<u8, binary::RCR2::Register>::new(bus.read8(base + binary::RCR2))
            .is_set(binary::RCR2::START)
    }

    fn set_interrupt_enable<B: RegisterBus>(bus: &B, base: usize, enable: bool) {
        let mut rcr1 =
            LocalRegisterCopy::<u8, binary::RCR1::Register>::new(bus.read8(base + binary::RCR1));
        rcr1.modify(if enable {
            binary::RCR1::AIE::SET
        } else {
            binary::RCR1::AIE::CLEAR
        });
        bus.write8(base + binary::RCR1, rcr1.get());
    }

    fn is_interrupt_enabled<B: RegisterBus>(bus: &B, base: usize) -> bool {
        LocalRegisterCopy::<u8, binary::RCR1::Register>::new(bus.read8(base + binary::RCR1))
            .is_set(binary::RCR1::AIE)
    }

    fn clear_flag<B: RegisterBus>(bus: &B, base: usize) {
        let mut rsr =
            LocalRegisterCopy::<u8, binary::RSR::Register>::new(bus.read8(base + binary::RSR));
        rsr.modify(binary::RSR::AF::CLEAR);
        bus.write8(base + binary::RSR, rsr.get());
    }

    fn disable_compare<B: RegisterBus>(bus: &B, base: usize) {
        for reg in binary::BCNTAER {
            bus.write8(base + reg, 0);
        }
    }

    fn load_compare<B: RegisterBus>(bus: &B, base: usize, time: &WakeAlarmTime) {
        let bytes = Self::counter_value(time).to_le_bytes();
        for ((ar, aer), byte) in binary::BCNTAR.into_iter().zip(binary::BCNTAER).zip(bytes) {
            bus.write8(base + ar, byte);
            bus.write8(base + aer, 0xff);
        }
    }
}
