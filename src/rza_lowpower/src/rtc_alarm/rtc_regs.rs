//! Register offsets (relative to `RtcAlarmOptions::RTC_BASE`) and bit
//! layouts of the two RTC variants.

/// The calendar-count RTC of RZ/A1. Alarm fields are BCD with the compare
/// enable (`ENB`) in bit 7.
pub mod calendar {
    /// Second Alarm Register
    pub const RSECAR: usize = 0x10;
    /// Minute Alarm Register
    pub const RMINAR: usize = 0x12;
    /// Hour Alarm Register
    pub const RHRAR: usize = 0x14;
    /// Day of Week Alarm Register
    pub const RWKAR: usize = 0x16;
    /// Date Alarm Register
    pub const RDAYAR: usize = 0x18;
    /// Month Alarm Register
    pub const RMONAR: usize = 0x1a;
    /// RTC Control Register 1
    pub const RCR1: usize = 0x1c;
    /// RTC Control Register 2
    pub const RCR2: usize = 0x1e;
    /// Year Alarm Register (16 bits, four BCD digits)
    pub const RYRAR: usize = 0x20;
    /// RTC Control Register 3 (year alarm enable)
    pub const RCR3: usize = 0x24;

    tock_registers::register_bitfields! {u8,
        pub RCR1 [
            /// Alarm flag. Set on a compare match; cleared by writing `0`.
            AF OFFSET(0) NUMBITS(1) [],
            /// Alarm interrupt enable
            AIE OFFSET(3) NUMBITS(1) [],
            /// Carry interrupt enable
            CIE OFFSET(4) NUMBITS(1) [],
            /// Carry flag
            CF OFFSET(7) NUMBITS(1) []
        ]
    }

    tock_registers::register_bitfields! {u8,
        pub RCR2 [
            /// The counter is running
            START OFFSET(0) NUMBITS(1) [],
            RESET OFFSET(1) NUMBITS(1) [],
            ADJ OFFSET(2) NUMBITS(1) [],
            RTCEN OFFSET(3) NUMBITS(1) []
        ]
    }

    tock_registers::register_bitfields! {u8,
        pub RCR3 [
            /// Compare `RYRAR` with the year counter
            ENB OFFSET(7) NUMBITS(1) []
        ]
    }

    tock_registers::register_bitfields! {u8,
        pub ALARM [
            /// BCD value
            VALUE OFFSET(0) NUMBITS(7) [],
            /// Compare this field with its counter
            ENB OFFSET(7) NUMBITS(1) []
        ]
    }
}

/// The binary-count RTC of RZ/A2M. The alarm compares the 32-bit seconds
/// counter byte by byte, each byte with its own bit enable mask.
pub mod binary {
    /// Binary Counter 0–3 Alarm Registers
    pub const BCNTAR: [usize; 4] = [0x10, 0x12, 0x14, 0x16];
    /// Binary Counter 0–3 Alarm Enable Registers
    pub const BCNTAER: [usize; 4] = [0x18, 0x1a, 0x1c, 0x1e];
    /// RTC Status Register
    pub const RSR: usize = 0x20;
    /// RTC Control Register 1
    pub const RCR1: usize = 0x22;
    /// RTC Control Register 2
    pub const RCR2: usize = 0x24;

    tock_registers::register_bitfields! {u8,
        pub RSR [
            /// Alarm flag. Set on a compare match; cleared by writing `0`.
            AF OFFSET(0) NUMBITS(1) [],
            /// Carry flag
            CF OFFSET(1) NUMBITS(1) [],
            /// Periodic flag
            PF OFFSET(2) NUMBITS(1) []
        ]
    }

    tock_registers::register_bitfields! {u8,
        pub RCR1 [
            /// Alarm interrupt enable
            AIE OFFSET(0) NUMBITS(1) [],
            /// Carry interrupt enable
            CIE OFFSET(1) NUMBITS(1) [],
            /// Periodic interrupt enable
            PIE OFFSET(2) NUMBITS(1) []
        ]
    }

    tock_registers::register_bitfields! {u8,
        pub RCR2 [
            /// The counter is running
            START OFFSET(0) NUMBITS(1) [],
            RESET OFFSET(1) NUMBITS(1) [],
            /// Count mode
            CNTMD OFFSET(7) NUMBITS(1) [
                Calendar = 0,
                Binary = 1
            ]
        ]
    }
}
