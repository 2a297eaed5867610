//! The public interface for the deep standby sequencer.
use tock_registers::LocalRegisterCopy;

use super::power_regs::{DSCTR, DSFR_CAUSE_MASK};

/// The options for [`DeepStandby`].
///
/// [`DeepStandby`]: crate::DeepStandby
///
/// The defaults describe RZ/A1H. Variants with USB wake support override
/// [`USBDSSSR`](Self::USBDSSSR) and [`USBDSFR`](Self::USBDSFR).
pub trait DeepStandbyOptions {
    /// The base address of the PL310 L2 cache controller.
    ///
    /// Defaults to `0x3fff_f000`.
    const PL310_BASE: usize = 0x3fff_f000;

    /// Standby Control Register 1 (8 bits)
    const STBCR1: usize = 0xfcfe_0020;
    /// On-Chip Data-Retention RAM Area Setting Register (8 bits)
    const RRAMKP: usize = 0xfcff_1800;
    /// Deep Standby Control Register (8 bits)
    const DSCTR: usize = 0xfcff_1802;
    /// Deep Standby Cancel Source Select Register (16 bits)
    const DSSSR: usize = 0xfcff_1804;
    /// Deep Standby Cancel Edge Select Register (16 bits)
    const DSESR: usize = 0xfcff_1806;
    /// Deep Standby Cancel Source Flag Register (16 bits)
    const DSFR: usize = 0xfcff_1808;
    /// Deep Standby Counter Register (8 bits)
    const DSCNT: usize = 0xfcff_1812;

    /// USB Deep Standby Cancel Source Select Register (8 bits), if present.
    ///
    /// Defaults to `None`.
    const USBDSSSR: Option<usize> = None;

    /// USB Deep Standby Cancel Source Flag Register (8 bits), if present.
    ///
    /// Defaults to `None`.
    const USBDSFR: Option<usize> = None;

    /// One cache-line-aligned address inside each retention RAM bank,
    /// indexed by the bit position in [`RetentionBanks`].
    const RETENTION_BANKS: [usize; 4] = [0x2000_0000, 0x2000_4000, 0x2000_8000, 0x2001_0000];
}

bitflags::bitflags! {
    /// Retention RAM banks whose contents are preserved in deep standby
    /// (`RRAMKP` layout).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RetentionBanks: u8 {
        const BANK0 = 1 << 0;
        const BANK1 = 1 << 1;
        const BANK2 = 1 << 2;
        const BANK3 = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Deep standby cancel sources (`DSSSR`, `DSESR`, and `DSFR` layout).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WakeSources: u16 {
        const P3_1 = 1 << 0;
        const P3_3 = 1 << 1;
        const P3_9 = 1 << 2;
        const P3_11 = 1 << 3;
        const P2_12 = 1 << 4;
        const P8_7 = 1 << 5;
        /// The RTC alarm. Has no edge selection.
        const RTCAR = 1 << 6;
        const P6_2 = 1 << 7;
        const P5_9 = 1 << 8;
        const P6_4 = 1 << 9;
        const P2_15 = 1 << 10;
        const NMI = 1 << 12;
    }
}

bitflags::bitflags! {
    /// USB deep standby cancel sources (`USBDSSSR` and `USBDSFR` layout).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UsbWakeSources: u8 {
        /// USB channel 0
        const CH0 = 1 << 0;
        /// USB channel 1
        const CH1 = 1 << 1;
    }
}

/// Where execution resumes after a deep standby cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeMethod {
    /// Boot from the external memory, as after a power-on reset.
    #[default]
    ExternalMemory,
    /// Boot from the on-chip data-retention RAM.
    RetentionRam,
}

/// The edge of a pin cancel source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Falling,
    Rising,
}

/// A request to enter deep standby.
///
/// **The device can only leave deep standby through one of the sources
/// enabled here (or a reset).** A request without any wake source is
/// accepted as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionRequest {
    pub keep: RetentionBanks,
    pub wake: WakeSources,
    /// The sources in `wake` that trigger on a rising edge. Others trigger
    /// on a falling edge.
    pub rising_edge: WakeSources,
    pub usb_wake: UsbWakeSources,
    pub resume: ResumeMethod,
    /// Keep the external memory control pins driven in deep standby.
    pub keep_bus_pins: bool,
}

impl Default for RetentionRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl RetentionRequest {
    pub const fn new() -> Self {
        Self {
            keep: RetentionBanks::empty(),
            wake: WakeSources::empty(),
            rising_edge: WakeSources::empty(),
            usb_wake: UsbWakeSources::empty(),
            resume: ResumeMethod::ExternalMemory,
            keep_bus_pins: false,
        }
    }

    /// Preserve the contents of `banks`.
    pub const fn keep(mut self, banks: RetentionBanks) -> Self {
        self.keep = self.keep.union(banks);
        self
    }

    /// Wake on the RTC alarm.
    pub const fn wake_on_rtc(mut self) -> Self {
        self.wake = self.wake.union(WakeSources::RTCAR);
        self
    }

    /// Wake on `pins` with the specified edge.
    pub const fn wake_on_pin(mut self, pins: WakeSources, edge: Edge) -> Self {
        self.wake = self.wake.union(pins);
        self.rising_edge = match edge {
            Edge::Rising => self.rising_edge.union(pins),
            Edge::Falling => self.rising_edge.difference(pins),
        };
        self
    }

    pub const fn wake_on_usb(mut self, sources: UsbWakeSources) -> Self {
        self.usb_wake = self.usb_wake.union(sources);
        self
    }

    pub const fn resume_from(mut self, method: ResumeMethod) -> Self {
        self.resume = method;
        self
    }

    pub const fn keep_bus_pins(mut self, keep: bool) -> Self {
        self.keep_bus_pins = keep;
        self
    }
}

/// [`RetentionRequest`] in the raw register vocabulary. Each field is
/// written to the register of the same name verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectRetentionRequest {
    pub rramkp: u8,
    pub dsctr: u8,
    pub dsssr: u16,
    pub dsesr: u16,
    /// Ignored on variants without `USBDSSSR`.
    pub usbdsssr: u8,
}

impl From<&RetentionRequest> for DirectRetentionRequest {
    fn from(req: &RetentionRequest) -> Self {
        let mut dsctr = LocalRegisterCopy::<u8, DSCTR::Register>::new(0);
        dsctr.write(
            match req.resume {
                ResumeMethod::ExternalMemory => DSCTR::RAMBOOT::CLEAR,
                ResumeMethod::RetentionRam => DSCTR::RAMBOOT::SET,
            } + if req.keep_bus_pins {
                DSCTR::EBUSKEEPE::SET
            } else {
                DSCTR::EBUSKEEPE::CLEAR
            },
        );

        Self {
            rramkp: req.keep.bits(),
            dsctr: dsctr.get(),
            dsssr: req.wake.bits(),
            dsesr: req
                .rising_edge
                .intersection(req.wake)
                .difference(WakeSources::RTCAR)
                .bits(),
            usbdsssr: req.usb_wake.bits(),
        }
    }
}

impl From<RetentionRequest> for DirectRetentionRequest {
    #[inline]
    fn from(req: RetentionRequest) -> Self {
        Self::from(&req)
    }
}

/// Why the device left deep standby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelSource {
    /// The RTC alarm
    pub rtc: bool,
    /// Pin sources. Never contains [`WakeSources::RTCAR`].
    pub pins: WakeSources,
    pub usb: UsbWakeSources,
}

/// [`CancelSource`] in the raw register vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectCancelSource {
    /// `DSFR` as read, including `IOKEEP`
    pub dsfr: u16,
    /// `USBDSFR` as read. `0` on variants without it.
    pub usbdsfr: u8,
}

impl DirectCancelSource {
    /// Check if any cancel source flag is set.
    pub const fn has_cause(&self) -> bool {
        self.dsfr & DSFR_CAUSE_MASK != 0 || self.usbdsfr != 0
    }
}

impl From<DirectCancelSource> for CancelSource {
    fn from(raw: DirectCancelSource) -> Self {
        let flags = WakeSources::from_bits_truncate(raw.dsfr);
        Self {
            rtc: flags.contains(WakeSources::RTCAR),
            pins: flags.difference(WakeSources::RTCAR),
            usb: UsbWakeSources::from_bits_truncate(raw.usbdsfr),
        }
    }
}
