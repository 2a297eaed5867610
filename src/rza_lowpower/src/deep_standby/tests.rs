//! Test cases for `crate::deep_standby`
extern crate std;

use std::vec::Vec;

use super::{
    cfg::{
        CancelSource, DeepStandbyOptions, DirectCancelSource, DirectRetentionRequest, Edge,
        RetentionBanks, RetentionRequest, UsbWakeSources, WakeSources,
    },
    imp::DeepStandby,
};
use crate::mock::{Event, MockPlatform};

struct Rza1Board;

impl DeepStandbyOptions for Rza1Board {}

struct UsbBoard;

impl DeepStandbyOptions for UsbBoard {
    const USBDSSSR: Option<usize> = Some(0xfcff_1830);
    const USBDSFR: Option<usize> = Some(0xfcff_1832);
}

const PL310_POWER_CTRL: usize = 0x3fff_f000 + 0xf80;

fn position(trace: &[Event], event: Event) -> usize {
    trace
        .iter()
        .position(|e| *e == event)
        .unwrap_or_else(|| panic!("{event:?} not found"))
}

fn write_position(trace: &[Event], addr: usize) -> usize {
    trace
        .iter()
        .position(|e| e.is_write_to(addr))
        .unwrap_or_else(|| panic!("no write to {addr:#x}"))
}

fn touches(trace: &[Event], addr: usize) -> bool {
    trace.iter().any(|e| {
        matches!(*e, Event::Read { addr: a, .. } | Event::Write { addr: a, .. } if a == addr)
    })
}

#[test]
fn rtc_only_entry_order() {
    let mock = MockPlatform::new();
    mock.poke16(Rza1Board::DSFR, 0x8040); // left over from the last resume
    mock.poke32(Rza1Board::RETENTION_BANKS[0], 0xdead_beef);
    mock.poke32(Rza1Board::RETENTION_BANKS[2], 0x0123_4567);
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    let request = RetentionRequest::new()
        .keep(RetentionBanks::BANK0 | RetentionBanks::BANK2)
        .wake_on_rtc();
    mock.run_until_wfi(|| standby.enter(&request));

    let trace = mock.trace();
    let order = [
        position(&trace, Event::CleanInvalidateDcacheAll),
        position(&trace, Event::CleanInvalidateL2All),
        write_position(&trace, Rza1Board::RETENTION_BANKS[0]),
        write_position(&trace, Rza1Board::RETENTION_BANKS[2]),
        position(&trace, Event::CleanDcacheAll),
        position(&trace, Event::DisableIrq),
        write_position(&trace, Rza1Board::STBCR1),
        write_position(&trace, Rza1Board::DSFR),
        position(&trace, Event::MaskAllButNmi),
        position(&trace, Event::WaitForInterrupt),
    ];
    assert!(
        order.windows(2).all(|w| w[0] < w[1]),
        "out of order: {order:?}"
    );
    assert_eq!(trace.last(), Some(&Event::WaitForInterrupt));

    // The kept banks are rewritten with their own contents
    assert!(trace.contains(&Event::Write {
        addr: Rza1Board::RETENTION_BANKS[0],
        width: 4,
        value: 0xdead_beef
    }));
    assert_eq!(mock.peek32(Rza1Board::RETENTION_BANKS[2]), 0x0123_4567);
    assert!(!touches(&trace, Rza1Board::RETENTION_BANKS[1]));
    assert!(!touches(&trace, Rza1Board::RETENTION_BANKS[3]));

    assert_eq!(mock.peek32(PL310_POWER_CTRL) & 1, 1);
    assert_eq!(mock.peek8(Rza1Board::RRAMKP), 0b0101);
    assert_eq!(mock.peek8(Rza1Board::DSCTR), 0);
    assert_eq!(mock.peek16(Rza1Board::DSSSR), 0x0040);
    assert_eq!(mock.peek16(Rza1Board::DSESR), 0);
    assert_eq!(mock.peek8(Rza1Board::DSCNT), 0);
    assert_eq!(mock.peek8(Rza1Board::STBCR1), 0xc0);
    assert_eq!(mock.peek16(Rza1Board::DSFR), 0);
}

#[test]
fn every_register_write_is_read_back() {
    let mock = MockPlatform::new();
    mock.poke8(Rza1Board::DSCNT, 0x01);
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    let request = DirectRetentionRequest {
        rramkp: 0b1000,
        dsctr: 0x40,
        dsssr: 0x1001,
        dsesr: 0x0001,
        usbdsssr: 0,
    };
    mock.run_until_wfi(|| standby.enter_direct(&request));

    let trace = mock.trace();
    let bank = Rza1Board::RETENTION_BANKS[3];
    let writes: Vec<usize> = trace
        .iter()
        .filter_map(|e| match *e {
            Event::Write { addr, .. } => Some(addr),
            _ => None,
        })
        .collect();
    assert_eq!(
        writes,
        [
            PL310_POWER_CTRL,
            Rza1Board::RRAMKP,
            Rza1Board::DSCTR,
            Rza1Board::DSSSR,
            Rza1Board::DSESR,
            Rza1Board::DSCNT,
            bank,
            Rza1Board::STBCR1,
            Rza1Board::DSFR,
        ]
    );

    for (i, e) in trace.iter().enumerate() {
        if let Event::Write { addr, width, .. } = *e {
            if addr == bank {
                // A dummy write follows its read instead
                assert!(matches!(
                    trace[i - 1],
                    Event::Read { addr: a, .. } if a == bank
                ));
                continue;
            }
            assert!(
                matches!(
                    trace[i + 1],
                    Event::Read { addr: a, width: w, .. } if a == addr && w == width
                ),
                "write to {addr:#x} is not read back"
            );
        }
    }

    assert_eq!(mock.peek8(Rza1Board::DSCNT), 0);
    assert_eq!(mock.peek16(Rza1Board::DSSSR), 0x1001);
    assert_eq!(mock.peek16(Rza1Board::DSESR), 0x0001);
}

#[test]
fn usb_cancel_registers() {
    let mock = MockPlatform::new();
    mock.poke8(UsbBoard::USBDSFR.unwrap(), 0x02);
    let standby = DeepStandby::<UsbBoard, _>::new(mock.clone());

    let request = RetentionRequest::new()
        .wake_on_pin(WakeSources::P6_2, Edge::Rising)
        .wake_on_usb(UsbWakeSources::CH0 | UsbWakeSources::CH1);
    mock.run_until_wfi(|| standby.enter(&request));

    let trace = mock.trace();
    assert_eq!(mock.peek8(UsbBoard::USBDSSSR.unwrap()), 0x03);
    assert_eq!(mock.peek8(UsbBoard::USBDSFR.unwrap()), 0);
    assert!(
        write_position(&trace, UsbBoard::USBDSSSR.unwrap())
            < write_position(&trace, UsbBoard::DSCNT)
    );
    assert!(
        write_position(&trace, UsbBoard::DSFR) < write_position(&trace, UsbBoard::USBDSFR.unwrap())
    );
    assert!(
        write_position(&trace, UsbBoard::USBDSFR.unwrap())
            < position(&trace, Event::MaskAllButNmi)
    );
}

#[test]
fn no_usb_registers_without_usb() {
    let mock = MockPlatform::new();
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    let request = RetentionRequest::new()
        .wake_on_usb(UsbWakeSources::CH0)
        .wake_on_rtc();
    mock.run_until_wfi(|| standby.enter(&request));

    let trace = mock.trace();
    assert!(!touches(&trace, 0xfcff_1830));
    assert!(!touches(&trace, 0xfcff_1832));
    assert!(!trace.iter().any(|e| matches!(
        e,
        Event::Write { addr, .. } if Rza1Board::RETENTION_BANKS.contains(addr)
    )));
}

#[test]
fn query_after_rtc_resume() {
    let mock = MockPlatform::new();
    mock.poke16(Rza1Board::DSFR, 0x8040);
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    assert_eq!(
        standby.query_cancel_source(),
        Some(CancelSource {
            rtc: true,
            pins: WakeSources::empty(),
            usb: UsbWakeSources::empty(),
        })
    );
    // The cause is consumed, the pins are still held
    assert_eq!(mock.peek16(Rza1Board::DSFR), 0x8000);
    assert_eq!(standby.query_cancel_source(), None);
}

#[test]
fn query_captures_once() {
    let mock = MockPlatform::new();
    mock.poke16(UsbBoard::DSFR, 0x1010);
    mock.poke8(UsbBoard::USBDSFR.unwrap(), 0x01);
    let standby = DeepStandby::<UsbBoard, _>::new(mock.clone());

    assert_eq!(
        standby.query_cancel_source(),
        Some(CancelSource {
            rtc: false,
            pins: WakeSources::NMI | WakeSources::P2_12,
            usb: UsbWakeSources::CH0,
        })
    );
    let dsfr_reads = mock
        .trace()
        .iter()
        .filter(|e| matches!(e, Event::Read { addr, .. } if *addr == UsbBoard::DSFR))
        .count();
    // The capture, then the read-back of the clearing write
    assert_eq!(dsfr_reads, 2);
    assert_eq!(mock.peek8(UsbBoard::USBDSFR.unwrap()), 0);
    assert!(!standby.is_resumed_from_deep_standby());
}

#[test]
fn direct_query_is_non_destructive() {
    let mock = MockPlatform::new();
    mock.poke16(Rza1Board::DSFR, 0x8041);
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    let expected = Some(DirectCancelSource {
        dsfr: 0x8041,
        usbdsfr: 0,
    });
    assert_eq!(standby.query_cancel_source_direct(), expected);
    assert_eq!(standby.query_cancel_source_direct(), expected);
    assert!(standby.is_resumed_from_deep_standby());
    assert_eq!(mock.write_count(), 0);
    assert_eq!(mock.peek16(Rza1Board::DSFR), 0x8041);
}

#[test]
fn fresh_reset_reports_nothing() {
    let mock = MockPlatform::new();
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    assert_eq!(standby.query_cancel_source(), None);
    assert_eq!(standby.query_cancel_source_direct(), None);
    assert!(!standby.is_resumed_from_deep_standby());
    assert_eq!(mock.write_count(), 0);
}

#[test]
fn release_io_retention_keeps_causes() {
    let mock = MockPlatform::new();
    mock.poke16(Rza1Board::DSFR, 0x8041);
    let standby = DeepStandby::<Rza1Board, _>::new(mock.clone());

    standby.release_io_retention();
    assert_eq!(mock.peek16(Rza1Board::DSFR), 0x0041);

    // Nothing to release
    mock.clear_trace();
    standby.release_io_retention();
    assert_eq!(mock.write_count(), 0);
}
