//! An instrumented platform for testing the drivers on a host. Every access
//! to any of the hardware interfaces is appended to a single trace.
extern crate std;

use rza_arm::{
    CacheMaintenance, Cpu, InterruptController, InterruptHandler, InterruptLineError,
    InterruptLineTriggerMode, InterruptNum, InterruptPriority, SetInterruptLineTriggerModeError,
};
use std::{cell::RefCell, collections::BTreeMap, rc::Rc, vec::Vec};

use crate::bus::RegisterBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Read { addr: usize, width: u8, value: u32 },
    Write { addr: usize, width: u8, value: u32 },
    CleanInvalidateDcacheAll,
    CleanDcacheAll,
    CleanInvalidateL2All,
    CleanDcacheLine(usize),
    InvalidateDcacheLine(usize),
    CleanInvalidateDcacheLine(usize),
    SetPriority(InterruptNum, InterruptPriority),
    SetTriggerMode(InterruptNum, InterruptLineTriggerMode),
    EnableLine(InterruptNum),
    DisableLine(InterruptNum),
    RegisterHandler(InterruptNum),
    MaskAllButNmi,
    DisableIrq,
    WaitForInterrupt,
}

impl Event {
    pub fn is_write(&self) -> bool {
        matches!(self, Event::Write { .. })
    }

    pub fn is_write_to(&self, addr: usize) -> bool {
        matches!(*self, Event::Write { addr: a, .. } if a == addr)
    }
}

/// The panic payload [`MockPlatform::wait_for_interrupt`] unwinds with.
#[derive(Debug)]
pub struct WaitForInterruptReached;

#[derive(Default)]
struct State {
    mem: BTreeMap<usize, u8>,
    /// `(addr, mask, value)`: the bits in `mask` always read as `value`
    stuck: Vec<(usize, u8, u8)>,
    trace: Vec<Event>,
    handlers: BTreeMap<InterruptNum, InterruptHandler>,
}

impl State {
    fn load(&self, addr: usize, width: u8) -> u32 {
        (0..width as usize).fold(0, |acc, i| {
            let a = addr + i;
            let mut byte = self.mem.get(&a).copied().unwrap_or(0);
            for &(sa, mask, value) in &self.stuck {
                if sa == a {
                    byte = (byte & !mask) | (value & mask);
                }
            }
            acc | (u32::from(byte) << (i * 8))
        })
    }

    fn store(&mut self, addr: usize, width: u8, value: u32) {
        for i in 0..width as usize {
            self.mem.insert(addr + i, (value >> (i * 8)) as u8);
        }
    }
}

/// A shared handle to an in-memory register file plus recorders for the
/// cache, interrupt controller, and CPU interfaces.
#[derive(Clone, Default)]
pub struct MockPlatform(Rc<RefCell<State>>);

impl MockPlatform {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    fn record(&self, event: Event) {
        self.0.borrow_mut().trace.push(event);
    }

    fn read(&self, addr: usize, width: u8) -> u32 {
        let value = self.0.borrow().load(addr, width);
        self.record(Event::Read { addr, width, value });
        value
    }

    fn write(&self, addr: usize, width: u8, value: u32) {
        self.0.borrow_mut().store(addr, width, value);
        self.record(Event::Write { addr, width, value });
    }

    /// Set memory contents without recording an event.
    pub fn poke8(&self, addr: usize, value: u8) {
        self.0.borrow_mut().store(addr, 1, value.into());
    }

    pub fn poke16(&self, addr: usize, value: u16) {
        self.0.borrow_mut().store(addr, 2, value.into());
    }

    pub fn poke32(&self, addr: usize, value: u32) {
        self.0.borrow_mut().store(addr, 4, value);
    }

    /// Read memory contents without recording an event.
    pub fn peek8(&self, addr: usize) -> u8 {
        self.0.borrow().load(addr, 1) as u8
    }

    pub fn peek16(&self, addr: usize) -> u16 {
        self.0.borrow().load(addr, 2) as u16
    }

    pub fn peek32(&self, addr: usize) -> u32 {
        self.0.borrow().load(addr, 4)
    }

    /// Make the bits in `mask` of the byte at `addr` always read as `value`,
    /// regardless of what is written.
    pub fn stick8(&self, addr: usize, mask: u8, value: u8) {
        self.0.borrow_mut().stuck.push((addr, mask, value));
    }

    pub fn trace(&self) -> Vec<Event> {
        self.0.borrow().trace.clone()
    }

    pub fn clear_trace(&self) {
        self.0.borrow_mut().trace.clear();
    }

    pub fn write_count(&self) -> usize {
        self.0.borrow().trace.iter().filter(|e| e.is_write()).count()
    }

    pub fn handler(&self, num: InterruptNum) -> Option<InterruptHandler> {
        self.0.borrow().handlers.get(&num).copied()
    }

    /// Run `f` until it reaches [`Cpu::wait_for_interrupt`].
    ///
    /// Panics if `f` panics for any other reason.
    pub fn run_until_wfi(&self, f: impl FnOnce()) {
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
            .expect_err("returned without reaching WFI");
        if payload.downcast_ref::<WaitForInterruptReached>().is_none() {
            std::panic::resume_unwind(payload);
        }
    }
}

impl RegisterBus for MockPlatform {
    fn read8(&self, addr: usize) -> u8 {
        self.read(addr, 1) as u8
    }

    fn read16(&self, addr: usize) -> u16 {
        self.read(addr, 2) as u16
    }

    fn read32(&self, addr: usize) -> u32 {
        self.read(addr, 4)
    }

    fn write8(&self, addr: usize, value: u8) {
        self.write(addr, 1, value.into());
    }

    fn write16(&self, addr: usize, value: u16) {
        self.write(addr, 2, value.into());
    }

    fn write32(&self, addr: usize, value: u32) {
        self.write(addr, 4, value);
    }
}

impl CacheMaintenance for MockPlatform {
    fn clean_invalidate_dcache_all(&self) {
        self.record(Event::CleanInvalidateDcacheAll);
    }

    fn clean_dcache_all(&self) {
        self.record(Event::CleanDcacheAll);
    }

    fn clean_invalidate_l2_all(&self) {
        self.record(Event::CleanInvalidateL2All);
    }

    fn clean_dcache_line(&self, addr: usize) {
        self.record(Event::CleanDcacheLine(addr));
    }

    fn invalidate_dcache_line(&self, addr: usize) {
        self.record(Event::InvalidateDcacheLine(addr));
    }

    fn clean_invalidate_dcache_line(&self, addr: usize) {
        self.record(Event::CleanInvalidateDcacheLine(addr));
    }
}

impl InterruptController for MockPlatform {
    fn set_interrupt_line_priority(
        &self,
        num: InterruptNum,
        priority: InterruptPriority,
    ) -> Result<(), InterruptLineError> {
        self.record(Event::SetPriority(num, priority));
        Ok(())
    }

    fn set_interrupt_line_trigger_mode(
        &self,
        num: InterruptNum,
        mode: InterruptLineTriggerMode,
    ) -> Result<(), SetInterruptLineTriggerModeError> {
        self.record(Event::SetTriggerMode(num, mode));
        Ok(())
    }

    fn enable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.record(Event::EnableLine(num));
        Ok(())
    }

    fn disable_interrupt_line(&self, num: InterruptNum) -> Result<(), InterruptLineError> {
        self.record(Event::DisableLine(num));
        Ok(())
    }

    fn register_interrupt_handler(
        &self,
        num: InterruptNum,
        handler: InterruptHandler,
    ) -> Result<(), InterruptLineError> {
        self.0.borrow_mut().handlers.insert(num, handler);
        self.record(Event::RegisterHandler(num));
        Ok(())
    }

    fn mask_all_but_nmi(&self) {
        self.record(Event::MaskAllButNmi);
    }
}

impl Cpu for MockPlatform {
    fn wait_for_interrupt(&self) {
        self.record(Event::WaitForInterrupt);
        std::panic::panic_any(WaitForInterruptReached);
    }

    fn disable_irq(&self) {
        self.record(Event::DisableIrq);
    }
}
