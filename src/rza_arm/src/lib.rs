//! Armv7-A building blocks for Renesas RZ/A boards: data cache maintenance
//! (Cortex-A9 L1 and the PL310 L2 cache controller), the Generic Interrupt
//! Controller, and core-local operations.
//!
//! Every hardware block is exposed through a trait ([`CacheMaintenance`],
//! [`InterruptController`], [`Cpu`]) so that drivers built on top of this
//! crate can be exercised against an instrumented implementation on a host.
//! The implementations that execute coprocessor instructions are only
//! available when building for `target_os = "none"`.
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::verbose_bit_mask)] // questionable
#![no_std]

#[cfg(target_os = "none")]
mod arm;

/// Data cache maintenance.
#[doc(hidden)]
pub mod cache {
    pub mod cfg;
    pub mod imp;
    pub mod pl310_regs;
}

/// The Arm Generic Interrupt Controller driver.
#[doc(hidden)]
pub mod gic {
    pub mod cfg;
    pub mod gic_regs;
    pub mod imp;
}

mod cpu;

pub use self::cache::cfg::*;
pub use self::cache::imp::*;
pub use self::cpu::*;
pub use self::gic::cfg::*;
pub use self::gic::imp::{Gic, HandlerSlot};
