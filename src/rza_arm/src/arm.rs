//! CP15 system register accessors used by the cache maintenance code.

/// Implements `tock_registers::interfaces::Readable::get` for a CP15
/// register.
#[macropol::macropol]
macro_rules! sys_coproc_read_raw {
    ($width:ty, [$cp:ident, $crn:ident, $opc1:literal, $crm:ident, $opc2:literal]) => {
        /// `mrc $&cp, $&opc1, {out_reg}, $&crn, $&crm, $&opc2`
        #[inline]
        fn get(&self) -> u32 {
            let reg;
            unsafe {
                core::arch::asm!(
                    "mrc $&cp, $&opc1, {}, $&crn, $&crm, $&opc2",
                    lateout(reg) reg,
                );
            }
            reg
        }
    };
}

/// Implements `tock_registers::interfaces::Writeable::set` for a CP15
/// register or operation.
#[macropol::macropol]
macro_rules! sys_coproc_write_raw {
    ($width:ty, [$cp:ident, $crn:ident, $opc1:literal, $crm:ident, $opc2:literal]) => {
        /// `mcr $&cp, $&opc1, {in_reg}, $&crn, $&crm, $&opc2`
        #[inline]
        fn set(&self, value: u32) {
            unsafe {
                core::arch::asm!(
                    "mcr $&cp, $&opc1, {}, $&crn, $&crm, $&opc2",
                    in(reg) value,
                );
            }
        }
    };
}

/// Defines a write-only CP15 maintenance operation.
macro_rules! cache_op {
    ($(#[$meta:meta])* $name:ident, $accessor:ident, [$cp:ident, $crn:ident, $opc1:literal, $crm:ident, $opc2:literal]) => {
        $(#[$meta])*
        pub const $name: $accessor = $accessor;
        pub struct $accessor;

        impl tock_registers::interfaces::Writeable for $accessor {
            type T = u32;
            type R = ();
            sys_coproc_write_raw!(u32, [$cp, $crn, $opc1, $crm, $opc2]);
        }
    };
}

mod cache_id;
mod cache_ops;
pub use self::cache_id::*;
pub use self::cache_ops::*;

/// Data Synchronization Barrier
#[inline]
pub fn dsb() {
    unsafe { core::arch::asm!("dsb") };
}

/// Instruction Synchronization Barrier
#[inline]
pub fn isb() {
    unsafe { core::arch::asm!("isb") };
}
