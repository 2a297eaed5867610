tock_registers::register_bitfields! {u32,
    pub CLIDR [
        /// Level of Unification Uniprocessor
        LoUU OFFSET(27) NUMBITS(3) [],
        /// Level of Coherency
        LoC OFFSET(24) NUMBITS(3) [],
        /// Level of Unification Inner Shareable
        LoUIS OFFSET(21) NUMBITS(3) []
    ]
}

/// Cache Level ID Register
pub const CLIDR: CLIDRAccessor = CLIDRAccessor;
pub struct CLIDRAccessor;

impl tock_registers::interfaces::Readable for CLIDRAccessor {
    type T = u32;
    type R = CLIDR::Register;
    sys_coproc_read_raw!(u32, [p15, c0, 1, c0, 1]);
}

tock_registers::register_bitfields! {u32,
    pub CSSELR [
        /// Selects the instruction cache (`1`) or the data/unified cache
        /// (`0`) of the level.
        InD OFFSET(0) NUMBITS(1) [
            DataOrUnified = 0,
            Instruction = 1
        ],
        /// Cache level, minus one
        Level OFFSET(1) NUMBITS(3) []
    ]
}

/// Cache Size Selection Register
pub const CSSELR: CSSELRAccessor = CSSELRAccessor;
pub struct CSSELRAccessor;

impl tock_registers::interfaces::Writeable for CSSELRAccessor {
    type T = u32;
    type R = CSSELR::Register;
    sys_coproc_write_raw!(u32, [p15, c0, 2, c0, 0]);
}

tock_registers::register_bitfields! {u32,
    pub CCSIDR [
        /// log2(words per line) - 2
        LineSize OFFSET(0) NUMBITS(3) [],
        /// Ways - 1
        Associativity OFFSET(3) NUMBITS(10) [],
        /// Sets - 1
        NumSets OFFSET(13) NUMBITS(15) []
    ]
}

/// Cache Size ID Register of the level selected by [`CSSELR`]
pub const CCSIDR: CCSIDRAccessor = CCSIDRAccessor;
pub struct CCSIDRAccessor;

impl tock_registers::interfaces::Readable for CCSIDRAccessor {
    type T = u32;
    type R = CCSIDR::Register;
    sys_coproc_read_raw!(u32, [p15, c0, 1, c0, 0]);
}
