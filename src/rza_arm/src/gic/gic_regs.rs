#![allow(non_snake_case)]
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};

/// GIC v1 Distributor
#[repr(C)]
pub struct GicDistributor {
    /// Distributor Control Register
    pub CTLR: ReadWrite<u32, GICD_CTLR::Register>,
    /// Interrupt Controller Type Register
    pub TYPER: ReadOnly<u32, GICD_TYPER::Register>,
    /// Distributor Implementer Identification Register
    pub IIDR: ReadOnly<u32>,
    _reserved1: [u32; 29],
    /// Interrupt Group Registers
    pub IGROUPR: [ReadWrite<u32>; 32],
    /// Interrupt Set-Enable Registers
    pub ISENABLER: [ReadWrite<u32>; 32],
    /// Interrupt Clear-Enable Registers
    pub ICENABLER: [ReadWrite<u32>; 32],
    /// Interrupt Set-Pending Registers
    pub ISPENDR: [ReadWrite<u32>; 32],
    /// Interrupt Clear-Pending Registers
    pub ICPENDR: [ReadWrite<u32>; 32],
    /// Interrupt Set-Active Registers
    pub ISACTIVER: [ReadWrite<u32>; 32],
    /// Interrupt Clear-Active Registers
    pub ICACTIVER: [ReadWrite<u32>; 32],
    /// Interrupt Priority Registers
    pub IPRIORITYR: [ReadWrite<u8>; 1024],
    /// Interrupt Processor Targets Registers
    pub ITARGETSR: [ReadWrite<u8>; 1024],
    /// Interrupt Configuration Registers
    pub ICFGR: [ReadWrite<u32>; 64],
    _reserved2: [u32; 128],
    /// Software Generated Interrupt Register
    pub SGIR: WriteOnly<u32>,
    _reserved3: [u32; 63],
}

/// GIC v1 CPU Interface
#[repr(C)]
pub struct GicCpuInterface {
    /// CPU Interface Control Register
    pub CTLR: ReadWrite<u32, GICC_CTLR::Register>,
    /// Interrupt Priority Mask Register
    pub PMR: ReadWrite<u32>,
    /// Binary Point Register
    pub BPR: ReadWrite<u32>,
    /// Interrupt Acknowledge Register
    pub IAR: ReadOnly<u32, GICC_IAR::Register>,
    /// End of Interrupt Register
    pub EOIR: WriteOnly<u32>,
    /// Running Priority Register
    pub RPR: ReadOnly<u32>,
    /// Highest Priority Pending Interrupt Register
    pub HPPIR: ReadOnly<u32>,
}

tock_registers::register_bitfields! {u32,
    pub GICD_CTLR [
        /// Global enable for forwarding pending interrupts from the Distributor
        /// to the CPU interfaces
        Enable OFFSET(0) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ]
    ]
}

tock_registers::register_bitfields! {u32,
    pub GICD_TYPER [
        /// If ITLinesNumber=N, the maximum number of interrupts is 32(N+1).
        ITLinesNumber OFFSET(0) NUMBITS(5) []
    ]
}

tock_registers::register_bitfields! {u32,
    pub GICC_CTLR [
        /// Enable for the signaling of interrupts by the CPU interface to the
        /// connected processor
        Enable OFFSET(0) NUMBITS(1) [
            Disable = 0,
            Enable = 1
        ]
    ]
}

tock_registers::register_bitfields! {u32,
    pub GICC_IAR [
        /// The interrupt ID
        InterruptID OFFSET(0) NUMBITS(10) []
    ]
}
