use thiserror::Error;

/// The three error kinds a host needs to distinguish: a fatal failure before
/// the run loop starts, a non-fatal diagnostic raised during execution, and a
/// clean host-driven shutdown signal.
#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error("failed to load rom: {reason}")]
    RomLoadFailure { reason: String },

    #[error("unknown opcode {opcode:#04X} at pc {pc:#06X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    #[error("window closed")]
    WindowClosed,
}

/// Recorded on the CPU the first time an unrecognised opcode is fetched.
/// The CPU does not panic or unwind: it freezes in a halted state so a host
/// or test harness can inspect this value afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticHalt {
    pub opcode: u8,
    pub pc: u16,
}
