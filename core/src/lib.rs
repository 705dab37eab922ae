pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod emulator;
pub mod error;
pub mod interrupts;
pub mod joypad;
pub mod ppu;
pub mod timer;

pub use emulator::Emulator;
pub use error::{DiagnosticHalt, EmulatorError};
pub use joypad::InputKey;
pub use ppu::palette::DMG_GREEN;
