use crate::bus::{Bus, MemoryMapper};
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::{DiagnosticHalt, EmulatorError};
use crate::joypad::InputKey;
use crate::ppu::Ppu;

/// T-cycles in one full frame: 154 scanlines * 456 T-cycles/line.
pub const CYCLES_PER_FRAME: u32 = 70224;

/// Top-level handle a host drives: owns the CPU (and through it, the Bus and
/// everything hanging off it) and exposes the few things a frontend needs —
/// stepping, framebuffer/frame-ready polling, input, and the serial debug
/// log — without leaking the Bus's internals.
pub struct Emulator {
    cpu: Cpu<Bus>,
}

impl Emulator {
    pub fn new(rom: Vec<u8>) -> Result<Self, EmulatorError> {
        let cartridge = Cartridge::load(rom)?;
        let bus = Bus::new(cartridge);
        Ok(Self { cpu: Cpu::new(bus) })
    }

    /// Advances by one CPU step (one instruction, one interrupt dispatch, or
    /// one idle cycle while halted/stopped).
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Runs steps until a full frame has been produced or the CPU has
    /// frozen on a diagnostic halt, whichever comes first.
    pub fn run_frame(&mut self) {
        while !self.cpu.mmu.take_frame_ready() {
            if self.cpu.diagnostic_halt.is_some() {
                return;
            }
            self.cpu.step();
        }
    }

    pub fn press_key(&mut self, key: InputKey) {
        self.cpu.mmu.press_key(key);
    }

    pub fn release_key(&mut self, key: InputKey) {
        self.cpu.mmu.release_key(key);
    }

    pub fn ppu(&self) -> &Ppu {
        self.cpu.mmu.ppu()
    }

    pub fn diagnostic_halt(&self) -> Option<DiagnosticHalt> {
        self.cpu.diagnostic_halt
    }

    pub fn serial_debug_buffer(&self) -> &[u8] {
        self.cpu.mmu.serial_debug_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0147] = 0x00;
        rom
    }

    #[test]
    fn run_frame_eventually_produces_a_frame() {
        let mut emulator = Emulator::new(minimal_rom()).unwrap();
        emulator.run_frame();
        assert!(emulator.diagnostic_halt().is_none());
    }

    #[test]
    fn rejects_unsupported_cartridge_type() {
        let mut rom = minimal_rom();
        rom[0x0147] = 0x19;
        assert!(Emulator::new(rom).is_err());
    }
}
