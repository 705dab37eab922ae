pub mod header;
pub mod mapper;

use crate::error::EmulatorError;
use header::{CartridgeHeader, MapperKind};
use mapper::{Mapper, Mbc1, NoMbc};

#[derive(Debug)]
pub struct Cartridge {
    pub header: CartridgeHeader,
    mapper: Mapper,
}

impl Cartridge {
    pub fn load(rom: Vec<u8>) -> Result<Self, EmulatorError> {
        let header = CartridgeHeader::parse(&rom).map_err(|reason| EmulatorError::RomLoadFailure { reason })?;
        let kind = header
            .mapper_kind()
            .map_err(|reason| EmulatorError::RomLoadFailure { reason })?;
        let ram_size = header.ram_size;
        let mapper = match kind {
            MapperKind::NoMbc => Mapper::NoMbc(NoMbc::new(rom)),
            MapperKind::Mbc1 => Mapper::Mbc1(Mbc1::new(rom, ram_size)),
        };
        Ok(Self { header, mapper })
    }

    pub fn read_rom(&self, addr: u16) -> u8 {
        self.mapper.read_rom(addr)
    }

    pub fn write_rom(&mut self, addr: u16, value: u8) {
        self.mapper.write_rom(addr, value);
    }

    pub fn read_ram(&self, addr: u16) -> u8 {
        self.mapper.read_ram(addr)
    }

    pub fn write_ram(&mut self, addr: u16, value: u8) {
        self.mapper.write_ram(addr, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_rom(cartridge_type: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0147] = cartridge_type;
        rom
    }

    #[test]
    fn load_rejects_unsupported_type() {
        let rom = minimal_rom(0x19);
        assert!(Cartridge::load(rom).is_err());
    }

    #[test]
    fn load_accepts_no_mbc() {
        let rom = minimal_rom(0x00);
        assert!(Cartridge::load(rom).is_ok());
    }
}
