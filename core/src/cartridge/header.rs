const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0143;
const CARTRIDGE_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperKind {
    NoMbc,
    Mbc1,
}

#[derive(Debug, Clone)]
pub struct CartridgeHeader {
    pub title: String,
    pub cartridge_type: u8,
    pub rom_size: usize,
    pub ram_size: usize,
}

impl CartridgeHeader {
    pub fn parse(rom: &[u8]) -> Result<Self, String> {
        if rom.len() <= RAM_SIZE {
            return Err("rom is shorter than the header region".to_string());
        }
        let title_bytes = &rom[TITLE_START..=TITLE_END];
        let title = title_bytes
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect();

        let rom_size = rom_size_bytes(rom[ROM_SIZE]);
        let ram_size = ram_size_bytes(rom[RAM_SIZE]);

        Ok(CartridgeHeader {
            title,
            cartridge_type: rom[CARTRIDGE_TYPE],
            rom_size,
            ram_size,
        })
    }

    pub fn mapper_kind(&self) -> Result<MapperKind, String> {
        match self.cartridge_type {
            0x00 => Ok(MapperKind::NoMbc),
            0x01 | 0x02 | 0x03 => Ok(MapperKind::Mbc1),
            other => Err(format!("unsupported cartridge type {:#04X}", other)),
        }
    }
}

fn rom_size_bytes(code: u8) -> usize {
    // 32 KiB shifted left by the code; matches the standard header encoding.
    0x8000 << code
}

fn ram_size_bytes(code: u8) -> usize {
    match code {
        0x00 => 0,
        0x01 => 2 * 1024,
        0x02 => 8 * 1024,
        0x03 => 32 * 1024,
        0x04 => 128 * 1024,
        0x05 => 64 * 1024,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_header(cartridge_type: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[TITLE_START..TITLE_START + 5].copy_from_slice(b"ZELDA");
        rom[CARTRIDGE_TYPE] = cartridge_type;
        rom[ROM_SIZE] = 0x00;
        rom[RAM_SIZE] = 0x02;
        rom
    }

    #[test]
    fn parses_title() {
        let rom = rom_with_header(0x00);
        let header = CartridgeHeader::parse(&rom).unwrap();
        assert_eq!(header.title, "ZELDA");
    }

    #[test]
    fn recognises_no_mbc() {
        let rom = rom_with_header(0x00);
        let header = CartridgeHeader::parse(&rom).unwrap();
        assert_eq!(header.mapper_kind().unwrap(), MapperKind::NoMbc);
    }

    #[test]
    fn recognises_mbc1_variants() {
        for t in [0x01, 0x02, 0x03] {
            let rom = rom_with_header(t);
            let header = CartridgeHeader::parse(&rom).unwrap();
            assert_eq!(header.mapper_kind().unwrap(), MapperKind::Mbc1);
        }
    }

    #[test]
    fn rejects_unsupported_type() {
        let rom = rom_with_header(0x05);
        let header = CartridgeHeader::parse(&rom).unwrap();
        assert!(header.mapper_kind().is_err());
    }
}
