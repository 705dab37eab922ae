use bitflags::bitflags;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Default)]
    pub struct LcdControl: u8 {
        const BG_WINDOW_ENABLE = 0b0000_0001;
        const SPRITE_ENABLE = 0b0000_0010;
        const SPRITE_SIZE = 0b0000_0100;
        const BG_TILE_MAP_SELECT = 0b0000_1000;
        const BG_WINDOW_TILE_SELECT = 0b0001_0000;
        const WINDOW_ENABLE = 0b0010_0000;
        const WINDOW_TILE_MAP_SELECT = 0b0100_0000;
        const LCD_ENABLE = 0b1000_0000;
    }
}

bitflags! {
    /// STAT (0xFF41). Bits 0-1 (mode) and bit 2 (coincidence) are derived,
    /// not independently settable; only bits 3-6 are writable.
    #[derive(Default)]
    pub struct LcdStatus: u8 {
        const MODE_LOW = 0b0000_0001;
        const MODE_HIGH = 0b0000_0010;
        const COINCIDENCE = 0b0000_0100;
        const HBLANK_INTERRUPT = 0b0000_1000;
        const VBLANK_INTERRUPT = 0b0001_0000;
        const OAM_INTERRUPT = 0b0010_0000;
        const LYC_INTERRUPT = 0b0100_0000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    Drawing = 3,
}

impl LcdStatus {
    pub fn set_mode(&mut self, mode: Mode) {
        self.remove(LcdStatus::MODE_LOW | LcdStatus::MODE_HIGH);
        let bits = mode as u8;
        if bits & 0b01 != 0 {
            self.insert(LcdStatus::MODE_LOW);
        }
        if bits & 0b10 != 0 {
            self.insert(LcdStatus::MODE_HIGH);
        }
    }

    pub fn mode(&self) -> Mode {
        match self.bits & 0b11 {
            0 => Mode::HBlank,
            1 => Mode::VBlank,
            2 => Mode::OamSearch,
            _ => Mode::Drawing,
        }
    }

    /// Full register byte: bit 7 reads as 1.
    pub fn to_byte(&self) -> u8 {
        self.bits | 0b1000_0000
    }
}

bitflags! {
    /// Byte 3 of an OAM sprite entry.
    #[derive(Default)]
    pub struct SpriteAttr: u8 {
        const PALETTE = 0b0001_0000;
        const X_FLIP = 0b0010_0000;
        const Y_FLIP = 0b0100_0000;
        const BG_PRIORITY = 0b1000_0000;
    }
}
