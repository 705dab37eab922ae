use bitflags::bitflags;

/// The eight physical buttons, per spec's input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Select,
    Start,
}

bitflags! {
    #[derive(Default)]
    struct Lines: u8 {
        const RIGHT_A = 0b0000_0001;
        const LEFT_B = 0b0000_0010;
        const UP_SELECT = 0b0000_0100;
        const DOWN_START = 0b0000_1000;
        const SELECT_DIRECTIONS = 0b0001_0000;
        const SELECT_ACTIONS = 0b0010_0000;
    }
}

/// JOYP (0xFF00). Bits 6-7 always read as 1; bits 4-5 are the only settable
/// bits and select which of the two button lines is active; the low nibble
/// is synthesized on read, active-low (0 = pressed).
#[derive(Debug, Default)]
pub struct Joypad {
    directions: Lines,
    actions: Lines,
    select: Lines,
}

impl Joypad {
    pub fn new() -> Self {
        Self {
            directions: Lines::empty(),
            actions: Lines::empty(),
            // Power-on JOYP = 0x0F: both lines deselected.
            select: Lines::SELECT_DIRECTIONS | Lines::SELECT_ACTIONS,
        }
    }

    pub fn press(&mut self, key: InputKey) {
        self.set_pressed(key, true);
    }

    pub fn release(&mut self, key: InputKey) {
        self.set_pressed(key, false);
    }

    fn set_pressed(&mut self, key: InputKey, pressed: bool) {
        let (set, bit) = match key {
            InputKey::Right => (&mut self.directions, Lines::RIGHT_A),
            InputKey::Left => (&mut self.directions, Lines::LEFT_B),
            InputKey::Up => (&mut self.directions, Lines::UP_SELECT),
            InputKey::Down => (&mut self.directions, Lines::DOWN_START),
            InputKey::A => (&mut self.actions, Lines::RIGHT_A),
            InputKey::B => (&mut self.actions, Lines::LEFT_B),
            InputKey::Select => (&mut self.actions, Lines::UP_SELECT),
            InputKey::Start => (&mut self.actions, Lines::DOWN_START),
        };
        set.set(bit, pressed);
    }

    pub fn write_register(&mut self, value: u8) {
        self.select = Lines::from_bits_truncate(value) & (Lines::SELECT_DIRECTIONS | Lines::SELECT_ACTIONS);
    }

    pub fn read_register(&self) -> u8 {
        let mut low = 0x0Fu8;
        if !self.select.contains(Lines::SELECT_DIRECTIONS) {
            low &= !self.directions.bits & 0x0F;
        }
        if !self.select.contains(Lines::SELECT_ACTIONS) {
            low &= !self.actions.bits & 0x0F;
        }
        0b1100_0000 | self.select.bits | low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_reads_all_released() {
        let pad = Joypad::new();
        assert_eq!(pad.read_register(), 0xFF);
    }

    #[test]
    fn pressing_a_pulls_bit_low_when_actions_selected() {
        let mut pad = Joypad::new();
        pad.press(InputKey::A);
        pad.write_register(0b0001_0000); // select actions (bit 5 low)
        assert_eq!(pad.read_register() & 0x01, 0);
    }

    #[test]
    fn directions_independent_of_actions() {
        let mut pad = Joypad::new();
        pad.press(InputKey::Up);
        pad.write_register(0b0010_0000); // select directions (bit 4 low)
        assert_eq!(pad.read_register() & 0b0000_0100, 0);
        pad.write_register(0b0001_0000); // select actions instead
        assert_eq!(pad.read_register() & 0x0F, 0x0F);
    }
}
