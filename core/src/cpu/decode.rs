use super::Cpu;
use crate::bus::MemoryMapper;

impl<M: MemoryMapper> Cpu<M> {
    /// Dispatches one base-table opcode. Patterned ranges (LD r,r' / ALU A,r
    /// / INC-DEC r / the rp-indexed groups) are decoded by bitfield rather
    /// than enumerated one by one; the remaining, irregular opcodes are
    /// matched directly.
    pub(super) fn execute(&mut self, opcode: u8) {
        match opcode {
            0x00 => {}
            0x10 => self.stop(),
            0x76 => self.halt(),
            0xF3 => self.di(),
            0xFB => self.ei(),
            0xCB => {
                let cb = self.fetch_u8();
                self.execute_cb(cb);
            }

            // LD r,r' (0x40-0x7F excluding 0x76=HALT, handled above)
            0x40..=0x7F => {
                let dest = (opcode >> 3) & 0x07;
                let src = opcode & 0x07;
                let value = self.read_r8(src);
                self.write_r8(dest, value);
            }

            // LD r,d8
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                let dest = (opcode >> 3) & 0x07;
                let value = self.fetch_u8();
                self.write_r8(dest, value);
            }

            // ALU A,r8
            0x80..=0xBF => {
                let op = (opcode >> 3) & 0x07;
                let src = opcode & 0x07;
                let value = self.read_r8(src);
                self.apply_alu_op(op, value);
            }

            // ALU A,d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                let op = ((opcode >> 4) - 0x0C) * 2 + if opcode & 0x08 != 0 { 1 } else { 0 };
                let value = self.fetch_u8();
                self.apply_alu_op(op, value);
            }

            // INC r8
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                let reg = (opcode >> 3) & 0x07;
                let value = self.read_r8(reg);
                let result = self.alu_inc8(value);
                self.write_r8(reg, result);
            }

            // DEC r8
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                let reg = (opcode >> 3) & 0x07;
                let value = self.read_r8(reg);
                let result = self.alu_dec8(value);
                self.write_r8(reg, result);
            }

            // INC rp / DEC rp (16-bit increment does not touch flags, and
            // costs an extra internal cycle rather than a memory access).
            0x03 | 0x13 | 0x23 | 0x33 => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.read_rp(rp).wrapping_add(1);
                self.write_rp(rp, value);
                self.tick();
            }
            0x0B | 0x1B | 0x2B | 0x3B => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.read_rp(rp).wrapping_sub(1);
                self.write_rp(rp, value);
                self.tick();
            }

            // ADD HL,rp
            0x09 | 0x19 | 0x29 | 0x39 => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.read_rp(rp);
                self.alu_add_hl(value);
                self.tick();
            }

            // LD rp,d16
            0x01 | 0x11 | 0x21 | 0x31 => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.fetch_u16();
                self.write_rp(rp, value);
            }

            // POP rp2 / PUSH rp2
            0xC1 | 0xD1 | 0xE1 | 0xF1 => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.pop();
                self.write_rp2(rp, value);
            }
            0xC5 | 0xD5 | 0xE5 | 0xF5 => {
                let rp = (opcode >> 4) & 0x03;
                let value = self.read_rp2(rp);
                self.tick();
                self.push(value);
            }

            // RST n
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
                let vector = (opcode & 0x38) as u16;
                self.rst(vector);
            }

            // JR
            0x18 => self.jump_relative(true),
            0x20 | 0x28 | 0x30 | 0x38 => {
                let cc = (opcode >> 3) & 0x03;
                let taken = self.test_condition(cc);
                self.jump_relative(taken);
            }

            // JP
            0xC3 => self.jump_immediate(true),
            0xC2 | 0xCA | 0xD2 | 0xDA => {
                let cc = (opcode >> 3) & 0x03;
                let taken = self.test_condition(cc);
                self.jump_immediate(taken);
            }
            0xE9 => self.registers.pc = self.registers.hl(),

            // CALL
            0xCD => self.call(true),
            0xC4 | 0xCC | 0xD4 | 0xDC => {
                let cc = (opcode >> 3) & 0x03;
                let taken = self.test_condition(cc);
                self.call(taken);
            }

            // RET
            0xC9 => self.ret(true, false),
            0xC0 | 0xC8 | 0xD0 | 0xD8 => {
                let cc = (opcode >> 3) & 0x03;
                let taken = self.test_condition(cc);
                self.ret(taken, true);
            }
            0xD9 => self.reti(),

            // Rotates on A (unlike the CB-prefixed forms these always clear Z)
            0x07 => {
                let value = self.registers.a;
                self.registers.a = self.op_rlc(value);
                self.registers.zf = false;
            }
            0x0F => {
                let value = self.registers.a;
                self.registers.a = self.op_rrc(value);
                self.registers.zf = false;
            }
            0x17 => {
                let value = self.registers.a;
                self.registers.a = self.op_rl(value);
                self.registers.zf = false;
            }
            0x1F => {
                let value = self.registers.a;
                self.registers.a = self.op_rr(value);
                self.registers.zf = false;
            }

            0x27 => self.alu_daa(),
            0x2F => {
                self.registers.a = !self.registers.a;
                self.registers.nf = true;
                self.registers.hf = true;
            }
            0x37 => {
                self.registers.nf = false;
                self.registers.hf = false;
                self.registers.cf = true;
            }
            0x3F => {
                self.registers.nf = false;
                self.registers.hf = false;
                self.registers.cf = !self.registers.cf;
            }

            // Memory-indirect loads
            0x02 => self.write_byte(self.registers.bc(), self.registers.a),
            0x12 => self.write_byte(self.registers.de(), self.registers.a),
            0x0A => self.registers.a = self.read_byte(self.registers.bc()),
            0x1A => self.registers.a = self.read_byte(self.registers.de()),
            0x22 => {
                let addr = self.registers.hl();
                self.write_byte(addr, self.registers.a);
                self.registers.set_hl(addr.wrapping_add(1));
            }
            0x32 => {
                let addr = self.registers.hl();
                self.write_byte(addr, self.registers.a);
                self.registers.set_hl(addr.wrapping_sub(1));
            }
            0x2A => {
                let addr = self.registers.hl();
                self.registers.a = self.read_byte(addr);
                self.registers.set_hl(addr.wrapping_add(1));
            }
            0x3A => {
                let addr = self.registers.hl();
                self.registers.a = self.read_byte(addr);
                self.registers.set_hl(addr.wrapping_sub(1));
            }

            0xE0 => {
                let offset = self.fetch_u8();
                self.write_byte(0xFF00 + offset as u16, self.registers.a);
            }
            0xF0 => {
                let offset = self.fetch_u8();
                self.registers.a = self.read_byte(0xFF00 + offset as u16);
            }
            0xE2 => self.write_byte(0xFF00 + self.registers.c as u16, self.registers.a),
            0xF2 => self.registers.a = self.read_byte(0xFF00 + self.registers.c as u16),
            0xEA => {
                let addr = self.fetch_u16();
                self.write_byte(addr, self.registers.a);
            }
            0xFA => {
                let addr = self.fetch_u16();
                self.registers.a = self.read_byte(addr);
            }

            0x08 => {
                let addr = self.fetch_u16();
                self.write_word(addr, self.registers.sp);
            }
            0xF9 => {
                self.registers.sp = self.registers.hl();
                self.tick();
            }
            0xE8 => {
                let offset = self.fetch_u8() as i8;
                let result = self.alu_sp_plus_i8(offset);
                self.tick();
                self.tick();
                self.registers.sp = result;
            }
            0xF8 => {
                let offset = self.fetch_u8() as i8;
                let result = self.alu_sp_plus_i8(offset);
                self.tick();
                self.registers.set_hl(result);
            }

            // Unassigned opcodes: D3 DB DD E3 E4 EB EC ED F4 FC FD
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
                self.unknown_opcode(opcode);
            }
        }
    }

    /// `op` here is the 3-bit field selecting ADD/ADC/SUB/SBC/AND/XOR/OR/CP,
    /// shared between the `0x80..=0xBF` and `0xC6..=0xFE` opcode ranges.
    fn apply_alu_op(&mut self, op: u8, value: u8) {
        match op {
            0 => self.alu_add(value),
            1 => self.alu_adc(value),
            2 => self.alu_sub(value),
            3 => self.alu_sbc(value),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!("3-bit alu op code"),
        }
    }

    /// Dispatches a CB-prefixed opcode: top two bits select the group
    /// (rotate/shift, BIT, RES, SET), bits 3-5 the sub-operation or bit
    /// index, bits 0-2 the r8 operand.
    fn execute_cb(&mut self, opcode: u8) {
        let reg = opcode & 0x07;
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_r8(reg);

        match opcode >> 6 {
            0 => {
                let result = match bit {
                    0 => self.op_rlc(value),
                    1 => self.op_rrc(value),
                    2 => self.op_rl(value),
                    3 => self.op_rr(value),
                    4 => self.op_sla(value),
                    5 => self.op_sra(value),
                    6 => self.op_swap(value),
                    7 => self.op_srl(value),
                    _ => unreachable!("3-bit cb sub-op"),
                };
                self.write_r8(reg, result);
            }
            1 => self.op_bit(bit, value),
            2 => {
                let result = self.op_res(bit, value);
                self.write_r8(reg, result);
            }
            3 => {
                let result = self.op_set(bit, value);
                self.write_r8(reg, result);
            }
            _ => unreachable!("2-bit cb group"),
        }
    }
}
