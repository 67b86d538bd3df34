/*!
stack.rs - PSHS/PULS/PSHU/PULU, driven by a post-byte register mask.

Bit layout (high to low): PC, U-or-S, Y, X, DP, B, A, CC. PSHS/PULS
push onto/pull from the S stack and bit 6 names U; PSHU/PULU push onto/
pull from the U stack and bit 6 names S - each stack op never refers to
its own pointer through the mask. Push order runs PC down to CC
(pre-decrementing S/U before each byte), pull runs CC up to PC
(post-incrementing after each byte) so the two are mirror images.
Touching S through either op (directly as the worked stack, or via bit
6 on PSHU/PULU) arms the NMI edge per the reference's "first write to S"
rule.

The table's base cost for all four opcodes is 5 cycles; each byte
actually transferred across the stack (1 per 8-bit register, 2 per
16-bit register) adds one more, so `try_handle` returns that per-mask
byte count as the handler surcharge, same mechanism `branches.rs` uses
for the taken-long-branch +1.
*/

use super::read8;
use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::Cpu;
use crate::memory::Memory;

const BIT_PC: u8 = 0b1000_0000;
const BIT_OTHER_STACK: u8 = 0b0100_0000;
const BIT_Y: u8 = 0b0010_0000;
const BIT_X: u8 = 0b0001_0000;
const BIT_DP: u8 = 0b0000_1000;
const BIT_B: u8 = 0b0000_0100;
const BIT_A: u8 = 0b0000_0010;
const BIT_CC: u8 = 0b0000_0001;

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    let bytes = match mnemonic {
        Pshs => push(cpu, resolved, true),
        Puls => pull(cpu, resolved, true),
        Pshu => push(cpu, resolved, false),
        Pulu => pull(cpu, resolved, false),
        _ => return None,
    };
    // Table entries carry the 5-cycle base cost; each byte actually
    // transferred across the stack adds one more cycle.
    Some(bytes)
}

/// Bytes transferred by a post-byte mask: 2 per 16-bit register bit, 1
/// per 8-bit register bit.
fn mask_byte_count(mask: u8) -> u32 {
    let wide_bits = (mask & (BIT_PC | BIT_OTHER_STACK | BIT_Y | BIT_X)).count_ones();
    let narrow_bits = (mask & (BIT_DP | BIT_B | BIT_A | BIT_CC)).count_ones();
    wide_bits * 2 + narrow_bits
}

fn push<M: Memory>(cpu: &mut Cpu<M>, resolved: Resolved, via_s: bool) -> u32 {
    let mask = read8(cpu, resolved);
    if mask & BIT_PC != 0 {
        push16(cpu, via_s, cpu.regs.pc());
    }
    if mask & BIT_OTHER_STACK != 0 {
        let v = if via_s { cpu.regs.u() } else { cpu.regs.s() };
        push16(cpu, via_s, v);
    }
    if mask & BIT_Y != 0 {
        push16(cpu, via_s, cpu.regs.y());
    }
    if mask & BIT_X != 0 {
        push16(cpu, via_s, cpu.regs.x());
    }
    if mask & BIT_DP != 0 {
        push8(cpu, via_s, cpu.regs.dp());
    }
    if mask & BIT_B != 0 {
        push8(cpu, via_s, cpu.regs.b());
    }
    if mask & BIT_A != 0 {
        push8(cpu, via_s, cpu.regs.a());
    }
    if mask & BIT_CC != 0 {
        push8(cpu, via_s, cpu.regs.cc.get_byte());
    }
    if via_s {
        cpu.arm_nmi();
    }
    mask_byte_count(mask)
}

fn pull<M: Memory>(cpu: &mut Cpu<M>, resolved: Resolved, via_s: bool) -> u32 {
    let mask = read8(cpu, resolved);
    if mask & BIT_CC != 0 {
        let v = pull8(cpu, via_s);
        cpu.regs.cc.set_byte(v);
    }
    if mask & BIT_A != 0 {
        let v = pull8(cpu, via_s);
        cpu.regs.set_a(v);
    }
    if mask & BIT_B != 0 {
        let v = pull8(cpu, via_s);
        cpu.regs.set_b(v);
    }
    if mask & BIT_DP != 0 {
        let v = pull8(cpu, via_s);
        cpu.regs.set_dp(v);
    }
    if mask & BIT_X != 0 {
        let v = pull16(cpu, via_s);
        cpu.regs.set_x(v);
    }
    if mask & BIT_Y != 0 {
        let v = pull16(cpu, via_s);
        cpu.regs.set_y(v);
    }
    if mask & BIT_OTHER_STACK != 0 {
        let v = pull16(cpu, via_s);
        if via_s {
            cpu.regs.set_u(v);
        } else {
            cpu.regs.set_s(v);
        }
    }
    if mask & BIT_PC != 0 {
        let v = pull16(cpu, via_s);
        cpu.regs.set_pc(v);
    }
    if via_s || (!via_s && mask & BIT_OTHER_STACK != 0) {
        cpu.arm_nmi();
    }
    mask_byte_count(mask)
}

fn push8<M: Memory>(cpu: &mut Cpu<M>, via_s: bool, v: u8) {
    if via_s {
        cpu.push_byte_s(v);
    } else {
        cpu.push_byte_u(v);
    }
}
fn push16<M: Memory>(cpu: &mut Cpu<M>, via_s: bool, v: u16) {
    if via_s {
        cpu.push_word_s(v);
    } else {
        cpu.push_word_u(v);
    }
}
fn pull8<M: Memory>(cpu: &mut Cpu<M>, via_s: bool) -> u8 {
    if via_s {
        cpu.pull_byte_s()
    } else {
        cpu.pull_byte_u()
    }
}
fn pull16<M: Memory>(cpu: &mut Cpu<M>, via_s: bool) -> u16 {
    if via_s {
        cpu.pull_word_s()
    } else {
        cpu.pull_word_u()
    }
}
