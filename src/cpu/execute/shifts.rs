/*!
shifts.rs - ASL/LSL, LSR, ASR, ROL, ROR over a memory operand or
register A/B. ASL and ROL shift a 0 or the prior carry into bit 0 and
shift bit 7 out to carry; LSR always shifts a 0 into bit 7 and bit 0
out to carry; ASR preserves bit 7 (arithmetic shift, sign stays) while
shifting bit 0 out to carry; ROR shifts the prior carry into bit 7.
*/

use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::Cpu;
use crate::memory::Memory;

fn asl(v: u8) -> (u8, bool) {
    (v << 1, v & 0x80 != 0)
}
fn rol(v: u8, carry_in: bool) -> (u8, bool) {
    ((v << 1) | carry_in as u8, v & 0x80 != 0)
}
fn lsr(v: u8) -> (u8, bool) {
    (v >> 1, v & 0x01 != 0)
}
fn asr(v: u8) -> (u8, bool) {
    ((v >> 1) | (v & 0x80), v & 0x01 != 0)
}
fn ror(v: u8, carry_in: bool) -> (u8, bool) {
    ((v >> 1) | ((carry_in as u8) << 7), v & 0x01 != 0)
}

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    match mnemonic {
        Asl => mem_left(cpu, resolved, asl),
        AslA => reg_a_left(cpu, asl),
        AslB => reg_b_left(cpu, asl),

        Rol => {
            let carry_in = cpu.regs.cc.carry();
            mem_left(cpu, resolved, |v| rol(v, carry_in))
        }
        RolA => {
            let carry_in = cpu.regs.cc.carry();
            reg_a_left(cpu, |v| rol(v, carry_in))
        }
        RolB => {
            let carry_in = cpu.regs.cc.carry();
            reg_b_left(cpu, |v| rol(v, carry_in))
        }

        Lsr => mem_right(cpu, resolved, lsr),
        LsrA => reg_a_right(cpu, lsr),
        LsrB => reg_b_right(cpu, lsr),

        Asr => mem_right(cpu, resolved, asr),
        AsrA => reg_a_right(cpu, asr),
        AsrB => reg_b_right(cpu, asr),

        Ror => {
            let carry_in = cpu.regs.cc.carry();
            mem_right(cpu, resolved, |v| ror(v, carry_in))
        }
        RorA => {
            let carry_in = cpu.regs.cc.carry();
            reg_a_right(cpu, |v| ror(v, carry_in))
        }
        RorB => {
            let carry_in = cpu.regs.cc.carry();
            reg_b_right(cpu, |v| ror(v, carry_in))
        }

        _ => return None,
    }
    Some(0)
}

fn mem_left<M: Memory>(cpu: &mut Cpu<M>, resolved: Resolved, op: impl Fn(u8) -> (u8, bool)) {
    let addr = resolved.address();
    let (r, c) = op(cpu.memory.read_byte(addr));
    cpu.regs.cc.update_shift_left8(r, c);
    cpu.memory.write_byte(addr, r);
}
fn mem_right<M: Memory>(cpu: &mut Cpu<M>, resolved: Resolved, op: impl Fn(u8) -> (u8, bool)) {
    let addr = resolved.address();
    let (r, c) = op(cpu.memory.read_byte(addr));
    cpu.regs.cc.update_shift_right8(r, c);
    cpu.memory.write_byte(addr, r);
}
fn reg_a_left<M: Memory>(cpu: &mut Cpu<M>, op: impl Fn(u8) -> (u8, bool)) {
    let (r, c) = op(cpu.regs.a());
    cpu.regs.cc.update_shift_left8(r, c);
    cpu.regs.set_a(r);
}
fn reg_b_left<M: Memory>(cpu: &mut Cpu<M>, op: impl Fn(u8) -> (u8, bool)) {
    let (r, c) = op(cpu.regs.b());
    cpu.regs.cc.update_shift_left8(r, c);
    cpu.regs.set_b(r);
}
fn reg_a_right<M: Memory>(cpu: &mut Cpu<M>, op: impl Fn(u8) -> (u8, bool)) {
    let (r, c) = op(cpu.regs.a());
    cpu.regs.cc.update_shift_right8(r, c);
    cpu.regs.set_a(r);
}
fn reg_b_right<M: Memory>(cpu: &mut Cpu<M>, op: impl Fn(u8) -> (u8, bool)) {
    let (r, c) = op(cpu.regs.b());
    cpu.regs.cc.update_shift_right8(r, c);
    cpu.regs.set_b(r);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FlatMemory;

    fn cpu() -> Cpu<FlatMemory> {
        Cpu::new(FlatMemory::new())
    }

    #[test]
    fn asla_shifts_bit7_into_carry() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x80);
        try_handle(AslA, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x00);
        assert!(cpu.regs.cc.carry());
        assert!(cpu.regs.cc.zero());
    }

    #[test]
    fn rola_folds_prior_carry_into_bit0() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x01);
        cpu.regs.cc.set_carry(true);
        try_handle(RolA, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x03);
        assert!(!cpu.regs.cc.carry());
    }

    #[test]
    fn asra_preserves_sign_bit() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x81);
        try_handle(AsrA, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0xC0);
        assert!(cpu.regs.cc.carry());
    }

    #[test]
    fn lsr_memory_clears_bit7() {
        let mut cpu = cpu();
        cpu.memory.write_byte(0x4000, 0x81);
        try_handle(Lsr, Resolved::Address(0x4000), &mut cpu);
        assert_eq!(cpu.memory.read_byte(0x4000), 0x40);
        assert!(cpu.regs.cc.carry());
    }

    #[test]
    fn rorb_folds_prior_carry_into_bit7() {
        let mut cpu = cpu();
        cpu.regs.set_b(0x01);
        cpu.regs.cc.set_carry(true);
        try_handle(RorB, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.b(), 0x80);
        assert!(cpu.regs.cc.carry());
    }
}
