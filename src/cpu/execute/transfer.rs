/*!
transfer.rs - TFR, EXG (register-to-register move/swap driven by a
post-byte nibble pair) and SEX (sign-extend B into the D accumulator).

TFR/EXG register codes: 0=D, 1=X, 2=Y, 3=U, 4=S, 5=PC, 8=A, 9=B, 10=CC,
11=DP (6,7,12-15 are reserved and treated as DP here, matching the
conservative "don't panic on garbage code" stance taken elsewhere in
this core). Moving an 8-bit register into a 16-bit one sets the high
byte to `$FF`; moving a 16-bit register into an 8-bit one keeps only
the low byte - both directions are captured by widening every read to
16 bits (`$FF` high byte for narrow sources) and truncating every write
to the destination's actual width.
*/

use super::read8;
use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::Cpu;
use crate::memory::Memory;

const REG_S: u8 = 4;

fn get_as_u16<M: Memory>(cpu: &Cpu<M>, code: u8) -> u16 {
    match code & 0x0F {
        0 => cpu.regs().d(),
        1 => cpu.regs().x(),
        2 => cpu.regs().y(),
        3 => cpu.regs().u(),
        4 => cpu.regs().s(),
        5 => cpu.regs().pc(),
        8 => 0xFF00 | cpu.regs().a() as u16,
        9 => 0xFF00 | cpu.regs().b() as u16,
        10 => 0xFF00 | cpu.regs().cc.get_byte() as u16,
        11 => 0xFF00 | cpu.regs().dp() as u16,
        _ => 0xFF00 | cpu.regs().dp() as u16,
    }
}

fn set_from_u16<M: Memory>(cpu: &mut Cpu<M>, code: u8, value: u16) {
    match code & 0x0F {
        0 => cpu.regs.set_d(value),
        1 => cpu.regs.set_x(value),
        2 => cpu.regs.set_y(value),
        3 => cpu.regs.set_u(value),
        4 => cpu.regs.set_s(value),
        5 => cpu.regs.set_pc(value),
        8 => cpu.regs.set_a(value as u8),
        9 => cpu.regs.set_b(value as u8),
        10 => cpu.regs.cc.set_byte(value as u8),
        11 => cpu.regs.set_dp(value as u8),
        _ => cpu.regs.set_dp(value as u8),
    }
}

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    match mnemonic {
        Tfr => {
            let postbyte = read8(cpu, resolved);
            let src = postbyte >> 4;
            let dst = postbyte & 0x0F;
            let v = get_as_u16(cpu, src);
            set_from_u16(cpu, dst, v);
            if dst & 0x0F == REG_S {
                cpu.arm_nmi();
            }
        }
        Exg => {
            let postbyte = read8(cpu, resolved);
            let ra = postbyte >> 4;
            let rb = postbyte & 0x0F;
            let va = get_as_u16(cpu, ra);
            let vb = get_as_u16(cpu, rb);
            set_from_u16(cpu, ra, vb);
            set_from_u16(cpu, rb, va);
            if ra & 0x0F == REG_S || rb & 0x0F == REG_S {
                cpu.arm_nmi();
            }
        }
        Sex => {
            let b = cpu.regs.b();
            let a = if b & 0x80 != 0 { 0xFF } else { 0x00 };
            cpu.regs.set_a(a);
            cpu.regs.cc.update_nz16(cpu.regs.d());
        }

        _ => return None,
    }
    Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FlatMemory;

    fn cpu() -> Cpu<FlatMemory> {
        Cpu::new(FlatMemory::new())
    }

    #[test]
    fn tfr_8bit_into_16bit_widens_with_ff_high_byte() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x42);
        // src=A(8), dst=X(1)
        try_handle(Tfr, Resolved::Immediate8(0x81), &mut cpu);
        assert_eq!(cpu.regs.x(), 0xFF42);
    }

    #[test]
    fn tfr_16bit_into_8bit_truncates_to_low_byte() {
        let mut cpu = cpu();
        cpu.regs.set_x(0xBEEF);
        // src=X(1), dst=B(9)
        try_handle(Tfr, Resolved::Immediate8(0x19), &mut cpu);
        assert_eq!(cpu.regs.b(), 0xEF);
    }

    #[test]
    fn tfr_to_s_arms_nmi() {
        let mut cpu = cpu();
        cpu.regs.set_x(0x8000);
        // src=X(1), dst=S(4)
        try_handle(Tfr, Resolved::Immediate8(0x14), &mut cpu);
        cpu.raise_nmi();
        assert!(cpu.is_nmi_pending());
    }

    #[test]
    fn exg_swaps_both_registers() {
        let mut cpu = cpu();
        cpu.regs.set_x(0x1111);
        cpu.regs.set_y(0x2222);
        // ra=X(1), rb=Y(2)
        try_handle(Exg, Resolved::Immediate8(0x12), &mut cpu);
        assert_eq!(cpu.regs.x(), 0x2222);
        assert_eq!(cpu.regs.y(), 0x1111);
    }

    #[test]
    fn sex_sign_extends_negative_b() {
        let mut cpu = cpu();
        cpu.regs.set_b(0x80);
        try_handle(Sex, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0xFF);
        assert!(cpu.regs.cc.negative());
    }

    #[test]
    fn sex_zero_extends_positive_b() {
        let mut cpu = cpu();
        cpu.regs.set_b(0x7F);
        try_handle(Sex, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x00);
        assert!(!cpu.regs.cc.negative());
    }
}
