/*!
branches.rs - short/long conditional branches, BSR/LBSR, JMP/JSR/RTS.

Addressing has already computed the branch target (relative8/relative16
resolve to the post-fetch PC plus the sign-extended displacement) and
charged the table's base cycle cost. A conditional branch's handler
here only decides whether to actually move PC there, and - for the long
conditional forms - charges the extra cycle the reference specifies
when a long branch is taken (`LBRA` is unconditional so it never pays
this surcharge; short branches don't pay it either, matching the
reference's cycle table).
*/

use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::Cpu;
use crate::memory::Memory;

fn condition<M: Memory>(mnemonic: Mnemonic, cpu: &Cpu<M>) -> Option<bool> {
    let cc = &cpu.regs().cc;
    let (n, z, v, c) = (cc.negative(), cc.zero(), cc.overflow(), cc.carry());
    Some(match mnemonic {
        Bra | Lbra => true,
        Brn | Lbrn => false,
        Bhi | Lbhi => !c && !z,
        Bls | Lbls => c || z,
        Bcc | Lbcc => !c,
        Bcs | Lbcs => c,
        Bne | Lbne => !z,
        Beq | Lbeq => z,
        Bvc | Lbvc => !v,
        Bvs | Lbvs => v,
        Bpl | Lbpl => !n,
        Bmi | Lbmi => n,
        Bge | Lbge => n == v,
        Blt | Lblt => n != v,
        Bgt | Lbgt => !z && (n == v),
        Ble | Lble => z || (n != v),
        _ => return None,
    })
}

fn is_long(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Lbra | Lbrn
            | Lbhi
            | Lbls
            | Lbcc
            | Lbcs
            | Lbne
            | Lbeq
            | Lbvc
            | Lbvs
            | Lbpl
            | Lbmi
            | Lbge
            | Lblt
            | Lbgt
            | Lble
    )
}

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    if let Some(taken) = condition(mnemonic, cpu) {
        if taken {
            cpu.regs.set_pc(resolved.address());
        }
        // LBRA is unconditional (always "taken") but pays no surcharge;
        // only the conditional long branches do.
        let surcharge = if taken && is_long(mnemonic) && !matches!(mnemonic, Lbra) {
            1
        } else {
            0
        };
        return Some(surcharge);
    }

    match mnemonic {
        Bsr | Lbsr => {
            let target = resolved.address();
            cpu.push_word_s(cpu.regs.pc());
            cpu.regs.set_pc(target);
        }
        Jmp => {
            cpu.regs.set_pc(resolved.address());
        }
        Jsr => {
            let target = resolved.address();
            cpu.push_word_s(cpu.regs.pc());
            cpu.regs.set_pc(target);
        }
        Rts => {
            let pc = cpu.pull_word_s();
            cpu.regs.set_pc(pc);
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
        let mut cpu = Cpu::new(FlatMemory::new());
        cpu.regs.set_s(0x8000);
        cpu
    }

    #[test]
    fn beq_jumps_when_zero_set() {
        let mut cpu = cpu();
        cpu.regs.cc.set_zero(true);
        cpu.regs.set_pc(0x1000);
        try_handle(Beq, Resolved::Address(0x2000), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0x2000);
    }

    #[test]
    fn beq_does_not_jump_when_zero_clear() {
        let mut cpu = cpu();
        cpu.regs.cc.set_zero(false);
        cpu.regs.set_pc(0x1000);
        try_handle(Beq, Resolved::Address(0x2000), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0x1000);
    }

    #[test]
    fn lbeq_taken_pays_one_cycle_surcharge() {
        let mut cpu = cpu();
        cpu.regs.cc.set_zero(true);
        let extra = try_handle(Lbeq, Resolved::Address(0x3000), &mut cpu).unwrap();
        assert_eq!(extra, 1);
    }

    #[test]
    fn lbra_unconditional_pays_no_surcharge() {
        let mut cpu = cpu();
        let extra = try_handle(Lbra, Resolved::Address(0x3000), &mut cpu).unwrap();
        assert_eq!(extra, 0);
        assert_eq!(cpu.regs.pc(), 0x3000);
    }

    #[test]
    fn bsr_pushes_return_address_and_jumps() {
        let mut cpu = cpu();
        cpu.regs.set_pc(0x1234);
        try_handle(Bsr, Resolved::Address(0x5000), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0x5000);
        assert_eq!(cpu.pull_word_s(), 0x1234);
    }

    #[test]
    fn rts_pops_pc() {
        let mut cpu = cpu();
        cpu.push_word_s(0x9999);
        try_handle(Rts, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0x9999);
    }

    #[test]
    fn bgt_requires_z_clear_and_n_eq_v() {
        let mut cpu = cpu();
        cpu.regs.cc.set_zero(false);
        cpu.regs.cc.set_negative(true);
        cpu.regs.cc.set_overflow(true);
        cpu.regs.set_pc(0x1000);
        try_handle(Bgt, Resolved::Address(0x2000), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0x2000);
    }
}
