/*!
logic.rs - ANDA/B, ORA/B, EORA/B, BITA/B, ANDCC, ORCC, and the one's
complement family COM/COMA/COMB.

AND/OR/EOR update N, Z, clear V, and leave C unaffected. BIT performs
the AND but discards the result, same flag treatment. COM sets C
unconditionally (the 6809 reference defines one's complement as always
setting carry) alongside N, Z from the result and V cleared. ANDCC and
ORCC operate directly on the raw condition-code byte rather than
through the named-flag helpers, since they mask the whole register
including I/F/E which the named helpers don't touch individually here.
*/

use super::read8;
use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::Cpu;
use crate::memory::Memory;

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    match mnemonic {
        Anda => {
            let r = cpu.regs.a() & read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_a(r);
        }
        Andb => {
            let r = cpu.regs.b() & read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_b(r);
        }
        Ora => {
            let r = cpu.regs.a() | read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_a(r);
        }
        Orb => {
            let r = cpu.regs.b() | read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_b(r);
        }
        Eora => {
            let r = cpu.regs.a() ^ read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_a(r);
        }
        Eorb => {
            let r = cpu.regs.b() ^ read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.set_b(r);
        }
        Bita => {
            let r = cpu.regs.a() & read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
        }
        Bitb => {
            let r = cpu.regs.b() & read8(cpu, resolved);
            cpu.regs.cc.update_nz_logical8(r);
        }
        Andcc => {
            let mask = read8(cpu, resolved);
            let v = cpu.regs.cc.get_byte() & mask;
            cpu.regs.cc.set_byte(v);
        }
        Orcc => {
            let mask = read8(cpu, resolved);
            let v = cpu.regs.cc.get_byte() | mask;
            cpu.regs.cc.set_byte(v);
        }

        Com => {
            let addr = resolved.address();
            let r = !cpu.memory.read_byte(addr);
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.cc.set_carry(true);
            cpu.memory.write_byte(addr, r);
        }
        ComA => {
            let r = !cpu.regs.a();
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.cc.set_carry(true);
            cpu.regs.set_a(r);
        }
        ComB => {
            let r = !cpu.regs.b();
            cpu.regs.cc.update_nz_logical8(r);
            cpu.regs.cc.set_carry(true);
            cpu.regs.set_b(r);
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
    fn anda_clears_v_leaves_c() {
        let mut cpu = cpu();
        cpu.regs.set_a(0xFF);
        cpu.regs.cc.set_overflow(true);
        cpu.regs.cc.set_carry(true);
        try_handle(Anda, Resolved::Immediate8(0x0F), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x0F);
        assert!(!cpu.regs.cc.overflow());
        assert!(cpu.regs.cc.carry());
    }

    #[test]
    fn bita_discards_result() {
        let mut cpu = cpu();
        cpu.regs.set_a(0xF0);
        try_handle(Bita, Resolved::Immediate8(0x0F), &mut cpu);
        assert_eq!(cpu.regs.a(), 0xF0);
        assert!(cpu.regs.cc.zero());
    }

    #[test]
    fn coma_always_sets_carry() {
        let mut cpu = cpu();
        cpu.regs.set_a(0xFF);
        try_handle(ComA, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x00);
        assert!(cpu.regs.cc.carry());
        assert!(cpu.regs.cc.zero());
    }

    #[test]
    fn andcc_masks_interrupt_bits() {
        let mut cpu = cpu();
        cpu.regs.cc.set_byte(0xFF);
        try_handle(Andcc, Resolved::Immediate8(!crate::cpu::cc::IRQ_MASK), &mut cpu);
        assert!(!cpu.regs.cc.irq_mask());
        assert!(cpu.regs.cc.carry());
    }

    #[test]
    fn orcc_sets_firq_mask() {
        let mut cpu = cpu();
        cpu.regs.cc.set_byte(0x00);
        try_handle(Orcc, Resolved::Immediate8(crate::cpu::cc::FIRQ_MASK), &mut cpu);
        assert!(cpu.regs.cc.firq_mask());
    }
}
