/*!
misc.rs - the catch-all family: NOP, MUL, ABX, DAA, and the
load-effective-address group LEAX/LEAY/LEAS/LEAU.

LEAX/LEAY set Z from the computed address and leave N, V, C alone
(the reference's rationale: these are address-generation instructions
repurposed from the indexed addressing unit, not arithmetic, so only Z
is meaningful - it's commonly used to test "did this index wrap to
zero"). LEAS/LEAU affect no flags at all, but since they can target S
they still arm the NMI edge like any other write to that register.
*/

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
        Nop => {}

        Abx => {
            let x = cpu.regs.x().wrapping_add(cpu.regs.b() as u16);
            cpu.regs.set_x(x);
        }

        Mul => {
            let result = cpu.regs.a() as u16 * cpu.regs.b() as u16;
            cpu.regs.cc.set_zero(result == 0);
            cpu.regs.cc.set_carry(result & 0x0080 != 0);
            cpu.regs.set_d(result);
        }

        Daa => {
            let a = cpu.regs.a();
            let h = cpu.regs.cc.half_carry();
            let c = cpu.regs.cc.carry();
            let lsn = a & 0x0F;
            let msn = (a >> 4) & 0x0F;

            let mut correction = 0u8;
            let mut carry_out = c;
            if h || lsn > 9 {
                correction |= 0x06;
            }
            if c || msn > 9 || (msn >= 9 && lsn > 9) {
                correction |= 0x60;
                carry_out = true;
            }

            let result = a.wrapping_add(correction);
            cpu.regs.cc.update_nz8(result);
            cpu.regs.cc.set_carry(carry_out);
            cpu.regs.set_a(result);
        }

        Leax => {
            let ea = resolved.address();
            cpu.regs.cc.set_zero(ea == 0);
            cpu.regs.set_x(ea);
        }
        Leay => {
            let ea = resolved.address();
            cpu.regs.cc.set_zero(ea == 0);
            cpu.regs.set_y(ea);
        }
        Leas => {
            let ea = resolved.address();
            cpu.regs.set_s(ea);
            cpu.arm_nmi();
        }
        Leau => {
            let ea = resolved.address();
            cpu.regs.set_u(ea);
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
    fn mul_produces_16bit_product_and_carry_from_bit7() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x0C);
        cpu.regs.set_b(0x0A);
        try_handle(Mul, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.d(), 0x0078);
        assert!(!cpu.regs.cc.carry());
        assert!(!cpu.regs.cc.zero());
    }

    #[test]
    fn mul_by_zero_sets_zero_flag() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x00);
        cpu.regs.set_b(0xFF);
        try_handle(Mul, Resolved::Immediate8(0), &mut cpu);
        assert!(cpu.regs.cc.zero());
    }

    #[test]
    fn abx_adds_unsigned_b_into_x() {
        let mut cpu = cpu();
        cpu.regs.set_x(0x1000);
        cpu.regs.set_b(0xFF);
        try_handle(Abx, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.x(), 0x10FF);
    }

    #[test]
    fn daa_adjusts_after_bcd_addition() {
        // 0x09 + 0x01 = 0x0A in binary; DAA should correct to 0x10.
        let mut cpu = cpu();
        cpu.regs.set_a(0x0A);
        try_handle(Daa, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x10);
    }

    #[test]
    fn leax_sets_zero_on_zero_address_only() {
        let mut cpu = cpu();
        try_handle(Leax, Resolved::Address(0x0000), &mut cpu);
        assert_eq!(cpu.regs.x(), 0x0000);
        assert!(cpu.regs.cc.zero());
    }

    #[test]
    fn leas_arms_nmi() {
        let mut cpu = cpu();
        try_handle(Leas, Resolved::Address(0x9000), &mut cpu);
        cpu.raise_nmi();
        assert!(cpu.is_nmi_pending());
    }
}
