/*!
load_store.rs - LDA/STA/LDB/STB/LDD/STD/LDX/STX/LDY/STY/LDU/STU/LDS/STS.

Loads copy the operand into the named register and update N, Z; V is
cleared, C is unaffected. Stores write the register to the resolved
effective address and update the same flags from the stored value
(the 6809 reference specifies stores affect N, Z identically to loads).
*/

use super::{read16, read8};
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
        Lda => {
            let v = read8(cpu, resolved);
            cpu.regs.set_a(v);
            cpu.regs.cc.update_nz_logical8(v);
        }
        Ldb => {
            let v = read8(cpu, resolved);
            cpu.regs.set_b(v);
            cpu.regs.cc.update_nz_logical8(v);
        }
        Ldd => {
            let v = read16(cpu, resolved);
            cpu.regs.set_d(v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Ldx => {
            let v = read16(cpu, resolved);
            cpu.regs.set_x(v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Ldy => {
            let v = read16(cpu, resolved);
            cpu.regs.set_y(v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Ldu => {
            let v = read16(cpu, resolved);
            cpu.regs.set_u(v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Lds => {
            let v = read16(cpu, resolved);
            cpu.regs.set_s(v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
            cpu.arm_nmi();
        }

        Sta => {
            let addr = resolved.address();
            let v = cpu.regs.a();
            cpu.memory.write_byte(addr, v);
            cpu.regs.cc.update_nz_logical8(v);
        }
        Stb => {
            let addr = resolved.address();
            let v = cpu.regs.b();
            cpu.memory.write_byte(addr, v);
            cpu.regs.cc.update_nz_logical8(v);
        }
        Std => {
            let addr = resolved.address();
            let v = cpu.regs.d();
            cpu.memory.write_word(addr, v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Stx => {
            let addr = resolved.address();
            let v = cpu.regs.x();
            cpu.memory.write_word(addr, v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Sty => {
            let addr = resolved.address();
            let v = cpu.regs.y();
            cpu.memory.write_word(addr, v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Stu => {
            let addr = resolved.address();
            let v = cpu.regs.u();
            cpu.memory.write_word(addr, v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }
        Sts => {
            let addr = resolved.address();
            let v = cpu.regs.s();
            cpu.memory.write_word(addr, v);
            cpu.regs.cc.update_nz16(v);
            cpu.regs.cc.set_overflow(false);
        }

        _ => return None,
    }
    Some(0)
}
