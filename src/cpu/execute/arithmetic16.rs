/*!
arithmetic16.rs - 16-bit arithmetic: ADDD, SUBD, and the compare family
(CMPX/CMPY/CMPU/CMPS/CMPD) over the index/stack registers and D. 16-bit
ADD/SUB do not touch H, matching the reference.
*/

use super::read16;
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
        Addd => {
            let a = cpu.regs.d();
            let b = read16(cpu, resolved);
            let r = a.wrapping_add(b);
            cpu.regs.cc.update_nzvc_add16(a, b, r);
            cpu.regs.set_d(r);
        }
        Subd => {
            let a = cpu.regs.d();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
            cpu.regs.set_d(r);
        }
        Cmpd => {
            let a = cpu.regs.d();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
        }
        Cmpx => {
            let a = cpu.regs.x();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
        }
        Cmpy => {
            let a = cpu.regs.y();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
        }
        Cmpu => {
            let a = cpu.regs.u();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
        }
        Cmps => {
            let a = cpu.regs.s();
            let b = read16(cpu, resolved);
            let r = a.wrapping_sub(b);
            cpu.regs.cc.update_nzvc_sub16(a, b, r);
        }

        _ => return None,
    }
    Some(0)
}
