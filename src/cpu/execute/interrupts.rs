/*!
interrupts.rs - SWI/SWI2/SWI3, RTI, CWAI, and the NMI/FIRQ/IRQ service
routine `service_pending` that `dispatch.rs` polls at every instruction
boundary.

SWI pushes the full 12-byte machine state with E=1 and masks both I and
F; SWI2/SWI3 push the same frame but leave the mask bits alone (their
only effect is entering a distinct vector, commonly used for OS/debugger
hooks rather than genuine interrupt handling). RTI is the mirror of
whichever push happened: it always pulls CC first, and only pulls the
rest of the frame if CC's E bit says a full frame is there - an
interrupt that stacked just CC+PC (FIRQ) leaves the pulled CC's E bit
clear, so `RTI` naturally takes the short path back.

CWAI masks CC with its operand, sets E, pushes the full frame, and then
waits; the pending interrupt that eventually wakes it vectors directly
without pushing again, since the frame is already on the stack.
*/

use super::read8;
use crate::cpu::addressing::Resolved;
use crate::cpu::table::Mnemonic::{self, *};
use crate::cpu::{Cpu, VEC_FIRQ, VEC_IRQ, VEC_NMI, VEC_SWI, VEC_SWI2, VEC_SWI3};
use crate::memory::Memory;

const COST_NMI: u32 = 19;
const COST_IRQ: u32 = 19;
const COST_FIRQ: u32 = 10;

pub(crate) fn try_handle<M: Memory>(
    mnemonic: Mnemonic,
    resolved: Resolved,
    cpu: &mut Cpu<M>,
) -> Option<u32> {
    match mnemonic {
        Swi => {
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
            cpu.regs.cc.set_irq_mask(true);
            cpu.regs.cc.set_firq_mask(true);
            cpu.regs.set_pc(cpu.memory.read_word(VEC_SWI));
        }
        Swi2 => {
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
            cpu.regs.set_pc(cpu.memory.read_word(VEC_SWI2));
        }
        Swi3 => {
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
            cpu.regs.set_pc(cpu.memory.read_word(VEC_SWI3));
        }
        Rti => {
            let cc = cpu.pull_byte_s();
            cpu.regs.cc.set_byte(cc);
            if cpu.regs.cc.entire() {
                let a = cpu.pull_byte_s();
                cpu.regs.set_a(a);
                let b = cpu.pull_byte_s();
                cpu.regs.set_b(b);
                let dp = cpu.pull_byte_s();
                cpu.regs.set_dp(dp);
                let x = cpu.pull_word_s();
                cpu.regs.set_x(x);
                let y = cpu.pull_word_s();
                cpu.regs.set_y(y);
                let u = cpu.pull_word_s();
                cpu.regs.set_u(u);
            }
            let pc = cpu.pull_word_s();
            cpu.regs.set_pc(pc);
        }
        Cwai => {
            let mask = read8(cpu, resolved);
            let v = cpu.regs.cc.get_byte() & mask;
            cpu.regs.cc.set_byte(v);
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
            cpu.set_cwai(true);
        }
        Sync => {
            cpu.set_sync(true);
        }

        _ => return None,
    }
    Some(0)
}

/// Service one pending interrupt line, in priority order NMI > FIRQ >
/// IRQ. Returns the cycle cost of the service routine, or `None` if
/// nothing is pending (or everything pending is masked). If the core is
/// parked in CWAI, the frame is already on the stack and this only
/// vectors; otherwise it pushes the frame itself.
pub(crate) fn service_pending<M: Memory>(cpu: &mut Cpu<M>) -> Option<u32> {
    if cpu.take_nmi_pending() {
        if !cpu.is_cwai() {
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
        }
        cpu.set_cwai(false);
        cpu.set_sync(false);
        cpu.regs.cc.set_irq_mask(true);
        cpu.regs.cc.set_firq_mask(true);
        cpu.regs.set_pc(cpu.memory.read_word(VEC_NMI));
        return Some(COST_NMI);
    }

    if cpu.firq_line() && !cpu.regs().cc.firq_mask() {
        if !cpu.is_cwai() {
            cpu.regs.cc.set_entire(false);
            cpu.push_byte_s(cpu.regs.cc.get_byte());
            cpu.push_word_s(cpu.regs.pc());
        }
        cpu.set_cwai(false);
        cpu.set_sync(false);
        cpu.regs.cc.set_irq_mask(true);
        cpu.regs.cc.set_firq_mask(true);
        cpu.regs.set_pc(cpu.memory.read_word(VEC_FIRQ));
        return Some(COST_FIRQ);
    }

    if cpu.irq_line() && !cpu.regs().cc.irq_mask() {
        if !cpu.is_cwai() {
            cpu.regs.cc.set_entire(true);
            cpu.push_entire_state();
        }
        cpu.set_cwai(false);
        cpu.set_sync(false);
        cpu.regs.cc.set_irq_mask(true);
        cpu.regs.set_pc(cpu.memory.read_word(VEC_IRQ));
        return Some(COST_IRQ);
    }

    if cpu.is_sync() && cpu.any_interrupt_line_pending() {
        cpu.set_sync(false);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FlatMemory;

    fn cpu() -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_word(VEC_SWI, 0xB000);
        mem.write_word(VEC_NMI, 0xC000);
        mem.write_word(VEC_IRQ, 0xD000);
        mem.write_word(VEC_FIRQ, 0xE000);
        let mut cpu = Cpu::new(mem);
        cpu.regs.set_s(0x8000);
        cpu
    }

    #[test]
    fn swi_masks_both_interrupts_and_vectors() {
        let mut cpu = cpu();
        try_handle(Swi, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.pc(), 0xB000);
        assert!(cpu.regs.cc.irq_mask());
        assert!(cpu.regs.cc.firq_mask());
        assert!(cpu.regs.cc.entire());
    }

    #[test]
    fn swi_then_rti_round_trips() {
        let mut cpu = cpu();
        cpu.regs.set_a(0x42);
        cpu.regs.set_pc(0x1234);
        try_handle(Swi, Resolved::Immediate8(0), &mut cpu);
        try_handle(Rti, Resolved::Immediate8(0), &mut cpu);
        assert_eq!(cpu.regs.a(), 0x42);
        assert_eq!(cpu.regs.pc(), 0x1234);
    }

    #[test]
    fn firq_service_stacks_only_cc_and_pc() {
        let mut cpu = cpu();
        cpu.regs.set_pc(0x2000);
        cpu.raise_firq(true);
        let cost = service_pending(&mut cpu);
        assert!(cost.is_some());
        assert_eq!(cpu.regs.pc(), 0xE000);
        assert!(!cpu.regs.cc.entire());
    }

    #[test]
    fn masked_irq_is_not_serviced() {
        let mut cpu = cpu();
        cpu.regs.cc.set_irq_mask(true);
        cpu.raise_irq(true);
        assert!(service_pending(&mut cpu).is_none());
    }

    #[test]
    fn nmi_takes_priority_over_firq_and_irq() {
        let mut cpu = cpu();
        cpu.push_byte_s(0); // arm nmi
        cpu.raise_nmi();
        cpu.raise_firq(true);
        cpu.raise_irq(true);
        let cost = service_pending(&mut cpu);
        assert!(cost.is_some());
        assert_eq!(cpu.regs.pc(), 0xC000);
    }
}
