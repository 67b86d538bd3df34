/*!
dispatch.rs - single-step orchestration.

Overview
========
`step` is the five-stage pipeline the core performs once per call:

  1. Service a pending interrupt if one is latched and unmasked (NMI >
     FIRQ > IRQ), or resume from CWAI/SYNC if still parked.
  2. Fetch the opcode byte, recognizing the `$10`/`$11` page-2/page-3
     prefixes and folding them into the 16-bit table key `table.rs`
     expects.
  3. Look up the opcode's `OpEntry`; an `Illegal` mnemonic becomes
     `CoreError::IllegalOpcode`.
  4. Resolve the addressing mode to a `Resolved` operand/EA, charging
     whatever extra cycles that mode itself costs.
  5. Hand the mnemonic and resolved operand to `execute::dispatch`,
     which charges any further surcharge (a taken long branch, CWAI's
     own push, etc).

The return value is the total cycles this step consumed; callers that
need a cycle-accurate run loop call `step` in a loop (`Cpu::run` does
exactly this).
*/

use crate::cpu::addressing::{self, Resolved};
use crate::cpu::execute;
use crate::cpu::execute::interrupts::service_pending;
use crate::cpu::table::{AddrMode, Mnemonic, OPCODES, PAGE2, PAGE3};
use crate::cpu::Cpu;
use crate::error::{CoreError, CoreResult};
use crate::memory::Memory;

const PAGE2_PREFIX: u8 = 0x10;
const PAGE3_PREFIX: u8 = 0x11;

pub(crate) fn step<M: Memory>(cpu: &mut Cpu<M>) -> CoreResult<u32> {
    if let Some(cost) = service_pending(cpu) {
        cpu.cycles += cost as u64;
        return Ok(cost);
    }

    if cpu.is_cwai() || cpu.is_sync() {
        // Parked waiting for an interrupt line; burn a cycle without
        // fetching the next opcode.
        cpu.cycles += 1;
        return Ok(1);
    }

    let pc_before = cpu.regs().pc();
    let first = addressing::fetch_byte(cpu);

    let (key, bytes) = match first {
        PAGE2_PREFIX => {
            let op = addressing::fetch_byte(cpu);
            (PAGE2 | op as u16, [first, op])
        }
        PAGE3_PREFIX => {
            let op = addressing::fetch_byte(cpu);
            (PAGE3 | op as u16, [first, op])
        }
        _ => (first as u16, [first, 0]),
    };

    let entry = OPCODES[key as usize];
    if matches!(entry.mnemonic, Mnemonic::Illegal) {
        return Err(CoreError::IllegalOpcode {
            pc: pc_before,
            bytes,
        });
    }

    #[cfg(feature = "trace")]
    {
        let cycles_so_far = cpu.cycles;
        let regs = *cpu.regs();
        cpu.emit_trace(crate::cpu::TraceEvent {
            pc: pc_before,
            opcode_bytes: bytes,
            mnemonic: entry.mnemonic,
            regs,
            cycles_so_far,
        });
        log::trace!(
            "pc={:04X} key={:04X} mnemonic={:?}",
            pc_before,
            key,
            entry.mnemonic
        );
    }

    let (resolved, addr_extra) = resolve(cpu, entry.mode)?;

    let handler_extra = execute::dispatch(entry.mnemonic, resolved, cpu)?;
    let total = entry.cycles + addr_extra + handler_extra;
    cpu.cycles += total as u64;

    Ok(total)
}

fn resolve<M: Memory>(cpu: &mut Cpu<M>, mode: AddrMode) -> CoreResult<(Resolved, u32)> {
    Ok(match mode {
        AddrMode::Inherent => (Resolved::Immediate8(0), 0),
        AddrMode::Immediate8 => {
            let v = addressing::fetch_byte(cpu);
            (Resolved::Immediate8(v), 0)
        }
        AddrMode::Immediate16 => {
            let v = addressing::fetch_word(cpu);
            (Resolved::Immediate16(v), 0)
        }
        AddrMode::Direct => (Resolved::Address(addressing::direct(cpu)), 0),
        AddrMode::Extended => (Resolved::Address(addressing::extended(cpu)), 0),
        AddrMode::Relative8 => (Resolved::Address(addressing::relative8(cpu)), 0),
        AddrMode::Relative16 => (Resolved::Address(addressing::relative16(cpu)), 0),
        AddrMode::Indexed => {
            let (ea, extra) = addressing::indexed(cpu)?;
            (Resolved::Address(ea), extra)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FlatMemory;

    fn cpu_with(prg: &[u8]) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(0x0000, prg);
        let mut cpu = Cpu::new(mem);
        cpu.regs.set_pc(0x0000);
        cpu
    }

    #[test]
    fn lda_immediate_runs_end_to_end() {
        let mut cpu = cpu_with(&[0x86, 0x42]); // LDA #$42
        let cycles = step(&mut cpu).unwrap();
        assert_eq!(cpu.regs().a(), 0x42);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.regs().pc(), 2);
    }

    #[test]
    fn illegal_opcode_is_reported_with_pc_and_bytes() {
        let mut cpu = cpu_with(&[0x01]); // unmapped page-0 slot
        let err = step(&mut cpu).unwrap_err();
        match err {
            CoreError::IllegalOpcode { pc, bytes } => {
                assert_eq!(pc, 0);
                assert_eq!(bytes, [0x01, 0]);
            }
            _ => panic!("expected IllegalOpcode"),
        }
    }

    #[test]
    fn page2_prefixed_opcode_decodes_ldy() {
        let mut cpu = cpu_with(&[0x10, 0x8E, 0x12, 0x34]); // LDY #$1234
        step(&mut cpu).unwrap();
        assert_eq!(cpu.regs().y(), 0x1234);
    }

    #[test]
    fn taken_long_branch_charges_surcharge_cycle() {
        let mut cpu = cpu_with(&[0x10, 0x27, 0x00, 0x05]); // LBEQ +5
        cpu.regs.cc.set_zero(true);
        let cycles = step(&mut cpu).unwrap();
        assert_eq!(cycles, 6); // base 5 + 1 taken surcharge
    }

    #[test]
    fn irq_is_serviced_before_next_opcode_fetch() {
        let mut cpu = cpu_with(&[0x86, 0x42]); // LDA #$42, never reached
        cpu.memory.write_word(crate::cpu::VEC_IRQ, 0x9000);
        cpu.regs.cc.set_irq_mask(false);
        cpu.regs.set_s(0x8000);
        cpu.raise_irq(true);
        step(&mut cpu).unwrap();
        assert_eq!(cpu.regs().pc(), 0x9000);
        assert_eq!(cpu.regs().a(), 0x00);
    }

    // ---- multi-instruction end-to-end scenarios ----

    fn run_at(prg: &[u8], start: u16, steps: usize) -> Cpu<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(start, prg);
        let mut cpu = Cpu::new(mem);
        cpu.regs.set_pc(start);
        for _ in 0..steps {
            step(&mut cpu).unwrap();
        }
        cpu
    }

    #[test]
    fn signed_overflow_on_suba_sequence() {
        // LDA #$80; SUBA #$01
        let cpu = run_at(&[0x86, 0x80, 0x80, 0x01], 0x1000, 2);
        assert_eq!(cpu.regs().a(), 0x7F);
        assert!(!cpu.regs().cc.negative());
        assert!(!cpu.regs().cc.zero());
        assert!(cpu.regs().cc.overflow());
        assert!(!cpu.regs().cc.carry());
    }

    #[test]
    fn half_carry_on_adda_sequence() {
        // LDA #$0F; ADDA #$01
        let cpu = run_at(&[0x86, 0x0F, 0x8B, 0x01], 0x1000, 2);
        assert_eq!(cpu.regs().a(), 0x10);
        assert!(cpu.regs().cc.half_carry());
        assert!(!cpu.regs().cc.negative());
        assert!(!cpu.regs().cc.zero());
        assert!(!cpu.regs().cc.overflow());
        assert!(!cpu.regs().cc.carry());
    }

    #[test]
    fn carry_wrap_on_adda_sequence() {
        // LDA #$FF; ADDA #$01
        let cpu = run_at(&[0x86, 0xFF, 0x8B, 0x01], 0x1000, 2);
        assert_eq!(cpu.regs().a(), 0x00);
        assert!(cpu.regs().cc.zero());
        assert!(cpu.regs().cc.overflow());
        assert!(cpu.regs().cc.carry());
    }

    #[test]
    fn tfr_16bit_source_into_d_sequence() {
        // LDY #$1234; TFR Y,D
        let cpu = run_at(&[0x10, 0x8E, 0x12, 0x34, 0x1F, 0x20], 0x4000, 2);
        assert_eq!(cpu.regs().d(), 0x1234);
    }

    #[test]
    fn stack_lifo_of_d_sequence() {
        // LDD #$1234; PSHS D; LDD #$ABCD; PSHS D; LDD #$5432; PULS D; PULS D
        let prg = [
            0xCC, 0x12, 0x34, // LDD #$1234
            0x34, 0x06, // PSHS D
            0xCC, 0xAB, 0xCD, // LDD #$ABCD
            0x34, 0x06, // PSHS D
            0xCC, 0x54, 0x32, // LDD #$5432
            0x35, 0x06, // PULS D -> D=$ABCD
            0x35, 0x06, // PULS D -> D=$1234
        ];
        let mut mem = FlatMemory::new();
        mem.load(0x4000, &prg);
        let mut cpu = Cpu::new(mem);
        cpu.regs.set_pc(0x4000);
        cpu.regs.set_s(0x8000);
        let s_initial = cpu.regs().s();

        for _ in 0..6 {
            step(&mut cpu).unwrap();
        }
        assert_eq!(cpu.regs().d(), 0xABCD);

        step(&mut cpu).unwrap();
        assert_eq!(cpu.regs().d(), 0x1234);
        assert_eq!(cpu.regs().s(), s_initial);
    }

    #[test]
    fn inc_overflow_boundary_sequence() {
        let mut mem = FlatMemory::new();
        mem.write_byte(0x4500, 0x7F);
        mem.load(0x1000, &[0x7C, 0x45, 0x00]); // INC $4500
        let mut cpu = Cpu::new(mem);
        cpu.regs.set_pc(0x1000);
        step(&mut cpu).unwrap();
        assert_eq!(cpu.memory_mut().read_byte(0x4500), 0x80);
        assert!(cpu.regs().cc.negative());
        assert!(cpu.regs().cc.overflow());
        assert!(!cpu.regs().cc.zero());
    }
}
