/*!
table.rs - Opcode metadata table and its const-built static array.

Overview
========
Every 6809 opcode is described once: its mnemonic, the addressing mode
it's paired with, the base cycle count (before any addressing-mode
surcharge or taken-branch bonus), and its nominal instruction length in
bytes (for trace output; indexed mode's dynamic extra bytes are not
counted here since those are only known once the post-byte is decoded).

The table is indexed by a 16-bit key (see `dispatch.rs`): page-0
opcodes use the opcode byte directly, `$10xx` page-2 opcodes use
`0x1000 | opcode`, and `$11xx` page-3 opcodes use `0x1100 | opcode`.
Every slot the real instruction set doesn't populate stays the
`Illegal` sentinel, which `dispatch.rs` turns into `CoreError::IllegalOpcode`.

Cycle and length values are pinned against the reference 6809 opcode
map (the same source this core's flag algebra and addressing-mode
surcharges were pinned against); the per-mode deltas (immediate <
direct/indexed < extended, and the page-2/3 prefix costing one extra
cycle over its page-0 equivalent) follow that table's consistent
pattern.
*/

#![allow(dead_code)]

/// Instruction mnemonics. `Illegal` is the sentinel for unpopulated
/// table slots and is never itself dispatched to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Illegal,

    // Read-modify-write family on a memory operand (direct/indexed/extended).
    Neg,
    Com,
    Lsr,
    Ror,
    Asr,
    Asl,
    Rol,
    Dec,
    Inc,
    Tst,
    Clr,
    Jmp,

    // Read-modify-write family on a specific accumulator (inherent mode).
    // Split from the memory-operand forms above because the same
    // operation on A vs B needs a concrete register, not just an EA.
    NegA,
    NegB,
    ComA,
    ComB,
    LsrA,
    LsrB,
    RorA,
    RorB,
    AsrA,
    AsrB,
    AslA,
    AslB,
    RolA,
    RolB,
    DecA,
    DecB,
    IncA,
    IncB,
    TstA,
    TstB,
    ClrA,
    ClrB,

    // Branches.
    Bra,
    Brn,
    Bhi,
    Bls,
    Bcc,
    Bcs,
    Bne,
    Beq,
    Bvc,
    Bvs,
    Bpl,
    Bmi,
    Bge,
    Blt,
    Bgt,
    Ble,
    Bsr,
    Lbra,
    Lbsr,
    Lbrn,
    Lbhi,
    Lbls,
    Lbcc,
    Lbcs,
    Lbne,
    Lbeq,
    Lbvc,
    Lbvs,
    Lbpl,
    Lbmi,
    Lbge,
    Lblt,
    Lbgt,
    Lble,

    // Misc / control.
    Nop,
    Sync,
    Daa,
    Orcc,
    Andcc,
    Sex,
    Exg,
    Tfr,
    Leax,
    Leay,
    Leas,
    Leau,
    Pshs,
    Puls,
    Pshu,
    Pulu,
    Rts,
    Abx,
    Rti,
    Cwai,
    Mul,
    Swi,
    Swi2,
    Swi3,
    Jsr,

    // 8-bit accumulator ALU.
    Suba,
    Cmpa,
    Sbca,
    Anda,
    Bita,
    Lda,
    Sta,
    Eora,
    Adca,
    Ora,
    Adda,
    Subb,
    Cmpb,
    Sbcb,
    Andb,
    Bitb,
    Ldb,
    Stb,
    Eorb,
    Adcb,
    Orb,
    Addb,

    // 16-bit ALU / load-store.
    Subd,
    Addd,
    Cmpx,
    Cmpy,
    Cmpu,
    Cmps,
    Cmpd,
    Ldx,
    Stx,
    Ldy,
    Sty,
    Ldu,
    Stu,
    Lds,
    Sts,
    Ldd,
    Std,
}

/// Addressing modes. `Immediate8` doubles as the carrier for every
/// "fetch one raw post-byte" instruction (`PSHS`/`PULS`/`PSHU`/`PULU`
/// register masks, `EXG`/`TFR` nibble pairs, `ANDCC`/`ORCC`/`CWAI`
/// masks) since those handlers interpret the fetched byte themselves
/// rather than needing a distinct addressing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Inherent,
    Immediate8,
    Immediate16,
    Direct,
    Extended,
    Indexed,
    Relative8,
    Relative16,
}

/// A single opcode's metadata.
#[derive(Debug, Clone, Copy)]
pub struct OpEntry {
    pub mnemonic: Mnemonic,
    pub mode: AddrMode,
    pub cycles: u32,
    pub length: u8,
}

impl OpEntry {
    const fn new(mnemonic: Mnemonic, mode: AddrMode, cycles: u32, length: u8) -> Self {
        Self {
            mnemonic,
            mode,
            cycles,
            length,
        }
    }

    const fn illegal() -> Self {
        Self::new(Mnemonic::Illegal, AddrMode::Inherent, 0, 1)
    }
}

/// Page-2 opcodes (`$10xx`) are keyed at `0x1000 | opcode`.
pub const PAGE2: u16 = 0x1000;
/// Page-3 opcodes (`$11xx`) are keyed at `0x1100 | opcode`.
pub const PAGE3: u16 = 0x1100;

pub static OPCODES: [OpEntry; 0x1200] = build_table();

const fn build_table() -> [OpEntry; 0x1200] {
    use AddrMode::*;
    use Mnemonic::*;

    let mut t = [OpEntry::illegal(); 0x1200];

    // ---- Page 0: direct-mode RMW family ($00-$0F) ----
    t[0x00] = OpEntry::new(Neg, Direct, 6, 2);
    t[0x03] = OpEntry::new(Com, Direct, 6, 2);
    t[0x04] = OpEntry::new(Lsr, Direct, 6, 2);
    t[0x06] = OpEntry::new(Ror, Direct, 6, 2);
    t[0x07] = OpEntry::new(Asr, Direct, 6, 2);
    t[0x08] = OpEntry::new(Asl, Direct, 6, 2);
    t[0x09] = OpEntry::new(Rol, Direct, 6, 2);
    t[0x0A] = OpEntry::new(Dec, Direct, 6, 2);
    t[0x0C] = OpEntry::new(Inc, Direct, 6, 2);
    t[0x0D] = OpEntry::new(Tst, Direct, 4, 2);
    t[0x0E] = OpEntry::new(Jmp, Direct, 3, 2);
    t[0x0F] = OpEntry::new(Clr, Direct, 6, 2);

    // ---- $10-$1F: prefixes, LBRA/LBSR, misc ----
    t[0x12] = OpEntry::new(Nop, Inherent, 2, 1);
    t[0x13] = OpEntry::new(Sync, Inherent, 2, 1);
    t[0x16] = OpEntry::new(Lbra, Relative16, 5, 3);
    t[0x17] = OpEntry::new(Lbsr, Relative16, 9, 3);
    t[0x19] = OpEntry::new(Daa, Inherent, 2, 1);
    t[0x1A] = OpEntry::new(Orcc, Immediate8, 3, 2);
    t[0x1C] = OpEntry::new(Andcc, Immediate8, 3, 2);
    t[0x1D] = OpEntry::new(Sex, Inherent, 2, 1);
    t[0x1E] = OpEntry::new(Exg, Immediate8, 8, 2);
    t[0x1F] = OpEntry::new(Tfr, Immediate8, 6, 2);

    // ---- $20-$2F: short branches ----
    t[0x20] = OpEntry::new(Bra, Relative8, 3, 2);
    t[0x21] = OpEntry::new(Brn, Relative8, 3, 2);
    t[0x22] = OpEntry::new(Bhi, Relative8, 3, 2);
    t[0x23] = OpEntry::new(Bls, Relative8, 3, 2);
    t[0x24] = OpEntry::new(Bcc, Relative8, 3, 2);
    t[0x25] = OpEntry::new(Bcs, Relative8, 3, 2);
    t[0x26] = OpEntry::new(Bne, Relative8, 3, 2);
    t[0x27] = OpEntry::new(Beq, Relative8, 3, 2);
    t[0x28] = OpEntry::new(Bvc, Relative8, 3, 2);
    t[0x29] = OpEntry::new(Bvs, Relative8, 3, 2);
    t[0x2A] = OpEntry::new(Bpl, Relative8, 3, 2);
    t[0x2B] = OpEntry::new(Bmi, Relative8, 3, 2);
    t[0x2C] = OpEntry::new(Bge, Relative8, 3, 2);
    t[0x2D] = OpEntry::new(Blt, Relative8, 3, 2);
    t[0x2E] = OpEntry::new(Bgt, Relative8, 3, 2);
    t[0x2F] = OpEntry::new(Ble, Relative8, 3, 2);

    // ---- $30-$3F: LEA, stack ops, system ----
    t[0x30] = OpEntry::new(Leax, Indexed, 4, 2);
    t[0x31] = OpEntry::new(Leay, Indexed, 4, 2);
    t[0x32] = OpEntry::new(Leas, Indexed, 4, 2);
    t[0x33] = OpEntry::new(Leau, Indexed, 4, 2);
    // Base cost only; stack.rs's handler adds 1 cycle per byte the
    // post-byte mask actually transfers.
    t[0x34] = OpEntry::new(Pshs, Immediate8, 5, 2);
    t[0x35] = OpEntry::new(Puls, Immediate8, 5, 2);
    t[0x36] = OpEntry::new(Pshu, Immediate8, 5, 2);
    t[0x37] = OpEntry::new(Pulu, Immediate8, 5, 2);
    t[0x39] = OpEntry::new(Rts, Inherent, 5, 1);
    t[0x3A] = OpEntry::new(Abx, Inherent, 3, 1);
    t[0x3B] = OpEntry::new(Rti, Inherent, 6, 1);
    t[0x3C] = OpEntry::new(Cwai, Immediate8, 20, 2);
    t[0x3D] = OpEntry::new(Mul, Inherent, 11, 1);
    t[0x3F] = OpEntry::new(Swi, Inherent, 19, 1);

    // ---- $40-$4F: inherent RMW on A ----
    t[0x40] = OpEntry::new(NegA, Inherent, 2, 1);
    t[0x43] = OpEntry::new(ComA, Inherent, 2, 1);
    t[0x44] = OpEntry::new(LsrA, Inherent, 2, 1);
    t[0x46] = OpEntry::new(RorA, Inherent, 2, 1);
    t[0x47] = OpEntry::new(AsrA, Inherent, 2, 1);
    t[0x48] = OpEntry::new(AslA, Inherent, 2, 1);
    t[0x49] = OpEntry::new(RolA, Inherent, 2, 1);
    t[0x4A] = OpEntry::new(DecA, Inherent, 2, 1);
    t[0x4C] = OpEntry::new(IncA, Inherent, 2, 1);
    t[0x4D] = OpEntry::new(TstA, Inherent, 2, 1);
    t[0x4F] = OpEntry::new(ClrA, Inherent, 2, 1);

    // ---- $50-$5F: inherent RMW on B ----
    t[0x50] = OpEntry::new(NegB, Inherent, 2, 1);
    t[0x53] = OpEntry::new(ComB, Inherent, 2, 1);
    t[0x54] = OpEntry::new(LsrB, Inherent, 2, 1);
    t[0x56] = OpEntry::new(RorB, Inherent, 2, 1);
    t[0x57] = OpEntry::new(AsrB, Inherent, 2, 1);
    t[0x58] = OpEntry::new(AslB, Inherent, 2, 1);
    t[0x59] = OpEntry::new(RolB, Inherent, 2, 1);
    t[0x5A] = OpEntry::new(DecB, Inherent, 2, 1);
    t[0x5C] = OpEntry::new(IncB, Inherent, 2, 1);
    t[0x5D] = OpEntry::new(TstB, Inherent, 2, 1);
    t[0x5F] = OpEntry::new(ClrB, Inherent, 2, 1);

    // ---- $60-$6F: indexed RMW ----
    t[0x60] = OpEntry::new(Neg, Indexed, 6, 2);
    t[0x63] = OpEntry::new(Com, Indexed, 6, 2);
    t[0x64] = OpEntry::new(Lsr, Indexed, 6, 2);
    t[0x66] = OpEntry::new(Ror, Indexed, 6, 2);
    t[0x67] = OpEntry::new(Asr, Indexed, 6, 2);
    t[0x68] = OpEntry::new(Asl, Indexed, 6, 2);
    t[0x69] = OpEntry::new(Rol, Indexed, 6, 2);
    t[0x6A] = OpEntry::new(Dec, Indexed, 6, 2);
    t[0x6C] = OpEntry::new(Inc, Indexed, 6, 2);
    t[0x6D] = OpEntry::new(Tst, Indexed, 4, 2);
    t[0x6E] = OpEntry::new(Jmp, Indexed, 3, 2);
    t[0x6F] = OpEntry::new(Clr, Indexed, 6, 2);

    // ---- $70-$7F: extended RMW ----
    t[0x70] = OpEntry::new(Neg, Extended, 7, 3);
    t[0x73] = OpEntry::new(Com, Extended, 7, 3);
    t[0x74] = OpEntry::new(Lsr, Extended, 7, 3);
    t[0x76] = OpEntry::new(Ror, Extended, 7, 3);
    t[0x77] = OpEntry::new(Asr, Extended, 7, 3);
    t[0x78] = OpEntry::new(Asl, Extended, 7, 3);
    t[0x79] = OpEntry::new(Rol, Extended, 7, 3);
    t[0x7A] = OpEntry::new(Dec, Extended, 7, 3);
    t[0x7C] = OpEntry::new(Inc, Extended, 7, 3);
    t[0x7D] = OpEntry::new(Tst, Extended, 5, 3);
    t[0x7E] = OpEntry::new(Jmp, Extended, 4, 3);
    t[0x7F] = OpEntry::new(Clr, Extended, 7, 3);

    // ---- $80-$8F: accumulator-A ALU, immediate; CMPX/BSR/LDX imm ----
    t[0x80] = OpEntry::new(Suba, Immediate8, 2, 2);
    t[0x81] = OpEntry::new(Cmpa, Immediate8, 2, 2);
    t[0x82] = OpEntry::new(Sbca, Immediate8, 2, 2);
    t[0x83] = OpEntry::new(Subd, Immediate16, 4, 3);
    t[0x84] = OpEntry::new(Anda, Immediate8, 2, 2);
    t[0x85] = OpEntry::new(Bita, Immediate8, 2, 2);
    t[0x86] = OpEntry::new(Lda, Immediate8, 2, 2);
    t[0x88] = OpEntry::new(Eora, Immediate8, 2, 2);
    t[0x89] = OpEntry::new(Adca, Immediate8, 2, 2);
    t[0x8A] = OpEntry::new(Ora, Immediate8, 2, 2);
    t[0x8B] = OpEntry::new(Adda, Immediate8, 2, 2);
    t[0x8C] = OpEntry::new(Cmpx, Immediate16, 4, 3);
    t[0x8D] = OpEntry::new(Bsr, Relative8, 7, 2);
    t[0x8E] = OpEntry::new(Ldx, Immediate16, 3, 3);

    // ---- $90-$9F: accumulator-A ALU, direct; CMPX/JSR/LDX/STX direct ----
    t[0x90] = OpEntry::new(Suba, Direct, 4, 2);
    t[0x91] = OpEntry::new(Cmpa, Direct, 4, 2);
    t[0x92] = OpEntry::new(Sbca, Direct, 4, 2);
    t[0x93] = OpEntry::new(Subd, Direct, 6, 2);
    t[0x94] = OpEntry::new(Anda, Direct, 4, 2);
    t[0x95] = OpEntry::new(Bita, Direct, 4, 2);
    t[0x96] = OpEntry::new(Lda, Direct, 4, 2);
    t[0x97] = OpEntry::new(Sta, Direct, 4, 2);
    t[0x98] = OpEntry::new(Eora, Direct, 4, 2);
    t[0x99] = OpEntry::new(Adca, Direct, 4, 2);
    t[0x9A] = OpEntry::new(Ora, Direct, 4, 2);
    t[0x9B] = OpEntry::new(Adda, Direct, 4, 2);
    t[0x9C] = OpEntry::new(Cmpx, Direct, 6, 2);
    t[0x9D] = OpEntry::new(Jsr, Direct, 7, 2);
    t[0x9E] = OpEntry::new(Ldx, Direct, 5, 2);
    t[0x9F] = OpEntry::new(Stx, Direct, 5, 2);

    // ---- $A0-$AF: accumulator-A ALU, indexed ----
    t[0xA0] = OpEntry::new(Suba, Indexed, 4, 2);
    t[0xA1] = OpEntry::new(Cmpa, Indexed, 4, 2);
    t[0xA2] = OpEntry::new(Sbca, Indexed, 4, 2);
    t[0xA3] = OpEntry::new(Subd, Indexed, 6, 2);
    t[0xA4] = OpEntry::new(Anda, Indexed, 4, 2);
    t[0xA5] = OpEntry::new(Bita, Indexed, 4, 2);
    t[0xA6] = OpEntry::new(Lda, Indexed, 4, 2);
    t[0xA7] = OpEntry::new(Sta, Indexed, 4, 2);
    t[0xA8] = OpEntry::new(Eora, Indexed, 4, 2);
    t[0xA9] = OpEntry::new(Adca, Indexed, 4, 2);
    t[0xAA] = OpEntry::new(Ora, Indexed, 4, 2);
    t[0xAB] = OpEntry::new(Adda, Indexed, 4, 2);
    t[0xAC] = OpEntry::new(Cmpx, Indexed, 6, 2);
    t[0xAD] = OpEntry::new(Jsr, Indexed, 7, 2);
    t[0xAE] = OpEntry::new(Ldx, Indexed, 5, 2);
    t[0xAF] = OpEntry::new(Stx, Indexed, 5, 2);

    // ---- $B0-$BF: accumulator-A ALU, extended ----
    t[0xB0] = OpEntry::new(Suba, Extended, 5, 3);
    t[0xB1] = OpEntry::new(Cmpa, Extended, 5, 3);
    t[0xB2] = OpEntry::new(Sbca, Extended, 5, 3);
    t[0xB3] = OpEntry::new(Subd, Extended, 7, 3);
    t[0xB4] = OpEntry::new(Anda, Extended, 5, 3);
    t[0xB5] = OpEntry::new(Bita, Extended, 5, 3);
    t[0xB6] = OpEntry::new(Lda, Extended, 5, 3);
    t[0xB7] = OpEntry::new(Sta, Extended, 5, 3);
    t[0xB8] = OpEntry::new(Eora, Extended, 5, 3);
    t[0xB9] = OpEntry::new(Adca, Extended, 5, 3);
    t[0xBA] = OpEntry::new(Ora, Extended, 5, 3);
    t[0xBB] = OpEntry::new(Adda, Extended, 5, 3);
    t[0xBC] = OpEntry::new(Cmpx, Extended, 7, 3);
    t[0xBD] = OpEntry::new(Jsr, Extended, 8, 3);
    t[0xBE] = OpEntry::new(Ldx, Extended, 6, 3);
    t[0xBF] = OpEntry::new(Stx, Extended, 6, 3);

    // ---- $C0-$CF: accumulator-B ALU, immediate; ADDD/LDD/LDU imm ----
    t[0xC0] = OpEntry::new(Subb, Immediate8, 2, 2);
    t[0xC1] = OpEntry::new(Cmpb, Immediate8, 2, 2);
    t[0xC2] = OpEntry::new(Sbcb, Immediate8, 2, 2);
    t[0xC3] = OpEntry::new(Addd, Immediate16, 4, 3);
    t[0xC4] = OpEntry::new(Andb, Immediate8, 2, 2);
    t[0xC5] = OpEntry::new(Bitb, Immediate8, 2, 2);
    t[0xC6] = OpEntry::new(Ldb, Immediate8, 2, 2);
    t[0xC8] = OpEntry::new(Eorb, Immediate8, 2, 2);
    t[0xC9] = OpEntry::new(Adcb, Immediate8, 2, 2);
    t[0xCA] = OpEntry::new(Orb, Immediate8, 2, 2);
    t[0xCB] = OpEntry::new(Addb, Immediate8, 2, 2);
    t[0xCC] = OpEntry::new(Ldd, Immediate16, 3, 3);
    t[0xCE] = OpEntry::new(Ldu, Immediate16, 3, 3);

    // ---- $D0-$DF: accumulator-B ALU, direct; ADDD/LDD/STD/LDU/STU direct ----
    t[0xD0] = OpEntry::new(Subb, Direct, 4, 2);
    t[0xD1] = OpEntry::new(Cmpb, Direct, 4, 2);
    t[0xD2] = OpEntry::new(Sbcb, Direct, 4, 2);
    t[0xD3] = OpEntry::new(Addd, Direct, 6, 2);
    t[0xD4] = OpEntry::new(Andb, Direct, 4, 2);
    t[0xD5] = OpEntry::new(Bitb, Direct, 4, 2);
    t[0xD6] = OpEntry::new(Ldb, Direct, 4, 2);
    t[0xD7] = OpEntry::new(Stb, Direct, 4, 2);
    t[0xD8] = OpEntry::new(Eorb, Direct, 4, 2);
    t[0xD9] = OpEntry::new(Adcb, Direct, 4, 2);
    t[0xDA] = OpEntry::new(Orb, Direct, 4, 2);
    t[0xDB] = OpEntry::new(Addb, Direct, 4, 2);
    t[0xDC] = OpEntry::new(Ldd, Direct, 5, 2);
    t[0xDD] = OpEntry::new(Std, Direct, 5, 2);
    t[0xDE] = OpEntry::new(Ldu, Direct, 5, 2);
    t[0xDF] = OpEntry::new(Stu, Direct, 5, 2);

    // ---- $E0-$EF: accumulator-B ALU, indexed ----
    t[0xE0] = OpEntry::new(Subb, Indexed, 4, 2);
    t[0xE1] = OpEntry::new(Cmpb, Indexed, 4, 2);
    t[0xE2] = OpEntry::new(Sbcb, Indexed, 4, 2);
    t[0xE3] = OpEntry::new(Addd, Indexed, 6, 2);
    t[0xE4] = OpEntry::new(Andb, Indexed, 4, 2);
    t[0xE5] = OpEntry::new(Bitb, Indexed, 4, 2);
    t[0xE6] = OpEntry::new(Ldb, Indexed, 4, 2);
    t[0xE7] = OpEntry::new(Stb, Indexed, 4, 2);
    t[0xE8] = OpEntry::new(Eorb, Indexed, 4, 2);
    t[0xE9] = OpEntry::new(Adcb, Indexed, 4, 2);
    t[0xEA] = OpEntry::new(Orb, Indexed, 4, 2);
    t[0xEB] = OpEntry::new(Addb, Indexed, 4, 2);
    t[0xEC] = OpEntry::new(Ldd, Indexed, 5, 2);
    t[0xED] = OpEntry::new(Std, Indexed, 5, 2);
    t[0xEE] = OpEntry::new(Ldu, Indexed, 5, 2);
    t[0xEF] = OpEntry::new(Stu, Indexed, 5, 2);

    // ---- $F0-$FF: accumulator-B ALU, extended ----
    t[0xF0] = OpEntry::new(Subb, Extended, 5, 3);
    t[0xF1] = OpEntry::new(Cmpb, Extended, 5, 3);
    t[0xF2] = OpEntry::new(Sbcb, Extended, 5, 3);
    t[0xF3] = OpEntry::new(Addd, Extended, 7, 3);
    t[0xF4] = OpEntry::new(Andb, Extended, 5, 3);
    t[0xF5] = OpEntry::new(Bitb, Extended, 5, 3);
    t[0xF6] = OpEntry::new(Ldb, Extended, 5, 3);
    t[0xF7] = OpEntry::new(Stb, Extended, 5, 3);
    t[0xF8] = OpEntry::new(Eorb, Extended, 5, 3);
    t[0xF9] = OpEntry::new(Adcb, Extended, 5, 3);
    t[0xFA] = OpEntry::new(Orb, Extended, 5, 3);
    t[0xFB] = OpEntry::new(Addb, Extended, 5, 3);
    t[0xFC] = OpEntry::new(Ldd, Extended, 6, 3);
    t[0xFD] = OpEntry::new(Std, Extended, 6, 3);
    t[0xFE] = OpEntry::new(Ldu, Extended, 6, 3);
    t[0xFF] = OpEntry::new(Stu, Extended, 6, 3);

    // ---- Page 2 ($10xx): long conditional branches ----
    t[PAGE2 as usize | 0x21] = OpEntry::new(Lbrn, Relative16, 5, 4);
    t[PAGE2 as usize | 0x22] = OpEntry::new(Lbhi, Relative16, 5, 4);
    t[PAGE2 as usize | 0x23] = OpEntry::new(Lbls, Relative16, 5, 4);
    t[PAGE2 as usize | 0x24] = OpEntry::new(Lbcc, Relative16, 5, 4);
    t[PAGE2 as usize | 0x25] = OpEntry::new(Lbcs, Relative16, 5, 4);
    t[PAGE2 as usize | 0x26] = OpEntry::new(Lbne, Relative16, 5, 4);
    t[PAGE2 as usize | 0x27] = OpEntry::new(Lbeq, Relative16, 5, 4);
    t[PAGE2 as usize | 0x28] = OpEntry::new(Lbvc, Relative16, 5, 4);
    t[PAGE2 as usize | 0x29] = OpEntry::new(Lbvs, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2A] = OpEntry::new(Lbpl, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2B] = OpEntry::new(Lbmi, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2C] = OpEntry::new(Lbge, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2D] = OpEntry::new(Lblt, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2E] = OpEntry::new(Lbgt, Relative16, 5, 4);
    t[PAGE2 as usize | 0x2F] = OpEntry::new(Lble, Relative16, 5, 4);
    t[PAGE2 as usize | 0x3F] = OpEntry::new(Swi2, Inherent, 20, 2);

    // ---- Page 2: CMPD/CMPY/LDY/STY/LDS/STS across modes ----
    t[PAGE2 as usize | 0x83] = OpEntry::new(Cmpd, Immediate16, 5, 4);
    t[PAGE2 as usize | 0x8C] = OpEntry::new(Cmpy, Immediate16, 5, 4);
    t[PAGE2 as usize | 0x8E] = OpEntry::new(Ldy, Immediate16, 4, 4);
    t[PAGE2 as usize | 0x93] = OpEntry::new(Cmpd, Direct, 7, 3);
    t[PAGE2 as usize | 0x9C] = OpEntry::new(Cmpy, Direct, 7, 3);
    t[PAGE2 as usize | 0x9E] = OpEntry::new(Ldy, Direct, 6, 3);
    t[PAGE2 as usize | 0x9F] = OpEntry::new(Sty, Direct, 6, 3);
    t[PAGE2 as usize | 0xA3] = OpEntry::new(Cmpd, Indexed, 7, 3);
    t[PAGE2 as usize | 0xAC] = OpEntry::new(Cmpy, Indexed, 7, 3);
    t[PAGE2 as usize | 0xAE] = OpEntry::new(Ldy, Indexed, 6, 3);
    t[PAGE2 as usize | 0xAF] = OpEntry::new(Sty, Indexed, 6, 3);
    t[PAGE2 as usize | 0xB3] = OpEntry::new(Cmpd, Extended, 8, 4);
    t[PAGE2 as usize | 0xBC] = OpEntry::new(Cmpy, Extended, 8, 4);
    t[PAGE2 as usize | 0xBE] = OpEntry::new(Ldy, Extended, 7, 4);
    t[PAGE2 as usize | 0xBF] = OpEntry::new(Sty, Extended, 7, 4);
    t[PAGE2 as usize | 0xCE] = OpEntry::new(Lds, Immediate16, 4, 4);
    t[PAGE2 as usize | 0xDE] = OpEntry::new(Lds, Direct, 6, 3);
    t[PAGE2 as usize | 0xDF] = OpEntry::new(Sts, Direct, 6, 3);
    t[PAGE2 as usize | 0xEE] = OpEntry::new(Lds, Indexed, 6, 3);
    t[PAGE2 as usize | 0xEF] = OpEntry::new(Sts, Indexed, 6, 3);
    t[PAGE2 as usize | 0xFE] = OpEntry::new(Lds, Extended, 7, 4);
    t[PAGE2 as usize | 0xFF] = OpEntry::new(Sts, Extended, 7, 4);

    // ---- Page 3 ($11xx): SWI3, CMPU, CMPS ----
    t[PAGE3 as usize | 0x3F] = OpEntry::new(Swi3, Inherent, 20, 2);
    t[PAGE3 as usize | 0x83] = OpEntry::new(Cmpu, Immediate16, 5, 4);
    t[PAGE3 as usize | 0x8C] = OpEntry::new(Cmps, Immediate16, 5, 4);
    t[PAGE3 as usize | 0x93] = OpEntry::new(Cmpu, Direct, 7, 3);
    t[PAGE3 as usize | 0x9C] = OpEntry::new(Cmps, Direct, 7, 3);
    t[PAGE3 as usize | 0xA3] = OpEntry::new(Cmpu, Indexed, 7, 3);
    t[PAGE3 as usize | 0xAC] = OpEntry::new(Cmps, Indexed, 7, 3);
    t[PAGE3 as usize | 0xB3] = OpEntry::new(Cmpu, Extended, 8, 4);
    t[PAGE3 as usize | 0xBC] = OpEntry::new(Cmps, Extended, 8, 4);

    t
}
