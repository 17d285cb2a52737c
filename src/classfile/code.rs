//! Method body emission buffer
//!
//! `CodeBuffer` owns the raw bytecode vector for one method body under
//! construction: opcode/operand emission, forward branches with backpatching,
//! and the offsets of stack-map merge points recorded along the way.
//!
//! Stack sizing is not tracked here with incremental counters; the accessor
//! generators compute their operand-stack high-water mark as a pure function
//! of the field's type category and report it on the finished [`MethodBody`].

use crate::classfile::opcodes;

/// Handle for a branch target that may not be bound yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label(usize);

/// A finished method body: the instruction sequence plus its derived sizing
/// and the bytecode offsets of recorded stack-map frames.
#[derive(Debug, Clone)]
pub struct MethodBody {
    pub code: Vec<u8>,
    pub max_stack: u16,
    pub max_locals: u16,
    /// Offsets of merge points, in emission order. Empty when the target
    /// class file version predates stack-map frames.
    pub frame_offsets: Vec<u16>,
}

#[derive(Debug, Default)]
pub struct CodeBuffer {
    code: Vec<u8>,
    /// Bound label offsets, indexed by label id.
    labels: Vec<Option<u16>>,
    /// Unresolved branch sites: (offset of the branch opcode, label id).
    patches: Vec<(usize, usize)>,
    frame_offsets: Vec<u16>,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current code pointer.
    pub fn pc(&self) -> u16 {
        self.code.len() as u16
    }

    /// Emit one byte of code.
    pub fn emit1(&mut self, od: u8) {
        self.code.push(od);
    }

    /// Emit two bytes of code, big-endian.
    pub fn emit2(&mut self, od: u16) {
        self.code.extend_from_slice(&od.to_be_bytes());
    }

    /// Emit a bare opcode.
    pub fn emitop(&mut self, op: u8) {
        self.emit1(op);
    }

    /// Emit an opcode with a two-byte operand (constant pool index).
    pub fn emitop2(&mut self, op: u8, od: u16) {
        self.emit1(op);
        self.emit2(od);
    }

    /// Emit an `ldc` for the given pool index, choosing the narrow form when
    /// the index fits one byte.
    pub fn emit_ldc(&mut self, index: u16) {
        if index <= u8::MAX as u16 {
            self.emit1(opcodes::LDC);
            self.emit1(index as u8);
        } else {
            self.emitop2(opcodes::LDC_W, index);
        }
    }

    /// Emit an `invokeinterface` with its count operand. `count` is one for
    /// the receiver plus the summed widths of the arguments.
    pub fn emit_invokeinterface(&mut self, index: u16, count: u8) {
        self.emitop2(opcodes::INVOKEINTERFACE, index);
        self.emit1(count);
        self.emit1(0);
    }

    /// Allocate a fresh, unbound label.
    pub fn new_label(&mut self) -> Label {
        self.labels.push(None);
        Label(self.labels.len() - 1)
    }

    /// Emit a branch instruction targeting `label`. The 16-bit offset operand
    /// is patched in when the label is bound.
    pub fn branch(&mut self, op: u8, label: Label) {
        let site = self.code.len();
        self.emit1(op);
        self.emit2(0);
        match self.labels[label.0] {
            Some(target) => self.patch(site, target),
            None => self.patches.push((site, label.0)),
        }
    }

    /// Bind `label` to the current code pointer and resolve pending branches.
    pub fn bind(&mut self, label: Label) {
        let target = self.pc();
        debug_assert!(self.labels[label.0].is_none(), "label bound twice");
        self.labels[label.0] = Some(target);
        let mut i = 0;
        while i < self.patches.len() {
            if self.patches[i].1 == label.0 {
                let (site, _) = self.patches.swap_remove(i);
                self.patch(site, target);
            } else {
                i += 1;
            }
        }
    }

    /// Record a stack-map merge point at the current code pointer.
    pub fn mark_frame(&mut self) {
        self.frame_offsets.push(self.pc());
    }

    fn patch(&mut self, site: usize, target: u16) {
        // Branch offsets are relative to the opcode's own offset.
        let rel = target as i32 - site as i32;
        let rel = rel as i16;
        self.code[site + 1..site + 3].copy_from_slice(&rel.to_be_bytes());
    }

    /// Finish the body, attaching the sizing computed by the generator.
    pub fn into_body(self, max_stack: u16, max_locals: u16) -> MethodBody {
        debug_assert!(self.patches.is_empty(), "unresolved branch target");
        MethodBody {
            code: self.code,
            max_stack,
            max_locals,
            frame_offsets: self.frame_offsets,
        }
    }
}
