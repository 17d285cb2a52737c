//! Generated writer bodies
//!
//! Emits the full body of a synthetic "write this persistent field" method:
//!
//! ```text
//! if (this.<getter>() != null) {
//!     field = (Cast) this.<getter>().writeXXX(this, "name", field, value);
//! } else {
//!     field = value;
//! }
//! return;
//! ```
//!
//! Unlike the reader there are two merge points: the no-interceptor label
//! and the shared return label. Both are reached with an empty operand
//! stack, so each is a same-frame.

use crate::classfile::code::{CodeBuffer, MethodBody};
use crate::classfile::constpool::ConstantPool;
use crate::classfile::opcodes;
use crate::enhance::context::EnhancementContext;
use crate::enhance::model::{ManagedType, PersistentField};
use crate::enhance::strategy::FieldAccess;

pub struct FieldWriterGenerator<'a> {
    managed: &'a ManagedType,
    field: &'a PersistentField,
    context: &'a EnhancementContext,
    access: FieldAccess,
}

impl<'a> FieldWriterGenerator<'a> {
    /// Bind a generator to one field, selecting the fallback strategy once.
    pub fn new(
        managed: &'a ManagedType,
        field: &'a PersistentField,
        context: &'a EnhancementContext,
    ) -> Self {
        let access = FieldAccess::select(managed, field);
        Self { managed, field, context, access }
    }

    /// The strategy this generator bound at construction.
    pub fn access(&self) -> FieldAccess {
        self.access
    }

    /// Emit the writer body and report its sizing.
    pub fn apply(&self, pool: &mut ConstantPool) -> MethodBody {
        log::debug!(
            "writer body: type={} field={} access={:?}",
            self.managed.internal_name,
            self.field.name,
            self.access
        );
        let mut buf = CodeBuffer::new();
        let getter_ref = pool.add_method_ref(
            &self.managed.internal_name,
            &self.context.interceptor_getter,
            &self.context.getter_descriptor(),
        );

        // if ( this.<getter>() != null )
        buf.emitop(opcodes::ALOAD_0);
        buf.emitop2(opcodes::INVOKEVIRTUAL, getter_ref);
        let plain = buf.new_label();
        buf.branch(opcodes::IFNULL, plain);

        // this (receiver for the store-back)
        buf.emitop(opcodes::ALOAD_0);
        // this.<getter>()
        buf.emitop(opcodes::ALOAD_0);
        buf.emitop2(opcodes::INVOKEVIRTUAL, getter_ref);
        // .writeXXX( this, "name", <current value>, value )
        buf.emitop(opcodes::ALOAD_0);
        let name_index = pool.add_string(&self.field.name);
        buf.emit_ldc(name_index);
        buf.emitop(opcodes::ALOAD_0);
        self.access.emit_read(&mut buf, pool, self.context, self.managed, self.field);
        buf.emitop(self.field.ty.load_1_opcode());
        let write_ref = pool.add_interface_method_ref(
            &self.context.interceptor_type,
            &self.context.write_name(&self.field.ty),
            &self.context.write_descriptor(&self.field.ty),
        );
        // count: interceptor receiver + Object + String + two value widths
        buf.emit_invokeinterface(write_ref, (3 + 2 * self.field.ty.width()) as u8);
        // field = (Cast) result
        if !self.field.ty.is_primitive() {
            let class_index = pool.add_class(&self.field.ty.internal_name());
            buf.emitop2(opcodes::CHECKCAST, class_index);
        }
        self.access.emit_write(&mut buf, pool, self.context, self.managed, self.field);
        let done = buf.new_label();
        buf.branch(opcodes::GOTO, done);

        // field = value
        buf.bind(plain);
        if self.managed.version.emits_stack_map_frames() {
            buf.mark_frame();
        }
        buf.emitop(opcodes::ALOAD_0);
        buf.emitop(self.field.ty.load_1_opcode());
        self.access.emit_write(&mut buf, pool, self.context, self.managed, self.field);

        // return
        buf.bind(done);
        if self.managed.version.emits_stack_map_frames() {
            buf.mark_frame();
        }
        buf.emitop(opcodes::RETURN);

        // deepest point: receiver + interceptor + receiver + name + two values
        let max_stack = 4 + 2 * self.field.ty.width();
        // the instrumented writer declares `this` plus the incoming value
        let max_locals = 1 + self.field.ty.width();
        buf.into_body(max_stack, max_locals)
    }
}
