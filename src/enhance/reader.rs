//! Generated reader bodies
//!
//! Emits the full body of a synthetic "read this persistent field" method:
//!
//! ```text
//! if (this.<getter>() != null) {
//!     field = (Cast) this.<getter>().readXXX(this, "name", field);
//! }
//! return field;
//! ```
//!
//! Both control paths reach the fallback label with an empty operand stack
//! and unchanged locals, so the merge point is a zero-delta same-frame on
//! class file versions that carry stack maps.

use crate::classfile::code::{CodeBuffer, MethodBody};
use crate::classfile::constpool::ConstantPool;
use crate::classfile::opcodes;
use crate::enhance::context::EnhancementContext;
use crate::enhance::model::{ManagedType, PersistentField};
use crate::enhance::strategy::FieldAccess;

pub struct FieldReaderGenerator<'a> {
    managed: &'a ManagedType,
    field: &'a PersistentField,
    context: &'a EnhancementContext,
    access: FieldAccess,
}

impl<'a> FieldReaderGenerator<'a> {
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

    /// Emit the reader body and report its sizing.
    pub fn apply(&self, pool: &mut ConstantPool) -> MethodBody {
        log::debug!(
            "reader body: type={} field={} access={:?}",
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
        let fallback = buf.new_label();
        buf.branch(opcodes::IFNULL, fallback);

        // this (receiver for the store-back)
        buf.emitop(opcodes::ALOAD_0);
        // this.<getter>()
        buf.emitop(opcodes::ALOAD_0);
        buf.emitop2(opcodes::INVOKEVIRTUAL, getter_ref);
        // .readXXX( this, "name", <current value> )
        buf.emitop(opcodes::ALOAD_0);
        let name_index = pool.add_string(&self.field.name);
        buf.emit_ldc(name_index);
        buf.emitop(opcodes::ALOAD_0);
        self.access.emit_read(&mut buf, pool, self.context, self.managed, self.field);
        let read_ref = pool.add_interface_method_ref(
            &self.context.interceptor_type,
            &self.context.read_name(&self.field.ty),
            &self.context.read_descriptor(&self.field.ty),
        );
        // count: interceptor receiver + Object + String + value width
        buf.emit_invokeinterface(read_ref, (3 + self.field.ty.width()) as u8);
        // field = (Cast) result
        if !self.field.ty.is_primitive() {
            let class_index = pool.add_class(&self.field.ty.internal_name());
            buf.emitop2(opcodes::CHECKCAST, class_index);
        }
        self.access.emit_write(&mut buf, pool, self.context, self.managed, self.field);

        // merge point
        buf.bind(fallback);
        if self.managed.version.emits_stack_map_frames() {
            buf.mark_frame();
        }

        // return field
        buf.emitop(opcodes::ALOAD_0);
        self.access.emit_read(&mut buf, pool, self.context, self.managed, self.field);
        buf.emitop(self.field.ty.return_opcode());

        // deepest point: receiver + interceptor + receiver + name + value
        let max_stack = 4 + self.field.ty.width();
        // the instrumented reader declares only `this`
        let max_locals = 1;
        buf.into_body(max_stack, max_locals)
    }
}
