//! Fallback access strategy: how the non-intercepted path touches the field
//!
//! Two variants, chosen once per (managed type, field) pair and never
//! re-evaluated: a direct `getfield`/`putfield` when the field is reachable,
//! or an exact `invokespecial` into the synthetic accessor pair the driver
//! pre-generated on the supertype when it is not.

use crate::classfile::code::CodeBuffer;
use crate::classfile::constpool::ConstantPool;
use crate::classfile::descriptor::method_descriptor;
use crate::classfile::opcodes;
use crate::enhance::context::EnhancementContext;
use crate::enhance::model::{ManagedType, PersistentField};

/// The two ways the emitted code reads and writes the field when no
/// interceptor is attached (and around the interceptor call itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAccess {
    /// Ordinary field instructions against the declaring type.
    Direct,
    /// Non-virtual calls to the synthetic reader/writer on the supertype.
    SuperDispatch,
}

impl FieldAccess {
    /// Pick the strategy for `field` as seen from `managed`. Total: every
    /// field is either reachable or routed through the supertype.
    pub fn select(managed: &ManagedType, field: &PersistentField) -> FieldAccess {
        if field.is_visible_to(managed) {
            FieldAccess::Direct
        } else {
            FieldAccess::SuperDispatch
        }
    }

    /// Emit the instructions that replace `getfield` for this strategy.
    /// Expects the receiver on the operand stack; leaves the field value.
    pub fn emit_read(
        &self,
        buf: &mut CodeBuffer,
        pool: &mut ConstantPool,
        context: &EnhancementContext,
        managed: &ManagedType,
        field: &PersistentField,
    ) {
        match self {
            FieldAccess::Direct => {
                let field_ref =
                    pool.add_field_ref(&field.declaring_type, &field.name, &field.ty.descriptor());
                buf.emitop2(opcodes::GETFIELD, field_ref);
            }
            FieldAccess::SuperDispatch => {
                let reader_ref = pool.add_method_ref(
                    &managed.super_internal_name,
                    &context.synthetic_reader(&field.name),
                    &method_descriptor(&[], Some(&field.ty)),
                );
                buf.emitop2(opcodes::INVOKESPECIAL, reader_ref);
            }
        }
    }

    /// Emit the instructions that replace `putfield` for this strategy.
    /// Expects the receiver and the new value on the operand stack.
    pub fn emit_write(
        &self,
        buf: &mut CodeBuffer,
        pool: &mut ConstantPool,
        context: &EnhancementContext,
        managed: &ManagedType,
        field: &PersistentField,
    ) {
        match self {
            FieldAccess::Direct => {
                let field_ref =
                    pool.add_field_ref(&field.declaring_type, &field.name, &field.ty.descriptor());
                buf.emitop2(opcodes::PUTFIELD, field_ref);
            }
            FieldAccess::SuperDispatch => {
                let writer_ref = pool.add_method_ref(
                    &managed.super_internal_name,
                    &context.synthetic_writer(&field.name),
                    &method_descriptor(&[field.ty.clone()], None),
                );
                buf.emitop2(opcodes::INVOKESPECIAL, writer_ref);
            }
        }
    }
}
