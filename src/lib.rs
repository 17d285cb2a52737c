//! jweave - JVM bytecode enhancement for persistent field access
//!
//! Rewrites field accessors of a managed (persisted) type so that reads and
//! writes transparently route through an optional interceptor before falling
//! back to the plain field value. The crate's job is the delicate part:
//! emitting a correct, minimal, verifiable instruction sequence for the
//! JVM's stack machine, with exact overload dispatch, checked downcasts,
//! merge-point stack maps, and operand-stack sizing.
//!
//! ## Architecture
//!
//! - **classfile**: the JVMS substrate - opcodes, constant pool, type
//!   descriptors, the emission buffer, stack-map frames, and the `Code`
//!   attribute packaging
//! - **enhance**: the generators proper - strategy selection by field
//!   visibility, the reader skeleton, and the writer skeleton
//!
//! ## Generation flow
//!
//! ```text
//! (ManagedType, PersistentField, EnhancementContext)
//!         |
//!     FieldAccess::select            Direct | SuperDispatch
//!         |
//!     FieldReaderGenerator::apply    one MethodBody per accessor
//!     FieldWriterGenerator::apply
//!         |
//!     CodeAttribute::from_body       embedding, external pipeline's concern
//! ```
//!
//! The enhancement driver that decides which fields to touch, the runtime
//! interceptor itself, and class loading/retransformation all live outside
//! this crate; only their call contracts appear here.

pub mod classfile;
pub mod enhance;
pub mod error;

pub use classfile::{ClassFileVersion, CodeAttribute, ConstantPool, JavaType, MethodBody};
pub use enhance::{
    EnhancementContext, FieldAccess, FieldReaderGenerator, FieldVisibility, FieldWriterGenerator,
    ManagedType, PersistentField,
};
pub use error::DescriptorError;
