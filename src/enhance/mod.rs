//! Interceptor-aware field accessor generation
//!
//! One generator instance handles exactly one field's reader or writer in
//! one call: the driver constructs it with the managed type, the field, and
//! the enhancement context, then invokes `apply` to obtain the finished
//! [`MethodBody`](crate::classfile::MethodBody). Generation is pure and
//! synchronous; nothing here holds process-wide state.

pub mod context;
pub mod model;
pub mod reader;
pub mod strategy;
pub mod writer;

pub use context::EnhancementContext;
pub use model::{FieldVisibility, ManagedType, PersistentField};
pub use reader::FieldReaderGenerator;
pub use strategy::FieldAccess;
pub use writer::FieldWriterGenerator;
