//! Class file substrate for the accessor generators
//!
//! Everything here is plain JVMS plumbing: opcodes, the constant pool,
//! the type/descriptor model, the emission buffer, and the attribute
//! structures a generated body is packaged into.

pub mod attribute;
pub mod code;
pub mod constpool;
pub mod descriptor;
pub mod frame;
pub mod opcodes;
pub mod version;

pub use attribute::{AttributeInfo, CodeAttribute};
pub use code::{CodeBuffer, Label, MethodBody};
pub use constpool::{Constant, ConstantPool};
pub use descriptor::{method_descriptor, parse_method_descriptor, JavaType};
pub use frame::{StackMapFrame, StackMapTable};
pub use version::ClassFileVersion;
