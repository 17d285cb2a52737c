//! Naming conventions and interceptor call contract for one enhancement pass
//!
//! The generators never reach for ambient constants; every well-known name
//! (the interceptor accessor, the interceptor interface, the synthetic
//! reader/writer prefixes) is threaded in through this context so tests and
//! embedders can substitute their own conventions.

use crate::classfile::descriptor::JavaType;

/// Configuration threaded into every accessor generator.
#[derive(Debug, Clone)]
pub struct EnhancementContext {
    /// Name of the no-arg virtual accessor on the managed type that returns
    /// the current interceptor, or null when none is attached.
    pub interceptor_getter: String,
    /// Internal name of the interceptor interface the emitted code calls.
    pub interceptor_type: String,
    /// Name prefix of the synthetic reader generated on a supertype for
    /// fields the subtype cannot touch directly.
    pub reader_prefix: String,
    /// Name prefix of the matching synthetic writer.
    pub writer_prefix: String,
}

impl Default for EnhancementContext {
    fn default() -> Self {
        Self {
            interceptor_getter: "$$_jweave_getInterceptor".to_string(),
            interceptor_type: "io/jweave/runtime/FieldInterceptor".to_string(),
            reader_prefix: "$$_jweave_read_".to_string(),
            writer_prefix: "$$_jweave_write_".to_string(),
        }
    }
}

impl EnhancementContext {
    /// Descriptor of the interceptor accessor: no arguments, returns the
    /// interceptor interface.
    pub fn getter_descriptor(&self) -> String {
        format!("()L{};", self.interceptor_type)
    }

    /// Name of the interceptor read overload for a field of type `ty`.
    pub fn read_name(&self, ty: &JavaType) -> String {
        format!("read{}", ty.dispatch_suffix())
    }

    /// Descriptor of the interceptor read overload:
    /// `(Ljava/lang/Object;Ljava/lang/String;T)T`.
    pub fn read_descriptor(&self, ty: &JavaType) -> String {
        let t = ty.dispatch_descriptor();
        format!("(Ljava/lang/Object;Ljava/lang/String;{t}){t}")
    }

    /// Name of the interceptor write overload for a field of type `ty`.
    pub fn write_name(&self, ty: &JavaType) -> String {
        format!("write{}", ty.dispatch_suffix())
    }

    /// Descriptor of the interceptor write overload:
    /// `(Ljava/lang/Object;Ljava/lang/String;TT)T`: receiver, field name,
    /// current value, incoming value.
    pub fn write_descriptor(&self, ty: &JavaType) -> String {
        let t = ty.dispatch_descriptor();
        format!("(Ljava/lang/Object;Ljava/lang/String;{t}{t}){t}")
    }

    /// Name of the synthetic reader for `field_name` on a supertype.
    pub fn synthetic_reader(&self, field_name: &str) -> String {
        format!("{}{}", self.reader_prefix, field_name)
    }

    /// Name of the synthetic writer for `field_name` on a supertype.
    pub fn synthetic_writer(&self, field_name: &str) -> String {
        format!("{}{}", self.writer_prefix, field_name)
    }
}
