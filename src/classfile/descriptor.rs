//! JVM type model and descriptor utilities
//!
//! `JavaType` carries everything the accessor generators need to know about a
//! field's declared type: its descriptor string, its operand-stack width, the
//! load/return opcodes for its verification category, and the interceptor
//! overload it dispatches to.

use crate::classfile::opcodes;
use crate::error::DescriptorError;

/// Internal name of `java.lang.Object`, the erasure of every reference type
/// at the interceptor boundary.
pub const OBJECT_INTERNAL_NAME: &str = "java/lang/Object";

/// A JVM field type: one of the eight primitives, a class, or an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// A class or interface type, by internal name (e.g. `java/lang/String`).
    Object(String),
    Array(Box<JavaType>),
}

impl JavaType {
    /// Convenience constructor for reference types.
    pub fn object(internal_name: &str) -> Self {
        JavaType::Object(internal_name.to_string())
    }

    /// Parse a single field descriptor, e.g. `I`, `Ljava/lang/String;`, `[J`.
    pub fn from_descriptor(desc: &str) -> Result<JavaType, DescriptorError> {
        let mut chars = desc.chars();
        let ty = Self::parse_partial(&mut chars)?;
        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(DescriptorError::TrailingCharacters(rest));
        }
        Ok(ty)
    }

    /// Parse one type from a descriptor stream, leaving the remainder in place.
    pub(crate) fn parse_partial(chars: &mut std::str::Chars<'_>) -> Result<JavaType, DescriptorError> {
        match chars.next() {
            None => Err(DescriptorError::Empty),
            Some('Z') => Ok(JavaType::Boolean),
            Some('B') => Ok(JavaType::Byte),
            Some('C') => Ok(JavaType::Char),
            Some('S') => Ok(JavaType::Short),
            Some('I') => Ok(JavaType::Int),
            Some('J') => Ok(JavaType::Long),
            Some('F') => Ok(JavaType::Float),
            Some('D') => Ok(JavaType::Double),
            Some('[') => Ok(JavaType::Array(Box::new(Self::parse_partial(chars)?))),
            Some('L') => {
                let mut name = String::new();
                for c in chars.by_ref() {
                    if c == ';' {
                        return Ok(JavaType::Object(name));
                    }
                    name.push(c);
                }
                Err(DescriptorError::UnterminatedClassName(name))
            }
            Some(other) => Err(DescriptorError::UnknownBaseType(other)),
        }
    }

    /// The field descriptor for this type.
    pub fn descriptor(&self) -> String {
        match self {
            JavaType::Boolean => "Z".to_string(),
            JavaType::Byte => "B".to_string(),
            JavaType::Char => "C".to_string(),
            JavaType::Short => "S".to_string(),
            JavaType::Int => "I".to_string(),
            JavaType::Long => "J".to_string(),
            JavaType::Float => "F".to_string(),
            JavaType::Double => "D".to_string(),
            JavaType::Object(name) => format!("L{};", name),
            JavaType::Array(elem) => format!("[{}", elem.descriptor()),
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, JavaType::Object(_) | JavaType::Array(_))
    }

    /// Operand-stack slots this type occupies (JVMS category: 2 for long and
    /// double, 1 otherwise).
    pub fn width(&self) -> u16 {
        match self {
            JavaType::Long | JavaType::Double => 2,
            _ => 1,
        }
    }

    /// The internal name used by `checkcast`/`new`: the class name for object
    /// types, the full descriptor for arrays. Reference types only.
    pub fn internal_name(&self) -> String {
        match self {
            JavaType::Object(name) => name.clone(),
            JavaType::Array(_) => self.descriptor(),
            primitive => panic!("primitive type {:?} has no internal name", primitive),
        }
    }

    /// Name suffix of the interceptor overload this type dispatches to.
    /// Primitives each have their own overload; every reference type shares
    /// the `Object` one.
    pub fn dispatch_suffix(&self) -> &'static str {
        match self {
            JavaType::Boolean => "Boolean",
            JavaType::Byte => "Byte",
            JavaType::Char => "Char",
            JavaType::Short => "Short",
            JavaType::Int => "Int",
            JavaType::Long => "Long",
            JavaType::Float => "Float",
            JavaType::Double => "Double",
            JavaType::Object(_) | JavaType::Array(_) => "Object",
        }
    }

    /// The descriptor of the value as seen by the interceptor overload:
    /// the primitive descriptor, or `Ljava/lang/Object;` for references.
    pub fn dispatch_descriptor(&self) -> String {
        if self.is_primitive() {
            self.descriptor()
        } else {
            format!("L{};", OBJECT_INTERNAL_NAME)
        }
    }

    /// Opcode for loading a value of this type from local slot 1.
    pub fn load_1_opcode(&self) -> u8 {
        match self {
            JavaType::Long => opcodes::LLOAD_1,
            JavaType::Float => opcodes::FLOAD_1,
            JavaType::Double => opcodes::DLOAD_1,
            JavaType::Object(_) | JavaType::Array(_) => opcodes::ALOAD_1,
            _ => opcodes::ILOAD_1,
        }
    }

    /// Opcode for returning a value of this type.
    pub fn return_opcode(&self) -> u8 {
        match self {
            JavaType::Long => opcodes::LRETURN,
            JavaType::Float => opcodes::FRETURN,
            JavaType::Double => opcodes::DRETURN,
            JavaType::Object(_) | JavaType::Array(_) => opcodes::ARETURN,
            _ => opcodes::IRETURN,
        }
    }
}

/// Build a method descriptor from parameter types and an optional return type
/// (`None` means `void`).
pub fn method_descriptor(params: &[JavaType], ret: Option<&JavaType>) -> String {
    let mut d = String::new();
    d.push('(');
    for p in params {
        d.push_str(&p.descriptor());
    }
    d.push(')');
    match ret {
        Some(r) => d.push_str(&r.descriptor()),
        None => d.push('V'),
    }
    d
}

/// Parse a method descriptor into parameter types and an optional return type.
pub fn parse_method_descriptor(desc: &str) -> Result<(Vec<JavaType>, Option<JavaType>), DescriptorError> {
    let rest = desc
        .strip_prefix('(')
        .ok_or_else(|| DescriptorError::MalformedMethodDescriptor(desc.to_string()))?;
    let close = rest
        .find(')')
        .ok_or_else(|| DescriptorError::MalformedMethodDescriptor(desc.to_string()))?;
    let (params_str, ret_str) = (&rest[..close], &rest[close + 1..]);

    let mut params = Vec::new();
    let mut chars = params_str.chars();
    loop {
        let mut probe = chars.clone();
        if probe.next().is_none() {
            break;
        }
        params.push(JavaType::parse_partial(&mut chars)?);
    }

    let ret = match ret_str {
        "V" => None,
        other => Some(JavaType::from_descriptor(other)?),
    };
    Ok((params, ret))
}
