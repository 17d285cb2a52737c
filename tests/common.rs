// Common test utilities: fixtures plus a small stack-machine evaluator that
// executes generated accessor bodies against recording doubles.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use jweave::classfile::constpool::{Constant, ConstantPool};
use jweave::classfile::descriptor::parse_method_descriptor;
use jweave::classfile::opcodes as op;
use jweave::{
    ClassFileVersion, EnhancementContext, FieldVisibility, JavaType, ManagedType, MethodBody,
    PersistentField,
};

pub const MANAGED: &str = "com/acme/Person";
pub const SUPER: &str = "com/acme/Base";

pub fn managed(version: ClassFileVersion) -> ManagedType {
    ManagedType::new(MANAGED, SUPER, version)
}

/// A field declared on the managed type itself: always directly reachable.
pub fn visible_field(name: &str, ty: JavaType) -> PersistentField {
    PersistentField::new(name, ty, MANAGED, FieldVisibility::Private)
}

/// A private field declared on the supertype: hidden from the managed type.
pub fn hidden_field(name: &str, ty: JavaType) -> PersistentField {
    PersistentField::new(name, ty, SUPER, FieldVisibility::Private)
}

/// A runtime value in the evaluator. Reference values carry their runtime
/// class so `checkcast` can be enforced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Null,
    Ref { class: String, data: String },
}

impl Value {
    pub fn string(s: &str) -> Value {
        Value::Ref { class: "java/lang/String".to_string(), data: s.to_string() }
    }
}

/// One observed interceptor invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptorCall {
    /// Overload name, e.g. `readInt` or `writeObject`.
    pub method: String,
    /// Field name the emitted code passed as the second argument.
    pub field: String,
    /// The current field value the emitted code passed.
    pub current: Value,
    /// The incoming value, present for write overloads only.
    pub incoming: Option<Value>,
}

/// Recording interceptor double with a configurable result.
pub struct Interceptor {
    pub calls: RefCell<Vec<InterceptorCall>>,
    transform: Box<dyn Fn(&InterceptorCall) -> Value>,
}

impl Interceptor {
    /// Returns the incoming value for writes and the current value for reads.
    pub fn passthrough() -> Self {
        Self::with(|call| call.incoming.clone().unwrap_or_else(|| call.current.clone()))
    }

    pub fn with(transform: impl Fn(&InterceptorCall) -> Value + 'static) -> Self {
        Self { calls: RefCell::new(Vec::new()), transform: Box::new(transform) }
    }

    fn invoke(&self, call: InterceptorCall) -> Value {
        let result = (self.transform)(&call);
        self.calls.borrow_mut().push(call);
        result
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

/// The enhanced instance the body runs against. Fields live in one map
/// regardless of declaring type; synthetic supertype accessor calls are
/// recorded so tests can assert the dispatch route.
pub struct TestObject {
    pub class: String,
    pub fields: RefCell<HashMap<String, Value>>,
    pub interceptor: Option<Interceptor>,
    pub super_calls: RefCell<Vec<String>>,
}

impl TestObject {
    pub fn new() -> Self {
        Self {
            class: MANAGED.to_string(),
            fields: RefCell::new(HashMap::new()),
            interceptor: None,
            super_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_interceptor(interceptor: Interceptor) -> Self {
        let mut obj = Self::new();
        obj.interceptor = Some(interceptor);
        obj
    }

    pub fn set_field(&self, name: &str, value: Value) {
        self.fields.borrow_mut().insert(name.to_string(), value);
    }

    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }
}

#[derive(Debug, PartialEq)]
pub enum EvalError {
    CastFailure { expected: String, actual: String },
}

/// Execute a generated accessor body. `arg` is the incoming value for writer
/// bodies (local slot 1). Returns the value the body returned, if any.
pub fn run(
    body: &MethodBody,
    pool: &ConstantPool,
    ctx: &EnhancementContext,
    obj: &TestObject,
    arg: Option<Value>,
) -> Result<Option<Value>, EvalError> {
    let this = Value::Ref { class: obj.class.clone(), data: "<this>".to_string() };
    let code = &body.code;
    let mut stack: Vec<Value> = Vec::new();
    let mut pc = 0usize;
    loop {
        let opcode = code[pc];
        match opcode {
            op::ALOAD_0 => {
                stack.push(this.clone());
                pc += 1;
            }
            op::ALOAD_1 | op::ILOAD_1 | op::LLOAD_1 | op::FLOAD_1 | op::DLOAD_1 => {
                stack.push(arg.clone().expect("writer body needs an argument"));
                pc += 1;
            }
            op::LDC => {
                stack.push(resolve_ldc(pool, code[pc + 1] as u16));
                pc += 2;
            }
            op::LDC_W => {
                stack.push(resolve_ldc(pool, read_u16(code, pc + 1)));
                pc += 3;
            }
            op::GETFIELD => {
                let (_, name, desc) = member_ref(pool, read_u16(code, pc + 1));
                stack.pop().expect("getfield receiver");
                let value = obj.field(&name).unwrap_or_else(|| default_value(&desc));
                stack.push(value);
                pc += 3;
            }
            op::PUTFIELD => {
                let (_, name, _) = member_ref(pool, read_u16(code, pc + 1));
                let value = stack.pop().expect("putfield value");
                stack.pop().expect("putfield receiver");
                obj.set_field(&name, value);
                pc += 3;
            }
            op::INVOKEVIRTUAL => {
                let (_, name, _) = member_ref(pool, read_u16(code, pc + 1));
                assert_eq!(
                    name, ctx.interceptor_getter,
                    "only the interceptor accessor is invoked virtually"
                );
                stack.pop().expect("getter receiver");
                match &obj.interceptor {
                    Some(_) => stack.push(Value::Ref {
                        class: ctx.interceptor_type.clone(),
                        data: "<interceptor>".to_string(),
                    }),
                    None => stack.push(Value::Null),
                }
                pc += 3;
            }
            op::INVOKESPECIAL => {
                let (owner, name, desc) = member_ref(pool, read_u16(code, pc + 1));
                assert_eq!(owner, SUPER, "synthetic accessors live on the supertype");
                obj.super_calls.borrow_mut().push(name.clone());
                if let Some(field) = name.strip_prefix(ctx.reader_prefix.as_str()) {
                    stack.pop().expect("synthetic reader receiver");
                    let (_, ret) = parse_method_descriptor(&desc).unwrap();
                    let ret = ret.expect("synthetic reader returns the field type");
                    let value =
                        obj.field(field).unwrap_or_else(|| default_value(&ret.descriptor()));
                    stack.push(value);
                } else if let Some(field) = name.strip_prefix(ctx.writer_prefix.as_str()) {
                    let value = stack.pop().expect("synthetic writer value");
                    stack.pop().expect("synthetic writer receiver");
                    obj.set_field(field, value);
                } else {
                    panic!("unexpected invokespecial target: {owner}.{name}");
                }
                pc += 3;
            }
            op::INVOKEINTERFACE => {
                let (_, name, desc) = member_ref(pool, read_u16(code, pc + 1));
                let (params, _) = parse_method_descriptor(&desc).unwrap();
                let incoming = if params.len() == 4 {
                    Some(stack.pop().expect("write overload incoming value"))
                } else {
                    None
                };
                let current = stack.pop().expect("overload current value");
                let field = match stack.pop().expect("overload field name") {
                    Value::Ref { data, .. } => data,
                    other => panic!("field name argument was {:?}", other),
                };
                stack.pop().expect("overload self argument");
                stack.pop().expect("interceptor receiver");
                let interceptor = obj
                    .interceptor
                    .as_ref()
                    .expect("interceptor path executed without an interceptor");
                let result =
                    interceptor.invoke(InterceptorCall { method: name, field, current, incoming });
                stack.push(result);
                pc += 5;
            }
            op::CHECKCAST => {
                let expected = class_name(pool, read_u16(code, pc + 1));
                if let Some(Value::Ref { class: actual, .. }) = stack.last() {
                    if *actual != expected {
                        return Err(EvalError::CastFailure {
                            expected,
                            actual: actual.clone(),
                        });
                    }
                }
                pc += 3;
            }
            op::IFNULL => {
                let value = stack.pop().expect("ifnull operand");
                if value == Value::Null {
                    pc = offset_pc(pc, read_i16(code, pc + 1));
                } else {
                    pc += 3;
                }
            }
            op::GOTO => {
                pc = offset_pc(pc, read_i16(code, pc + 1));
            }
            op::IRETURN | op::LRETURN | op::FRETURN | op::DRETURN | op::ARETURN => {
                return Ok(Some(stack.pop().expect("return value")));
            }
            op::RETURN => return Ok(None),
            other => panic!("unhandled opcode 0x{other:02x} at {pc}"),
        }
    }
}

fn offset_pc(pc: usize, rel: i16) -> usize {
    (pc as i64 + rel as i64) as usize
}

fn read_u16(code: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([code[at], code[at + 1]])
}

fn read_i16(code: &[u8], at: usize) -> i16 {
    i16::from_be_bytes([code[at], code[at + 1]])
}

pub fn utf8(pool: &ConstantPool, index: u16) -> String {
    pool.utf8(index).expect("utf8 entry").to_string()
}

pub fn class_name(pool: &ConstantPool, index: u16) -> String {
    match pool.get(index) {
        Some(Constant::Class(name_index)) => utf8(pool, *name_index),
        other => panic!("expected class constant, found {:?}", other),
    }
}

/// Resolve any of the three member-ref shapes to (owner, name, descriptor).
pub fn member_ref(pool: &ConstantPool, index: u16) -> (String, String, String) {
    let (class_index, nat_index) = match pool.get(index) {
        Some(Constant::FieldRef(c, n))
        | Some(Constant::MethodRef(c, n))
        | Some(Constant::InterfaceMethodRef(c, n)) => (*c, *n),
        other => panic!("expected member ref, found {:?}", other),
    };
    let owner = class_name(pool, class_index);
    let (name_index, desc_index) = match pool.get(nat_index) {
        Some(Constant::NameAndType(n, d)) => (*n, *d),
        other => panic!("expected name-and-type, found {:?}", other),
    };
    (owner, utf8(pool, name_index), utf8(pool, desc_index))
}

fn resolve_ldc(pool: &ConstantPool, index: u16) -> Value {
    match pool.get(index) {
        Some(Constant::String(utf8_index)) => Value::string(&utf8(pool, *utf8_index)),
        Some(Constant::Integer(v)) => Value::Int(*v),
        other => panic!("unsupported ldc constant: {:?}", other),
    }
}

fn default_value(descriptor: &str) -> Value {
    match descriptor.chars().next() {
        Some('J') => Value::Long(0),
        Some('F') => Value::Float(0.0),
        Some('D') => Value::Double(0.0),
        Some('L') | Some('[') => Value::Null,
        _ => Value::Int(0),
    }
}
