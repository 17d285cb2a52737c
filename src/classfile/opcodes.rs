/// JVM bytecode instruction opcodes
///
/// Only the instructions the accessor generators emit are listed here.
/// Values follow the Java Virtual Machine Specification and are ordered
/// by opcode value.

// 0x00 - 0x01: Constants
pub const NOP: u8 = 0x00;
pub const ACONST_NULL: u8 = 0x01;

// 0x12 - 0x13: Constant pool loads
pub const LDC: u8 = 0x12;
pub const LDC_W: u8 = 0x13;

// 0x15 - 0x19: Local variable loads, generic form
pub const ILOAD: u8 = 0x15;
pub const LLOAD: u8 = 0x16;
pub const FLOAD: u8 = 0x17;
pub const DLOAD: u8 = 0x18;
pub const ALOAD: u8 = 0x19;

// 0x1a - 0x2d: Local variable loads, short forms
pub const ILOAD_0: u8 = 0x1a;
pub const ILOAD_1: u8 = 0x1b;
pub const ILOAD_2: u8 = 0x1c;
pub const ILOAD_3: u8 = 0x1d;
pub const LLOAD_0: u8 = 0x1e;
pub const LLOAD_1: u8 = 0x1f;
pub const LLOAD_2: u8 = 0x20;
pub const LLOAD_3: u8 = 0x21;
pub const FLOAD_0: u8 = 0x22;
pub const FLOAD_1: u8 = 0x23;
pub const FLOAD_2: u8 = 0x24;
pub const FLOAD_3: u8 = 0x25;
pub const DLOAD_0: u8 = 0x26;
pub const DLOAD_1: u8 = 0x27;
pub const DLOAD_2: u8 = 0x28;
pub const DLOAD_3: u8 = 0x29;
pub const ALOAD_0: u8 = 0x2a;
pub const ALOAD_1: u8 = 0x2b;
pub const ALOAD_2: u8 = 0x2c;
pub const ALOAD_3: u8 = 0x2d;

// 0xa7: Unconditional branch
pub const GOTO: u8 = 0xa7;

// 0xac - 0xb1: Returns
pub const IRETURN: u8 = 0xac;
pub const LRETURN: u8 = 0xad;
pub const FRETURN: u8 = 0xae;
pub const DRETURN: u8 = 0xaf;
pub const ARETURN: u8 = 0xb0;
pub const RETURN: u8 = 0xb1;

// 0xb4 - 0xb9: Field access and method invocation
pub const GETFIELD: u8 = 0xb4;
pub const PUTFIELD: u8 = 0xb5;
pub const INVOKEVIRTUAL: u8 = 0xb6;
pub const INVOKESPECIAL: u8 = 0xb7;
pub const INVOKESTATIC: u8 = 0xb8;
pub const INVOKEINTERFACE: u8 = 0xb9;

// 0xc0 - 0xc1: Type checks
pub const CHECKCAST: u8 = 0xc0;
pub const INSTANCEOF: u8 = 0xc1;

// 0xc6 - 0xc7: Null tests
pub const IFNULL: u8 = 0xc6;
pub const IFNONNULL: u8 = 0xc7;
