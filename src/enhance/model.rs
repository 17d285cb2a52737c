//! Descriptions of the type and field under enhancement
//!
//! These are read-only inputs handed over by the enhancement driver; the
//! generators never mutate them and never re-resolve them.

use crate::classfile::descriptor::JavaType;
use crate::classfile::version::ClassFileVersion;

/// The class whose accessors are being rewritten.
#[derive(Debug, Clone)]
pub struct ManagedType {
    /// Internal name, e.g. `com/acme/model/Person`.
    pub internal_name: String,
    /// Internal name of the immediate superclass.
    pub super_internal_name: String,
    /// Target class file version of the rewritten class.
    pub version: ClassFileVersion,
}

impl ManagedType {
    pub fn new(internal_name: &str, super_internal_name: &str, version: ClassFileVersion) -> Self {
        Self {
            internal_name: internal_name.to_string(),
            super_internal_name: super_internal_name.to_string(),
            version,
        }
    }

    fn package(&self) -> &str {
        package_of(&self.internal_name)
    }
}

/// Declared access level of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    Private,
    PackagePrivate,
    Protected,
    Public,
}

/// A persistent field somewhere in the managed type's hierarchy.
#[derive(Debug, Clone)]
pub struct PersistentField {
    pub name: String,
    pub ty: JavaType,
    /// Internal name of the class that declares the field.
    pub declaring_type: String,
    pub visibility: FieldVisibility,
}

impl PersistentField {
    pub fn new(name: &str, ty: JavaType, declaring_type: &str, visibility: FieldVisibility) -> Self {
        Self {
            name: name.to_string(),
            ty,
            declaring_type: declaring_type.to_string(),
            visibility,
        }
    }

    /// Whether an ordinary `getfield`/`putfield` on this field compiles
    /// legally at the managed type. Fields declared on the managed type
    /// itself are always reachable; for inherited fields this follows the
    /// JLS member-access rules.
    pub fn is_visible_to(&self, managed: &ManagedType) -> bool {
        if self.declaring_type == managed.internal_name {
            return true;
        }
        match self.visibility {
            FieldVisibility::Private => false,
            FieldVisibility::PackagePrivate => package_of(&self.declaring_type) == managed.package(),
            FieldVisibility::Protected | FieldVisibility::Public => true,
        }
    }
}

fn package_of(internal_name: &str) -> &str {
    match internal_name.rfind('/') {
        Some(i) => &internal_name[..i],
        None => "",
    }
}
