//! Specific error types for the class-file substrate

use thiserror::Error;

/// Errors produced while parsing JVM type and method descriptors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,
    #[error("unknown base type tag: '{0}'")]
    UnknownBaseType(char),
    #[error("unterminated class name in descriptor: {0}")]
    UnterminatedClassName(String),
    #[error("trailing characters after descriptor: {0}")]
    TrailingCharacters(String),
    #[error("malformed method descriptor: {0}")]
    MalformedMethodDescriptor(String),
}
