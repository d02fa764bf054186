//! Error types for PKIX types

use thiserror::Error;

use crate::oid::ObjectIdentifier;

/// Result type for PKIX types operations
pub type Result<T> = std::result::Result<T, Error>;

/// PKIX types error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text is not a dotted-decimal object identifier
    #[error("OBJECT IDENTIFIER: invalid dotted string '{0}'")]
    InvalidObjectIdentifier(String),

    /// The OID has no entry in the signature-hash table
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedSignatureAlgorithm(ObjectIdentifier),
}
