//! Subject Public Key Info
//!
//! RFC 5280 Section 4.1.2.7
//!
//! ```asn1
//! SubjectPublicKeyInfo  ::=  SEQUENCE  {
//!     algorithm            AlgorithmIdentifier,
//!     subjectPublicKey     BIT STRING
//! }
//! ```
//!
//! This is the public key handle certificates and CSRs expose. Turning the
//! key bits into a usable key is left to the crypto layer.

use serde::Serialize;

use crate::OidName;
use crate::oid::ObjectIdentifier;

/// Subject Public Key Info
///
/// The key algorithm OID together with the raw subjectPublicKey bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SubjectPublicKeyInfo {
    algorithm: ObjectIdentifier,
    subject_public_key: Vec<u8>,
}

impl SubjectPublicKeyInfo {
    /// Create a new SubjectPublicKeyInfo
    pub fn new(algorithm: ObjectIdentifier, subject_public_key: Vec<u8>) -> Self {
        Self {
            algorithm,
            subject_public_key,
        }
    }

    /// Get the key algorithm OID
    pub fn algorithm(&self) -> &ObjectIdentifier {
        &self.algorithm
    }

    /// Get the subject public key
    pub fn subject_public_key(&self) -> &[u8] {
        &self.subject_public_key
    }
}

impl OidName for SubjectPublicKeyInfo {
    fn oid_name(&self) -> Option<&'static str> {
        self.algorithm.oid_name()
    }
}
