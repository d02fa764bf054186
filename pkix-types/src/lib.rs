//! PKIX (Public Key Infrastructure using X.509) Common Types
//!
//! This crate provides the types every other shomei crate consults:
//! - [`ObjectIdentifier`] and the well-known OID constants in [`oid`]
//! - the read-only OID name registry ([`lookup_name`], [`OidName`])
//! - [`HashAlgorithm`] and the signature-algorithm table
//!   ([`lookup_signature_hash`])
//! - the distinguished [`Name`] model
//! - [`SubjectPublicKeyInfo`] and [`CertificateSerialNumber`]
//!
//! These types are defined in various RFCs including:
//! - RFC 5280: Internet X.509 Public Key Infrastructure Certificate and CRL Profile
//! - RFC 4519: Lightweight Directory Access Protocol (LDAP): Schema for User Applications
//! - RFC 3279 / RFC 5758: Algorithms and Identifiers for the Internet X.509 PKI

use std::sync::atomic::{AtomicBool, Ordering};

pub mod algorithm;
pub mod error;
pub mod name;
pub mod oid;
pub mod oid_name;
pub mod serial_number;
pub mod subject_public_key_info;

pub use algorithm::{HashAlgorithm, lookup_signature_hash};
pub use error::{Error, Result};
pub use name::{Name, NameAttribute};
pub use oid::ObjectIdentifier;
pub use oid_name::{OidName, lookup_name};
pub use serial_number::CertificateSerialNumber;
pub use subject_public_key_info::SubjectPublicKeyInfo;

static USE_OID_VALUES: AtomicBool = AtomicBool::new(false);

/// Render dotted OIDs instead of registry names when serializing.
///
/// Affects output only; validation never looks at this flag.
pub fn set_use_oid_values(use_oid: bool) {
    USE_OID_VALUES.store(use_oid, Ordering::Relaxed);
}

/// Whether serialization renders dotted OIDs instead of registry names
pub fn get_use_oid_values() -> bool {
    USE_OID_VALUES.load(Ordering::Relaxed)
}
