//! Records handed over by a decoding backend.
//!
//! These are plain data: OIDs are still strings, the version is still the
//! parsed integer and extensions are still an unchecked ordered list.
//! Converting them into [`X509Certificate`](crate::X509Certificate) or
//! [`X509Csr`](crate::X509Csr) is where validation happens.

use chrono::NaiveDateTime;
use num_bigint::BigInt;
use shomei::decoder::{DecodableFrom, Decoder};
use shomei_pkix_types::{Name, NameAttribute, ObjectIdentifier};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::extensions::ExtensionValue;

/// One subject or issuer attribute as decoded: dotted OID and string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    pub oid: String,
    pub value: String,
}

impl RawAttribute {
    pub fn new(oid: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            value: value.into(),
        }
    }
}

impl DecodableFrom<RawAttribute> for NameAttribute {}

impl Decoder<RawAttribute, NameAttribute> for RawAttribute {
    type Error = Error;

    fn decode(&self) -> Result<NameAttribute> {
        let oid = ObjectIdentifier::from_str(&self.oid)?;
        Ok(NameAttribute::new(oid, self.value.clone()))
    }
}

/// Convert a raw attribute list into a [`Name`], keeping the order.
pub(crate) fn decode_name(attributes: &[RawAttribute]) -> Result<Name> {
    attributes
        .iter()
        .map(|attr| attr.decode())
        .collect::<Result<Name>>()
}

/// One extension record as decoded.
///
/// `value` is a typed variant when the backend understood the OID and
/// [`ExtensionValue::Unrecognized`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExtension {
    pub oid: String,
    pub critical: bool,
    pub value: ExtensionValue,
}

impl RawExtension {
    pub fn new(oid: impl Into<String>, critical: bool, value: impl Into<ExtensionValue>) -> Self {
        Self {
            oid: oid.into(),
            critical,
            value: value.into(),
        }
    }
}

/// A certificate as decoded by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCertificate {
    /// Full DER encoding, digested by fingerprints
    pub der: Vec<u8>,
    pub serial: BigInt,
    pub version: i64,
    pub issuer: Vec<RawAttribute>,
    pub subject: Vec<RawAttribute>,
    pub not_before: NaiveDateTime,
    pub not_after: NaiveDateTime,
    pub public_key_algorithm: String,
    pub public_key: Vec<u8>,
    pub signature_algorithm: String,
    pub signature: Vec<u8>,
    pub extensions: Vec<RawExtension>,
}

/// A certificate signing request as decoded by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCsr {
    pub der: Vec<u8>,
    pub subject: Vec<RawAttribute>,
    pub public_key_algorithm: String,
    pub public_key: Vec<u8>,
    pub signature_algorithm: String,
    pub signature: Vec<u8>,
}
