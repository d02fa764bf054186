//! Certificate Serial Number
//!
//! Defined in RFC 5280 Section 4.1.2.2
//!
//! ```asn1
//! CertificateSerialNumber ::= INTEGER
//! ```
//!
//! Serial numbers may be up to 20 octets long, so they are kept as
//! arbitrary precision integers.

use std::fmt;
use std::ops::Deref;

use num_bigint::BigInt;
use serde::Serialize;

/// Certificate Serial Number
///
/// Typically displayed in hexadecimal format with colon separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CertificateSerialNumber {
    inner: BigInt,
}

impl Serialize for CertificateSerialNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_hex())
    }
}

impl CertificateSerialNumber {
    /// Create from raw bytes.
    ///
    /// The bytes are interpreted as a big-endian signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use shomei_pkix_types::CertificateSerialNumber;
    ///
    /// let serial = CertificateSerialNumber::from_bytes(&[0x01, 0x02, 0x03]);
    /// assert_eq!(serial.format_hex(), "01:02:03");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BigInt::from_signed_bytes_be(bytes).into()
    }

    /// Format as hex string with colon separators.
    ///
    /// Returns a lowercase hexadecimal representation with colon separators
    /// between each byte (e.g., "00:f7:e9:eb"), similar to OpenSSL's format.
    pub fn format_hex(&self) -> String {
        self.inner
            .to_signed_bytes_be()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Serial as a signed integer
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }
}

impl From<BigInt> for CertificateSerialNumber {
    fn from(inner: BigInt) -> Self {
        Self { inner }
    }
}

impl Deref for CertificateSerialNumber {
    type Target = BigInt;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Display for CertificateSerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
