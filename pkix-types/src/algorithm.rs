//! Hash algorithms and the signature-algorithm table
//!
//! A signature algorithm OID such as `sha256WithRSAEncryption` implies the
//! digest that was signed. Verification needs that digest, so the mapping is
//! kept in a fixed, read-only table. Only the listed OIDs are known; a lookup
//! for anything else fails instead of guessing a default.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use digest::Digest;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::oid::{self, ObjectIdentifier};

/// Digest algorithms that signature OIDs can imply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Conventional lowercase name, e.g. `"sha256"`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Output length in bytes
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => <md5::Md5 as Digest>::output_size(),
            Self::Sha1 => <sha1::Sha1 as Digest>::output_size(),
            Self::Sha224 => <sha2::Sha224 as Digest>::output_size(),
            Self::Sha256 => <sha2::Sha256 as Digest>::output_size(),
            Self::Sha384 => <sha2::Sha384 as Digest>::output_size(),
            Self::Sha512 => <sha2::Sha512 as Digest>::output_size(),
        }
    }

    /// Digest `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => md5::Md5::digest(data).to_vec(),
            Self::Sha1 => sha1::Sha1::digest(data).to_vec(),
            Self::Sha224 => sha2::Sha224::digest(data).to_vec(),
            Self::Sha256 => sha2::Sha256::digest(data).to_vec(),
            Self::Sha384 => sha2::Sha384::digest(data).to_vec(),
            Self::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

static SIGNATURE_HASHES: LazyLock<HashMap<ObjectIdentifier, HashAlgorithm>> =
    LazyLock::new(|| {
        HashMap::from([
            (oid::RSA_WITH_MD5, HashAlgorithm::Md5),
            (oid::RSA_WITH_SHA1, HashAlgorithm::Sha1),
            (oid::RSA_WITH_SHA224, HashAlgorithm::Sha224),
            (oid::RSA_WITH_SHA256, HashAlgorithm::Sha256),
            (oid::RSA_WITH_SHA384, HashAlgorithm::Sha384),
            (oid::RSA_WITH_SHA512, HashAlgorithm::Sha512),
            (oid::ECDSA_WITH_SHA224, HashAlgorithm::Sha224),
            (oid::ECDSA_WITH_SHA256, HashAlgorithm::Sha256),
            (oid::ECDSA_WITH_SHA384, HashAlgorithm::Sha384),
            (oid::ECDSA_WITH_SHA512, HashAlgorithm::Sha512),
            (oid::DSA_WITH_SHA1, HashAlgorithm::Sha1),
            (oid::DSA_WITH_SHA224, HashAlgorithm::Sha224),
            (oid::DSA_WITH_SHA256, HashAlgorithm::Sha256),
        ])
    });

/// Look up the hash algorithm implied by a signature algorithm OID.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSignatureAlgorithm`] when the OID is not one of
/// the known signature algorithms.
///
/// # Example
///
/// ```
/// use shomei_pkix_types::{lookup_signature_hash, oid, HashAlgorithm};
///
/// assert_eq!(
///     lookup_signature_hash(&oid::RSA_WITH_SHA256),
///     Ok(HashAlgorithm::Sha256)
/// );
/// assert!(lookup_signature_hash(&oid::COMMON_NAME).is_err());
/// ```
pub fn lookup_signature_hash(oid: &ObjectIdentifier) -> Result<HashAlgorithm> {
    SIGNATURE_HASHES
        .get(oid)
        .copied()
        .ok_or_else(|| Error::UnsupportedSignatureAlgorithm(oid.clone()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.840.113549.1.1.4", HashAlgorithm::Md5)]
    #[case("1.2.840.113549.1.1.5", HashAlgorithm::Sha1)]
    #[case("1.2.840.113549.1.1.14", HashAlgorithm::Sha224)]
    #[case("1.2.840.113549.1.1.11", HashAlgorithm::Sha256)]
    #[case("1.2.840.113549.1.1.12", HashAlgorithm::Sha384)]
    #[case("1.2.840.113549.1.1.13", HashAlgorithm::Sha512)]
    #[case("1.2.840.10045.4.3.1", HashAlgorithm::Sha224)]
    #[case("1.2.840.10045.4.3.2", HashAlgorithm::Sha256)]
    #[case("1.2.840.10045.4.3.3", HashAlgorithm::Sha384)]
    #[case("1.2.840.10045.4.3.4", HashAlgorithm::Sha512)]
    #[case("1.2.840.10040.4.3", HashAlgorithm::Sha1)]
    #[case("2.16.840.1.101.3.4.3.1", HashAlgorithm::Sha224)]
    #[case("2.16.840.1.101.3.4.3.2", HashAlgorithm::Sha256)]
    fn test_lookup_signature_hash(#[case] oid_str: &str, #[case] expected: HashAlgorithm) {
        let oid = ObjectIdentifier::from_str(oid_str).unwrap();
        assert_eq!(lookup_signature_hash(&oid), Ok(expected));
    }

    #[rstest]
    #[case::rsa_encryption("1.2.840.113549.1.1.1")]
    #[case::rsassa_pss("1.2.840.113549.1.1.10")]
    #[case::ed25519("1.3.101.112")]
    #[case::common_name("2.5.4.3")]
    fn test_lookup_signature_hash_unsupported(#[case] oid_str: &str) {
        let oid = ObjectIdentifier::from_str(oid_str).unwrap();
        assert_eq!(
            lookup_signature_hash(&oid),
            Err(Error::UnsupportedSignatureAlgorithm(oid.clone()))
        );
    }

    #[rstest]
    #[case(HashAlgorithm::Md5, 16)]
    #[case(HashAlgorithm::Sha1, 20)]
    #[case(HashAlgorithm::Sha224, 28)]
    #[case(HashAlgorithm::Sha256, 32)]
    #[case(HashAlgorithm::Sha384, 48)]
    #[case(HashAlgorithm::Sha512, 64)]
    fn test_digest_size(#[case] algorithm: HashAlgorithm, #[case] expected: usize) {
        assert_eq!(algorithm.digest_size(), expected);
        assert_eq!(algorithm.digest(b"abc").len(), algorithm.digest_size());
    }

    #[test]
    fn test_digest_sha256_known_answer() {
        let expected = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(HashAlgorithm::Sha256.digest(b"abc"), expected.to_vec());
    }
}
