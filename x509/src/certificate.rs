use chrono::{DateTime, Utc};
use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use shomei::decoder::{DecodableFrom, Decoder};
use shomei_pkix_types::{
    CertificateSerialNumber, HashAlgorithm, Name, ObjectIdentifier, OidName,
    SubjectPublicKeyInfo, lookup_signature_hash,
};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::extensions::Extensions;
use crate::raw::{RawCertificate, RawExtension, decode_name};
use crate::version::Version;

/*
RFC 5280 Section 4.1
Certificate  ::=  SEQUENCE  {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signatureValue       BIT STRING
}

TBSCertificate  ::=  SEQUENCE  {
    version         [0]  EXPLICIT Version DEFAULT v1,
    serialNumber         CertificateSerialNumber,
    signature            AlgorithmIdentifier,
    issuer               Name,
    validity             Validity,
    subject              Name,
    subjectPublicKeyInfo SubjectPublicKeyInfo,
    issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
    subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
    extensions      [3]  EXPLICIT Extensions OPTIONAL
}
*/

/// Read access to an X.509 certificate.
///
/// Implemented by every concrete certificate type regardless of which
/// backend decoded it.
pub trait Certificate {
    /// Digest of the full DER encoding
    fn fingerprint(&self, algorithm: HashAlgorithm) -> Vec<u8>;

    /// Serial number assigned by the issuer
    fn serial_number(&self) -> &CertificateSerialNumber;

    /// # Errors
    /// [`Error::InvalidVersion`] when the encoded version is neither v1 nor v3.
    fn version(&self) -> Result<Version>;

    /// Subject public key
    fn public_key(&self) -> &SubjectPublicKeyInfo;

    /// Start of the validity period, in UTC
    fn not_valid_before(&self) -> DateTime<Utc>;

    /// End of the validity period, in UTC
    fn not_valid_after(&self) -> DateTime<Utc>;

    /// Issuer distinguished name
    fn issuer(&self) -> &Name;

    /// Subject distinguished name
    fn subject(&self) -> &Name;

    /// OID of the algorithm the issuer signed with
    fn signature_algorithm_oid(&self) -> &ObjectIdentifier;

    /// Hash algorithm implied by the signature algorithm.
    ///
    /// # Errors
    /// [`Error::UnsupportedSignatureAlgorithm`] when the signature OID has no
    /// known hash.
    fn signature_hash_algorithm(&self) -> Result<HashAlgorithm> {
        Ok(lookup_signature_hash(self.signature_algorithm_oid())?)
    }

    /// Raw signature bytes
    fn signature(&self) -> &[u8];

    /// The validated extension set.
    ///
    /// # Errors
    /// [`Error::DuplicateExtension`] or [`Error::UnsupportedExtension`] when
    /// the decoded records violate the extension rules.
    fn extensions(&self) -> Result<&Extensions>;
}

/// Backend-neutral certificate built from a [`RawCertificate`].
///
/// Names and OIDs are validated when the certificate is built. The version
/// is classified on access. Extensions are validated on first access and the
/// outcome, success or failure, is kept for every later call from any thread.
#[derive(Debug, Clone)]
pub struct X509Certificate {
    der: Vec<u8>,
    serial_number: CertificateSerialNumber,
    version: i64,
    issuer: Name,
    subject: Name,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    public_key: SubjectPublicKeyInfo,
    signature_algorithm: ObjectIdentifier,
    signature: Vec<u8>,
    raw_extensions: Vec<RawExtension>,
    extensions: OnceLock<Result<Extensions>>,
}

impl X509Certificate {
    /// The full DER encoding
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// The extension records exactly as the backend reported them
    pub fn raw_extensions(&self) -> &[RawExtension] {
        &self.raw_extensions
    }
}

impl Certificate for X509Certificate {
    fn fingerprint(&self, algorithm: HashAlgorithm) -> Vec<u8> {
        algorithm.digest(&self.der)
    }

    fn serial_number(&self) -> &CertificateSerialNumber {
        &self.serial_number
    }

    fn version(&self) -> Result<Version> {
        Version::try_from(self.version)
    }

    fn public_key(&self) -> &SubjectPublicKeyInfo {
        &self.public_key
    }

    fn not_valid_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    fn not_valid_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    fn issuer(&self) -> &Name {
        &self.issuer
    }

    fn subject(&self) -> &Name {
        &self.subject
    }

    fn signature_algorithm_oid(&self) -> &ObjectIdentifier {
        &self.signature_algorithm
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }

    fn extensions(&self) -> Result<&Extensions> {
        self.extensions
            .get_or_init(|| {
                let built = self.raw_extensions.decode();
                log::debug!(
                    "built extensions for certificate {}: {}",
                    self.serial_number.format_hex(),
                    match &built {
                        Ok(exts) => format!("{} accepted", exts.len()),
                        Err(e) => e.to_string(),
                    }
                );
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

// the memoized extension set is derived from raw_extensions
impl PartialEq for X509Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
            && self.serial_number == other.serial_number
            && self.version == other.version
            && self.issuer == other.issuer
            && self.subject == other.subject
            && self.not_before == other.not_before
            && self.not_after == other.not_after
            && self.public_key == other.public_key
            && self.signature_algorithm == other.signature_algorithm
            && self.signature == other.signature
            && self.raw_extensions == other.raw_extensions
    }
}

impl Eq for X509Certificate {}

impl DecodableFrom<RawCertificate> for X509Certificate {}

impl Decoder<RawCertificate, X509Certificate> for RawCertificate {
    type Error = Error;

    fn decode(&self) -> Result<X509Certificate> {
        Ok(X509Certificate {
            der: self.der.clone(),
            serial_number: CertificateSerialNumber::from(self.serial.clone()),
            version: self.version,
            issuer: decode_name(&self.issuer)?,
            subject: decode_name(&self.subject)?,
            not_before: self.not_before.and_utc(),
            not_after: self.not_after.and_utc(),
            public_key: SubjectPublicKeyInfo::new(
                ObjectIdentifier::from_str(&self.public_key_algorithm)?,
                self.public_key.clone(),
            ),
            signature_algorithm: ObjectIdentifier::from_str(&self.signature_algorithm)?,
            signature: self.signature.clone(),
            raw_extensions: self.extensions.clone(),
            extensions: OnceLock::new(),
        })
    }
}

impl Serialize for X509Certificate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let version = self.version().map_err(S::Error::custom)?;
        let extensions = self.extensions().map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("Certificate", 9)?;
        state.serialize_field("version", &version)?;
        state.serialize_field("serial_number", &self.serial_number)?;
        state.serialize_field(
            "signature_algorithm",
            self.signature_algorithm
                .oid_name()
                .unwrap_or(self.signature_algorithm.dotted_string()),
        )?;
        state.serialize_field("issuer", &self.issuer)?;
        state.serialize_field("not_before", &self.not_before.to_rfc3339())?;
        state.serialize_field("not_after", &self.not_after.to_rfc3339())?;
        state.serialize_field("subject", &self.subject)?;
        state.serialize_field(
            "public_key_algorithm",
            self.public_key
                .oid_name()
                .unwrap_or(self.public_key.algorithm().dotted_string()),
        )?;
        state.serialize_field("extensions", extensions)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::{BasicConstraints, ExtensionValue};
    use crate::raw::RawAttribute;
    use chrono::NaiveDate;
    use num_bigint::BigInt;
    use rstest::rstest;
    use shomei_pkix_types::oid;

    fn raw_certificate() -> RawCertificate {
        let not_before = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let not_after = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        RawCertificate {
            der: b"certificate".to_vec(),
            serial: BigInt::from(4096),
            version: 2,
            issuer: vec![RawAttribute::new("2.5.4.3", "Example CA")],
            subject: vec![
                RawAttribute::new("2.5.4.6", "US"),
                RawAttribute::new("2.5.4.3", "example.com"),
            ],
            not_before,
            not_after,
            public_key_algorithm: "1.2.840.10045.2.1".to_string(),
            public_key: vec![0x04, 0x01],
            signature_algorithm: "1.2.840.10045.4.3.2".to_string(),
            signature: vec![0x30, 0x00],
            extensions: vec![RawExtension::new(
                "2.5.29.19",
                true,
                BasicConstraints::new(true, None).unwrap(),
            )],
        }
    }

    #[test]
    fn test_decode_certificate() {
        let cert: X509Certificate = raw_certificate().decode().unwrap();
        assert_eq!(cert.version(), Ok(Version::V3));
        assert_eq!(cert.serial_number().format_hex(), "10:00");
        assert_eq!(cert.subject().to_string(), "C=US, CN=example.com");
        assert_eq!(cert.issuer().to_string(), "CN=Example CA");
        assert_eq!(cert.public_key().algorithm(), &oid::EC_PUBLIC_KEY);
        assert_eq!(cert.signature_algorithm_oid(), &oid::ECDSA_WITH_SHA256);
        assert_eq!(cert.signature_hash_algorithm(), Ok(HashAlgorithm::Sha256));
        assert_eq!(cert.signature(), &[0x30, 0x00]);
        assert_eq!(
            cert.not_valid_before().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert!(cert.not_valid_after() > cert.not_valid_before());
        assert_eq!(cert.extensions().unwrap().len(), 1);
    }

    #[rstest]
    #[case::issuer({
        let mut raw = raw_certificate();
        raw.issuer.push(RawAttribute::new("CN", "x"));
        raw
    })]
    #[case::public_key_algorithm({
        let mut raw = raw_certificate();
        raw.public_key_algorithm = "ecPublicKey".to_string();
        raw
    })]
    #[case::signature_algorithm({
        let mut raw = raw_certificate();
        raw.signature_algorithm = String::new();
        raw
    })]
    fn test_decode_certificate_invalid_oid(#[case] raw: RawCertificate) {
        let result: Result<X509Certificate> = raw.decode();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_extension_failure_is_memoized() {
        let mut raw = raw_certificate();
        raw.extensions.push(RawExtension::new(
            "1.2.3.4",
            true,
            ExtensionValue::Unrecognized(vec![0x05, 0x00]),
        ));
        let cert: X509Certificate = raw.decode().unwrap();
        let expected = Err(Error::UnsupportedExtension {
            oid: ObjectIdentifier::from_str("1.2.3.4").unwrap(),
        });
        assert_eq!(cert.extensions().cloned(), expected);
        assert_eq!(cert.extensions().cloned(), expected);
        // the rest of the certificate stays readable
        assert_eq!(cert.subject().len(), 2);
    }

    #[test]
    fn test_equality_ignores_memo() {
        let a: X509Certificate = raw_certificate().decode().unwrap();
        let b: X509Certificate = raw_certificate().decode().unwrap();
        let _ = a.extensions();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint() {
        let cert: X509Certificate = raw_certificate().decode().unwrap();
        assert_eq!(
            cert.fingerprint(HashAlgorithm::Sha256),
            HashAlgorithm::Sha256.digest(b"certificate")
        );
        assert_eq!(cert.fingerprint(HashAlgorithm::Sha1).len(), 20);
    }
}
