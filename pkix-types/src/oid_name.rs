//! OID name registry
//!
//! A process-wide, read-only table mapping well-known object identifiers to
//! their conventional names. The table is built on first use and never
//! mutated afterwards. A miss is not an error: unknown identifiers are
//! legitimate and simply have no name.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::oid::{self, ObjectIdentifier};

/// Trait for types that have OIDs with conventional names
///
/// This trait allows retrieving human-readable names for well-known OIDs.
/// For example, the OID `2.5.29.19` has the conventional name `basicConstraints`.
pub trait OidName {
    /// Returns the conventional name for this type's OID, if it has one
    fn oid_name(&self) -> Option<&'static str>;
}

const OID_NAMES: &[(ObjectIdentifier, &str)] = &[
    (oid::COMMON_NAME, "commonName"),
    (oid::COUNTRY_NAME, "countryName"),
    (oid::LOCALITY_NAME, "localityName"),
    (oid::STATE_OR_PROVINCE_NAME, "stateOrProvinceName"),
    (oid::ORGANIZATION_NAME, "organizationName"),
    (oid::ORGANIZATIONAL_UNIT_NAME, "organizationalUnitName"),
    (oid::SERIAL_NUMBER, "serialNumber"),
    (oid::SURNAME, "surname"),
    (oid::GIVEN_NAME, "givenName"),
    (oid::TITLE, "title"),
    (oid::GENERATION_QUALIFIER, "generationQualifier"),
    (oid::DN_QUALIFIER, "dnQualifier"),
    (oid::PSEUDONYM, "pseudonym"),
    (oid::DOMAIN_COMPONENT, "domainComponent"),
    (oid::EMAIL_ADDRESS, "emailAddress"),
    (oid::RSA_WITH_MD5, "md5WithRSAEncryption"),
    (oid::RSA_WITH_SHA1, "sha1WithRSAEncryption"),
    (oid::RSA_WITH_SHA224, "sha224WithRSAEncryption"),
    (oid::RSA_WITH_SHA256, "sha256WithRSAEncryption"),
    (oid::RSA_WITH_SHA384, "sha384WithRSAEncryption"),
    (oid::RSA_WITH_SHA512, "sha512WithRSAEncryption"),
    (oid::ECDSA_WITH_SHA224, "ecdsa-with-SHA224"),
    (oid::ECDSA_WITH_SHA256, "ecdsa-with-SHA256"),
    (oid::ECDSA_WITH_SHA384, "ecdsa-with-SHA384"),
    (oid::ECDSA_WITH_SHA512, "ecdsa-with-SHA512"),
    (oid::DSA_WITH_SHA1, "dsa-with-sha1"),
    (oid::DSA_WITH_SHA224, "dsa-with-sha224"),
    (oid::DSA_WITH_SHA256, "dsa-with-sha256"),
    (oid::RSA_ENCRYPTION, "rsaEncryption"),
    (oid::EC_PUBLIC_KEY, "id-ecPublicKey"),
    (oid::DSA, "id-dsa"),
    (oid::SERVER_AUTH, "serverAuth"),
    (oid::CLIENT_AUTH, "clientAuth"),
    (oid::CODE_SIGNING, "codeSigning"),
    (oid::EMAIL_PROTECTION, "emailProtection"),
    (oid::TIME_STAMPING, "timeStamping"),
    (oid::OCSP_SIGNING, "OCSPSigning"),
    (oid::SUBJECT_KEY_IDENTIFIER, "subjectKeyIdentifier"),
    (oid::KEY_USAGE, "keyUsage"),
    (oid::BASIC_CONSTRAINTS, "basicConstraints"),
    (oid::EXTENDED_KEY_USAGE, "extendedKeyUsage"),
];

static REGISTRY: LazyLock<HashMap<ObjectIdentifier, &'static str>> =
    LazyLock::new(|| OID_NAMES.iter().cloned().collect());

/// Look up the conventional name of an OID.
///
/// Returns `None` for identifiers the registry does not know.
pub fn lookup_name(oid: &ObjectIdentifier) -> Option<&'static str> {
    REGISTRY.get(oid).copied()
}

impl OidName for ObjectIdentifier {
    fn oid_name(&self) -> Option<&'static str> {
        lookup_name(self)
    }
}
