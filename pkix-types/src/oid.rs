//! Object identifiers
//!
//! ```asn1
//! OBJECT IDENTIFIER ::= dotted-decimal arcs, e.g. 2.5.29.19
//! ```
//!
//! An [`ObjectIdentifier`] wraps the canonical dotted-decimal text. Equality
//! and hashing are plain string comparisons, so the text is validated once at
//! construction and kept canonical (no empty arcs, no leading zeros).
//!
//! The well-known identifiers used across the workspace are defined here as
//! constants. Their human readable names live in the registry in
//! [`crate::oid_name`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::oid_name::lookup_name;

/// Name rendered for identifiers that have no registry entry
pub const UNKNOWN_OID_NAME: &str = "Unknown OID";

/// An ASN.1 OBJECT IDENTIFIER in dotted-decimal form.
///
/// Unknown identifiers are ordinary values; the registry is only consulted
/// for rendering.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
/// use shomei_pkix_types::ObjectIdentifier;
/// use shomei_pkix_types::oid;
///
/// let bc = ObjectIdentifier::from_str("2.5.29.19").unwrap();
/// assert_eq!(bc, oid::BASIC_CONSTRAINTS);
/// assert_eq!(bc.name(), "basicConstraints");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentifier {
    dotted: Cow<'static, str>,
}

impl ObjectIdentifier {
    /// Builds a constant from text known to be canonical.
    pub(crate) const fn from_static(dotted: &'static str) -> Self {
        Self {
            dotted: Cow::Borrowed(dotted),
        }
    }

    /// The dotted-decimal text, e.g. `"2.5.29.19"`
    pub fn dotted_string(&self) -> &str {
        &self.dotted
    }

    /// The registry name, or [`UNKNOWN_OID_NAME`] on a registry miss
    pub fn name(&self) -> &'static str {
        lookup_name(self).unwrap_or(UNKNOWN_OID_NAME)
    }
}

fn validate(s: &str) -> Result<()> {
    let invalid = || Error::InvalidObjectIdentifier(s.to_string());

    let arcs = s.split('.').collect::<Vec<_>>();
    let canonical = |arc: &&str| {
        !arc.is_empty()
            && arc.bytes().all(|b| b.is_ascii_digit())
            && (arc.len() == 1 || !arc.starts_with('0'))
    };
    if arcs.len() < 2 || !arcs.iter().all(canonical) {
        return Err(invalid());
    }

    // X.660: the first arc is 0, 1 or 2; under 0 and 1 the second is below 40
    match (arcs[0], arcs[1].parse::<u64>()) {
        ("2", _) => Ok(()),
        ("0" | "1", Ok(second)) if second < 40 => Ok(()),
        _ => Err(invalid()),
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate(s)?;
        Ok(Self {
            dotted: Cow::Owned(s.to_string()),
        })
    }
}

impl TryFrom<String> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        validate(&value)?;
        Ok(Self {
            dotted: Cow::Owned(value),
        })
    }
}

impl TryFrom<&str> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl AsRef<str> for ObjectIdentifier {
    fn as_ref(&self) -> &str {
        &self.dotted
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.dotted == *other
    }
}

impl PartialEq<ObjectIdentifier> for &str {
    fn eq(&self, other: &ObjectIdentifier) -> bool {
        *self == other.dotted
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}

impl fmt::Debug for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ObjectIdentifier(oid={}, name={})>",
            self.dotted,
            self.name()
        )
    }
}

impl Serialize for ObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.dotted)
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectIdentifier::try_from(s).map_err(serde::de::Error::custom)
    }
}

// Name attribute types (RFC 4519, PKCS#9)
pub const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.3");
pub const COUNTRY_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.6");
pub const LOCALITY_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.7");
pub const STATE_OR_PROVINCE_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.8");
pub const ORGANIZATION_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.10");
pub const ORGANIZATIONAL_UNIT_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.11");
pub const SERIAL_NUMBER: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.5");
pub const SURNAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.4");
pub const GIVEN_NAME: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.42");
pub const TITLE: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.12");
pub const GENERATION_QUALIFIER: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.44");
pub const DN_QUALIFIER: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.46");
pub const PSEUDONYM: ObjectIdentifier = ObjectIdentifier::from_static("2.5.4.65");
pub const DOMAIN_COMPONENT: ObjectIdentifier =
    ObjectIdentifier::from_static("0.9.2342.19200300.100.1.25");
pub const EMAIL_ADDRESS: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.113549.1.9.1");

// Signature algorithms (RFC 3279, RFC 4055, RFC 5758)
pub const RSA_WITH_MD5: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.113549.1.1.4");
pub const RSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.113549.1.1.5");
pub const RSA_WITH_SHA224: ObjectIdentifier =
    ObjectIdentifier::from_static("1.2.840.113549.1.1.14");
pub const RSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::from_static("1.2.840.113549.1.1.11");
pub const RSA_WITH_SHA384: ObjectIdentifier =
    ObjectIdentifier::from_static("1.2.840.113549.1.1.12");
pub const RSA_WITH_SHA512: ObjectIdentifier =
    ObjectIdentifier::from_static("1.2.840.113549.1.1.13");
pub const ECDSA_WITH_SHA224: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10045.4.3.1");
pub const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10045.4.3.2");
pub const ECDSA_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10045.4.3.3");
pub const ECDSA_WITH_SHA512: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10045.4.3.4");
pub const DSA_WITH_SHA1: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10040.4.3");
pub const DSA_WITH_SHA224: ObjectIdentifier =
    ObjectIdentifier::from_static("2.16.840.1.101.3.4.3.1");
pub const DSA_WITH_SHA256: ObjectIdentifier =
    ObjectIdentifier::from_static("2.16.840.1.101.3.4.3.2");

// Public key algorithms
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.113549.1.1.1");
pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10045.2.1");
pub const DSA: ObjectIdentifier = ObjectIdentifier::from_static("1.2.840.10040.4.1");

// Extended key usage purposes (RFC 5280 4.2.1.12)
pub const SERVER_AUTH: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.1");
pub const CLIENT_AUTH: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.2");
pub const CODE_SIGNING: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.3");
pub const EMAIL_PROTECTION: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.4");
pub const TIME_STAMPING: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.8");
pub const OCSP_SIGNING: ObjectIdentifier = ObjectIdentifier::from_static("1.3.6.1.5.5.7.3.9");

// Certificate extensions (RFC 5280 4.2.1)
pub const SUBJECT_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::from_static("2.5.29.14");
pub const KEY_USAGE: ObjectIdentifier = ObjectIdentifier::from_static("2.5.29.15");
pub const BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::from_static("2.5.29.19");
pub const EXTENDED_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::from_static("2.5.29.37");

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;
    use rstest::rstest;

    fn hash_of(oid: &ObjectIdentifier) -> u64 {
        let mut hasher = DefaultHasher::new();
        oid.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case("2.5.29.19")]
    #[case("1.2.840.113549.1.1.11")]
    #[case("0.9.2342.19200300.100.1.25")]
    #[case("1.2.3.4")]
    #[case("2.25.329800735698586629295641978511506172918")]
    fn test_oid_parse_success(#[case] input: &str) {
        let oid = ObjectIdentifier::from_str(input).unwrap();
        assert_eq!(oid.dotted_string(), input);
        assert_eq!(oid.to_string(), input);
    }

    #[rstest]
    #[case::empty("")]
    #[case::single_arc("2")]
    #[case::trailing_dot("2.5.")]
    #[case::empty_arc("2..5")]
    #[case::letters("2.5.abc")]
    #[case::signed("2.-5")]
    #[case::leading_zero("2.05.29")]
    #[case::first_arc_out_of_range("3.5")]
    #[case::second_arc_out_of_range("1.40")]
    #[case::not_an_oid("notanoid")]
    fn test_oid_parse_failure(#[case] input: &str) {
        let result = ObjectIdentifier::from_str(input);
        assert_eq!(
            result,
            Err(Error::InvalidObjectIdentifier(input.to_string()))
        );
    }

    #[rstest]
    #[case("2.5.29.19")]
    #[case("1.2.3.4")]
    #[case("2.999.1")]
    fn test_oid_equal_and_hash(#[case] input: &str) {
        let a = ObjectIdentifier::from_str(input).unwrap();
        let b = ObjectIdentifier::try_from(input.to_string()).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_oid_constant_equals_parsed() {
        let parsed = ObjectIdentifier::from_str("2.5.29.19").unwrap();
        assert_eq!(parsed, BASIC_CONSTRAINTS);
        assert_eq!(hash_of(&parsed), hash_of(&BASIC_CONSTRAINTS));
    }

    #[rstest]
    #[case("2.5.29.19", "2.5.29.15")]
    #[case("1.2.3", "1.2.3.4")]
    #[case("1.2.34", "1.23.4")]
    fn test_oid_not_equal(#[case] left: &str, #[case] right: &str) {
        let a = ObjectIdentifier::from_str(left).unwrap();
        let b = ObjectIdentifier::from_str(right).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_oid_debug() {
        assert_eq!(
            format!("{:?}", BASIC_CONSTRAINTS),
            "<ObjectIdentifier(oid=2.5.29.19, name=basicConstraints)>"
        );
        let unknown = ObjectIdentifier::from_str("1.2.3.4").unwrap();
        assert_eq!(
            format!("{:?}", unknown),
            "<ObjectIdentifier(oid=1.2.3.4, name=Unknown OID)>"
        );
    }

    #[test]
    fn test_oid_serde() {
        let json = serde_json::to_string(&KEY_USAGE).unwrap();
        assert_eq!(json, "\"2.5.29.15\"");

        let oid: ObjectIdentifier = serde_json::from_str("\"2.5.29.15\"").unwrap();
        assert_eq!(oid, KEY_USAGE);

        let invalid: std::result::Result<ObjectIdentifier, _> =
            serde_json::from_str("\"not.an.oid\"");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_oid_str_comparison() {
        assert!(EXTENDED_KEY_USAGE == "2.5.29.37");
        assert!("2.5.29.37" == EXTENDED_KEY_USAGE);
    }
}
