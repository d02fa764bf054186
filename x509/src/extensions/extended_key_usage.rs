use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use shomei_pkix_types::{ObjectIdentifier, OidName, get_use_oid_values, oid};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::extensions::{ExtensionType, ExtensionValue};

/*
RFC 5280 Section 4.2.1.12
ExtendedKeyUsage ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
KeyPurposeId ::= OBJECT IDENTIFIER
*/

/// Extended Key Usage extension ([RFC 5280 Section 4.2.1.12](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.12)).
///
/// An ordered list of key purposes. Every element is an [`ObjectIdentifier`],
/// so a malformed purpose cannot be represented.
///
/// # Example
/// ```
/// use shomei_pkix_types::oid;
/// use shomei_x509::extensions::ExtendedKeyUsage;
///
/// let eku = ExtendedKeyUsage::from_dotted(["1.3.6.1.5.5.7.3.1", "1.3.6.1.5.5.7.3.2"]).unwrap();
/// assert_eq!(eku.len(), 2);
/// assert!(eku.contains(&oid::SERVER_AUTH));
/// assert_eq!(eku.to_string(), "serverAuth, clientAuth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtendedKeyUsage {
    usages: Vec<ObjectIdentifier>,
}

impl ExtendedKeyUsage {
    /// Create from already-validated key purposes, keeping their order.
    pub fn new(usages: Vec<ObjectIdentifier>) -> Self {
        Self { usages }
    }

    /// Key purpose as rendered in output: registry name, or the dotted
    /// form when unnamed or when OID values are requested
    fn display_name(usage: &ObjectIdentifier) -> &str {
        match usage.oid_name() {
            Some(name) if !get_use_oid_values() => name,
            _ => usage.dotted_string(),
        }
    }

    /// Build from dotted-decimal strings.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for the first element that is not an OID.
    pub fn from_dotted<I, S>(usages: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let usages = usages
            .into_iter()
            .map(|s| {
                ObjectIdentifier::from_str(s.as_ref()).map_err(|_| {
                    Error::InvalidArgument(format!(
                        "ExtendedKeyUsage: every usage must be an ObjectIdentifier, got '{}'",
                        s.as_ref()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { usages })
    }

    /// Iterate over the key purposes in order
    pub fn iter(&self) -> std::slice::Iter<'_, ObjectIdentifier> {
        self.usages.iter()
    }

    /// Number of key purposes
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    /// True when no key purpose is listed
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// True when `usage` is one of the key purposes
    pub fn contains(&self, usage: &ObjectIdentifier) -> bool {
        self.usages.contains(usage)
    }
}

impl<'a> IntoIterator for &'a ExtendedKeyUsage {
    type Item = &'a ObjectIdentifier;
    type IntoIter = std::slice::Iter<'a, ObjectIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.usages.iter()
    }
}

impl ExtensionType for ExtendedKeyUsage {
    const OID: ObjectIdentifier = oid::EXTENDED_KEY_USAGE;

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::ExtendedKeyUsage(eku) => Some(eku),
            _ => None,
        }
    }
}

impl From<ExtendedKeyUsage> for ExtensionValue {
    fn from(value: ExtendedKeyUsage) -> Self {
        ExtensionValue::ExtendedKeyUsage(value)
    }
}

impl Serialize for ExtendedKeyUsage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.usages.len()))?;
        for usage in &self.usages {
            seq.serialize_element(Self::display_name(usage))?;
        }
        seq.end()
    }
}

impl fmt::Display for ExtendedKeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .usages
            .iter()
            .map(|usage| match usage.oid_name() {
                Some(name) => name,
                None => usage.dotted_string(),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec!["1.3.6.1.5.5.7.3.1"], vec![oid::SERVER_AUTH])]
    #[case(
        vec!["1.3.6.1.5.5.7.3.1", "1.3.6.1.5.5.7.3.9"],
        vec![oid::SERVER_AUTH, oid::OCSP_SIGNING]
    )]
    #[case(vec![], vec![])]
    fn test_extended_key_usage_from_dotted(
        #[case] input: Vec<&str>,
        #[case] expected: Vec<ObjectIdentifier>,
    ) {
        let eku = ExtendedKeyUsage::from_dotted(input).unwrap();
        assert_eq!(eku.len(), expected.len());
        assert_eq!(eku.iter().cloned().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(vec!["1.3.6.1.5.5.7.3.1", "not-an-oid"])]
    #[case(vec![""])]
    #[case(vec!["1"])]
    fn test_extended_key_usage_from_dotted_invalid(#[case] input: Vec<&str>) {
        let result = ExtendedKeyUsage::from_dotted(input);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_extended_key_usage_preserves_order() {
        let eku = ExtendedKeyUsage::new(vec![oid::CLIENT_AUTH, oid::SERVER_AUTH]);
        let collected: Vec<&ObjectIdentifier> = (&eku).into_iter().collect();
        assert_eq!(collected, vec![&oid::CLIENT_AUTH, &oid::SERVER_AUTH]);
        assert!(eku.contains(&oid::SERVER_AUTH));
        assert!(!eku.contains(&oid::CODE_SIGNING));
    }

    #[test]
    fn test_extended_key_usage_display_unknown_purpose() {
        let eku = ExtendedKeyUsage::from_dotted(["1.3.6.1.5.5.7.3.3", "1.2.3.4"]).unwrap();
        assert_eq!(eku.to_string(), "codeSigning, 1.2.3.4");
    }

    #[test]
    fn test_extended_key_usage_serialize_names() {
        let eku = ExtendedKeyUsage::from_dotted(["1.3.6.1.5.5.7.3.1", "1.2.3.4"]).unwrap();
        let json = serde_json::to_string(&eku).unwrap();
        assert_eq!(json, r#"["serverAuth","1.2.3.4"]"#);
    }
}
