use serde::{Serialize, Serializer};
use shomei_pkix_types::{ObjectIdentifier, oid};
use std::fmt;

use crate::extensions::{ExtensionType, ExtensionValue};

/*
RFC 5280 Section 4.2.1.2
SubjectKeyIdentifier ::= KeyIdentifier
KeyIdentifier ::= OCTET STRING

Typically a SHA-1 hash of the subjectPublicKey (excluding the tag, length,
and number of unused bits).
*/

/// Subject Key Identifier extension ([RFC 5280 Section 4.2.1.2](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.2)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectKeyIdentifier {
    key_identifier: Vec<u8>,
}

impl SubjectKeyIdentifier {
    pub fn new(key_identifier: impl Into<Vec<u8>>) -> Self {
        Self {
            key_identifier: key_identifier.into(),
        }
    }

    /// Key identifier bytes
    pub fn key_identifier(&self) -> &[u8] {
        &self.key_identifier
    }

    fn to_hex(&self) -> String {
        self.key_identifier
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl ExtensionType for SubjectKeyIdentifier {
    const OID: ObjectIdentifier = oid::SUBJECT_KEY_IDENTIFIER;

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::SubjectKeyIdentifier(ski) => Some(ski),
            _ => None,
        }
    }
}

impl From<SubjectKeyIdentifier> for ExtensionValue {
    fn from(value: SubjectKeyIdentifier) -> Self {
        ExtensionValue::SubjectKeyIdentifier(value)
    }
}

impl Serialize for SubjectKeyIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl fmt::Display for SubjectKeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![0x01, 0x02, 0xab], "01:02:AB")]
    #[case(vec![0xff], "FF")]
    #[case(vec![], "")]
    fn test_subject_key_identifier_display(#[case] bytes: Vec<u8>, #[case] expected: &str) {
        let ski = SubjectKeyIdentifier::new(bytes.clone());
        assert_eq!(ski.key_identifier(), bytes.as_slice());
        assert_eq!(ski.to_string(), expected);
        assert_eq!(
            serde_json::to_string(&ski).unwrap(),
            format!("\"{}\"", expected)
        );
    }

    #[test]
    fn test_subject_key_identifier_from_value() {
        let ski = SubjectKeyIdentifier::new([0xde, 0xad]);
        let value = ExtensionValue::from(ski.clone());
        assert_eq!(SubjectKeyIdentifier::from_value(&value), Some(&ski));
        assert_eq!(SubjectKeyIdentifier::OID, "2.5.29.14");
    }
}
