//! Name and related types
//!
//! Defined in RFC 5280 Section 4.1.2.4
//!
//! ```asn1
//! Name ::= CHOICE { -- only one possibility for now --
//!     rdnSequence  RDNSequence
//! }
//!
//! RDNSequence ::= SEQUENCE OF RelativeDistinguishedName
//!
//! RelativeDistinguishedName ::= SET OF AttributeTypeAndValue
//!
//! AttributeTypeAndValue ::= SEQUENCE {
//!     type     AttributeType,
//!     value    AttributeValue
//! }
//! ```
//!
//! The RDN structure is flattened: a [`Name`] is the ordered sequence of its
//! attributes as the decoder produced them.

use std::fmt;

use serde::{Serialize, ser::SerializeStruct};

use crate::OidName;
use crate::oid::{self, ObjectIdentifier};

/// X.509 Distinguished Name
///
/// An ordered sequence of [`NameAttribute`]s. The order is kept exactly as
/// decoded, and the same attribute type may appear more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name {
    attributes: Vec<NameAttribute>,
}

impl Name {
    /// Create a new Name from attributes in RDN sequence order
    pub fn new(attributes: Vec<NameAttribute>) -> Self {
        Self { attributes }
    }

    /// Every attribute whose type is `oid`, in original order.
    ///
    /// An empty result is a normal answer, not a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use shomei_pkix_types::{oid, Name, NameAttribute};
    ///
    /// let name = Name::new(vec![
    ///     NameAttribute::new(oid::DOMAIN_COMPONENT, "example"),
    ///     NameAttribute::new(oid::DOMAIN_COMPONENT, "com"),
    /// ]);
    /// let dcs = name.get_attributes_for_oid(&oid::DOMAIN_COMPONENT);
    /// assert_eq!(dcs.len(), 2);
    /// assert!(name.get_attributes_for_oid(&oid::COMMON_NAME).is_empty());
    /// ```
    pub fn get_attributes_for_oid(&self, oid: &ObjectIdentifier) -> Vec<&NameAttribute> {
        self.attributes
            .iter()
            .filter(|attr| attr.oid() == oid)
            .collect()
    }

    /// Get a reference to the attributes
    pub fn attributes(&self) -> &[NameAttribute] {
        &self.attributes
    }

    /// Iterate over the attributes in encoded order
    pub fn iter(&self) -> std::slice::Iter<'_, NameAttribute> {
        self.attributes.iter()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when the name has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .attributes
            .iter()
            .map(|attr| attr.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", formatted)
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a NameAttribute;
    type IntoIter = std::slice::Iter<'a, NameAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<NameAttribute> for Name {
    fn from_iter<I: IntoIterator<Item = NameAttribute>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// Attribute type and value pair
///
/// Represents a single attribute in an X.509 Name, such as CN=example.com
/// or O=Example Organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameAttribute {
    oid: ObjectIdentifier,
    value: String,
}

impl NameAttribute {
    /// Create a new NameAttribute
    pub fn new(oid: ObjectIdentifier, value: impl Into<String>) -> Self {
        Self {
            oid,
            value: value.into(),
        }
    }

    /// The attribute type
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    /// The attribute value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Short label used in the one-line rendering of a Name (CN, O, ...)
    fn short_name(&self) -> Option<&'static str> {
        let label = match &self.oid {
            o if *o == oid::COMMON_NAME => "CN",
            o if *o == oid::COUNTRY_NAME => "C",
            o if *o == oid::LOCALITY_NAME => "L",
            o if *o == oid::STATE_OR_PROVINCE_NAME => "ST",
            o if *o == oid::ORGANIZATION_NAME => "O",
            o if *o == oid::ORGANIZATIONAL_UNIT_NAME => "OU",
            o if *o == oid::DOMAIN_COMPONENT => "DC",
            o if *o == oid::SURNAME => "SN",
            o if *o == oid::GIVEN_NAME => "GN",
            _ => return self.oid_name(),
        };
        Some(label)
    }
}

impl OidName for NameAttribute {
    fn oid_name(&self) -> Option<&'static str> {
        self.oid.oid_name()
    }
}

impl fmt::Display for NameAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_name() {
            Some(label) => write!(f, "{}={}", label, self.value),
            None => write!(f, "{}={}", self.oid, self.value),
        }
    }
}

impl Serialize for NameAttribute {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("NameAttribute", 2)?;

        let type_name = if crate::get_use_oid_values() {
            self.oid.to_string()
        } else {
            self.oid_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| self.oid.to_string())
        };

        state.serialize_field("oid", &type_name)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use rstest::rstest;

    fn example_name() -> Name {
        Name::new(vec![
            NameAttribute::new(oid::COUNTRY_NAME, "US"),
            NameAttribute::new(oid::ORGANIZATION_NAME, "Example Org"),
            NameAttribute::new(oid::ORGANIZATIONAL_UNIT_NAME, "Ops"),
            NameAttribute::new(oid::ORGANIZATIONAL_UNIT_NAME, "Security"),
            NameAttribute::new(oid::COMMON_NAME, "example.com"),
        ])
    }

    #[test]
    fn test_name_display() {
        assert_eq!(
            example_name().to_string(),
            "C=US, O=Example Org, OU=Ops, OU=Security, CN=example.com"
        );
    }

    #[test]
    fn test_name_display_unknown_oid() {
        let name = Name::new(vec![NameAttribute::new(
            ObjectIdentifier::from_str("1.2.3.4").unwrap(),
            "x",
        )]);
        assert_eq!(name.to_string(), "1.2.3.4=x");
    }

    #[rstest]
    #[case(oid::COMMON_NAME, vec!["example.com"])]
    #[case(oid::ORGANIZATIONAL_UNIT_NAME, vec!["Ops", "Security"])]
    #[case(oid::EMAIL_ADDRESS, vec![])]
    fn test_get_attributes_for_oid(#[case] oid: ObjectIdentifier, #[case] expected: Vec<&str>) {
        let name = example_name();
        let values = name
            .get_attributes_for_oid(&oid)
            .iter()
            .map(|attr| attr.value())
            .collect::<Vec<_>>();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_name_equality_is_sequence_equality() {
        let a = Name::new(vec![
            NameAttribute::new(oid::COUNTRY_NAME, "US"),
            NameAttribute::new(oid::COMMON_NAME, "a"),
        ]);
        let b = Name::new(vec![
            NameAttribute::new(oid::COUNTRY_NAME, "US"),
            NameAttribute::new(oid::COMMON_NAME, "a"),
        ]);
        let reordered = Name::new(vec![
            NameAttribute::new(oid::COMMON_NAME, "a"),
            NameAttribute::new(oid::COUNTRY_NAME, "US"),
        ]);
        assert_eq!(a, b);
        assert_ne!(a, reordered);
        assert_eq!(a.len(), 2);
        assert!(Name::default().is_empty());
    }

    #[rstest]
    #[case(oid::COMMON_NAME, "a", oid::COMMON_NAME, "a", true)]
    #[case(oid::COMMON_NAME, "a", oid::COMMON_NAME, "b", false)]
    #[case(oid::COMMON_NAME, "a", oid::TITLE, "a", false)]
    fn test_name_attribute_equality(
        #[case] left_oid: ObjectIdentifier,
        #[case] left_value: &str,
        #[case] right_oid: ObjectIdentifier,
        #[case] right_value: &str,
        #[case] equal: bool,
    ) {
        let left = NameAttribute::new(left_oid, left_value);
        let right = NameAttribute::new(right_oid, right_value);
        assert_eq!(left == right, equal);
    }

    #[test]
    fn test_name_serialize() {
        let name = Name::new(vec![NameAttribute::new(oid::COMMON_NAME, "example.com")]);
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"[{"oid":"commonName","value":"example.com"}]"#);
    }

    #[test]
    fn test_name_from_iter() {
        let name = example_name().iter().cloned().collect::<Name>();
        assert_eq!(name, example_name());
        assert_eq!((&name).into_iter().count(), 5);
    }
}
