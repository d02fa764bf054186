use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use shomei_pkix_types::{ObjectIdentifier, OidName, get_use_oid_values};
use std::fmt;

use crate::error::Error;

mod basic_constraints;
mod extended_key_usage;
mod key_usage;
mod set;
mod subject_key_identifier;

pub use basic_constraints::BasicConstraints;
pub use extended_key_usage::ExtendedKeyUsage;
pub use key_usage::{KeyUsage, KeyUsageBits};
pub use set::Extensions;
pub use subject_key_identifier::SubjectKeyIdentifier;

/*
RFC 5280 Section 4.1.2.9

Extension  ::=  SEQUENCE  {
    extnID      OBJECT IDENTIFIER,
    critical    BOOLEAN DEFAULT FALSE,
    extnValue   OCTET STRING
                -- contains the DER encoding of an ASN.1 value
                -- corresponding to the extension type identified
                -- by extnID
}
*/

/// Trait for typed X.509 extension values.
///
/// Each implementor is bound to exactly one extension OID and knows how to
/// pick itself out of an [`ExtensionValue`].
///
/// # Example
/// ```
/// use shomei_x509::extensions::{BasicConstraints, Extension, ExtensionType};
///
/// let ext = Extension::new(BasicConstraints::OID, true, BasicConstraints::new(true, None).unwrap()).unwrap();
/// let bc = ext.typed::<BasicConstraints>().unwrap();
/// assert!(bc.ca());
/// ```
pub trait ExtensionType: Sized {
    /// The OID of this extension type (e.g. `2.5.29.19` for BasicConstraints)
    const OID: ObjectIdentifier;

    /// Borrow the typed value if `value` holds this variant
    fn from_value(value: &ExtensionValue) -> Option<&Self>;
}

/// The value carried by an [`Extension`].
///
/// The decoding backend maps the OIDs it understands onto one of the typed
/// variants and leaves everything else as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtensionValue {
    BasicConstraints(BasicConstraints),
    KeyUsage(KeyUsage),
    ExtendedKeyUsage(ExtendedKeyUsage),
    SubjectKeyIdentifier(SubjectKeyIdentifier),
    /// DER bytes of an extension the backend could not interpret
    Unrecognized(Vec<u8>),
}

impl ExtensionValue {
    /// The OID a typed variant belongs to, `None` for [`ExtensionValue::Unrecognized`]
    pub fn oid(&self) -> Option<ObjectIdentifier> {
        match self {
            ExtensionValue::BasicConstraints(_) => Some(BasicConstraints::OID),
            ExtensionValue::KeyUsage(_) => Some(KeyUsage::OID),
            ExtensionValue::ExtendedKeyUsage(_) => Some(ExtendedKeyUsage::OID),
            ExtensionValue::SubjectKeyIdentifier(_) => Some(SubjectKeyIdentifier::OID),
            ExtensionValue::Unrecognized(_) => None,
        }
    }

    /// False only for [`ExtensionValue::Unrecognized`]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ExtensionValue::Unrecognized(_))
    }
}

impl Serialize for ExtensionValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExtensionValue::BasicConstraints(v) => v.serialize(serializer),
            ExtensionValue::KeyUsage(v) => v.serialize(serializer),
            ExtensionValue::ExtendedKeyUsage(v) => v.serialize(serializer),
            ExtensionValue::SubjectKeyIdentifier(v) => v.serialize(serializer),
            ExtensionValue::Unrecognized(bytes) => serializer.serialize_str(&hex(bytes)),
        }
    }
}

impl fmt::Display for ExtensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionValue::BasicConstraints(v) => write!(f, "{}", v),
            ExtensionValue::KeyUsage(v) => write!(f, "{}", v),
            ExtensionValue::ExtendedKeyUsage(v) => write!(f, "{}", v),
            ExtensionValue::SubjectKeyIdentifier(v) => write!(f, "{}", v),
            ExtensionValue::Unrecognized(bytes) => write!(f, "<unrecognized {}>", hex(bytes)),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// A single validated extension: OID, critical flag and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    oid: ObjectIdentifier,
    critical: bool,
    value: ExtensionValue,
}

impl Extension {
    /// Create an extension.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] when a typed value is paired with an OID
    /// other than its own.
    pub fn new(
        oid: ObjectIdentifier,
        critical: bool,
        value: impl Into<ExtensionValue>,
    ) -> Result<Self, Error> {
        let value = value.into();
        if let Some(expected) = value.oid() {
            if expected != oid {
                return Err(Error::InvalidArgument(format!(
                    "extension value for {} cannot be stored under {}",
                    expected, oid
                )));
            }
        }
        Ok(Self {
            oid,
            critical,
            value,
        })
    }

    /// Extension identifier
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    /// Criticality flag as encoded
    pub fn critical(&self) -> bool {
        self.critical
    }

    /// Decoded extension value
    pub fn value(&self) -> &ExtensionValue {
        &self.value
    }

    /// Borrow the value as `T`, `None` if it holds another variant
    pub fn typed<T: ExtensionType>(&self) -> Option<&T> {
        T::from_value(&self.value)
    }
}

impl OidName for Extension {
    fn oid_name(&self) -> Option<&'static str> {
        self.oid.oid_name()
    }
}

impl Serialize for Extension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Extension", 3)?;
        match self.oid_name() {
            Some(name) if !get_use_oid_values() => state.serialize_field("oid", name)?,
            _ => state.serialize_field("oid", self.oid.dotted_string())?,
        }
        state.serialize_field("critical", &self.critical)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.oid_name() {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "{}", self.oid)?,
        }
        if self.critical {
            write!(f, " (critical)")?;
        }
        write!(f, ": {}", self.value)
    }
}
