use serde::Serialize;
use shomei_pkix_types::{ObjectIdentifier, oid};
use std::fmt;

use crate::error::Error;
use crate::extensions::{ExtensionType, ExtensionValue};

/*
RFC 5280 Section 4.2.1.9
BasicConstraints ::= SEQUENCE {
    cA                      BOOLEAN DEFAULT FALSE,
    pathLenConstraint       INTEGER (0..MAX) OPTIONAL
}
*/

/// Basic Constraints extension ([RFC 5280 Section 4.2.1.9](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.9)).
///
/// Identifies whether the subject of the certificate is a CA and the maximum
/// depth of valid certification paths that include this certificate.
///
/// # Fields
/// - `ca`: Whether the certified public key may be used to verify certificate signatures
/// - `path_length`: Maximum number of non-self-issued intermediate certificates
///   that may follow this certificate in a valid certification path
///
/// A path length only means something for a CA, so it can only be set when
/// `ca` is true. This is checked when the value is built.
///
/// # Example
/// ```
/// use shomei_x509::extensions::BasicConstraints;
///
/// let bc = BasicConstraints::new(true, Some(6)).unwrap();
/// assert_eq!(bc.path_length(), Some(6));
/// assert!(BasicConstraints::new(false, Some(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BasicConstraints {
    ca: bool,
    path_length: Option<u32>,
}

impl BasicConstraints {
    /// # Errors
    /// [`Error::InvalidArgument`] when a path length is given for a non-CA.
    pub fn new(ca: bool, path_length: Option<u32>) -> Result<Self, Error> {
        if path_length.is_some() && !ca {
            return Err(Error::InvalidArgument(
                "BasicConstraints: path_length must be None when ca is false".to_string(),
            ));
        }
        Ok(Self { ca, path_length })
    }

    /// Whether this certificate represents a CA
    pub fn ca(&self) -> bool {
        self.ca
    }

    /// Optional maximum path length for certificate chains
    pub fn path_length(&self) -> Option<u32> {
        self.path_length
    }
}

impl ExtensionType for BasicConstraints {
    const OID: ObjectIdentifier = oid::BASIC_CONSTRAINTS;

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::BasicConstraints(bc) => Some(bc),
            _ => None,
        }
    }
}

impl From<BasicConstraints> for ExtensionValue {
    fn from(value: BasicConstraints) -> Self {
        ExtensionValue::BasicConstraints(value)
    }
}

impl fmt::Display for BasicConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ca {
            write!(f, "CA:TRUE")?;
            if let Some(pathlen) = self.path_length {
                write!(f, ", pathlen:{}", pathlen)?;
            }
            Ok(())
        } else {
            write!(f, "CA:FALSE")
        }
    }
}
