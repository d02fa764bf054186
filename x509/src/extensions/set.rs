use serde::Serialize;
use shomei::decoder::{DecodableFrom, Decoder};
use shomei_pkix_types::ObjectIdentifier;
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::Error;
use crate::extensions::{Extension, ExtensionType};
use crate::raw::RawExtension;

/*
RFC 5280 Section 4.2

A certificate MUST NOT include more than one instance of a particular
extension. A certificate-using system MUST reject the certificate if it
encounters a critical extension it does not recognize; a non-critical
extension MAY be ignored if it is not recognized.
*/

/// Validated set of X.509 v3 extensions ([RFC 5280 Section 4.1.2.9](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.9)).
///
/// No two members share an OID. Order follows the decoder output.
///
/// # Critical vs Non-Critical
/// - An unrecognized critical extension rejects the whole set
/// - An unrecognized non-critical extension is left out of the set
///
/// # Example
/// ```
/// use shomei_pkix_types::oid;
/// use shomei_x509::extensions::{BasicConstraints, Extension, Extensions};
///
/// let bc = BasicConstraints::new(true, None).unwrap();
/// let exts = Extensions::new(vec![Extension::new(oid::BASIC_CONSTRAINTS, true, bc).unwrap()]).unwrap();
/// assert_eq!(exts.get::<BasicConstraints>().unwrap(), &bc);
/// assert!(exts.get_extension_for_oid(&oid::KEY_USAGE).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extensions {
    extensions: Vec<Extension>,
}

/// Applies the membership rules one extension at a time.
#[derive(Default)]
struct Admission {
    seen: HashSet<ObjectIdentifier>,
    extensions: Vec<Extension>,
}

impl Admission {
    fn admit(&mut self, ext: Extension) -> Result<(), Error> {
        if !self.seen.insert(ext.oid().clone()) {
            log::warn!("rejecting extensions: duplicate {}", ext.oid());
            return Err(Error::DuplicateExtension {
                oid: ext.oid().clone(),
            });
        }

        if !ext.value().is_recognized() {
            if ext.critical() {
                log::warn!("rejecting extensions: unsupported critical {}", ext.oid());
                return Err(Error::UnsupportedExtension {
                    oid: ext.oid().clone(),
                });
            }
            log::debug!("omitting unrecognized non-critical extension {}", ext.oid());
            return Ok(());
        }

        self.extensions.push(ext);
        Ok(())
    }

    fn finish(self) -> Extensions {
        Extensions {
            extensions: self.extensions,
        }
    }
}

impl Extensions {
    /// Create a set from individual extensions.
    ///
    /// Follows the same rules as [`Extensions::build`].
    ///
    /// # Errors
    /// [`Error::DuplicateExtension`] when two entries share an OID, and
    /// [`Error::UnsupportedExtension`] for an unrecognized critical entry.
    pub fn new(extensions: Vec<Extension>) -> Result<Self, Error> {
        let mut admission = Admission::default();
        for ext in extensions {
            admission.admit(ext)?;
        }
        Ok(admission.finish())
    }

    /// Build a set from the raw records produced by a decoding backend.
    ///
    /// Records are processed in order and the first failure aborts the
    /// whole build:
    /// - an OID seen earlier in the sequence fails with
    ///   [`Error::DuplicateExtension`], omitted records included
    /// - an unrecognized critical record fails with
    ///   [`Error::UnsupportedExtension`]
    /// - an unrecognized non-critical record is skipped
    pub fn build(records: &[RawExtension]) -> Result<Self, Error> {
        let mut admission = Admission::default();
        for record in records {
            let oid = ObjectIdentifier::from_str(&record.oid)?;
            admission.admit(Extension::new(oid, record.critical, record.value.clone())?)?;
        }
        Ok(admission.finish())
    }

    /// Look up an extension by OID.
    ///
    /// # Errors
    /// [`Error::ExtensionNotFound`] when no member has `oid`.
    pub fn get_extension_for_oid(&self, oid: &ObjectIdentifier) -> Result<&Extension, Error> {
        self.extensions
            .iter()
            .find(|ext| ext.oid() == oid)
            .ok_or_else(|| Error::ExtensionNotFound { oid: oid.clone() })
    }

    /// Look up an extension by type and borrow its value.
    ///
    /// Members always hold the typed value their OID decodes into, so a
    /// present extension never reads as absent.
    ///
    /// # Errors
    /// [`Error::ExtensionNotFound`] when no member has `T::OID`, and
    /// [`Error::UnsupportedExtension`] when the member holds another value.
    pub fn get<T: ExtensionType>(&self) -> Result<&T, Error> {
        self.get_extension_for_oid(&T::OID)?
            .typed::<T>()
            .ok_or(Error::UnsupportedExtension { oid: T::OID })
    }

    /// Iterate over the members in decoder order
    pub fn iter(&self) -> std::slice::Iter<'_, Extension> {
        self.extensions.iter()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// True when the set has no members
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a Extension;
    type IntoIter = std::slice::Iter<'a, Extension>;

    fn into_iter(self) -> Self::IntoIter {
        self.extensions.iter()
    }
}

impl DecodableFrom<Vec<RawExtension>> for Extensions {}

impl Decoder<Vec<RawExtension>, Extensions> for Vec<RawExtension> {
    type Error = Error;

    fn decode(&self) -> Result<Extensions, Self::Error> {
        Extensions::build(self)
    }
}
