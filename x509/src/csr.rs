use serde::Serialize;
use serde::ser::SerializeStruct;
use shomei::decoder::{DecodableFrom, Decoder};
use shomei_pkix_types::{
    HashAlgorithm, Name, ObjectIdentifier, OidName, SubjectPublicKeyInfo, lookup_signature_hash,
};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::raw::{RawCsr, decode_name};

/*
RFC 2986 Section 4
CertificationRequest ::= SEQUENCE {
    certificationRequestInfo CertificationRequestInfo,
    signatureAlgorithm       AlgorithmIdentifier,
    signature                BIT STRING
}

CertificationRequestInfo ::= SEQUENCE {
    version       INTEGER { v1(0) },
    subject       Name,
    subjectPKInfo SubjectPublicKeyInfo,
    attributes    [0] Attributes
}
*/

/// Read access to a certificate signing request.
pub trait CertificateSigningRequest {
    /// Public key the request asks to certify
    fn public_key(&self) -> &SubjectPublicKeyInfo;

    /// Requested subject name
    fn subject(&self) -> &Name;

    /// OID of the algorithm the request is self-signed with
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
}

/// Backend-neutral certificate signing request.
///
/// Built either from a [`RawCsr`] or directly by an application that is
/// assembling a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Csr {
    der: Vec<u8>,
    subject: Name,
    public_key: SubjectPublicKeyInfo,
    signature_algorithm: ObjectIdentifier,
    signature: Vec<u8>,
}

impl X509Csr {
    /// Assemble a request from already-validated parts.
    pub fn new(
        subject: Name,
        public_key: SubjectPublicKeyInfo,
        signature_algorithm: ObjectIdentifier,
        signature: Vec<u8>,
        der: Vec<u8>,
    ) -> Self {
        Self {
            der,
            subject,
            public_key,
            signature_algorithm,
            signature,
        }
    }

    /// DER encoding of the whole request
    pub fn der(&self) -> &[u8] {
        &self.der
    }
}

impl CertificateSigningRequest for X509Csr {
    fn public_key(&self) -> &SubjectPublicKeyInfo {
        &self.public_key
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
}

impl DecodableFrom<RawCsr> for X509Csr {}

impl Decoder<RawCsr, X509Csr> for RawCsr {
    type Error = Error;

    fn decode(&self) -> Result<X509Csr> {
        let public_key = SubjectPublicKeyInfo::new(
            ObjectIdentifier::from_str(&self.public_key_algorithm)?,
            self.public_key.clone(),
        );
        Ok(X509Csr::new(
            decode_name(&self.subject)?,
            public_key,
            ObjectIdentifier::from_str(&self.signature_algorithm)?,
            self.signature.clone(),
            self.der.clone(),
        ))
    }
}

impl Serialize for X509Csr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CertificateSigningRequest", 3)?;
        state.serialize_field("subject", &self.subject)?;
        state.serialize_field(
            "public_key_algorithm",
            self.public_key
                .oid_name()
                .unwrap_or(self.public_key.algorithm().dotted_string()),
        )?;
        state.serialize_field(
            "signature_algorithm",
            self.signature_algorithm
                .oid_name()
                .unwrap_or(self.signature_algorithm.dotted_string()),
        )?;
        state.end()
    }
}
