//! # shomei-x509
//!
//! Validated X.509 certificate, certificate signing request and extension
//! model.
//!
//! Byte-level decoding is delegated to a [`Backend`]. This crate takes the
//! records a backend produces and turns them into values that uphold the
//! X.509 rules:
//! - an [`Extensions`](extensions::Extensions) set never holds two entries
//!   with the same OID and never silently accepts an unknown critical
//!   extension
//! - typed extension values check their own invariants on construction
//! - the certificate version is one of the defined [`Version`]s
//!
//! ## Example
//!
//! ```
//! use shomei_pkix_types::{HashAlgorithm, oid};
//! use shomei_x509::extensions::BasicConstraints;
//! use shomei_x509::{Backend, Certificate, RawCertificate, RawCsr, load_der_x509_certificate};
//! # use shomei_x509::{RawAttribute, RawExtension};
//! # use chrono::NaiveDate;
//! # use num_bigint::BigInt;
//!
//! struct Fixed(RawCertificate);
//!
//! impl Backend for Fixed {
//!     type Error = String;
//!     fn decode_pem_certificate(&self, _: &[u8]) -> Result<RawCertificate, String> {
//!         Err("PEM not supported".to_string())
//!     }
//!     fn decode_der_certificate(&self, _: &[u8]) -> Result<RawCertificate, String> {
//!         Ok(self.0.clone())
//!     }
//!     fn decode_pem_csr(&self, _: &[u8]) -> Result<RawCsr, String> {
//!         Err("not a CSR".to_string())
//!     }
//!     fn decode_der_csr(&self, _: &[u8]) -> Result<RawCsr, String> {
//!         Err("not a CSR".to_string())
//!     }
//! }
//!
//! # let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! # let raw = RawCertificate {
//! #     der: vec![0x30, 0x00],
//! #     serial: BigInt::from(1),
//! #     version: 2,
//! #     issuer: vec![RawAttribute::new("2.5.4.3", "Example CA")],
//! #     subject: vec![RawAttribute::new("2.5.4.3", "example.com")],
//! #     not_before: time,
//! #     not_after: time,
//! #     public_key_algorithm: "1.2.840.10045.2.1".to_string(),
//! #     public_key: vec![0x04],
//! #     signature_algorithm: "1.2.840.10045.4.3.2".to_string(),
//! #     signature: vec![],
//! #     extensions: vec![RawExtension::new("2.5.29.19", true, BasicConstraints::new(true, None).unwrap())],
//! # };
//! let cert = load_der_x509_certificate(&Fixed(raw), &[0x30, 0x00]).unwrap();
//! assert_eq!(cert.signature_hash_algorithm().unwrap(), HashAlgorithm::Sha256);
//! let bc = cert.extensions().unwrap().get::<BasicConstraints>().unwrap();
//! assert!(bc.ca());
//! assert!(cert.extensions().unwrap().get_extension_for_oid(&oid::KEY_USAGE).is_err());
//! ```

#![forbid(unsafe_code)]

mod backend;
mod certificate;
mod csr;
pub mod error;
pub mod extensions;
pub mod raw;
mod version;

pub use backend::{
    Backend, load_der_x509_certificate, load_der_x509_csr, load_pem_x509_certificate,
    load_pem_x509_csr,
};
pub use certificate::{Certificate, X509Certificate};
pub use csr::{CertificateSigningRequest, X509Csr};
pub use error::{Error, Result};
pub use raw::{RawAttribute, RawCertificate, RawCsr, RawExtension};
pub use version::Version;
