//! Boundary with the decoding backend.
//!
//! A [`Backend`] turns PEM or DER bytes into [`RawCertificate`] and
//! [`RawCsr`] records. The `load_*` functions run a backend and convert its
//! output into validated [`X509Certificate`] and [`X509Csr`] values.

use std::fmt;

use shomei::decoder::Decoder;

use crate::certificate::X509Certificate;
use crate::csr::X509Csr;
use crate::error::{Error, Result};
use crate::raw::{RawCertificate, RawCsr};

/// Bytes-to-record decoder supplied by the application.
pub trait Backend {
    type Error: fmt::Display;

    /// Decode one PEM certificate block
    fn decode_pem_certificate(&self, data: &[u8]) -> std::result::Result<RawCertificate, Self::Error>;

    /// Decode a DER certificate
    fn decode_der_certificate(&self, data: &[u8]) -> std::result::Result<RawCertificate, Self::Error>;

    /// Decode one PEM certificate request block
    fn decode_pem_csr(&self, data: &[u8]) -> std::result::Result<RawCsr, Self::Error>;

    /// Decode a DER certificate request
    fn decode_der_csr(&self, data: &[u8]) -> std::result::Result<RawCsr, Self::Error>;
}

fn decode_failure<E: fmt::Display>(err: E) -> Error {
    Error::Decode(err.to_string())
}

/// Load a PEM encoded certificate.
///
/// # Errors
/// [`Error::Decode`] when the backend rejects the input, and
/// [`Error::InvalidArgument`] when a decoded OID is malformed.
pub fn load_pem_x509_certificate<B>(backend: &B, data: &[u8]) -> Result<X509Certificate>
where
    B: Backend + ?Sized,
{
    backend
        .decode_pem_certificate(data)
        .map_err(decode_failure)?
        .decode()
}

/// Load a DER encoded certificate.
///
/// # Errors
/// See [`load_pem_x509_certificate`].
pub fn load_der_x509_certificate<B>(backend: &B, data: &[u8]) -> Result<X509Certificate>
where
    B: Backend + ?Sized,
{
    backend
        .decode_der_certificate(data)
        .map_err(decode_failure)?
        .decode()
}

/// Load a PEM encoded certificate signing request.
///
/// # Errors
/// [`Error::Decode`] when the backend rejects the input, and
/// [`Error::InvalidArgument`] when a decoded OID is malformed.
pub fn load_pem_x509_csr<B>(backend: &B, data: &[u8]) -> Result<X509Csr>
where
    B: Backend + ?Sized,
{
    backend.decode_pem_csr(data).map_err(decode_failure)?.decode()
}

/// Load a DER encoded certificate signing request.
///
/// # Errors
/// See [`load_pem_x509_csr`].
pub fn load_der_x509_csr<B>(backend: &B, data: &[u8]) -> Result<X509Csr>
where
    B: Backend + ?Sized,
{
    backend.decode_der_csr(data).map_err(decode_failure)?.decode()
}
