//! # shomei
//!
//! Core traits for turning decoder output into validated X.509 values.
//!
//! This crate defines the `Decoder` trait that establishes the type-safe
//! conversion pattern used throughout shomei.
//!
//! ## Overview
//!
//! Byte-level parsing is done by an external backend. shomei only sees what
//! the backend hands over and validates it into typed values:
//! ```text
//! bytes → (backend) → RawCertificate → X509Certificate
//!                     Vec<RawExtension> → Extensions
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next.
//!
//! ## Type Safety
//!
//! The trait uses a marker trait (`DecodableFrom`) to ensure type safety at
//! compile time. A conversion only exists when the destination type opts in
//! for that particular source type.
//!
//! ## Example
//!
//! The concrete implementations live in the `shomei-x509` crate:
//!
//! ```ignore
//! use shomei::decoder::Decoder;
//! use shomei_x509::extensions::Extensions;
//! use shomei_x509::raw::RawExtension;
//!
//! let records: Vec<RawExtension> = backend_output();
//! let extensions: Extensions = records.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
