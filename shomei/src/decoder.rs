//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait enables converting from a source type `T` to a
//! destination type `D` in a type-safe manner. shomei uses it wherever raw
//! backend output is validated into a typed value.
//!
//! # Design Pattern
//!
//! The decoder uses a two-trait pattern:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! To add a new decodable type, implement both traits:
//!
//! ```no_run
//! use shomei::decoder::{Decoder, DecodableFrom};
//!
//! struct RawRecord(Vec<(String, String)>);
//! struct Validated(Vec<String>);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! // 1. Mark the destination type as decodable from the source type
//! impl DecodableFrom<RawRecord> for Validated {}
//!
//! // 2. Implement the decoder on the source type
//! impl Decoder<RawRecord, Validated> for RawRecord {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Validated, Self::Error> {
//!         Ok(Validated(self.0.iter().map(|(k, _)| k.clone()).collect()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T` to enable conversion
/// to the destination type `D`. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
///
/// # Examples
///
/// ```no_run
/// use shomei::decoder::{Decoder, DecodableFrom};
///
/// struct Dotted(String);
///
/// #[derive(Debug)]
/// struct ArcError;
///
/// impl DecodableFrom<String> for Dotted {}
///
/// impl Decoder<String, Dotted> for String {
///     type Error = ArcError;
///
///     fn decode(&self) -> Result<Dotted, Self::Error> {
///         if self.split('.').all(|arc| arc.parse::<u64>().is_ok()) {
///             Ok(Dotted(self.clone()))
///         } else {
///             Err(ArcError)
///         }
///     }
/// }
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. It exists so the compiler can reject a
/// conversion that nobody declared:
///
/// ```no_run
/// use shomei::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}
