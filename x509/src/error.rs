use shomei_pkix_types::ObjectIdentifier;
use thiserror::Error;

/// Result type for X.509 operations
pub type Result<T> = std::result::Result<T, Error>;

/// X.509 model errors.
///
/// Every variant is a deterministic validation failure about one input.
/// Rejecting one certificate never affects the processing of another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid version: {parsed_version} is not a valid X.509 version")]
    InvalidVersion { parsed_version: i64 },

    #[error("duplicate {oid} extension found")]
    DuplicateExtension { oid: ObjectIdentifier },

    #[error("{oid} extension is not supported")]
    UnsupportedExtension { oid: ObjectIdentifier },

    #[error("no {oid} extension was found")]
    ExtensionNotFound { oid: ObjectIdentifier },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("KeyUsage: {0} is undefined unless key_agreement is true")]
    UndefinedKeyUsageBit(&'static str),

    #[error("unsupported signature algorithm: {oid}")]
    UnsupportedSignatureAlgorithm { oid: ObjectIdentifier },

    #[error("decode error: {0}")]
    Decode(String),
}

impl Error {
    /// The OID the failure is about, for the variants that carry one
    pub fn oid(&self) -> Option<&ObjectIdentifier> {
        match self {
            Self::DuplicateExtension { oid }
            | Self::UnsupportedExtension { oid }
            | Self::ExtensionNotFound { oid }
            | Self::UnsupportedSignatureAlgorithm { oid } => Some(oid),
            _ => None,
        }
    }
}

impl From<shomei_pkix_types::Error> for Error {
    fn from(err: shomei_pkix_types::Error) -> Self {
        match err {
            shomei_pkix_types::Error::InvalidObjectIdentifier(s) => {
                Self::InvalidArgument(format!("'{}' is not an OBJECT IDENTIFIER", s))
            }
            shomei_pkix_types::Error::UnsupportedSignatureAlgorithm(oid) => {
                Self::UnsupportedSignatureAlgorithm { oid }
            }
        }
    }
}
