use std::fmt;

use serde::Serialize;

use crate::error::Error;

/*
RFC 5280 Section 4.1.2.1
Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
*/

/// Certificate version.
///
/// Only v1 and v3 are modelled. Anything else the decoder reports, v2
/// included, is rejected with the raw integer kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Version {
    V1 = 0,
    V3 = 2,
}

impl Version {
    /// The encoded INTEGER value
    pub fn value(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<i64> for Version {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Version::V1),
            2 => Ok(Version::V3),
            parsed_version => Err(Error::InvalidVersion { parsed_version }),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "1 (0x0)"),
            Version::V3 => write!(f, "3 (0x2)"),
        }
    }
}
