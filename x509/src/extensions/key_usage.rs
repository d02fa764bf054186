use serde::Serialize;
use serde::ser::SerializeStruct;
use shomei_pkix_types::{ObjectIdentifier, oid};
use std::fmt;

use crate::error::Error;
use crate::extensions::{ExtensionType, ExtensionValue};

/*
RFC 5280 Section 4.2.1.3
KeyUsage ::= BIT STRING {
    digitalSignature        (0),
    nonRepudiation          (1), -- renamed to contentCommitment
    keyEncipherment         (2),
    dataEncipherment        (3),
    keyAgreement            (4),
    keyCertSign             (5),
    cRLSign                 (6),
    encipherOnly            (7),
    decipherOnly            (8)
}
*/

/// The nine KeyUsage bits as plain flags, used to build a [`KeyUsage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyUsageBits {
    pub digital_signature: bool,
    pub content_commitment: bool,
    pub key_encipherment: bool,
    pub data_encipherment: bool,
    pub key_agreement: bool,
    pub key_cert_sign: bool,
    pub crl_sign: bool,
    pub encipher_only: bool,
    pub decipher_only: bool,
}

/// Key Usage extension ([RFC 5280 Section 4.2.1.3](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.3)).
///
/// `encipher_only` and `decipher_only` are only defined when `key_agreement`
/// is set. Building a value that sets either of them without `key_agreement`
/// fails, and reading them while `key_agreement` is clear fails as well.
///
/// # Example
/// ```
/// use shomei_x509::extensions::{KeyUsage, KeyUsageBits};
///
/// let ku = KeyUsage::new(KeyUsageBits {
///     key_agreement: true,
///     decipher_only: true,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(ku.decipher_only(), Ok(true));
/// assert_eq!(ku.encipher_only(), Ok(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyUsage {
    bits: KeyUsageBits,
}

impl KeyUsage {
    /// Validate and wrap the usage bits.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] when encipher_only or decipher_only is set without key_agreement.
    pub fn new(bits: KeyUsageBits) -> Result<Self, Error> {
        if !bits.key_agreement && (bits.encipher_only || bits.decipher_only) {
            return Err(Error::InvalidArgument(
                "KeyUsage: encipher_only and decipher_only can only be true when key_agreement is true"
                    .to_string(),
            ));
        }
        Ok(Self { bits })
    }

    /// digitalSignature (bit 0)
    pub fn digital_signature(&self) -> bool {
        self.bits.digital_signature
    }

    /// contentCommitment, formerly nonRepudiation (bit 1)
    pub fn content_commitment(&self) -> bool {
        self.bits.content_commitment
    }

    /// keyEncipherment (bit 2)
    pub fn key_encipherment(&self) -> bool {
        self.bits.key_encipherment
    }

    /// dataEncipherment (bit 3)
    pub fn data_encipherment(&self) -> bool {
        self.bits.data_encipherment
    }

    /// keyAgreement (bit 4)
    pub fn key_agreement(&self) -> bool {
        self.bits.key_agreement
    }

    /// keyCertSign (bit 5)
    pub fn key_cert_sign(&self) -> bool {
        self.bits.key_cert_sign
    }

    /// cRLSign (bit 6)
    pub fn crl_sign(&self) -> bool {
        self.bits.crl_sign
    }

    /// # Errors
    /// [`Error::UndefinedKeyUsageBit`] when `key_agreement` is false.
    pub fn encipher_only(&self) -> Result<bool, Error> {
        if !self.bits.key_agreement {
            return Err(Error::UndefinedKeyUsageBit("encipher_only"));
        }
        Ok(self.bits.encipher_only)
    }

    /// # Errors
    /// [`Error::UndefinedKeyUsageBit`] when `key_agreement` is false.
    pub fn decipher_only(&self) -> Result<bool, Error> {
        if !self.bits.key_agreement {
            return Err(Error::UndefinedKeyUsageBit("decipher_only"));
        }
        Ok(self.bits.decipher_only)
    }

    fn usages(&self) -> Vec<&'static str> {
        let bits = &self.bits;
        [
            (bits.digital_signature, "Digital Signature"),
            (bits.content_commitment, "Content Commitment"),
            (bits.key_encipherment, "Key Encipherment"),
            (bits.data_encipherment, "Data Encipherment"),
            (bits.key_agreement, "Key Agreement"),
            (bits.key_cert_sign, "Certificate Sign"),
            (bits.crl_sign, "CRL Sign"),
            (bits.key_agreement && bits.encipher_only, "Encipher Only"),
            (bits.key_agreement && bits.decipher_only, "Decipher Only"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

impl TryFrom<KeyUsageBits> for KeyUsage {
    type Error = Error;

    fn try_from(bits: KeyUsageBits) -> Result<Self, Self::Error> {
        KeyUsage::new(bits)
    }
}

impl ExtensionType for KeyUsage {
    const OID: ObjectIdentifier = oid::KEY_USAGE;

    fn from_value(value: &ExtensionValue) -> Option<&Self> {
        match value {
            ExtensionValue::KeyUsage(ku) => Some(ku),
            _ => None,
        }
    }
}

impl From<KeyUsage> for ExtensionValue {
    fn from(value: KeyUsage) -> Self {
        ExtensionValue::KeyUsage(value)
    }
}

// encipher_only / decipher_only are left out entirely when undefined
impl Serialize for KeyUsage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let bits = &self.bits;
        let len = if bits.key_agreement { 9 } else { 7 };
        let mut state = serializer.serialize_struct("KeyUsage", len)?;
        state.serialize_field("digital_signature", &bits.digital_signature)?;
        state.serialize_field("content_commitment", &bits.content_commitment)?;
        state.serialize_field("key_encipherment", &bits.key_encipherment)?;
        state.serialize_field("data_encipherment", &bits.data_encipherment)?;
        state.serialize_field("key_agreement", &bits.key_agreement)?;
        state.serialize_field("key_cert_sign", &bits.key_cert_sign)?;
        state.serialize_field("crl_sign", &bits.crl_sign)?;
        if bits.key_agreement {
            state.serialize_field("encipher_only", &bits.encipher_only)?;
            state.serialize_field("decipher_only", &bits.decipher_only)?;
        } else {
            state.skip_field("encipher_only")?;
            state.skip_field("decipher_only")?;
        }
        state.end()
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.usages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::encipher_only(true, false)]
    #[case::decipher_only(false, true)]
    #[case::both(true, true)]
    fn test_key_usage_undefined_bits_rejected(
        #[case] encipher_only: bool,
        #[case] decipher_only: bool,
    ) {
        let result = KeyUsage::new(KeyUsageBits {
            key_agreement: false,
            encipher_only,
            decipher_only,
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_key_usage_properties_key_agreement_false() {
        let ku = KeyUsage::new(KeyUsageBits {
            digital_signature: true,
            content_commitment: true,
            key_cert_sign: true,
            ..Default::default()
        })
        .unwrap();

        assert!(ku.digital_signature());
        assert!(ku.content_commitment());
        assert!(!ku.key_encipherment());
        assert!(!ku.data_encipherment());
        assert!(!ku.key_agreement());
        assert!(ku.key_cert_sign());
        assert!(!ku.crl_sign());
        assert_eq!(
            ku.encipher_only(),
            Err(Error::UndefinedKeyUsageBit("encipher_only"))
        );
        assert_eq!(
            ku.decipher_only(),
            Err(Error::UndefinedKeyUsageBit("decipher_only"))
        );
    }

    #[rstest]
    #[case(false, false)]
    #[case(true, false)]
    #[case(false, true)]
    #[case(true, true)]
    fn test_key_usage_properties_key_agreement_true(
        #[case] encipher_only: bool,
        #[case] decipher_only: bool,
    ) {
        let ku = KeyUsage::new(KeyUsageBits {
            key_agreement: true,
            encipher_only,
            decipher_only,
            ..Default::default()
        })
        .unwrap();

        assert!(ku.key_agreement());
        assert_eq!(ku.encipher_only(), Ok(encipher_only));
        assert_eq!(ku.decipher_only(), Ok(decipher_only));
    }

    #[rstest]
    #[case(
        KeyUsageBits { digital_signature: true, key_encipherment: true, ..Default::default() },
        "Digital Signature, Key Encipherment"
    )]
    #[case(
        KeyUsageBits { key_cert_sign: true, crl_sign: true, ..Default::default() },
        "Certificate Sign, CRL Sign"
    )]
    #[case(
        KeyUsageBits { key_agreement: true, encipher_only: true, ..Default::default() },
        "Key Agreement, Encipher Only"
    )]
    #[case(KeyUsageBits::default(), "")]
    fn test_key_usage_display(#[case] bits: KeyUsageBits, #[case] expected: &str) {
        let ku = KeyUsage::try_from(bits).unwrap();
        assert_eq!(ku.to_string(), expected);
    }

    #[test]
    fn test_key_usage_serialize_omits_undefined_bits() {
        let ku = KeyUsage::new(KeyUsageBits {
            digital_signature: true,
            ..Default::default()
        })
        .unwrap();
        let json = serde_json::to_value(ku).unwrap();
        assert_eq!(json["digital_signature"], true);
        assert!(json.get("encipher_only").is_none());
        assert!(json.get("decipher_only").is_none());

        let ku = KeyUsage::new(KeyUsageBits {
            key_agreement: true,
            decipher_only: true,
            ..Default::default()
        })
        .unwrap();
        let json = serde_json::to_value(ku).unwrap();
        assert_eq!(json["encipher_only"], false);
        assert_eq!(json["decipher_only"], true);
    }
}
