use crate::layout;

/// Represents a Universally Unique IDentifier.
///
/// This type is a plain 16-byte big-endian value. It is ordered bytewise, so identifiers from
/// the time-based generator compare in `(custom_a, counter)` order as long as the clock does not
/// move backwards.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv8 object from field values.
    ///
    /// Values wider than their fields are silently truncated: `custom_a` to the lower 48 bits,
    /// `custom_b` to the lower 12 bits, and `custom_c` to the lower 62 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid8::Uuid;
    ///
    /// let e = Uuid::from_fields_v8(0x0102_0304_0506, 0xabc, 0);
    /// assert_eq!(
    ///     e.as_bytes(),
    ///     &[1, 2, 3, 4, 5, 6, 0x8a, 0xbc, 0x80, 0, 0, 0, 0, 0, 0, 0]
    /// );
    /// assert_eq!(e.custom_b(), 0xabc);
    /// ```
    pub fn from_fields_v8(custom_a: u64, custom_b: u16, custom_c: u64) -> Self {
        let a = custom_a.to_be_bytes();
        let b = (custom_b & 0x0fff).to_be_bytes();
        let c = custom_c.to_be_bytes();
        layout::encode(
            Some(&[a[2], a[3], a[4], a[5], a[6], a[7]]),
            Some(&b),
            Some(&c),
            [0; 16],
        )
    }

    /// Returns the 48-bit `custom_a` field.
    pub const fn custom_a(&self) -> u64 {
        let b = &self.0;
        (b[0] as u64) << 40
            | (b[1] as u64) << 32
            | (b[2] as u64) << 24
            | (b[3] as u64) << 16
            | (b[4] as u64) << 8
            | b[5] as u64
    }

    /// Returns the 12-bit `custom_b` field.
    pub const fn custom_b(&self) -> u16 {
        ((self.0[6] & 0x0f) as u16) << 8 | self.0[7] as u16
    }

    /// Returns the 62-bit `custom_c` field.
    pub const fn custom_c(&self) -> u64 {
        let mut c = (self.0[8] & 0x3f) as u64;
        let mut i = 9;
        while i < 16 {
            c = c << 8 | self.0[i] as u64;
            i += 1;
        }
        c
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::VarNil`] or [`Variant::VarMax`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self == &Self::NIL => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            0xe..=0xf if self == &Self::MAX => Variant::VarMax,
            0xe..=0xf => Variant::VarReserved,
            _ => unreachable!(),
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the
    /// variant field value of `0b10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }
}

/// UUID variants defined by RFC 9562.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Nil UUID (00000000-0000-0000-0000-000000000000).
    VarNil,

    /// The variant field value of `0b0`, excluding the Nil UUID.
    Var0,

    /// The variant field value of `0b10`, used by UUIDv8.
    Var10,

    /// The variant field value of `0b110`.
    Var110,

    /// The reserved variant field value of `0b111`, excluding the Max UUID.
    VarReserved,

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff).
    VarMax,
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 16-byte UUID representation")
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| de::Error::invalid_length(value.len(), &self))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut dst = [0u8; 16];
            for (i, e) in dst.iter_mut().enumerate() {
                *e = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<u8>()?.is_some() {
                return Err(de::Error::invalid_length(17, &self));
            }
            Ok(Self::Value::from(dst))
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    const MAX_UINT48: u64 = (1 << 48) - 1;
    const MAX_UINT12: u16 = (1 << 12) - 1;
    const MAX_UINT62: u64 = (1 << 62) - 1;

    /// Renders lowercase hex digits for pattern tests
    fn hex(e: &Uuid) -> String {
        format!("{:032x}", u128::from(*e))
    }

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, u64), &'static str)] {
        &[
            ((0, 0, 0), "00000000000080008000000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffffffff80008000000000000000"),
            ((0, MAX_UINT12, 0), "0000000000008fff8000000000000000"),
            ((0, 0, MAX_UINT62), "0000000000008000bfffffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT12, MAX_UINT62),
                "ffffffffffff8fffbfffffffffffffff",
            ),
            (
                (0x17f22e279b0, 0xcc3, 0x18c4dc0c0c07398f),
                "017f22e279b08cc398c4dc0c0c07398f",
            ),
        ]
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let e = Uuid::from_fields_v8(fs.0, fs.1, fs.2);
            assert_eq!(&hex(&e), text);
            assert_eq!(e.version(), Some(8));
            assert_eq!(e.variant(), Variant::Var10);
        }
    }

    /// Decodes fields of prepared cases
    #[test]
    fn decodes_fields_of_prepared_cases() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v8(fs.0, fs.1, fs.2);
            assert_eq!(e.custom_a(), fs.0);
            assert_eq!(e.custom_b(), fs.1);
            assert_eq!(e.custom_c(), fs.2);
        }
    }

    /// Truncates oversized field values silently
    #[test]
    fn truncates_oversized_field_values_silently() {
        let e = Uuid::from_fields_v8(u64::MAX, u16::MAX, u64::MAX);
        assert_eq!(&hex(&e), "ffffffffffff8fffbfffffffffffffff");
        assert_eq!(e.custom_a(), MAX_UINT48);
        assert_eq!(e.custom_b(), MAX_UINT12);
        assert_eq!(e.custom_c(), MAX_UINT62);

        let e = Uuid::from_fields_v8(0xabcd_0000_0000_0001, 0xf001, 0xc000_0000_0000_0002);
        assert_eq!(e.custom_a(), 1);
        assert_eq!(e.custom_b(), 1);
        assert_eq!(e.custom_c(), 2);
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(&hex(&Uuid::NIL), "00000000000000000000000000000000");
        assert_eq!(&hex(&Uuid::MAX), "ffffffffffffffffffffffffffffffff");
        assert_eq!(Uuid::NIL.variant(), Variant::VarNil);
        assert_eq!(Uuid::MAX.variant(), Variant::VarMax);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Reports variant of arbitrary bytes without validating
    #[test]
    fn reports_variant_of_arbitrary_bytes_without_validating() {
        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        assert_eq!(Uuid::from(bytes).variant(), Variant::Var0);
        bytes[8] = 0xc0;
        assert_eq!(Uuid::from(bytes).variant(), Variant::Var110);
        bytes[8] = 0xe0;
        assert_eq!(Uuid::from(bytes).variant(), Variant::VarReserved);
        bytes[6] = 0x40;
        bytes[8] = 0x80;
        assert_eq!(Uuid::from(bytes).version(), Some(4));
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v8(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.as_ref(), &<[u8; 16]>::from(e)[..]);
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).get_version_num(), 8);
        }
    }
}
