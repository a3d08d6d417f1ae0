#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

/// Represents a Universally Unique IDentifier.
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

    /// Creates a UUID byte array from UUIDv7 field values: the 48-bit `unix_ts_ms`, the 18-bit
    /// `counter`, and the 56-bit `rand`.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds the capacity of the corresponding field.
    pub const fn from_fields_v7(unix_ts_ms: u64, counter: u32, rand: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || counter >= 1 << 18 || rand >= 1 << 56 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (counter >> 14) as u8,
            (counter >> 6) as u8,
            0x80 | (counter & 0x3f) as u8,
            (rand >> 48) as u8,
            (rand >> 40) as u8,
            (rand >> 32) as u8,
            (rand >> 24) as u8,
            (rand >> 16) as u8,
            (rand >> 8) as u8,
            rand as u8,
        ])
    }

    /// Returns the 48-bit `unix_ts_ms` field value.
    pub const fn unix_ts_ms(&self) -> u64 {
        (self.0[0] as u64) << 40
            | (self.0[1] as u64) << 32
            | (self.0[2] as u64) << 24
            | (self.0[3] as u64) << 16
            | (self.0[4] as u64) << 8
            | self.0[5] as u64
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string-like type that can be handled like [`str`] through `Deref<Target = str>` and other
    /// common traits.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv7::Uuid;
    ///
    /// let x = "017f22e2-79b0-7ae6-ac00-dc0c0c07398f".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "017f22e2-79b0-7ae6-ac00-dc0c0c07398f");
    /// assert_eq!(format!("{}", y), "017f22e2-79b0-7ae6-ac00-dc0c0c07398f");
    /// # Ok::<(), uuidv7::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut p = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[p] = DIGITS[(e >> 4) as usize];
            buffer[p + 1] = DIGITS[(e & 15) as usize];
            p += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[p] = b'-';
                p += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        match FStr::from_inner(buffer) {
            Ok(t) => t,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ERR);
        }

        let mut dst = [0u8; 16];
        let mut p = 0;
        for e in dst.iter_mut() {
            if p == 8 || p == 13 || p == 18 || p == 23 {
                if src[p] != b'-' {
                    return Err(ERR);
                }
                p += 1;
            }
            let hi = decode_hex_digit(src[p]).ok_or(ERR)?;
            let lo = decode_hex_digit(src[p + 1]).ok_or(ERR)?;
            *e = (hi << 4) | lo;
            p += 2;
        }
        Ok(Self(dst))
    }
}

const fn decode_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
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

/// The reserved UUID variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant `0` (NCS), including the Nil UUID.
    Var0,

    /// The variant `10` (RFC 9562).
    Var10,

    /// The variant `110` (Microsoft).
    Var110,

    /// The reserved variant `111`, including the Max UUID.
    VarReserved,
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse string as UUID")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}
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
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl<'de> de::Visitor<'de> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "017f22e2-79b0-7ae6-ac00-dc0c0c07398f",
                    &[
                        1, 127, 34, 226, 121, 176, 122, 230, 172, 0, 220, 12, 12, 7, 57, 143,
                    ],
                ),
                (
                    "0000000f-4240-7000-8000-000000000000",
                    &[0, 0, 0, 15, 66, 64, 112, 0, 128, 0, 0, 0, 0, 0, 0, 0],
                ),
                (
                    "ffffffff-ffff-7fff-bfff-ffffffffffff",
                    &[
                        255, 255, 255, 255, 255, 255, 127, 255, 191, 255, 255, 255, 255, 255, 255,
                        255,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u32, u64), &'static str)] {
        const MAX_UINT48: u64 = (1 << 48) - 1;
        const MAX_UINT18: u32 = (1 << 18) - 1;
        const MAX_UINT56: u64 = (1 << 56) - 1;

        &[
            ((0, 0, 0), "00000000-0000-7000-8000-000000000000"),
            ((MAX_UINT48, 0, 0), "ffffffff-ffff-7000-8000-000000000000"),
            ((0, MAX_UINT18, 0), "00000000-0000-7fff-bf00-000000000000"),
            ((0, 0, MAX_UINT56), "00000000-0000-7000-80ff-ffffffffffff"),
            (
                (MAX_UINT48, MAX_UINT18, MAX_UINT56),
                "ffffffff-ffff-7fff-bfff-ffffffffffff",
            ),
            (
                (0x17f22e279b0, 0x2b9ac, 0xdc0c0c07398f),
                "017f22e2-79b0-7ae6-ac00-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&from_fields.to_string(), text);
        }
    }

    /// Reports field values of prepared cases correctly
    #[test]
    fn reports_field_values_of_prepared_cases_correctly() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(e.unix_ts_ms(), fs.0);
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(7));
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "0",
            "017f22e279b07ae6ac00dc0c0c07398f",
            " 017f22e2-79b0-7ae6-ac00-dc0c0c07398f",
            "017f22e2-79b0-7ae6-ac00-dc0c0c07398f ",
            " 017f22e2-79b0-7ae6-ac00-dc0c0c07398f ",
            "017f22e2-79b0-7ae6-ac00-dc0c0c07398ff",
            "017f22e2-79b0-7ae6-ac00-dc0c0c0739",
            "+17f22e2-79b0-7ae6-ac00-dc0c0c07398f",
            "017f22e2+79b0-7ae6-ac00-dc0c0c07398f",
            "017f22e2x79b0-7ae6-ac00-dc0c0c07398f",
            "017f22e2-79b0-7ag6-ac00-dc0c0c07398f",
            "017f22e2-79b0-7ae6-ac00_dc0c0c07398f",
            "017f22e2-79b0-7a 6-ac00-dc0c0c07398f",
            "{017f22e2-79b0-7ae6-ac00-dc0c0c0739}",
            "017f22é2-79b0-7ae6-ac00-dc0c0c07398f",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err());
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
        assert_eq!(Uuid::MAX.version(), None);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
        }
    }

    /// Orders identifiers as big-endian unsigned integers
    #[test]
    fn orders_identifiers_as_big_endian_unsigned_integers() {
        let mut prev = Uuid::NIL;
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v7(fs.0, fs.1, fs.2);
            assert_eq!(e < prev, u128::from(e) < u128::from(prev));
            assert_eq!(e > prev, u128::from(e) > u128::from(prev));
            prev = e;
        }
    }
}
