//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use rand::{rngs::OsRng, RngCore};

use crate::{v8, Error, StdSystemTime, Uuid, V8Generator};

/// Process-wide time-based generator shared by [`uuid8_time_based`].
static GLOBAL_GEN: V8Generator<StdSystemTime> = V8Generator::new(StdSystemTime);

/// Generates a UUIDv8 object filled with random bytes from [`OsRng`].
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the operating system cannot supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid8::uuid8()?;
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), uuid8::Error>(())
/// ```
pub fn uuid8() -> Result<Uuid, Error> {
    v8::new_v8(&mut OsRng)
}

/// Generates a UUIDv8 object from caller-defined `custom_a` (48 bits) and `custom_b` (12 bits)
/// values and random `custom_c` bits from [`OsRng`].
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the operating system cannot supply random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid8::uuid8_from_fields(0x0102_0304_0506, 0xabc)?;
/// assert_eq!(uuid.custom_a(), 0x0102_0304_0506);
/// assert_eq!(uuid.custom_b(), 0xabc);
/// # Ok::<(), uuid8::Error>(())
/// ```
pub fn uuid8_from_fields(custom_a: u64, custom_b: u16) -> Result<Uuid, Error> {
    v8::new_v8_from_fields(custom_a, custom_b, None)
}

/// Generates a time-based UUIDv8 object.
///
/// This function employs a process-wide generator and guarantees that UUIDs generated within the
/// same nanosecond across all threads receive distinct sequence counters. The trailing 46 bits are
/// taken from `rng` if given, or set to zero otherwise.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if `rng` is given and fails.
///
/// # Examples
///
/// ```rust
/// let x = uuid8::uuid8_time_based(None)?;
/// let y = uuid8::uuid8_time_based(Some(&mut rand::thread_rng()))?;
/// assert_ne!(x, y);
/// # Ok::<(), uuid8::Error>(())
/// ```
pub fn uuid8_time_based(rng: Option<&mut dyn RngCore>) -> Result<Uuid, Error> {
    GLOBAL_GEN.generate(rng)
}

#[cfg(test)]
mod tests_uuid8 {
    use super::uuid8;
    use crate::Variant;

    /// Generates different identifiers in succession
    #[test]
    fn generates_different_identifiers_in_succession() {
        let mut prev = uuid8().unwrap();
        for _ in 0..1_000 {
            let curr = uuid8().unwrap();
            assert_ne!(prev, curr);
            prev = curr;
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid8().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(8));
        }
    }
}

#[cfg(test)]
mod tests_uuid8_from_fields {
    use super::uuid8_from_fields;
    use crate::Variant;

    /// Embeds caller fields and random custom_c
    #[test]
    fn embeds_caller_fields_and_random_custom_c() {
        let x = uuid8_from_fields(0x01_0203_0405, 0x0ab).unwrap();
        let y = uuid8_from_fields(0x01_0203_0405, 0x0ab).unwrap();
        assert_eq!(x.as_bytes()[..8], [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x80, 0xab]);
        assert_eq!(x.as_bytes()[..8], y.as_bytes()[..8]);
        assert_ne!(x, y);
        assert_eq!(x.variant(), Variant::Var10);
    }
}
