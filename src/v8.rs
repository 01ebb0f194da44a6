//! Random and split-field UUIDv8 generators.

use rand::{rngs::OsRng, RngCore};

use crate::{layout, Error, Uuid};

/// Generates a UUIDv8 object whose `custom_a`, `custom_b`, and `custom_c` fields are all filled
/// with bytes drawn from `rng`.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if `rng` cannot supply 16 bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid8::v8::new_v8(&mut rand::rngs::OsRng)?;
/// assert_eq!(uuid.version(), Some(8));
/// # Ok::<(), uuid8::Error>(())
/// ```
pub fn new_v8<R: RngCore + ?Sized>(rng: &mut R) -> Result<Uuid, Error> {
    let mut entropy = [0u8; 16];
    fill(rng, &mut entropy)?;
    Ok(layout::encode(None, None, None, entropy))
}

/// Generates a UUIDv8 object from caller-defined `custom_a` and `custom_b` values, filling
/// `custom_c` with bytes drawn from `rng` or, if `rng` is `None`, from [`OsRng`].
///
/// `custom_a` is truncated to its lower 48 bits and `custom_b` to its lower 12 bits.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the random source cannot supply 8 bytes.
///
/// # Examples
///
/// ```rust
/// use uuid8::v8::new_v8_from_fields;
///
/// let uuid = new_v8_from_fields(0x0102_0304_0506, 0xabc, None)?;
/// assert_eq!(uuid.as_bytes()[..8], [1, 2, 3, 4, 5, 6, 0x8a, 0xbc]);
/// # Ok::<(), uuid8::Error>(())
/// ```
pub fn new_v8_from_fields(
    custom_a: u64,
    custom_b: u16,
    rng: Option<&mut dyn RngCore>,
) -> Result<Uuid, Error> {
    let mut custom_c = [0u8; 8];
    match rng {
        Some(rng) => fill(rng, &mut custom_c)?,
        None => fill(&mut OsRng, &mut custom_c)?,
    }

    Ok(Uuid::from_fields_v8(custom_a, custom_b, u64::from_be_bytes(custom_c)))
}

/// Fills `dest` completely from `rng`, logging and forwarding any failure.
pub(crate) fn fill<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) -> Result<(), Error> {
    let len = dest.len();
    rng.try_fill_bytes(dest).map_err(|err| {
        tracing::debug!(error = %err, len, "random source failed");
        Error::from(err)
    })
}
