/// Errors returned by the UUIDv8 generators.
///
/// On error, no identifier is produced. Callers that need a sentinel value may fall back to
/// [`Uuid::NIL`](crate::Uuid::NIL).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The random source could not fill the requested bytes.
    #[error("random source failed to supply bytes")]
    RandomSource(#[from] rand::Error),

    /// The time source moved backwards and the generator is configured with
    /// [`RollbackPolicy::Abort`](crate::RollbackPolicy::Abort).
    #[error("clock moved backwards from tick {last_tick} to {tick}")]
    ClockRollback {
        /// Tick observed by the preceding generation.
        last_tick: u64,
        /// Tick observed by the rejected generation.
        tick: u64,
    },
}
