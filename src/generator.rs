//! Time-based UUIDv8 generator and related types.

use std::sync::{Mutex, PoisonError};

use rand::RngCore;

use crate::{v8, Error, Uuid};

/// A trait that defines the minimum system clock interface for [`V8Generator`].
pub trait TimeSource {
    /// Returns the current time as an integer count of ticks since an epoch.
    fn now_ticks(&self) -> u64;
}

/// The default [`TimeSource`] that reads the current time in nanoseconds since the Unix epoch
/// from [`std::time::SystemTime`].
///
/// A system clock set before the Unix epoch reads as zero.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now_ticks(&self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    }
}

/// Determines how a [`V8Generator`] reacts when the time source returns a tick smaller than the
/// one observed by the preceding generation.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum RollbackPolicy {
    /// Adopts the smaller tick and resets the sequence counter. UUIDs generated after a rollback
    /// may sort before earlier ones.
    #[default]
    Accept,

    /// Keeps the previous tick and increments the sequence counter as if the tick had not changed,
    /// so the generated UUIDs stay in increasing order until the clock catches up.
    Clamp,

    /// Returns [`Error::ClockRollback`] without touching the generator state.
    Abort,
}

/// The tick and sequence counter of the most recent generation.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
struct SequenceState {
    last_tick: u64,
    counter: u16,
}

/// Represents a time-based UUIDv8 generator that encapsulates a sequence counter and guarantees
/// that UUIDs generated within the same tick do not collide.
///
/// The generated UUIDs have the following field values:
///
/// - `custom_a`: the lower 48 bits of the tick read from the [`TimeSource`].
/// - `custom_b`: zero.
/// - `custom_c`: the 16-bit sequence counter in the top bits, followed by 46 bits taken from the
///   random source passed to the generator function, or zeros if none is given.
///
/// The counter is reset to zero whenever the tick changes and is incremented (wrapping at
/// `u16::MAX`) for each UUID generated within the same tick. The counter state is protected by a
/// mutex, so a generator can be shared between threads by reference. The time source is read
/// while the mutex is held, so ticks are observed in lock order and two callers observing the same
/// tick receive different counter values in the order they acquire the lock.
///
/// # Examples
///
/// ```rust
/// use std::thread;
/// use uuid8::{StdSystemTime, V8Generator};
///
/// let g = V8Generator::new(StdSystemTime);
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let e = g.generate(Some(&mut rand::thread_rng())).unwrap();
///                 println!("{:032x} by thread {}", u128::from(e), i);
///             }
///         });
///     }
/// });
/// ```
///
/// # Clock rollback
///
/// The default [`RollbackPolicy::Accept`] follows the time source faithfully: if the clock moves
/// backwards, `custom_a` moves backwards as well and the UUIDs lose their sortable order. Use
/// [`V8Generator::with_policy`] to choose [`RollbackPolicy::Clamp`] or [`RollbackPolicy::Abort`]
/// instead.
#[derive(Debug, Default)]
pub struct V8Generator<T> {
    state: Mutex<SequenceState>,
    policy: RollbackPolicy,

    /// The system clock used by the generator.
    time_source: T,
}

impl<T: TimeSource> V8Generator<T> {
    /// Creates a generator object with a specified time source and the default rollback policy.
    pub const fn new(time_source: T) -> Self {
        Self::with_policy(time_source, RollbackPolicy::Accept)
    }

    /// Creates a generator object with a specified time source and rollback policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid8::{RollbackPolicy, StdSystemTime, V8Generator};
    ///
    /// let g = V8Generator::with_policy(StdSystemTime, RollbackPolicy::Clamp);
    /// println!("{:?}", g.generate(None)?);
    /// # Ok::<(), uuid8::Error>(())
    /// ```
    pub const fn with_policy(time_source: T, policy: RollbackPolicy) -> Self {
        Self {
            state: Mutex::new(SequenceState {
                last_tick: 0,
                counter: 0,
            }),
            policy,
            time_source,
        }
    }

    /// Returns the rollback policy of the generator.
    pub const fn policy(&self) -> RollbackPolicy {
        self.policy
    }

    /// Generates a new UUIDv8 object from the current tick of the time source.
    ///
    /// See the [`V8Generator`] type documentation for the description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if `rng` is given and fails to supply 6 bytes, or
    /// [`Error::ClockRollback`] if the clock moved backwards under [`RollbackPolicy::Abort`].
    pub fn generate(&self, rng: Option<&mut dyn RngCore>) -> Result<Uuid, Error> {
        let (tick, counter) = self.advance(|| self.time_source.now_ticks())?;
        Self::encode(tick, counter, rng)
    }

    /// Generates a new UUIDv8 object from the `tick` passed.
    ///
    /// See the [`V8Generator`] type documentation for the description. Only the lower 48 bits of
    /// `tick` are encoded, whereas the full 64-bit value is compared with the previous tick.
    ///
    /// Unlike [`V8Generator::generate`], the tick is read by the caller before the sequence state
    /// is locked, so concurrent callers must pass ticks in the order they lock the state to keep
    /// the counters unique.
    ///
    /// # Errors
    ///
    /// Same as [`V8Generator::generate`]. The sequence counter is consumed even if `rng` fails.
    pub fn generate_core(&self, tick: u64, rng: Option<&mut dyn RngCore>) -> Result<Uuid, Error> {
        let (tick, counter) = self.advance(|| tick)?;
        Self::encode(tick, counter, rng)
    }

    /// Updates the sequence state with the tick returned by `read_tick` and returns the tick and
    /// counter to encode.
    ///
    /// `read_tick` runs while the state is locked, so ticks are observed in lock order.
    fn advance(&self, read_tick: impl FnOnce() -> u64) -> Result<(u64, u16), Error> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let tick = read_tick();

        if tick < state.last_tick {
            tracing::debug!(
                last_tick = state.last_tick,
                tick,
                policy = ?self.policy,
                "time source moved backwards"
            );
            match self.policy {
                RollbackPolicy::Accept => {}
                RollbackPolicy::Clamp => return Ok(state.increment()),
                RollbackPolicy::Abort => {
                    return Err(Error::ClockRollback {
                        last_tick: state.last_tick,
                        tick,
                    })
                }
            }
        }

        if tick == state.last_tick {
            Ok(state.increment())
        } else {
            state.last_tick = tick;
            state.counter = 0;
            Ok((tick, 0))
        }
    }

    fn encode(tick: u64, counter: u16, rng: Option<&mut dyn RngCore>) -> Result<Uuid, Error> {
        let mut tail = [0u8; 8];
        if let Some(rng) = rng {
            v8::fill(rng, &mut tail[2..])?;
        }
        let custom_c = ((counter as u64) << 46) | (u64::from_be_bytes(tail) & ((1 << 46) - 1));
        Ok(Uuid::from_fields_v8(tick, 0, custom_c))
    }
}

impl SequenceState {
    fn increment(&mut self) -> (u64, u16) {
        self.counter = self.counter.wrapping_add(1);
        if self.counter == 0 {
            tracing::trace!(tick = self.last_tick, "sequence counter wrapped around");
        }
        (self.last_tick, self.counter)
    }
}
