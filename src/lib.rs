//! An implementation of UUID version 8
//!
//! ```rust
//! use uuid8::{uuid8, uuid8_from_fields, uuid8_time_based};
//!
//! let uuid = uuid8()?;
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid8_from_fields(0x0123_4567_89ab, 0xcde)?;
//! assert_eq!((uuid.custom_a(), uuid.custom_b()), (0x0123_4567_89ab, 0xcde));
//!
//! let uuid = uuid8_time_based(Some(&mut rand::thread_rng()))?;
//! assert_eq!(uuid.version(), Some(8));
//! # Ok::<(), uuid8::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562.html#name-uuid-version-8).
//!
//! # Field and bit layout
//!
//! UUIDv8 leaves all but six bits to the application:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           custom_a                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          custom_a             |  ver  |       custom_b        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                       custom_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           custom_c                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `custom_a`, 12-bit `custom_b`, and 62-bit `custom_c` fields hold arbitrary
//!   application data.
//! - The 4-bit `ver` field is set at `1000`.
//! - The 2-bit `var` field is set at `10`.
//!
//! # Generators
//!
//! This library fills the custom fields in three ways:
//!
//! | Function                              | `custom_a`      | `custom_b` | `custom_c`                |
//! | ------------------------------------- | --------------- | ---------- | ------------------------- |
//! | [`v8::new_v8`], [`uuid8`]             | Random          | Random     | Random                    |
//! | [`v8::new_v8_from_fields`]            | Argument        | Argument   | Random                    |
//! | [`V8Generator`], [`uuid8_time_based`] | Nanosecond tick | Zero       | Counter + random or zeros |
//!
//! The time-based generator resets a 16-bit sequence counter whenever the tick changes and
//! increments it for each UUID generated within the same tick, so UUIDs that share a tick never
//! share a counter value (until the counter wraps around after 65,536 UUIDs). Only the lower 48
//! bits of the nanosecond tick fit in `custom_a`, and the system clock may move backwards; see
//! [`RollbackPolicy`] for the available reactions.
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide entry point functions such as [`uuid8()`].
//! - `serde`: `Serialize` and `Deserialize` implementations for [`Uuid`] as 16 bytes.
//! - `uuid`: conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::Error;

mod id;
pub use id::{Uuid, Variant};

pub mod layout;

pub mod v8;

pub mod generator;
pub use generator::{RollbackPolicy, StdSystemTime, TimeSource, V8Generator};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid8, uuid8_from_fields, uuid8_time_based};
