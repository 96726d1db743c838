//! Cyclebuf - Bounded Memory You Own
//!
//! Fixed-capacity ring buffers with an explicit overwrite policy, built for
//! the places where memory must stay predictable: command history windows,
//! telemetry tails, recent-event logs.
//!
//! - **RingBuffer**: contiguous circular store, FIFO order, removal from
//!   either end, offset peeking, bulk transfer, capacity reassignment
//! - **BoundedCollection**: the capability contract generic consumers code
//!   against, with single-item removal rejected explicitly
//! - **CommandHistory**: a small overwriting window of accepted command
//!   lines with fuzzy-matched suggestions
//!
//! # Quick Start
//!
//! ```
//! use cyclebuf::RingBuffer;
//!
//! let mut recent = RingBuffer::with_overwrite(8, true);
//! recent.add("spawn goblin")?;
//! recent.add("give sword")?;
//! for line in recent.iter() {
//!     println!("{line}");
//! }
//! # Ok::<(), cyclebuf::RingError>(())
//! ```
//!
//! The container does no internal locking; concurrent access goes through
//! a caller-owned `Mutex` or a single-writer/single-reader discipline.

pub mod collection;
pub mod errors;
pub mod history;
pub mod ring;

pub use collection::BoundedCollection;
pub use errors::{Result, RingError};
pub use history::{CommandHistory, DEFAULT_HISTORY_CAPACITY};
pub use ring::{Iter, RingBuffer};
