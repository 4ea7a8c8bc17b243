//! Object Patterns - Runnable Examples
//!
//! This crate contains runnable examples for two object design patterns:
//!
//! ## Pattern 1: Immutable Value Object
//! - All state fixed at construction, validated up front
//! - Defensive copy of caller-supplied data
//! - Read-only accessors (shared borrows, never `&mut`)
//!
//! ## Pattern 2: Thread-Safe Singleton Counter
//! - Single process-wide instance behind `OnceLock`
//! - Increment, decrement, and read serialized by one `Mutex`
//!
//! Run any example with:
//! ```bash
//! cargo run --bin p1_immutable
//! cargo run --bin p2_singleton
//! ```

pub mod error;
pub mod immutable;
pub mod singleton;

pub use error::{PatternError, Result};
pub use immutable::ImmutableRecord;
pub use singleton::CounterSingleton;
