//! Pattern 1: Immutable Value Object
//!
//! Strategies to make a type immutable in Rust:
//! - All fields set at construction only, no setter methods
//! - Fields private, no interior mutability
//! - Mutable inputs are defensively copied, never retained
//! - Accessors return owned scalars or shared borrows, never `&mut`

use crate::error::{PatternError, Result};

/// A value object: identity is irrelevant and state never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableRecord {
    text: String,
    value: i32,
    items: Vec<String>,
}

impl ImmutableRecord {
    /// Builds a record from caller-supplied data.
    ///
    /// The items sequence is required: `None` fails with
    /// [`PatternError::MissingItems`] and nothing is constructed. A present
    /// sequence is copied into a fresh `Vec`, so the caller keeps ownership
    /// of the original and may mutate it afterwards without the record ever
    /// observing the change.
    pub fn new(text: impl Into<String>, value: i32, items: Option<&[String]>) -> Result<Self> {
        let items = items.ok_or(PatternError::MissingItems)?;
        Ok(Self {
            text: text.into(),
            value,
            // Fresh allocation; the caller's container is never retained.
            items: items.to_vec(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Read-only view of the item sequence. A shared slice rejects mutation
    /// at compile time and never aliases the caller's original container.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_items() -> Vec<String> {
        vec!["alpha".to_string(), "beta".to_string()]
    }

    #[test]
    fn round_trips_all_fields() {
        let items = sample_items();
        let record = ImmutableRecord::new("sample", 42, Some(&items)).unwrap();

        assert_eq!(record.text(), "sample");
        assert_eq!(record.value(), 42);
        assert_eq!(record.items(), items.as_slice());
    }

    #[test]
    fn missing_items_is_rejected() {
        assert_eq!(
            ImmutableRecord::new("sample", 42, None),
            Err(PatternError::MissingItems)
        );
    }

    #[test]
    fn empty_items_is_valid() {
        let record = ImmutableRecord::new("sample", 0, Some(&[])).unwrap();
        assert!(record.items().is_empty());
    }

    #[test]
    fn caller_mutation_is_never_observed() {
        let mut items = sample_items();
        let record = ImmutableRecord::new("sample", 7, Some(&items)).unwrap();

        items.push("gamma".to_string());
        items[0] = "mutated".to_string();
        items.clear();

        assert_eq!(record.items(), ["alpha", "beta"]);
    }

    #[test]
    fn repeated_reads_are_stable() {
        let items = sample_items();
        let record = ImmutableRecord::new("sample", 7, Some(&items)).unwrap();

        let first: Vec<String> = record.items().to_vec();
        assert_eq!(record.items(), first.as_slice());
        assert_eq!(record.text(), "sample");
        assert_eq!(record.value(), 7);
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_all_inputs(text: String, value: i32, items: Vec<String>) {
            let record = ImmutableRecord::new(text.clone(), value, Some(&items)).unwrap();

            prop_assert_eq!(record.text(), text);
            prop_assert_eq!(record.value(), value);
            prop_assert_eq!(record.items(), items.as_slice());
        }
    }
}
