//! Intake report types.
//!
//! A fetched list payload is decoded element by element. Elements that fail
//! validation are skipped and reported here instead of failing the whole list.

use serde::{Deserialize, Serialize};

/// The outcome of decoding one fetched list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeReport<T> {
    /// Records that passed validation, in payload order.
    pub records: Vec<T>,
    /// Every element that was skipped. Empty when the payload was clean.
    pub failures: Vec<IntakeFailure>,
}

impl<T> IntakeReport<T> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single skipped element within an `IntakeReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeFailure {
    /// Position of the element in the payload array.
    pub index: usize,
    /// Human-readable explanation of why the element was skipped.
    pub message: String,
}
