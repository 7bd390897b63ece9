//! # clinic-core
//!
//! The pure filter / sort / aggregate pipeline behind every clinic
//! management screen.
//!
//! This crate provides:
//! - The two seam traits (`RecordAccessor`, `Clock`)
//! - The `ListProcessor` that derives a sorted view and summary counts
//! - Date and text normalization, pagination, and date grouping helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clinic_core::{ListProcessor, traits::RecordAccessor};
//!
//! let processor = ListProcessor::with_defaults(DoctorAppointments);
//! let view = processor.process(&appointments, &criteria);
//! ```

pub mod aggregate;
pub mod group;
pub mod normalize;
pub mod page;
pub mod processor;
pub mod traits;

pub use processor::ListProcessor;

// ── Tests ─────────────────────────────────────────────────────────────────────
