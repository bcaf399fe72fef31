//! Domain models for label data

mod label;

pub use label::{LabelId, LabelKind, LabelRecord, ListLabelsResponse};
