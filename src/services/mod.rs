// Data access exports
pub mod dataset;

pub use dataset::{Row, TabularDataset};
