//! Full-batch training of an [`Mlp`](crate::model::Mlp) on a fixed dataset.

pub mod config;
pub mod trainer;

pub use config::TrainingConfig;
pub use trainer::{Trainer, TrainingOutcome};
