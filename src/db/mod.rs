//! Storage layer (in-memory).

pub mod store;

pub use store::{ActivityStore, RecordWorkoutResult};
