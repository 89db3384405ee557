pub mod dataset;
pub mod read;
pub mod ssa;
pub mod write;

pub use dataset::{Dataset, DatasetStore};
pub use read::{load_national, load_states};
pub use write::{write_national, write_states};
