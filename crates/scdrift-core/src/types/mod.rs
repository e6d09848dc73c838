//! Stream data model: instances, datasets, class distributions, detector levels.

pub mod dataset;
pub mod distribution;
pub mod instance;
pub mod level;

pub use dataset::{Dataset, DatasetSchema};
pub use distribution::ClassDistribution;
pub use instance::{Instance, Label};
pub use level::Level;
