pub mod engine;
pub mod fold;
pub mod pipeline;

pub use crate::domain::model::{FoldReport, FoldStep, OutputFormat};
pub use crate::domain::ports::{Combiner, ConfigProvider, Pipeline, TraceSink};
pub use crate::utils::error::Result;
