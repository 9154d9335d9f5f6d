use crate::domain::model::{FoldReport, FoldStep, OutputFormat};
use crate::utils::error::Result;

/// Binary combining operation applied left to right.
pub trait Combiner {
    fn combine(&self, acc: i64, value: i64) -> Result<i64>;
}

/// Destination for the operand trace and the final result.
pub trait TraceSink {
    fn record_step(&mut self, step: &FoldStep) -> Result<()>;
    fn finish(&mut self, report: &FoldReport) -> Result<()>;
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn record_step(&mut self, step: &FoldStep) -> Result<()> {
        (**self).record_step(step)
    }

    fn finish(&mut self, report: &FoldReport) -> Result<()> {
        (**self).finish(report)
    }
}

pub trait ConfigProvider {
    fn numbers(&self) -> &[i64];
    fn initial(&self) -> i64;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<i64>>;
    fn transform(&mut self, values: Vec<i64>) -> Result<FoldReport>;
    fn load(&mut self, report: FoldReport) -> Result<i64>;
}
