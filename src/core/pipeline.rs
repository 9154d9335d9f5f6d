use crate::core::fold::{fold_traced, Add};
use crate::core::{ConfigProvider, FoldReport, Pipeline, Result, TraceSink};

pub struct FoldPipeline<C: ConfigProvider, S: TraceSink> {
    pub(crate) config: C,
    pub(crate) sink: S,
    combiner: Add,
}

impl<C: ConfigProvider, S: TraceSink> FoldPipeline<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self {
            config,
            sink,
            combiner: Add,
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<C: ConfigProvider, S: TraceSink> Pipeline for FoldPipeline<C, S> {
    fn extract(&self) -> Result<Vec<i64>> {
        let values = self.config.numbers().to_vec();
        tracing::debug!(
            "Input: {:?}, initial accumulator: {}",
            values,
            self.config.initial()
        );
        Ok(values)
    }

    fn transform(&mut self, values: Vec<i64>) -> Result<FoldReport> {
        fold_traced(&values, self.config.initial(), &self.combiner, &mut self.sink)
    }

    fn load(&mut self, report: FoldReport) -> Result<i64> {
        self.sink.finish(&report)?;
        Ok(report.result)
    }
}
