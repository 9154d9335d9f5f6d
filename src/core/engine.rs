use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ReduceEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReduceEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<i64> {
        tracing::info!("Starting fold");
        self.monitor.log_stats("Start");

        // Extract
        let values = self.pipeline.extract()?;
        tracing::info!("Extracted {} values", values.len());
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(values)?;
        tracing::info!("Folded {} steps, result {}", report.steps.len(), report.result);
        self.monitor.log_stats("Transform");

        // Load
        let result = self.pipeline.load(report)?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(result)
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}
