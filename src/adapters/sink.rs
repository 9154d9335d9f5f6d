use crate::core::{FoldReport, FoldStep, OutputFormat, Result, TraceSink};
use std::io::Write;

/// Plain text trace: `x=<acc>, y=<value>` per step, then the result.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    fn record_step(&mut self, step: &FoldStep) -> Result<()> {
        writeln!(self.writer, "x={}, y={}", step.acc, step.value)?;
        Ok(())
    }

    fn finish(&mut self, report: &FoldReport) -> Result<()> {
        writeln!(self.writer, "{}", report.result)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the whole report as one JSON document once the fold finishes.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for JsonSink<W> {
    fn record_step(&mut self, step: &FoldStep) -> Result<()> {
        tracing::debug!("x={}, y={}", step.acc, step.value);
        Ok(())
    }

    fn finish(&mut self, report: &FoldReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn for_format<'w, W: Write + 'w>(format: OutputFormat, writer: W) -> Box<dyn TraceSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}
