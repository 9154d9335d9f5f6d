use anyhow::Result;
use reduce_trace::adapters::sink;
use reduce_trace::core::{FoldReport, OutputFormat};
use reduce_trace::{FoldConfig, FoldPipeline, ReduceEngine, ReduceError, TextSink};

const REFERENCE_OUTPUT: &str = "x=100, y=1\nx=101, y=2\nx=103, y=3\nx=106, y=4\nx=110, y=5\n115\n";

fn run_to_string(config: FoldConfig) -> (reduce_trace::Result<i64>, String) {
    let mut out = Vec::new();
    let result = {
        let trace_sink = sink::for_format(config.format, &mut out);
        let pipeline = FoldPipeline::new(config, trace_sink);
        ReduceEngine::new(pipeline).run()
    };
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_end_to_end_default_fold() {
    let (result, output) = run_to_string(FoldConfig::default());

    assert_eq!(result.unwrap(), 115);
    assert_eq!(output, REFERENCE_OUTPUT);
}

#[test]
fn test_five_trace_lines_precede_result() {
    let (_, output) = run_to_string(FoldConfig::default());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[..5].iter().all(|l| l.starts_with("x=")));
    assert_eq!(lines[5], "115");
}

#[test]
fn test_rerun_is_idempotent() {
    let (first_result, first) = run_to_string(FoldConfig::default());
    let (second_result, second) = run_to_string(FoldConfig::default());

    assert_eq!(first_result.unwrap(), second_result.unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_engine_can_run_twice_on_same_pipeline() -> Result<()> {
    let mut out = Vec::new();
    {
        let pipeline = FoldPipeline::new(FoldConfig::default(), TextSink::new(&mut out));
        let mut engine = ReduceEngine::new(pipeline);
        assert_eq!(engine.run()?, 115);
        assert_eq!(engine.run()?, 115);
        engine.into_pipeline().into_sink();
    }

    let output = String::from_utf8(out)?;
    assert_eq!(output, format!("{}{}", REFERENCE_OUTPUT, REFERENCE_OUTPUT));
    Ok(())
}

#[test]
fn test_end_to_end_json_report() -> Result<()> {
    let config = FoldConfig {
        format: OutputFormat::Json,
        ..FoldConfig::default()
    };
    let (result, output) = run_to_string(config);
    assert_eq!(result?, 115);

    let report: FoldReport = serde_json::from_str(&output)?;
    assert_eq!(report.initial, 100);
    assert_eq!(report.result, 115);
    let pairs: Vec<(i64, i64)> = report.steps.iter().map(|s| (s.acc, s.value)).collect();
    assert_eq!(pairs, vec![(100, 1), (101, 2), (103, 3), (106, 4), (110, 5)]);
    Ok(())
}

#[test]
fn test_overflow_stops_before_result_line() {
    let config = FoldConfig {
        numbers: vec![1, 2],
        initial: i64::MAX - 1,
        ..FoldConfig::default()
    };
    let (result, output) = run_to_string(config);

    assert!(matches!(result, Err(ReduceError::Overflow { value: 2, .. })));
    assert_eq!(
        output,
        format!("x={}, y=1\nx={}, y=2\n", i64::MAX - 1, i64::MAX)
    );
}

#[test]
fn test_monitoring_keeps_trace_output_clean() -> Result<()> {
    let mut out = Vec::new();
    let result = {
        let pipeline = FoldPipeline::new(FoldConfig::default(), TextSink::new(&mut out));
        let mut engine = ReduceEngine::new_with_monitoring(pipeline, true);
        engine.run()?
    };

    assert_eq!(result, 115);
    assert_eq!(String::from_utf8(out)?, REFERENCE_OUTPUT);
    Ok(())
}
