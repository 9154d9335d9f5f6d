use clap::Parser;
use reduce_trace::adapters::sink;
use reduce_trace::core::ConfigProvider;
use reduce_trace::utils::{logger, validation::Validate};
use reduce_trace::{CliConfig, FoldPipeline, ReduceEngine, ReduceError};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting reduce-trace");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let stdout = std::io::stdout();
    let trace_sink = sink::for_format(config.output_format(), stdout.lock());
    let monitor_enabled = config.monitor;
    let pipeline = FoldPipeline::new(config, trace_sink);
    let mut engine = ReduceEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(result) => tracing::info!("✅ Fold completed with result {}", result),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: ReduceError) -> ! {
    // 下游關閉管道 (例如 `| head`) 時安靜結束
    if !e.is_failure() {
        tracing::debug!("Output closed early: {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::error!(
        "❌ reduce-trace failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
