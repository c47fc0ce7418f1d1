use anyhow::Result;
use homelab_stats::collectors::SystemProbes;
use homelab_stats::config::AppConfig;
use homelab_stats::executor::CommandExecutor;
use homelab_stats::pipeline;
use homelab_stats::publisher::Publisher;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout carries only the run summary.
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        output = %config.output.path.display(),
        "collecting homelab stats"
    );

    let probes = SystemProbes::from_config(&config);
    let publisher = Publisher::new(
        CommandExecutor::new(config.collector.command_timeout()),
        &config.publish,
    );
    let collection = pipeline::run(&probes, &publisher, &config).await?;

    println!("{}", collection.snapshot.summary());
    Ok(())
}
