use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bedrock_trainer::config;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load_config()?;
    config::validate_config(&cfg)?;

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting bedrock-trainer v{}", env!("CARGO_PKG_VERSION"));

    run(cfg).await
}

#[cfg(not(windows))]
async fn run(_cfg: config::Config) -> Result<()> {
    anyhow::bail!("bedrock-trainer only supports Windows hosts")
}

#[cfg(windows)]
async fn run(cfg: config::Config) -> Result<()> {
    use bedrock_trainer::{PatchSet, TargetProcess};
    use tracing::{error, warn};

    let target = TargetProcess::attach(&cfg.target.process, &cfg.target.module)?;
    info!(
        "Attached to {} (pid {}), module base {}",
        cfg.target.process,
        target.pid(),
        target.module_base()
    );

    let engine = target.patch_engine();
    let mut applied = PatchSet::new();

    for patch in &cfg.patches {
        // A failed patch disables that feature, not the whole session
        let destination = match target.resolve(&patch.offsets) {
            Ok(address) => address,
            Err(err) => {
                warn!("Skipping patch '{}': {}", patch.name, err);
                continue;
            }
        };

        let result = match patch.payload()? {
            config::PatchPayload::Bytes(bytes) => engine.apply(destination, &bytes),
            config::PatchPayload::Nop(size) => engine.apply_nop(destination, size),
        };

        match result {
            Ok(record) => {
                info!(
                    "Applied patch '{}' at {} ({} bytes)",
                    patch.name,
                    destination,
                    record.len()
                );
                applied.push(record);
            }
            Err(err) => warn!("Skipping patch '{}': {}", patch.name, err),
        }
    }

    info!(
        "{} of {} patches active. Press Ctrl+C to restore and exit.",
        applied.len(),
        cfg.patches.len()
    );
    tokio::signal::ctrl_c().await?;

    info!("Restoring original bytes");
    if let Err(err) = applied.revert_all(&engine) {
        error!(
            "Failed to restore {} remaining patch(es): {}",
            applied.len(),
            err
        );
    }

    Ok(())
}
