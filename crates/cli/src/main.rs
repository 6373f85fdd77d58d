use std::path::PathBuf;

use anyhow::Context;

use stockroom_cli::{CliConfig, ReplayOptions, load_script, replay};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().context("invalid configuration")?;
    stockroom_observability::init_with(config.log_format);

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.script.clone());
    if path.is_none() {
        tracing::info!("no script path given; reading stock script from stdin");
    }

    let script = load_script(path.as_deref())?;
    let report = replay(
        &script,
        ReplayOptions {
            fail_fast: config.fail_fast,
        },
    )
    .context("failed to create stock record")?;

    println!("{}", report.record);
    if report.record.is_reorder_needed() {
        println!(
            "reorder needed: available {} < threshold {}",
            report.record.available(),
            report.record.reorder_threshold()
        );
    }

    if config.fail_fast {
        if let Some(first) = report.rejected.first() {
            anyhow::bail!(
                "command #{} ({}) rejected: {}",
                first.index,
                first.command.name(),
                first.error
            );
        }
    }

    Ok(())
}
