use std::io::Write;
use std::str::FromStr;

use anyhow::Context;
use env_logger::Env;

use lingvoclip::config::{OutputMode, PipelineConfig};
use lingvoclip::{Pipeline, PipelineOutcome};

fn init_logger() {
    let env = Env::default().filter_or("RUST_LOG", "warn,lingvoclip=info");

    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Единственный необязательный аргумент — режим вывода
    let mode = match std::env::args().nth(1) {
        Some(arg) => OutputMode::from_str(&arg)
            .with_context(|| format!("invalid output mode argument '{}'", arg))?,
        None => OutputMode::default(),
    };

    let config = PipelineConfig {
        mode,
        ..PipelineConfig::default()
    };

    let outcome = Pipeline::new(config)
        .run()
        .await
        .context("media generation failed")?;

    match outcome {
        PipelineOutcome::Completed(path) => {
            println!("Result file is saved as '{}'", path.display());
        }
        PipelineOutcome::NothingToDo => {
            println!("File with phrases is empty or not found.");
        }
    }

    Ok(())
}
