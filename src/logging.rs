use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. An explicit directive wins over `RUST_LOG`; with neither set
/// the level defaults to `info`. Output goes to stderr so command output stays pipeable.
pub fn init_tracing(filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log directive '{directive}'"))?,
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}
