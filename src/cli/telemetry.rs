use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, EnvFilter, Registry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unsupported log format: {other}"),
        }
    }
}

/// Builds the filter: `RUST_LOG` wins, otherwise the verbosity level, otherwise off.
fn env_filter(verbosity_level: Option<Level>) -> Result<EnvFilter> {
    let default = verbosity_level.map_or(LevelFilter::OFF, LevelFilter::from_level);

    Ok(EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tower_http=info".parse()?))
}

/// Initialize logging. Output goes to stderr so command output stays clean.
///
/// # Errors
///
/// Returns an error if the subscriber is already set or a directive is invalid
pub fn init(verbosity_level: Option<Level>, format: LogFormat) -> Result<()> {
    let text_layer = (format == LogFormat::Text).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
    });

    let json_layer = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
    });

    let subscriber = Registry::default()
        .with(text_layer)
        .with(json_layer)
        .with(env_filter(verbosity_level)?);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
