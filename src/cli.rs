//! Command line options and the one-shot render mode

use anyhow::Context;
use clap::Parser;
use jsonorbit_core::{visualize, LayoutConfig};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Turn JSON documents into 3D radial trees
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonorbit")]
#[command(about = "Lay out JSON documents as 3D radial trees", long_about = None)]
pub struct Args {
    /// Render this file (`-` for stdin) and exit instead of serving HTTP
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the payload in render mode (stdout when omitted)
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Indent the payload JSON
    #[arg(long)]
    pub pretty: bool,

    /// HTTP API port
    #[arg(long, default_value_t = 7070)]
    pub http_port: u16,

    /// Radial distance unit per depth level
    #[arg(long, default_value_t = 3.0)]
    pub horizontal_spacing: f64,

    /// Vertical drop per depth level
    #[arg(long, default_value_t = 4.0)]
    pub vertical_spacing: f64,

    /// Scales ring radius growth with depth
    #[arg(long, default_value_t = 1.5)]
    pub radius_multiplier: f64,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            horizontal_spacing: self.horizontal_spacing,
            vertical_spacing: self.vertical_spacing,
            radius_multiplier: self.radius_multiplier,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.log_level.as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// `RUST_LOG` directives when set, otherwise `--log-level`
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.default_filter())
    }

    fn default_filter(&self) -> EnvFilter {
        EnvFilter::default().add_directive(LevelFilter::from_level(self.log_level()).into())
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut text))
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(text)
}

/// Run the pipeline on `input` and write the payload JSON
pub fn render(input: &Path, output: Option<&Path>, config: &LayoutConfig, pretty: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let payload = visualize(&text, config)
        .with_context(|| format!("cannot visualize {}", input.display()))?;
    info!(
        nodes = payload.node_count(),
        edges = payload.edge_count(),
        "rendered {}",
        input.display()
    );

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &payload)?;
    } else {
        serde_json::to_writer(&mut writer, &payload)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout_defaults() {
        let args = Args::parse_from(["jsonorbit"]);
        assert_eq!(args.layout_config(), LayoutConfig::default());
        assert_eq!(args.http_port, 7070);
        assert_eq!(args.log_level(), Level::INFO);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "jsonorbit",
            "--input",
            "doc.json",
            "--vertical-spacing",
            "8",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.layout_config().vertical_spacing, 8.0);
        assert_eq!(args.input.as_deref(), Some(Path::new("doc.json")));
        assert_eq!(args.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_log_level_filter() {
        let args = Args::parse_from(["jsonorbit", "--log-level", "warn"]);
        assert_eq!(args.default_filter().max_level_hint(), Some(LevelFilter::WARN));

        let args = Args::parse_from(["jsonorbit", "--log-level", "bogus"]);
        assert_eq!(args.default_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_output_requires_input() {
        assert!(Args::try_parse_from(["jsonorbit", "--output", "out.json"]).is_err());
    }
}
