use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use daylog::config::{self, Config};
use daylog::{Logger, Severity, SourceLocation};

const USAGE: &str = "usage: daylog [--path | [severity] <message...>]";

fn main() -> Result<()> {
    // Internal diagnostics go to stderr so stdout only carries log lines
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "daylog=warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let config = Config::load()?;
    config::ensure_log_dir(&config)?;

    let logger = Logger::from_config(&config);
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--path") {
        println!("{}", logger.sink().current_path().display());
        return Ok(());
    }

    let (severity, words) = split_severity(&args).context(USAGE)?;
    tracing::debug!(%severity, dir = %logger.sink().dir().display(), "Writing log line");

    daylog::init(logger)?;
    daylog::logger().log(
        severity,
        words.join(" "),
        SourceLocation::new(file!(), line!(), column!(), "main"),
    );

    Ok(())
}

/// Split off a leading severity name; without one the message is logged as info
fn split_severity(args: &[String]) -> Option<(Severity, &[String])> {
    match args.split_first() {
        Some((first, rest)) => match first.parse::<Severity>() {
            Ok(Severity::Memory) => Some((Severity::Memory, rest)),
            Ok(severity) if !rest.is_empty() => Some((severity, rest)),
            _ => Some((Severity::Info, args)),
        },
        None => None,
    }
}
