use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use shark_platform::{self as platform, PlatformInfo};
use tracing_subscriber::EnvFilter;

/// shark - cross-platform host report
///
/// Prints identity, path, and Windows-compatibility information for the
/// current host. Takes no arguments and always exits 0; lookups that
/// fail degrade to conservative defaults inside the report.
#[derive(Parser)]
#[command(name = "shark")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    Cli::parse();

    let info = PlatformInfo::current();
    tracing::debug!(family = info.family(), "printing host report");
    print_report(&info)?;

    Ok(())
}

fn print_report(info: &PlatformInfo) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!(
        "{} shark v{}",
        style("::").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    ))?;
    term.write_line("")?;
    term.write_line(&format!("  System:    {} {}", info.family(), info.release))?;
    term.write_line(&format!("  Name:      {}", info.name))?;
    term.write_line(&format!("  Version:   {}", info.version))?;
    term.write_line(&format!("  Machine:   {}", info.machine))?;
    term.write_line(&format!("  Processor: {}", info.processor))?;
    term.write_line(&format!("  Rust:      {}", info.rustc))?;
    term.write_line(&format!("  User:      {}", info.username))?;
    term.write_line(&format!("  Hostname:  {}", info.hostname))?;

    match platform::home_dir() {
        Ok(home) => term.write_line(&format!("  Home:      {}", home.display()))?,
        Err(_) => term.write_line("  Home:      unknown")?,
    }
    term.write_line(&format!("  Temp:      {}", platform::temp_dir().display()))?;

    if info.is_windows() {
        term.write_line("")?;
        term.write_line(&format!(
            "  Windows:    {}",
            info.windows_version()
                .unwrap_or_else(|| "unknown".to_string())
        ))?;
        term.write_line(&format!("  Long paths: {}", info.supports_long_paths()))?;
        term.write_line(&format!("  Admin:      {}", platform::is_admin()))?;
    }

    Ok(())
}
