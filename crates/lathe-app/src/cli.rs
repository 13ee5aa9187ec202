use clap::Parser;

/// Lathe web shell — standalone/dev harness (no host attached).
#[derive(Parser, Debug)]
#[command(name = "lathe-shell", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. "lathe=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Tab to select after startup (e.g. "preview").
    #[arg(long)]
    pub tab: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
