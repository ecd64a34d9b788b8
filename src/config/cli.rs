use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "period")]
#[command(about = "Print ISO-8601 periods in canonical and human-readable form")]
#[command(after_help = "Negative periods go after `--`, e.g. `period -- -P1D`")]
pub struct CliConfig {
    /// ISO-8601 periods, e.g. P1Y2M25DT5H6M7.5S
    #[arg(required = true)]
    pub periods: Vec<String>,

    /// TOML file with localised unit names
    #[arg(long)]
    pub names: Option<String>,

    /// Do not fold days into weeks in the human-readable form
    #[arg(long)]
    pub no_weeks: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
