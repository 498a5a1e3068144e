use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cpn` binary.
#[derive(Debug, Parser)]
#[command(name = "cpn", version, about = "Coupon loyalty program client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, resolving the output format against the
    /// configured default.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(default_format)),
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
