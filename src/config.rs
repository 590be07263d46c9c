use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputMode;

pub const DEFAULT_INPUT: &str = "./submissions.xml";
pub const DEFAULT_OUTPUT: &str = "./out";

#[derive(Parser, Debug)]
#[command(name = "proceedings_csv", version)]
#[command(about = "Generate session include lists for the LaTeX proceedings workflow")]
pub struct Args {
    /// Submission export to read
    #[arg(short, long, env = "PROCEEDINGS_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output directory, or the target file when --single-file is set
    #[arg(short, long, env = "PROCEEDINGS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Merge all sessions into one file with a shared header
    #[arg(short, long, env = "PROCEEDINGS_SINGLE_FILE")]
    pub single_file: bool,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::PerSession,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: args.output,
            mode: if args.single_file {
                OutputMode::Merged
            } else {
                OutputMode::PerSession
            },
        }
    }
}

impl Config {
    /// Parse the process arguments, with environment variables as fallbacks
    pub fn from_args() -> Self {
        Self::from(Args::parse())
    }
}
