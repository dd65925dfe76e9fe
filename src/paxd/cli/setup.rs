use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "paxd", bin_name = "paxd", version = get_version())]
#[command(about = "Apply and inspect PaX markings on executables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directive file to apply [env: PAXD_CONF] [default: /etc/paxd.conf]
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also print progress messages
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the markings listed in the directive file (default)
    Apply,

    /// Show the markings of ELF binaries
    #[command(alias = "ls")]
    Show {
        /// Walk directories recursively
        #[arg(short = 'R', long)]
        recursive: bool,

        /// Only show files with flags set
        #[arg(short, long)]
        filter: bool,

        /// Print a JSON array instead of report lines
        #[arg(long)]
        json: bool,

        /// Files, or directory roots with --recursive
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Replace the markings of one or more files
    Set {
        /// Flags to store, any of: p e m r s
        flags: String,

        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Remove the markings of one or more files
    Clear {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },
}
