use clap::Subcommand;
use std::path::PathBuf;

pub mod batch;
pub mod convert;
pub mod info;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an SC texture to PNG
    Convert {
        /// Source _tex.sc file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination PNG file
        #[arg(short, long)]
        destination: PathBuf,

        /// Require the SC magic and check the declared file size
        #[arg(long)]
        strict: bool,
    },

    /// Show header information for an SC texture
    Info {
        /// SC texture file
        path: PathBuf,
    },

    /// Convert every _tex.sc file under a directory to PNG
    Batch {
        /// Source directory
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory
        #[arg(short, long)]
        destination: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                strict,
            } => convert::execute(source, destination, *strict),
            Commands::Info { path } => info::execute(path),
            Commands::Batch {
                source,
                destination,
                quiet,
            } => batch::execute(source, destination, *quiet),
        }
    }
}
