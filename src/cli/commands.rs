use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pressroom")]
#[command(version, about = "Flat-file backed publishing API for the ONU Legends press site")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listening port (falls back to $PORT, then 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the collection JSON files
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Directory for uploaded images and videos
        #[arg(long, value_name = "DIR")]
        uploads_dir: Option<PathBuf>,

        /// Directory of static presentation assets
        #[arg(long, value_name = "DIR")]
        public_dir: Option<PathBuf>,
    },
}
