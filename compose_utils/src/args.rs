use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "unix:///var/run/docker.sock")]
    pub(crate) docker: String,

    /// Directory whose name prefixes generated container names (defaults to the current directory)
    #[arg(long)]
    pub(crate) project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate container names for a service
    Name {
        label: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Normalize an image reference to repo/base:tag
    Image { image: String },
    /// Split a command line into arguments
    Command { command: String },
    /// Parse port shorthands
    Port {
        #[arg(required = true)]
        specs: Vec<String>,
    },
    /// Show the port map of an existing container
    Ports { container: String },
    /// Parse service links
    Links { links: Vec<String> },
    /// Parse a restart policy and print its engine form
    Restart { spec: String },
    /// Convert a memory limit to bytes
    Memory { value: String },
}
