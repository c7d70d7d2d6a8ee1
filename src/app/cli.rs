use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "lyrebird")]
#[command(author = "Immelancholy")]
#[command(version)]
#[command(about = "Streaming music client resource shell", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a default config file to the given path and exit
    #[arg(long)]
    pub generate_config: Option<PathBuf>,

    /// JSON file describing the track to display
    #[arg(short, long)]
    pub track: Option<PathBuf>,
}
