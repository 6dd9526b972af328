use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Number of items to generate after the seed items
    #[arg(long, default_value = "5000")]
    pub count: usize,
    /// Where the catalog json is written. The directory must already exist
    #[arg(long, default_value = "sample-data/items.json")]
    pub output: PathBuf,
    /// Randomness seed to generate items; a random one is logged when unset
    #[arg(long)]
    pub seed: Option<u64>,
}
