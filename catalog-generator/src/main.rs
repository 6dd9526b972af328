use args::Args;
use catalog_generator::{
    catalog, error::Result, item_generator::ItemGenerator, seed_items::seed_items, writer,
};
use clap::Parser;

mod args;

fn main() {
    let args = Args::parse();

    let mut logger_builder = env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or("info")
            .default_write_style_or("always"),
    );
    logger_builder.init();

    if let Err(e) = run(args) {
        log::error!("catalog generation failed: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed: {seed}");

    let mut item_generator = ItemGenerator::new(seed);
    let catalog = catalog::assemble(seed_items()?, args.count, &mut item_generator)?;
    writer::write_catalog(&args.output, catalog.items())?;

    println!("{}", catalog.summary());
    Ok(())
}
