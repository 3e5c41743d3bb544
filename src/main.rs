use clap::Parser;
use lightboxkit::cli::{run, Cli};
use lightboxkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    run(cli)
}
