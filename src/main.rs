use anyhow::Result;
use korea_maps::app::{self, Target};
use korea_maps::config::Config;
use korea_maps::logging;

fn main() -> Result<()> {
    logging::init();

    let arg = std::env::args().nth(1);
    let target = Target::parse(arg.as_deref())?;

    app::run(&Config::default(), target)
}
