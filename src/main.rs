mod chart;
mod cli;
mod img;
mod logging;
mod palette;
mod preview;
mod transmission;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    logging::init();
    let args = cli::Args::parse();
    let settings = args.settings()?;
    let mut rng = chart::seeded_rng(args.seed);

    let colors = chart::chart(&settings, &mut rng)?;
    img::save_color_data(&args.destination, &colors)?;

    if args.preview {
        preview::show(colors, move || chart::chart(&settings, &mut rng))?;
    }

    Ok(())
}

/// In the browser there's no command line: show a fresh screensaver, R for the next one.
#[cfg(target_arch = "wasm32")]
fn main() {
    logging::init();
    let settings = cli::ChartSettings::screensaver();
    let mut rng = chart::seeded_rng(None);

    let result = chart::chart(&settings, &mut rng)
        .and_then(|colors| preview::show(colors, move || chart::chart(&settings, &mut rng)));
    if let Err(e) = result {
        log::error!("{e:#}");
    }
}
