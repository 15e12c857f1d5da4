use clap::Parser;
use kicker_rating::{
    args::Args,
    error::{KickerError, Result},
    processor::process_sources,
    report::{render_summary, write_report, PlotReport},
    results::loader::{load_sources, result_files}
};
use tracing::{error, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.rating_config();
    config.validate()?;

    let files = result_files(&args.input_dir, &args.extension)?;
    if files.is_empty() {
        return Err(KickerError::NoResultFiles(args.input_dir.clone()));
    }

    // A file that cannot be parsed is skipped, the others are still rated
    let mut sources = Vec::with_capacity(files.len());
    for (path, source) in files.iter().zip(load_sources(&files)) {
        match source {
            Ok(source) => sources.push(source),
            Err(e) => warn!("Skipping {}: {}", path.display(), e)
        }
    }

    info!("Rating with {} in {} mode", config.model, args.mode);
    let run = process_sources(&sources, config, args.mode)?;

    let mut reports = vec![PlotReport::new(&run.full, args.window, args.legend_order)];
    reports.extend(
        run.sources
            .iter()
            .map(|source| PlotReport::new(source, args.window, args.legend_order))
    );

    if let Some(dir) = &args.output_dir {
        for report in &reports {
            write_report(dir, report)?;
        }
    }

    for report in &reports {
        println!("{}\n", render_summary(report));
    }

    Ok(())
}
