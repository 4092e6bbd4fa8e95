use std::path::PathBuf;

use clap::Parser;
use stellar_sweep::{App, Args, init_logging, output};
use stellar_sweep_core::sweep::SweepProgress;
use stellar_sweep_core::{HeatmapTable, error_table};

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".stellar_sweep")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = args.resolve()?;
    tracing::info!(oracle = config.oracle.kind.name(), "configuration resolved");

    let progress = SweepProgress::default();
    let results = error_table(&config.sweep, &config.oracle, Some(&progress))?;
    tracing::info!(
        cells = progress.completed(),
        unconverged = results.diagnostics().len(),
        "sweep finished"
    );

    let quantity = args.show.into();
    let table = HeatmapTable::for_quantity(&results, quantity, &config.render)?;

    if let Some(path) = &args.save {
        output::save_svg(&table, &config.render, path)?;
    }
    if let Some(path) = &args.json {
        output::save_json(&results, path)?;
    }

    if args.print {
        print!("{}", output::text_report(&results, &table));
        return Ok(());
    }

    let mut app = App::new(results, config.render, quantity)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Viewer shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
