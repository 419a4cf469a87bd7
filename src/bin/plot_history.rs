use accuracy_plot::{figure_path, plot_results, AccuracyHistory};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading accuracy history...");
    let history = AccuracyHistory::load(&args.history)
        .map_err(|e| anyhow!("Failed to load accuracy history: {}", e))?;

    plot_results(&history.training, &history.validation, &args.figure)
        .context("Failed to plot accuracy history")?;

    println!(
        "\nAccuracy chart saved to {}",
        figure_path(&args.figure).display()
    );

    Ok(())
}

#[derive(clap::Parser)]
#[command(
    name = "plot_history",
    about = "Plot training and validation accuracy curves from a recorded history",
    long_about = None
)]
struct Args {
    /// Path to the accuracy history JSON file
    history: PathBuf,

    /// Figure label used in the printed summary and the output file name
    #[arg(short, long, default_value = "1")]
    figure: String,
}
