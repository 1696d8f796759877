use anyhow::{bail, Result};
use clap::AppSettings;
use log::*;
use std::path::PathBuf;
use structopt::StructOpt;
use table_heatmap::{RenderConfig, Scaler};
use walkdir::WalkDir;

const EXTS: [&str; 2] = [".csv", ".csv.gz"];

#[derive(StructOpt, Debug)]
#[structopt(
    about = "Render numeric .csv tables as HTML heatmaps",
    global_settings = &[AppSettings::ColoredHelp]
)]
struct Options {
    /// Specify the .csv file to use
    #[structopt(name = "INPUT", parse(from_os_str))]
    input: PathBuf,

    /// Sets the level of verbosity
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Silence all output
    #[structopt(short, long)]
    quiet: bool,

    /// Finds .csv files in the specified folder and runs on all of them
    #[structopt(short, long)]
    recursive: bool,

    /// How values are placed on the color scale
    #[structopt(short, long, default_value = "minmax", possible_values = &Scaler::VARIANTS)]
    scaler: Scaler,

    /// Run the scale from red to blue instead of blue to red
    #[structopt(long)]
    reverse: bool,

    /// Treat the first column as row labels
    #[structopt(long)]
    index: bool,

    /// Decimals shown per value
    #[structopt(short, long, default_value = "6")]
    precision: usize,
}

impl Options {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            scaler: self.scaler,
            reverse: self.reverse,
            has_index: self.index,
            precision: self.precision,
        }
    }
}

fn main() -> Result<()> {
    let opts = Options::from_args();
    stderrlog::new()
        .module(module_path!())
        .quiet(opts.quiet)
        .verbosity(opts.verbose + 1)
        .init()?;

    let config = opts.config();
    debug!("{:?}", config);

    if opts.recursive {
        let mut failed = 0;
        for entry in WalkDir::new(&opts.input) {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_file() && EXTS.iter().any(|ext| name.ends_with(ext)) {
                if let Err(e) = table_heatmap::run(entry.path(), &config) {
                    error!("{:#}", e);
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            bail!("{} files could not be rendered", failed);
        }
    } else {
        table_heatmap::run(&opts.input, &config)?;
    }
    Ok(())
}
