use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{error, info, warn};
use rayon::prelude::*;
use sheetnest_cli::config::NestConfig;
use sheetnest_cli::io;
use sheetnest_cli::io::cli::Cli;
use sheetnest_cli::run::{output_stems, run_request};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NestConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let stems = output_stems(&args.input_file)?;

    let results = args
        .input_file
        .par_iter()
        .zip(stems.par_iter())
        .map(|(input_file, stem)| {
            let result = run_request(input_file, stem, config, &args.solution_folder);
            (input_file, result)
        })
        .collect::<Vec<_>>();

    let failed = results
        .iter()
        .filter_map(|(input_file, result)| match result {
            Ok(output) => {
                info!(
                    "[MAIN] {} done: {} parts on {} sheets, density {:.3}%",
                    input_file.display(),
                    output.solution.n_parts,
                    output.solution.n_sheets,
                    output.solution.density * 100.0
                );
                None
            }
            Err(err) => {
                error!("[MAIN] {} failed: {err:#}", input_file.display());
                Some(input_file.display())
            }
        })
        .collect_vec();

    if !failed.is_empty() {
        bail!(
            "{} of {} requests failed: {}",
            failed.len(),
            results.len(),
            failed.iter().join(", ")
        );
    }
    Ok(())
}
