use anyhow::{Context, Result};
use clap::Parser;

use natural_squares::cli::{Cli, ReportFormat};
use natural_squares::select::{
    DialogSelector, FixedInput, FixedName, InputSelector, OutputNamer, PromptNamer,
};
use natural_squares::{pipeline, PipelineError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        let code = e.downcast_ref::<PipelineError>().map_or(1, PipelineError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut selector: Box<dyn InputSelector> = match &cli.input {
        Some(path) => Box::new(FixedInput(path.clone())),
        None => Box::new(DialogSelector),
    };
    let mut namer: Box<dyn OutputNamer> = match &cli.output {
        Some(name) => Box::new(FixedName(name.clone())),
        None => Box::new(PromptNamer::stdio()),
    };

    let report = pipeline::run(&mut *selector, &mut *namer, &cli.run_options())?;

    match cli.report {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialising run report")?;
            println!("{json}");
        }
    }
    Ok(())
}
