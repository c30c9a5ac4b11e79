use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use page_meta::report;
use page_meta::{Batch, BatchError, Progress};
use std::process::ExitCode;
use std::time::Duration;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let block = match args.read_url_block() {
        Ok(block) => block,
        Err(e) => {
            ::log::error!("Failed to read URLs: {}", e);
            eprintln!("error: failed to read URLs: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut batch = match Batch::from_input(&block) {
        Ok(batch) => batch.with_timeout(args.timeout),
        Err(e @ BatchError::EmptyInput) => {
            ::log::warn!("{}", e);
            eprintln!("warning: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            ::log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(user_agent) = &args.user_agent {
        batch = batch.with_user_agent(user_agent);
    }

    ::log::info!("Extracting SEO data from {} URLs", batch.urls().len());

    let spinner = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };

    let records = match batch
        .run(|progress| match progress {
            Progress::Started { index, total, url } => {
                spinner.set_message(format!(
                    "Extracting data from {}... ({}/{})",
                    url, index, total
                ));
            }
            Progress::Finished { record, .. } => {
                if record.is_failure() {
                    spinner.println(format!("{} failed", record.url()));
                }
            }
        })
        .await
    {
        Ok(records) => records,
        Err(e) => {
            spinner.finish_and_clear();
            ::log::error!("Failed to start extraction: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    spinner.finish_and_clear();

    match args.format {
        OutputFormat::Table => {
            println!("Extraction Results\n");
            print!("{}", report::render_table(&records, args.max_width));
        }
        OutputFormat::Sections => {
            println!("Extraction Results\n");
            print!("{}", report::render_sections(&records));
        }
        OutputFormat::Json => match report::render_json(&records) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ::log::error!("Failed to serialize results: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
