use clap::Parser;
use standout_scrape::Jobs;
use std::error::Error;

mod args;
use args::{Args, convert_fetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut jobs = Jobs::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path);
        jobs = jobs.with_config_file(path)?;
    }

    // Command-line flags take precedence over the file
    jobs = jobs.with_results_wanted(args.results_wanted);
    if let Some(base_url) = &args.base_url {
        jobs = jobs.with_base_url(base_url);
    }
    if let Some(delay) = args.delay {
        jobs = jobs.with_delay(delay);
    }
    if let Some(concurrency) = args.concurrency {
        jobs = jobs.with_detail_concurrency(concurrency);
    }
    if !args.proxies.is_empty() {
        jobs = jobs.with_proxies(args.proxies.clone());
    }
    if let Some(fetcher) = args.fetcher {
        jobs = jobs.with_fetcher(convert_fetcher(fetcher));
    }

    ::log::info!(
        "Starting StandOutSearch scrape of {} for up to {} jobs",
        jobs.config().base_url,
        args.results_wanted
    );
    let start_time = std::time::Instant::now();

    let response = jobs.generate().await?;

    ::log::info!(
        "Scrape complete - {} jobs in {:.2} seconds",
        response.len(),
        start_time.elapsed().as_secs_f64()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}
