mod fetch;
mod logging;
mod model;
mod parser;
mod pipeline;
mod schedule;
mod sink;

use clap::Parser;

use pipeline::RunOutcome;

#[derive(Parser)]
#[command(name = "vacancy_scraper", about = "VacancyMail job listings scraper")]
struct Cli {
    /// Run on a schedule instead of once immediately
    #[arg(long, value_enum)]
    schedule: Option<schedule::Interval>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init()?;
    let cli = Cli::parse();

    match cli.schedule {
        Some(interval) => schedule::run_forever(interval).await,
        None => {
            let fetcher = fetch::Fetcher::new()?;
            match pipeline::run(&fetcher).await {
                RunOutcome::Written(n) => println!("Wrote {} job listings", n),
                RunOutcome::Empty => println!("No jobs scraped."),
                RunOutcome::FetchFailed => println!("Fetch failed, see logs."),
                RunOutcome::ParseFailed => println!("Parse failed, see logs."),
            }
            Ok(())
        }
    }
}
