//! Standalone schedule scrape.
//!
//! Runs the scraper against the live stats API and prints the games it finds
//! as JSON. Handy for checking what the service would serve without running it.
//!
//! Run with:
//!   cargo run --bin scrape-schedule -- <from> <to> [--preseason] [--not-over]
//!   cargo run --bin scrape-schedule -- --games <id> [<id> ...]
//! Examples:
//!   cargo run --bin scrape-schedule -- 2016-10-12 2016-10-20
//!   cargo run --bin scrape-schedule -- --games 2016020001 2016030111

use anyhow::Context as _;
use nhl_schedule::config::Config;
use nhl_schedule::game_id::GameId;
use nhl_schedule::global::Global;
use nhl_schedule::schedule::ScrapeOptions;
use nhl_schedule::season::parse_date;
use nhl_schedule::util::today;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <from> <to> [--preseason] [--not-over]");
    eprintln!("       {program} --games <id> [<id> ...]");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("scrape-schedule");

    if args.len() < 3 {
        usage(program);
    }

    let config = Config::load().context("loading config")?;
    let global = Global::init(config)?;

    let games = if args[1] == "--games" {
        let ids = args[2..]
            .iter()
            .map(|s| s.parse::<GameId>())
            .collect::<Result<Vec<_>, _>>()?;

        global.schedule.get_dates(&ids, today()).await?
    } else {
        let from = parse_date(&args[1])?;
        let to = parse_date(&args[2])?;
        let flags = &args[3..];

        let options = ScrapeOptions {
            preseason: flags.iter().any(|f| f == "--preseason"),
            not_over: flags.iter().any(|f| f == "--not-over"),
        };

        global.schedule.scrape_schedule(from, to, options).await?
    };

    println!("{}", serde_json::to_string_pretty(&games)?);
    eprintln!("\n{} games", games.len());

    Ok(())
}
