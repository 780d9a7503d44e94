//! Command-line access to the YouVersion public Bible API.
//!
//! Lists Bible versions, prints the verse of the day, and downloads the
//! verse image.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use youversion::{DownloadOptions, Language, YouVersionClient, day};

// ============================================================================
// CLI Arguments
// ============================================================================

/// YouVersion verse of the day from the command line.
#[derive(Parser, Debug)]
#[command(name = "yv")]
#[command(version, about, long_about = None)]
struct Args {
    /// YouVersion developer token
    #[arg(long, env = "YOUVERSION_API_TOKEN", hide_env_values = true)]
    token: String,

    /// Language name or code (e.g. "Spanish" or "es")
    #[arg(short, long, default_value = "en")]
    language: Language,

    /// Bible version code, defaults to KJV
    #[arg(short, long)]
    bible_version: Option<String>,

    /// API base URL
    #[arg(long, default_value = "https://developers.youversionapi.com/1.0")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Which day to fetch the verse of the day for.
#[derive(clap::Args, Debug)]
struct DayArgs {
    /// Day of the year (1-366), defaults to today
    #[arg(long, conflicts_with = "date")]
    day: Option<u16>,

    /// ISO date, e.g. 2024-12-25
    #[arg(long)]
    date: Option<String>,
}

impl DayArgs {
    fn resolve(&self) -> youversion::Result<u16> {
        match (&self.day, &self.date) {
            (Some(day), _) => Ok(*day),
            (None, Some(date)) => day::day_of_year_from_iso_date(date),
            (None, None) => Ok(day::current_day_of_year()),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List Bible versions available in the selected language
    Versions,

    /// Show one Bible version
    Version {
        /// Version code, e.g. ASV
        code: String,
    },

    /// Print the verse of the day
    Votd {
        #[command(flatten)]
        day: DayArgs,
    },

    /// Print the verse of the day image URL
    ImageUrl {
        #[command(flatten)]
        day: DayArgs,

        /// Image width in pixels (max 1280)
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Image height in pixels (max 1280)
        #[arg(long, default_value_t = 1280)]
        height: u32,
    },

    /// Download the verse of the day image
    Download {
        #[command(flatten)]
        day: DayArgs,

        /// Square image size in pixels (max 1280)
        #[arg(long, default_value_t = 1280)]
        size: u32,

        /// Output file, defaults to the verse reference in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = YouVersionClient::builder()
        .url(&args.base_url)
        .token(&args.token)
        .language(args.language)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(code) = &args.bible_version {
        builder = builder.bible_version(code.as_str());
    }
    let client = builder.build()?;

    info!(
        base_url = %args.base_url,
        language = %args.language,
        bible_version = client.bible_version(),
        "Starting yv"
    );

    match args.command {
        Command::Versions => {
            let versions = client.bible_versions().await?;
            debug!(count = versions.len(), "Fetched versions");
            if args.json {
                print_json(&versions)?;
            } else {
                for version in versions {
                    println!("{:<10} {}", version.abbreviation, version.title);
                }
            }
        }
        Command::Version { code } => {
            let version = client.get_bible_version(&code).await?;
            if args.json {
                print_json(&version)?;
            } else {
                println!("{} ({})", version.title, version.abbreviation);
                if let Some(id) = version.id {
                    println!("id: {}", id);
                }
                if !version.copyright.is_empty() {
                    println!("{}", version.copyright);
                }
            }
        }
        Command::Votd { day } => {
            let votd = client.get_verse_of_the_day_for(day.resolve()?).await?;
            if args.json {
                print_json(&votd)?;
            } else {
                println!("{}", votd.verse.text);
                println!(
                    "  {} ({})",
                    votd.verse.reference, votd.bible_version.abbreviation
                );
            }
        }
        Command::ImageUrl { day, width, height } => {
            let votd = client.get_verse_of_the_day_for(day.resolve()?).await?;
            println!("{}", votd.image.url(width, height)?);
        }
        Command::Download { day, size, output } => {
            let votd = client.get_verse_of_the_day_for(day.resolve()?).await?;
            let mut options = DownloadOptions::new().square(size);
            if let Some(output) = output {
                options = options.path(output);
            }
            let path = client.images().download(&votd.image, options).await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
