use clap::{Parser, Subcommand, ValueEnum};
use codewizard_rating::{
    config::{OutputFormat, Settings},
    models::{RatingInput, TierColor, TierDescriptor, TierName},
    rating::{bracket_for, format_display, resolve_tier, tier_table, TierBracket, TierReport, TierReporter},
    sources::JsonFileSource,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod tui_main;

#[derive(Parser)]
#[clap(name = "codewizard-rating")]
#[clap(about = "Classify CodeWizard ratings into tiers", long_about = None)]
struct Cli {
    /// Output format, overriding the configured one
    #[clap(long, value_enum, global = true)]
    format: Option<Format>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tier a rating falls into
    Tier {
        /// Rating value; anything non-numeric is treated as unrated
        #[clap(allow_hyphen_values = true)]
        rating: String,
    },

    /// Show the label and color a rating is displayed with
    Display {
        /// Rating value; omit it for a user without a rating
        #[clap(allow_hyphen_values = true)]
        rating: Option<String>,
    },

    /// List every tier with its rating range
    Table {
        /// Only show this tier, e.g. "Expert" or "Candidate Master"
        #[clap(long)]
        tier: Option<String>,
    },

    /// Classify every user in a JSON profile export
    Report {
        /// Path to the export (defaults to the configured profiles path)
        #[clap(short, long)]
        input: Option<String>,
    },

    /// Launch the interactive tier explorer
    Tui,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, load_error) = Settings::load();
    init_logging(&settings, matches!(cli.command, Commands::Tui));

    if let Some(e) = load_error {
        warn!("Falling back to default settings: {}", e);
    }
    info!(
        "{} v{} ({:?})",
        settings.app.name, settings.app.version, settings.app.environment
    );

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(e.into());
    }

    let format = match cli.format {
        Some(Format::Json) => OutputFormat::Json,
        Some(Format::Text) => OutputFormat::Text,
        None => settings.display.output_format,
    };
    let color = settings.display.color;

    match cli.command {
        Commands::Tier { rating } => {
            let tier = resolve_tier(rating.as_str());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tier)?),
                OutputFormat::Text => print_tier(tier, color),
            }
        }

        Commands::Display { rating } => {
            let input = rating.as_deref().map(RatingInput::from).unwrap_or(RatingInput::Missing);
            let display = format_display(input);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&display)?),
                OutputFormat::Text => {
                    println!("{}  ({})", paint(&display.label, display.color, color), display.color)
                }
            }
        }

        Commands::Table { tier } => {
            let brackets = select_brackets(tier.as_deref())?;

            match format {
                OutputFormat::Json => {
                    let rows: Vec<_> = brackets
                        .iter()
                        .map(|bracket| {
                            json!({
                                "tier": bracket.descriptor,
                                "lower": bracket.lower,
                                "upper": bracket.upper,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Text => {
                    for bracket in &brackets {
                        let descriptor = bracket.descriptor;
                        println!(
                            "{} {} {:>12}  {} → {}",
                            descriptor.badge,
                            paint(&format!("{:<22}", descriptor.name.as_str()), descriptor.text_color, color),
                            bracket.range_label(),
                            descriptor.gradient.start,
                            descriptor.gradient.end,
                        );
                    }
                }
            }
        }

        Commands::Report { input } => {
            let path = input.unwrap_or_else(|| settings.source.profiles_path.clone());
            info!("Generating tier report from {}", path);

            let reporter = TierReporter::new(Arc::new(JsonFileSource::new(&path)));
            let report = match reporter.build_report().await {
                Ok(report) => report,
                Err(e) => {
                    error!("Failed to build report: {}", e);
                    return Err(e.into());
                }
            };

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print_report(&report, color),
            }
        }

        Commands::Tui => {
            tui_main::run_tui(settings.tui.tick_rate_ms)?;
        }
    }

    Ok(())
}

fn select_brackets(tier: Option<&str>) -> anyhow::Result<Vec<TierBracket>> {
    match tier {
        Some(raw) => {
            let name = TierName::from_str(raw).ok_or_else(|| anyhow::anyhow!("Unknown tier '{}'", raw))?;
            Ok(vec![bracket_for(name)])
        }
        None => Ok(tier_table().collect()),
    }
}

fn init_logging(settings: &Settings, tui: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.app.log_level.to_lowercase()));

    // Log lines would corrupt the alternate screen
    if tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn paint(text: &str, tint: TierColor, enabled: bool) -> String {
    if enabled {
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", tint.r, tint.g, tint.b, text)
    } else {
        text.to_string()
    }
}

fn print_tier(tier: &TierDescriptor, color: bool) {
    println!("{} {}", tier.badge, paint(tier.name.as_str(), tier.text_color, color));
    println!("Gradient:   {} → {}", tier.gradient.start, tier.gradient.end);
    println!("Text color: {}", tier.text_color);
}

fn print_report(report: &TierReport, color: bool) {
    println!("\n=== Tier Report ===");
    println!("Source:      {}", report.source);
    println!("Generated:   {}", report.generated_at.to_rfc3339());
    println!("Users:       {}", report.total_users);
    println!("Rated:       {}", report.rated_users);
    println!("Unrated:     {}", report.unrated_users);
    match report.highest_rating {
        Some(highest) => println!("Highest:     {}", format_display(highest).label),
        None => println!("Highest:     —"),
    }
    match report.average_rating {
        Some(average) => println!("Average:     {:.1}", average),
        None => println!("Average:     —"),
    }

    println!("\nDistribution:");
    for (tier, count) in report.distribution.iter() {
        let descriptor = TierDescriptor::for_name(tier);
        println!(
            "  {} {} {:>5}  {:>5.1}%",
            descriptor.badge,
            paint(&format!("{:<22}", tier.as_str()), descriptor.text_color, color),
            count,
            report.distribution.share(tier) * 100.0,
        );
    }

    println!("\nUsers:");
    for user in &report.users {
        println!(
            "  {:<12} {:<20} {} {}",
            user.id,
            user.username,
            user.badge,
            paint(&user.display.label, user.display.color, color),
        );
    }
}
