use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uranai_core::domain::request::{FortuneForm, NameFortuneForm};
use uranai_core::fortune::{generate_name_fortune, generate_weekly_fortune};

#[derive(Debug, Parser)]
#[command(name = "uranai_cli")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Seven-day reading from a birth date.
    Weekly {
        /// Birth date (YYYY-MM-DD).
        #[arg(long)]
        birth_date: String,

        #[arg(long)]
        birth_time: Option<String>,

        #[arg(long, default_value = "")]
        prefecture: String,

        #[arg(long, default_value = "")]
        gender: String,

        /// First day of the reading (YYYY-MM-DD). Defaults to today in the configured offset.
        #[arg(long)]
        today: Option<String>,
    },
    /// Stroke-count reading from a family and given name.
    Name {
        #[arg(long)]
        family_name: String,

        #[arg(long)]
        given_name: String,

        #[arg(long, default_value = "")]
        gender: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = uranai_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(args, &settings) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "fortune reading failed");
            Err(err)
        }
    }
}

fn run(args: Args, settings: &uranai_core::config::Settings) -> anyhow::Result<String> {
    let output = match args.command {
        Command::Weekly {
            birth_date,
            birth_time,
            prefecture,
            gender,
            today,
        } => {
            let request = FortuneForm {
                birth_date: Some(birth_date),
                birth_time,
                prefecture: Some(prefecture),
                gender: Some(gender),
            }
            .validate_and_into_request()?;

            let today = match today.as_deref() {
                Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("--today must be YYYY-MM-DD (got {s:?})"))?,
                None => settings.today(chrono::Utc::now())?,
            };

            let fortune = generate_weekly_fortune(&request, today);
            tracing::info!(birth_date = %request.birth_date, %today, "weekly reading");
            serde_json::to_string_pretty(&fortune)?
        }
        Command::Name {
            family_name,
            given_name,
            gender,
        } => {
            let request = NameFortuneForm {
                family_name: Some(family_name),
                given_name: Some(given_name),
                gender: Some(gender),
            }
            .validate_and_into_request()?;

            let result = generate_name_fortune(&request);
            tracing::info!(total_number = result.total_number, rating = %result.rating, "name reading");
            serde_json::to_string_pretty(&result)?
        }
    };

    Ok(output)
}

fn init_sentry(settings: &uranai_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
