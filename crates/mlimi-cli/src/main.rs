mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mlimi",
    version,
    about = "Planting advice, weather narratives and crop/plant reference lookups"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advise on planting a crop in a district under the seasonal forecast
    Advise {
        /// Crop common name (e.g. "maize")
        #[arg(long)]
        crop: String,

        /// District name (e.g. "Zomba")
        #[arg(long)]
        district: String,

        /// Assess as of this date (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Directory of {DISTRICT}.txt seasonal forecasts
        #[arg(long, env = "MLIMI_FORECAST_DIR", default_value = "metmalawi_forecasts")]
        forecasts: PathBuf,

        /// Crop reference table (CSV or XLSX)
        #[arg(long, env = "MLIMI_CROP_TABLE", default_value = "data/ecocrop_utf8.csv")]
        crops: PathBuf,

        /// Custom forecast signal rules (default: built-in "forecast" preset)
        #[arg(long, value_name = "FILE")]
        forecast_rules: Option<PathBuf>,

        /// Custom crop signal rules (default: built-in "crop" preset)
        #[arg(long, value_name = "FILE")]
        crop_rules: Option<PathBuf>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Narrate one day of a cached weekly forecast
    Daily {
        /// Path to a week JSON file ({"district", "data": [{"date", "rows"}]})
        input_file: PathBuf,

        /// Zero-based index of the day to narrate
        #[arg(long, default_value_t = 0)]
        day: usize,
    },
    /// Narrate a cached weekly forecast
    Weekly {
        /// Path to a week JSON file
        input_file: PathBuf,

        /// Drop days before today (or --date)
        #[arg(long)]
        from_today: bool,

        /// Reference date for --from-today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
    /// Describe a crop from the crop reference table
    Crop {
        /// Crop common name
        name: String,

        /// Crop reference table (CSV or XLSX)
        #[arg(long, env = "MLIMI_CROP_TABLE", default_value = "data/ecocrop_utf8.csv")]
        crops: PathBuf,
    },
    /// Search the plant reference table (JSON output)
    Plants {
        /// Plant name or illness term
        query: String,

        /// Search mode: plant (default) or illness
        #[arg(short, long, default_value = "plant")]
        mode: String,

        /// Plant reference table (CSV or XLSX)
        #[arg(
            long,
            env = "MLIMI_PLANT_TABLE",
            default_value = "data/pfaf_plants_merged_clean.csv"
        )]
        plants: PathBuf,
    },
    /// List crops suited to a soil, grouped by crop group
    Soil {
        #[arg(long)]
        fertility: String,

        #[arg(long)]
        drainage: String,

        #[arg(long)]
        texture: String,

        /// Crop group list (all-uppercase lines start a group)
        #[arg(long, value_name = "FILE", default_value = "data/groups.txt")]
        groups: PathBuf,

        /// Crop reference table (CSV or XLSX)
        #[arg(long, env = "MLIMI_CROP_TABLE", default_value = "data/ecocrop_utf8.csv")]
        crops: PathBuf,
    },
    /// Manage and inspect signal rule tables
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List built-in rule tables
    List,
    /// Explain a rule table in plain language
    Explain {
        /// Preset name ("forecast" or "crop")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mlimi=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Advise {
            crop,
            district,
            date,
            forecasts,
            crops,
            forecast_rules,
            crop_rules,
            output,
        } => commands::advise::run(commands::advise::AdviseArgs {
            crop,
            district,
            date,
            forecasts,
            crops,
            forecast_rules,
            crop_rules,
            output,
        }),
        Commands::Daily { input_file, day } => commands::weather::daily(&input_file, day),
        Commands::Weekly {
            input_file,
            from_today,
            date,
        } => commands::weather::weekly(&input_file, from_today, date),
        Commands::Crop { name, crops } => commands::reference::crop(&name, &crops),
        Commands::Plants {
            query,
            mode,
            plants,
        } => commands::reference::plants(&query, &mode, &plants),
        Commands::Soil {
            fertility,
            drainage,
            texture,
            groups,
            crops,
        } => commands::reference::soil(&fertility, &drainage, &texture, &groups, &crops),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
