use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hub_core::determinant::Determinant;
use hub_core::survey::{FilterState, YearSelection};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "Happiness Hub - national happiness surveys meet social-media sentiment", long_about = None)]
struct Cli {
    /// Emit machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the countries covered by the survey dataset
    Countries,
    /// List the selectable survey years (including the "all" sentinel)
    Years,
    /// Show survey records matching country/year filters
    Filter(FilterArgs),
    /// Show the happiness score for a single country and year
    Spotlight(FilterArgs),
    /// List the sentiment groups
    Groups,
    /// Show the sentiment breakdown for one group
    Breakdown {
        /// Group name, exactly as listed by `hub groups`
        group: String,
    },
    /// List the seed posts shipped with the dataset
    Posts,
    /// Classify the sentiment of a post with the external AI service
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct FilterArgs {
    /// Country to include; repeat for several, omit for all
    #[arg(long = "country")]
    countries: Vec<String>,

    /// Survey year, or "all"
    #[arg(long, default_value = "all", value_parser = parse_year)]
    year: YearSelection,

    /// Determinant key to display (e.g. gdp); repeat for several, omit for all
    #[arg(long = "determinant", value_parser = parse_determinant)]
    determinants: Vec<Determinant>,
}

impl FilterArgs {
    fn to_filter_state(&self) -> FilterState {
        FilterState {
            countries: self.countries.clone(),
            year: self.year,
            selected_determinants: if self.determinants.is_empty() {
                Determinant::all()
            } else {
                self.determinants.clone()
            },
        }
    }
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Post text to classify
    text: Option<String>,

    /// Use a seed post by id instead of free text (see `hub posts`)
    #[arg(long, conflicts_with = "text")]
    post: Option<String>,
}

fn parse_year(raw: &str) -> Result<YearSelection, String> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(YearSelection::All);
    }
    raw.parse::<i32>()
        .map(YearSelection::Year)
        .map_err(|_| format!("expected a year or \"all\", got '{raw}'"))
}

fn parse_determinant(raw: &str) -> Result<Determinant, String> {
    Determinant::from_key(raw).ok_or_else(|| {
        let keys: Vec<&str> = Determinant::all().iter().map(|d| d.info().key).collect();
        format!("unknown determinant '{raw}' (expected one of: {})", keys.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Countries => commands::survey::countries(cli.json),
        Commands::Years => commands::survey::years(cli.json),
        Commands::Filter(args) => commands::survey::filter(&args.to_filter_state(), cli.json),
        Commands::Spotlight(args) => commands::survey::spotlight(&args.to_filter_state(), cli.json),
        Commands::Groups => commands::sentiment::groups(cli.json),
        Commands::Breakdown { group } => commands::sentiment::breakdown(&group, cli.json),
        Commands::Posts => commands::analyze::posts(cli.json),
        Commands::Analyze(args) => {
            commands::analyze::run(args.text.as_deref(), args.post.as_deref(), cli.json).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("all").unwrap(), YearSelection::All);
        assert_eq!(parse_year("ALL").unwrap(), YearSelection::All);
        assert_eq!(parse_year("2025").unwrap(), YearSelection::Year(2025));
        assert!(parse_year("latest").is_err());
    }

    #[test]
    fn test_parse_determinant() {
        assert_eq!(parse_determinant("gdp").unwrap(), Determinant::Gdp);
        assert_eq!(
            parse_determinant("healthLifeExpectancy").unwrap(),
            Determinant::HealthLifeExpectancy
        );
        assert!(parse_determinant("happiness").is_err());
    }

    #[test]
    fn test_filter_args_default_to_all_determinants() {
        let args = FilterArgs {
            countries: vec![],
            year: YearSelection::All,
            determinants: vec![],
        };
        let filter = args.to_filter_state();
        assert_eq!(filter, FilterState::default());
    }
}
