mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stock_dashboard_core::models::chart::ChartKind;
use stock_dashboard_core::models::granularity::Granularity;
use stock_dashboard_core::models::settings::Settings;
use stock_dashboard_core::sources::file::FileSource;
use stock_dashboard_core::StockDashboard;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "stock-dashboard")]
#[command(about = "Filter, aggregate and summarize company stock price series")]
struct Args {
    /// JSON file with an array of companies
    file: PathBuf,

    /// Time bucket: minute, hour, date, month, year or decade
    #[arg(short, long, env = "STOCK_DASHBOARD_GRANULARITY")]
    granularity: Option<Granularity>,

    /// Inclusive lower bound in the picker format of the granularity
    #[arg(long)]
    start: Option<String>,

    /// Inclusive upper bound in the picker format of the granularity
    #[arg(long)]
    end: Option<String>,

    /// Keep only companies whose name contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Chart kind: line, bar, pie or scatter
    #[arg(short, long, env = "STOCK_DASHBOARD_CHART")]
    chart: Option<ChartKind>,

    /// Index of the company shown in single-series charts
    #[arg(long, default_value = "0")]
    company: usize,

    /// Print the render plan as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            default_granularity: self.granularity.unwrap_or(defaults.default_granularity),
            default_chart_kind: self.chart.unwrap_or(defaults.default_chart_kind),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let mut dashboard = StockDashboard::with_settings(args.settings());
    let source = FileSource::new(&args.file);
    let count = dashboard
        .load_from_source(&source)
        .await
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    info!(companies = count, file = %args.file.display(), "dashboard ready");

    if args.start.is_some() || args.end.is_some() {
        dashboard.set_range_start(args.start.clone());
        dashboard.set_range_end(args.end.clone());
        dashboard.apply_filters().context("invalid date range")?;
    }
    if let Some(search) = &args.search {
        dashboard.set_search(search.as_str());
    }
    if args.company > 0 {
        dashboard.select_company(args.company)?;
    }

    if args.json {
        println!("{}", dashboard.render_plan_json()?);
        return Ok(());
    }

    if !dashboard.has_matches()? {
        println!("No data matches the selected filters.");
        return Ok(());
    }

    let granularity = dashboard.state().applied.granularity;
    println!("{}", output::summary_table(&dashboard.summaries()?));
    for company in dashboard.chart_data()? {
        println!();
        println!("{} ({})", company.name, granularity.label());
        println!("{}", output::series_table(&company));
    }
    Ok(())
}

/// Initialize logging system. Logs go to stderr so `--json` output stays clean.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
