use chrono::Local;
use dotenvy::dotenv;
use spendlog::config;
use spendlog::core::report::{self, BudgetLevel};
use spendlog::core::store::Store;
use spendlog::db;
use spendlog::errors::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect and make sure the schema exists
    let database = config::database::create_connection().await?;
    config::database::create_tables(&database).await?;
    info!("Database initialized at {}", config::database::get_database_url());

    // 4. Seed the settings document on first run
    let initial = config::defaults::load_initial_settings()?;
    if db::seed_initial_settings(&database, &initial).await? {
        info!("Seeded initial settings from configuration");
    }

    // 5. Load the session store and show the dashboard summary
    let store = Store::initialize(database).await?;
    let settings = store.settings();
    let today = Local::now().date_naive();
    let summary = report::summarize(&store.transactions(), &settings, today);

    info!(
        "{} transactions, {} spent in total",
        summary.count,
        report::format_currency(summary.total_spend, &settings.currency)
    );
    info!(
        "Top category: {} | last 7 days: {}",
        summary.top_category,
        report::format_currency(summary.trailing_week_spend, &settings.currency)
    );
    match summary.budget.level {
        BudgetLevel::Exceeded => warn!(
            "Budget exceeded: {:.0}% of {}",
            summary.budget.percent,
            report::format_currency(settings.budget_cap, &settings.currency)
        ),
        BudgetLevel::Warning => warn!(
            "Approaching budget cap: {:.0}% used, {} remaining",
            summary.budget.percent,
            report::format_currency(summary.budget.remaining, &settings.currency)
        ),
        BudgetLevel::Normal => info!(
            "Budget: {:.0}% used, {} remaining",
            summary.budget.percent,
            report::format_currency(summary.budget.remaining, &settings.currency)
        ),
    }

    Ok(())
}
