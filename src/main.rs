use analytics::{JournalSummary, summarize};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use core_types::{SortKey, TradeRecord, TradeType, format_price};
use pipeline::{FilterCriteria, paginate, select_trades};
use rust_decimal::Decimal;
use store_client::{HttpTradeStore, TradeInput, TradeStore};
use tracing_subscriber::EnvFilter;

/// The main entry point for the Tradebook journal application.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load the configuration and connect the store client
    let config = match configuration::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    let store = HttpTradeStore::new(config.api_base_url());

    // Execute the appropriate command
    let result = match cli.command {
        Commands::History(args) => handle_history(args, config.display.trades_per_page, &store).await,
        Commands::Insights => handle_insights(&store).await,
        Commands::Export(args) => handle_export(args, &store).await,
        Commands::Add(args) => handle_add(args, &store).await,
        Commands::Delete(args) => handle_delete(args, &store).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A personal trade journal: log trades, review history, analyze performance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View the filtered, sorted, paginated trade history with live statistics.
    History(HistoryArgs),

    /// Key statistics over the whole journal.
    Insights,

    /// Export the filtered, sorted history as CSV.
    Export(ExportArgs),

    /// Log a new trade.
    Add(AddArgs),

    /// Delete a trade by id.
    Delete(DeleteArgs),
}

/// Filter and sort selection, shared by `history` and `export`.
#[derive(Args)]
struct SelectionArgs {
    /// Case-insensitive substring to match against the instrument symbol.
    #[arg(long)]
    instrument: Option<String>,

    /// Inclusive start of the date range (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Inclusive end of the date range (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Which win/loss class of trades to keep.
    #[arg(long, value_enum, default_value = "all")]
    trade_type: TradeType,

    /// Ordering of the result.
    #[arg(long, value_enum, default_value = "most-recent")]
    sort_by: SortKey,
}

impl SelectionArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            instrument: self.instrument.clone(),
            date_from: self.from,
            date_to: self.to,
            trade_type: self.trade_type,
        }
    }
}

#[derive(Args)]
struct HistoryArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Page of the history to display (clamped to the valid range).
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Args)]
struct ExportArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Path of the CSV file to write.
    #[arg(long, default_value = exporter::EXPORT_FILE_NAME)]
    output: std::path::PathBuf,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    instrument: String,

    #[arg(long)]
    entry_price: Option<Decimal>,

    #[arg(long)]
    exit_price: Option<Decimal>,

    /// Trade date (format: YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long)]
    profit_loss: Option<Decimal>,

    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Args)]
struct DeleteArgs {
    /// The record id assigned by the store.
    id: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Renders one page of the filtered, sorted history plus the live statistics
/// over the *full* filtered collection (never just the visible page).
async fn handle_history(
    args: HistoryArgs,
    trades_per_page: usize,
    store: &dyn TradeStore,
) -> anyhow::Result<()> {
    let records = store.list_trades().await?;
    let selected = select_trades(&records, &args.selection.criteria(), args.selection.sort_by);

    // The paginator itself does not clamp; that policy lives here.
    let page_count = paginate(&selected, trades_per_page, 1).page_count;
    let current = args.page.clamp(1, page_count);
    let page = paginate(&selected, trades_per_page, current);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Instrument",
        "Entry Price",
        "Exit Price",
        "Date",
        "Profit/Loss",
        "Notes",
    ]);
    for record in &page.items {
        table.add_row(trade_row(record));
    }
    println!("{table}");
    println!("Page {current}/{page_count}");

    println!("\nLive Statistics");
    print_summary(&summarize(&selected));

    Ok(())
}

/// Key statistics over the whole journal, unfiltered.
async fn handle_insights(store: &dyn TradeStore) -> anyhow::Result<()> {
    let records = store.list_trades().await?;

    println!("Key Statistics");
    print_summary(&summarize(&records));

    Ok(())
}

/// Writes the filtered+sorted collection (all pages) to a CSV file.
async fn handle_export(args: ExportArgs, store: &dyn TradeStore) -> anyhow::Result<()> {
    let records = store.list_trades().await?;
    let selected = select_trades(&records, &args.selection.criteria(), args.selection.sort_by);

    let csv = exporter::to_csv(&selected);
    std::fs::write(&args.output, csv)?;

    tracing::info!(path = %args.output.display(), rows = selected.len(), "wrote CSV export");
    println!("Exported {} trades to {}", selected.len(), args.output.display());

    Ok(())
}

async fn handle_add(args: AddArgs, store: &dyn TradeStore) -> anyhow::Result<()> {
    let input = TradeInput {
        instrument: args.instrument,
        entry_price: args.entry_price,
        exit_price: args.exit_price,
        trade_date: args.date,
        profit_loss: args.profit_loss,
        notes: args.notes,
    };
    let created = store.create_trade(&input).await?;

    println!(
        "Logged trade {} on {}",
        created.id.as_deref().unwrap_or("<no id>"),
        created.instrument
    );
    Ok(())
}

async fn handle_delete(args: DeleteArgs, store: &dyn TradeStore) -> anyhow::Result<()> {
    store.delete_trade(&args.id).await?;
    println!("Deleted trade {}", args.id);
    Ok(())
}

// ==============================================================================
// Rendering Helpers
// ==============================================================================

/// A record's not-available display marker.
const NOT_AVAILABLE: &str = "N/A";

fn trade_row(record: &TradeRecord) -> Vec<String> {
    let forex = record.is_forex_like();
    vec![
        record.instrument.clone(),
        price_display(record.entry_price, forex),
        price_display(record.exit_price, forex),
        record
            .trade_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        // Profit/loss always renders at two decimals, whatever the instrument.
        record
            .profit_loss
            .map(|pl| format_price(pl, false))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        record.notes.clone(),
    ]
}

fn price_display(price: Option<Decimal>, forex: bool) -> String {
    price
        .map(|value| format_price(value, forex))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn print_summary(summary: &JournalSummary) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec!["Total Trades".to_string(), summary.total_trades.to_string()]);
    table.add_row(vec![
        "Win Rate".to_string(),
        format!("{}%", summary.win_rate_pct),
    ]);
    table.add_row(vec![
        "Avg. P/L Per Trade".to_string(),
        summary.avg_profit_loss.to_string(),
    ]);
    table.add_row(vec![
        "Best Trade".to_string(),
        best_worst_display(summary.best_trade.as_ref(), true),
    ]);
    table.add_row(vec![
        "Worst Trade".to_string(),
        best_worst_display(summary.worst_trade.as_ref(), false),
    ]);
    println!("{table}");
}

/// "+100.00 (XAU/USD)" for the best trade, "-20.00 (NAS100)" for the worst;
/// "N/A" when no trade qualifies.
fn best_worst_display(trade: Option<&TradeRecord>, explicit_plus: bool) -> String {
    match trade.and_then(|t| t.profit_loss.map(|pl| (t, pl))) {
        Some((trade, pl)) => {
            let amount = format_price(pl, false);
            let prefix = if explicit_plus { "+" } else { "" };
            format!("{prefix}{amount} ({})", trade.instrument)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}
