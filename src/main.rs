use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use footwear_erp_dashboard::{
    config,
    dashboard::{Dashboard, LoadOutcome},
    errors::ClientError,
    models::PoAttachment,
    render::or_na,
    surface::Page,
};

#[derive(Parser)]
#[command(
    name = "footwear-dashboard",
    about = "FootwearERP dashboard client: render pages and create orders against a live API",
    version
)]
struct Cli {
    #[arg(long, global = true, help = "Override the configured API base URL")]
    base_url: Option<String>,
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Print page data as pretty JSON instead of HTML"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate to a page and print it
    Show(ShowArgs),
    /// Submit the new-order form
    CreateOrder(CreateOrderArgs),
}

#[derive(Args)]
struct ShowArgs {
    #[arg(value_parser = parse_page, help = "dashboard, orders, documents, quality or production")]
    page: Page,
    #[arg(long, help = "Search term applied to the orders or documents table")]
    search: Option<String>,
    #[arg(
        long = "filter",
        value_name = "CONTROL=VALUE",
        help = "Select filter, e.g. stage-filter=cutting (repeatable)"
    )]
    filters: Vec<String>,
}

#[derive(Args)]
struct CreateOrderArgs {
    #[arg(long)]
    customer_id: String,
    #[arg(long)]
    customer_name: String,
    #[arg(long)]
    style: String,
    #[arg(long)]
    quantity: u32,
    #[arg(long)]
    order_amount: Option<Decimal>,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    due_date: Option<NaiveDate>,
    #[arg(long, default_value = "normal")]
    priority: String,
    #[arg(long)]
    requirements: Option<String>,
    #[arg(long, help = "Purchase-order file to attach")]
    po_file: Option<PathBuf>,
}

fn parse_page(raw: &str) -> Result<Page, ClientError> {
    Page::parse(raw)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url.clone() {
        cfg.api_base_url = base_url;
    }
    config::init_tracing(cfg.log_level(), cfg.log_json);

    let dashboard = Dashboard::new(&cfg).context("failed to build API client")?;
    let result = match cli.command {
        Commands::Show(args) => handle_show(&dashboard, args, cli.json).await,
        Commands::CreateOrder(args) => handle_create_order(&dashboard, args, cli.json).await,
    };

    report_toasts(&dashboard);
    result
}

async fn handle_show(dashboard: &Dashboard, args: ShowArgs, json: bool) -> Result<()> {
    let outcome = dashboard.navigate_to_page(args.page).await;
    debug!(page = %args.page, outcome = %outcome, "page loaded");

    if let Some(term) = args.search.as_deref() {
        let input = match args.page {
            Page::Documents => "search-documents",
            _ => "search-orders",
        };
        dashboard.search_now(input, term);
    }
    for pair in &args.filters {
        let (control, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("filter '{}' must look like CONTROL=VALUE", pair))?;
        dashboard.filter(control, value)?;
    }

    if json {
        let snapshot = dashboard.with_state(|state| state.page_snapshot(args.page));
        print_json(&snapshot)?;
    } else {
        println!("{}", dashboard.render_page(args.page));
    }

    if outcome == LoadOutcome::Unchanged {
        return Err(anyhow!("no data could be loaded for the {} page", args.page));
    }
    Ok(())
}

async fn handle_create_order(
    dashboard: &Dashboard,
    args: CreateOrderArgs,
    json: bool,
) -> Result<()> {
    let po_file = match &args.po_file {
        Some(path) => Some(
            PoAttachment::from_path(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };

    dashboard.open_new_order_modal();
    dashboard.update_form(|form| {
        form.customer_id = args.customer_id;
        form.customer_name = args.customer_name;
        form.style = args.style;
        form.quantity = args.quantity;
        form.order_amount = args.order_amount;
        form.due_date = args.due_date;
        form.priority = args.priority;
        form.customer_requirements = args.requirements;
        form.po_file = po_file;
    });

    let order = dashboard
        .submit_new_order()
        .await
        .context("failed to create order")?;

    match (order, json) {
        (Some(order), true) => print_json(&order)?,
        (Some(order), false) => println!(
            "Created order {} ({})",
            or_na(order.order_number.as_deref()),
            order.id
        ),
        (None, _) => println!("Order created"),
    }
    Ok(())
}

fn report_toasts(dashboard: &Dashboard) {
    for toast in dashboard.notifier().history() {
        eprintln!("[{}] {}", toast.kind, toast.message);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
