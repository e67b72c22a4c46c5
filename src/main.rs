use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inventory_builder::{
    ApiClient, Config, DEFAULT_API_BASE, InteractiveApp, Style, compose_request,
    export_inventory, filter_roles,
    inventory::DEFAULT_HOST,
    logging::{LogOptions, init_tracing},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "inventory-builder",
    version,
    about = "Generate Ansible inventories interactively from invokable roles",
    long_about = None
)]
struct Cli {
    /// Base URL of the inventory API
    #[arg(long, env = "API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Target host written into the inventory
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Inventory layout
    #[arg(long, value_enum, default_value_t = Style::Group)]
    style: Style,

    /// Roles to leave out, comma-separated (e.g. web-app-x,svc-db-y)
    #[arg(long, default_value = "")]
    ignore: String,

    /// Directory generated inventories are saved to (default: your download directory)
    #[arg(short, long, env = "INVENTORY_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Print the invokable roles, optionally filtered by QUERY, and exit
    #[arg(short, long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    list: Option<String>,

    /// Generate the inventory once, save it and exit
    #[arg(short, long, conflicts_with = "list")]
    generate: bool,

    /// Check that the API is reachable and exit
    #[arg(long, conflicts_with_all = ["list", "generate"])]
    health: bool,

    /// Output format for --list, --generate and --health
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file
    #[arg(long, env = "INVENTORY_BUILDER_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        self.list.is_none() && !self.generate && !self.health
    }

    fn config(&self) -> Config {
        let mut config = Config {
            api_base: self.api_base.clone(),
            host: self.host.clone(),
            style: self.style,
            ignore: self.ignore.clone(),
            ..Config::default()
        };
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "inventory-builder",
            &mut io::stdout(),
        );
        return Ok(());
    }

    init_tracing(&LogOptions {
        verbose: cli.verbose,
        json: cli.log_json,
        file: cli.log_file.clone(),
        // The TUI owns the terminal
        quiet: cli.is_interactive(),
    })?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.config();
    let client = config.api_client()?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    tracing::debug!(api_base = %client.base_url(), output_dir = %config.output_dir.display(), "starting");

    if cli.health {
        return runtime.block_on(run_health(&client, cli.format));
    }

    if let Some(query) = &cli.list {
        return runtime.block_on(run_list(&client, query, cli.format));
    }

    if cli.generate {
        return runtime.block_on(run_generate(&client, &config, cli.format));
    }

    let mut app = InteractiveApp::new(&config, client, runtime.handle().clone());
    app.run()
}

async fn run_health(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("API at {} is not reachable", client.base_url()))?;

    match format {
        OutputFormat::Text => {
            let status = if health.is_ok() {
                health.status.green()
            } else {
                health.status.red()
            };
            println!("{}: {status}", client.base_url());
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "api_base": client.base_url(),
            "status": health.status,
        }))?,
    }

    if !health.is_ok() {
        anyhow::bail!("API reported status '{}'", health.status);
    }
    Ok(())
}

async fn run_list(client: &ApiClient, query: &str, format: OutputFormat) -> Result<()> {
    let roles = client
        .list_roles(true)
        .await
        .context("Failed to load roles")?;
    let filtered = filter_roles(&roles.items, query);

    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for role in &filtered {
                writeln!(handle, "{role}")?;
            }
            eprintln!(
                "{}",
                format!("({} of {} roles)", filtered.len(), roles.items.len()).dimmed()
            );
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "query": query,
            "total_count": roles.items.len(),
            "items": filtered,
        }))?,
    }
    Ok(())
}

async fn run_generate(client: &ApiClient, config: &Config, format: OutputFormat) -> Result<()> {
    let request = compose_request(&config.host, config.style, &config.ignore);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!(
        "Generating {} inventory for {}",
        request.style, request.host
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.generate_inventory(&request).await;
    spinner.finish_and_clear();
    let result = result.context("Failed to generate inventory")?;

    let path = export_inventory(&config.output_dir, &result)?;

    match format {
        OutputFormat::Text => {
            println!("{} {}", "✓ Saved".green(), path.display());
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "filename": result.filename,
            "path": path,
            "bytes": result.content.len(),
        }))?,
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(&mut handle)?;
    Ok(())
}
