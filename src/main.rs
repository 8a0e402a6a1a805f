use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use grid_interconnect_analyzer::{
    analysis::PanelSummary,
    build_panel, console, io,
    visualization::{print_country_block, print_panel_table, print_summary_table},
    AnalyzerConfig,
};

#[derive(Parser)]
#[command(
    name = "grid-analyzer",
    about = "Grid Interconnection Analyzer - per-country interconnectivity panel with upside indicators",
    version,
    author
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the source workbook (overrides the config file)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Worksheet name (overrides the config file)
    #[arg(short, long, global = true)]
    sheet: Option<String>,

    /// Interconnection target in percentage points (overrides the config file)
    #[arg(short, long, global = true)]
    target: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the panel and display it with derived indicators
    Analyze {
        /// Also show the detail block for one country
        #[arg(long)]
        country: Option<String>,
    },

    /// Interactive numbered menu over the country list
    Menu,

    /// Display panel-level aggregates only
    Summary,

    /// Write the derived panel to a file (format by extension: csv, json, xlsx)
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Start the web dashboard
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Config file (or defaults) with CLI overrides applied on top.
fn resolve_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_path(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(input) = &cli.input {
        config.source_path = input.clone();
    }
    if let Some(sheet) = &cli.sheet {
        config.sheet_name = sheet.clone();
    }
    if let Some(target) = cli.target {
        config.target_pct = target;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let panel = build_panel(&config)?;

    match cli.command {
        Commands::Analyze { country } => {
            println!(
                "\n{}",
                format!(
                    "Grid Interconnection Analysis: {}",
                    config.source_path.display()
                )
                .bold()
                .cyan()
            );
            println!(
                "  Loaded {} countries (target: {:.0}%)",
                panel.len(),
                panel.target_pct
            );

            print_panel_table(&panel);
            print_summary_table(&PanelSummary::from_panel(&panel));

            if let Some(name) = country {
                match panel.get(&name) {
                    Some(record) => {
                        println!("\n{}", name.bold());
                        print_country_block(record, panel.target_pct);
                    }
                    None => anyhow::bail!(
                        "Unknown country: {name}. Run the menu subcommand to list available countries"
                    ),
                }
            }
        }

        Commands::Menu => {
            let stdin = std::io::stdin();
            console::run_menu(&panel, stdin.lock(), std::io::stdout())?;
        }

        Commands::Summary => {
            println!("\n{}", "Quick Summary".bold().cyan());
            print_summary_table(&PanelSummary::from_panel(&panel));
        }

        Commands::Export { output, pretty } => {
            let ext = output
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_lowercase();

            match ext.as_str() {
                "csv" => io::write_csv(&panel, &output)?,
                "json" => io::write_json(&panel, &output, pretty)?,
                "xlsx" => io::write_excel(&panel, &output)?,
                _ => anyhow::bail!("Unsupported output format: .{ext}. Use .csv, .json, or .xlsx"),
            }

            println!(
                "{} Exported {} countries -> {}",
                "Success:".green().bold(),
                panel.len(),
                output.display()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(grid_interconnect_analyzer::web::start_server(panel, port))?;
        }
    }

    Ok(())
}
