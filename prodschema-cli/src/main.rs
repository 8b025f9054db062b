mod explain;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use prodschema_core::{
    run_transform, write_transform_artifacts, FsPageSource, FsWritePort, TransformSettings,
};
use prodschema_domain::Activation;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "prodschema",
    version,
    about = "Patches a CMS page's JSON-LD graph into Product schema."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transform one page document and write graph/report artifacts.
    Transform(TransformArgs),
    /// Explain what a patch rule does and which page inputs feed it.
    Explain(ExplainArgs),
    /// List all patch rules in execution order.
    ListRules(ListRulesArgs),
}

#[derive(Debug, Parser)]
struct TransformArgs {
    /// Page document to transform (default: page.json).
    #[arg(long, default_value = "page.json")]
    page: Utf8PathBuf,

    /// Output directory for artifacts (default: artifacts/prodschema).
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Force development output (pretty-printed artifacts). The page's own
    /// debug field turns this on too.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Override the page's activation field.
    #[arg(long, value_enum)]
    activate: Option<ActivateOverride>,

    /// Print the patched graph JSON to stdout as well.
    #[arg(long, default_value_t = false)]
    print_graph: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ActivateOverride {
    On,
    Off,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Rule key or rule id to explain (e.g., "product-type", "breadcrumb-prune").
    rule_key: String,
}

#[derive(Debug, Parser)]
struct ListRulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise --debug raises the default level.
    let default_level = match &cli.cmd {
        Command::Transform(args) if args.debug => "debug",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.cmd {
        Command::Transform(args) => cmd_transform(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListRules(args) => cmd_list_rules(args),
    }
}

fn cmd_transform(args: TransformArgs) -> anyhow::Result<()> {
    let out_dir = args
        .out_dir
        .unwrap_or_else(|| Utf8PathBuf::from("artifacts/prodschema"));

    let settings = TransformSettings {
        page_path: args.page,
        out_dir,
        debug: args.debug,
        activation: match args.activate {
            Some(ActivateOverride::On) => Activation::ForceOn,
            Some(ActivateOverride::Off) => Activation::ForceOff,
            None => Activation::FromPage,
        },
    };

    let pages = FsPageSource::new(settings.page_path.clone());
    let outcome = run_transform(&settings, &pages)?;

    write_transform_artifacts(&outcome, &settings.out_dir, &FsWritePort)?;

    print!("{}", outcome.summary_md);

    if args.print_graph {
        println!("{}", serde_json::to_string_pretty(&outcome.graph)?);
    }

    info!("wrote transform artifacts to {}", settings.out_dir);
    Ok(())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let Some(entry) = explain::find(&args.rule_key) else {
        let available: Vec<&str> = explain::RULE_REGISTRY.iter().map(|e| e.key).collect();
        anyhow::bail!(
            "Unknown rule key: '{}'\n\nAvailable rules: {}",
            args.rule_key,
            available.join(", ")
        );
    };

    print!("{}", explain::render(entry));
    Ok(())
}

fn cmd_list_rules(args: ListRulesArgs) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("Patch rules (execution order):\n");
            println!("  {:<20} {:<36} TITLE", "KEY", "RULE ID");
            println!("  {:<20} {:<36} -----", "---", "-------");
            for entry in explain::RULE_REGISTRY {
                println!("  {:<20} {:<36} {}", entry.key, entry.rule_id, entry.title);
            }
            println!();
            println!("Use 'prodschema explain <key>' for details.");
        }
        OutputFormat::Json => {
            let rules: Vec<_> = explain::RULE_REGISTRY
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "key": e.key,
                        "rule_id": e.rule_id,
                        "title": e.title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }
    Ok(())
}
