use anyhow::{Context, Result};
use clap::Parser;
use graphml2falkor::config;
use graphml2falkor::loader::LoaderConfig;
use graphml2falkor::mapping::MappingConfig;
use graphml2falkor::migrate;
use graphml2falkor::parser::ParsedGraph;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "graphml2falkor")]
#[command(about = "Migrate GraphML files into FalkorDB property graphs")]
struct Cli {
    /// Path to the GraphML file
    graphml_file: PathBuf,

    /// Path to a migration mapping configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// FalkorDB host
    #[arg(long, default_value = config::DEFAULT_HOST)]
    host: String,

    /// FalkorDB port
    #[arg(long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Redis username
    #[arg(long)]
    username: Option<String>,

    /// Redis password
    #[arg(long)]
    password: Option<String>,

    /// Target FalkorDB graph name
    #[arg(long, default_value = config::DEFAULT_GRAPH_NAME)]
    graph_name: String,

    /// Only analyze topology, without loading to FalkorDB
    #[arg(long, conflicts_with_all = ["generate_config", "generate_topology"])]
    analyze_only: bool,

    /// Write a mapping configuration template to FILE and exit
    #[arg(long, value_name = "FILE", conflicts_with = "generate_topology")]
    generate_config: Option<PathBuf>,

    /// Write a topology report to FILE and exit
    #[arg(long, value_name = "FILE")]
    generate_topology: Option<PathBuf>,

    /// Skip index creation before loading
    #[arg(long)]
    no_indexes: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let graph = ParsedGraph::parse_file(&cli.graphml_file)
        .with_context(|| format!("Failed to parse {}", cli.graphml_file.display()))?;

    let topology = graph.topology();
    println!();
    println!("GraphML analysis:");
    println!("  Nodes:              {}", topology.node_count);
    println!("  Relationships:      {}", topology.edge_count);
    println!("  Node labels:        {}", topology.node_labels.join(", "));
    println!(
        "  Relationship types: {}",
        topology.relationship_types.join(", ")
    );

    if let Some(path) = &cli.generate_topology {
        graph.save_topology(path)?;
        println!();
        println!("Topology report saved to {}", path.display());
        return Ok(());
    }

    if let Some(path) = &cli.generate_config {
        graph.save_sample_config(path)?;
        println!();
        println!("Configuration template saved to {}", path.display());
        return Ok(());
    }

    if cli.analyze_only {
        println!();
        println!("Analyze-only mode, exiting without loading to FalkorDB.");
        return Ok(());
    }

    let mapping = match &cli.config {
        Some(path) => MappingConfig::load(path)?,
        None => MappingConfig::default(),
    };

    let loader_config = LoaderConfig {
        host: cli.host.clone(),
        port: cli.port,
        username: cli.username.clone(),
        password: cli.password.clone(),
        graph_name: cli.graph_name.clone(),
    };

    println!();
    println!("==> Connecting to FalkorDB at {}:{} ...", cli.host, cli.port);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("graphml2falkor-worker")
        .enable_io()
        .enable_time()
        .build()?;
    let report = rt.block_on(migrate::run_migration(
        &graph,
        &mapping,
        loader_config,
        !cli.no_indexes,
    ))?;

    println!();
    println!("Migration completed successfully!");
    println!("  Nodes loaded:           {}", report.nodes_loaded);
    println!("  Relationships created:  {}", report.relationships_created);
    println!("  Relationships skipped:  {}", report.relationships_skipped);
    println!("  Graph:                  {}", report.graph_name);
    println!("  Total time:             {:.2}s", report.elapsed_secs);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(cli) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
