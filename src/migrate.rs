use crate::error::Result;
use crate::loader::{FalkorLoader, LoaderConfig};
use crate::mapping::MappingConfig;
use crate::parser::ParsedGraph;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

/// Summary of one completed migration run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub nodes_loaded: u64,
    pub relationships_created: u64,
    pub relationships_skipped: u64,
    pub graph_name: String,
    pub elapsed_secs: f64,
}

/// Run the load pipeline against FalkorDB: connect, create indexes (unless
/// disabled), load nodes, then load relationships.
///
/// Strictly sequential; relationships are never attempted before every node
/// record has been written. Fatal errors bubble up unmodified, leaving any
/// already-written data in place.
pub async fn run_migration(
    graph: &ParsedGraph,
    mapping: &MappingConfig,
    loader_config: LoaderConfig,
    create_indexes: bool,
) -> Result<MigrationReport> {
    let start = Instant::now();
    let graph_name = loader_config.graph_name.clone();
    let mut loader = FalkorLoader::new(loader_config);
    loader.connect().await?;

    if create_indexes {
        let labels = graph.topology().node_labels;
        let pb = make_spinner(format!("Creating indexes for {} labels ...", labels.len()));
        loader.create_node_indexes(&labels).await?;
        pb.finish_with_message("Indexes requested.");
    } else {
        info!("Index creation skipped");
    }

    println!();
    println!("==> Loading {} nodes ...", graph.nodes().len());
    let pb_nodes = make_progress_bar(graph.nodes().len() as u64, "Nodes");
    let nodes_loaded = loader.load_nodes(graph.nodes(), mapping, &pb_nodes).await?;
    pb_nodes.finish_with_message(format!("{nodes_loaded} nodes loaded"));

    println!();
    println!("==> Loading {} relationships ...", graph.edges().len());
    let pb_edges = make_progress_bar(graph.edges().len() as u64, "Edges");
    let rel_stats = loader
        .load_relationships(graph.edges(), mapping, &pb_edges)
        .await?;
    pb_edges.finish_with_message(format!(
        "{} relationships created, {} skipped",
        rel_stats.created, rel_stats.skipped
    ));

    loader.close();

    let report = MigrationReport {
        nodes_loaded,
        relationships_created: rel_stats.created,
        relationships_skipped: rel_stats.skipped,
        graph_name,
        elapsed_secs: start.elapsed().as_secs_f64(),
    };
    info!(
        nodes = report.nodes_loaded,
        relationships = report.relationships_created,
        skipped = report.relationships_skipped,
        "Migration completed"
    );
    Ok(report)
}

fn make_spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(msg);
    pb
}

fn make_progress_bar(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "    {{spinner:.cyan}} {label:<6} [{{bar:30.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
            ))
            .unwrap()
            .progress_chars("=> "),
    );
    pb
}
