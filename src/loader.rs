use crate::error::{MigrateError, Result};
use crate::mapping::{apply_property_renames, MappingConfig};
use crate::models::{quote_identifier, quote_str, EdgeRecord, NodeRecord, Properties};
use falkordb::{AsyncGraph, FalkorClientBuilder, FalkorConnectionInfo};
use indicatif::ProgressBar;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Connection parameters for the target FalkorDB instance.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub graph_name: String,
}

impl LoaderConfig {
    fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn url(&self) -> String {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => {
                format!("falkor://{user}:{pass}@{}", self.addr())
            }
            (Some(user), None) => format!("falkor://{user}@{}", self.addr()),
            _ => format!("falkor://{}", self.addr()),
        }
    }
}

/// Outcome of the relationship pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipStats {
    /// Relationships the store actually created.
    pub created: u64,
    /// Edge records whose endpoint match yielded no pair (dangling
    /// references); these are skipped, not raised.
    pub skipped: u64,
}

/// Writes extracted records into a FalkorDB graph.
///
/// One loader drives one migration run: connect, optionally create indexes,
/// load nodes, load relationships, close. Writes are sequential and
/// fail-fast; nothing is retried and nothing already written is rolled
/// back. A closed loader cannot be reused.
pub struct FalkorLoader {
    config: LoaderConfig,
    graph: Option<AsyncGraph>,
    /// Echo map of loaded node identifiers. Values currently mirror the
    /// keys; the store is matched by `id` property value, so this exists
    /// only for statistics and future identifier remapping.
    node_map: HashMap<String, String>,
}

impl FalkorLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            graph: None,
            node_map: HashMap::new(),
        }
    }

    /// Establish the store session. Calling it again on a live loader is a
    /// no-op; a transport or auth failure surfaces as a connection error.
    pub async fn connect(&mut self) -> Result<()> {
        if self.graph.is_some() {
            return Ok(());
        }
        let connection_info: FalkorConnectionInfo =
            self.config
                .url()
                .try_into()
                .map_err(|source| MigrateError::Connection {
                    addr: self.config.addr(),
                    source,
                })?;
        let client = FalkorClientBuilder::new_async()
            .with_connection_info(connection_info)
            .build()
            .await
            .map_err(|source| MigrateError::Connection {
                addr: self.config.addr(),
                source,
            })?;
        self.graph = Some(client.select_graph(&self.config.graph_name));
        info!(
            graph = %self.config.graph_name,
            addr = %self.config.addr(),
            "Connected to FalkorDB"
        );
        Ok(())
    }

    /// Best-effort index creation on the `id` property of each label.
    ///
    /// Indexes only speed up the endpoint matches of the relationship pass;
    /// a failure (commonly "index already exists") is logged and the run
    /// proceeds.
    pub async fn create_node_indexes(&mut self, labels: &[String]) -> Result<()> {
        let graph = self.graph.as_mut().ok_or(MigrateError::NotConnected)?;
        for label in labels {
            let cypher = format!("CREATE INDEX ON :{}(id)", quote_identifier(label));
            match graph.query(&cypher).execute().await {
                Ok(_) => debug!(label = %label, "Created index on id"),
                Err(e) => warn!(label = %label, error = %e, "Index creation failed"),
            }
        }
        Ok(())
    }

    /// Create one node per record, in input order. The first write failure
    /// aborts the remaining load. Returns the number of nodes created.
    pub async fn load_nodes(
        &mut self,
        nodes: &[NodeRecord],
        mapping: &MappingConfig,
        progress: &ProgressBar,
    ) -> Result<u64> {
        let Self {
            graph, node_map, ..
        } = self;
        let graph = graph.as_mut().ok_or(MigrateError::NotConnected)?;

        for node in nodes {
            let label = mapping.node_label(&node.label);
            let mut properties = node.properties.clone();
            if let Some(renames) = mapping.node_property_renames(&node.label) {
                apply_property_renames(&mut properties, renames);
            }
            let cypher = node_create_query(label, &node.id, &properties);
            if let Err(source) = graph.query(&cypher).execute().await {
                error!(id = %node.id, label = %label, error = %source, "Failed to create node");
                return Err(MigrateError::Write {
                    entity: format!("node '{}'", node.id),
                    source,
                });
            }
            node_map.insert(node.id.clone(), node.id.clone());
            debug!(id = %node.id, label = %label, "Created node");
            progress.inc(1);
        }
        Ok(nodes.len() as u64)
    }

    /// Create one relationship per record, in input order, by matching both
    /// endpoints on their `id` property. A record whose endpoints don't
    /// both exist creates nothing and is counted as skipped; a store
    /// rejection aborts the remaining load.
    pub async fn load_relationships(
        &mut self,
        edges: &[EdgeRecord],
        mapping: &MappingConfig,
        progress: &ProgressBar,
    ) -> Result<RelationshipStats> {
        let graph = self.graph.as_mut().ok_or(MigrateError::NotConnected)?;
        let mut stats = RelationshipStats::default();

        for edge in edges {
            let rel_type = mapping.relationship_type(&edge.rel_type);
            let mut properties = edge.properties.clone();
            if let Some(renames) = mapping.relationship_property_renames(&edge.rel_type) {
                apply_property_renames(&mut properties, renames);
            }
            let cypher =
                relationship_create_query(rel_type, &edge.source_id, &edge.target_id, &properties);
            match graph.query(&cypher).execute().await {
                Ok(result) => {
                    let created = result.data.count() as u64;
                    if created == 0 {
                        debug!(
                            source = %edge.source_id,
                            target = %edge.target_id,
                            rel_type = %rel_type,
                            "Skipped relationship with dangling endpoint"
                        );
                        stats.skipped += 1;
                    } else {
                        stats.created += created;
                    }
                }
                Err(source) => {
                    error!(
                        source_id = %edge.source_id,
                        target_id = %edge.target_id,
                        rel_type = %rel_type,
                        error = %source,
                        "Failed to create relationship"
                    );
                    return Err(MigrateError::Write {
                        entity: format!(
                            "relationship {}-[{}]->{}",
                            edge.source_id, rel_type, edge.target_id
                        ),
                        source,
                    });
                }
            }
            progress.inc(1);
        }
        Ok(stats)
    }

    /// Number of node identifiers written during this run.
    pub fn loaded_node_count(&self) -> u64 {
        self.node_map.len() as u64
    }

    /// Release the store session. Safe to call more than once.
    pub fn close(&mut self) {
        if self.graph.take().is_some() {
            info!("Disconnected from FalkorDB");
        }
    }
}

/// Build the CREATE query for one node. The identifier is always stored as
/// an explicit string-valued `id` property ahead of the remaining
/// properties. Intentionally CREATE, not MERGE: re-running a migration
/// duplicates data rather than upserting.
fn node_create_query(label: &str, id: &str, properties: &Properties) -> String {
    let mut parts = Vec::with_capacity(properties.len() + 1);
    parts.push(format!("id: {}", quote_str(id)));
    for (key, value) in properties {
        // The identifier owns the id slot; a residual or renamed-in "id"
        // attribute would put a duplicate key in the map literal and leave
        // the edge-phase MATCH at the mercy of the store's last-write rule.
        if key == "id" {
            continue;
        }
        parts.push(format!("{}: {}", quote_identifier(key), value.to_cypher()));
    }
    format!(
        "CREATE (n:{} {{{}}})",
        quote_identifier(label),
        parts.join(", ")
    )
}

/// Build the MATCH + CREATE query for one relationship. The trailing
/// `RETURN 1` yields one row per endpoint pair matched, which is how the
/// caller detects a dangling reference (zero rows).
fn relationship_create_query(
    rel_type: &str,
    source_id: &str,
    target_id: &str,
    properties: &Properties,
) -> String {
    let props = if properties.is_empty() {
        String::new()
    } else {
        let parts: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}: {}", quote_identifier(key), value.to_cypher()))
            .collect();
        format!(" {{{}}}", parts.join(", "))
    };
    format!(
        "MATCH (s {{id: {}}}), (t {{id: {}}}) CREATE (s)-[:{}{}]->(t) RETURN 1",
        quote_str(source_id),
        quote_str(target_id),
        quote_identifier(rel_type),
        props
    )
}
