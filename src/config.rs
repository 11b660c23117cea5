/// Default FalkorDB host
pub const DEFAULT_HOST: &str = "localhost";

/// Default FalkorDB (Redis) port
pub const DEFAULT_PORT: u16 = 6379;

/// Default target graph name
pub const DEFAULT_GRAPH_NAME: &str = "graphml_import";

/// Label assigned to nodes that carry neither a `label` nor a `type` attribute
pub const DEFAULT_NODE_LABEL: &str = "Node";

/// Relationship type assigned to edges that carry neither a `label` nor a `type` attribute
pub const DEFAULT_RELATIONSHIP_TYPE: &str = "RELATES_TO";
