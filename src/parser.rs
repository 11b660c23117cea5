use crate::config::{DEFAULT_NODE_LABEL, DEFAULT_RELATIONSHIP_TYPE};
use crate::error::{MigrateError, Result};
use crate::mapping::{LabelMapping, MappingConfig, TypeMapping};
use crate::models::{EdgeRecord, GraphTopology, NodeRecord, Properties, PropertyValue};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Which elements a `<key>` declaration applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyDomain {
    Node,
    Edge,
    All,
    /// Graph- or document-level keys: declared (so their `<data>` resolves)
    /// but never contributing attributes or defaults to records.
    Other,
}

impl KeyDomain {
    fn applies_to_node(self) -> bool {
        matches!(self, KeyDomain::Node | KeyDomain::All)
    }

    fn applies_to_edge(self) -> bool {
        matches!(self, KeyDomain::Edge | KeyDomain::All)
    }
}

/// Declared `attr.type` of a GraphML key. `long` folds into `Int`,
/// `double` into `Float`; a missing declaration means `String`.
#[derive(Debug, Clone, Copy)]
enum ValueType {
    String,
    Bool,
    Int,
    Float,
}

impl ValueType {
    fn from_decl(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ValueType::String),
            "boolean" => Ok(ValueType::Bool),
            "int" | "long" => Ok(ValueType::Int),
            "float" | "double" => Ok(ValueType::Float),
            other => Err(MigrateError::Parse(format!(
                "unsupported attr.type '{other}' in key declaration"
            ))),
        }
    }

    fn parse_value(self, text: &str) -> Result<PropertyValue> {
        match self {
            ValueType::String => Ok(PropertyValue::String(text.to_string())),
            ValueType::Bool => match text.trim() {
                "true" | "1" => Ok(PropertyValue::Bool(true)),
                "false" | "0" => Ok(PropertyValue::Bool(false)),
                other => Err(MigrateError::Parse(format!(
                    "'{other}' is not a boolean value"
                ))),
            },
            ValueType::Int => text
                .trim()
                .parse::<i64>()
                .map(PropertyValue::Int)
                .map_err(|_| MigrateError::Parse(format!("'{text}' is not an integer value"))),
            ValueType::Float => match text.trim().parse::<f64>() {
                // "inf"/"NaN" parse as f64 but have no Cypher literal form.
                Ok(f) if f.is_finite() => Ok(PropertyValue::Float(f)),
                _ => Err(MigrateError::Parse(format!(
                    "'{text}' is not a finite float value"
                ))),
            },
        }
    }
}

#[derive(Debug, Clone)]
struct KeyDecl {
    name: String,
    ty: ValueType,
    domain: KeyDomain,
    default: Option<PropertyValue>,
}

/// The element currently collecting `<data>` children.
enum Pending {
    Node { id: String },
    Edge { source: String, target: String },
}

/// A GraphML file normalized into one record per node and one per edge.
///
/// Parsing streams the XML once (`quick-xml`), resolving `<key>`
/// declarations to attribute names and types and applying declared
/// defaults. Parallel edges each yield their own [`EdgeRecord`]; edge `id`
/// attributes are not surfaced. Referential integrity of edge endpoints is
/// deliberately not checked here — the store's match semantics enforce it
/// at load time.
pub struct ParsedGraph {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

impl ParsedGraph {
    /// Parse a GraphML file from disk.
    pub fn parse_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| MigrateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            nodes = parsed.nodes.len(),
            edges = parsed.edges.len(),
            "Parsed GraphML file"
        );
        Ok(parsed)
    }

    /// Parse GraphML from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        GraphmlExtractor::new(reader).run()
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Recompute the topology summary from the current records.
    pub fn topology(&self) -> GraphTopology {
        let labels: BTreeSet<&str> = self.nodes.iter().map(|n| n.label.as_str()).collect();
        let types: BTreeSet<&str> = self.edges.iter().map(|e| e.rel_type.as_str()).collect();
        GraphTopology {
            node_labels: labels.into_iter().map(String::from).collect(),
            relationship_types: types.into_iter().map(String::from).collect(),
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
        }
    }

    /// Build an identity mapping-config skeleton for operator customization:
    /// every observed label and relationship type maps to itself with an
    /// empty rename table.
    pub fn sample_config(&self) -> MappingConfig {
        let topology = self.topology();
        let mut config = MappingConfig::default();
        for label in topology.node_labels {
            config.node_labels.insert(
                label.clone(),
                LabelMapping {
                    target_label: Some(label),
                    property_mappings: Default::default(),
                },
            );
        }
        for rel_type in topology.relationship_types {
            config.relationship_types.insert(
                rel_type.clone(),
                TypeMapping {
                    target_type: Some(rel_type),
                    property_mappings: Default::default(),
                },
            );
        }
        config
    }

    /// Write the topology summary as pretty-printed JSON.
    pub fn save_topology(&self, path: &Path) -> Result<()> {
        write_json(path, &self.topology())
    }

    /// Write the identity mapping-config template as pretty-printed JSON.
    pub fn save_sample_config(&self, path: &Path) -> Result<()> {
        write_json(path, &self.sample_config())
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|source| MigrateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), value).map_err(|source| {
        MigrateError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::other(source),
        }
    })
}

struct GraphmlExtractor<R: BufRead> {
    reader: Reader<R>,
    keys: HashMap<String, KeyDecl>,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    seen_node_ids: HashSet<String>,
    // Parsing state
    pending: Option<(Pending, Properties)>,
    current_key: Option<(String, KeyDecl)>,
    current_data: Option<(String, String)>,
    in_default: Option<String>,
    in_graph: bool,
}

impl<R: BufRead> GraphmlExtractor<R> {
    fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.trim_text(true);
        Self {
            reader,
            keys: HashMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            seen_node_ids: HashSet::new(),
            pending: None,
            current_key: None,
            current_data: None,
            in_default: None,
            in_graph: false,
        }
    }

    fn err(&self, msg: impl std::fmt::Display) -> MigrateError {
        MigrateError::Parse(format!(
            "{msg} (at byte {})",
            self.reader.buffer_position()
        ))
    }

    fn run(mut self) -> Result<ParsedGraph> {
        let mut buf = Vec::new();
        let mut skip_buf = Vec::new();
        loop {
            let position = self.reader.buffer_position();
            let event = self.reader.read_event_into(&mut buf).map_err(|e| {
                MigrateError::Parse(format!("malformed XML at byte {position}: {e}"))
            })?;
            match event {
                Event::Start(e) => self.handle_start(&e, false, &mut skip_buf)?,
                Event::Empty(e) => self.handle_start(&e, true, &mut skip_buf)?,
                Event::End(e) => {
                    let name = e.local_name();
                    self.handle_end(name.as_ref())?;
                }
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| self.err(format!("bad character data: {e}")))?;
                    self.handle_text(&text);
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c).into_owned();
                    self.handle_text(&text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        if self.pending.is_some() {
            return Err(MigrateError::Parse(
                "unexpected end of file inside a node or edge element".to_string(),
            ));
        }
        Ok(ParsedGraph {
            nodes: self.nodes,
            edges: self.edges,
        })
    }

    fn handle_start(&mut self, e: &BytesStart, empty: bool, skip_buf: &mut Vec<u8>) -> Result<()> {
        match e.local_name().as_ref() {
            b"key" => {
                let decl = self.parse_key_decl(e)?;
                if empty {
                    self.keys.insert(decl.0, decl.1);
                } else {
                    self.current_key = Some(decl);
                }
            }
            b"default" => {
                if self.current_key.is_some() {
                    self.in_default = Some(String::new());
                    if empty {
                        self.finish_default()?;
                    }
                }
            }
            b"graph" => {
                if self.pending.is_some() {
                    return Err(self.err("nested graphs are not supported"));
                }
                self.in_graph = true;
            }
            b"node" => {
                if !self.in_graph {
                    return Err(self.err("<node> outside of a <graph> element"));
                }
                let id = self
                    .attr(e, b"id")?
                    .ok_or_else(|| self.err("<node> is missing an id attribute"))?;
                if !self.seen_node_ids.insert(id.clone()) {
                    return Err(self.err(format!("duplicate node id '{id}'")));
                }
                self.pending = Some((Pending::Node { id }, Properties::new()));
                if empty {
                    self.finish_element()?;
                }
            }
            b"edge" => {
                if !self.in_graph {
                    return Err(self.err("<edge> outside of a <graph> element"));
                }
                let source = self
                    .attr(e, b"source")?
                    .ok_or_else(|| self.err("<edge> is missing a source attribute"))?;
                let target = self
                    .attr(e, b"target")?
                    .ok_or_else(|| self.err("<edge> is missing a target attribute"))?;
                // An edge id, if present, is discarded: only source, target,
                // type, and leftover attributes are surfaced.
                self.pending = Some((Pending::Edge { source, target }, Properties::new()));
                if empty {
                    self.finish_element()?;
                }
            }
            b"data" => {
                let key_id = self
                    .attr(e, b"key")?
                    .ok_or_else(|| self.err("<data> is missing a key attribute"))?;
                if self.pending.is_none() {
                    // Graph-level data carries no record information; skip it.
                    if !empty {
                        let end = e.to_end().into_owned();
                        self.reader
                            .read_to_end_into(end.name(), skip_buf)
                            .map_err(|err| self.err(format!("malformed <data>: {err}")))?;
                    }
                    return Ok(());
                }
                if !self.keys.contains_key(&key_id) {
                    return Err(self.err(format!("<data> references undeclared key '{key_id}'")));
                }
                self.current_data = Some((key_id, String::new()));
                if empty {
                    self.finish_data()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_end(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"key" => {
                if let Some((id, decl)) = self.current_key.take() {
                    self.keys.insert(id, decl);
                }
            }
            b"default" => self.finish_default()?,
            b"data" => self.finish_data()?,
            b"node" | b"edge" => self.finish_element()?,
            b"graph" => self.in_graph = false,
            _ => {}
        }
        Ok(())
    }

    fn handle_text(&mut self, text: &str) {
        if let Some(buf) = self.in_default.as_mut() {
            buf.push_str(text);
        } else if let Some((_, buf)) = self.current_data.as_mut() {
            buf.push_str(text);
        }
    }

    fn parse_key_decl(&self, e: &BytesStart) -> Result<(String, KeyDecl)> {
        let id = self
            .attr(e, b"id")?
            .ok_or_else(|| self.err("<key> is missing an id attribute"))?;
        let domain = match self.attr(e, b"for")?.as_deref() {
            Some("node") => KeyDomain::Node,
            Some("edge") => KeyDomain::Edge,
            Some("all") | None => KeyDomain::All,
            _ => KeyDomain::Other,
        };
        let name = self.attr(e, b"attr.name")?.unwrap_or_else(|| id.clone());
        let ty = match self.attr(e, b"attr.type")? {
            Some(decl) => ValueType::from_decl(&decl)?,
            None => ValueType::String,
        };
        Ok((
            id,
            KeyDecl {
                name,
                ty,
                domain,
                default: None,
            },
        ))
    }

    fn finish_default(&mut self) -> Result<()> {
        let Some(text) = self.in_default.take() else {
            return Ok(());
        };
        if let Some((_, decl)) = self.current_key.as_mut() {
            let value = decl.ty.parse_value(&text)?;
            decl.default = Some(value);
        }
        Ok(())
    }

    fn finish_data(&mut self) -> Result<()> {
        let Some((key_id, text)) = self.current_data.take() else {
            return Ok(());
        };
        let Some((_, attrs)) = self.pending.as_mut() else {
            return Ok(());
        };
        // Presence validated when the <data> element opened.
        let decl = self
            .keys
            .get(&key_id)
            .ok_or_else(|| MigrateError::Parse(format!("undeclared key '{key_id}'")))?;
        let value = decl.ty.parse_value(&text)?;
        attrs.insert(decl.name.clone(), value);
        Ok(())
    }

    /// Close out the pending node or edge: materialize key defaults, derive
    /// the label (or relationship type), and emit the record.
    fn finish_element(&mut self) -> Result<()> {
        let Some((pending, mut attrs)) = self.pending.take() else {
            return Ok(());
        };
        let is_node = matches!(pending, Pending::Node { .. });
        for decl in self.keys.values() {
            let applies = if is_node {
                decl.domain.applies_to_node()
            } else {
                decl.domain.applies_to_edge()
            };
            if !applies {
                continue;
            }
            if let Some(default) = &decl.default {
                if !attrs.contains_key(&decl.name) {
                    attrs.insert(decl.name.clone(), default.clone());
                }
            }
        }
        match pending {
            Pending::Node { id } => {
                let label = derive_label(&mut attrs, DEFAULT_NODE_LABEL);
                self.nodes.push(NodeRecord {
                    id,
                    label,
                    properties: attrs,
                });
            }
            Pending::Edge { source, target } => {
                let rel_type = derive_label(&mut attrs, DEFAULT_RELATIONSHIP_TYPE);
                self.edges.push(EdgeRecord {
                    source_id: source,
                    target_id: target,
                    rel_type,
                    properties: attrs,
                });
            }
        }
        Ok(())
    }

    fn attr(&self, e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.err(format!("malformed attribute: {err}")))?;
            if attr.key.local_name().as_ref() == name {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.err(format!("bad attribute value: {err}")))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }
}

/// Take the `label` attribute if present, else `type`, else the default.
/// Only the matched key leaves the residual property map; an unmatched
/// `type` stays behind as an ordinary property.
fn derive_label(attrs: &mut Properties, default: &str) -> String {
    if let Some(value) = attrs.shift_remove("label") {
        return value.as_text();
    }
    if let Some(value) = attrs.shift_remove("type") {
        return value.as_text();
    }
    default.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<ParsedGraph> {
        ParsedGraph::from_reader(xml.as_bytes())
    }

    #[test]
    fn label_attribute_wins_over_type() {
        let graph = parse(
            r#"<graphml>
              <key id="d0" for="node" attr.name="label" attr.type="string"/>
              <key id="d1" for="node" attr.name="type" attr.type="string"/>
              <graph edgedefault="directed">
                <node id="n0">
                  <data key="d0">Person</data>
                  <data key="d1">Employee</data>
                </node>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        let node = &graph.nodes()[0];
        assert_eq!(node.label, "Person");
        // The unmatched key survives as an ordinary property.
        assert_eq!(
            node.properties.get("type"),
            Some(&PropertyValue::String("Employee".to_string()))
        );
        assert!(!node.properties.contains_key("label"));
    }

    #[test]
    fn type_attribute_is_fallback() {
        let graph = parse(
            r#"<graphml>
              <key id="d1" for="node" attr.name="type" attr.type="string"/>
              <graph edgedefault="directed">
                <node id="n0"><data key="d1">Server</data></node>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.nodes()[0].label, "Server");
        assert!(graph.nodes()[0].properties.is_empty());
    }

    #[test]
    fn default_label_when_unlabeled() {
        let graph = parse(
            r#"<graphml><graph edgedefault="directed">
                <node id="n0"/>
                <node id="n1"/>
                <edge source="n0" target="n1"/>
            </graph></graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.nodes()[0].label, "Node");
        assert_eq!(graph.edges()[0].rel_type, "RELATES_TO");
    }

    #[test]
    fn typed_values() {
        let graph = parse(
            r#"<graphml>
              <key id="a" for="node" attr.name="age" attr.type="int"/>
              <key id="s" for="node" attr.name="score" attr.type="double"/>
              <key id="f" for="node" attr.name="active" attr.type="boolean"/>
              <graph edgedefault="directed">
                <node id="n0">
                  <data key="a">41</data>
                  <data key="s">2.5</data>
                  <data key="f">true</data>
                </node>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        let props = &graph.nodes()[0].properties;
        assert_eq!(props.get("age"), Some(&PropertyValue::Int(41)));
        assert_eq!(props.get("score"), Some(&PropertyValue::Float(2.5)));
        assert_eq!(props.get("active"), Some(&PropertyValue::Bool(true)));
    }

    #[test]
    fn key_default_applies_when_datum_absent() {
        let graph = parse(
            r#"<graphml>
              <key id="w" for="edge" attr.name="weight" attr.type="double">
                <default>1.0</default>
              </key>
              <graph edgedefault="directed">
                <node id="a"/>
                <node id="b"/>
                <edge source="a" target="b"/>
                <edge source="b" target="a"><data key="w">0.5</data></edge>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        assert_eq!(
            graph.edges()[0].properties.get("weight"),
            Some(&PropertyValue::Float(1.0))
        );
        assert_eq!(
            graph.edges()[1].properties.get("weight"),
            Some(&PropertyValue::Float(0.5))
        );
    }

    #[test]
    fn parallel_edges_yield_distinct_records() {
        let graph = parse(
            r#"<graphml><graph edgedefault="directed">
                <node id="a"/>
                <node id="b"/>
                <edge source="a" target="b"/>
                <edge source="a" target="b"/>
            </graph></graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.topology().edge_count, 2);
    }

    #[test]
    fn edge_id_attribute_is_discarded() {
        let graph = parse(
            r#"<graphml><graph edgedefault="directed">
                <node id="a"/>
                <node id="b"/>
                <edge id="e0" source="a" target="b"/>
            </graph></graphml>"#,
        )
        .unwrap();
        assert!(graph.edges()[0].properties.is_empty());
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let result = parse(
            r#"<graphml><graph edgedefault="directed">
                <node id="a"/>
                <node id="a"/>
            </graph></graphml>"#,
        );
        assert!(matches!(result, Err(MigrateError::Parse(_))));
    }

    #[test]
    fn undeclared_data_key_is_rejected() {
        let result = parse(
            r#"<graphml><graph edgedefault="directed">
                <node id="a"><data key="nope">x</data></node>
            </graph></graphml>"#,
        );
        let err = result.err().unwrap();
        assert!(err.to_string().contains("undeclared key"));
    }

    #[test]
    fn bad_typed_literal_is_rejected() {
        let result = parse(
            r#"<graphml>
              <key id="a" for="node" attr.name="age" attr.type="int"/>
              <graph edgedefault="directed">
                <node id="n0"><data key="a">forty</data></node>
              </graph>
            </graphml>"#,
        );
        assert!(matches!(result, Err(MigrateError::Parse(_))));
    }

    #[test]
    fn non_finite_float_literal_is_rejected() {
        for literal in ["inf", "-inf", "NaN"] {
            let result = parse(&format!(
                r#"<graphml>
                  <key id="w" for="node" attr.name="weight" attr.type="double"/>
                  <graph edgedefault="directed">
                    <node id="n0"><data key="w">{literal}</data></node>
                  </graph>
                </graphml>"#
            ));
            assert!(
                matches!(result, Err(MigrateError::Parse(_))),
                "'{literal}' should be rejected"
            );
        }
    }

    #[test]
    fn malformed_xml_is_rejected() {
        let result = parse("<graphml><graph><node id=");
        assert!(matches!(result, Err(MigrateError::Parse(_))));
    }

    #[test]
    fn graph_level_data_is_ignored() {
        let graph = parse(
            r#"<graphml>
              <key id="g" for="graph" attr.name="comment" attr.type="string"/>
              <graph edgedefault="directed">
                <data key="g">whole-graph comment</data>
                <node id="a"/>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.nodes().len(), 1);
        assert!(graph.nodes()[0].properties.is_empty());
    }

    #[test]
    fn graph_key_default_does_not_leak_onto_records() {
        let graph = parse(
            r#"<graphml>
              <key id="g" for="graph" attr.name="comment" attr.type="string">
                <default>hello</default>
              </key>
              <graph edgedefault="directed">
                <node id="a"/>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        assert!(graph.nodes()[0].properties.is_empty());
    }

    #[test]
    fn topology_is_sorted_and_counted() {
        let graph = parse(
            r#"<graphml>
              <key id="l" for="node" attr.name="label" attr.type="string"/>
              <key id="t" for="edge" attr.name="label" attr.type="string"/>
              <graph edgedefault="directed">
                <node id="1"><data key="l">Zebra</data></node>
                <node id="2"><data key="l">Apple</data></node>
                <node id="3"><data key="l">Apple</data></node>
                <edge source="1" target="2"><data key="t">EATS</data></edge>
                <edge source="2" target="3"><data key="t">BESIDE</data></edge>
            </graph></graphml>"#,
        )
        .unwrap();
        let topology = graph.topology();
        assert_eq!(topology.node_labels, ["Apple", "Zebra"]);
        assert_eq!(topology.relationship_types, ["BESIDE", "EATS"]);
        assert_eq!(topology.node_count, 3);
        assert_eq!(topology.edge_count, 2);
    }

    #[test]
    fn sample_config_is_identity() {
        let graph = parse(
            r#"<graphml>
              <key id="l" for="node" attr.name="label" attr.type="string"/>
              <graph edgedefault="directed">
                <node id="1"><data key="l">Person</data></node>
            </graph></graphml>"#,
        )
        .unwrap();
        let config = graph.sample_config();
        assert_eq!(config.node_label("Person"), "Person");
        assert_eq!(
            config.node_labels.get("Person").unwrap().target_label,
            Some("Person".to_string())
        );
        assert!(config.property_transformations.is_empty());
    }

    #[test]
    fn namespaced_graphml_parses() {
        let graph = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <graphml xmlns="http://graphml.graphdrawing.org/xmlns">
              <graph id="G" edgedefault="undirected">
                <node id="n0"/>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.nodes().len(), 1);
    }

    #[test]
    fn attribute_order_is_preserved() {
        let graph = parse(
            r#"<graphml>
              <key id="b" for="node" attr.name="beta" attr.type="string"/>
              <key id="a" for="node" attr.name="alpha" attr.type="string"/>
              <graph edgedefault="directed">
                <node id="n0">
                  <data key="b">2</data>
                  <data key="a">1</data>
                </node>
              </graph>
            </graphml>"#,
        )
        .unwrap();
        let keys: Vec<&String> = graph.nodes()[0].properties.keys().collect();
        assert_eq!(keys, ["beta", "alpha"]);
    }
}
