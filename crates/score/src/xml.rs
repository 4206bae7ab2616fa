//! Loading a score from its XML form.
//!
//! The file format mirrors the structure tree directly: a `<score>` element
//! with a title, containing nested `<node>` elements with a role, a display
//! name and optional `<attribute>` children. The score root node is
//! synthesized from the title, so the document lists the systems directly.

use quick_xml::de::from_str;
use serde::Deserialize;
use thiserror::Error;

use crate::node::{NodeRole, Score, ScoreNode};

/// Small score embedded for tests and as the CLI default.
pub const DEMO_SCORE_XML: &str = include_str!("../assets/demo_score.xml");

#[derive(Debug, Error)]
pub enum ScoreLoadError {
    #[error("score XML parsing failed: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("unknown node role `{0}` in score file")]
    UnknownRole(String),
}

#[derive(Debug, Deserialize)]
struct XmlScore {
    #[serde(rename = "@title")]
    title: String,
    #[serde(rename = "node", default)]
    nodes: Vec<XmlNode>,
}

#[derive(Debug, Deserialize)]
struct XmlNode {
    #[serde(rename = "@role")]
    role: String,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "attribute", default)]
    attributes: Vec<XmlAttribute>,
    #[serde(rename = "node", default)]
    children: Vec<XmlNode>,
}

#[derive(Debug, Deserialize)]
struct XmlAttribute {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value")]
    value: String,
}

/// Parses a score document.
pub fn from_xml(xml: &str) -> Result<Score, ScoreLoadError> {
    let parsed: XmlScore = from_str(xml)?;
    let mut root = ScoreNode::builder(NodeRole::Score, parsed.title.clone());
    for node in parsed.nodes {
        root = root.push_child(build_node(node)?);
    }
    Ok(Score::new(parsed.title, root.build()))
}

/// The embedded demo score.
pub fn demo_score() -> Score {
    from_xml(DEMO_SCORE_XML).expect("embedded demo_score.xml failed to parse")
}

fn build_node(node: XmlNode) -> Result<ScoreNode, ScoreLoadError> {
    let role = parse_role(&node.role)?;
    let mut builder = ScoreNode::builder(role, node.name);
    for attribute in node.attributes {
        builder = builder.with_attribute(attribute.name, attribute.value);
    }
    for child in node.children {
        builder = builder.push_child(build_node(child)?);
    }
    Ok(builder.build())
}

fn parse_role(value: &str) -> Result<NodeRole, ScoreLoadError> {
    match value {
        "score" => Ok(NodeRole::Score),
        "system" => Ok(NodeRole::System),
        "part" => Ok(NodeRole::Part),
        "staff" => Ok(NodeRole::Staff),
        "measure" => Ok(NodeRole::Measure),
        "clef" => Ok(NodeRole::Clef),
        "key-signature" => Ok(NodeRole::KeySignature),
        "time-signature" => Ok(NodeRole::TimeSignature),
        "chord" => Ok(NodeRole::Chord),
        "note" => Ok(NodeRole::Note),
        "barline" => Ok(NodeRole::Barline),
        "beam" => Ok(NodeRole::Beam),
        "slur" => Ok(NodeRole::Slur),
        "lyric" => Ok(NodeRole::Lyric),
        other => Err(ScoreLoadError::UnknownRole(other.to_owned())),
    }
}
