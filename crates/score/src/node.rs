use std::fmt;

use scorelens_core::Hierarchy;

/// Structural role of a node inside a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Score,
    System,
    Part,
    Staff,
    Measure,
    Clef,
    KeySignature,
    TimeSignature,
    Chord,
    Note,
    Barline,
    Beam,
    Slur,
    Lyric,
}

impl NodeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Score => "Score",
            NodeRole::System => "System",
            NodeRole::Part => "Part",
            NodeRole::Staff => "Staff",
            NodeRole::Measure => "Measure",
            NodeRole::Clef => "Clef",
            NodeRole::KeySignature => "KeySignature",
            NodeRole::TimeSignature => "TimeSignature",
            NodeRole::Chord => "Chord",
            NodeRole::Note => "Note",
            NodeRole::Barline => "Barline",
            NodeRole::Beam => "Beam",
            NodeRole::Slur => "Slur",
            NodeRole::Lyric => "Lyric",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the score hierarchy.
///
/// Nodes own their children; the order of the child list is the musical
/// reading order and stays fixed for the lifetime of the score. Attributes
/// are an ordered list of display fields, not a lookup table, because the
/// detail dump preserves their declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreNode {
    role: NodeRole,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<ScoreNode>,
}

impl ScoreNode {
    pub fn builder(role: NodeRole, name: impl Into<String>) -> ScoreNodeBuilder {
        ScoreNodeBuilder::new(role, name.into())
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[ScoreNode] {
        &self.children
    }
}

pub struct ScoreNodeBuilder {
    role: NodeRole,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<ScoreNode>,
}

impl ScoreNodeBuilder {
    fn new(role: NodeRole, name: String) -> Self {
        Self { role, name, attributes: Vec::new(), children: Vec::new() }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn push_child(mut self, child: ScoreNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ScoreNode>,
    {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> ScoreNode {
        let ScoreNodeBuilder { role, name, attributes, children } = self;
        ScoreNode { role, name, attributes, children }
    }
}

/// A complete score: a title plus the root of the structure tree.
///
/// The root node is the distinguished entry point for browsing; the score
/// is immutable for the duration of a browsing session.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    title: String,
    root: ScoreNode,
}

impl Score {
    pub fn new(title: impl Into<String>, root: ScoreNode) -> Self {
        Self { title: title.into(), root }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &ScoreNode {
        &self.root
    }
}

impl Hierarchy for Score {
    type Node = ScoreNode;

    fn children<'a>(&'a self, node: &'a ScoreNode) -> &'a [ScoreNode] {
        node.children()
    }
}
