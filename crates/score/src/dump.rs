//! Detail dumps for a selected node.
//!
//! These are the describe collaborators handed to the selection
//! coordinator: pure reads over a single node, one plain-text and one
//! HTML-markup form. Neither touches the node's children beyond counting
//! them.

use std::fmt::Write;

use crate::node::ScoreNode;

/// Plain-text field dump, one field per line.
pub fn text_dump_of(node: &ScoreNode) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "{} \"{}\"", node.role(), node.name());
    let _ = writeln!(&mut out, "Children: {}", node.children().len());
    for (name, value) in node.attributes() {
        let _ = writeln!(&mut out, "{name}: {value}");
    }
    out.trim_end().to_owned()
}

/// HTML markup dump, suitable for a markup-capable detail surface.
pub fn html_dump_of(node: &ScoreNode) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "<html><body>");
    let _ = writeln!(&mut out, "<h3>{} &quot;{}&quot;</h3>", node.role(), escape(node.name()));
    let _ = writeln!(&mut out, "<table>");
    let _ = writeln!(&mut out, "<tr><td>Children</td><td>{}</td></tr>", node.children().len());
    for (name, value) in node.attributes() {
        let _ = writeln!(&mut out, "<tr><td>{}</td><td>{}</td></tr>", escape(name), escape(value));
    }
    let _ = writeln!(&mut out, "</table>");
    let _ = write!(&mut out, "</body></html>");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeRole;
    use rstest::rstest;

    fn clef() -> ScoreNode {
        ScoreNode::builder(NodeRole::Clef, "G-Clef")
            .with_attribute("Shape", "TREBLE")
            .with_attribute("Pitch", "G4")
            .build()
    }

    #[rstest]
    fn text_dump_lists_role_name_child_count_and_attributes() {
        let text = text_dump_of(&clef());
        assert_eq!(text, "Clef \"G-Clef\"\nChildren: 0\nShape: TREBLE\nPitch: G4");
    }

    #[rstest]
    fn html_dump_wraps_fields_in_markup() {
        let html = html_dump_of(&clef());
        assert!(html.starts_with("<html><body>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<h3>Clef &quot;G-Clef&quot;</h3>"));
        assert!(html.contains("<tr><td>Shape</td><td>TREBLE</td></tr>"));
        assert!(html.contains("<tr><td>Children</td><td>0</td></tr>"));
    }

    #[rstest]
    fn html_dump_escapes_markup_in_values() {
        let node = ScoreNode::builder(NodeRole::Lyric, "A<b>&\"x\"")
            .with_attribute("Text", "p & q < r")
            .build();
        let html = html_dump_of(&node);
        assert!(html.contains("A&lt;b&gt;&amp;&quot;x&quot;"));
        assert!(html.contains("<tr><td>Text</td><td>p &amp; q &lt; r</td></tr>"));
        assert!(!html.contains("p & q"));
    }

    #[rstest]
    fn dumps_do_not_mutate_the_node() {
        let before = clef();
        let node = clef();
        let _ = text_dump_of(&node);
        let _ = html_dump_of(&node);
        assert_eq!(node, before);
    }
}
