use clap::Args;
use scorelens_core::{DetailSink, HierarchyAdapter, SelectionCoordinator};
use scorelens_score::{ScoreNode, html_dump_of, text_dump_of};
use std::convert::Infallible;
use std::path::PathBuf;

use crate::util::{CliResult, load_score, parse_index_path};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailFormat {
    Text,
    Html,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[arg(value_name = "FILE", help = "Score XML file. Defaults to the embedded demo score.")]
    pub file: Option<PathBuf>,

    #[arg(
        long = "at",
        value_name = "INDEX_PATH",
        default_value = "",
        help = "Dotted child-index path from the root, e.g. 0.2.1. Empty selects the root itself."
    )]
    pub at: String,

    #[arg(long = "format", value_enum, default_value_t = DetailFormat::Text, help = "Detail dump format.")]
    pub format: DetailFormat,
}

/// Detail surface stand-in: keeps the last published text.
#[derive(Default)]
struct BufferSink {
    current: Option<String>,
}

impl DetailSink for BufferSink {
    fn publish(&mut self, text: String) {
        self.current = Some(text);
    }
}

fn describe_text(node: &ScoreNode) -> Result<String, Infallible> {
    Ok(text_dump_of(node))
}

fn describe_html(node: &ScoreNode) -> Result<String, Infallible> {
    Ok(html_dump_of(node))
}

pub fn run(args: &ShowArgs) -> CliResult<String> {
    let score = load_score(args.file.as_deref())?;
    let adapter = HierarchyAdapter::new(&score, score.root());

    let indices = parse_index_path(&args.at)?;
    let mut path: Vec<&ScoreNode> = vec![adapter.root()];
    for index in indices {
        let parent = path[path.len() - 1];
        path.push(adapter.child_at(parent, index)?);
    }

    let describer: fn(&ScoreNode) -> Result<String, Infallible> = match args.format {
        DetailFormat::Text => describe_text,
        DetailFormat::Html => describe_html,
    };
    let mut coordinator = SelectionCoordinator::new(describer, BufferSink::default());
    match coordinator.on_selection_changed(&path) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    Ok(coordinator.into_sink().current.unwrap_or_default())
}
