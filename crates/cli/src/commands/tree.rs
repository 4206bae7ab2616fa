use clap::Args;
use owo_colors::{OwoColorize, Stream};
use scorelens_core::HierarchyAdapter;
use scorelens_score::{Score, ScoreNode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::util::{CliResult, load_score};

#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    #[arg(value_name = "FILE", help = "Score XML file. Defaults to the embedded demo score.")]
    pub file: Option<PathBuf>,

    #[arg(
        long = "max-depth",
        value_name = "N",
        help = "Limit recursion depth (0 = only the root). Default: unlimited."
    )]
    pub max_depth: Option<usize>,

    #[arg(long = "no-attrs", help = "Suppress attribute lines (structure only).")]
    pub no_attrs: bool,

    #[arg(long = "no-color", help = "Disable ANSI colors.")]
    pub no_color: bool,

    #[arg(
        long = "output",
        value_name = "FILE",
        help = "Write the tree to a file instead of stdout."
    )]
    pub output: Option<PathBuf>,
}

pub fn run(args: &TreeArgs) -> CliResult<String> {
    if args.no_color {
        // Disable colors globally for the process
        owo_colors::set_override(false);
    }
    let score = load_score(args.file.as_deref())?;
    let adapter = HierarchyAdapter::new(&score, score.root());

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_tree(&mut writer, &adapter, adapter.root(), args, "", true, 0)?;
            Ok(format!("Saved tree to {}.", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_tree(&mut handle, &adapter, adapter.root(), args, "", true, 0)?;
            Ok(String::new())
        }
    }
}

// Renders one node and recurses. Navigation goes exclusively through the
// adapter contract; the node itself is only consulted for its label and
// attribute fields.
fn write_tree<'h, W: Write>(
    writer: &mut W,
    adapter: &HierarchyAdapter<'h, Score>,
    node: &'h ScoreNode,
    args: &TreeArgs,
    prefix: &str,
    is_last: bool,
    depth: usize,
) -> CliResult<()> {
    let connector = if prefix.is_empty() {
        ""
    } else if is_last {
        "└ "
    } else {
        "├ "
    };

    let label_plain = if node.name().is_empty() {
        node.role().to_string()
    } else {
        format!("{} \"{}\"", node.role(), node.name())
    };
    let label = label_plain.if_supports_color(Stream::Stdout, |t| t.bold().to_string());
    writeln!(writer, "{prefix}{connector}{label}")?;

    let base = format!("{}{}", prefix, if is_last { "   " } else { "│  " });

    if !args.no_attrs && !node.attributes().is_empty() {
        let attr_prefix = format!("{base}│ ");
        for (name, value) in node.attributes() {
            let field_plain = format!("@{name} = {value}");
            let field = field_plain.if_supports_color(Stream::Stdout, |t| t.dimmed().to_string());
            writeln!(writer, "{attr_prefix}{field}")?;
        }
    }

    let proceed = args.max_depth.map(|max| depth < max).unwrap_or(true);
    if proceed && !adapter.is_leaf(node) {
        let count = adapter.child_count(node);
        for index in 0..count {
            let child = adapter.child_at(node, index)?;
            write_tree(writer, adapter, child, args, &base, index + 1 == count, depth + 1)?;
        }
    }
    Ok(())
}
