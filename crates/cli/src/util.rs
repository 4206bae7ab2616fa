use std::error::Error;
use std::fs;
use std::path::Path;

use scorelens_score::Score;

pub type CliResult<T> = Result<T, Box<dyn Error>>;

/// Loads the score named on the command line, or the embedded demo score.
pub fn load_score(file: Option<&Path>) -> CliResult<Score> {
    match file {
        Some(path) => {
            let xml = fs::read_to_string(path)?;
            Ok(scorelens_score::from_xml(&xml)?)
        }
        None => Ok(scorelens_score::demo_score()),
    }
}

/// Parses a dotted child-index path such as `0.2.1`. The empty string
/// addresses the root itself.
pub fn parse_index_path(value: &str) -> CliResult<Vec<usize>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value
        .split('.')
        .map(|segment| {
            segment
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("invalid index path segment: `{segment}`").into())
        })
        .collect()
}
