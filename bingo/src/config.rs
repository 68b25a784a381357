//! Phrase-pool configuration.
//!
//! The pool is either the built-in default or a JSON file holding an
//! array of strings, passed as the first command-line argument.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use bingo_board::PhraseSet;

/// On-disk phrase list: a bare JSON array of strings.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct PhraseFile(Vec<String>);

/// Load a phrase pool from `path`.
///
/// Duplicates are collapsed by [`PhraseSet`]; whether the remaining pool
/// is large enough is checked at board creation, where the error is
/// fatal.
pub fn load_phrases(path: &Path) -> Result<PhraseSet, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let PhraseFile(phrases) = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("loaded {} phrases from {}", phrases.len(), path.display());
    Ok(PhraseSet::new(phrases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_json_array() {
        let mut path = std::env::temp_dir();
        path.push("bingo-phrases-test.json");
        let mut f = File::create(&path).unwrap();
        write!(f, "[\"one\", \"two\", \"two\", \"three\"]").unwrap();
        let pool = load_phrases(&path).unwrap();
        assert_eq!(pool.len(), 3);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_phrases(Path::new("/nonexistent/phrases.json")).is_err());
    }
}
