// Test utility module for scriptsent integration tests
#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const POSITIVE_WORDS: &str = indoc! {"
    good
    hope
    brave
    love
    super
"};

pub const NEGATIVE_WORDS: &str = indoc! {"
    bad
    doomed
    fear
    terrible
    super
"};

/// Script, lexicons and a scratch directory written to disk
pub struct ScriptFixture {
    pub dir: TempDir,
    pub script: PathBuf,
    pub positive: PathBuf,
    pub negative: PathBuf,
}

impl ScriptFixture {
    pub fn new(script: &str) -> Self {
        Self::with_lexicons(script, POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    pub fn with_lexicons(script: &str, positive: &str, negative: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let script_path = dir.path().join("script.txt");
        let positive_path = dir.path().join("positive-words.txt");
        let negative_path = dir.path().join("negative-words.txt");
        fs::write(&script_path, script).unwrap();
        fs::write(&positive_path, positive).unwrap();
        fs::write(&negative_path, negative).unwrap();

        Self {
            dir,
            script: script_path,
            positive: positive_path,
            negative: negative_path,
        }
    }

    pub fn paths(&self) -> scriptsent::pipeline::InputPaths<'_> {
        scriptsent::pipeline::InputPaths {
            script: &self.script,
            positive: &self.positive,
            negative: &self.negative,
        }
    }
}

/// Build script text from `(character, dialogue)` pairs, numbering from 1
pub fn script_text(lines: &[(&str, &str)]) -> String {
    let mut text = String::from("line_number|character|dialogue\n");
    for (i, (character, dialogue)) in lines.iter().enumerate() {
        text.push_str(&format!("{}|{}|{}\n", i + 1, character, dialogue));
    }
    text
}
