//! Tag file parsing
//!
//! A tag file is a generated index of tab-separated lines:
//! `tag<TAB>filename<TAB>/pattern` plus optional trailing fields. The parser
//! turns the raw text of one tag file into `TagRecord`s, resolving target
//! paths against the tag file's directory and stripping the pattern's
//! sentinel prefix and escape characters.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

/// Metadata line emitted by tag generators; never a real tag entry.
const ENCODING_MARKER: &str = "!_TAG_FILE_ENCODING";

/// Regex for deriving the language from a tag file name: `tags-ja` -> `ja`.
fn lang_suffix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^tags-(\w+)$").unwrap())
}

/// Regex accepting tag file names: `tags` or `tags-<code>`.
///
/// The whitelist keeps auxiliary files such as `tags.bak` or a secondary
/// index variant out of the parse.
fn tag_file_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^tags(?:-\w+)?$").unwrap())
}

/// Check whether a file name follows the tag-file naming convention.
pub fn is_tag_file_name(name: &str) -> bool {
    tag_file_regex().is_match(name)
}

/// Derive the language code from a tag file path.
///
/// `tags-<code>` yields `<code>`; the plain `tags` file is the primary
/// index and defaults to `en`.
pub fn language_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| lang_suffix_regex().captures(name))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| "en".to_string())
}

/// Policy for tag entries whose target is a markdown file.
///
/// Some plugin managers generate tag entries for markdown sources alongside
/// the native help format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadmeFilter {
    /// Drop entries pointing at markdown files
    Exclude,
    /// Keep everything (default)
    #[default]
    Include,
    /// Keep only entries pointing at markdown files
    Only,
}

impl FromStr for ReadmeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exclude" => Ok(ReadmeFilter::Exclude),
            "include" => Ok(ReadmeFilter::Include),
            "only" => Ok(ReadmeFilter::Only),
            _ => Err(format!(
                "Invalid readme filter: {} (expected exclude, include or only)",
                s
            )),
        }
    }
}

impl ReadmeFilter {
    /// Whether an entry targeting `path` passes this filter.
    pub fn keeps(&self, path: &Path) -> bool {
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        match self {
            ReadmeFilter::Exclude => !is_markdown,
            ReadmeFilter::Include => true,
            ReadmeFilter::Only => is_markdown,
        }
    }
}

/// One parsed tag file entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    /// Tag name (first column)
    pub tag: String,

    /// Absolute path of the target document
    pub target_path: PathBuf,

    /// Search pattern with sentinel and escapes removed
    pub pattern: String,

    /// Language code derived from the tag file name
    pub language: String,
}

/// Remove escape backslashes from a raw tag pattern.
///
/// `\X` becomes `X` for any `X` other than a backslash; an escaped
/// backslash `\\` is preserved verbatim.
fn unescape_pattern(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('\\') => {
                    out.push('\\');
                    out.push('\\');
                    chars.next();
                }
                Some(&next) => {
                    out.push(next);
                    chars.next();
                }
                None => {}
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Parse one line of a tag file.
///
/// Returns None for metadata lines and lines with fewer than three
/// tab-separated fields (expected noise, silently skipped).
fn parse_line(line: &str, dir: &Path, language: &str, readme: ReadmeFilter) -> Option<TagRecord> {
    if line.starts_with(ENCODING_MARKER) {
        return None;
    }

    let mut fields = line.split('\t');
    let tag = fields.next()?;
    let filename = fields.next()?;
    let raw_pattern = fields.next()?;
    // Fields beyond the third are generator metadata; ignored.

    if tag.is_empty() || filename.is_empty() {
        return None;
    }

    let target_path = dir.join(filename);
    if !readme.keeps(&target_path) {
        return None;
    }

    // The pattern field is prefixed with a fixed sentinel character.
    let mut pattern_chars = raw_pattern.chars();
    pattern_chars.next()?;
    let pattern = unescape_pattern(pattern_chars.as_str());

    Some(TagRecord {
        tag: tag.to_string(),
        target_path,
        pattern,
        language: language.to_string(),
    })
}

/// Parse the raw text of one tag file into records.
///
/// `dir` is the tag file's directory; target paths resolve against it.
pub fn parse_tag_file<'a>(
    text: &'a str,
    dir: &'a Path,
    language: &'a str,
    readme: ReadmeFilter,
) -> impl Iterator<Item = TagRecord> + 'a {
    text.lines()
        .filter_map(move |line| parse_line(line, dir, language, readme))
}
