//! Source walk and function-name extraction.
//!
//! DESIGN
//! ======
//! Extraction is line-oriented regex matching, not parsing. For Rust only
//! unindented `fn` items count, which keeps trait impls and inherent methods
//! (`fmt`, `new`, `default`, ...) out of the report. For JS/TS, `function`
//! declarations and `const name = (...) =>` arrows count at any depth.
//! Test files are skipped unless asked for, since test helpers are
//! routinely repeated per file.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_EXTENSIONS: [&str; 5] = ["rs", "ts", "tsx", "js", "jsx"];

const SKIPPED_DIRS: [&str; 5] = ["target", "node_modules", "dist", "build", "pkg"];
const TEST_DIRS: [&str; 2] = ["tests", "__tests__"];

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("root {0} is not a directory")]
    MissingRoot(PathBuf),
    #[error("failed to walk {path}: {source}")]
    Walk { path: PathBuf, source: walkdir::Error },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid definition pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Names never reported.
    pub ignore: Vec<String>,
    pub include_tests: bool,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            ignore: Vec::new(),
            include_tests: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Location {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    /// 1-based.
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub name: String,
    pub locations: Vec<Location>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files_scanned: usize,
    pub definitions: usize,
    pub duplicates: Vec<Duplicate>,
}

impl Report {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Rust,
    Script,
}

impl Language {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Self::Rust),
            "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" => Some(Self::Script),
            _ => None,
        }
    }
}

// Unindented only, so methods inside `impl` blocks are not counted.
const RUST_FN: &str =
    r"^(?:pub(?:\([^)]*\))?\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+\S+\s+)?fn\s+([A-Za-z_][A-Za-z0-9_]*)";
const SCRIPT_FUNCTION: &str =
    r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][A-Za-z0-9_$]*)";
const SCRIPT_ARROW: &str = r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:\([^)]*\)|[A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=]+)?=>";

/// Compiled definition patterns.
pub struct Extractor {
    rust: Regex,
    function: Regex,
    arrow: Regex,
}

impl Extractor {
    /// # Errors
    ///
    /// [`regex::Error`] if a definition pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            rust: Regex::new(RUST_FN)?,
            function: Regex::new(SCRIPT_FUNCTION)?,
            arrow: Regex::new(SCRIPT_ARROW)?,
        })
    }

    /// Function names defined in `source`, with 1-based line numbers.
    pub fn extract(&self, source: &str, language: Language) -> Vec<(String, usize)> {
        let patterns: &[&Regex] = match language {
            Language::Rust => &[&self.rust],
            Language::Script => &[&self.function, &self.arrow],
        };
        source
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                patterns
                    .iter()
                    .find_map(|re| re.captures(line))
                    .and_then(|caps| caps.get(1))
                    .map(|name| (name.as_str().to_owned(), index + 1))
            })
            .collect()
    }
}

/// Walk `options.root` and report every function name defined more than once.
///
/// # Errors
///
/// [`ScanError`] when the root is missing, a directory cannot be walked,
/// or a matching file cannot be read.
pub fn scan(options: &ScanOptions) -> Result<Report, ScanError> {
    if !options.root.is_dir() {
        return Err(ScanError::MissingRoot(options.root.clone()));
    }
    let extractor = Extractor::new()?;
    let mut seen: BTreeMap<String, Vec<Location>> = BTreeMap::new();
    let mut report = Report::default();

    let walker = WalkDir::new(&options.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || keep_entry(entry, options.include_tests));
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk { path: options.root.clone(), source })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(language) = language_for(entry.path(), &options.extensions) else {
            continue;
        };
        let source = fs::read_to_string(entry.path())
            .map_err(|source| ScanError::Read { path: entry.path().to_path_buf(), source })?;
        let path = relative(&options.root, entry.path());
        let found = extractor.extract(&source, language);
        tracing::debug!(%path, definitions = found.len(), "scanned");

        report.files_scanned += 1;
        report.definitions += found.len();
        for (name, line) in found {
            if options.ignore.contains(&name) {
                continue;
            }
            seen.entry(name).or_default().push(Location { path: path.clone(), line });
        }
    }

    report.duplicates = seen
        .into_iter()
        .filter(|(_, locations)| locations.len() > 1)
        .map(|(name, mut locations)| {
            locations.sort();
            Duplicate { name, locations }
        })
        .collect();
    Ok(report)
}

fn keep_entry(entry: &DirEntry, include_tests: bool) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return false;
    }
    if entry.file_type().is_dir() {
        return !SKIPPED_DIRS.contains(&name.as_ref()) && (include_tests || !TEST_DIRS.contains(&name.as_ref()));
    }
    include_tests || !is_test_file(&name)
}

fn is_test_file(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name);
    stem.ends_with("_test") || name.contains(".test.") || name.contains(".spec.")
}

fn language_for(path: &Path, extensions: &[String]) -> Option<Language> {
    let ext = path.extension()?.to_str()?;
    if !extensions.iter().any(|wanted| wanted.trim_start_matches('.') == ext) {
        return None;
    }
    Language::from_extension(ext)
}

fn relative(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
