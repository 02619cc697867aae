use std::fs;
use std::path::Path;

use super::*;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

fn names(found: &[(String, usize)]) -> Vec<&str> {
    found.iter().map(|(name, _)| name.as_str()).collect()
}

// ===== EXTRACTION =====

#[test]
fn rust_counts_top_level_items_only() {
    let extractor = Extractor::new().unwrap();
    let source = "\
pub fn render() {}
fn helper() {}
pub(crate) async fn load() {}
pub const fn zero() -> u8 { 0 }
impl Foo {
    pub fn new() -> Self { Self }
    fn fmt(&self) {}
}
// fn commented() {}
";
    let found = extractor.extract(source, Language::Rust);
    assert_eq!(names(&found), vec!["render", "helper", "load", "zero"]);
    assert_eq!(found[1].1, 2);
}

#[test]
fn script_finds_declarations_and_arrows() {
    let extractor = Extractor::new().unwrap();
    let source = "\
export function formatDate(d) {}
async function fetchAll() {}
export default function App() {}
function* ids() {}
const add = (a, b) => a + b;
export const load = async (id: string): Promise<void> => {};
const Card: React.FC<Props> = ({ title }) => null;
let single = x => x;
const value = 42;
const handlers = { onClick: () => {} };
";
    let found = extractor.extract(source, Language::Script);
    assert_eq!(
        names(&found),
        vec!["formatDate", "fetchAll", "App", "ids", "add", "load", "Card", "single"]
    );
}

#[test]
fn language_by_extension() {
    assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
    assert_eq!(Language::from_extension("tsx"), Some(Language::Script));
    assert_eq!(Language::from_extension("md"), None);
}

// ===== WALK =====

#[test]
fn reports_names_defined_in_two_files() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "src/a.ts", "export function formatDate() {}\nfunction onlyHere() {}\n");
    write(dir.path(), "src/b/c.tsx", "\n\nconst formatDate = (d) => d;\n");
    write(dir.path(), "lib.rs", "fn parse() {}\n");

    let report = scan(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.definitions, 4);
    assert_eq!(report.duplicates.len(), 1);
    let dup = &report.duplicates[0];
    assert_eq!(dup.name, "formatDate");
    assert_eq!(
        dup.locations,
        vec![
            Location { path: "src/a.ts".to_owned(), line: 1 },
            Location { path: "src/b/c.tsx".to_owned(), line: 3 },
        ]
    );
    assert!(report.has_duplicates());
}

#[test]
fn same_file_twice_is_a_duplicate() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "util.js", "function pick() {}\n\nfunction pick() {}\n");
    let report = scan(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.duplicates[0].locations.len(), 2);
}

#[test]
fn skips_vendor_hidden_and_build_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "src/main.rs", "fn run() {}\n");
    write(dir.path(), "target/debug/build.rs", "fn run() {}\n");
    write(dir.path(), "node_modules/pkg/index.js", "function run() {}\n");
    write(dir.path(), ".git/hooks/x.js", "function run() {}\n");
    write(dir.path(), ".cache/y.ts", "function run() {}\n");

    let report = scan(&ScanOptions::new(dir.path())).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert!(!report.has_duplicates());
}

#[test]
fn test_files_are_opt_in() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "src/a_test.rs", "fn setup() {}\n");
    write(dir.path(), "src/b_test.rs", "fn setup() {}\n");
    write(dir.path(), "web/c.test.ts", "function setup() {}\n");
    write(dir.path(), "tests/it.rs", "fn setup() {}\n");

    let mut options = ScanOptions::new(dir.path());
    assert!(!scan(&options).unwrap().has_duplicates());

    options.include_tests = true;
    let report = scan(&options).unwrap();
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].locations.len(), 4);
}

#[test]
fn extensions_and_ignore_narrow_the_report() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "a.rs", "fn main() {}\nfn shared() {}\n");
    write(dir.path(), "b.rs", "fn main() {}\nfn shared() {}\n");
    write(dir.path(), "c.js", "function shared() {}\n");

    let mut options = ScanOptions::new(dir.path());
    options.extensions = vec!["rs".to_owned()];
    options.ignore = vec!["main".to_owned()];
    let report = scan(&options).unwrap();
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].name, "shared");
    assert_eq!(report.duplicates[0].locations.len(), 2);
}

#[test]
fn duplicates_are_sorted_by_name() {
    let dir = tempfile::TempDir::new().unwrap();
    write(dir.path(), "a.js", "function zeta() {}\nfunction alpha() {}\n");
    write(dir.path(), "b.js", "function zeta() {}\nfunction alpha() {}\n");
    let report = scan(&ScanOptions::new(dir.path())).unwrap();
    let names: Vec<_> = report.duplicates.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = scan(&ScanOptions::new(dir.path().join("absent"))).unwrap_err();
    assert!(matches!(err, ScanError::MissingRoot(_)));
}

#[test]
fn report_serializes_for_json_output() {
    let report = Report {
        files_scanned: 2,
        definitions: 3,
        duplicates: vec![Duplicate {
            name: "pick".to_owned(),
            locations: vec![Location { path: "a.js".to_owned(), line: 4 }],
        }],
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["duplicates"][0]["name"], "pick");
    assert_eq!(json["duplicates"][0]["locations"][0]["line"], 4);
}
