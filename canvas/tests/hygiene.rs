//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the chart crate source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first. The budget never grows.
//!
//! They also pin the module boundaries: geometry stays pure, and only the
//! renderer issues drawing calls.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// (pattern, budget, why it matters)
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: these crash the dashboard tab.
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    // Silent loss: discards errors without inspecting.
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Canvas drawing calls that may only appear in `render.rs`.
const DRAW_CALLS: &[&str] = &[".fill_text(", ".line_to(", ".move_to(", ".arc(", ".stroke()", ".clear_rect("];

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn drawing_calls_stay_in_renderer() {
    let files = source_files();
    let outside: Vec<SourceFile> = files
        .into_iter()
        .filter(|f| !f.path.ends_with("render.rs"))
        .collect();
    for call in DRAW_CALLS {
        let found = hits(&outside, call);
        assert!(found.is_empty(), "{call} used outside render.rs:\n{}", format_hits(&found));
    }
}

#[test]
fn layout_is_browser_free() {
    let files = source_files();
    let layout: Vec<SourceFile> = files
        .into_iter()
        .filter(|f| f.path.ends_with("layout.rs"))
        .collect();
    assert_eq!(layout.len(), 1, "layout.rs not found");
    for pattern in ["web_sys", "wasm_bindgen", "js_sys"] {
        let found = hits(&layout, pattern);
        assert!(found.is_empty(), "layout.rs must stay pure, found {pattern}");
    }
}
