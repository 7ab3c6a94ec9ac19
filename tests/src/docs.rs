// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use std::path::PathBuf;

const TOC: [&str; 7] = [
    "install",
    "use",
    "monerowallet",
    "exceptions",
    "troubleshooting",
    "license",
    "authors",
];

fn docs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../docs")
}

fn index() -> String {
    std::fs::read_to_string(docs_dir().join("index.rst")).unwrap()
}

/// Entries of the first `toctree`: indented lines after the directive,
/// skipping its `:option:` lines.
fn toctree_entries(doc: &str) -> Vec<String> {
    doc.lines()
        .skip_while(|line| line.trim() != ".. toctree::")
        .skip(1)
        .take_while(|line| line.trim().is_empty() || line.starts_with(' '))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(':'))
        .map(String::from)
        .collect()
}

#[test]
fn test_index_title_is_project_name() {
    let doc = index();
    let mut lines = doc.lines().filter(|l| !l.is_empty() && !l.starts_with(".."));

    let title = lines.next().unwrap();
    let underline = lines.next().unwrap();
    assert_eq!(title, "monerowallet");
    assert!(underline.len() >= title.len() && underline.chars().all(|c| c == '='));
}

#[test]
fn test_toctree_lists_pages_in_order() {
    assert_eq!(toctree_entries(&index()), TOC);
}

#[test]
fn test_index_references_generated_pages() {
    let doc = index();
    for reference in [":ref:`genindex`", ":ref:`modindex`", ":ref:`search`"] {
        assert!(doc.contains(reference), "missing {reference}");
    }
}

#[test]
fn test_every_toc_entry_has_a_page() {
    for page in TOC {
        let path = docs_dir().join(format!("{page}.rst"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
