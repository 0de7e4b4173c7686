//! Build script that checks every file an index template loads from its own
//! directory is present in the matching asset folder.
//!
//! `templates/<name>.html` is served next to the files in `assets/<name>/`.
//! Upstream UI files are vendored by `scripts/vendor-ui.sh`; when any are
//! missing the build warns, or fails if `DOCMOUNT_REQUIRE_VENDORED` is set.
//! With everything present, `docmount_vendored` is enabled for the crate.

use std::fs;
use std::path::Path;

const DIR_MARKER: &str = "../SERVANT_SWAGGER_UI_DIR/";

fn main() {
    let templates = Path::new("templates");
    let assets = Path::new("assets");

    println!("cargo::rerun-if-changed=templates/");
    println!("cargo::rerun-if-changed=assets/");
    println!("cargo::rerun-if-env-changed=DOCMOUNT_REQUIRE_VENDORED");
    println!("cargo::rustc-check-cfg=cfg(docmount_vendored)");

    let mut missing = Vec::new();

    for entry in fs::read_dir(templates).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let name = path.file_stem().unwrap().to_str().unwrap().to_string();
        let template = fs::read_to_string(&path).unwrap();

        for file in referenced_files(&template) {
            if !assets.join(&name).join(&file).is_file() {
                missing.push(format!("assets/{}/{}", name, file));
            }
        }
    }

    if missing.is_empty() {
        println!("cargo::rustc-cfg=docmount_vendored");
        return;
    }

    if std::env::var_os("DOCMOUNT_REQUIRE_VENDORED").is_some() {
        panic!(
            "missing vendored UI files (run scripts/vendor-ui.sh): {}",
            missing.join(", ")
        );
    }

    for file in &missing {
        println!(
            "cargo::warning={} is not vendored, run scripts/vendor-ui.sh",
            file
        );
    }
}

fn referenced_files(template: &str) -> Vec<String> {
    template
        .match_indices(DIR_MARKER)
        .map(|(at, _)| {
            let rest = &template[at + DIR_MARKER.len()..];
            let end = rest
                .find(|c: char| matches!(c, '"' | '\'' | '>' | ')' | '?' | '#') || c.is_whitespace())
                .unwrap_or(rest.len());
            rest[..end].to_string()
        })
        .filter(|file| !file.is_empty())
        .collect()
}
