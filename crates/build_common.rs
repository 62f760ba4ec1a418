// Shared build script helpers for turning a crate README into rustdoc.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Rewrite a crate's README.md so its links resolve inside rustdoc and
/// write the result to `$OUT_DIR/README_GENERATED.md`.
///
/// Rewrites:
/// 1. `](src/foo/mod.rs)` becomes `](foo/mod)` so intra-doc links hit modules
/// 2. Links to the workspace README are flattened to their label, since
///    rustdoc has no page to point them at
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let rustdoc_content = flatten_workspace_links(
        &content.replace("](src/", "](").replace(".rs)", ")"),
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}

/// Replace `[label](../../README.md)` with `label`.
fn flatten_workspace_links(content: &str) -> String {
    const TARGET: &str = "](../../README.md)";

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(end) = rest.find(TARGET) {
        let head = &rest[..end];
        match head.rfind('[') {
            Some(start) => {
                out.push_str(&head[..start]);
                out.push_str(&head[start + 1..]);
            }
            None => out.push_str(head),
        }
        rest = &rest[end + TARGET.len()..];
    }
    out.push_str(rest);
    out
}
