//! End-to-end generation tests: a template must produce exactly the folder
//! and file set it declares, for every built-in template.

use std::collections::BTreeSet;
use std::path::Path;

use tempfile::TempDir;

use lathe::catalog::Catalog;
use lathe::generator;

/// Collect every folder and file under a generated project, relative to
/// its root, skipping the `.lathe/` metadata directory.
fn collect_tree(root: &Path) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut folders = BTreeSet::new();
    let mut files = BTreeSet::new();
    collect_into(root, root, &mut folders, &mut files);
    (folders, files)
}

fn collect_into(
    root: &Path,
    dir: &Path,
    folders: &mut BTreeSet<String>,
    files: &mut BTreeSet<String>,
) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let relative = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .into_owned();
        if relative == ".lathe" {
            continue;
        }
        if path.is_dir() {
            folders.insert(relative);
            collect_into(root, &path, folders, files);
        } else {
            files.insert(relative);
        }
    }
}

#[test]
fn every_builtin_generates_exactly_its_declared_structure() {
    let catalog = Catalog::builtin();

    for template in catalog.all() {
        let temp_dir = TempDir::new().unwrap();
        let report = generator::generate(template, "proj", temp_dir.path()).unwrap();

        let (folders_on_disk, files_on_disk) = collect_tree(&report.project_root);

        // Every declared file exists, and no undeclared file was written
        let declared_files: BTreeSet<String> = template
            .structure
            .files
            .iter()
            .map(|f| f.path.clone())
            .collect();
        assert_eq!(
            files_on_disk, declared_files,
            "{}: file set mismatch",
            template.name
        );

        // Every declared folder exists; extra folders on disk only as
        // parents of declared files (e.g. "cmd" for "cmd/server/main.go")
        for folder in &template.structure.folders {
            assert!(
                folders_on_disk.contains(folder.as_str()),
                "{}: declared folder {} missing",
                template.name,
                folder
            );
        }
        for folder in &folders_on_disk {
            let declared = template.structure.folders.iter().any(|f| {
                f == folder || Path::new(f).starts_with(folder)
            });
            let file_parent = declared_files
                .iter()
                .any(|f| Path::new(f).starts_with(folder));
            assert!(
                declared || file_parent,
                "{}: undeclared folder {} on disk",
                template.name,
                folder
            );
        }

        // Report lists match the declaration in order
        assert_eq!(report.folders, template.structure.folders);
        let declared_in_order: Vec<_> = template
            .structure
            .files
            .iter()
            .map(|f| f.path.clone())
            .collect();
        assert_eq!(report.files, declared_in_order);
    }
}

#[test]
fn generated_content_has_no_unexpanded_placeholders() {
    let catalog = Catalog::builtin();

    for template in catalog.all() {
        let temp_dir = TempDir::new().unwrap();
        let report = generator::generate(template, "my-proj", temp_dir.path()).unwrap();

        for file in &report.files {
            let content = std::fs::read_to_string(report.project_root.join(file)).unwrap();
            assert!(
                !content.contains("{{name"),
                "{}: {} still contains a placeholder",
                template.name,
                file
            );
        }
    }
}

#[test]
fn generation_into_same_target_twice_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let template = catalog.get("rust-cli").unwrap();

    generator::generate(template, "proj", temp_dir.path()).unwrap();
    let second = generator::generate(template, "proj", temp_dir.path());
    assert!(second.is_err());

    // First tree untouched
    assert!(temp_dir.path().join("proj/Cargo.toml").is_file());
}

#[test]
fn invalid_name_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let template = catalog.get("rust-cli").unwrap();

    assert!(generator::generate(template, "bad name!", temp_dir.path()).is_err());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
