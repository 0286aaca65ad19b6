use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_MODULES: [&str; 6] =
    ["command", "event", "model", "reducer", "state", "view"];

#[test]
fn given_widgets_dir_when_validating_registry_then_every_widget_is_declared() {
    let widgets_dir = widgets_dir();
    let mod_rs = widgets_dir.join("mod.rs");
    let mut violations: Vec<String> = Vec::new();

    let file = parse(&mod_rs);
    let mut declared = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: widget '{}' must be declared as pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let on_disk: BTreeSet<String> = widget_dirs(&widgets_dir)
        .iter()
        .map(|dir| file_stem(dir))
        .collect();

    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {declared:?} do not match directories {on_disk:?}",
            mod_rs.display()
        ));
    }

    assert_no_violations(violations);
}

#[test]
fn given_each_widget_when_validating_layout_then_required_modules_exist() {
    let mut violations: Vec<String> = Vec::new();

    for dir in widget_dirs(&widgets_dir()) {
        validate_widget_root(&dir, &mut violations);
    }

    assert_no_violations(violations);
}

#[test]
fn given_widget_sources_when_scanning_imports_then_no_globs_are_used() {
    let mut violations: Vec<String> = Vec::new();

    for dir in widget_dirs(&widgets_dir()) {
        for path in rust_files(&dir) {
            let file = parse(&path);
            for item in &file.items {
                if let Item::Use(item_use) = item {
                    if use_tree_has_glob(&item_use.tree) {
                        violations.push(format!(
                            "{}: wildcard use/import is forbidden",
                            path.display()
                        ));
                    }
                }
            }
        }
    }

    assert_no_violations(violations);
}

#[test]
fn given_widget_views_when_validating_then_each_exposes_one_view_and_props() {
    let mut violations: Vec<String> = Vec::new();

    for dir in widget_dirs(&widgets_dir()) {
        let view_dir = dir.join("view");
        for path in rust_files(&view_dir) {
            if path.file_name().is_some_and(|name| name == "mod.rs") {
                continue;
            }
            validate_view_file(&path, &mut violations);
        }
    }

    assert_no_violations(violations);
}

fn validate_widget_root(dir: &Path, violations: &mut Vec<String>) {
    let mod_rs = dir.join("mod.rs");
    let file = parse(&mod_rs);
    let widget_name = format!("{}Widget", snake_to_pascal_case(&file_stem(dir)));

    let mut public_modules = BTreeSet::new();
    let mut has_widget_struct = false;
    for item in &file.items {
        match item {
            Item::Mod(item_mod) => {
                let name = item_mod.ident.to_string();
                if is_pub_crate(&item_mod.vis) {
                    public_modules.insert(name.clone());
                }
                let as_file = dir.join(format!("{name}.rs"));
                let as_dir = dir.join(&name).join("mod.rs");
                if !as_file.is_file() && !as_dir.is_file() {
                    violations.push(format!(
                        "{}: module '{name}' has no source file",
                        mod_rs.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                if item_struct.ident == widget_name
                    && is_pub_crate(&item_struct.vis)
                {
                    has_widget_struct = true;
                }
            },
            _ => {},
        }
    }

    for required in REQUIRED_WIDGET_MODULES {
        if !public_modules.contains(required) {
            violations.push(format!(
                "{}: missing pub(crate) mod {required};",
                mod_rs.display()
            ));
        }
    }

    if !has_widget_struct {
        violations.push(format!(
            "{}: expected pub(crate) struct {widget_name}",
            mod_rs.display()
        ));
    }
}

fn validate_view_file(path: &Path, violations: &mut Vec<String>) {
    let source = read(path);
    let file = parse(path);
    let expected_prefix = snake_to_pascal_case(&file_stem(path));

    for forbidden in ["log::", "std::fs::", "tokio::", "Task::", "iced::Task"]
    {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                path.display()
            ));
        }
    }
}

fn widgets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/widgets")
}

fn widget_dirs(widgets_dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });

    let mut dirs: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return files;
    };

    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    files.sort();
    files
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

fn assert_no_violations(violations: Vec<String>) {
    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}
