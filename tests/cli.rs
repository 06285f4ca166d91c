use std::path::Path;
use std::process::{Command, Output};

/// Run the binary inside `dir` with saved defaults isolated to `dir`.
fn listedit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_listedit"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("APPDATA", dir.join("config"))
        .env_remove("LISTEDIT_DEBUG_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_short_in_place_flag_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f.md"), "- a").unwrap();

    let output = listedit(dir.path(), &["f.md", "-i", "--keys", "tab"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.md")).unwrap(),
        "  - a"
    );
}

#[test]
fn test_without_in_place_prints_result() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f.md"), "- a").unwrap();

    let output = listedit(dir.path(), &["f.md", "--keys", "tab"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "  - a");
    assert_eq!(std::fs::read_to_string(dir.path().join("f.md")).unwrap(), "- a");
}

#[test]
fn test_save_with_short_flag_persists_in_place() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f.md"), "- a").unwrap();

    let output = listedit(dir.path(), &["f.md", "--save", "-i", "--keys", "tab"]);
    assert!(output.status.success());

    // The saved default applies to a later run without the flag.
    let output = listedit(dir.path(), &["f.md", "--keys", "tab"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("f.md")).unwrap(),
        "    - a"
    );
}
