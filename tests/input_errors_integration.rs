use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDir {
    root: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let root = unique_temp_dir(prefix);
        fs::create_dir_all(&root).expect("create temp dir");
        Self { root }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("write dependency file");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn run_pkgdeps(args: &[&str]) -> Output {
    Command::new(pkgdeps_bin())
        .args(args)
        .env_remove("PKGDEPS_STRATEGY")
        .env_remove("PKGDEPS_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run pkgdeps")
}

fn run_with_file(path: &Path, packages: &[&str]) -> Output {
    let path = path.to_str().expect("utf-8 temp path");
    let mut args = vec![path];
    args.extend_from_slice(packages);
    run_pkgdeps(&args)
}

/// Asserts a failed run with no stdout and returns stderr.
fn expect_failure(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit code 1\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );
    assert!(stdout.is_empty(), "no output expected on failure, got:\n{stdout}");
    stderr
}

fn pkgdeps_bin() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_pkgdeps") {
        return PathBuf::from(path);
    }

    let current_exe = std::env::current_exe().expect("resolve current test binary path");
    let target_dir = current_exe
        .parent()
        .and_then(|path| path.parent())
        .expect("derive cargo target dir from test binary path");
    let bin_name = if cfg!(windows) {
        "pkgdeps.exe"
    } else {
        "pkgdeps"
    };
    let fallback = target_dir.join(bin_name);

    if fallback.is_file() {
        fallback
    } else {
        panic!(
            "CARGO_BIN_EXE_pkgdeps is not set and fallback binary not found at {}",
            fallback.display()
        );
    }
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos();
    let pid = std::process::id();
    std::env::temp_dir().join(format!("pkgdeps-{prefix}-{pid}-{nanos}"))
}

#[test]
fn no_arguments_prints_usage() {
    let stderr = expect_failure(&run_pkgdeps(&[]));
    assert!(stderr.contains("usage: pkgdeps"), "stderr:\n{stderr}");
}

#[test]
fn invalid_query_name_fails_before_loading_the_file() {
    let stderr = expect_failure(&run_pkgdeps(&["/nonexistent/deps.txt", "gui", "swingui#"]));
    assert!(
        stderr.contains("the package name \"swingui#\" is not valid"),
        "stderr:\n{stderr}"
    );
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let dir = TempDir::new("missing");
    let path = dir.root.join("does-not-exist.txt");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("is not valid"), "stderr:\n{stderr}");
    assert!(stderr.contains("does-not-exist.txt"), "stderr:\n{stderr}");
}

#[test]
fn self_dependency_fails_with_line_details() {
    let dir = TempDir::new("self-dep");
    let path = dir.write("deps.txt", "gui -> awtui\n\nfoo -> bar foo\n");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("cannot depend on itself"), "stderr:\n{stderr}");
    assert!(stderr.contains("\"foo -> bar foo\""), "stderr:\n{stderr}");
    assert!(stderr.contains("line number: 3"), "stderr:\n{stderr}");
}

#[test]
fn reversed_separator_fails() {
    let dir = TempDir::new("separator");
    let path = dir.write("deps.txt", "foo <- bar\n");
    let stderr = expect_failure(&run_with_file(&path, &["foo"]));
    assert!(stderr.contains("separator"), "stderr:\n{stderr}");
    assert!(stderr.contains("line number: 1"), "stderr:\n{stderr}");
}

#[test]
fn missing_source_package_fails() {
    let dir = TempDir::new("missing-source");
    let path = dir.write("deps.txt", "gui -> awtui\n-> runner\n");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("separator"), "stderr:\n{stderr}");
    assert!(stderr.contains("line number: 2"), "stderr:\n{stderr}");
}

#[test]
fn invalid_dependency_name_fails() {
    let dir = TempDir::new("bad-name");
    let path = dir.write("deps.txt", "gui -> awt.ui\n");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("\"awt.ui\""), "stderr:\n{stderr}");
}

#[test]
fn single_token_line_fails() {
    let dir = TempDir::new("one-token");
    let path = dir.write("deps.txt", "gui\n");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("less than two"), "stderr:\n{stderr}");
}

#[test]
fn whitespace_only_line_fails() {
    let dir = TempDir::new("whitespace-line");
    let path = dir.write("deps.txt", "gui -> awtui\n \t \n");
    let stderr = expect_failure(&run_with_file(&path, &["gui"]));
    assert!(stderr.contains("less than two"), "stderr:\n{stderr}");
    assert!(stderr.contains("line number: 2"), "stderr:\n{stderr}");
}

#[test]
fn one_bad_line_suppresses_all_output() {
    let dir = TempDir::new("bad-tail");
    let mut content = String::new();
    for i in 0..500 {
        content.push_str(&format!("p{i} -> p{}\n", i + 1));
    }
    content.push_str("broken -> broken\n");
    let path = dir.write("deps.txt", &content);
    let stderr = expect_failure(&run_with_file(&path, &["p0"]));
    assert!(stderr.contains("line number: 501"), "stderr:\n{stderr}");
}
