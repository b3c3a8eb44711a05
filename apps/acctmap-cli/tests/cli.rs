use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BIN: &str = "resolve-aws-account";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aws-accounts-mapping.json")
}

/// An installed action: `<root>/bin/resolve-aws-account` next to
/// `<root>/mappings/`.
struct Action {
    root: TempDir,
}

impl Action {
    fn new() -> Self {
        // Under the target dir so the binary can be hard-linked rather than
        // copied; a freshly written executable can fail with ETXTBSY.
        let root = TempDir::new_in(env!("CARGO_TARGET_TMPDIR")).unwrap();
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();

        let built = assert_cmd::cargo::cargo_bin(BIN);
        let installed = bin_dir.join(BIN);
        if fs::hard_link(&built, &installed).is_err() {
            fs::copy(&built, &installed).unwrap();
        }

        Self { root }
    }

    fn with_fixture() -> Self {
        let action = Self::new();
        action.write_mapping(&fs::read_to_string(fixture()).unwrap());
        action
    }

    fn with_mapping(contents: &str) -> Self {
        let action = Self::new();
        action.write_mapping(contents);
        action
    }

    fn write_mapping(&self, contents: &str) {
        let dir = self.root.path().join("mappings");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("aws-accounts-mapping.json"), contents).unwrap();
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(self.root.path().join("bin").join(BIN));
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn resolve(&self, tower: &str, environment: &str) -> assert_cmd::assert::Assert {
        self.command().args([tower, environment]).assert()
    }
}

#[test]
fn test_prints_account_id_only() {
    Action::with_fixture()
        .resolve("ops", "prod")
        .success()
        .stdout("123456789012\n")
        .stderr(predicate::str::contains("resolving AWS account"))
        .stderr(predicate::str::contains("mappings/aws-accounts-mapping.json"));
}

#[test]
fn test_every_present_pair_resolves() {
    let action = Action::with_fixture();
    for (tower, environment, account_id) in [
        ("ops", "prod", "123456789012"),
        ("ops", "dev", "210987654321"),
        ("data", "prod", "555555555555"),
    ] {
        action
            .resolve(tower, environment)
            .success()
            .stdout(format!("{account_id}\n"));
    }
}

#[test]
fn test_repeated_invocations_are_identical() {
    let action = Action::with_fixture();
    let first = action.resolve("data", "prod").success();
    let second = action.resolve("data", "prod").success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn test_unknown_environment() {
    Action::with_fixture()
        .resolve("ops", "staging")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("::error title=LookupError::"))
        .stderr(predicate::str::contains("'ops'"))
        .stderr(predicate::str::contains("'staging'"));
}

#[test]
fn test_unknown_tower() {
    Action::with_fixture()
        .resolve("finance", "prod")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("'finance'").and(predicate::str::contains("'prod'")));
}

#[test]
fn test_empty_account_id() {
    Action::with_fixture()
        .resolve("ops", "sandbox")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("::error title=EmptyValueError::"))
        .stderr(predicate::str::contains("account_id is empty"));
}

#[test]
fn test_malformed_mapping() {
    Action::with_mapping("{ \"ops\": { \"prod\": ")
        .resolve("ops", "prod")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("::error title=ParseError::"))
        .stderr(predicate::str::contains("Invalid JSON"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_missing_mapping() {
    Action::new()
        .resolve("ops", "prod")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("::error title=NotFoundError::"))
        .stderr(predicate::str::contains("Mapping file not found"));
}

#[test]
fn test_wrong_argument_count() {
    let action = Action::with_fixture();
    for args in [
        vec![],
        vec!["ops"],
        vec!["--help"],
        vec!["--version"],
        vec!["ops", "prod", "extra"],
    ] {
        action
            .command()
            .args(&args)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains(
                "::error title=UsageError::Usage: resolve-aws-account <tower> <environment>",
            ));
    }
}

#[test]
fn test_flag_like_arguments_are_looked_up() {
    let action = Action::with_mapping(
        r#"{"ops": {"-h": {"account_id": "111111111111"}}, "-x": {"prod": {"account_id": "333333333333"}}}"#,
    );

    action
        .resolve("ops", "-h")
        .success()
        .stdout("111111111111\n");
    action
        .resolve("-x", "prod")
        .success()
        .stdout("333333333333\n");
    action
        .resolve("ops", "--help")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("::error title=LookupError::"))
        .stderr(predicate::str::contains("'--help'"));
}

#[test]
fn test_multiline_key_keeps_error_on_one_line() {
    let output = Action::with_fixture()
        .resolve("ops\nprod", "50%")
        .code(1)
        .stdout("")
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    let error_lines: Vec<&str> = stderr
        .lines()
        .filter(|line| line.starts_with("::error"))
        .collect();
    assert_eq!(
        error_lines,
        vec![
            "::error title=LookupError::No mapping found for tower 'ops%0Aprod' and environment '50%25'"
        ]
    );
}
