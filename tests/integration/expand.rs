//! Tests for the `expand` command.

use predicates::prelude::*;

use crate::common::TestEnvironment;

#[test]
fn test_expand_file() {
    let env = TestEnvironment::new().unwrap();
    let file = env
        .write_file(".env", "A=1\nB=${A}2\n# comment\n\nC=${B}${MISSING}\n")
        .unwrap();

    env.command()
        .arg("expand")
        .arg(&file)
        .assert()
        .success()
        .stdout("A=1\nB=12\nC=12${MISSING}\n");
}

#[test]
fn test_expand_stdin() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .arg("expand")
        .write_stdin("B=${A}/bin\nA=/opt\n")
        .assert()
        .success()
        .stdout("A=/opt\nB=/opt/bin\n");

    env.command()
        .args(["expand", "-"])
        .write_stdin("X=${X}\n")
        .assert()
        .success()
        .stdout("X=${X}\n");
}

#[test]
fn test_later_file_overrides_earlier() {
    let env = TestEnvironment::new().unwrap();
    env.write_file("base.env", "HOST=localhost\nURL=http://${HOST}:${PORT}\nPORT=80\n").unwrap();
    env.write_file("local.env", "HOST=example.com\n").unwrap();

    env.command()
        .args(["expand", "base.env", "local.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL=http://example.com:80\n"))
        .stdout(predicate::str::contains("HOST=example.com\n"));
}

#[test]
fn test_cycle_left_literal() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .arg("expand")
        .write_stdin("A=C${B}\nB=C${A}\n")
        .assert()
        .success()
        .stdout("A=CC${A}\nB=C${A}\n");
}

#[test]
fn test_json_format() {
    let env = TestEnvironment::new().unwrap();

    let output = env
        .command()
        .args(["expand", "--format", "json"])
        .write_stdin("USER=app\nDSN=pg://${USER}@db\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["DSN"], "pg://app@db");
    assert_eq!(parsed["USER"], "app");
}

#[test]
fn test_export_format() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["expand", "-f", "export"])
        .write_stdin("NAME=it's\nGREETING=hi ${NAME}\n")
        .assert()
        .success()
        .stdout("export GREETING='hi it'\\''s'\nexport NAME='it'\\''s'\n");
}

#[test]
fn test_invalid_format() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["expand", "--format", "yaml"])
        .write_stdin("A=1\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format 'yaml'"))
        .stderr(predicate::str::contains("dotenv, json, export"));
}

#[test]
fn test_malformed_line() {
    let env = TestEnvironment::new().unwrap();
    let file = env.write_file("bad.env", "A=1\nnot a pair\n").unwrap();

    env.command()
        .arg("expand")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed line 2: 'not a pair'"));
}

#[test]
fn test_empty_key() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .arg("expand")
        .write_stdin("=value\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty variable name on line 1"));
}

#[test]
fn test_missing_file() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["expand", "does-not-exist.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_strict_warns_on_stderr() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["expand", "--strict"])
        .write_stdin("A=${MISSING}\nS=${S}\n")
        .assert()
        .success()
        .stdout("A=${MISSING}\nS=${S}\n")
        .stderr(predicate::str::contains("warning: A keeps ${MISSING} (unknown variable)"))
        .stderr(predicate::str::contains("warning: S keeps ${S} (self-reference)"));
}

#[test]
fn test_process_environment_seed() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["expand", "--env", "--format", "json"])
        .env("ENVEXPAND_TEST_HOST", "db.internal")
        .write_stdin("URL=pg://${ENVEXPAND_TEST_HOST}/app\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"URL\": \"pg://db.internal/app\""));

    env.command()
        .arg("expand")
        .env("ENVEXPAND_TEST_HOST", "db.internal")
        .write_stdin("URL=pg://${ENVEXPAND_TEST_HOST}/app\n")
        .assert()
        .success()
        .stdout("URL=pg://${ENVEXPAND_TEST_HOST}/app\n");
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let env = TestEnvironment::new().unwrap();
    let file = env.write_file("vars.env", "A=1\nB=${A}\n").unwrap();

    env.command()
        .args(["--verbose", "expand"])
        .arg(&file)
        .assert()
        .success()
        .stdout("A=1\nB=1\n")
        .stderr(predicate::str::contains("Loaded 2 variables"));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    let env = TestEnvironment::new().unwrap();

    env.command().args(["--verbose", "--quiet", "expand"]).assert().failure();
}
