//! Tests for configuration file discovery.

use predicates::prelude::*;

use crate::common::TestEnvironment;

#[test]
fn test_config_flag() {
    let env = TestEnvironment::new().unwrap();
    let config = env.write_file("envexpand.toml", "format = \"export\"\n").unwrap();

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("expand")
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout("export A='1'\n");
}

#[test]
fn test_config_env_var() {
    let env = TestEnvironment::new().unwrap();
    let config = env.write_file("envexpand.toml", "format = \"json\"\n").unwrap();

    env.command()
        .env("ENVEXPAND_CONFIG", &config)
        .arg("expand")
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"A\": \"1\""));
}

#[test]
fn test_flag_beats_config_format() {
    let env = TestEnvironment::new().unwrap();
    let config = env.write_file("envexpand.toml", "format = \"json\"\n").unwrap();

    env.command()
        .arg("-c")
        .arg(&config)
        .args(["expand", "--format", "dotenv"])
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout("A=1\n");
}

#[test]
fn test_config_strict() {
    let env = TestEnvironment::new().unwrap();
    let config = env.write_file("envexpand.toml", "strict = true\n").unwrap();

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("expand")
        .write_stdin("A=${NOPE}\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("A keeps ${NOPE}"));
}

#[cfg(unix)]
#[test]
fn test_default_config_location() {
    let env = TestEnvironment::new().unwrap();
    env.write_default_config("format = \"export\"\n").unwrap();

    env.command()
        .arg("expand")
        .write_stdin("A=1\n")
        .assert()
        .success()
        .stdout("export A='1'\n");
}

#[test]
fn test_missing_explicit_config() {
    let env = TestEnvironment::new().unwrap();

    env.command()
        .args(["--config", "nowhere.toml", "expand"])
        .write_stdin("A=1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_unknown_config_key() {
    let env = TestEnvironment::new().unwrap();
    let config = env.write_file("envexpand.toml", "colour = \"red\"\n").unwrap();

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("expand")
        .write_stdin("A=1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("colour"));
}
