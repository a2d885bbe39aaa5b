#[path = "common/mod.rs"]
mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;

fn nicojson() -> Command {
    let mut cmd = Command::cargo_bin("nicojson").unwrap();
    cmd.env_remove("NICOJSON_THREAD_ID");
    cmd
}

/// Successful run: exit 0, confirmation on stdout, document on disk.
#[test]
fn converts_and_confirms() {
    let dir = temp_dir();
    let input = write_json(&dir, "in.json", &sample_dump());
    let output = dir.join("out.json");

    nicojson()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("converted:"));

    let v = read_json(&output);
    assert_eq!(v["data"]["globalComments"][0]["id"], "1693580826");
    assert_eq!(v["data"]["threads"].as_array().unwrap().len(), 3);
}

/// Missing input file: exit 1 with a message on stderr.
#[test]
fn missing_input_exits_1() {
    let dir = temp_dir();
    nicojson()
        .arg(dir.join("missing.json"))
        .arg(dir.join("out.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    assert!(!dir.join("out.json").exists());
}

/// Invalid JSON: exit 1, no output written.
#[test]
fn invalid_json_exits_1() {
    let dir = temp_dir();
    let input = write_raw(&dir, "in.json", "[{]");
    nicojson()
        .arg(&input)
        .arg(dir.join("out.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
    assert!(!dir.join("out.json").exists());
}

/// Thread id can come from the flag or the environment.
#[test]
fn thread_id_flag_and_env() {
    let dir = temp_dir();
    let input = write_json(&dir, "in.json", &sample_dump());

    let out_flag = dir.join("flag.json");
    nicojson().arg(&input).arg(&out_flag).args(["--thread-id", "777"]).assert().success();
    assert_eq!(read_json(&out_flag)["data"]["threads"][0]["id"], "777");

    let out_env = dir.join("env.json");
    nicojson().env("NICOJSON_THREAD_ID", "888").arg(&input).arg(&out_env).assert().success();
    assert_eq!(read_json(&out_env)["data"]["globalComments"][0]["id"], "888");
}

/// Wrong argument count exits 1 like any other failure; --help still exits 0.
#[test]
fn requires_two_paths() {
    nicojson().assert().code(1);
    nicojson().arg("only-one.json").assert().code(1).stderr(predicate::str::contains("OUTPUT"));
    nicojson().arg("--help").assert().success();
}
