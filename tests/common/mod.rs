#![allow(dead_code)]

use nicojson::Comment;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Build a comment object from a `json!` literal. Panics if it is not an object.
pub fn comment(v: Value) -> Comment {
    match v {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// Build a comment with only `no` and `commands` set.
pub fn with_commands(no: u64, commands: &[&str]) -> Comment {
    comment(json!({ "no": no, "commands": commands }))
}

/// Turn a `json!` array literal into comments.
pub fn comments(v: Value) -> Vec<Comment> {
    v.as_array().unwrap().iter().cloned().map(comment).collect()
}

/// Fresh temp directory that outlives the test body.
pub fn temp_dir() -> PathBuf {
    tempfile::tempdir().unwrap().into_path()
}

/// Write a raw string to `dir/name` and return the path.
pub fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, contents).unwrap();
    p
}

/// Write a JSON value to `dir/name`.
pub fn write_json(dir: &Path, name: &str, v: &Value) -> PathBuf {
    write_raw(dir, name, &serde_json::to_string(v).unwrap())
}

/// A small, realistic dump as produced by a comment extractor:
/// - c1: uploader comment (empty commands)
/// - c2: anonymous main comment ("184" among other commands), Japanese text
/// - c3: easy comment (commands without "184")
/// - c4: second anonymous main comment
/// - c5: record without a `commands` field at all (uploader)
pub fn sample_dump() -> Value {
    json!([
        { "id": "c1", "no": 1, "vposMs": 0,    "body": "ようこそ", "commands": [] },
        { "id": "c2", "no": 2, "vposMs": 1200, "body": "こんにちは", "commands": ["184", "white"] },
        { "id": "c3", "no": 3, "vposMs": 2400, "body": "easy", "commands": ["shita", "big"] },
        { "id": "c4", "no": 4, "vposMs": 3600, "body": "www", "commands": ["naka", "184"] },
        { "id": "c5", "no": 5, "vposMs": 4800, "body": "no commands" }
    ])
}

/// Read a written document back as a generic JSON value.
pub fn read_json(path: &Path) -> Value {
    let s = fs::read_to_string(path).unwrap();
    serde_json::from_str(&s).unwrap()
}

/// Collect the `id` fields of a thread's comments.
pub fn ids(thread: &Value) -> Vec<String> {
    thread["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}
