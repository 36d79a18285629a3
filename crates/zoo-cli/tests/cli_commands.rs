//! Integration tests for the zoo CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PANDA_OUTPUT: &str = "\"Randle\"\n\
\"ACHOOOO, my private inner thoughts are i like deviled eggs better than bamboo\"\n";

const POKEMON_OUTPUT: &str = "\"squirtle squirt\"\n\
BaddyPokemon { primary_attack: \"punch\", size: \"small\", weight_class: \"light\", habitat: \"water\" }\n\
BaddyPokemon { primary_attack: \"watergun\", size: \"small\", weight_class: \"light\", habitat: \"water\" }\n";

fn zoo() -> Command {
    Command::cargo_bin("zoo").unwrap()
}

/// Write a defaults file into a fresh temp directory.
fn defaults_file(json: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("defaults.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// demos
// ---------------------------------------------------------------------------

#[test]
fn panda_prints_transcript() {
    zoo().arg("panda").assert().success().stdout(PANDA_OUTPUT);
}

#[test]
fn pokemon_prints_transcript() {
    zoo().arg("pokemon").assert().success().stdout(POKEMON_OUTPUT);
}

#[test]
fn no_subcommand_runs_both_demos() {
    zoo()
        .assert()
        .success()
        .stdout(format!("{PANDA_OUTPUT}{POKEMON_OUTPUT}"));
}

#[test]
fn pokemon_json_flattens_base_fields() {
    zoo()
        .args(["pokemon", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"primary_attack":"watergun","size":"small","weight_class":"light","habitat":"water"}"#,
        ));
}

#[test]
fn defaults_file_changes_omitted_attack() {
    let (_dir, path) = defaults_file(r#"{"primary_attack": "tackle"}"#);
    zoo()
        .args(["pokemon", "--defaults", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("primary_attack: \"tackle\"")
                .and(predicate::str::contains("primary_attack: \"watergun\""))
                .and(predicate::str::contains("\"punch\"").not()),
        );
}

// ---------------------------------------------------------------------------
// speak
// ---------------------------------------------------------------------------

#[test]
fn speak_without_sound_says_rawr() {
    zoo().arg("speak").assert().success().stdout("\"rawr\"\n");
}

#[test]
fn speak_passes_sound_through() {
    zoo()
        .args(["speak", "squirtle squirt"])
        .assert()
        .success()
        .stdout("\"squirtle squirt\"\n");
}

#[test]
fn speak_uses_configured_sound() {
    let (_dir, path) = defaults_file(r#"{"sound": "pika pika"}"#);
    zoo()
        .args(["speak", "--defaults", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("\"pika pika\"\n");
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_format_fails() {
    zoo()
        .args(["panda", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn missing_defaults_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    zoo()
        .args(["--defaults", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read defaults file"));
}

#[test]
fn invalid_defaults_file_fails() {
    let (_dir, path) = defaults_file(r#"{"growl": "grr"}"#);
    zoo()
        .args(["pokemon", "--defaults", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid defaults"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn fluffiness_key_is_rejected() {
    let (_dir, path) = defaults_file(r#"{"is_fluffy": false}"#);
    zoo()
        .args(["--format", "json", "--defaults", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is_fluffy"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_does_not_offer_fluffiness() {
    zoo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--defaults").and(predicate::str::contains("fluff").not()));
}

#[test]
fn verbose_logs_go_to_stderr() {
    zoo()
        .args(["panda", "--verbose"])
        .assert()
        .success()
        .stdout(PANDA_OUTPUT)
        .stderr(predicate::str::contains("running panda demo"));
}
