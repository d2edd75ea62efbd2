use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_help_works() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_no_subcommand_fails() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires a subcommand"));
}

#[test]
fn test_one_subcommand_help() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("summary")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--require-groups"));
}

#[test]
fn test_summary() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .arg("--precision")
        .arg("2")
        .write_stdin("Facebook 10\nTwitter 4\nFacebook 20\nTwitter 2\nTwitter 3\nTwitter 1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Groups = 2; Samples = 6\n"))
        .stdout(predicate::str::contains(
            "\n[Facebook] min=10.00 q1=12.50 median=15.00 q3=17.50 max=20.00\n",
        ))
        .stdout(predicate::str::contains(
            "\n[Twitter ] min=1.00 q1=1.75 median=2.50 q3=3.25 max=4.00\n",
        ));
}

#[test]
fn test_summary_keeps_first_seen_order() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .arg("-p")
        .arg("0")
        .write_stdin("B 1\nA 2\nB 3\nC 4\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)\\[B\\].*\\[A\\].*\\[C\\]").unwrap());
}

#[test]
fn test_summary_without_data() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .write_stdin("nothing\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No data to process"));
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .arg("--require-groups")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no groups to summarize"));
}

#[test]
fn test_summary_invalid_value() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--verbose")
        .arg("--color")
        .arg("no")
        .arg("summary")
        .write_stdin("a 1\nb foo\na 3\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot parse float"))
        .stderr(predicate::str::contains(
            "record 1 has an invalid value (not a number)",
        ));
}

#[test]
fn test_summary_invalid_value_names_the_input() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .write_stdin("a 1\nb 2\nc 1e999x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value '1e999x' in group 'c'"))
        .stderr(predicate::str::contains("record 2 has an invalid value"));
}

#[test]
fn test_summary_skips_invalid_utf8_lines() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .arg("-p")
        .arg("1")
        .write_stdin(&b"x 5\n\xff\xfe bad\ny 2\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groups = 2; Samples = 2"))
        .stderr(predicate::str::contains("valid UTF-8"));
}

#[test]
fn test_summary_with_named_fields() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    match NamedTempFile::new() {
        Ok(ref mut file) => {
            writeln!(file, "Platform,PostType,Likes").unwrap();
            writeln!(file, "Instagram,Image,100").unwrap();
            writeln!(file, "Instagram,Video,300").unwrap();
            writeln!(file, "LinkedIn,Image,50").unwrap();
            cmd.arg("--color")
                .arg("no")
                .arg("summary")
                .arg(file.path().to_str().unwrap())
                .arg("--regex")
                .arg("^(?P<Platform>[^,]+),(?P<PostType>[^,]+),(?P<Likes>[0-9.]+)$")
                .arg("--key")
                .arg("Platform")
                .arg("--value")
                .arg("Likes")
                .arg("-p")
                .arg("1")
                .assert()
                .success()
                .stdout(predicate::str::contains("Groups = 2; Samples = 3\n"))
                .stdout(predicate::str::contains(
                    "[Instagram] min=100.0 q1=150.0 median=200.0 q3=250.0 max=300.0\n",
                ))
                .stdout(predicate::str::contains(
                    "[LinkedIn ] min=50.0 q1=50.0 median=50.0 q3=50.0 max=50.0\n",
                ))
                .stdout(predicate::str::contains("Platform,").not());
        }
        Err(_) => panic!("Could not create temp file"),
    }
}

#[test]
fn test_keys() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("keys")
        .arg("--regex")
        .arg("^(?P<Platform>[^,]+),(?P<Likes>\\d+)$")
        .arg("--key")
        .arg("Platform")
        .write_stdin("Platform,Likes\nInstagram,1\nTwitter,2\nInstagram,3\n")
        .assert()
        .success()
        .stdout("[Instagram] 2\n[Twitter  ] 1\n");
}

#[test]
fn test_bad_input() {
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("summary")
        .arg("--regex")
        .arg("(unclosed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse regex"));
    let mut cmd = Command::cargo_bin("boxstats").unwrap();
    cmd.arg("--color")
        .arg("no")
        .arg("keys")
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open /this/path/does/not/exist"));
}
