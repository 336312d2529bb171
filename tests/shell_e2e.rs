#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn phonebook_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn read_book(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_add_persists_to_file() {
    let temp = TempDir::new().unwrap();
    let book = temp.path().join("book.json");

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("2\njohn\nsmith\n+79998887766\n01.01.2000\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: John Smith"));

    let value = read_book(&book);
    assert_eq!(value["John Smith"]["phone"], "89998887766");
    assert_eq!(value["John Smith"]["date_of_birth"], "01.01.2000");
}

#[test]
fn test_contacts_survive_restart() {
    let temp = TempDir::new().unwrap();
    let book = temp.path().join("book.json");

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("2\nJohn\nSmith\n89998887766\n\nquit\n")
        .assert()
        .success();

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("4\n2\nSmith\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith: 89998887766 \n"));
}

#[test]
fn test_uses_data_dir_from_env() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(temp.path())
        .write_stdin("2\nJane\nDoe\n81112223344\n\nquit\n")
        .assert()
        .success();

    let value = read_book(&temp.path().join("contacts.json"));
    assert_eq!(value["Jane Doe"]["phone"], "81112223344");
}

#[test]
fn test_corrupt_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let book = temp.path().join("book.json");
    fs::write(&book, "this is not json").unwrap();

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone book is empty."));
}

#[test]
fn test_rename_and_delete() {
    let temp = TempDir::new().unwrap();
    let book = temp.path().join("book.json");
    fs::write(
        &book,
        r#"{"John Smith": {"phone": "89998887766", "date_of_birth": ""}}"#,
    )
    .unwrap();

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("5\nJohn\nSmith\n1\nJohnny\nquit\n")
        .assert()
        .success();

    let value = read_book(&book);
    assert!(value.get("John Smith").is_none());
    assert_eq!(value["Johnny Smith"]["phone"], "89998887766");

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("3\nJohnny\nSmith\n3\nJohnny\nSmith\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted: Johnny Smith"))
        .stdout(predicate::str::contains("Contact not found: Johnny Smith"));

    assert_eq!(read_book(&book), serde_json::json!({}));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    phonebook_cmd(temp.path())
        .write_stdin("2\nJohn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."));

    assert!(!temp.path().join("contacts.json").exists());
}

#[test]
fn test_unwritable_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    // a directory where the contacts file should be
    let book = temp.path().join("book.json");
    fs::create_dir(&book).unwrap();

    phonebook_cmd(temp.path())
        .arg("--file")
        .arg(&book)
        .write_stdin("2\nJohn\nSmith\n89998887766\n\nquit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}
