//! End-to-end tests of the `rsa` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn rsa(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rsa"))
        .args(args)
        .env_remove("RSA_LOG")
        .output()
        .expect("failed to run rsa")
}

fn write_key(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn encrypt_textbook_key() {
    let dir = tempfile::tempdir().unwrap();
    let key = write_key(dir.path(), "key.pub", "e 17\nn 3233\n");

    let out = rsa(&["encrypt", key.as_str(), "A"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"2790");
}

#[test]
fn decrypt_textbook_key() {
    let dir = tempfile::tempdir().unwrap();
    let key = write_key(dir.path(), "key.priv", "d 2753\ne 17\nn 3233\n");

    let out = rsa(&["decrypt", key.as_str(), "2790"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"A");
}

#[test]
fn decrypt_zero_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let key = write_key(dir.path(), "key.priv", "d 2753\ne 17\nn 3233\n");

    let out = rsa(&["decrypt", key.as_str(), "0"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn genkey_encrypt_decrypt() {
    let dir = tempfile::tempdir().unwrap();

    let out = rsa(&["genkey", "512"]);
    assert!(out.status.success());
    let private = String::from_utf8(out.stdout).unwrap();
    assert!(private.starts_with("d "));
    assert!(private.contains("\ne 65537\n"));

    let public: String = private
        .lines()
        .filter(|line| !line.starts_with("d "))
        .map(|line| format!("{line}\n"))
        .collect();
    let private = write_key(dir.path(), "key.priv", &private);
    let public = write_key(dir.path(), "key.pub", &public);

    let out = rsa(&["encrypt", public.as_str(), "hello world"]);
    assert!(out.status.success());
    let ciphertext = String::from_utf8(out.stdout).unwrap();
    assert!(ciphertext.bytes().all(|b| b.is_ascii_digit()));

    let out = rsa(&["decrypt", private.as_str(), ciphertext.as_str()]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"hello world");

    // A public key cannot decrypt.
    let out = rsa(&["decrypt", public.as_str(), ciphertext.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_key_files_exit_1() {
    let dir = tempfile::tempdir().unwrap();
    let duplicate = write_key(dir.path(), "dup", "e 17\ne 17\nn 3233\n");
    let missing = dir.path().join("missing");
    let missing = missing.to_str().unwrap();

    for args in [
        ["encrypt", duplicate.as_str(), "A"],
        ["encrypt", missing, "A"],
        ["decrypt", missing, "2790"],
    ] {
        let out = rsa(&args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
        assert!(!out.stderr.is_empty(), "{args:?}");
    }
}

#[test]
fn bad_ciphertext_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let key = write_key(dir.path(), "key.priv", "d 2753\ne 17\nn 3233\n");

    for ciphertext in ["not-a-number", "2_790", "+2790", "-2790", ""] {
        let out = rsa(&["decrypt", key.as_str(), ciphertext]);
        assert_eq!(out.status.code(), Some(1), "{ciphertext:?}");
        assert!(out.stdout.is_empty(), "{ciphertext:?}");
    }
}

#[test]
fn bad_bit_length_exits_1() {
    let out = rsa(&["genkey", "100"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn help_goes_to_stdout() {
    for flag in ["-h", "--help", "help"] {
        let out = rsa(&[flag]);
        assert!(out.status.success(), "{flag}");
        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.contains("Usage"), "{flag}");
        assert!(stdout.contains("genkey"), "{flag}");
    }
}

#[test]
fn misuse_goes_to_stderr() {
    let cases: [&[&str]; 5] = [
        &[],
        &["frobnicate"],
        &["encrypt", "key"],
        &["genkey"],
        &["genkey", "512", "extra"],
    ];
    for args in cases {
        let out = rsa(args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
        assert!(!out.stderr.is_empty(), "{args:?}");
    }
}
