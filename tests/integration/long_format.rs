// tests/integration/long_format.rs
use std::{fs, os::unix::fs::PermissionsExt};

use predicates::prelude::*;

use crate::common::{lsgrid, workspace};

fn stdout_of(cmd: &mut assert_cmd::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn starts_with_total_line() {
    let dir = workspace(&["a", "b"]);
    lsgrid(dir.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("total "));
}

#[test]
fn one_line_per_entry_in_listing_order() {
    let dir = workspace(&["zeta", "Alpha"]);
    let out = stdout_of(lsgrid(dir.path()).arg("-l"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(" Alpha"), "{out}");
    assert!(lines[2].ends_with(" zeta"), "{out}");
}

#[test]
fn decodes_permissions_and_special_bits() {
    let dir = workspace(&["plain", "setuid"]);
    fs::set_permissions(dir.path().join("plain"), fs::Permissions::from_mode(0o644)).unwrap();
    fs::set_permissions(dir.path().join("setuid"), fs::Permissions::from_mode(0o4755)).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::set_permissions(dir.path().join("sub"), fs::Permissions::from_mode(0o755)).unwrap();

    let out = stdout_of(lsgrid(dir.path()).arg("-l"));
    let perms: Vec<&str> = out.lines().skip(1).map(|l| &l[..10]).collect();
    assert_eq!(perms, ["-rw-r--r--", "-rwsr-xr-x", "drwxr-xr-x"], "{out}");
}

#[test]
fn sizes_are_right_aligned() {
    let dir = workspace(&[]);
    fs::write(dir.path().join("big"), vec![b'x'; 12345]).unwrap();
    fs::write(dir.path().join("small"), b"x").unwrap();

    let out = stdout_of(lsgrid(dir.path()).arg("-l"));
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert!(rows[0].contains(" 12345 "), "{out}");
    assert!(rows[1].contains("     1 "), "{out}");
    // Same column for both names.
    assert_eq!(rows[0].rfind("big"), rows[1].rfind("small"));
}

#[test]
fn all_and_reverse_combine() {
    let dir = workspace(&[".hidden", "shown"]);
    let out = stdout_of(lsgrid(dir.path()).arg("-alr"));
    let names: Vec<&str> = out.lines().skip(1).map(|l| l.rsplit(' ').next().unwrap()).collect();
    assert_eq!(names, ["shown", ".hidden", "..", "."]);
}

#[test]
fn non_utf8_names_are_described_not_dropped() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let dir = workspace(&["good"]);
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname")), b"x").unwrap();

    let out = stdout_of(lsgrid(dir.path()).arg("-l"));
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(rows.len(), 2, "{out}");
    assert!(rows[0].ends_with(" bad\u{fffd}name"), "{out}");
    assert!(rows[1].ends_with(" good"), "{out}");
}

#[test]
fn unreadable_entries_give_partial_listing() {
    // Root bypasses directory permissions.
    if uzers::get_effective_uid() == 0 {
        return;
    }
    let dir = workspace(&[]);
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret"), "x").unwrap();
    // Readable but not searchable: names list, lstat fails.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o600)).unwrap();

    lsgrid(dir.path()).arg("locked").assert().success().stdout("secret\n");
    let output = lsgrid(dir.path())
        .args(["-l", "locked"])
        .assert()
        .code(1)
        .get_output()
        .clone();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "total 0\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("lsgrid: cannot access 'locked/secret'"), "{stderr}");
}
