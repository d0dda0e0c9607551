extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn mandelbrot() -> Command {
    Command::cargo_bin("mandelbrot").unwrap()
}

#[test]
fn help_exits_cleanly_without_rendering() {
    let dir = tempdir().unwrap();
    mandelbrot()
        .current_dir(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--height"))
        .stdout(predicate::str::contains("--file"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn renders_a_plain_pixmap() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("small");
    mandelbrot()
        .args(&["-w", "8", "-h", "6", "-i", "50", "-t", "3", "-f"])
        .arg(&stem)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! Mandelbrot image saved:"));

    let text = fs::read_to_string(dir.path().join("small.ppm")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "8 6 255");
    assert_eq!(lines.len(), 2 + 8 * 6);
    for line in &lines[2..] {
        let channels: Vec<u32> = line.split(' ').map(|c| c.parse().unwrap()).collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }
}

#[test]
fn thread_count_does_not_change_the_file() {
    let dir = tempdir().unwrap();
    for threads in &["1", "5"] {
        mandelbrot()
            .args(&["-w", "20", "-h", "15", "-i", "100", "-t", *threads, "-f"])
            .arg(dir.path().join(*threads))
            .assert()
            .success();
    }
    let one = fs::read(dir.path().join("1.ppm")).unwrap();
    let five = fs::read(dir.path().join("5.ppm")).unwrap();
    assert_eq!(one, five);
}

#[test]
fn renders_a_png() {
    let dir = tempdir().unwrap();
    mandelbrot()
        .args(&["-w", "4", "-h", "4", "-i", "20", "--format", "png", "-f"])
        .arg(dir.path().join("small"))
        .assert()
        .success();
    let bytes = fs::read(dir.path().join("small.png")).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn unwritable_destination_exits_with_one() {
    let dir = tempdir().unwrap();
    mandelbrot()
        .args(&["-w", "4", "-h", "4", "-i", "20", "-f"])
        .arg(dir.path().join("missing").join("small"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not open file"));
}

#[test]
fn single_pixel_width_is_refused() {
    mandelbrot()
        .args(&["-w", "1", "-h", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 2 and 65535"));
}
