use assert_cmd::Command;
use predicates::prelude::*;
use scratchpad::loader::RasterImage;
use std::path::Path;
use tempfile::TempDir;

fn scratchpad_cmd() -> Command {
    Command::cargo_bin("scratchpad").expect("binary exists")
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn scratchpad_help_prints_description() {
    scratchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing surface with a background-restoring eraser",
        ));
}

#[test]
fn no_script_prints_usage() {
    scratchpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Script commands"));
}

#[test]
fn script_replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "[canvas]\nwidth = 100\nheight = 80\n\n[brush]\nline_width = 4.0\n",
    );
    let script = temp.path().join("strokes.txt");
    std::fs::write(
        &script,
        "press 10 10\nmove 50 10\nrelease\neraser\npress 50 10\nmove 50 10\nrelease outside\n",
    )
    .unwrap();
    let output = temp.path().join("drawing.png");

    scratchpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved drawing to"));

    let image = RasterImage::open(&output).unwrap();
    assert_eq!(image.size(), (100, 80));
}

#[test]
fn border_flag_frames_output() {
    let temp = TempDir::new().unwrap();
    let config = write_config(
        temp.path(),
        "[canvas]\nwidth = 40\nheight = 30\nborder = \"2px solid red\"\n",
    );
    let script = temp.path().join("strokes.txt");
    std::fs::write(&script, "press 1 1\nmove 20 20\nrelease\n").unwrap();
    let output = temp.path().join("framed.png");

    scratchpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--border")
        .assert()
        .success();

    let image = RasterImage::open(&output).unwrap();
    assert_eq!(image.size(), (44, 34));
}

#[test]
fn bad_script_line_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "");
    let script = temp.path().join("strokes.txt");
    std::fs::write(&script, "press 1 1\nwiggle 2 2\n").unwrap();

    scratchpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn empty_line_color_fails_on_press() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "[brush]\nline_color = \"\"\n");
    let script = temp.path().join("strokes.txt");
    std::fs::write(&script, "press 1 1\nmove 5 5\n").unwrap();

    scratchpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid drawing configuration"));
}

#[test]
fn missing_background_blocks_strokes() {
    let temp = TempDir::new().unwrap();
    let config = write_config(temp.path(), "");
    let script = temp.path().join("strokes.txt");
    std::fs::write(&script, "press 1 1\n").unwrap();

    scratchpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--background")
        .arg(temp.path().join("missing.png"))
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Background failed to load"));
}
