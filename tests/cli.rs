use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODEL_JL: &str = "\
# F is the right-hand side of the SIR model
function F(du,u,p,t)
    # du receives the derivatives
    # u is the current state
    du[1] = -p[1]*u[1]*u[2]
end
";

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn infoextract() -> Command {
    Command::cargo_bin("infoextract").unwrap()
}

#[test]
fn markdown_command_writes_text_files() {
    let tmp = TempDir::new().unwrap();
    let chapters = tmp.path().join("_chapters");
    let out = tmp.path().join("output_txt");
    write(
        &chapters.join("sir/index.md"),
        "# SIR\n\nSusceptible, infected, recovered.\n\n```julia\nusing OrdinaryDiffEq\n```\n",
    );

    infoextract()
        .current_dir(tmp.path())
        .arg("markdown")
        .arg("--chapters")
        .arg(&chapters)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("sir__index.md.txt"));

    let text = fs::read_to_string(out.join("sir__index.md.txt")).unwrap();
    assert!(text.contains("Susceptible, infected, recovered."));
    assert!(!text.contains("OrdinaryDiffEq"));
}

#[test]
fn markdown_command_reads_config_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp.path().join("book/ch1/intro.md"), "Intro text.\n");
    write(
        &tmp.path().join("infoextract.toml"),
        "chapters_path = \"book\"\nout_path = \"txt\"\n",
    );

    infoextract()
        .current_dir(tmp.path())
        .args(["-o", "json", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hash\""));

    assert!(tmp.path().join("txt/ch1__intro.md.txt").is_file());
}

#[test]
fn markdown_command_rejects_missing_directory() {
    let tmp = TempDir::new().unwrap();

    infoextract()
        .current_dir(tmp.path())
        .args(["markdown", "--chapters", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid directory"));
}

#[test]
fn associate_command_prints_mapping() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("model.jl");
    write(&source, MODEL_JL);

    infoextract()
        .current_dir(tmp.path())
        .arg("associate")
        .arg(&source)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"F\":")
                .and(predicate::str::contains("\"du\":"))
                .and(predicate::str::contains("    # u is the current state")),
        );
}

#[test]
fn associate_command_json_output() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("model.jl");
    write(&source, MODEL_JL);

    let output = infoextract()
        .current_dir(tmp.path())
        .args(["--format", "json", "associate"])
        .arg(&source)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["du"][0], "    # du receives the derivatives");
    assert_eq!(value["u"][0], "    # u is the current state");
    assert!(value.get("p").is_none());
}

#[test]
fn associate_command_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    infoextract()
        .current_dir(tmp.path())
        .args(["associate", "missing.jl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn config_init_then_show() {
    let tmp = TempDir::new().unwrap();

    infoextract()
        .current_dir(tmp.path())
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(tmp.path().join("infoextract.toml").is_file());

    infoextract()
        .current_dir(tmp.path())
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chapters_path").and(predicate::str::contains("markdown_extension")));
}
