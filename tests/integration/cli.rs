use crate::helpers::prelude::*;

#[test]
fn it_prints_usage_without_a_project_name() {
    let dir = tempdir().build();

    binary()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: create-fastapi-app <project-name>",
        ));

    assert!(dir.snapshot("").is_empty());
}

#[test]
fn it_names_its_own_binary_in_the_usage_line() {
    let dir = tempdir().build();

    binary_src()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: create-fastapi-app-src <project-name>",
        ));

    assert!(dir.snapshot("").is_empty());
}

#[test]
fn it_treats_an_empty_name_as_missing() {
    let dir = tempdir().build();

    binary()
        .arg_name("")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert!(dir.snapshot("").is_empty());
}

#[test]
fn it_shows_help() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--overwrite")
                .and(predicate::str::contains("--destination"))
                .and(predicate::str::contains("[PROJECT_NAME]")),
        );
}

#[test]
fn it_generates_below_the_destination() {
    let cwd = tempdir().build();
    let target = tempdir().dir("workspace").build();

    binary()
        .arg_name("demo")
        .arg_destination(target.path().join("workspace"))
        .current_dir(cwd.path())
        .assert()
        .success();

    assert!(target.exists("workspace/demo/app/main.py"));
    assert!(cwd.snapshot("").is_empty());
}

#[test]
fn it_logs_the_destination_when_verbose() {
    let dir = tempdir().build();

    binary()
        .arg_name("demo")
        .flag_verbose()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Destination:"));
}

#[test]
fn it_reports_io_failures_as_errors() {
    // a plain file named like the project makes removal fail
    let dir = tempdir().file("demo", "not a directory").build();

    binary()
        .arg_name("demo")
        .flag_overwrite()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert_eq!(dir.read("demo"), "not a directory");
}

#[test]
fn it_keeps_reporting_when_rust_log_is_quiet() {
    let dir = tempdir().file("taken/notes.txt", "keep me").build();

    binary()
        .env("RUST_LOG", "warn")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Usage: create-fastapi-app <project-name>",
        ));

    binary()
        .env("RUST_LOG", "error")
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Created: ")
                .and(predicate::str::contains("✅ FastAPI project created in demo/")),
        );

    binary()
        .env("RUST_LOG", "warn")
        .arg_name("taken")
        .current_dir(dir.path())
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Aborted."));
}

#[test]
fn it_accepts_a_project_name_starting_with_a_hyphen() {
    let dir = tempdir().build();

    binary()
        .arg("-demo")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ FastAPI project created in -demo/"));

    assert!(dir.exists("-demo/app/main.py"));
    assert!(dir.read("-demo/README.md").starts_with("# -demo\n"));
}
