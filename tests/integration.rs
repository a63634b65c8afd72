use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_wsgen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- artifact generation --

#[test]
fn generates_both_artifacts() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("ws-functions.txt");
    let output = dir.path().join("ws-function-types.d.ts");

    cmd()
        .args(["-i", &fixture_path("structure.ts")])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", list.to_str().unwrap()])
        .assert()
        .success();

    assert!(list.exists());
    assert!(output.exists());
}

#[test]
fn function_list_is_sorted() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("ws-functions.txt");
    let output = dir.path().join("out.d.ts");

    cmd()
        .args(["-i", &fixture_path("structure.ts")])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", list.to_str().unwrap()])
        .assert()
        .success();

    let listed = std::fs::read_to_string(&list).unwrap();
    assert_eq!(
        listed,
        "core_group_get_groups\n\
         mod_assign_view_submission_status\n\
         tool_lp_data_for_course_competencies_page"
    );
}

#[test]
fn declaration_module_has_nested_and_flat_maps() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.d.ts");

    cmd()
        .args(["-i", &fixture_path("structure.ts")])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", dir.path().join("fns.txt").to_str().unwrap()])
        .assert()
        .success();

    let decl = std::fs::read_to_string(&output).unwrap();

    // Nested tree with doc-comment leaf keys
    assert!(decl.contains("type MoodleClientTypes = {"));
    assert!(decl.contains("/** View submission status. */ viewSubmissionStatus:"));
    assert!(decl.contains("/** Returns group details. */ getGroups:"));

    // Flattened map with quoted dotted keys
    assert!(decl.contains("type MoodleClientFlattenedTypes = {"));
    assert!(decl.contains("'core.group.getGroups':"));
    assert!(decl.contains("'mod.assign.viewSubmissionStatus':"));
    assert!(decl.contains("'tool.lp.dataForCourseCompetenciesPage':"));

    // Both reference the matched shapes through Prettify
    assert!(decl.contains(
        "(params: Prettify<MoodleClientFunctionTypes.ModAssignViewSubmissionStatusWSParams>) => \
         Promise<Prettify<MoodleClientFunctionTypes.ModAssignViewSubmissionStatusWSResponse>>"
    ));
    assert!(decl.contains("MoodleClientFunctionTypes.CoreGroupsGetGroupsWSParams"));
    assert!(decl.contains("MoodleClientFunctionTypes.DataForCourseCompetenciesPageWSResponse"));
}

#[test]
fn declaration_module_embeds_normalized_body() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.d.ts");

    cmd()
        .args(["-i", &fixture_path("structure.ts")])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", dir.path().join("fns.txt").to_str().unwrap()])
        .assert()
        .success();

    let decl = std::fs::read_to_string(&output).unwrap();

    // Inline comments promoted to block comments, export qualifiers gone.
    assert!(decl.contains("/** assign instance id */\n  assignid: number"));
    assert!(decl.contains("\ntype ModAssignViewSubmissionStatusWSParams = {"));
    assert!(!decl.contains("export type"));

    // Fixed preamble and trailing export
    assert!(decl.contains("declare namespace MoodleClientFunctionTypes {"));
    assert!(decl.contains("interface CoreWSExternalWarning {"));
    assert!(decl.contains("interface CoreWSExternalFile {"));
    assert!(decl.contains("type Prettify<T>"));
    assert!(decl.trim_end().ends_with(
        "export { MoodleClientFunctionTypes, type MoodleClientTypes, type MoodleClientFlattenedTypes };"
    ));
}

// -- idempotence --

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first_out = dir.path().join("a.d.ts");
    let first_list = dir.path().join("a.txt");
    let second_out = dir.path().join("b.d.ts");
    let second_list = dir.path().join("b.txt");

    for (out, list) in [(&first_out, &first_list), (&second_out, &second_list)] {
        cmd()
            .args(["-i", &fixture_path("structure.ts")])
            .args(["-o", out.to_str().unwrap()])
            .args(["-l", list.to_str().unwrap()])
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read(&first_out).unwrap(),
        std::fs::read(&second_out).unwrap()
    );
    assert_eq!(
        std::fs::read(&first_list).unwrap(),
        std::fs::read(&second_list).unwrap()
    );
}

// -- failure paths --

#[test]
fn ambiguous_shapes_abort_without_partial_output() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("fns.txt");
    let output = dir.path().join("out.d.ts");

    cmd()
        .args(["-i", &fixture_path("ambiguous.ts")])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", list.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one params shape"))
        .stderr(predicate::str::contains("mod_assign_view_submission_status"));

    // All-or-nothing: neither artifact may exist after a fatal error.
    assert!(!list.exists());
    assert!(!output.exists());
}

#[test]
fn unreadable_input_fails() {
    cmd()
        .args(["-i", "no-such-file.ts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
