// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON and HTML reports

use crate::prelude::*;

fn mixed_project() -> Project {
    let project = Project::empty();
    project
        .script("test1.sh", "exit 0")
        .script("test2.sh", "echo '<oops>'; exit 3")
        .script("prog.sh", "echo 42")
        .file("answer.out", "41\n");
    project
}

#[test]
#[serial]
fn json_report_describes_every_record() {
    let project = mixed_project();
    let run = cli().args(&["-o", "json", "--id", "s007"]).arg_path(&project.root()).fails();
    let report = run.json();

    assert_eq!(report["practical"], "prac1");
    assert_eq!(report["submission_id"], "s007");
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["summary"]["failed"], 2);

    let names: Vec<&str> = report["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    similar_asserts::assert_eq!(names, vec!["test1", "test2", "prog-answer.out"]);
    assert_eq!(report["records"][1]["exit_code"], 3);
    assert_eq!(report["records"][2]["check"]["kind"], "diff");
    assert!(report["warnings"].as_array().unwrap().is_empty());
}

#[test]
#[serial]
fn html_report_is_written() {
    let project = mixed_project();
    let html_path = project.path().join("report.html");

    cli()
        .args(&["--id", "s007", "--html"])
        .arg_path(&html_path)
        .arg_path(&project.root())
        .fails();

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("<title>prac1 - s007</title>"), "{html}");
    assert!(html.contains("bgcolor=\"#BFB\""));
    assert!(html.contains("bgcolor=\"#FBB\""));
    assert!(html.contains("&lt;oops&gt;<br>"), "{html}");
    assert!(html.contains("<table class=\"diff\">"));
}

#[test]
#[serial]
fn unwritable_html_path_exits_two() {
    let project = mixed_project();
    let html_path = project.path().join("missing-dir").join("report.html");

    cli()
        .args(&["--html"])
        .arg_path(&html_path)
        .arg_path(&project.root())
        .errors()
        .stderr_has("cannot write HTML report");
}
