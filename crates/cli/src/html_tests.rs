// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sc_core::test_support::RecordBuilder;
use sc_core::{Check, DiffArtifacts, ResultSink};
use yare::parameterized;

#[parameterized(
    plain = { "hello", "hello" },
    angle = { "<b>", "&lt;b&gt;" },
    amp = { "a && b", "a &amp;&amp; b" },
    quotes = { "say \"hi\" 'x'", "say &quot;hi&quot; &#x27;x&#x27;" },
    empty = { "", "" },
)]
fn escapes_markup(input: &str, expected: &str) {
    assert_eq!(escape(input), expected);
}

fn page(sink: &ResultSink) -> String {
    render(&Report::new("prac<1>", "s&1", sink))
}

#[test]
fn title_names_practical_and_submission() {
    let html = page(&ResultSink::new());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>prac&lt;1&gt; - s&amp;1</title>"), "{html}");
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn rows_are_colored_by_verdict() {
    let mut sink = ResultSink::new();
    sink.push(RecordBuilder::new("good").build());
    sink.push(RecordBuilder::new("bad").exit_code(2).pass(false).build());
    let html = page(&sink);

    assert!(html.contains("<tr id=\"test1\" bgcolor=\"#BFB\">"), "{html}");
    assert!(html.contains("<tr id=\"test2\" bgcolor=\"#FBB\">"), "{html}");
    assert!(html.contains("<td>Tick</td>"));
    assert!(html.contains("<td>Cross</td>"));
    assert!(html.contains("<td>2</td>"));
}

#[test]
fn output_lines_are_escaped() {
    let mut sink = ResultSink::new();
    sink.push(
        RecordBuilder::new("t")
            .pass(false)
            .stdout("<script>alert(1)</script>\nsecond\n")
            .stderr("err & more\n")
            .build(),
    );
    let html = page(&sink);

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;<br>"), "{html}");
    assert!(html.contains("second<br>"));
    assert!(html.contains("err &amp; more<br>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn failed_compare_renders_diff_table() {
    let mut sink = ResultSink::new();
    sink.push(
        RecordBuilder::new("prog-a.out")
            .stdout("a\n<c>\n")
            .check(Check::Diff(DiffArtifacts::compare("a\nb\n", "a\n<c>\n")))
            .build(),
    );
    let html = page(&sink);

    assert!(html.contains("<table class=\"diff\">"), "{html}");
    assert!(html.contains("<tr class=\"equal\"><td>1</td><td><code>a</code></td>"));
    assert!(html.contains(
        "<tr class=\"changed\"><td>2</td><td><code>b</code></td><td>2</td><td><code>&lt;c&gt;</code></td></tr>"
    ));
}

#[test]
fn passing_compare_shows_output_lines() {
    let mut sink = ResultSink::new();
    sink.push(
        RecordBuilder::new("prog-a.out")
            .stdout("same\n")
            .check(Check::Diff(DiffArtifacts::compare("same\n", "same\n")))
            .build(),
    );
    let html = page(&sink);
    assert!(!html.contains("class=\"diff\""));
    assert!(html.contains("same<br>"));
}
