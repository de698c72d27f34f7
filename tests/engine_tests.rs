use anyhow::bail;
use umm_html::{
    grade::{Check, Outcome, Rubric, Verdict, evaluate, standard_rubric, verdict},
    html::Document,
};

fn always(pass: bool, name: &str, points: u32) -> Check {
    Check::new(name, points, move |_| Ok(pass))
}

fn sample_document() -> Document {
    Document::new("<!doctype html><html><body><h1>hi</h1></body></html>".to_string())
}

#[test]
fn erroring_check_is_isolated() {
    let checks = vec![
        always(true, "first", 10),
        Check::new("poison", 20, |doc: &Document| {
            doc.select("h1[")?;
            Ok(true)
        }),
        always(true, "last", 5),
    ];
    let report = evaluate(&sample_document(), &checks);

    assert_eq!(report.results().len(), 3);
    assert!(report.results()[0].passed());
    assert!(report.results()[2].passed());

    let poison = &report.results()[1];
    assert!(!poison.passed());
    assert_eq!(poison.points_awarded(), 0);
    assert!(!poison.failure_reason().expect("reason").is_empty());

    assert_eq!(report.total_awarded(), 15);
    assert_eq!(report.total_possible(), 35);
}

#[test]
fn panicking_check_is_isolated() {
    let checks = vec![
        always(true, "first", 1),
        Check::new("panics", 1, |_: &Document| -> anyhow::Result<bool> {
            panic!("no such element")
        }),
        always(true, "last", 1),
    ];
    let report = evaluate(&sample_document(), &checks);

    let passes = report.results().iter().filter(|r| r.passed()).count();
    assert_eq!(passes, 2);
    match report.results()[1].outcome() {
        Outcome::Errored(reason) => assert!(reason.contains("no such element")),
        other => panic!("expected an errored outcome, got {other:?}"),
    }
}

#[test]
fn failing_check_has_no_reason() {
    let checks = vec![
        always(false, "nope", 10),
        Check::new("bails", 10, |_: &Document| -> anyhow::Result<bool> { bail!("bad input") }),
    ];
    let report = evaluate(&sample_document(), &checks);

    assert_eq!(report.results()[0].outcome(), &Outcome::Failed);
    assert_eq!(report.results()[0].failure_reason(), None);
    assert_eq!(report.results()[1].failure_reason(), Some("bad input"));
}

#[test]
fn results_follow_rubric_order_and_totals_hold() {
    let rubric = standard_rubric();
    let documents = [
        sample_document(),
        Document::new(String::new()),
        Document::from_source("index.html", "<img><img><img><img>".to_string()),
    ];

    for document in &documents {
        let report = rubric.evaluate(document);
        let names: Vec<&str> = report.results().iter().map(|r| r.name()).collect();
        let expected: Vec<&str> = rubric.checks().iter().map(|c| c.name()).collect();

        assert_eq!(names, expected);
        assert_eq!(report.total_possible(), rubric.total_possible());
        assert!(report.total_awarded() <= report.total_possible());
        assert_eq!(report.total_awarded() == report.total_possible(), report.all_passed());
    }
}

#[test]
fn evaluation_is_idempotent() {
    let rubric = standard_rubric();
    let document = sample_document();

    assert_eq!(rubric.evaluate(&document), rubric.evaluate(&document));
}

#[test]
fn empty_rubric_scores_zero_and_fails() {
    let rubric = Rubric::new(Vec::new());
    let report = rubric.evaluate(&sample_document());

    assert_eq!(rubric.total_possible(), 0);
    assert_eq!(report.total_awarded(), 0);
    assert_eq!(report.total_possible(), 0);
    assert!(report.results().is_empty());
    assert_eq!(verdict(&report), Verdict::Failure);
}

#[test]
fn large_point_values_total_without_overflow() {
    let checks = vec![always(true, "huge", u32::MAX), always(true, "one", 1)];
    let rubric = Rubric::new(checks.clone());
    let report = evaluate(&sample_document(), &checks);

    assert_eq!(rubric.total_possible(), u64::from(u32::MAX) + 1);
    assert_eq!(report.total_possible(), rubric.total_possible());
    assert_eq!(report.total_awarded(), report.total_possible());
    assert_eq!(verdict(&report), Verdict::Success);
}
