//! End-to-end checks of the scoring and aggregation pipeline through the
//! public library API.

mod common;

use common::{script_text, ScriptFixture};
use pretty_assertions::assert_eq;
use scriptsent::analysis::report::ReportOptions;
use scriptsent::analysis::Annotation;
use scriptsent::pipeline::{analyze_files, load_inputs, score};
use scriptsent::{
    most_negative, most_positive, stats, AnalysisSettings, CharacterScoreIndex, CharacterStats,
    Error,
};

fn settings(characters: &[&str]) -> AnalysisSettings {
    let mut settings = AnalysisSettings::default();
    settings.report = ReportOptions {
        main_characters: characters.iter().map(|c| c.to_string()).collect(),
        compare: None,
        min_polar_lines: 0,
        window_size: 3,
        annotations: Vec::new(),
    };
    settings
}

#[test]
fn test_luke_lines_with_two_positive_words() {
    let fixture = ScriptFixture::new(&script_text(&[
        ("LUKE", "I have a good feeling, there is hope."),
        ("LUKE", "Brave words. Good."),
        ("LUKE", "Love is good!"),
    ]));

    let inputs = load_inputs(fixture.paths(), '|').unwrap();
    let scored = score(inputs, &settings(&["LUKE"]));
    assert_eq!(scored.sentiments(), vec![2, 2, 2]);

    let index = CharacterScoreIndex::build(&scored);
    assert_eq!(
        stats(&index, "LUKE").unwrap(),
        CharacterStats {
            character: "LUKE".to_string(),
            min: 2,
            avg: 2.0,
            max: 2,
        }
    );
}

#[test]
fn test_stats_average_rounds_to_three_places() {
    let fixture = ScriptFixture::new(&script_text(&[
        ("LUKE", "good"),
        ("LUKE", "bad"),
        ("LUKE", "good hope"),
    ]));

    let report = analyze_files(fixture.paths(), &settings(&["LUKE"])).unwrap();
    assert_eq!(report.character_stats[0].avg, 0.667);
}

#[test]
fn test_zero_baseline_quirk_for_extremes() {
    // Scores -3, -1, 0, 2
    let fixture = ScriptFixture::new(&script_text(&[
        ("VADER", "bad fear terrible"),
        ("VADER", "doomed"),
        ("TARKIN", "Evacuate?"),
        ("LEIA", "good hope"),
    ]));
    let scored = score(
        load_inputs(fixture.paths(), '|').unwrap(),
        &settings(&[]),
    );
    assert_eq!(scored.sentiments(), vec![-3, -1, 0, 2]);
    assert_eq!(most_positive(&scored).map(|l| l.sentiment), Some(2));
    assert_eq!(most_negative(&scored).map(|l| l.sentiment), Some(-3));

    // Scores -3, -1, -2: the positive search reports nothing at all
    let fixture = ScriptFixture::new(&script_text(&[
        ("VADER", "bad fear terrible"),
        ("VADER", "doomed"),
        ("VADER", "bad fear"),
    ]));
    let scored = score(
        load_inputs(fixture.paths(), '|').unwrap(),
        &settings(&[]),
    );
    assert_eq!(scored.sentiments(), vec![-3, -1, -2]);
    assert!(most_positive(&scored).is_none());
}

#[test]
fn test_word_in_both_lexicons_scores_positive() {
    let fixture = ScriptFixture::new(&script_text(&[("HAN SOLO", "Super.")]));
    let scored = score(load_inputs(fixture.paths(), '|').unwrap(), &settings(&[]));
    assert_eq!(scored.sentiments(), vec![1]);
}

#[test]
fn test_contractions_merge_before_lookup() {
    let fixture = ScriptFixture::with_lexicons(
        &script_text(&[("C3PO", "Don't worry. We're doomed!")]),
        "dont\n",
        "doomed\n",
    );
    let scored = score(load_inputs(fixture.paths(), '|').unwrap(), &settings(&[]));
    assert_eq!(scored.sentiments(), vec![0]);
}

#[test]
fn test_report_views_follow_script_order() {
    let fixture = ScriptFixture::new(&script_text(&[
        ("LEIA", "hope"),
        ("LUKE", "bad"),
        ("LEIA", "fear"),
        ("LUKE", "good good"),
        ("C3PO", "We're doomed."),
    ]));
    let mut settings = settings(&["LUKE", "LEIA"]);
    settings.report.compare = Some(("LEIA".to_string(), "LUKE".to_string()));
    settings.report.annotations = vec![Annotation::new(2, "Detention Block")];

    let report = analyze_files(fixture.paths(), &settings).unwrap();

    let names: Vec<&str> = report
        .character_stats
        .iter()
        .map(|s| s.character.as_str())
        .collect();
    assert_eq!(names, vec!["LUKE", "LEIA"]);
    assert_eq!(report.comparison[0].scores, vec![1, -1]);
    assert_eq!(report.comparison[1].scores, vec![-1, 2]);

    // window 3 at index 2 covers indices 1..4: (-1 - 1 + 2) / 3
    assert_eq!(report.trend.annotations[0].value, Some(0.0));
    assert_eq!(report.trend.values.len(), 5);

    let polar: Vec<&str> = report
        .polarity
        .iter()
        .map(|p| p.character.as_str())
        .collect();
    assert_eq!(polar, vec!["LEIA", "LUKE", "C3PO"]);
}

#[test]
fn test_unknown_character_in_report_is_fatal() {
    let fixture = ScriptFixture::new(&script_text(&[("LEIA", "hope")]));
    let err = analyze_files(fixture.paths(), &settings(&["CHEWBACCA"])).unwrap_err();
    assert!(matches!(err, Error::UnknownCharacter(ref name) if name == "CHEWBACCA"));
}

#[test]
fn test_extra_field_is_fatal() {
    let fixture = ScriptFixture::new("line_number|character|dialogue\n1|LUKE|Hi|there\n");
    let err = analyze_files(fixture.paths(), &settings(&[])).unwrap_err();
    assert!(matches!(err, Error::ColumnCount { line: 2, .. }));
}

#[test]
fn test_missing_script_is_fatal() {
    let fixture = ScriptFixture::new("");
    std::fs::remove_file(&fixture.script).unwrap();
    let err = analyze_files(fixture.paths(), &settings(&[])).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
}
