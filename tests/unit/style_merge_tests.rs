/*!
 * Tests for style collision detection and renaming
 */

use assmerge::document::{Document, STYLES, Section};
use assmerge::merge::merge_styles;
use assmerge::reporter::{Notice, RecordingReporter};
use crate::common;

fn styles_section(names: &[(&str, &str)]) -> Section {
    let styles: Vec<String> = names.iter().map(|(name, font)| common::style(name, font)).collect();
    let text = common::sample_ass("t", &styles, &[]);
    Document::parse(&text).get(STYLES).cloned().expect("styles section")
}

/// Test the documented Default / Default_2 scenario
#[test]
fn test_mergeStyles_withSharedDefault_shouldRenameSecondToDefault2() {
    let base = styles_section(&[("Default", "Arial")]);
    let incoming = styles_section(&[("Default", "Comic Sans"), ("Narrator", "Arial")]);
    let mut reporter = RecordingReporter::new();

    let merged = merge_styles(&base, &incoming, &mut reporter);

    assert_eq!(merged.base_styles, vec![format!("{}\n", common::style("Default", "Arial"))]);
    assert_eq!(
        merged.appended_styles,
        vec![
            format!("{}\n", common::style("Default_2", "Comic Sans")),
            format!("{}\n", common::style("Narrator", "Arial")),
        ]
    );
    assert_eq!(merged.renames.get("Default"), Some("Default_2"));
    assert_eq!(merged.renames.get("Narrator"), None);
}

/// Test that taken suffixes in the base file are skipped
#[test]
fn test_mergeStyles_withSuffixTakenInBase_shouldUseNextFreeSuffix() {
    let base = styles_section(&[("Sign", "Arial"), ("Sign_2", "Arial"), ("Sign_3", "Arial")]);
    let incoming = styles_section(&[("Sign", "Arial")]);
    let mut reporter = RecordingReporter::new();

    let merged = merge_styles(&base, &incoming, &mut reporter);

    assert_eq!(merged.renames.get("Sign"), Some("Sign_4"));
    assert_eq!(
        reporter.notices,
        vec![Notice::StyleRenamed {
            original: "Sign".to_string(),
            renamed: "Sign_4".to_string(),
        }]
    );
}

/// Known edge case: generated names are only checked against the base file.
/// A second-file style already named `X_2` is kept, and a colliding `X` is
/// renamed to `X_2` as well, leaving a duplicate among the appended styles.
#[test]
fn test_mergeStyles_withSuffixTakenInSecondFile_shouldDuplicateName() {
    let base = styles_section(&[("X", "Arial")]);
    let incoming = styles_section(&[("X_2", "Arial"), ("X", "Verdana")]);
    let mut reporter = RecordingReporter::new();

    let merged = merge_styles(&base, &incoming, &mut reporter);

    assert_eq!(
        merged.appended_styles,
        vec![
            format!("{}\n", common::style("X_2", "Arial")),
            format!("{}\n", common::style("X_2", "Verdana")),
        ]
    );
    assert_eq!(merged.renames.len(), 1);
}

/// Known edge case: a name repeated in the second file maps to one new name
#[test]
fn test_mergeStyles_withRepeatedCollidingName_shouldReuseRename() {
    let base = styles_section(&[("Default", "Arial")]);
    let incoming = styles_section(&[("Default", "Arial"), ("Default", "Verdana")]);
    let mut reporter = RecordingReporter::new();

    let merged = merge_styles(&base, &incoming, &mut reporter);

    assert_eq!(merged.renames.len(), 1);
    assert_eq!(reporter.renames(), vec![("Default", "Default_2"), ("Default", "Default_2")]);
    assert!(merged.appended_styles.iter().all(|line| line.starts_with("Style: Default_2,")));
}

/// Test that the base file's header block comes only from the first file
#[test]
fn test_mergeStyles_shouldTakeHeaderFromBaseOnly() {
    let base = Document::parse("[V4+ Styles]\n; base comment\nFormat: Name, Fontname\nStyle: A,Arial\n")
        .get(STYLES)
        .cloned()
        .expect("styles section");
    let incoming = Document::parse("[V4+ Styles]\n; other comment\nFormat: Name\nStyle: B,Arial\n")
        .get(STYLES)
        .cloned()
        .expect("styles section");
    let mut reporter = RecordingReporter::new();

    let merged = merge_styles(&base, &incoming, &mut reporter);

    assert_eq!(merged.header, vec!["[V4+ Styles]\n", "; base comment\n", "Format: Name, Fontname\n"]);
}
