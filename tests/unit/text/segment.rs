use super::*;

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

fn joined(runs: &[TextRun<'_>]) -> String {
    runs.iter().map(|r| r.text).collect()
}

#[test]
fn empty_phrase_list_yields_single_plain_run() {
    let runs = segment("anything at all", &[], None);
    assert_eq!(runs, vec![TextRun { text: "anything at all", style: RunStyle::Plain, phrase: None }]);
}

#[test]
fn finds_all_occurrences_of_all_phrases() {
    let text = "Print and digital. Print forever.";
    let matches = find_matches(text, &phrases(&["print", "digital"]));
    let found: Vec<_> = matches.iter().map(|m| (m.phrase, &text[m.start..m.end])).collect();
    assert_eq!(found, vec![(0, "Print"), (1, "digital"), (0, "Print")]);
}

#[test]
fn matching_is_case_insensitive() {
    let matches = find_matches("BRAZIL, brazil, Brazil", &phrases(&["Brazil"]));
    assert_eq!(matches.len(), 3);
}

#[test]
fn empty_phrase_strings_are_skipped() {
    let matches = find_matches("aaa", &phrases(&["", "a"]));
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.phrase == 1));
}

#[test]
fn per_phrase_scan_does_not_self_overlap() {
    // A second "aa" match would have to start inside the first.
    let matches = find_matches("aaa", &phrases(&["aa"]));
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].start, matches[0].end), (0, 2));
}

#[test]
fn active_phrase_gets_active_style_others_inactive() {
    let text = "From the United States to Brazil and back.";
    let runs = segment(text, &phrases(&["United States", "Brazil"]), Some(1));
    let styled: Vec<_> = runs
        .iter()
        .filter(|r| r.style != RunStyle::Plain)
        .map(|r| (r.text, r.style, r.phrase))
        .collect();
    assert_eq!(
        styled,
        vec![
            ("United States", RunStyle::Inactive, Some(0)),
            ("Brazil", RunStyle::Active, Some(1)),
        ]
    );
}

#[test]
fn no_active_phrase_marks_all_occurrences_inactive() {
    let runs = segment("alpha beta", &phrases(&["alpha", "beta"]), None);
    assert!(runs.iter().all(|r| r.style != RunStyle::Active));
    assert_eq!(runs.iter().filter(|r| r.style == RunStyle::Inactive).count(), 2);
}

#[test]
fn concatenated_runs_reproduce_the_text() {
    let text = "Based in United States, Australia and Brazil. Themes: print / digital.";
    for active in [None, Some(0), Some(1), Some(2)] {
        let runs = segment(text, &phrases(&["United States", "Australia", "Brazil"]), active);
        assert_eq!(joined(&runs), text);
    }
}

#[test]
fn round_trip_with_unicode_text() {
    let text = "Café society — naïve RÉSUMÉ reading";
    let runs = segment(text, &phrases(&["résumé", "café"]), Some(0));
    assert_eq!(joined(&runs), text);
    assert!(runs.iter().any(|r| r.text == "RÉSUMÉ" && r.style == RunStyle::Active));
    assert!(runs.iter().any(|r| r.text == "Café" && r.style == RunStyle::Inactive));
}

#[test]
fn equal_start_offsets_keep_phrase_list_order() {
    // Both phrases match at offset 0; the first-listed one is emitted first.
    let matches = find_matches("abc", &phrases(&["ab", "abc"]));
    assert_eq!(matches[0].phrase, 0);
    assert_eq!(matches[1].phrase, 1);
    assert_eq!(matches[0].start, matches[1].start);
}

#[test]
fn overlapping_matches_are_both_emitted_in_start_order() {
    // "ab" matches at 0, "bc" overlaps it starting at 1.
    let runs = segment("abc", &phrases(&["ab", "bc"]), None);
    let styled: Vec<_> = runs
        .iter()
        .filter(|r| r.style != RunStyle::Plain)
        .map(|r| r.text)
        .collect();
    assert_eq!(styled, vec!["ab", "bc"]);
}

#[test]
fn text_without_matches_is_one_plain_run() {
    let runs = segment("nothing here", &phrases(&["absent"]), Some(0));
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].style, RunStyle::Plain);
}
