//! Scenario tables for detection and rendering
//!
//! Each case is a small document with the exact blocks (or ranges) it must
//! produce. Detection cases run through the full pipeline so that measurement,
//! detection and ordering are all exercised together.

use cuddle::indent::{measure_indentation, split_lines, IndentSpan};
use cuddle::render::{AnnotationKind, Range};
use cuddle::testing::{doc, lenient_settings, strict_settings};
use cuddle::{Pipeline, Settings, WholeLine};
use rstest::rstest;

fn span(column: usize, start_line: usize, end_line: usize, splits: &[usize]) -> IndentSpan {
    IndentSpan {
        column,
        start_line,
        end_line,
        splits: splits.to_vec(),
    }
}

#[rstest]
#[case::lenient_block_closes_at_end_of_document(
    &["if x:", "    a", "    b"],
    lenient_settings(),
    vec![span(0, 0, 2, &[])],
    0
)]
#[case::strict_else_without_closing_line_is_dropped(
    &["if x:", "    a", "else:", "    b"],
    strict_settings(),
    vec![],
    1
)]
#[case::strict_else_with_closing_line(
    &["if x:", "    a", "else:", "    b", "end"],
    strict_settings(),
    vec![span(0, 0, 4, &[2])],
    0
)]
#[case::elif_chain_splits_twice(
    &["if a:", "    x", "elif b:", "    y", "else:", "    z", "end"],
    strict_settings(),
    vec![span(0, 0, 6, &[2, 4])],
    0
)]
#[case::nested_blocks_sorted_by_start(
    &["def f():", "    if a:", "        x", "    end", "end"],
    strict_settings(),
    vec![span(0, 0, 4, &[]), span(4, 1, 3, &[])],
    0
)]
#[case::lenient_dedent_closes_every_deeper_block(
    &["a:", "    b:", "        c", "d"],
    lenient_settings(),
    vec![span(0, 0, 2, &[]), span(4, 1, 2, &[])],
    0
)]
#[case::strict_skipped_level_discards_inner_block(
    &["a:", "    b:", "        c", "d"],
    strict_settings(),
    vec![span(0, 0, 3, &[])],
    1
)]
#[case::strict_partial_dedent_keeps_block_open(
    &["a:", "        b", "    c", "d"],
    strict_settings(),
    vec![span(0, 0, 3, &[])],
    0
)]
#[case::comment_never_opens(
    &["// note", "    x", "y"],
    strict_settings(),
    vec![],
    0
)]
#[case::indented_blocks_keep_their_column(
    &["    if x:", "        a", "", "        b", "    end"],
    strict_settings(),
    vec![span(4, 0, 4, &[])],
    0
)]
#[case::flat_document(&["a", "b", "c"], strict_settings(), vec![], 0)]
#[case::empty_document(&[""], lenient_settings(), vec![], 0)]
fn detects_blocks(
    #[case] lines: &[&str],
    #[case] settings: Settings,
    #[case] expected: Vec<IndentSpan>,
    #[case] hanging: usize,
) {
    let analysis = Pipeline::new(settings).run(&doc(lines), 4);
    assert_eq!(analysis.spans, expected);
    assert_eq!(analysis.hanging, hanging);
}

#[rstest]
#[case::blank_between_equal_depths(&["a:", "    b", "", "    c", "d"], vec![0, 4, 4, 4, 0])]
#[case::blank_before_shallower_line(&["a:", "    b", "", "c"], vec![0, 4, 4, 0])]
#[case::blank_before_deeper_line(&["a:", "", "    b"], vec![0, 4, 4])]
#[case::trailing_blanks_keep_depth(&["a:", "    b", "", ""], vec![0, 4, 4, 4])]
#[case::whitespace_only_counts_as_blank(&["a", "      ", "b"], vec![0, 0, 0])]
fn measures_blank_lines_from_their_neighbours(#[case] lines: &[&str], #[case] expected: Vec<usize>) {
    let table = measure_indentation(&split_lines(&doc(lines)), 4);
    assert_eq!(table.as_slice(), expected.as_slice());
}

#[rstest]
#[case(WholeLine::Never, [(0, 2), (0, 4), (0, 3)])]
#[case(WholeLine::End, [(0, 2), (0, 4), (0, 11)])]
#[case(WholeLine::EndAndMiddle, [(0, 2), (0, 5), (0, 11)])]
#[case(WholeLine::Always, [(0, 5), (0, 5), (0, 11)])]
fn whole_line_policy_picks_arm_ranges(#[case] policy: WholeLine, #[case] expected: [(usize, usize); 3]) {
    let mut settings = strict_settings();
    settings.display.highlight_whole_line = policy;
    let text = doc(&["if x:", "    a", "else:", "    b", "end  # done"]);

    let analysis = Pipeline::new(settings).run(&text, 4);
    let arms: Vec<Range> = analysis
        .annotations
        .iter()
        .filter(|a| a.kind == AnnotationKind::Arm)
        .map(|a| a.range)
        .collect();

    let expected: Vec<Range> = expected
        .iter()
        .zip([0, 2, 4])
        .map(|(&(start, end), line)| Range::on_line(line, start, end))
        .collect();
    assert_eq!(arms, expected);
}

#[rstest]
#[case::connectors_enabled(true, 2)]
#[case::connectors_disabled(false, 0)]
fn connecting_lines_toggle_bars(#[case] draw: bool, #[case] bars: usize) {
    let mut settings = strict_settings();
    settings.display.draw_connecting_lines = draw;
    let analysis = Pipeline::new(settings).run("if x:\n    a\n    b\nend", 4);

    let groups = analysis.groups();
    assert_eq!(groups.level(1).of_kind(AnnotationKind::Bar).len(), bars);
    assert_eq!(groups.level(1).of_kind(AnnotationKind::Arm).len(), 2);
}

#[test]
fn style_levels_cycle_after_twelve_blocks() {
    let text: String = (0..13).map(|i| format!("block{i}:\n    body\nend\n")).collect();
    let analysis = Pipeline::default().run(&text, 4);
    assert_eq!(analysis.spans.len(), 13);

    let start_levels: Vec<usize> = analysis
        .spans
        .iter()
        .map(|span| {
            analysis
                .annotations
                .iter()
                .find(|a| a.kind == AnnotationKind::Arm && a.line() == span.start_line)
                .map(|a| a.level)
                .expect("every block has a start arm")
        })
        .collect();

    assert_eq!(start_levels, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 1]);
}

#[test]
fn delimiters_extend_arm_to_matching_closer() {
    let mut settings = strict_settings();
    settings.display.delimiters = vec!["()".to_string(), "[]".to_string()];
    let analysis = Pipeline::new(settings).run("(let (x 1)) rest\n    x\n)", 4);

    assert_eq!(analysis.annotations[0].range, Range::on_line(0, 0, 10));
}

#[test]
fn hover_quotes_the_opening_line() {
    let analysis = Pipeline::default().run("  if ready:\n      go()\n  end", 4);
    let end = analysis.annotations.last().expect("end arm");

    assert_eq!(end.kind, AnnotationKind::Arm);
    assert_eq!(end.hover.as_deref(), Some("Line 1: if ready:"));
}
