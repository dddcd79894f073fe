pub mod generative;

use smart_pretty_printer::testing::{oracular_render_pretty, oracular_render_smart};
use smart_pretty_printer::{
    layout_compact, layout_pretty, layout_smart, render_string, Doc, LayoutOptions, PageWidth,
    Width,
};

pub fn options(width: Width) -> LayoutOptions {
    LayoutOptions {
        page_width: PageWidth::available_per_line(width, 1.0),
    }
}

fn compare_lines(message: &str, expected: String, actual: String) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message, expected, actual,
        );
        assert_eq!(actual, expected);
    }
}

#[track_caller]
pub fn assert_pp(doc: &Doc, width: Width, expected_lines: &[&str]) {
    let oracle_result = oracular_render_pretty(options(width), doc);
    compare_lines(
        &format!(
            "ORACLE DISAGREES WITH TEST CASE AT WIDTH {}, SO TEST CASE MUST BE WRONG",
            width
        ),
        expected_lines.join("\n"),
        oracle_result,
    );
    let actual = render_string(&layout_pretty(options(width), doc));
    compare_lines(
        &format!("IN PRETTY PRINTING WITH WIDTH {}", width),
        expected_lines.join("\n"),
        actual,
    );
}

#[track_caller]
pub fn assert_pp_smart(doc: &Doc, width: Width, expected_lines: &[&str]) {
    let oracle_result = oracular_render_smart(options(width), doc);
    compare_lines(
        &format!(
            "SMART ORACLE DISAGREES WITH TEST CASE AT WIDTH {}, SO TEST CASE MUST BE WRONG",
            width
        ),
        expected_lines.join("\n"),
        oracle_result,
    );
    let actual = render_string(&layout_smart(options(width), doc));
    compare_lines(
        &format!("IN SMART PRINTING WITH WIDTH {}", width),
        expected_lines.join("\n"),
        actual,
    );
}

#[track_caller]
pub fn assert_pp_compact(doc: &Doc, expected_lines: &[&str]) {
    let actual = render_string(&layout_compact(doc));
    compare_lines(
        "IN COMPACT PRINTING",
        expected_lines.join("\n"),
        actual,
    );
}

/// Checks the fast layout functions against the strict oracle, without
/// pinning down what the output should be.
#[track_caller]
pub fn assert_pp_without_expectation(doc: &Doc, width: Width) {
    let oracle_result = oracular_render_pretty(options(width), doc);
    let actual = render_string(&layout_pretty(options(width), doc));
    compare_lines(
        &format!("PRETTY PRINTING DISAGREES WITH ORACLE AT WIDTH {}", width),
        oracle_result,
        actual,
    );
    let oracle_result = oracular_render_smart(options(width), doc);
    let actual = render_string(&layout_smart(options(width), doc));
    compare_lines(
        &format!("SMART PRINTING DISAGREES WITH ORACLE AT WIDTH {}", width),
        oracle_result,
        actual,
    );
}
