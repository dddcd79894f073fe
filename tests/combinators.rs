#[allow(unused)] // Not actually unused
mod common;

use common::assert_pp;
use smart_pretty_printer::{
    align, cat, enclose, enclose_sep, fill, fill_break, fill_cat, fill_sep, hcat, hsep, indent,
    line, list, punctuate, reflow, sep, text, tupled, vcat, vsep, words, Doc,
};

#[test]
fn hsep_spaces_documents() {
    let doc: Doc = hsep(words("lorem ipsum dolor sit"));
    assert_pp(&doc, 80, &["lorem ipsum dolor sit"]);
    // hsep never breaks, even when the line is too narrow.
    assert_pp(&doc, 5, &["lorem ipsum dolor sit"]);
}

#[test]
fn vsep_stacks_documents() {
    let doc: Doc = text("prefix") + vsep(words("text to lay out"));
    assert_pp(&doc, 80, &["prefixtext", "to", "lay", "out"]);
}

#[test]
fn sep_collapses_when_it_fits() {
    let doc: Doc = sep(words("text to lay out"));
    assert_pp(&doc, 80, &["text to lay out"]);
    assert_pp(&doc, 10, &["text", "to", "lay", "out"]);
}

#[test]
fn fill_sep_breaks_only_where_needed() {
    let doc: Doc = fill_sep(words("lorem ipsum dolor sit amet"));
    assert_pp(&doc, 80, &["lorem ipsum dolor sit amet"]);
    assert_pp(&doc, 11, &["lorem ipsum", "dolor sit", "amet"]);
}

#[test]
fn hcat_concatenates() {
    let doc: Doc = hcat(words("lorem ipsum"));
    assert_pp(&doc, 80, &["loremipsum"]);
}

#[test]
fn vcat_leaves_no_space_when_grouped() {
    let doc: Doc = vcat(words("lorem ipsum"));
    assert_pp(&doc, 80, &["lorem", "ipsum"]);

    let doc: Doc = cat(words("lorem ipsum"));
    assert_pp(&doc, 80, &["loremipsum"]);
    assert_pp(&doc, 7, &["lorem", "ipsum"]);
}

#[test]
fn fill_cat_packs_without_spaces() {
    let doc: Doc = fill_cat(words("aa bb cc dd"));
    assert_pp(&doc, 80, &["aabbccdd"]);
    assert_pp(&doc, 4, &["aabb", "ccdd"]);
}

#[test]
fn punctuate_commas() {
    let doc: Doc = hsep(punctuate(text(","), words("lorem ipsum dolor")));
    assert_pp(&doc, 80, &["lorem, ipsum, dolor"]);

    let doc: Doc = vsep(punctuate(text(","), words("lorem ipsum dolor")));
    assert_pp(&doc, 80, &["lorem,", "ipsum,", "dolor"]);
}

#[test]
fn enclose_wraps() {
    let doc: Doc = enclose(text("("), text(")"), text("x"));
    assert_pp(&doc, 80, &["(x)"]);
}

#[test]
fn enclose_sep_trivial_cases() {
    let doc: Doc = enclose_sep(text("["), text("]"), text(", "), vec![]);
    assert_pp(&doc, 80, &["[]"]);

    let doc: Doc = enclose_sep(text("["), text("]"), text(", "), vec![text("1")]);
    assert_pp(&doc, 80, &["[1]"]);
}

#[test]
fn list_trivial_cases() {
    let doc: Doc = list(vec![]);
    assert_pp(&doc, 80, &["[]"]);

    let doc: Doc = list(vec![text("1")]);
    assert_pp(&doc, 80, &["[1]"]);
}

#[test]
fn tupled_layouts() {
    let doc: Doc = tupled(vec![text("1"), text("20"), text("300")]);
    assert_pp(&doc, 80, &["(1, 20, 300)"]);
    assert_pp(&doc, 8, &["( 1", ", 20", ", 300 )"]);
}

#[test]
fn align_stacks_below_the_first_character() {
    let doc: Doc = text("lorem ") + align(vsep(words("ipsum dolor")));
    assert_pp(&doc, 80, &["lorem ipsum", "      dolor"]);
}

#[test]
fn indent_pads_and_hangs() {
    let doc: Doc = text("prefix ") + indent(4, reflow("The indent function indents these words!"));
    assert_pp(
        &doc,
        24,
        &[
            "prefix     The indent",
            "           function",
            "           indents these",
            "           words!",
        ],
    );
}

#[test]
fn fill_pads_to_width() {
    let types = [
        ("empty", "Doc"),
        ("nest", "Int -> Doc -> Doc"),
        ("fillSep", "[Doc] -> Doc"),
    ];
    let signatures = types
        .iter()
        .map(|(name, ty)| fill(5, text(name)) + text(" :: ") + text(ty))
        .collect::<Vec<_>>();
    let doc: Doc = text("let ") + align(vsep(signatures));
    assert_pp(
        &doc,
        80,
        &[
            "let empty :: Doc",
            "    nest  :: Int -> Doc -> Doc",
            "    fillSep :: [Doc] -> Doc",
        ],
    );
}

#[test]
fn fill_break_breaks_overlong_entries() {
    let types = [
        ("empty", "Doc"),
        ("nest", "Int -> Doc -> Doc"),
        ("fillSep", "[Doc] -> Doc"),
    ];
    let signatures = types
        .iter()
        .map(|(name, ty)| fill_break(5, text(name)) + text(" :: ") + text(ty))
        .collect::<Vec<_>>();
    let doc: Doc = text("let ") + align(vsep(signatures));
    assert_pp(
        &doc,
        80,
        &[
            "let empty :: Doc",
            "    nest  :: Int -> Doc -> Doc",
            "    fillSep",
            "          :: [Doc] -> Doc",
        ],
    );
}

#[test]
fn reflow_wraps_words() {
    let doc: Doc = reflow("Lorem ipsum dolor sit amet, consectetur adipisicing elit");
    assert_pp(
        &doc,
        32,
        &[
            "Lorem ipsum dolor sit amet,",
            "consectetur adipisicing elit",
        ],
    );
}

#[test]
fn grouped_line_inside_vsep_stays_broken() {
    let doc: Doc = sep(vec![text("a") + line() + text("b"), text("c")]);
    assert_pp(&doc, 80, &["a b c"]);
    assert_pp(&doc, 2, &["a", "b", "c"]);
}
