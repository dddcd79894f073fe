//! Constructors for documents, from single characters up to bracketed,
//! separator-punctuated sequences. Everything here bottoms out in the
//! `Doc` constructors and maintains their invariants.

use crate::doc::Doc;
use crate::flatten::{changes_upon_flattening, FlattenResult};
use crate::geometry::{Indent, Width};
use crate::page_width::PageWidth;
use std::rc::Rc;

/// The empty document.
pub fn nil<A: 'static>() -> Doc<A> {
    Doc::Empty
}

/// A document with no layout at all. Grouping a subtree that contains one
/// poisons the flat alternative, forcing the broken form.
pub fn fail<A: 'static>() -> Doc<A> {
    Doc::Fail
}

/// A single character. `'\n'` becomes a hard line break.
pub fn chr<A: 'static>(c: char) -> Doc<A> {
    if c == '\n' {
        hardline()
    } else {
        Doc::Char(c)
    }
}

/// A piece of text without newlines. For arbitrary input use [`string`].
pub fn text<A: 'static>(s: &str) -> Doc<A> {
    debug_assert!(!s.contains('\n'), "text must not contain newlines: {:?}", s);

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Doc::Empty,
        (Some(c), None) => Doc::Char(c),
        _ => Doc::Text(Rc::from(s)),
    }
}

/// Arbitrary text; newlines become hard line breaks.
pub fn string<A: 'static>(s: &str) -> Doc<A> {
    concat_with(s.split('\n').map(text), |x, y| x + hardline() + y)
}

/// A hard line break that not even [`group`] removes.
pub fn hardline<A: 'static>() -> Doc<A> {
    Doc::Line
}

/// A line break that renders as a space when flattened.
pub fn line<A: 'static>() -> Doc<A> {
    flat_alt(Doc::Line, Doc::Char(' '))
}

/// A line break that vanishes when flattened.
pub fn line_<A: 'static>() -> Doc<A> {
    flat_alt(Doc::Line, Doc::Empty)
}

/// A space that becomes a line break when the line is too full.
pub fn softline<A: Clone + 'static>() -> Doc<A> {
    group(line())
}

/// Nothing, unless the line is too full, in which case a line break.
pub fn softline_<A: Clone + 'static>() -> Doc<A> {
    group(line_())
}

/// A single space.
pub fn space<A: 'static>() -> Doc<A> {
    Doc::Char(' ')
}

/// `count` spaces.
pub fn spaces<A: 'static>(count: Indent) -> Doc<A> {
    match count {
        i if i <= 0 => Doc::Empty,
        1 => Doc::Char(' '),
        i => Doc::Text(Rc::from(" ".repeat(i as usize).as_str())),
    }
}

/// Renders as `normal` by default; [`group`] prefers `flattened` when it
/// fits. The caller must ensure `normal`'s first line is no wider than
/// `flattened`'s flattened first line.
pub fn flat_alt<A: 'static>(normal: Doc<A>, flattened: Doc<A>) -> Doc<A> {
    Doc::FlatAlt(Rc::new(normal), Rc::new(flattened))
}

/// Attaches an annotation to a subtree. The annotation survives layout as
/// a balanced pair of stream events; the string renderer ignores it.
pub fn annotate<A: 'static>(ann: A, doc: Doc<A>) -> Doc<A> {
    Doc::Annotated(ann, Rc::new(doc))
}

/// Reacts to the column the output is currently at.
pub fn column<A: 'static>(react: impl Fn(Width) -> Doc<A> + 'static) -> Doc<A> {
    Doc::Column(Rc::new(react))
}

/// Reacts to the configured page width.
pub fn with_page_width<A: 'static>(react: impl Fn(PageWidth) -> Doc<A> + 'static) -> Doc<A> {
    Doc::WithPageWidth(Rc::new(react))
}

/// Reacts to the current nesting level.
pub fn nesting<A: 'static>(react: impl Fn(Indent) -> Doc<A> + 'static) -> Doc<A> {
    Doc::Nesting(Rc::new(react))
}

/// Lays out `doc`, then passes the width of its rendering to `react`.
pub fn width<A: Clone + 'static>(
    doc: Doc<A>,
    react: impl Fn(Indent) -> Doc<A> + Clone + 'static,
) -> Doc<A> {
    column(move |start| {
        let react = react.clone();
        doc.clone() + column(move |end| react(end as Indent - start as Indent))
    })
}

/// Tries to lay the document out on a single line, keeping the original
/// layout as the fallback when the flat form does not fit or cannot exist.
pub fn group<A: Clone + 'static>(doc: Doc<A>) -> Doc<A> {
    use FlattenResult::*;

    match doc {
        // Already a choice.
        Doc::Union(_, _) => doc,
        Doc::FlatAlt(normal, preferred) => match changes_upon_flattening(&preferred) {
            Flattened(flat) => Doc::Union(Rc::new(flat), normal),
            AlreadyFlat => Doc::Union(preferred, normal),
            NeverFlat => (*normal).clone(),
        },
        other => match changes_upon_flattening(&other) {
            Flattened(flat) => Doc::Union(Rc::new(flat), Rc::new(other)),
            AlreadyFlat | NeverFlat => other,
        },
    }
}

/// Increases the indentation of all line breaks inside the document.
pub fn nest<A: 'static>(indent: Indent, doc: Doc<A>) -> Doc<A> {
    if indent == 0 {
        doc
    } else {
        Doc::Nest(indent, Rc::new(doc))
    }
}

/// Lays out the document with the nesting level set to the current column,
/// so its lines stack directly below its first character.
pub fn align<A: Clone + 'static>(doc: Doc<A>) -> Doc<A> {
    column(move |col| {
        let doc = doc.clone();
        nesting(move |level| nest(col as Indent - level, doc.clone()))
    })
}

/// Like [`nest`], but relative to the current column instead of the
/// current nesting level.
pub fn hang<A: Clone + 'static>(indent: Indent, doc: Doc<A>) -> Doc<A> {
    align(nest(indent, doc))
}

/// Indents the document by `amount` columns, starting from the current
/// column.
pub fn indent<A: Clone + 'static>(amount: Indent, doc: Doc<A>) -> Doc<A> {
    hang(amount, spaces(amount) + doc)
}

/// Wraps the document in a left and right delimiter.
pub fn enclose<A: 'static>(left: Doc<A>, right: Doc<A>, doc: Doc<A>) -> Doc<A> {
    left + doc + right
}

/// Concatenates the documents with the separator in between, enclosed in
/// `left` and `right`: all on one line when that fits, otherwise one
/// element per line with leading separators. Callers usually [`group`]
/// the result; see [`list`] and [`tupled`].
pub fn enclose_sep<A: Clone + 'static>(
    left: Doc<A>,
    right: Doc<A>,
    separator: Doc<A>,
    docs: Vec<Doc<A>>,
) -> Doc<A> {
    let mut docs = docs.into_iter();
    match (docs.next(), docs.len()) {
        (None, _) => left + right,
        (Some(only), 0) => left + only + right,
        (Some(first), _) => {
            let mut pieces = vec![left + first];
            for doc in docs {
                pieces.push(separator.clone() + doc);
            }
            cat(pieces) + right
        }
    }
}

/// List syntax: `[1, 2, 3]`, or vertical with leading commas when the
/// one-line form is too wide.
pub fn list<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    group(enclose_sep(
        flat_alt(text("[ "), text("[")),
        flat_alt(text(" ]"), text("]")),
        text(", "),
        docs,
    ))
}

/// Tuple syntax: `(1, 2, 3)`.
pub fn tupled<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    group(enclose_sep(
        flat_alt(text("( "), text("(")),
        flat_alt(text(" )"), text(")")),
        text(", "),
        docs,
    ))
}

/// Concatenates documents with a binary join function. Empty input gives
/// the empty document.
pub fn concat_with<A: 'static>(
    docs: impl IntoIterator<Item = Doc<A>>,
    join: impl Fn(Doc<A>, Doc<A>) -> Doc<A>,
) -> Doc<A> {
    let mut docs = docs.into_iter();
    match docs.next() {
        None => Doc::Empty,
        Some(first) => docs.fold(first, join),
    }
}

/// Horizontal concatenation with spaces.
pub fn hsep<A: 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + space() + y)
}

/// Vertical concatenation. [`group`]ing the result collapses the line
/// breaks to spaces.
pub fn vsep<A: 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + line() + y)
}

/// [`vsep`] that falls back to a single space-separated line when it fits.
pub fn sep<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    group(vsep(docs))
}

/// Space-separated concatenation that breaks onto new lines only where
/// needed.
pub fn fill_sep<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + softline() + y)
}

/// Plain concatenation.
pub fn hcat<A: 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + y)
}

/// Vertical concatenation that leaves no space when flattened.
pub fn vcat<A: 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + line_() + y)
}

/// [`vcat`] that collapses to one line when it fits.
pub fn cat<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    group(vcat(docs))
}

/// Concatenation that breaks onto new lines only where needed, without
/// spaces.
pub fn fill_cat<A: Clone + 'static>(docs: Vec<Doc<A>>) -> Doc<A> {
    concat_with(docs, |x, y| x + softline_() + y)
}

/// Appends the separator to every document but the last.
pub fn punctuate<A: Clone + 'static>(separator: Doc<A>, docs: Vec<Doc<A>>) -> Vec<Doc<A>> {
    let count = docs.len();
    docs.into_iter()
        .enumerate()
        .map(|(i, doc)| {
            if i + 1 == count {
                doc
            } else {
                doc + separator.clone()
            }
        })
        .collect()
}

/// Pads the document with spaces until it is `target` columns wide.
/// Documents already wider are left alone.
pub fn fill<A: Clone + 'static>(target: Indent, doc: Doc<A>) -> Doc<A> {
    width(doc, move |w| {
        if w >= target {
            Doc::Empty
        } else {
            spaces(target - w)
        }
    })
}

/// Like [`fill`], but when the document is already wider than `target`,
/// inserts a line break so whatever follows still lines up.
pub fn fill_break<A: Clone + 'static>(target: Indent, doc: Doc<A>) -> Doc<A> {
    width(doc, move |w| {
        if w > target {
            nest(target, line_())
        } else {
            spaces(target - w)
        }
    })
}

/// Splits on whitespace into one document per word.
pub fn words<A: 'static>(s: &str) -> Vec<Doc<A>> {
    s.split_whitespace().map(text).collect()
}

/// Word-wraps the text to whatever width is available.
pub fn reflow<A: Clone + 'static>(s: &str) -> Doc<A> {
    fill_sep(words(s))
}
