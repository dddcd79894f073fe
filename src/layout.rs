//! The Wadler/Leijen layout engine: turns a `Doc` into a `SimpleDocStream`
//! by resolving every `Union` with a fitting predicate.

use crate::doc::Doc;
use crate::geometry::{str_width, Indent, Width};
use crate::infra::span;
use crate::page_width::{remaining_width, PageWidth};
use crate::stream::{SimpleDocStream, StreamTail};
use std::rc::Rc;

/// Options for the width-aware layout functions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutOptions {
    pub page_width: PageWidth,
}

/// The engine's explicit work list: a stack of `(nesting, document)`
/// frames, plus markers that emit the closing event of an annotated
/// region once its subtree is done.
///
/// Keeping this stack explicit (instead of recursing through every `Cat`
/// and `Nest`) bounds the engine's native recursion to one level per
/// `Union` alternative.
pub enum LayoutPipeline<A: 'static = ()> {
    /// Nothing left to lay out.
    Nil,
    /// Lay out the document at the given nesting level, then continue.
    Cons(Indent, Rc<Doc<A>>, Rc<LayoutPipeline<A>>),
    /// Emit an annotation-closing event, then continue.
    UndoAnn(Rc<LayoutPipeline<A>>),
}

/// Decides whether a prospective stream (the flat branch of a `Union`) is
/// an acceptable layout. Arguments: the nesting level of the line the
/// `Union` starts on, the current column, the indentation of the
/// alternative's first line break (if its first line is all text), and the
/// prospective stream itself.
pub type FittingPredicate<A> =
    Rc<dyn Fn(Indent, Width, Option<Width>, &SimpleDocStream<A>) -> bool>;

struct LayoutEnv<A: 'static> {
    page_width: PageWidth,
    fits: FittingPredicate<A>,
}

/// The generic Wadler/Leijen layout algorithm, parameterised by the
/// fitting predicate that picks between `Union` branches.
///
/// The discarded branch of a `Union` is never materialised beyond the
/// prefix the predicate examined: every emitted event carries its
/// successor as a deferred, memoised computation.
pub fn layout_wadler_leijen<A: Clone + 'static>(
    fits: FittingPredicate<A>,
    page_width: PageWidth,
    doc: &Doc<A>,
) -> SimpleDocStream<A> {
    span!("layout");

    let env = Rc::new(LayoutEnv { page_width, fits });
    let pipeline = Rc::new(LayoutPipeline::Cons(
        0,
        Rc::new(doc.clone()),
        Rc::new(LayoutPipeline::Nil),
    ));
    best(&env, 0, 0, pipeline)
}

/// One step of layout: dispatch on the head of the pipeline. Emitting
/// variants return a stream node whose tail re-enters `best` lazily;
/// structural variants rewrite the pipeline and loop.
fn best<A: Clone + 'static>(
    env: &Rc<LayoutEnv<A>>,
    nesting: Indent,
    column: Width,
    mut pipeline: Rc<LayoutPipeline<A>>,
) -> SimpleDocStream<A> {
    use Doc::*;
    use SimpleDocStream as Stream;

    loop {
        let (indent, doc, rest) = match &*pipeline {
            LayoutPipeline::Nil => return Stream::Empty,
            LayoutPipeline::UndoAnn(rest) => {
                let env = Rc::clone(env);
                let rest = Rc::clone(rest);
                return Stream::AnnPop(StreamTail::defer(move || {
                    best(&env, nesting, column, rest)
                }));
            }
            LayoutPipeline::Cons(indent, doc, rest) => {
                (*indent, Rc::clone(doc), Rc::clone(rest))
            }
        };

        match &*doc {
            Fail => return Stream::Fail,
            Empty => pipeline = rest,
            Char(c) => {
                let env = Rc::clone(env);
                let c = *c;
                return Stream::Char(
                    c,
                    StreamTail::defer(move || best(&env, nesting, column + 1, rest)),
                );
            }
            Text(t) => {
                let env = Rc::clone(env);
                let t = Rc::clone(t);
                let width = str_width(&t);
                return Stream::Text(
                    t,
                    StreamTail::defer(move || best(&env, nesting, column + width, rest)),
                );
            }
            Line => {
                let env = Rc::clone(env);
                let tail = StreamTail::defer(move || {
                    best(&env, indent, indent.max(0) as Width, rest)
                });
                // Lines that hold nothing get no trailing indentation.
                let line_indent = match tail.force() {
                    Stream::Empty | Stream::Line(_, _) => 0,
                    _ => indent.max(0) as Width,
                };
                return Stream::Line(line_indent, tail);
            }
            // Flattening is `group`'s job; the engine always takes the
            // normal branch.
            FlatAlt(x, _) => {
                pipeline = Rc::new(LayoutPipeline::Cons(indent, Rc::clone(x), rest));
            }
            Cat(x, y) => {
                let rest = Rc::new(LayoutPipeline::Cons(indent, Rc::clone(y), rest));
                pipeline = Rc::new(LayoutPipeline::Cons(indent, Rc::clone(x), rest));
            }
            Nest(j, x) => {
                pipeline = Rc::new(LayoutPipeline::Cons(indent + j, Rc::clone(x), rest));
            }
            Union(x, y) => {
                let sx = best(
                    env,
                    nesting,
                    column,
                    Rc::new(LayoutPipeline::Cons(indent, Rc::clone(x), Rc::clone(&rest))),
                );
                let sy = best(
                    env,
                    nesting,
                    column,
                    Rc::new(LayoutPipeline::Cons(indent, Rc::clone(y), rest)),
                );
                return select_nicer(env, nesting, column, sx, sy);
            }
            Column(f) => {
                pipeline = Rc::new(LayoutPipeline::Cons(indent, Rc::new(f(column)), rest));
            }
            WithPageWidth(f) => {
                pipeline = Rc::new(LayoutPipeline::Cons(
                    indent,
                    Rc::new(f(env.page_width)),
                    rest,
                ));
            }
            Nesting(f) => {
                pipeline = Rc::new(LayoutPipeline::Cons(indent, Rc::new(f(indent)), rest));
            }
            Annotated(a, x) => {
                let env = Rc::clone(env);
                let a = a.clone();
                let inner = Rc::new(LayoutPipeline::Cons(
                    indent,
                    Rc::clone(x),
                    Rc::new(LayoutPipeline::UndoAnn(rest)),
                ));
                return Stream::AnnPush(
                    a,
                    StreamTail::defer(move || best(&env, nesting, column, inner)),
                );
            }
        }
    }
}

/// Picks the first stream if the predicate accepts it, the second
/// otherwise. Sound because of the `Union` invariant: the first branch is
/// never narrower than the second.
fn select_nicer<A: Clone + 'static>(
    env: &LayoutEnv<A>,
    nesting: Indent,
    column: Width,
    x: SimpleDocStream<A>,
    y: SimpleDocStream<A>,
) -> SimpleDocStream<A> {
    if (env.fits)(nesting, column, initial_indentation(&y), &x) {
        x
    } else {
        y
    }
}

/// The indentation of the stream's first line break, provided its first
/// line holds nothing but text and annotation events.
fn initial_indentation<A>(stream: &SimpleDocStream<A>) -> Option<Width> {
    use SimpleDocStream::*;

    let mut node = stream;
    loop {
        match node {
            Line(i, _) => return Some(*i),
            Char(_, tail) | Text(_, tail) | AnnPush(_, tail) | AnnPop(tail) => {
                node = tail.force()
            }
            Fail | Empty => return None,
        }
    }
}

/// Layout with no width constraint: the flat branch of every `Union` is
/// taken unless it fails outright.
pub fn layout_unbounded<A: Clone + 'static>(doc: &Doc<A>) -> SimpleDocStream<A> {
    let fits: FittingPredicate<A> =
        Rc::new(|_, _, _, stream| !fails_on_first_line(stream));
    layout_wadler_leijen(fits, PageWidth::Unbounded, doc)
}

fn fails_on_first_line<A>(stream: &SimpleDocStream<A>) -> bool {
    use SimpleDocStream::*;

    let mut node = stream;
    loop {
        match node {
            Fail => return true,
            Empty | Line(_, _) => return false,
            Char(_, tail) | Text(_, tail) | AnnPush(_, tail) | AnnPop(tail) => {
                node = tail.force()
            }
        }
    }
}

/// The default layout strategy: commit to the flat branch of a `Union`
/// when its first line fits in the remaining width.
pub fn layout_pretty<A: Clone + 'static>(
    options: LayoutOptions,
    doc: &Doc<A>,
) -> SimpleDocStream<A> {
    match options.page_width {
        PageWidth::AvailablePerLine {
            line_width,
            ribbon_fraction,
        } => {
            let fits: FittingPredicate<A> = Rc::new(move |nesting, column, _, stream| {
                first_line_fits(
                    stream,
                    remaining_width(line_width, ribbon_fraction, nesting, column),
                )
            });
            layout_wadler_leijen(fits, options.page_width, doc)
        }
        PageWidth::Unbounded => layout_unbounded(doc),
    }
}

fn first_line_fits<A>(stream: &SimpleDocStream<A>, mut width: i64) -> bool {
    use SimpleDocStream::*;

    let mut node = stream;
    loop {
        if width < 0 {
            return false;
        }
        match node {
            Fail => return false,
            Empty | Line(_, _) => return true,
            Char(_, tail) => {
                width -= 1;
                node = tail.force();
            }
            Text(t, tail) => {
                width -= i64::from(str_width(t));
                node = tail.force();
            }
            AnnPush(_, tail) | AnnPop(tail) => node = tail.force(),
        }
    }
}

/// Like [`layout_pretty`], but the fitting check keeps looking past line
/// breaks until it reaches a line indented at or below the level where the
/// alternative started. Catches layouts whose first line fits but whose
/// continuation creeps ever further right; costs more lookahead.
pub fn layout_smart<A: Clone + 'static>(
    options: LayoutOptions,
    doc: &Doc<A>,
) -> SimpleDocStream<A> {
    match options.page_width {
        PageWidth::AvailablePerLine {
            line_width,
            ribbon_fraction,
        } => {
            let fits: FittingPredicate<A> =
                Rc::new(move |nesting, column, initial_indent, stream| {
                    // Lines indented deeper than this still belong to the
                    // syntactic unit the choice is part of.
                    let min_nesting = match initial_indent {
                        Some(i) => i.min(column),
                        None => column,
                    };
                    fits_through_lines(
                        stream,
                        remaining_width(line_width, ribbon_fraction, nesting, column),
                        min_nesting,
                        line_width,
                    )
                });
            layout_wadler_leijen(fits, options.page_width, doc)
        }
        PageWidth::Unbounded => layout_unbounded(doc),
    }
}

fn fits_through_lines<A>(
    stream: &SimpleDocStream<A>,
    mut width: i64,
    min_nesting: Width,
    line_width: Width,
) -> bool {
    use SimpleDocStream::*;

    let mut node = stream;
    loop {
        if width < 0 {
            return false;
        }
        match node {
            Fail => return false,
            Empty => return true,
            Char(_, tail) => {
                width -= 1;
                node = tail.force();
            }
            Text(t, tail) => {
                width -= i64::from(str_width(t));
                node = tail.force();
            }
            Line(i, tail) => {
                if min_nesting < *i {
                    // The next line starts at column `i`, so `line_width - i`
                    // columns remain on it.
                    width = i64::from(line_width) - i64::from(*i);
                    node = tail.force();
                } else {
                    return true;
                }
            }
            AnnPush(_, tail) | AnnPop(tail) => node = tail.force(),
        }
    }
}

/// Quick single-pass layout for output that is read by machines rather
/// than humans: no width awareness, no indentation, no annotations.
pub fn layout_compact<A: Clone + 'static>(doc: &Doc<A>) -> SimpleDocStream<A> {
    span!("layout_compact");

    scan_compact(0, vec![Rc::new(doc.clone())])
}

fn scan_compact<A: Clone + 'static>(
    column: Width,
    mut docs: Vec<Rc<Doc<A>>>,
) -> SimpleDocStream<A> {
    use Doc::*;
    use SimpleDocStream as Stream;

    while let Some(doc) = docs.pop() {
        match &*doc {
            Fail => return Stream::Fail,
            Empty => {}
            Char(c) => {
                let c = *c;
                return Stream::Char(c, StreamTail::defer(move || scan_compact(column + 1, docs)));
            }
            Text(t) => {
                let t = Rc::clone(t);
                let width = str_width(&t);
                return Stream::Text(
                    t,
                    StreamTail::defer(move || scan_compact(column + width, docs)),
                );
            }
            Line => {
                return Stream::Line(0, StreamTail::defer(move || scan_compact(0, docs)));
            }
            FlatAlt(x, _) => docs.push(Rc::clone(x)),
            Cat(x, y) => {
                docs.push(Rc::clone(y));
                docs.push(Rc::clone(x));
            }
            Nest(_, x) => docs.push(Rc::clone(x)),
            Union(_, y) => docs.push(Rc::clone(y)),
            Column(f) => docs.push(Rc::new(f(column))),
            WithPageWidth(f) => docs.push(Rc::new(f(PageWidth::Unbounded))),
            Nesting(f) => docs.push(Rc::new(f(0))),
            Annotated(_, x) => docs.push(Rc::clone(x)),
        }
    }
    Stream::Empty
}
