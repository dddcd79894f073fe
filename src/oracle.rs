//! A deliberately strict rendition of the layout engine, for testing.
//!
//! This runs the same choice rule as the lazy engine but materialises both
//! branches of every `Union` in full, so its time is roughly exponential
//! in the number of nested alternatives. It must always produce the same
//! output as the corresponding fast layout function, which makes it a good
//! oracle for automated testing of the lazy implementation.

use crate::doc::Doc;
use crate::geometry::{str_width, Indent, Width};
use crate::layout::LayoutOptions;
use crate::page_width::{remaining_width, PageWidth};
use std::rc::Rc;

/// Lays out the document with the same semantics as
/// [`layout_pretty`](crate::layout_pretty) followed by
/// [`render_string`](crate::render_string).
pub fn oracular_render_pretty<A: Clone + 'static>(options: LayoutOptions, doc: &Doc<A>) -> String {
    render(&layout(Strategy::FirstLine, options.page_width, doc))
}

/// Lays out the document with the same semantics as
/// [`layout_smart`](crate::layout_smart) followed by
/// [`render_string`](crate::render_string).
pub fn oracular_render_smart<A: Clone + 'static>(options: LayoutOptions, doc: &Doc<A>) -> String {
    render(&layout(Strategy::MultiLine, options.page_width, doc))
}

#[derive(Clone, Copy)]
enum Strategy {
    /// Check that the first line of the prospective stream fits.
    FirstLine,
    /// Keep checking past line breaks, bounded by the starting indent.
    MultiLine,
    /// Only reject streams that fail on their first line.
    Unbounded,
}

/// A fully materialised stream. No laziness anywhere; that is the point.
enum Strict<A> {
    Fail,
    Empty,
    Char(char, Box<Strict<A>>),
    Text(String, Box<Strict<A>>),
    Line(Width, Box<Strict<A>>),
    AnnPush(A, Box<Strict<A>>),
    AnnPop(Box<Strict<A>>),
}

enum Frames<A: 'static> {
    Done,
    Doc(Indent, Doc<A>, Rc<Frames<A>>),
    Undo(Rc<Frames<A>>),
}

fn layout<A: Clone + 'static>(
    mut strategy: Strategy,
    page_width: PageWidth,
    doc: &Doc<A>,
) -> Strict<A> {
    if page_width == PageWidth::Unbounded {
        strategy = Strategy::Unbounded;
    }
    let frames = Rc::new(Frames::Doc(0, doc.clone(), Rc::new(Frames::Done)));
    strict_best(strategy, page_width, 0, 0, &frames)
}

fn strict_best<A: Clone + 'static>(
    strategy: Strategy,
    page_width: PageWidth,
    nesting: Indent,
    column: Width,
    frames: &Rc<Frames<A>>,
) -> Strict<A> {
    use Doc as D;

    match &**frames {
        Frames::Done => Strict::Empty,
        Frames::Undo(rest) => Strict::AnnPop(Box::new(strict_best(
            strategy, page_width, nesting, column, rest,
        ))),
        Frames::Doc(indent, doc, rest) => {
            let indent = *indent;
            match doc {
                D::Fail => Strict::Fail,
                D::Empty => strict_best(strategy, page_width, nesting, column, rest),
                D::Char(c) => Strict::Char(
                    *c,
                    Box::new(strict_best(strategy, page_width, nesting, column + 1, rest)),
                ),
                D::Text(t) => Strict::Text(
                    t.to_string(),
                    Box::new(strict_best(
                        strategy,
                        page_width,
                        nesting,
                        column + str_width(t),
                        rest,
                    )),
                ),
                D::Line => {
                    let tail = strict_best(
                        strategy,
                        page_width,
                        indent,
                        indent.max(0) as Width,
                        rest,
                    );
                    let line_indent = match tail {
                        Strict::Empty | Strict::Line(_, _) => 0,
                        _ => indent.max(0) as Width,
                    };
                    Strict::Line(line_indent, Box::new(tail))
                }
                D::FlatAlt(x, _) => {
                    let frames = Rc::new(Frames::Doc(indent, (**x).clone(), Rc::clone(rest)));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::Cat(x, y) => {
                    let rest = Rc::new(Frames::Doc(indent, (**y).clone(), Rc::clone(rest)));
                    let frames = Rc::new(Frames::Doc(indent, (**x).clone(), rest));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::Nest(j, x) => {
                    let frames = Rc::new(Frames::Doc(indent + j, (**x).clone(), Rc::clone(rest)));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::Union(x, y) => {
                    let sx = strict_best(
                        strategy,
                        page_width,
                        nesting,
                        column,
                        &Rc::new(Frames::Doc(indent, (**x).clone(), Rc::clone(rest))),
                    );
                    let sy = strict_best(
                        strategy,
                        page_width,
                        nesting,
                        column,
                        &Rc::new(Frames::Doc(indent, (**y).clone(), Rc::clone(rest))),
                    );
                    if strict_fits(strategy, page_width, nesting, column, initial_indent(&sy), &sx)
                    {
                        sx
                    } else {
                        sy
                    }
                }
                D::Column(f) => {
                    let frames = Rc::new(Frames::Doc(indent, f(column), Rc::clone(rest)));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::WithPageWidth(f) => {
                    let frames = Rc::new(Frames::Doc(indent, f(page_width), Rc::clone(rest)));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::Nesting(f) => {
                    let frames = Rc::new(Frames::Doc(indent, f(indent), Rc::clone(rest)));
                    strict_best(strategy, page_width, nesting, column, &frames)
                }
                D::Annotated(a, x) => {
                    let inner = Rc::new(Frames::Doc(
                        indent,
                        (**x).clone(),
                        Rc::new(Frames::Undo(Rc::clone(rest))),
                    ));
                    Strict::AnnPush(
                        a.clone(),
                        Box::new(strict_best(strategy, page_width, nesting, column, &inner)),
                    )
                }
            }
        }
    }
}

fn initial_indent<A>(stream: &Strict<A>) -> Option<Width> {
    let mut node = stream;
    loop {
        match node {
            Strict::Line(i, _) => return Some(*i),
            Strict::Char(_, tail) | Strict::Text(_, tail) => node = tail,
            Strict::AnnPush(_, tail) | Strict::AnnPop(tail) => node = tail,
            Strict::Fail | Strict::Empty => return None,
        }
    }
}

fn strict_fits<A>(
    strategy: Strategy,
    page_width: PageWidth,
    nesting: Indent,
    column: Width,
    alt_indent: Option<Width>,
    stream: &Strict<A>,
) -> bool {
    let (line_width, ribbon_fraction) = match page_width {
        PageWidth::AvailablePerLine {
            line_width,
            ribbon_fraction,
        } => (line_width, ribbon_fraction),
        PageWidth::Unbounded => {
            return !strict_fails_on_first_line(stream);
        }
    };
    let mut width = remaining_width(line_width, ribbon_fraction, nesting, column);
    let min_nesting = match alt_indent {
        Some(i) => i.min(column),
        None => column,
    };

    let mut node = stream;
    loop {
        if width < 0 {
            return false;
        }
        match node {
            Strict::Fail => return false,
            Strict::Empty => return true,
            Strict::Char(_, tail) => {
                width -= 1;
                node = tail;
            }
            Strict::Text(t, tail) => {
                width -= i64::from(str_width(t));
                node = tail;
            }
            Strict::Line(i, tail) => match strategy {
                Strategy::FirstLine | Strategy::Unbounded => return true,
                Strategy::MultiLine => {
                    if min_nesting < *i {
                        width = i64::from(line_width) - i64::from(*i);
                        node = tail;
                    } else {
                        return true;
                    }
                }
            },
            Strict::AnnPush(_, tail) | Strict::AnnPop(tail) => node = tail,
        }
    }
}

fn strict_fails_on_first_line<A>(stream: &Strict<A>) -> bool {
    let mut node = stream;
    loop {
        match node {
            Strict::Fail => return true,
            Strict::Empty | Strict::Line(_, _) => return false,
            Strict::Char(_, tail) | Strict::Text(_, tail) => node = tail,
            Strict::AnnPush(_, tail) | Strict::AnnPop(tail) => node = tail,
        }
    }
}

fn render<A>(stream: &Strict<A>) -> String {
    let mut out = String::new();
    let mut node = stream;
    loop {
        match node {
            Strict::Fail => panic!("oracle: a failure node survived layout"),
            Strict::Empty => return out,
            Strict::Char(c, tail) => {
                out.push(*c);
                node = tail;
            }
            Strict::Text(t, tail) => {
                out.push_str(t);
                node = tail;
            }
            Strict::Line(i, tail) => {
                out.push('\n');
                for _ in 0..*i {
                    out.push(' ');
                }
                node = tail;
            }
            Strict::AnnPush(_, tail) | Strict::AnnPop(tail) => node = tail,
        }
    }
}
