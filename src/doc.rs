use crate::geometry::{Indent, Width};
use crate::page_width::PageWidth;
use std::fmt;
use std::ops::{Add, BitOr};
use std::rc::Rc;

/// A deferred layout: a pure producer the engine invokes once the value it
/// reacts to (column, page width, or nesting level) is known.
pub type React<I, A> = Rc<dyn Fn(I) -> Doc<A>>;

// ASSUMPTION:
// In every `Union(x, y)`, every first line of `x` is at least as wide as the
// corresponding first line of `y`. `group` is the only function in this crate
// that constructs a `Union`, and it maintains this.

/// Describes a set of possible layouts for a piece of output.
///
/// A `Doc` is built with the constructor functions in this crate
/// ([`text`](crate::text), [`line`](crate::line), [`group`](crate::group),
/// ...), turned into a [`SimpleDocStream`](crate::SimpleDocStream) by one of
/// the `layout_*` functions, and rendered with
/// [`render_string`](crate::render_string).
pub enum Doc<A: 'static = ()> {
    /// Rejects every layout that would put it on the current line.
    Fail,
    /// The unit of concatenation: height 1, width 0.
    Empty,
    /// A single character. Must not be `'\n'`.
    Char(char),
    /// A run of at least two characters, none of them `'\n'`. Single
    /// characters use the cheaper `Char`.
    Text(Rc<str>),
    /// A hard line break, indenting the next line to the current nesting
    /// level.
    Line,
    /// Renders as the first document; under [`group`](crate::group) the
    /// second is preferred when it fits. The caller must ensure the first
    /// document's first line is no wider than the flattened second's.
    FlatAlt(Rc<Doc<A>>, Rc<Doc<A>>),
    /// Concatenation, also available as `+`.
    Cat(Rc<Doc<A>>, Rc<Doc<A>>),
    /// Lays out the inner document with the nesting level increased.
    /// Negative values are allowed.
    Nest(Indent, Rc<Doc<A>>),
    /// A choice between two layouts. See the ASSUMPTION above; also
    /// available as `|`.
    Union(Rc<Doc<A>>, Rc<Doc<A>>),
    /// Reacts to the column the output is currently at.
    Column(React<Width, A>),
    /// Reacts to the configured page width.
    WithPageWidth(React<PageWidth, A>),
    /// Reacts to the current nesting level.
    Nesting(React<Indent, A>),
    /// Attaches caller data to a subtree. Annotations survive layout as
    /// balanced push/pop events and are ignored by the string renderer.
    Annotated(A, Rc<Doc<A>>),
}

impl<A: Clone + 'static> Clone for Doc<A> {
    fn clone(&self) -> Doc<A> {
        use Doc::*;

        match self {
            Fail => Fail,
            Empty => Empty,
            Char(c) => Char(*c),
            Text(t) => Text(Rc::clone(t)),
            Line => Line,
            FlatAlt(x, y) => FlatAlt(Rc::clone(x), Rc::clone(y)),
            Cat(x, y) => Cat(Rc::clone(x), Rc::clone(y)),
            Nest(i, x) => Nest(*i, Rc::clone(x)),
            Union(x, y) => Union(Rc::clone(x), Rc::clone(y)),
            Column(f) => Column(Rc::clone(f)),
            WithPageWidth(f) => WithPageWidth(Rc::clone(f)),
            Nesting(f) => Nesting(Rc::clone(f)),
            Annotated(a, x) => Annotated(a.clone(), Rc::clone(x)),
        }
    }
}

impl<A: fmt::Debug + 'static> fmt::Debug for Doc<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Doc::*;

        match self {
            Fail => write!(f, "Fail"),
            Empty => write!(f, "Empty"),
            Char(c) => f.debug_tuple("Char").field(c).finish(),
            Text(t) => f.debug_tuple("Text").field(t).finish(),
            Line => write!(f, "Line"),
            FlatAlt(x, y) => f.debug_tuple("FlatAlt").field(x).field(y).finish(),
            Cat(x, y) => f.debug_tuple("Cat").field(x).field(y).finish(),
            Nest(i, x) => f.debug_tuple("Nest").field(i).field(x).finish(),
            Union(x, y) => f.debug_tuple("Union").field(x).field(y).finish(),
            Column(_) => write!(f, "Column(..)"),
            WithPageWidth(_) => write!(f, "WithPageWidth(..)"),
            Nesting(_) => write!(f, "Nesting(..)"),
            Annotated(a, x) => f.debug_tuple("Annotated").field(a).field(x).finish(),
        }
    }
}

/// Concatenation: `x + y` is `Doc::Cat(x, y)`.
impl<A: 'static> Add for Doc<A> {
    type Output = Doc<A>;

    fn add(self, other: Doc<A>) -> Doc<A> {
        Doc::Cat(Rc::new(self), Rc::new(other))
    }
}

/// Choice: `x | y` is `Doc::Union(x, y)`.
///
/// The left operand must satisfy the `Union` ASSUMPTION: none of its first
/// lines may be narrower than the corresponding first line of the right
/// operand. Prefer [`group`](crate::group), which builds well-formed unions.
impl<A: 'static> BitOr for Doc<A> {
    type Output = Doc<A>;

    fn bitor(self, other: Doc<A>) -> Doc<A> {
        Doc::Union(Rc::new(self), Rc::new(other))
    }
}

impl<A: 'static> Doc<A> {
    /// Rewrites every annotation in the document. Reactive subtrees are
    /// rewrapped so the produced documents are rewritten on demand.
    pub fn map_annotations<B: 'static>(
        &self,
        f: impl Fn(&A) -> B + Clone + 'static,
    ) -> Doc<B> {
        use Doc::*;

        match self {
            Fail => Fail,
            Empty => Empty,
            Char(c) => Char(*c),
            Text(t) => Text(Rc::clone(t)),
            Line => Line,
            FlatAlt(x, y) => FlatAlt(
                Rc::new(x.map_annotations(f.clone())),
                Rc::new(y.map_annotations(f)),
            ),
            Cat(x, y) => Cat(
                Rc::new(x.map_annotations(f.clone())),
                Rc::new(y.map_annotations(f)),
            ),
            Nest(i, x) => Nest(*i, Rc::new(x.map_annotations(f))),
            Union(x, y) => Union(
                Rc::new(x.map_annotations(f.clone())),
                Rc::new(y.map_annotations(f)),
            ),
            Column(g) => {
                let g = Rc::clone(g);
                Column(Rc::new(move |col| g(col).map_annotations(f.clone())))
            }
            WithPageWidth(g) => {
                let g = Rc::clone(g);
                WithPageWidth(Rc::new(move |pw| g(pw).map_annotations(f.clone())))
            }
            Nesting(g) => {
                let g = Rc::clone(g);
                Nesting(Rc::new(move |level| g(level).map_annotations(f.clone())))
            }
            Annotated(a, x) => Annotated(f(a), Rc::new(x.map_annotations(f))),
        }
    }

    /// Removes all annotations.
    pub fn un_annotate(&self) -> Doc<()> {
        self.map_annotations(|_| ())
    }
}
