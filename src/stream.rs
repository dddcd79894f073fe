//! The linearised output of layout, produced on demand.

use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::Width;

/// A chain of text, line, and annotation events ending in `Empty` (a
/// complete layout) or `Fail` (a rejected one).
///
/// Every successor is a [`StreamTail`]: a memoised thunk forced when the
/// fitting predicate or the renderer walks past it. This is what keeps the
/// layout engine from materialising the branch of a `Union` it ends up
/// discarding.
pub enum SimpleDocStream<A: 'static = ()> {
    /// Absorbs the rest of the layout. A stream handed to the renderer
    /// must not contain this.
    Fail,
    /// End of the document.
    Empty,
    Char(char, StreamTail<A>),
    Text(Rc<str>, StreamTail<A>),
    /// A newline followed by the given number of spaces.
    Line(Width, StreamTail<A>),
    /// Start of an annotated region.
    AnnPush(A, StreamTail<A>),
    /// End of the innermost annotated region. Push and pop events are
    /// balanced on every chain the layout functions produce.
    AnnPop(StreamTail<A>),
}

/// A lazily produced stream successor. The deferred computation runs at
/// most once; its result is memoised so that the fitting predicate and the
/// renderer can walk the same chain without repeating work.
pub struct StreamTail<A: 'static> {
    cell: Rc<TailCell<A>>,
}

struct TailCell<A: 'static> {
    forced: OnceCell<SimpleDocStream<A>>,
    thunk: RefCell<Option<Box<dyn FnOnce() -> SimpleDocStream<A>>>>,
}

impl<A: 'static> StreamTail<A> {
    /// A successor that is already computed.
    pub fn ready(stream: SimpleDocStream<A>) -> StreamTail<A> {
        StreamTail {
            cell: Rc::new(TailCell {
                forced: OnceCell::with_value(stream),
                thunk: RefCell::new(None),
            }),
        }
    }

    /// A successor computed when first forced.
    pub fn defer(thunk: impl FnOnce() -> SimpleDocStream<A> + 'static) -> StreamTail<A> {
        StreamTail {
            cell: Rc::new(TailCell {
                forced: OnceCell::new(),
                thunk: RefCell::new(Some(Box::new(thunk))),
            }),
        }
    }

    /// The successor, computing it on first use.
    pub fn force(&self) -> &SimpleDocStream<A> {
        self.cell.forced.get_or_init(|| {
            let thunk = self
                .cell
                .thunk
                .borrow_mut()
                .take()
                .expect("stream tail has neither a value nor a thunk");
            thunk()
        })
    }
}

impl<A: 'static> Clone for StreamTail<A> {
    fn clone(&self) -> StreamTail<A> {
        StreamTail {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<A: 'static> SimpleDocStream<A> {
    /// Rewrites the annotations in the stream, preserving its structure
    /// and laziness. Only `AnnPush` payloads change.
    pub fn map_annotations<B: 'static>(
        &self,
        f: impl Fn(&A) -> B + Clone + 'static,
    ) -> SimpleDocStream<B> {
        use SimpleDocStream::*;

        fn map_tail<A: 'static, B: 'static>(
            tail: &StreamTail<A>,
            f: impl Fn(&A) -> B + Clone + 'static,
        ) -> StreamTail<B> {
            let tail = tail.clone();
            StreamTail::defer(move || tail.force().map_annotations(f))
        }

        match self {
            Fail => Fail,
            Empty => Empty,
            Char(c, tail) => Char(*c, map_tail(tail, f)),
            Text(t, tail) => Text(Rc::clone(t), map_tail(tail, f)),
            Line(i, tail) => Line(*i, map_tail(tail, f)),
            AnnPush(a, tail) => AnnPush(f(a), map_tail(tail, f.clone())),
            AnnPop(tail) => AnnPop(map_tail(tail, f)),
        }
    }

    /// Removes all annotation events from the stream.
    pub fn un_annotate(&self) -> SimpleDocStream<()> {
        use SimpleDocStream::*;

        fn un_tail<A: 'static>(tail: &StreamTail<A>) -> StreamTail<()> {
            let tail = tail.clone();
            StreamTail::defer(move || tail.force().un_annotate())
        }

        match self {
            Fail => Fail,
            Empty => Empty,
            Char(c, tail) => Char(*c, un_tail(tail)),
            Text(t, tail) => Text(Rc::clone(t), un_tail(tail)),
            Line(i, tail) => Line(*i, un_tail(tail)),
            AnnPush(_, tail) => tail.force().un_annotate(),
            AnnPop(tail) => tail.force().un_annotate(),
        }
    }
}

/// Structural equality. Forces both streams all the way to their ends.
impl<A: PartialEq + 'static> PartialEq for SimpleDocStream<A> {
    fn eq(&self, other: &SimpleDocStream<A>) -> bool {
        use SimpleDocStream::*;

        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Fail, Fail) | (Empty, Empty) => return true,
                (Char(c1, t1), Char(c2, t2)) if c1 == c2 => {
                    a = t1.force();
                    b = t2.force();
                }
                (Text(s1, t1), Text(s2, t2)) if s1 == s2 => {
                    a = t1.force();
                    b = t2.force();
                }
                (Line(i1, t1), Line(i2, t2)) if i1 == i2 => {
                    a = t1.force();
                    b = t2.force();
                }
                (AnnPush(a1, t1), AnnPush(a2, t2)) if a1 == a2 => {
                    a = t1.force();
                    b = t2.force();
                }
                (AnnPop(t1), AnnPop(t2)) => {
                    a = t1.force();
                    b = t2.force();
                }
                _ => return false,
            }
        }
    }
}

/// Forces the stream all the way to its end.
impl<A: fmt::Debug + 'static> fmt::Debug for SimpleDocStream<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SimpleDocStream::*;

        let mut node = self;
        loop {
            match node {
                Fail => return write!(f, "Fail"),
                Empty => return write!(f, "Empty"),
                Char(c, tail) => {
                    write!(f, "Char({:?}) ", c)?;
                    node = tail.force();
                }
                Text(t, tail) => {
                    write!(f, "Text({:?}) ", t)?;
                    node = tail.force();
                }
                Line(i, tail) => {
                    write!(f, "Line({}) ", i)?;
                    node = tail.force();
                }
                AnnPush(a, tail) => {
                    write!(f, "AnnPush({:?}) ", a)?;
                    node = tail.force();
                }
                AnnPop(tail) => {
                    write!(f, "AnnPop ")?;
                    node = tail.force();
                }
            }
        }
    }
}
