//! Analysis of what happens to a document when its line breaks are removed.

use crate::doc::Doc;
use std::rc::Rc;

/// Whether flattening a document would change it.
///
/// Produced by [`changes_upon_flattening`] and consumed by
/// [`group`](crate::group); it is how `group` avoids building a
/// `Union(flatten(d), d)` for documents that cannot (or need not) change,
/// which would otherwise make layout time explode on nested groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenResult<T> {
    /// Flattening produced a different value.
    Flattened(T),
    /// The document is already flat; flattening it would be a no-op.
    AlreadyFlat,
    /// The document contains a hard line with no flat alternative.
    NeverFlat,
}

impl<T> FlattenResult<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> FlattenResult<U> {
        use FlattenResult::*;

        match self {
            Flattened(value) => Flattened(f(value)),
            AlreadyFlat => AlreadyFlat,
            NeverFlat => NeverFlat,
        }
    }
}

/// Commits to the single-line form of a document: hard lines become
/// failures and every soft alternative picks its flat branch.
///
/// Idempotent: `flatten(&flatten(doc))` equals `flatten(doc)`.
pub fn flatten<A: Clone + 'static>(doc: &Doc<A>) -> Doc<A> {
    use Doc::*;

    match doc {
        Fail => Fail,
        Empty => Empty,
        Char(c) => Char(*c),
        Text(t) => Text(Rc::clone(t)),
        Line => Fail,
        FlatAlt(_, y) => flatten(y),
        Cat(x, y) => Cat(Rc::new(flatten(x)), Rc::new(flatten(y))),
        Nest(i, x) => Nest(*i, Rc::new(flatten(x))),
        Union(x, _) => flatten(x),
        Column(f) => {
            let f = Rc::clone(f);
            Column(Rc::new(move |col| flatten(&f(col))))
        }
        WithPageWidth(f) => {
            let f = Rc::clone(f);
            WithPageWidth(Rc::new(move |pw| flatten(&f(pw))))
        }
        Nesting(f) => {
            let f = Rc::clone(f);
            Nesting(Rc::new(move |level| flatten(&f(level))))
        }
        Annotated(a, x) => Annotated(a.clone(), Rc::new(flatten(x))),
    }
}

/// Classifies whether [`flatten`] would produce a different document, and
/// if so, what the flattened document is.
///
/// Reactive documents always report [`FlattenResult::Flattened`]: whether
/// their produced document changes cannot be known before the layout
/// engine supplies its input, so the flattening is deferred into the
/// producer.
pub fn changes_upon_flattening<A: Clone + 'static>(doc: &Doc<A>) -> FlattenResult<Doc<A>> {
    use Doc::*;
    use FlattenResult::*;

    match doc {
        Fail | Empty | Char(_) | Text(_) => AlreadyFlat,
        Line => NeverFlat,
        FlatAlt(_, y) => Flattened(flatten(y)),
        // The left branch is the flat one by the `Union` invariant.
        Union(x, _) => Flattened((**x).clone()),
        Cat(x, y) => match (changes_upon_flattening(x), changes_upon_flattening(y)) {
            (NeverFlat, _) | (_, NeverFlat) => NeverFlat,
            (AlreadyFlat, AlreadyFlat) => AlreadyFlat,
            (Flattened(x2), Flattened(y2)) => Flattened(Cat(Rc::new(x2), Rc::new(y2))),
            (Flattened(x2), AlreadyFlat) => Flattened(Cat(Rc::new(x2), Rc::clone(y))),
            (AlreadyFlat, Flattened(y2)) => Flattened(Cat(Rc::clone(x), Rc::new(y2))),
        },
        Nest(i, x) => {
            let i = *i;
            changes_upon_flattening(x).map(|x2| Nest(i, Rc::new(x2)))
        }
        Column(f) => {
            let f = Rc::clone(f);
            Flattened(Column(Rc::new(move |col| flatten(&f(col)))))
        }
        WithPageWidth(f) => {
            let f = Rc::clone(f);
            Flattened(WithPageWidth(Rc::new(move |pw| flatten(&f(pw)))))
        }
        Nesting(f) => {
            let f = Rc::clone(f);
            Flattened(Nesting(Rc::new(move |level| flatten(&f(level)))))
        }
        Annotated(a, x) => {
            let a = a.clone();
            changes_upon_flattening(x).map(|x2| Annotated(a, Rc::new(x2)))
        }
    }
}
