//! This is a Wadler/Leijen-style pretty printing library.
//!
//! You build a [`Doc`]: a tree describing a _set_ of possible layouts for
//! your output, including line break alternatives, indentation, and
//! annotations. A layout function then picks a single concrete layout that
//! fits your desired line width (if possible), and a renderer turns it
//! into a string.
//!
//! The combinators follow Wadler's
//! [prettier printer](http://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf)
//! as refined by Leijen: `group` marks a subtree as "collapse the line
//! breaks in here if the result fits", and everything else is built from a
//! handful of primitive constructors.
//!
//! # Quick Reference
//!
//! - Build documents with [`text`], [`line`], [`group`], [`nest`],
//!   [`vsep`], [`list`], and friends, or with `+` for concatenation.
//! - Turn a document into a [`SimpleDocStream`] with [`layout_pretty`]
//!   (first-line lookahead), [`layout_smart`] (multi-line lookahead),
//!   [`layout_compact`] (no lookahead, no indentation), or
//!   [`layout_unbounded`] (no width limit).
//! - Turn the stream into text with [`render_string`].
//!
//! # Usage
//!
//! ```
//! use smart_pretty_printer::{
//!     group, layout_pretty, line, nest, render_string, text, Doc, LayoutOptions, PageWidth,
//! };
//!
//! let doc: Doc = group(text("hello") + nest(2, line() + text("world")));
//!
//! let wide = layout_pretty(LayoutOptions::default(), &doc);
//! assert_eq!(render_string(&wide), "hello world");
//!
//! let narrow = layout_pretty(
//!     LayoutOptions {
//!         page_width: PageWidth::available_per_line(8, 1.0),
//!     },
//!     &doc,
//! );
//! assert_eq!(render_string(&narrow), "hello\n  world");
//! ```
//!
//! # Choosing a layout function
//!
//! [`layout_pretty`] checks whether the first line of a flattened
//! alternative fits, which is fast and almost always what you want.
//! [`layout_smart`] keeps checking subsequent lines as long as they are
//! indented more deeply than the alternative's starting column; it is
//! slower, but avoids the runaway-rightward layouts `layout_pretty` can
//! commit to inside deeply nested [`align`]ed documents.
//!
//! # Annotations
//!
//! Documents are parametric in an annotation type. [`annotate`] attaches a
//! value to a subtree; layout preserves it as a balanced pair of
//! [`SimpleDocStream::AnnPush`]/[`SimpleDocStream::AnnPop`] events for
//! back ends that understand them, and [`render_string`] ignores them.

mod combinators;
mod doc;
mod flatten;
mod geometry;
mod infra;
mod layout;
mod oracle;
mod page_width;
mod render;
mod stream;

pub use combinators::{
    align, annotate, cat, chr, column, concat_with, enclose, enclose_sep, fail, fill, fill_break,
    fill_cat, fill_sep, flat_alt, group, hang, hardline, hcat, hsep, indent, line, line_, list,
    nest, nesting, nil, punctuate, reflow, sep, softline, softline_, space, spaces, string, text,
    tupled, vcat, vsep, width, with_page_width, words,
};
pub use doc::{Doc, React};
pub use flatten::{changes_upon_flattening, flatten, FlattenResult};
pub use geometry::{str_width, Indent, Width};
pub use layout::{
    layout_compact, layout_pretty, layout_smart, layout_unbounded, layout_wadler_leijen,
    FittingPredicate, LayoutOptions, LayoutPipeline,
};
pub use page_width::{remaining_width, PageWidth};
pub use render::{render_string, try_render, RenderError};
pub use stream::{SimpleDocStream, StreamTail};

pub mod testing {
    pub use super::oracle::{oracular_render_pretty, oracular_render_smart};
}
