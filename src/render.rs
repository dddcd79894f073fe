use crate::infra::span;
use crate::stream::SimpleDocStream;

/// The renderer was handed a stream with no valid layout in it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("the stream contains a failure node, so every alternative of the document failed; a hard line was flattened with no flat alternative to escape to")]
    FailedStream,
}

/// Renders the stream to a `String`. Annotation events are skipped.
///
/// # Panics
///
/// Panics if the stream contains a failure node. Such a stream comes from
/// a document that broke the layout contract; use [`try_render`] to report
/// the violation as an error instead.
pub fn render_string<A>(stream: &SimpleDocStream<A>) -> String {
    match try_render(stream) {
        Ok(rendered) => rendered,
        Err(err) => panic!("{}", err),
    }
}

/// Renders the stream to a `String`, reporting a contract-violating stream
/// instead of panicking.
pub fn try_render<A>(stream: &SimpleDocStream<A>) -> Result<String, RenderError> {
    use SimpleDocStream::*;

    span!("render");

    let mut out = String::new();
    let mut node = stream;
    loop {
        match node {
            Fail => return Err(RenderError::FailedStream),
            Empty => return Ok(out),
            Char(c, tail) => {
                out.push(*c);
                node = tail.force();
            }
            Text(t, tail) => {
                out.push_str(t);
                node = tail.force();
            }
            Line(indent, tail) => {
                out.push('\n');
                for _ in 0..*indent {
                    out.push(' ');
                }
                node = tail.force();
            }
            AnnPush(_, tail) | AnnPop(tail) => node = tail.force(),
        }
    }
}
