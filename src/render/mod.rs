//! Joining elements into text.
//!
//! All entry points share one algorithm: write the prefix, then each element
//! preceded by the separator from the second one on. Once more elements show
//! up than the limit allows, the separator for the overflowing element is
//! still written, rendering stops, and the truncation marker follows. The
//! postfix always comes last.

mod joiner;

pub use joiner::{Joiner, Nullable, NULL_TEXT};

use std::fmt::{self, Display};
use std::io;

use thiserror::Error;

/// Errors that can occur while writing joined text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The formatting destination, or an element's `Display`, failed.
    #[error("formatting failed")]
    Format(#[from] fmt::Error),

    /// The byte sink failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Destination for joined text.
trait Sink {
    fn text(&mut self, text: &str) -> Result<(), RenderError>;
    fn element(&mut self, element: &dyn Display) -> Result<(), RenderError>;
}

struct FmtSink<'a, W: ?Sized>(&'a mut W);

impl<W: fmt::Write + ?Sized> Sink for FmtSink<'_, W> {
    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        Ok(self.0.write_str(text)?)
    }

    fn element(&mut self, element: &dyn Display) -> Result<(), RenderError> {
        Ok(write!(self.0, "{element}")?)
    }
}

struct IoSink<'a, W: ?Sized>(&'a mut W);

impl<W: io::Write + ?Sized> Sink for IoSink<'_, W> {
    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        Ok(self.0.write_all(text.as_bytes())?)
    }

    // io::Write::write_fmt panics when Display fails on a healthy stream.
    fn element(&mut self, element: &dyn Display) -> Result<(), RenderError> {
        let mut text = String::new();
        fmt::Write::write_fmt(&mut text, format_args!("{element}"))?;
        self.text(&text)
    }
}

fn join<I, S>(elements: I, sink: &mut S, joiner: &Joiner) -> Result<(), RenderError>
where
    I: Iterator,
    I::Item: Display,
    S: Sink,
{
    sink.text(&joiner.prefix)?;
    let mut count = 0usize;
    for element in elements {
        count += 1;
        if count > 1 {
            sink.text(&joiner.separator)?;
        }
        if joiner.exceeds_limit(count) {
            break;
        }
        sink.element(&element)?;
    }
    if joiner.exceeds_limit(count) {
        sink.text(&joiner.truncated)?;
    }
    sink.text(&joiner.postfix)
}

/// String-joining operations for iterators of displayable elements.
pub trait Render: Iterator {
    /// Appends the joined elements to `buffer`.
    fn append_string<W>(self, buffer: &mut W, joiner: &Joiner) -> Result<(), RenderError>
    where
        Self: Sized,
        Self::Item: Display,
        W: fmt::Write + ?Sized,
    {
        join(self, &mut FmtSink(buffer), joiner)
    }

    /// Writes the joined elements to a byte sink.
    fn write_string<W>(self, writer: &mut W, joiner: &Joiner) -> Result<(), RenderError>
    where
        Self: Sized,
        Self::Item: Display,
        W: io::Write + ?Sized,
    {
        join(self, &mut IoSink(writer), joiner)
    }

    /// Joins the elements into a new `String`.
    ///
    /// If an element's `Display` reports an error the output stops at that
    /// element; the failure is logged at `warn`.
    fn make_string(self, joiner: &Joiner) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        let mut buffer = String::new();
        if let Err(error) = self.append_string(&mut buffer, joiner) {
            tracing::warn!(%error, "element rendering failed, output truncated");
        }
        buffer
    }

    /// Like [`Render::append_string`], rendering `None` as [`NULL_TEXT`].
    fn append_string_nullable<T, W>(
        self,
        buffer: &mut W,
        joiner: &Joiner,
    ) -> Result<(), RenderError>
    where
        Self: Sized + Iterator<Item = Option<T>>,
        T: Display,
        W: fmt::Write + ?Sized,
    {
        self.map(Nullable).append_string(buffer, joiner)
    }

    /// Like [`Render::make_string`], rendering `None` as [`NULL_TEXT`].
    fn make_string_nullable<T>(self, joiner: &Joiner) -> String
    where
        Self: Sized + Iterator<Item = Option<T>>,
        T: Display,
    {
        self.map(Nullable).make_string(joiner)
    }
}

impl<I> Render for I where I: Iterator + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_join() {
        assert_eq!([1, 2, 3].iter().make_string(&Joiner::new()), "1, 2, 3");
    }

    #[test]
    fn test_limit_reads_at_most_limit_plus_one() {
        let pulled = Cell::new(0);
        let source = (1..100).inspect(|_| pulled.set(pulled.get() + 1));
        let out = source.make_string(&Joiner::new().with_limit(3));
        assert_eq!(out, "1, 2, 3, ...");
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_append_keeps_existing_buffer() {
        let mut buffer = String::from("items: ");
        ["x", "y"]
            .into_iter()
            .append_string(&mut buffer, &Joiner::new().with_separator("|"))
            .expect("string sink never fails");
        assert_eq!(buffer, "items: x|y");
    }

    #[test]
    fn test_write_string_to_bytes() {
        let mut bytes = Vec::new();
        (1..=3)
            .write_string(&mut bytes, &Joiner::new().with_prefix("<").with_postfix(">"))
            .expect("vec sink never fails");
        assert_eq!(bytes, b"<1, 2, 3>");
    }

    #[test]
    fn test_nullable_elements() {
        let out = vec![Some("a"), None, Some("c")]
            .into_iter()
            .make_string_nullable(&Joiner::new());
        assert_eq!(out, "a, null, c");
    }

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_failing_display_is_reported() {
        let mut buffer = String::new();
        let result = [Broken].into_iter().append_string(&mut buffer, &Joiner::new());
        assert!(matches!(result, Err(RenderError::Format(_))));
        assert_eq!([Broken].into_iter().make_string(&Joiner::new().with_prefix("[")), "[");
    }

    #[test]
    fn test_failing_display_in_byte_sink_is_reported() {
        let mut bytes = Vec::new();
        let result = [Broken]
            .into_iter()
            .write_string(&mut bytes, &Joiner::new().with_prefix("["));
        assert!(matches!(result, Err(RenderError::Format(_))));
        assert_eq!(bytes, b"[");
    }
}
