//! Joining behaviour, including limits and null rendering.

use iterops::prelude::*;
use iterops::RenderError;
use test_case::test_case;

#[test_case(&["a", "b", "c"], -1 => "a, b, c"; "negative limit renders everything")]
#[test_case(&["a", "b", "c"], 2 => "a, b, ..."; "limit below length truncates")]
#[test_case(&["a", "b", "c"], 3 => "a, b, c"; "limit equal to length does not truncate")]
#[test_case(&["a", "b", "c"], 10 => "a, b, c"; "limit above length does not truncate")]
#[test_case(&["a"], 0 => "..."; "zero limit on non-empty input")]
#[test_case(&[], 0 => ""; "zero limit on empty input")]
#[test_case(&[], -1 => ""; "empty input")]
fn join_with_limit(elements: &[&str], limit: isize) -> String {
    elements
        .iter()
        .make_string(&Joiner::new().with_limit(limit))
}

#[test]
fn empty_input_keeps_prefix_and_postfix() {
    let joiner = Joiner::new().with_prefix("[").with_postfix("]");
    assert_eq!(std::iter::empty::<&str>().make_string(&joiner), "[]");
}

#[test]
fn truncation_sits_inside_postfix() {
    let joiner = Joiner::new()
        .with_prefix("<")
        .with_postfix(">")
        .with_separator("; ")
        .with_limit(1)
        .with_truncated("etc");
    assert_eq!((1..=5).make_string(&joiner), "<1; etc>");
}

#[test]
fn nulls_render_literally() {
    let elements = [None, Some(1), None];
    assert_eq!(
        elements.into_iter().make_string_nullable(&Joiner::new()),
        "null, 1, null"
    );

    let mut buffer = String::from(">");
    elements
        .into_iter()
        .append_string_nullable(&mut buffer, &Joiner::new().with_separator(""))
        .expect("string buffer never fails");
    assert_eq!(buffer, ">null1null");
}

struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn io_failures_surface_as_render_errors() {
    let result = ["a"].iter().write_string(&mut FailingWriter, &Joiner::new());
    match result {
        Err(RenderError::Io(error)) => assert_eq!(error.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("expected io error, got {other:?}"),
    }
}
