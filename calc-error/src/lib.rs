//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an error kind to the regions of the input it
//! originated from.

// lets the `ErrorKind` derive refer to `calc_error::...` from inside this crate's tests
extern crate self as calc_error;

use ariadne::{Color, Label, Report, ReportKind};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `#[derive(ErrorKind)]` from the `calc-attrs` crate.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete error kind can be recovered from a
    /// `dyn ErrorKind`.
    fn as_any(&self) -> &dyn Any;

    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// The text of the labels pointing at each span of the error, in the same order as the spans.
    /// Empty labels are drawn without text.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional help text describing what the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    ///
    /// Each span is paired with the label at the same index. If there are no spans, the report
    /// points at the start of the source and has no labels.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(
                spans.iter()
                    .zip(self.labels())
                    .map(|(span, label_str)| {
                        let mut label = Label::new((src_id, span.clone()))
                            .with_color(EXPR);

                        if !label_str.is_empty() {
                            label = label.with_message(label_str);
                        }

                        label
                    })
                    .collect::<Vec<_>>()
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }

        builder.finish()
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Returns a reference to the kind of this error if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use calc_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("cannot divide `{}` by zero", dividend),
        labels = ["this dividend", "this divisor"],
        help = "pick a divisor other than zero",
    )]
    struct DivideLiteral {
        dividend: f64,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "something went wrong")]
    struct Opaque;

    /// Renders the report of the given error against the given source, without colors.
    fn render(err: &Error, source: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn derived_message() {
        let kind = DivideLiteral { dividend: 3.0 };
        assert_eq!(kind.message(), "cannot divide `3` by zero");
        assert_eq!(kind.to_string(), "cannot divide `3` by zero");
        assert_eq!(kind.labels(), vec!["this dividend", "this divisor"]);
        assert_eq!(kind.help().as_deref(), Some("pick a divisor other than zero"));
    }

    #[test]
    fn derived_defaults() {
        assert!(Opaque.labels().is_empty());
        assert_eq!(Opaque.help(), None);
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..1, 4..5], DivideLiteral { dividend: 3.0 });
        assert!(err.is::<DivideLiteral>());
        assert!(!err.is::<Opaque>());
        assert_eq!(err.downcast_ref::<DivideLiteral>(), Some(&DivideLiteral { dividend: 3.0 }));
        assert_eq!(err.to_string(), "cannot divide `3` by zero");
    }

    #[test]
    fn report_with_spans() {
        let err = Error::new(vec![0..1, 4..5], DivideLiteral { dividend: 3.0 });
        let report = render(&err, "3 / 0");
        assert!(report.contains("cannot divide `3` by zero"));
        assert!(report.contains("this dividend"));
        assert!(report.contains("this divisor"));
        assert!(report.contains("pick a divisor other than zero"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Opaque);
        let report = render(&err, "3 / 0");
        assert!(report.contains("something went wrong"));
    }
}
