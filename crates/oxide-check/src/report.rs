//! Reports printed by the subcommands.

use oxide_expr::Span;
use oxide_sqltime::NullTime;
use serde::Serialize;

/// The outcome of one check, printable as text or JSON.
pub trait Report: Serialize {
    /// Whether the input was accepted.
    fn ok(&self) -> bool;

    /// The text-mode rendering.
    fn to_text(&self) -> String;
}

/// Outcome of `oxide-check parse`.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub input: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Source text covered by the error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near: Option<String>,
    #[serde(skip)]
    span: Option<Span>,
}

impl ParseReport {
    #[must_use]
    pub fn new(input: &str) -> Self {
        match oxide_expr::parse(input) {
            Ok(expr) => Self {
                input: input.to_owned(),
                ok: true,
                rendered: Some(expr.to_string()),
                error: None,
                near: None,
                span: None,
            },
            Err(err) => Self {
                input: input.to_owned(),
                ok: false,
                rendered: None,
                error: Some(err.to_string()),
                near: (!err.span.is_empty()).then(|| err.span.slice(input).to_owned()),
                span: Some(err.span),
            },
        }
    }
}

impl Report for ParseReport {
    fn ok(&self) -> bool {
        self.ok
    }

    fn to_text(&self) -> String {
        match (&self.rendered, &self.error, self.span) {
            (Some(rendered), _, _) => rendered.clone(),
            (None, Some(error), Some(span)) => {
                let column = Span::new(0, span.start).slice(&self.input).chars().count();
                format!(
                    "error: {error}\n  {}\n  {}{}",
                    self.input,
                    " ".repeat(column),
                    "^".repeat(span.len().max(1))
                )
            }
            (None, Some(error), None) => format!("error: {error}"),
            (None, None, _) => String::new(),
        }
    }
}

/// Outcome of `oxide-check time`.
///
/// `value` serializes through the JSON surface of [`NullTime`]: the quoted
/// text form, or `null`.
#[derive(Debug, Serialize)]
pub struct TimeReport {
    pub input: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<NullTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TimeReport {
    #[must_use]
    pub fn new(input: &str) -> Self {
        match NullTime::parse(input) {
            Ok(value) => Self {
                input: input.to_owned(),
                ok: true,
                time_of_day: value.as_option().map(|time| time.is_time_of_day()),
                value: Some(value),
                error: None,
            },
            Err(err) => Self {
                input: input.to_owned(),
                ok: false,
                value: None,
                time_of_day: None,
                error: Some(err.to_string()),
            },
        }
    }
}

impl Report for TimeReport {
    fn ok(&self) -> bool {
        self.ok
    }

    fn to_text(&self) -> String {
        match (&self.value, &self.error) {
            (Some(value), _) if value.is_null() => String::from("NULL"),
            (Some(value), _) => value.to_string(),
            (None, Some(error)) => format!("error: {error}"),
            (None, None) => String::new(),
        }
    }
}
