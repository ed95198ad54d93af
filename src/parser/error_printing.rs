use crate::parser::{types::resolve_span_span, types::Span, PuzzleError};
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use std::fmt::Display;
use std::hash::Hash;

pub fn print_errors<'a, 'b, T, F>(
    src: &'a str,
    file_path: &'b str,
    errs: &[Simple<T>],
    mut span_resolver: F,
) -> bool
where
    T: Display + Hash + Eq + Clone,
    F: FnMut(&Span) -> Span,
{
    let errored = !errs.is_empty();

    errs.iter()
        .cloned()
        .map(|err| err.map(|tok| tok.to_string()))
        .for_each(|err| {
            let src_span = span_resolver(&err.span());

            let report = Report::build(ReportKind::Error, &file_path, src_span.start);

            let main_err_label = (&file_path, src_span);

            let report = match err.reason() {
                SimpleReason::Unclosed { span, delimiter } => report
                    .with_message(format!(
                        "Unclosed delimiter {}",
                        delimiter.fg(Color::Yellow)
                    ))
                    .with_label(
                        Label::new((&file_path, span_resolver(span)))
                            .with_message(format!(
                                "Unclosed delimiter {}",
                                delimiter.fg(Color::Yellow)
                            ))
                            .with_color(Color::Yellow),
                    )
                    .with_label(
                        Label::new(main_err_label)
                            .with_message(format!(
                                "Must be closed before this {}",
                                err.found()
                                    .unwrap_or(&"end of file".to_string())
                                    .fg(Color::Red)
                            ))
                            .with_color(Color::Red),
                    ),
                SimpleReason::Unexpected => report
                    .with_message(format!(
                        "{} (expecting: [{}])",
                        match err.found() {
                            Some(_) => "Unexpected input",
                            None => "Unexpected end of file",
                        },
                        err.expected()
                            .map(|expected| match expected {
                                Some(s) => s.as_str(),
                                None => "<EOF>",
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                    .with_label(
                        Label::new(main_err_label)
                            .with_message(format!(
                                "Unexpected {}",
                                err.found()
                                    .unwrap_or(&"end of file".to_string())
                                    .fg(Color::Red)
                            ))
                            .with_color(Color::Red),
                    ),

                SimpleReason::Custom(msg) => report.with_message(msg).with_label(
                    Label::new(main_err_label)
                        .with_message(format!("{}", msg.fg(Color::Red)))
                        .with_color(Color::Red),
                ),
            };

            if let Err(err) = report.finish().print((&file_path, Source::from(&src))) {
                tracing::error!(%err, "failed to print error report");
            }
        });

    errored
}

/// Prints every diagnostic carried by `err` against the puzzle source.
pub fn print_puzzle_error(src: &str, file_path: &str, err: &PuzzleError) {
    match err {
        PuzzleError::Lex(errs) => {
            print_errors(src, file_path, errs, |span| span.clone());
        }
        PuzzleError::Parse { errors, tokens } => {
            print_errors(src, file_path, errors, |tok_span| {
                resolve_span_span(tok_span, tokens)
            });
        }
    }
}
