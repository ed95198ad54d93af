use crate::planning::{Move, Stacks};
use crate::replay::ReplayError;
use std::fmt::Display;

/// Minimum character width for the comment start such that a move ("A -> B") and the ending
/// "// start:" header still fit.
const MIN_EXTRA_SIZE: usize = 10;

/// Stacks taller than this only show their top values.
const MAX_SHOWN_VALUES: usize = 12;

pub fn validate_format_params(comment_start: usize) -> Option<String> {
    if comment_start < MIN_EXTRA_SIZE {
        Some(format!(
            "Specified comment start ({}) below minimum ({})",
            comment_start, MIN_EXTRA_SIZE
        ))
    } else {
        None
    }
}

fn stack_repr<T: Display>(values: &[T]) -> String {
    let shown: Vec<String> = values
        .iter()
        .skip(values.len().saturating_sub(MAX_SHOWN_VALUES))
        .map(|v| v.to_string())
        .collect();
    if values.len() > MAX_SHOWN_VALUES {
        format!("[..., {}]", shown.join(", "))
    } else {
        format!("[{}]", shown.join(", "))
    }
}

fn stacks_repr<T: Display>(stacks: &Stacks<T>) -> String {
    stacks
        .iter()
        .map(|(id, values)| format!("{}={}", id, stack_repr(values)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One move per line.
pub fn format_moves(moves: &[Move]) -> String {
    let mut out = String::new();
    for mv in moves {
        out.push_str(&mv.to_string());
        out.push('\n');
    }
    out
}

/// One move per line, each followed by a comment showing the stacks after that move.
pub fn format_with_stack_comments<T: Display + Clone>(
    start: &Stacks<T>,
    moves: &[Move],
    comment_start: usize,
) -> Result<String, ReplayError> {
    let mut out = String::new();
    let mut stacks = start.clone();

    let line = format!("{:<comment_start$}// {}", "// start:", stacks_repr(&stacks));
    out.push_str(&line);
    out.push('\n');

    for (index, mv) in moves.iter().enumerate() {
        if !stacks.apply(*mv) {
            return Err(ReplayError::EmptySource { index, mv: *mv });
        }
        let line = format!("{:<comment_start$}// {}", mv.to_string(), stacks_repr(&stacks));
        out.push_str(&line);
        out.push('\n');
    }

    let line = format!("{:<comment_start$}// {} move(s)", "// total:", moves.len());
    out.push_str(&line);
    out.push('\n');

    Ok(out)
}
