use crate::planning::{locked_height, target_order, Move, StackId, Stacks};
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move #{index} ({mv}) pops empty stack {}", .mv.from)]
    EmptySource { index: usize, mv: Move },
}

/// A single failed check found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("move #{index} ({mv}) pops an empty stack")]
    EmptySource { index: usize, mv: Move },
    #[error("move #{index} ({mv}) disturbs the locked bottom {locked_height} of stack A")]
    LockedDisturbed {
        index: usize,
        mv: Move,
        locked_height: usize,
    },
    #[error("stack A is not sorted descending (first mismatch at position {position})")]
    Unsorted { position: usize },
    #[error("stack {stack} still holds {remaining} value(s)")]
    NotEmpty { stack: StackId, remaining: usize },
    #[error("{moves} moves exceed the budget of {budget}")]
    OverBudget { moves: usize, budget: usize },
    #[error("values were created or destroyed during replay")]
    NotConserved,
}

#[derive(Debug, Clone)]
pub struct Verdict<T> {
    pub moves: usize,
    pub budget: usize,
    pub final_state: Stacks<T>,
    pub violations: Vec<Violation>,
}

impl<T> Verdict<T> {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Strict replay: the first move popping an empty stack aborts.
pub fn replay<T: Clone>(
    a: &[T],
    b: &[T],
    c: &[T],
    moves: &[Move],
) -> Result<Stacks<T>, ReplayError> {
    let mut stacks = Stacks::from_slices(a, b, c);
    for (index, mv) in moves.iter().enumerate() {
        if !stacks.apply(*mv) {
            return Err(ReplayError::EmptySource { index, mv: *mv });
        }
    }
    Ok(stacks)
}

type Multiset<'a, T> = HashMap<&'a T, usize, ahash::RandomState>;

fn multiset<'a, T: Hash + Eq + 'a>(values: impl Iterator<Item = &'a T>) -> Multiset<'a, T> {
    let mut counts = Multiset::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Replays `moves` against fresh copies of the inputs and checks every goal condition.
///
/// Moves from an empty stack are skipped (as no-ops) and reported, so one bad move doesn't hide
/// the rest of the outcome.
pub fn verify<T: Ord + Clone + Hash>(
    a: &[T],
    b: &[T],
    c: &[T],
    moves: &[Move],
    budget: usize,
) -> Verdict<T> {
    let mut violations = vec![];
    let mut stacks = Stacks::from_slices(a, b, c);
    let target = target_order(&stacks);
    let locked = locked_height(a, &target);

    for (index, mv) in moves.iter().enumerate() {
        if mv.from == StackId::A && stacks.len(StackId::A) <= locked {
            violations.push(Violation::LockedDisturbed {
                index,
                mv: *mv,
                locked_height: locked,
            });
        }
        if !stacks.apply(*mv) {
            violations.push(Violation::EmptySource { index, mv: *mv });
        }
    }

    let final_a = stacks.get(StackId::A);
    if final_a != target.as_slice() {
        let position = final_a
            .iter()
            .zip(&target)
            .position(|(x, y)| x != y)
            .unwrap_or_else(|| final_a.len().min(target.len()));
        violations.push(Violation::Unsorted { position });
    }

    for stack in [StackId::B, StackId::C] {
        if !stacks.is_empty(stack) {
            violations.push(Violation::NotEmpty {
                stack,
                remaining: stacks.len(stack),
            });
        }
    }

    if moves.len() > budget {
        violations.push(Violation::OverBudget {
            moves: moves.len(),
            budget,
        });
    }

    let conserved = {
        let before = multiset(a.iter().chain(b).chain(c));
        let after = multiset(stacks.iter().flat_map(|(_, values)| values.iter()));
        before == after
    };
    if !conserved {
        violations.push(Violation::NotConserved);
    }

    if violations.is_empty() {
        debug!(moves = moves.len(), budget, "replay verified");
    } else {
        for violation in violations.iter() {
            warn!(%violation, "replay check failed");
        }
    }

    Verdict {
        moves: moves.len(),
        budget,
        final_state: stacks,
        violations,
    }
}
