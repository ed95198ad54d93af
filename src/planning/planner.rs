use crate::planning::{Move, StackId, Stacks};
use tracing::{debug, trace};

/// Counters collected while planning, mostly useful for reports and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub values: usize,
    pub locked_height: usize,
    pub evictions: usize,
    /// Obstructing values moved between B and C during the build phase.
    pub shelved: usize,
    pub placements: usize,
}

impl PlanSummary {
    pub fn total_moves(&self) -> usize {
        self.evictions + self.shelved + self.placements
    }
}

/// Every value across the three stacks, sorted descending. `target[0]` ends up at the bottom of A.
pub fn target_order<T: Ord + Clone>(stacks: &Stacks<T>) -> Vec<T> {
    let mut target: Vec<T> = stacks
        .iter()
        .flat_map(|(_, values)| values.iter().cloned())
        .collect();
    target.sort_unstable_by(|x, y| y.cmp(x));
    target
}

/// Number of bottom positions of `a` that already hold their final value.
pub fn locked_height<T: PartialEq>(a: &[T], target: &[T]) -> usize {
    a.iter()
        .zip(target)
        .take_while(|(placed, wanted)| placed == wanted)
        .count()
}

#[derive(Debug, Clone)]
pub struct Planner<T> {
    stacks: Stacks<T>,
    target: Vec<T>,
    locked_height: usize,
    moves: Vec<Move>,
    summary: PlanSummary,
}

impl<T: Ord + Clone> Planner<T> {
    pub fn new(a: &[T], b: &[T], c: &[T]) -> Self {
        let stacks = Stacks::from_slices(a, b, c);
        let target = target_order(&stacks);
        let locked_height = locked_height(a, &target);
        Self {
            summary: PlanSummary {
                values: target.len(),
                locked_height,
                ..Default::default()
            },
            stacks,
            target,
            locked_height,
            moves: vec![],
        }
    }

    pub fn locked_height(&self) -> usize {
        self.locked_height
    }

    pub fn plan(mut self) -> (Vec<Move>, PlanSummary) {
        debug!(
            values = self.target.len(),
            locked_height = self.locked_height,
            "planning"
        );

        self.evict();
        self.build();

        debug_assert!(self.stacks.is_empty(StackId::B) && self.stacks.is_empty(StackId::C));
        debug_assert!(self.stacks.get(StackId::A) == self.target.as_slice());
        debug!(
            evictions = self.summary.evictions,
            shelved = self.summary.shelved,
            placements = self.summary.placements,
            total = self.moves.len(),
            "plan complete"
        );

        (self.moves, self.summary)
    }

    fn step(&mut self, from: StackId, to: StackId) {
        let mv = Move::new(from, to);
        let moved = self.stacks.apply(mv);
        debug_assert!(moved, "Planned move {} from empty stack", mv);
        trace!(step = self.moves.len(), %mv, "move");
        self.moves.push(mv);
    }

    /// Strips A down to its locked prefix, keeping the next needed value reachable.
    fn evict(&mut self) {
        let Some(next) = self.target.get(self.locked_height).cloned() else {
            return;
        };
        while self.stacks.len(StackId::A) > self.locked_height {
            let in_b = self.stacks.depth_of(StackId::B, &next);
            let in_c = self.stacks.depth_of(StackId::C, &next);
            let to = if in_b.is_shallower_than(&in_c) {
                StackId::C
            } else {
                StackId::B
            };
            trace!(%in_b, %in_c, %to, "evicting");
            self.step(StackId::A, to);
            self.summary.evictions += 1;
        }
    }

    /// Rebuilds A above the locked prefix, largest remaining value first.
    fn build(&mut self) {
        for position in self.locked_height..self.target.len() {
            let target_val = self.target[position].clone();
            let in_b = self.stacks.depth_of(StackId::B, &target_val);
            let in_c = self.stacks.depth_of(StackId::C, &target_val);
            debug_assert!(
                in_b.is_present() || in_c.is_present(),
                "Value for position {} neither in B nor C",
                position
            );
            let (source, temp) = if in_b <= in_c {
                (StackId::B, StackId::C)
            } else {
                (StackId::C, StackId::B)
            };
            trace!(position, %in_b, %in_c, %source, "placing");

            while self
                .stacks
                .top(source)
                .is_some_and(|top| *top != target_val)
            {
                self.step(source, temp);
                self.summary.shelved += 1;
            }
            self.step(source, StackId::A);
            self.summary.placements += 1;
        }
    }
}

/// Plans the moves that leave A sorted descending (largest at the bottom) with B and C empty.
pub fn solve<T: Ord + Clone>(a: &[T], b: &[T], c: &[T]) -> Vec<Move> {
    Planner::new(a, b, c).plan().0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::planning::StackId::{A, B, C};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn mv(from: StackId, to: StackId) -> Move {
        Move::new(from, to)
    }

    fn replayed(a: &[i64], b: &[i64], c: &[i64], moves: &[Move]) -> [Vec<i64>; 3] {
        let mut stacks = Stacks::from_slices(a, b, c);
        for (i, m) in moves.iter().enumerate() {
            assert!(stacks.apply(*m), "move #{} ({}) popped an empty stack", i, m);
        }
        stacks.into_inner()
    }

    #[test]
    fn test_target_order() {
        let stacks = Stacks::new(vec![1, 5, 8], vec![2, 6, 9], vec![3, 4, 7]);
        assert_eq!(target_order(&stacks), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_locked_height() {
        assert_eq!(locked_height(&[50, 10], &[50, 40, 30, 10]), 1);
        assert_eq!(locked_height(&[10, 5], &[20, 10, 5]), 0);
        assert_eq!(locked_height(&[9, 8], &[9, 8, 1]), 2);
        assert_eq!(locked_height::<i32>(&[], &[3]), 0);
    }

    #[test]
    fn test_evicts_then_builds() {
        let moves = solve(&[10, 5], &[20], &[]);
        assert_eq!(moves, vec![mv(A, C), mv(A, C), mv(B, A), mv(C, A), mv(C, A)]);
        let [a, b, c] = replayed(&[10, 5], &[20], &[], &moves);
        assert_eq!(a, vec![20, 10, 5]);
        assert!(b.is_empty());
        assert!(c.is_empty());
    }

    #[test]
    fn test_duplicates() {
        let moves = solve(&[5], &[10], &[10]);
        assert_eq!(moves, vec![mv(A, B), mv(C, A), mv(B, C), mv(B, A), mv(C, A)]);
        let [a, b, c] = replayed(&[5], &[10], &[10], &moves);
        assert_eq!(a, vec![10, 10, 5]);
        assert!(b.is_empty() && c.is_empty());
    }

    #[test]
    fn test_locked_prefix_untouched() {
        let planner = Planner::new(&[50, 10], &[40], &[30]);
        assert_eq!(planner.locked_height(), 1);
        let (moves, summary) = planner.plan();
        assert_eq!(moves, vec![mv(A, C), mv(B, A), mv(C, B), mv(C, A), mv(B, A)]);
        assert_eq!(
            summary,
            PlanSummary {
                values: 4,
                locked_height: 1,
                evictions: 1,
                shelved: 1,
                placements: 3,
            }
        );
        assert_eq!(summary.total_moves(), moves.len());

        let [a, b, c] = replayed(&[50, 10], &[40], &[30], &moves);
        assert_eq!(a, vec![50, 40, 30, 10]);
        assert!(b.is_empty() && c.is_empty());
    }

    #[test]
    fn test_nine_boxes_within_budget() {
        let moves = solve(&[1, 5, 8], &[2, 6, 9], &[3, 4, 7]);
        assert!(moves.len() <= crate::DEFAULT_MOVE_BUDGET);
        let [a, b, c] = replayed(&[1, 5, 8], &[2, 6, 9], &[3, 4, 7], &moves);
        assert_eq!(a, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(b.is_empty() && c.is_empty());
    }

    #[test]
    fn test_already_solved() {
        assert!(solve(&[3, 2, 1], &[], &[]).is_empty());
        assert!(solve::<i32>(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_all_in_auxiliary_stacks() {
        let moves = solve(&[], &[1, 2], &[3]);
        let [a, b, c] = replayed(&[], &[1, 2], &[3], &moves);
        assert_eq!(a, vec![3, 2, 1]);
        assert!(b.is_empty() && c.is_empty());
    }

    #[test]
    fn test_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0xb0c5);
        for _ in 0..500 {
            let total = rng.gen_range(0..=9);
            let mut a = vec![];
            let mut b = vec![];
            let mut c = vec![];
            for _ in 0..total {
                let value = rng.gen_range(0..6i64);
                match rng.gen_range(0..3) {
                    0 => a.push(value),
                    1 => b.push(value),
                    _ => c.push(value),
                }
            }

            let planner = Planner::new(&a, &b, &c);
            let locked = planner.locked_height();
            let (moves, _) = planner.plan();
            assert!(moves.len() <= total + total * total);
            assert!(moves.len() <= crate::DEFAULT_MOVE_BUDGET);

            let mut stacks = Stacks::from_slices(&a, &b, &c);
            for m in moves.iter() {
                if m.from == StackId::A {
                    assert!(stacks.len(StackId::A) > locked, "locked prefix disturbed");
                }
                assert!(stacks.apply(*m));
            }
            let mut expected: Vec<i64> = a.iter().chain(&b).chain(&c).cloned().collect();
            expected.sort_by(|x, y| y.cmp(x));
            let [final_a, final_b, final_c] = stacks.into_inner();
            assert_eq!(final_a, expected, "inputs: {:?} {:?} {:?}", a, b, c);
            assert!(final_b.is_empty() && final_c.is_empty());
        }
    }
}
