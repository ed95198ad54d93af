use crate::planning::{Depth, Move};
use crate::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackId {
    A,
    B,
    C,
}

impl StackId {
    pub const ALL: [StackId; 3] = [StackId::A, StackId::B, StackId::C];

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// The three named stacks. Index 0 of every stack is its bottom, the last element its top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stacks<T> {
    stacks: [Vec<T>; 3],
}

impl<T> Stacks<T> {
    pub fn new(a: Vec<T>, b: Vec<T>, c: Vec<T>) -> Self {
        Self { stacks: [a, b, c] }
    }

    pub fn from_slices(a: &[T], b: &[T], c: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(a.to_vec(), b.to_vec(), c.to_vec())
    }

    pub fn get(&self, id: StackId) -> &[T] {
        &self.stacks[id.index()]
    }

    pub fn top(&self, id: StackId) -> Option<&T> {
        self.stacks[id.index()].last()
    }

    pub fn len(&self, id: StackId) -> usize {
        self.stacks[id.index()].len()
    }

    pub fn is_empty(&self, id: StackId) -> bool {
        self.stacks[id.index()].is_empty()
    }

    pub fn total(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StackId, &[T])> {
        StackId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Applies a single move. Popping an empty stack leaves everything untouched and returns
    /// `false`.
    pub fn apply(&mut self, mv: Move) -> bool {
        match self.stacks[mv.from.index()].pop() {
            Some(value) => {
                self.stacks[mv.to.index()].push(value);
                true
            }
            None => false,
        }
    }

    pub fn depth_of(&self, id: StackId, value: &T) -> Depth
    where
        T: PartialEq,
    {
        self.stacks[id.index()].iter().rev().index_of(value).into()
    }

    pub fn into_inner(self) -> [Vec<T>; 3] {
        self.stacks
    }
}

impl<T> std::ops::Index<StackId> for Stacks<T> {
    type Output = [T];

    fn index(&self, id: StackId) -> &Self::Output {
        self.get(id)
    }
}
