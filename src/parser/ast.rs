use crate::parser::types::Spanned;
use crate::planning::StackId;
use num_bigint::BigInt;

#[derive(Clone, Debug)]
pub struct StackDefinition {
    pub stack: Spanned<StackId>,
    pub values: Vec<BigInt>,
}

#[derive(Clone, Debug)]
pub enum Ast {
    Stack(StackDefinition),
    Error,
}

/// Initial contents of the three stacks, bottom first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub a: Vec<BigInt>,
    pub b: Vec<BigInt>,
    pub c: Vec<BigInt>,
}

impl Puzzle {
    pub fn stack_mut(&mut self, id: StackId) -> &mut Vec<BigInt> {
        match id {
            StackId::A => &mut self.a,
            StackId::B => &mut self.b,
            StackId::C => &mut self.c,
        }
    }
}
