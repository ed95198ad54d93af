use crate::planning::StackId;

/// Pop the top of `from` and push it onto `to`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct Move {
    pub from: StackId,
    pub to: StackId,
}

impl Move {
    pub fn new(from: StackId, to: StackId) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Move::new(StackId::A, StackId::C).to_string(), "A -> C");
        assert_eq!(Move::new(StackId::B, StackId::A).to_string(), "B -> A");
    }
}
