/// Distance from the top of a stack to the nearest occurrence of a value.
///
/// Variant order matters for the derived `Ord`: every `At` sorts before `Absent`, so a missing
/// value always loses against one that is present, no matter how deeply it is buried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Depth {
    At(usize),
    Absent,
}

impl Depth {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::At(_))
    }

    pub fn is_shallower_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl From<Option<usize>> for Depth {
    fn from(index: Option<usize>) -> Self {
        match index {
            Some(depth) => Self::At(depth),
            None => Self::Absent,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At(depth) => write!(f, "{}", depth),
            Self::Absent => write!(f, "-"),
        }
    }
}
