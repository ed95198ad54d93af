use crate::parser::types::Ident;
use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    // ============ Atoms =============
    Ident(Ident),
    Number(BigUint),
    // =========== Symbols ============
    OpenSquare,
    CloseSquare,
    Comma,
    Assign,
    Minus,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ident(ident) => write!(f, "`{}`", ident),
            Self::Number(num) => write!(f, "{}", num),
            Self::OpenSquare => write!(f, "["),
            Self::CloseSquare => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Assign => write!(f, "="),
            Self::Minus => write!(f, "-"),
        }
    }
}
