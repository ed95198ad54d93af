use chumsky::prelude::*;
use num_bigint::{BigInt, BigUint};
use thiserror::Error;

use crate::parser::{
    ast::{Ast, Puzzle, StackDefinition},
    lexer::lex,
    tokens::Token,
    types::Spanned,
};
use crate::planning::StackId;

fn ident() -> impl Parser<Token, String, Error = Simple<Token>> {
    select! { Token::Ident(ident) => ident }
}

fn stack_name() -> impl Parser<Token, StackId, Error = Simple<Token>> {
    ident()
        .try_map(|name, span| match name.as_str() {
            "A" => Ok(StackId::A),
            "B" => Ok(StackId::B),
            "C" => Ok(StackId::C),
            _ => Err(Simple::custom(
                span,
                format!("Unknown stack `{}` (expected A, B or C)", name),
            )),
        })
        .labelled("stack name")
}

fn value() -> impl Parser<Token, BigInt, Error = Simple<Token>> {
    just(Token::Minus)
        .or_not()
        .then(select! { Token::Number(num) => num })
        .map(|(minus, num): (Option<Token>, BigUint)| {
            let value = BigInt::from(num);
            match minus {
                Some(_) => -value,
                None => value,
            }
        })
        .labelled("value")
}

fn stack_contents() -> impl Parser<Token, Result<Vec<BigInt>, ()>, Error = Simple<Token>> {
    value()
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .delimited_by(just(Token::OpenSquare), just(Token::CloseSquare))
        .map(Ok)
        .recover_with(nested_delimiters(
            Token::OpenSquare,
            Token::CloseSquare,
            [],
            |_| Err(()),
        ))
}

fn stack_definition() -> impl Parser<Token, Ast, Error = Simple<Token>> {
    // A = [1, 5, 8]
    stack_name()
        .map_with_span(Spanned::new)
        .then_ignore(just(Token::Assign))
        .then(stack_contents())
        .map(|(stack, maybe_values)| {
            maybe_values
                .map(|values| Ast::Stack(StackDefinition { stack, values }))
                .unwrap_or(Ast::Error)
        })
}

pub fn parser() -> impl Parser<Token, Vec<Spanned<Ast>>, Error = Simple<Token>> {
    stack_definition()
        .map_with_span(Spanned::new)
        .repeated()
        .then_ignore(end())
}

pub fn parse_tokens(tokens: Vec<Token>) -> (Option<Vec<Spanned<Ast>>>, Vec<Simple<Token>>) {
    parser().parse_recovery(tokens)
}

/// Folds stack definitions into a puzzle, rejecting stacks that are assigned twice. Stacks that
/// are never assigned stay empty.
pub fn build_puzzle(ast_nodes: Vec<Spanned<Ast>>) -> Result<Puzzle, Vec<Simple<Token>>> {
    let mut puzzle = Puzzle::default();
    let mut assigned: Vec<StackId> = vec![];
    let mut errs = vec![];

    for node in ast_nodes {
        let Ast::Stack(def) = node.inner else {
            continue;
        };
        let id = def.stack.inner;
        if assigned.contains(&id) {
            errs.push(Simple::custom(
                def.stack.span,
                format!("Stack {} assigned more than once", id),
            ));
            continue;
        }
        assigned.push(id);
        *puzzle.stack_mut(id) = def.values;
    }

    if errs.is_empty() {
        Ok(puzzle)
    } else {
        Err(errs)
    }
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to tokenize puzzle ({} error(s))", .0.len())]
    Lex(Vec<Simple<char>>),
    #[error("failed to parse puzzle ({} error(s))", .errors.len())]
    Parse {
        errors: Vec<Simple<Token>>,
        tokens: Vec<Spanned<Token>>,
    },
}

/// Lexes and parses a puzzle file.
pub fn load(src: &str) -> Result<Puzzle, PuzzleError> {
    let spanned_tokens = lex(src).map_err(PuzzleError::Lex)?;
    let tokens: Vec<_> = spanned_tokens.iter().map(|t| t.inner.clone()).collect();

    // Duplicate assignments are checked on the recovered AST as well.
    let (maybe_ast_nodes, mut errors) = parse_tokens(tokens);
    match maybe_ast_nodes.map(build_puzzle) {
        Some(Ok(puzzle)) if errors.is_empty() => Ok(puzzle),
        built => {
            if let Some(Err(mut build_errors)) = built {
                errors.append(&mut build_errors);
            }
            Err(PuzzleError::Parse {
                errors,
                tokens: spanned_tokens,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chumsky::error::SimpleReason;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|v| BigInt::from(*v)).collect()
    }

    #[test]
    fn test_load_puzzle() {
        let puzzle = load(
            "// nine boxes\n\
             A = [1, 5, 8]\n\
             B = [2, 6, 0x9,]\n\
             C = [3, -4, 7]\n",
        )
        .unwrap();
        assert_eq!(puzzle.a, ints(&[1, 5, 8]));
        assert_eq!(puzzle.b, ints(&[2, 6, 9]));
        assert_eq!(puzzle.c, ints(&[3, -4, 7]));
    }

    #[test]
    fn test_missing_stacks_are_empty() {
        let puzzle = load("C = [1] A = []").unwrap();
        assert!(puzzle.a.is_empty());
        assert!(puzzle.b.is_empty());
        assert_eq!(puzzle.c, ints(&[1]));
    }

    #[test]
    fn test_unknown_stack() {
        match load("D = [1]") {
            Err(PuzzleError::Parse { errors, .. }) => {
                assert!(!errors.is_empty());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_stack() {
        match load("A = [1]\nB = [2]\nA = [3]") {
            Err(PuzzleError::Parse { errors, .. }) => {
                assert_eq!(errors.len(), 1);
                // Token indices, not source offsets.
                assert_eq!(errors[0].span(), 10..11);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_recovers_inside_brackets() {
        match load("A = [1 2]\nB = [3]") {
            Err(PuzzleError::Parse { errors, .. }) => assert!(!errors.is_empty()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_reported_with_syntax_error() {
        match load("A = [1]\nB = [2 3]\nA = [4]") {
            Err(PuzzleError::Parse { errors, .. }) => {
                assert_eq!(errors.len(), 2, "{:?}", errors);
                // The second `A` is token 11.
                let duplicate = errors
                    .iter()
                    .find(|err| matches!(err.reason(), SimpleReason::Custom(_)))
                    .expect("duplicate assignment not reported");
                assert_eq!(duplicate.span(), 11..12);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_lex_error() {
        assert!(matches!(load("A = [1; 2]"), Err(PuzzleError::Lex(_))));
    }
}
