use chumsky::prelude::*;
use num_bigint::BigUint;

use crate::parser::{tokens::Token, types::Spanned};

fn text(
    literal: &'static str,
    token: Token,
    label: &'static str,
) -> impl Parser<char, Token, Error = Simple<char>> {
    just(literal).to(token).labelled(label)
}

fn symbols() -> impl Parser<char, Token, Error = Simple<char>> {
    text("[", Token::OpenSquare, "open square bracket")
        .or(text("]", Token::CloseSquare, "close square bracket"))
        .or(text(",", Token::Comma, "comma"))
        .or(text("=", Token::Assign, "assign"))
        .or(text("-", Token::Minus, "minus"))
}

fn string_to_num<const BASE: u32>(s: String) -> Token {
    Token::Number(
        BigUint::parse_bytes(s.as_bytes(), BASE).expect("Lexer should've ensured only valid bytes"),
    )
}

fn number() -> impl Parser<char, Token, Error = Simple<char>> {
    let decimal = text::digits(10).map(string_to_num::<10>);
    let hexadecimal = just("0x")
        .ignore_then(text::digits(16))
        .map(string_to_num::<16>);

    hexadecimal.or(decimal).labelled("number")
}

fn ident() -> impl Parser<char, Token, Error = Simple<char>> {
    text::ident().map(Token::Ident).labelled("identifier")
}

pub fn lexer() -> impl Parser<char, Vec<Spanned<Token>>, Error = Simple<char>> {
    let single_line_comment = just("//").then(take_until(text::newline().or(end()))).to(());

    let multi_line_comment = just("/*").then(take_until(just("*/"))).to(());

    let comment = single_line_comment
        .or(multi_line_comment)
        .padded()
        .labelled("comment");

    let token = symbols().or(number()).or(ident());

    token
        .map_with_span(Spanned::new)
        .padded_by(comment.repeated())
        .padded()
        .repeated()
        .then_ignore(end())
}

pub fn lex(source: &str) -> Result<Vec<Spanned<Token>>, Vec<Simple<char>>> {
    lexer().parse(source)
}
