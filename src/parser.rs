// ABOUTME: nom parser producing the lexeme tree the reader turns into values

use nom::{
    branch::alt,
    bytes::complete::{escaped, take_while, take_while1},
    character::complete::{anychar, char, digit1, multispace1, none_of},
    combinator::{opt, recognize, value},
    multi::many0,
    IResult, Parser,
};

use crate::error::ParseError;

/// Parse-tree node carrying raw lexemes. Numbers stay unparsed (the reader
/// owns the overflow check) and string contents keep their escapes encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Number(String),
    Symbol(String),
    Str(String),
    Sexpr(Vec<Ast>),
    Qexpr(Vec<Ast>),
}

/// Parse a whole program: zero or more top-level expressions.
pub fn parse(input: &str) -> Result<Vec<Ast>, ParseError> {
    let mut nodes = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = ws(remaining).unwrap_or((remaining, ()));
        if rest.is_empty() {
            return Ok(nodes);
        }
        match expr(rest) {
            Ok((rest, node)) => {
                nodes.push(node);
                remaining = rest;
            }
            Err(_) => return Err(ParseError::unexpected(rest)),
        }
    }
}

/// Skip whitespace and `;` line comments.
fn ws(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), comment)))
        .map(|_| ())
        .parse(input)
}

fn comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = take_while(|c| c != '\r' && c != '\n')(input)?;
    Ok((input, ()))
}

fn number(input: &str) -> IResult<&str, Ast> {
    recognize((opt(char('-')), digit1))
        .map(|lexeme: &str| Ast::Number(lexeme.to_string()))
        .parse(input)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(c)
}

fn symbol(input: &str) -> IResult<&str, Ast> {
    take_while1(is_symbol_char)
        .map(|lexeme: &str| Ast::Symbol(lexeme.to_string()))
        .parse(input)
}

/// String literal: the quotes are stripped, the contents kept raw.
fn string(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('"')(input)?;

    // escaped() rejects empty input, so probe for the closing quote first
    if let Ok((rest, _)) = char::<_, nom::error::Error<_>>('"')(input) {
        return Ok((rest, Ast::Str(String::new())));
    }

    let (input, contents) = escaped(none_of("\"\\"), '\\', anychar)(input)?;
    let (input, _) = char('"')(input)?;
    Ok((input, Ast::Str(contents.to_string())))
}

/// Children of a bracketed sequence, after the opening bracket.
fn seq(input: &str, close: char) -> IResult<&str, Vec<Ast>> {
    let mut items = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = ws(remaining)?;
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>(close)(rest) {
            return Ok((rest, items));
        }
        let (rest, item) = expr(rest)?;
        items.push(item);
        remaining = rest;
    }
}

fn sexpr(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('(')(input)?;
    let (input, items) = seq(input, ')')?;
    Ok((input, Ast::Sexpr(items)))
}

fn qexpr(input: &str) -> IResult<&str, Ast> {
    let (input, _) = char('{')(input)?;
    let (input, items) = seq(input, '}')?;
    Ok((input, Ast::Qexpr(items)))
}

// number before symbol: the symbol charset includes digits, so `-5` must lex
// as a number while `-` alone stays a symbol.
fn expr(input: &str) -> IResult<&str, Ast> {
    alt((sexpr, qexpr, string, number, symbol)).parse(input)
}
