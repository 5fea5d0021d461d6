// crates/parkmap-core/src/wkt.rs

//! Reader for the `MULTILINESTRING` values found in the `line` column.
//!
//! Grammar (whitespace allowed between all terminals, keywords are ASCII
//! case-insensitive):
//!
//! ```text
//! value := "MULTILINESTRING" [ "Z" | "M" | "ZM" ] ( "EMPTY" | "(" part { "," part } ")" )
//! part  := "(" [ pair { "," pair } ] ")"
//! pair  := number number { number }
//! ```
//!
//! Structural problems fail the whole value with a [`GeometryError`]. A bad
//! `pair` only drops that pair and is reported as a [`TokenError`]. All parts
//! are flattened in order into one coordinate sequence.

use crate::error::{GeometryError, TokenError, TokenFault};
use crate::geojson::Coordinate;

/// Coordinates kept from one value plus the tokens that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLine {
    pub coordinates: Vec<Coordinate>,
    pub rejected: Vec<TokenError>,
}

impl ParsedLine {
    /// Requires at least two coordinates, the minimum for a drawable line.
    pub fn into_line(self) -> Result<(Vec<Coordinate>, Vec<TokenError>), GeometryError> {
        if self.coordinates.len() < 2 {
            return Err(GeometryError::TooFewCoordinates {
                found: self.coordinates.len(),
                rejected: self.rejected,
            });
        }
        Ok((self.coordinates, self.rejected))
    }
}

/// Parse a `MULTILINESTRING` value, keeping every valid pair.
pub fn parse_multilinestring(input: &str) -> Result<ParsedLine, GeometryError> {
    let mut cur = Cursor::new(input);
    if !cur.eat_keyword("MULTILINESTRING") {
        return Err(GeometryError::MissingKeyword);
    }
    let _ = cur.eat_keyword("ZM") || cur.eat_keyword("Z") || cur.eat_keyword("M");

    let mut out = ParsedLine::default();
    if cur.eat_keyword("EMPTY") {
        cur.finish()?;
        return Ok(out);
    }

    cur.expect('(')?;
    let mut index = 0;
    loop {
        cur.expect('(')?;
        let body = cur.take_pair_list();
        cur.expect(')')?;
        read_pairs(body, &mut index, &mut out);
        if !cur.eat(',') {
            break;
        }
    }
    cur.expect(')')?;
    cur.finish()?;
    Ok(out)
}

/// Parse a value and require a drawable line (≥ 2 coordinates).
///
/// ```rust
/// use parkmap_core::wkt::line_coordinates;
///
/// let coords = line_coordinates("MULTILINESTRING ((-114.08 51.05, -114.07 51.06))").unwrap();
/// assert_eq!(coords.len(), 2);
/// assert!(line_coordinates("MULTILINESTRING (())").is_err());
/// ```
pub fn line_coordinates(input: &str) -> Result<Vec<Coordinate>, GeometryError> {
    parse_multilinestring(input)?
        .into_line()
        .map(|(coords, _)| coords)
}

fn read_pairs(body: &str, index: &mut usize, out: &mut ParsedLine) {
    if body.trim().is_empty() {
        return;
    }
    for raw in body.split(',') {
        let token = raw.trim();
        let i = *index;
        *index += 1;
        match parse_pair(token) {
            Ok(c) => out.coordinates.push(c),
            Err(fault) => out.rejected.push(TokenError {
                index: i,
                token: token.to_string(),
                fault,
            }),
        }
    }
}

fn parse_pair(token: &str) -> Result<Coordinate, TokenFault> {
    let mut parts = token.split_whitespace();
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return Err(TokenFault::MissingComponent);
    };
    let lng: f64 = x.parse().map_err(|_| TokenFault::NotANumber)?;
    let lat: f64 = y.parse().map_err(|_| TokenFault::NotANumber)?;
    if !lng.is_finite() || !lat.is_finite() {
        return Err(TokenFault::NotFinite);
    }
    Ok(Coordinate::new(lng, lat))
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, ch: char) -> bool {
        self.skip_ws();
        if self.rest().starts_with(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, ch: char) -> Result<(), GeometryError> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(GeometryError::Expected {
                expected: ch,
                position: self.pos,
            })
        }
    }

    fn eat_keyword(&mut self, kw: &str) -> bool {
        self.skip_ws();
        let matched = self
            .rest()
            .get(..kw.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(kw));
        let boundary = self
            .rest()
            .get(kw.len()..)
            .and_then(|tail| tail.chars().next())
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if matched && boundary {
            self.pos += kw.len();
            true
        } else {
            false
        }
    }

    /// Everything up to the next parenthesis.
    fn take_pair_list(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| c == '(' || c == ')').unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn finish(&mut self) -> Result<(), GeometryError> {
        self.skip_ws();
        if self.pos < self.src.len() {
            return Err(GeometryError::TrailingInput { position: self.pos });
        }
        Ok(())
    }
}
