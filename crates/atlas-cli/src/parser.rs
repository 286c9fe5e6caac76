//! Command-line grammar.
//!
//! One command per line, fields separated by `;`.  Lines starting with `#`
//! and empty lines are ignored.  A line whose last byte is `;` is
//! malformed — the grammar has no trailing separator — and consecutive
//! separators produce an empty field, which no validator accepts.
//!
//! The numeric form `<n>;city;length;year;city;…` (with `n` a route
//! number) is the route-description command: it assembles edge quadruples
//! for [`Atlas::build_route`](atlas_map::Atlas::build_route).
//!
//! Everything here borrows from the input line; the driver keeps the line
//! buffer alive for the duration of one command.

use thiserror::Error;

use atlas_core::{RouteId, parse_route_id, parse_unsigned, parse_year};
use atlas_map::RoadLeg;

/// Errors produced by the line parser.  The driver folds them all into the
/// same per-line `ERROR` report; the distinctions exist for logging.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line ends with a field separator")]
    TrailingSeparator,

    #[error("unknown command")]
    UnknownCommand,

    #[error("wrong number of fields")]
    WrongArity,

    #[error("malformed numeric field")]
    BadNumber,
}

/// A parsed command, borrowing its string fields from the input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    AddRoad { city1: &'a [u8], city2: &'a [u8], length: u32, year: i32 },
    RepairRoad { city1: &'a [u8], city2: &'a [u8], year: i32 },
    RouteDescription { id: RouteId },
    NewRoute { id: RouteId, city1: &'a [u8], city2: &'a [u8] },
    ExtendRoute { id: RouteId, city: &'a [u8] },
    RemoveRoad { city1: &'a [u8], city2: &'a [u8] },
    RemoveRoute { id: RouteId },
    BuildRoute { id: RouteId, legs: Vec<RoadLeg<'a>> },
}

/// Parse one line (newline already stripped).  `Ok(None)` means the line
/// is a comment or empty and carries no command.
pub fn parse_line(line: &[u8]) -> Result<Option<Command<'_>>, ParseError> {
    if line.is_empty() || line[0] == b'#' {
        return Ok(None);
    }
    if line.last() == Some(&b';') {
        return Err(ParseError::TrailingSeparator);
    }

    let fields: Vec<&[u8]> = line.split(|&b| b == b';').collect();
    let command = match fields[0] {
        b"addRoad" => {
            expect_arity(&fields, 5)?;
            Command::AddRoad {
                city1: fields[1],
                city2: fields[2],
                length: parse_unsigned(fields[3]).ok_or(ParseError::BadNumber)?,
                year: parse_year(fields[4]).ok_or(ParseError::BadNumber)?,
            }
        }
        b"repairRoad" => {
            expect_arity(&fields, 4)?;
            Command::RepairRoad {
                city1: fields[1],
                city2: fields[2],
                year: parse_year(fields[3]).ok_or(ParseError::BadNumber)?,
            }
        }
        b"getRouteDescription" => {
            expect_arity(&fields, 2)?;
            Command::RouteDescription {
                id: parse_route_id(fields[1]).ok_or(ParseError::BadNumber)?,
            }
        }
        b"newRoute" => {
            expect_arity(&fields, 4)?;
            Command::NewRoute {
                id: parse_route_id(fields[1]).ok_or(ParseError::BadNumber)?,
                city1: fields[2],
                city2: fields[3],
            }
        }
        b"extendRoute" => {
            expect_arity(&fields, 3)?;
            Command::ExtendRoute {
                id: parse_route_id(fields[1]).ok_or(ParseError::BadNumber)?,
                city: fields[2],
            }
        }
        b"removeRoad" => {
            expect_arity(&fields, 3)?;
            Command::RemoveRoad { city1: fields[1], city2: fields[2] }
        }
        b"removeRoute" => {
            expect_arity(&fields, 2)?;
            Command::RemoveRoute {
                id: parse_route_id(fields[1]).ok_or(ParseError::BadNumber)?,
            }
        }
        head => {
            // The numeric route-description form; anything non-numeric (or
            // out of the 1..=999 range) is not a command we know.
            let id = parse_route_id(head).ok_or(ParseError::UnknownCommand)?;
            Command::BuildRoute { id, legs: parse_legs(&fields[1..])? }
        }
    };
    Ok(Some(command))
}

/// Assemble `city (length year city)+` fields into edge quadruples.
fn parse_legs<'a>(fields: &[&'a [u8]]) -> Result<Vec<RoadLeg<'a>>, ParseError> {
    // One starting city plus at least one (length, year, city) triple.
    if fields.len() < 4 || (fields.len() - 1) % 3 != 0 {
        return Err(ParseError::WrongArity);
    }
    let mut legs = Vec::with_capacity(fields.len() / 3);
    let mut city_a = fields[0];
    for triple in fields[1..].chunks_exact(3) {
        let leg = RoadLeg {
            city_a,
            length: parse_unsigned(triple[0]).ok_or(ParseError::BadNumber)?,
            year: parse_year(triple[1]).ok_or(ParseError::BadNumber)?,
            city_b: triple[2],
        };
        city_a = leg.city_b;
        legs.push(leg);
    }
    Ok(legs)
}

fn expect_arity(fields: &[&[u8]], arity: usize) -> Result<(), ParseError> {
    if fields.len() == arity { Ok(()) } else { Err(ParseError::WrongArity) }
}
