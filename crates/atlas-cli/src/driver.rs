//! The read–dispatch–report loop.
//!
//! Reads raw byte lines (city names need not be UTF-8), executes each
//! command against the map, and reports every failed line as
//! `ERROR <line-number>` on the error stream.  Ignored lines (comments,
//! blanks) still advance the line counter.  The loop never stops early:
//! a bad line is reported and the next one runs.

use std::io::{self, BufRead, Write};

use log::debug;

use atlas_map::{Atlas, MapResult};

use crate::parser::{Command, parse_line};

/// Drive `atlas` with the command text from `input` until end of input.
///
/// Route descriptions go to `out`; `ERROR <n>` reports go to `err`.
/// The only hard failures are I/O errors on the streams themselves.
pub fn run<R, W, E>(atlas: &mut Atlas, mut input: R, mut out: W, mut err: E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        if !execute(atlas, &line, &mut out)? {
            writeln!(err, "ERROR {line_no}")?;
        }
    }
    Ok(())
}

/// Run one line; `false` means the line must be reported as an error.
fn execute<W: Write>(atlas: &mut Atlas, line: &[u8], out: &mut W) -> io::Result<bool> {
    let command = match parse_line(line) {
        Ok(None) => return Ok(true),
        Ok(Some(command)) => command,
        Err(e) => {
            debug!("unparseable line: {e}");
            return Ok(false);
        }
    };

    let outcome = match command {
        Command::AddRoad { city1, city2, length, year } => {
            atlas.add_road(city1, city2, length, year)
        }
        Command::RepairRoad { city1, city2, year } => atlas.repair_road(city1, city2, year),
        Command::RouteDescription { id } => {
            let description = atlas.route_description(id);
            out.write_all(&description)?;
            out.write_all(b"\n")?;
            Ok(())
        }
        Command::NewRoute { id, city1, city2 } => atlas.new_route(id, city1, city2),
        Command::ExtendRoute { id, city } => atlas.extend_route(id, city),
        Command::RemoveRoad { city1, city2 } => atlas.remove_road(city1, city2),
        Command::RemoveRoute { id } => atlas.remove_route(id),
        Command::BuildRoute { id, legs } => atlas.build_route(id, &legs),
    };
    Ok(report(outcome))
}

fn report(outcome: MapResult<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            debug!("command rejected: {e}");
            false
        }
    }
}
