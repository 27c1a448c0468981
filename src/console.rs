//! Menu-driven console front end over the example route network.
//!
//! The loop reads from and writes to injected streams so it can be exercised
//! in tests with plain buffers.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use itertools::Itertools;

use crate::graph::{PathResult, ShortestPaths};
use crate::routes::{self, STATIONS};

/// Build the example network, solve it, and run the menu loop until the user
/// quits or input runs out.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let graph = routes::example_network();
    let names = graph.vertices();

    let mut paths = ShortestPaths::new(graph.distance_matrix());
    paths.compute();

    loop {
        write_menu(output)?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.trim() {
            "1" => shortest_route(&paths, &names, input, output)?,
            "2" => match paths.center(&names) {
                Ok(Some(center)) => {
                    writeln!(output, "The center of the network is {}.", center.bold())?
                }
                Ok(None) => writeln!(output, "The network has no center.")?,
                Err(err) => writeln!(output, "{}", err.to_string().red())?,
            },
            "3" => match distance_table(&paths, &names) {
                Ok(table) => writeln!(output, "\nShortest distances:\n{table}")?,
                Err(err) => writeln!(output, "{}", err.to_string().red())?,
            },
            "4" => {
                writeln!(output, "Leaving the route planner.")?;
                break;
            }
            other => writeln!(output, "{}", format!("Unknown option: {other}").red())?,
        }
    }

    Ok(())
}

fn write_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "\n{}\n", "Route network planner".bold())?;
    writeln!(output, "1. Shortest route between two stations")?;
    writeln!(output, "2. Center of the network")?;
    writeln!(output, "3. Distance table")?;
    writeln!(output, "4. Quit")?;
    write!(output, "\nSelect an option: ")?;
    output.flush()
}

/// Prompt for origin and destination stations, then report the shortest
/// route between them.  Unknown stations warn and return to the menu.
fn shortest_route(
    paths: &ShortestPaths,
    names: &[&str],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "\nAvailable stations:")?;
    for (label, place) in STATIONS {
        writeln!(output, "  {label}: {place}")?;
    }
    writeln!(output)?;

    let Some(origin) = prompt(input, output, "Origin station: ")? else {
        return Ok(());
    };
    let Some(destination) = prompt(input, output, "Destination station: ")? else {
        return Ok(());
    };

    let endpoints = (
        names.iter().position(|&n| n == origin.trim()),
        names.iter().position(|&n| n == destination.trim()),
    );
    let (Some(from), Some(to)) = endpoints else {
        writeln!(output, "{}", "Unknown station.".red())?;
        return Ok(());
    };

    match route_summary(paths, names, from, to) {
        Ok(summary) => writeln!(output, "{summary}"),
        Err(err) => writeln!(output, "{}", err.to_string().red()),
    }
}

fn route_summary(
    paths: &ShortestPaths,
    names: &[&str],
    from: usize,
    to: usize,
) -> PathResult<String> {
    let Some(route) = paths.path(from, to)? else {
        return Ok(format!("No route from {} to {}.", names[from], names[to]));
    };

    let stops = route.iter().map(|&i| names[i]).join(" -> ");
    let distance = paths.distance(from, to)?;

    Ok(format!("Shortest route: {stops}\nDistance: {distance}"))
}

/// Tab-separated table of all pairwise shortest distances, labelled on both
/// axes, with ∞ marking unreachable pairs.
fn distance_table(paths: &ShortestPaths, names: &[&str]) -> PathResult<String> {
    let mut rows = vec![format!("\t{}", names.iter().join("\t"))];

    for (i, name) in names.iter().enumerate() {
        let cells: PathResult<Vec<String>> = (0..names.len())
            .map(|j| paths.distance(i, j).map(|d| d.to_string()))
            .collect();
        rows.push(format!("{name}\t{}", cells?.join("\t")));
    }

    Ok(rows.join("\n"))
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// One line of input, or `None` once the stream is exhausted.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::run;

    fn run_script(script: &str) -> String {
        colored::control::set_override(false);

        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit() {
        let output = run_script("4\n");

        assert!(output.contains("Route network planner"));
        assert!(output.contains("Leaving the route planner."));
    }

    #[test]
    fn test_shortest_route() {
        let output = run_script("1\nA\nE\n4\n");

        assert!(output.contains("Shortest route: A -> B -> C -> D -> E"));
        assert!(output.contains("Distance: 9"));
    }

    #[test]
    fn test_unknown_station_returns_to_menu() {
        let output = run_script("1\nA\nZ\n4\n");

        assert!(output.contains("Unknown station."));
        assert!(output.contains("Leaving the route planner."));
    }

    #[test]
    fn test_center() {
        let output = run_script("2\n4\n");

        assert!(output.contains("The center of the network is A."));
    }

    #[test]
    fn test_distance_table() {
        let output = run_script("3\n4\n");

        assert!(output.contains("Shortest distances:"));
        // Row A of the solved example network.
        assert!(output.contains("A\t0\t3\t4\t6\t9"));
    }

    #[test]
    fn test_unknown_option() {
        let output = run_script("9\n4\n");

        assert!(output.contains("Unknown option: 9"));
    }

    #[test]
    fn test_input_exhaustion_ends_loop() {
        let output = run_script("1\n");

        assert!(output.contains("Available stations:"));
    }
}
