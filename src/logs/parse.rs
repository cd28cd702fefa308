use crate::logs::row::Measurement;
use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Parse one benchmark log file into a sequence of measurements.
///
/// Lines of interest look like:
///
/// ```text
/// Dijkstra (serial) completed in 0.042 seconds.
/// Dijkstra (mpi) completed in 1.23e+02 seconds [nodes=10000 procs=4]
/// ```
///
/// Anything else in the file (distance dumps, MPI chatter, ...) is
/// skipped silently. The bracketed annotation is optional and may carry
/// either or both of nodes/procs.
pub fn parse_log_file(path: &Path) -> anyhow::Result<Vec<Measurement>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    parse_lines(&text).with_context(|| format!("parse log file {}", path.display()))
}

/// Line-level parsing, split out so tests can feed text directly.
pub fn parse_lines(text: &str) -> anyhow::Result<Vec<Measurement>> {
    let timing_re = Regex::new(
        r"^Dijkstra \((\w+)\) completed in ([0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?) seconds",
    )?;
    let nodes_re = Regex::new(r"\bnodes=([0-9]+)")?;
    let procs_re = Regex::new(r"\bprocs=([0-9]+)")?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let caps = match timing_re.captures(line) {
            Some(c) => c,
            None => continue,
        };

        let implementation = caps.get(1).unwrap().as_str().to_string();
        let time: f64 = caps
            .get(2)
            .unwrap()
            .as_str()
            .parse()
            .with_context(|| format!("bad time value on line {}", lineno + 1))?;

        // Optional wrapper-script annotation after the matched prefix.
        let rest = &line[caps.get(0).unwrap().end()..];
        let nodes = match nodes_re.captures(rest) {
            Some(c) => Some(
                c.get(1)
                    .unwrap()
                    .as_str()
                    .parse()
                    .with_context(|| format!("bad nodes value on line {}", lineno + 1))?,
            ),
            None => None,
        };
        let procs = match procs_re.captures(rest) {
            Some(c) => Some(
                c.get(1)
                    .unwrap()
                    .as_str()
                    .parse()
                    .with_context(|| format!("bad procs value on line {}", lineno + 1))?,
            ),
            None => None,
        };

        out.push(Measurement {
            implementation,
            time,
            nodes,
            procs,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_timing_lines_in_order() {
        let text = "Dijkstra (serial) completed in 0.5 seconds.\n\
                    Distances from source 0: 1 2 3\n\
                    Dijkstra (mpi) completed in 0.25 seconds.\n";
        let rows = parse_lines(text).unwrap();
        assert_eq!(
            rows,
            vec![
                Measurement {
                    implementation: "serial".into(),
                    time: 0.5,
                    nodes: None,
                    procs: None,
                },
                Measurement {
                    implementation: "mpi".into(),
                    time: 0.25,
                    nodes: None,
                    procs: None,
                },
            ]
        );
    }

    #[test]
    fn parses_exponential_notation_exactly() {
        let rows =
            parse_lines("Dijkstra (serial) completed in 1.23e+02 seconds\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].implementation, "serial");
        assert_eq!(rows[0].time, 123.0);
    }

    #[test]
    fn annotated_lines_carry_nodes_and_procs() {
        let rows = parse_lines(
            "Dijkstra (mpi) completed in 2.5 seconds [nodes=10000 procs=4]\n\
             Dijkstra (cuda) completed in 1.5 seconds [nodes=10000]\n",
        )
        .unwrap();
        assert_eq!(rows[0].nodes, Some(10000));
        assert_eq!(rows[0].procs, Some(4));
        assert_eq!(rows[1].nodes, Some(10000));
        assert_eq!(rows[1].procs, None);
    }

    #[test]
    fn empty_and_garbage_input_yield_nothing() {
        assert_eq!(parse_lines("").unwrap(), vec![]);
        assert_eq!(
            parse_lines("warming up\nrank 3 of 8 ready\n").unwrap(),
            vec![]
        );
    }

    #[test]
    fn duplicate_lines_are_kept() {
        let line = "Dijkstra (serial) completed in 1.0 seconds.\n";
        let rows = parse_lines(&line.repeat(3)).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_log_file(Path::new("/no/such/file.log")).is_err());
    }
}
