/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Loading graphs in degree-sequence text format.
//!
//! The format is line-oriented:
//!
//! - the first line contains the number of nodes `n`;
//! - the next `n` lines contain a node and its degree, separated by
//!   whitespace, for nodes `0`, `1`, …, `n − 1` in this order;
//! - the next `m` lines, where `m` is half the sum of the degrees, contain
//!   the endpoints of an edge, separated by whitespace.
//!
//! Only blank lines may follow the last edge, and the degrees must have an
//! even sum.
//!
//! ```text
//! 3
//! 0 1
//! 1 2
//! 2 1
//! 0 1
//! 1 2
//! ```

use super::vec_graph::VecGraph;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Error types that can occur while loading a graph.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The input ended before the expected content was read.
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// A line could not be parsed.
    #[error("Malformed line {line} ({expected} expected): {content:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        content: String,
    },

    /// The degree sequence does not list nodes in order.
    #[error("Degree of node {expected} expected at line {line}, found node {found}")]
    DegreeOrder {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// An edge endpoint is not a node of the graph.
    #[error("Bad node {node} at line {line} (the graph has {num_nodes} nodes)")]
    NodeOutOfRange {
        line: usize,
        node: usize,
        num_nodes: usize,
    },

    /// The degrees sum to an odd number, so they do not describe a set of
    /// edges.
    #[error("Odd degree sum {degree_sum} at line {line}")]
    OddDegreeSum { line: usize, degree_sum: u64 },

    /// There is content after the last edge.
    #[error("Too many lines: unexpected content at line {line}")]
    TrailingContent { line: usize },
}

/// A line reader keeping track of line numbers (starting from one).
struct NumberedLines<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn next_line(&mut self, expected: &'static str) -> Result<String, LoadError> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(LoadError::UnexpectedEof {
                line: self.line,
                expected,
            }),
        }
    }

    /// Checks that only blank lines are left.
    fn finish(mut self) -> Result<(), LoadError> {
        for line in self.lines {
            self.line += 1;
            if !line?.trim().is_empty() {
                return Err(LoadError::TrailingContent { line: self.line });
            }
        }
        Ok(())
    }

    fn parse<const N: usize>(&mut self, expected: &'static str) -> Result<[usize; N], LoadError> {
        let content = self.next_line(expected)?;
        let mut fields = content.split_whitespace().map(str::parse::<usize>);
        let mut values = [0; N];
        for value in values.iter_mut() {
            match fields.next() {
                Some(Ok(v)) => *value = v,
                _ => {
                    return Err(LoadError::Malformed {
                        line: self.line,
                        expected,
                        content,
                    })
                }
            }
        }
        Ok(values)
    }
}

impl VecGraph {
    /// Loads a graph in degree-sequence text format from a file.
    ///
    /// See the [module documentation](self) for the format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a graph in degree-sequence text format.
    ///
    /// See the [module documentation](self) for the format.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LoadError> {
        let mut lines = NumberedLines {
            lines: reader.lines(),
            line: 0,
        };

        let [num_nodes] = lines.parse::<1>("number of nodes")?;

        let mut degree_sum = 0_u64;
        for node in 0..num_nodes {
            let [found, degree] = lines.parse::<2>("node and degree")?;
            if found != node {
                return Err(LoadError::DegreeOrder {
                    line: lines.line,
                    expected: node,
                    found,
                });
            }
            degree_sum += degree as u64;
        }

        if degree_sum % 2 != 0 {
            return Err(LoadError::OddDegreeSum {
                line: lines.line,
                degree_sum,
            });
        }
        let num_edges = degree_sum / 2;
        log::debug!("Reading {num_edges} edges on {num_nodes} nodes");

        let mut graph = VecGraph::empty(num_nodes);
        for _ in 0..num_edges {
            let [u, v] = lines.parse::<2>("edge")?;
            if let Some(node) = [u, v].into_iter().find(|&x| x >= num_nodes) {
                return Err(LoadError::NodeOutOfRange {
                    line: lines.line,
                    node,
                    num_nodes,
                });
            }
            graph.add_edge(u, v);
        }

        lines.finish()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Graph;
    use std::io::{Cursor, Read};

    #[test]
    fn test_triangle() -> anyhow::Result<()> {
        let text = "3\n0 2\n1 2\n2 2\n0 1\n1 2\n2 0\n";
        let g = VecGraph::from_reader(text.as_bytes())?;
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        Ok(())
    }

    #[test]
    fn test_errors() {
        let err = VecGraph::from_reader("2\n1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::DegreeOrder { line: 2, .. }));

        let err = VecGraph::from_reader("2\n0 1\n1 1\n0 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NodeOutOfRange { node: 2, .. }));

        let err = VecGraph::from_reader("2\n0 1\n1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedEof { line: 4, .. }));

        let err = VecGraph::from_reader("2\n0 1\n1 1\n0 1\n1 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::TrailingContent { line: 5 }));

        let err = VecGraph::from_reader("x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 1, .. }));

        let err = VecGraph::from_reader("2\n0 1\n1 2\n0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::OddDegreeSum {
                line: 3,
                degree_sum: 3
            }
        ));
    }

    #[test]
    fn test_trailing_blank_lines() -> anyhow::Result<()> {
        let g = VecGraph::from_reader("2\n0 1\n1 1\n0 1\n\n  \n".as_bytes())?;
        assert_eq!(g.num_edges(), 1);

        let err = VecGraph::from_reader("2\n0 1\n1 1\n0 1\n\n1 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::TrailingContent { line: 6 }));
        Ok(())
    }

    /// A reader failing after some content.
    struct FailingReader(Cursor<&'static [u8]>);

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(std::io::Error::other("device failure")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_trailing_io_error() {
        let reader = BufReader::new(FailingReader(Cursor::new(
            "2\n0 1\n1 1\n0 1\n".as_bytes(),
        )));
        let err = VecGraph::from_reader(reader).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
