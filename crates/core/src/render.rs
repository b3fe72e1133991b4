//! Plain-text rendering of a [`Digraph`](crate::Digraph)
//!
//! Produces the three views the walkthrough prints: an adjacency listing
//! (one line per vertex), the vertex sequence, and the edge sequence.

use crate::graph::Digraph;

/// Render the adjacency listing, one line per vertex
///
/// # Arguments
/// * `graph` - The graph to render
///
/// # Returns
/// One string per vertex in the form `"0 --> 1 2"`, with targets in
/// edge-insertion order. A vertex with no out-edges renders as `"3 -->"`.
pub fn adjacency_lines(graph: &Digraph) -> Vec<String> {
    graph
        .vertices()
        .map(|v| {
            let mut line = format!("{v} -->");
            for target in graph.successors(v) {
                line.push(' ');
                line.push_str(&target.to_string());
            }
            line
        })
        .collect()
}

/// Render the vertex sequence as a single space-separated line
///
/// # Example
/// ```
/// use tcr_graph_core::{graph, render};
///
/// let g = graph::sample_digraph();
/// assert_eq!(render::vertex_line(&g), "0 1 2 3");
/// ```
pub fn vertex_line(graph: &Digraph) -> String {
    graph
        .vertices()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the edge sequence as a single space-separated line
///
/// Edges appear in insertion order as `(source, target)` pairs.
///
/// # Example
/// ```
/// use tcr_graph_core::{graph, render};
///
/// let g = graph::sample_digraph();
/// assert_eq!(render::edge_line(&g), "(0, 1) (0, 2) (1, 3) (2, 3)");
/// ```
pub fn edge_line(graph: &Digraph) -> String {
    graph
        .edges()
        .map(|(from, to)| format!("({from}, {to})"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the full report block
///
/// # Returns
/// The adjacency listing, vertex sequence, and edge sequence under their
/// headers, ending with a trailing newline:
///
/// ```text
/// Graph structure:
/// 0 --> 1 2
/// ...
///
/// Vertices:
/// 0 1 2 3
///
/// Edges:
/// (0, 1) (0, 2) (1, 3) (2, 3)
/// ```
pub fn report(graph: &Digraph) -> String {
    let mut out = String::from("Graph structure:\n");
    for line in adjacency_lines(graph) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nVertices:\n");
    out.push_str(&vertex_line(graph));
    out.push('\n');

    out.push_str("\nEdges:\n");
    out.push_str(&edge_line(graph));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_digraph;

    #[test]
    fn test_adjacency_lines_for_sample_graph() {
        let g = sample_digraph();

        assert_eq!(
            adjacency_lines(&g),
            vec!["0 --> 1 2", "1 --> 3", "2 --> 3", "3 -->"]
        );
    }

    #[test]
    fn test_vertex_line_for_sample_graph() {
        let g = sample_digraph();

        assert_eq!(vertex_line(&g), "0 1 2 3");
    }

    #[test]
    fn test_edge_line_for_sample_graph() {
        let g = sample_digraph();

        assert_eq!(edge_line(&g), "(0, 1) (0, 2) (1, 3) (2, 3)");
    }

    #[test]
    fn test_empty_graph_renders_empty_sections() {
        let g = Digraph::new();

        assert!(adjacency_lines(&g).is_empty());
        assert_eq!(vertex_line(&g), "");
        assert_eq!(edge_line(&g), "");
    }

    #[test]
    fn test_report_layout() {
        let g = sample_digraph();
        let report = report(&g);

        assert!(report.starts_with("Graph structure:\n"));
        assert!(report.contains("\nVertices:\n0 1 2 3\n"));
        assert!(report.contains("\nEdges:\n(0, 1) (0, 2) (1, 3) (2, 3)\n"));
        assert!(report.ends_with('\n'));
    }
}
