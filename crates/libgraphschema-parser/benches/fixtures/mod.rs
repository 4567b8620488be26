use std::fmt::Write;

pub const KITCHEN_SINK: &str =
    include_str!("../../src/tests/fixtures/schema-kitchen-sink.graphql");
pub const GRAPH_KITCHEN_SINK: &str =
    include_str!("../../src/tests/fixtures/schema-kitchen-sink-graph.graphql");

/// Generates a schema with `count` object types, each linked to its
/// neighbour by connections in both directions, plus a mutation, a filter
/// and an order per type.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 400);
    for i in 0..count {
        let next = (i + 1) % count;
        writeln!(out, "## Node number {i}.").unwrap();
        writeln!(out, "type Node{i} implements Node @rootConnection(field: \"all{i}\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  next: -Links-> Node{next}").unwrap();
        writeln!(out, "  previous: <=Links= Node{next}").unwrap();
        writeln!(out, "  hops: =Links=> Node{next} =Links=> Node{i}").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "mutation link{i}(id: ID!, other: ID!) {{").unwrap();
        writeln!(out, "  edge: =Links=> Node{next}").unwrap();
        writeln!(out, "  status: String").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "filter on =Links=> Node{next} {{").unwrap();
        writeln!(out, "  NAMED: (name: String) {{node: {{name: {{eq: $name}}}}}}").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "order on [Node{i}] {{").unwrap();
        writeln!(out, "  BY_NAME: [{{node: {{name: ASCENDING}}}}, {{node: {{id: DESCENDING}}}}]").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out
}

/// Generates an object value nested `depth` levels deep.
pub fn nested_value(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 12);
    for level in 0..depth {
        write!(out, "{{level{level}: [").unwrap();
    }
    out.push_str("$leaf");
    for _ in 0..depth {
        out.push_str("]}");
    }
    out
}
