#![no_main]
use libfuzzer_sys::fuzz_target;
use protobom_expr::JsonDocumentLoader;
use protobom_expr::graph::{prune_edges, reconnect_orphans};

/// Fuzz the JSON document loader and the integrity utilities.
///
/// Any document that parses is pruned and reconnected; afterwards no edge
/// may point outside the node list.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut document) = JsonDocumentLoader::parse(s) else {
        return;
    };

    let node_list = &mut document.node_list;
    prune_edges(node_list);
    reconnect_orphans(node_list);

    let ids = node_list.node_ids();
    for edge in &node_list.edges {
        assert!(ids.contains(edge.from.as_str()));
        assert!(edge.to.iter().all(|t| ids.contains(t.as_str())));
    }
});
