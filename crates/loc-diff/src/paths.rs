use std::collections::BTreeSet;

use loc_types::{KeyPath, Node};

/// Collect the key path of every mapping entry in `document`.
///
/// Both intermediate and leaf entries contribute their path. Sequences and
/// scalars are not descended into, so a document whose root is not a
/// mapping has no paths.
pub fn collect_paths(document: &Node) -> BTreeSet<KeyPath> {
    let mut paths = BTreeSet::new();
    collect_into(document, &KeyPath::root(), &mut paths);
    paths
}

fn collect_into(node: &Node, prefix: &KeyPath, paths: &mut BTreeSet<KeyPath>) {
    let Node::Mapping(map) = node else {
        return;
    };
    for (key, value) in map {
        let path = prefix.child(key);
        collect_into(value, &path, paths);
        paths.insert(path);
    }
}
