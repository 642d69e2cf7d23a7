//! Tree alignment.
//!
//! Where both sides are mappings, the result lists the keys shared with the
//! reference in reference order, each aligned recursively, followed by the
//! target-only keys in target order. Anywhere else the target value is kept
//! as-is, including when the two sides have different shapes.

use loc_types::{KeyPath, Mapping, Node};
use tracing::debug;

/// The outcome of aligning a target document to a reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    /// The aligned target document.
    pub document: Node,
    /// Reference keys with no counterpart in the target. Only the topmost
    /// missing key is listed, not its descendants.
    pub dropped: Vec<KeyPath>,
    /// Target keys unknown to the reference, appended after shared keys.
    pub appended: Vec<KeyPath>,
}

impl Alignment {
    /// Returns `true` if the target had every key the reference has.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Align `target` to `reference`, returning only the aligned document.
pub fn align(reference: &Node, target: &Node) -> Node {
    align_with_report(reference, target).document
}

/// Align `target` to `reference`, recording which keys were dropped and
/// which were appended.
pub fn align_with_report(reference: &Node, target: &Node) -> Alignment {
    let mut dropped = Vec::new();
    let mut appended = Vec::new();
    let document = align_node(
        reference,
        target,
        &KeyPath::root(),
        &mut dropped,
        &mut appended,
    );
    Alignment {
        document,
        dropped,
        appended,
    }
}

fn align_node(
    reference: &Node,
    target: &Node,
    path: &KeyPath,
    dropped: &mut Vec<KeyPath>,
    appended: &mut Vec<KeyPath>,
) -> Node {
    match (reference, target) {
        (Node::Mapping(reference), Node::Mapping(target)) => {
            Node::Mapping(align_mapping(reference, target, path, dropped, appended))
        }
        (Node::Mapping(_), _) | (_, Node::Mapping(_)) => {
            debug!(
                path = %path,
                reference = reference.kind(),
                target = target.kind(),
                "shape mismatch; keeping target value"
            );
            target.clone()
        }
        _ => target.clone(),
    }
}

fn align_mapping(
    reference: &Mapping,
    target: &Mapping,
    path: &KeyPath,
    dropped: &mut Vec<KeyPath>,
    appended: &mut Vec<KeyPath>,
) -> Mapping {
    let mut merged = Mapping::with_capacity(target.len());

    for (key, reference_value) in reference {
        let child = path.child(key);
        match target.get(key) {
            Some(target_value) => {
                let aligned = align_node(reference_value, target_value, &child, dropped, appended);
                merged.insert(key.clone(), aligned);
            }
            None => {
                debug!(path = %child, "reference key missing from target; dropped");
                dropped.push(child);
            }
        }
    }

    for (key, target_value) in target {
        if !merged.contains_key(key) {
            appended.push(path.child(key));
            merged.insert(key.clone(), target_value.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(text: &str) -> Node {
        serde_json::from_str(text).unwrap()
    }

    fn keys(node: &Node) -> Vec<&str> {
        node.keys().collect()
    }

    #[test]
    fn drops_reference_only_and_appends_target_only() {
        let reference = parse(r#"{"a": {"b": 1, "c": 2}}"#);
        let target = parse(r#"{"a": {"c": 99, "d": 4}}"#);

        let aligned = align(&reference, &target);
        assert_eq!(aligned, parse(r#"{"a": {"c": 99, "d": 4}}"#));
        assert_eq!(keys(aligned.get("a").unwrap()), vec!["c", "d"]);
    }

    #[test]
    fn shape_mismatch_keeps_target() {
        let reference = parse(r#"{"x": 1}"#);
        let target = parse(r#"{"x": {"y": 2}}"#);
        assert_eq!(align(&reference, &target), parse(r#"{"x": {"y": 2}}"#));

        let reference = parse(r#"{"x": {"y": 2}}"#);
        let target = parse(r#"{"x": "flat"}"#);
        assert_eq!(align(&reference, &target), parse(r#"{"x": "flat"}"#));
    }

    #[test]
    fn reorders_shared_keys_to_reference_order() {
        let reference = parse(r#"{"one": 1, "two": 2, "three": 3}"#);
        let target = parse(r#"{"three": "trois", "extra": "en plus", "one": "un", "two": "deux"}"#);

        let aligned = align(&reference, &target);
        assert_eq!(keys(&aligned), vec!["one", "two", "three", "extra"]);
        assert_eq!(aligned.get("one"), Some(&Node::from(json!("un"))));
    }

    #[test]
    fn reorders_nested_levels() {
        let reference = parse(r#"{"menu": {"open": "Open", "close": "Close"}, "title": "T"}"#);
        let target = parse(r#"{"title": "Titre", "menu": {"close": "Fermer", "open": "Ouvrir"}}"#);

        let aligned = align(&reference, &target);
        assert_eq!(keys(&aligned), vec!["menu", "title"]);
        assert_eq!(keys(aligned.get("menu").unwrap()), vec!["open", "close"]);
    }

    #[test]
    fn sequences_are_not_merged() {
        let reference = parse(r#"{"days": ["Mon", "Tue", "Wed"]}"#);
        let target = parse(r#"{"days": ["lun"]}"#);
        assert_eq!(align(&reference, &target), target);
    }

    #[test]
    fn non_mapping_roots_return_target() {
        let target = Node::from(json!([1, 2]));
        assert_eq!(align(&Node::from(json!({"a": 1})), &target), target);
        assert_eq!(align(&Node::from(json!("x")), &Node::from(json!(null))), Node::from(json!(null)));
    }

    #[test]
    fn empty_mappings() {
        let empty = Node::from(json!({}));
        assert_eq!(align(&empty, &empty), empty);
        assert_eq!(align(&parse(r#"{"a": 1}"#), &empty), empty);
        assert_eq!(align(&empty, &parse(r#"{"b": 2}"#)), parse(r#"{"b": 2}"#));
    }

    #[test]
    fn report_lists_dropped_and_appended_paths() {
        let reference = parse(r#"{"a": {"b": 1, "c": 2}, "gone": {"deep": 1}}"#);
        let target = parse(r#"{"a": {"c": 99, "d": 4}, "new": 5}"#);

        let alignment = align_with_report(&reference, &target);
        assert!(!alignment.is_complete());
        assert_eq!(
            alignment.dropped,
            vec![KeyPath::from("a.b"), KeyPath::from("gone")]
        );
        assert_eq!(
            alignment.appended,
            vec![KeyPath::from("a.d"), KeyPath::from("new")]
        );
    }

    #[test]
    fn report_is_empty_for_identical_documents() {
        let doc = parse(r#"{"a": {"b": 1}, "c": [1]}"#);
        let alignment = align_with_report(&doc, &doc);
        assert!(alignment.is_complete());
        assert!(alignment.appended.is_empty());
        assert_eq!(alignment.document, doc);
    }

    #[test]
    fn shape_mismatch_reports_nothing_below_it() {
        let reference = parse(r#"{"x": {"a": 1, "b": 2}}"#);
        let target = parse(r#"{"x": "flat"}"#);
        let alignment = align_with_report(&reference, &target);
        assert!(alignment.dropped.is_empty());
        assert!(alignment.appended.is_empty());
    }

    mod properties {
        use super::*;
        use loc_types::Scalar;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        fn arb_node() -> impl Strategy<Value = Node> {
            let leaf = prop_oneof![
                Just(Node::Scalar(Scalar::Null)),
                any::<bool>().prop_map(|b| Node::Scalar(Scalar::Bool(b))),
                any::<i64>().prop_map(|n| Node::Scalar(Scalar::Number(n.into()))),
                "[a-z ]{0,8}".prop_map(|s| Node::Scalar(Scalar::String(s))),
            ];
            leaf.prop_recursive(4, 48, 6, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..3).prop_map(Node::Sequence),
                    prop::collection::vec(("[a-e]{1,2}", inner), 0..6)
                        .prop_map(|entries| Node::Mapping(entries.into_iter().collect())),
                ]
            })
        }

        fn arb_mapping() -> impl Strategy<Value = Node> {
            prop::collection::vec(("[a-e]{1,2}", arb_node()), 0..6)
                .prop_map(|entries| Node::Mapping(entries.into_iter().collect()))
        }

        fn paths(node: &Node, prefix: &KeyPath, out: &mut BTreeSet<KeyPath>) {
            if let Node::Mapping(map) = node {
                for (key, value) in map {
                    let path = prefix.child(key);
                    paths(value, &path, out);
                    out.insert(path);
                }
            }
        }

        fn path_set(node: &Node) -> BTreeSet<KeyPath> {
            let mut out = BTreeSet::new();
            paths(node, &KeyPath::root(), &mut out);
            out
        }

        proptest! {
            #[test]
            fn aligning_with_itself_is_identity(doc in arb_node()) {
                prop_assert_eq!(align(&doc, &doc), doc);
            }

            #[test]
            fn target_key_set_is_preserved(reference in arb_mapping(), target in arb_mapping()) {
                let aligned = align(&reference, &target);
                prop_assert_eq!(path_set(&aligned), path_set(&target));
            }

            #[test]
            fn dropped_keys_never_survive(reference in arb_mapping(), target in arb_mapping()) {
                let alignment = align_with_report(&reference, &target);
                let output = path_set(&alignment.document);
                for path in &alignment.dropped {
                    prop_assert!(!output.contains(path));
                    prop_assert!(path_set(&reference).contains(path));
                }
            }

            #[test]
            fn shared_keys_come_first_in_reference_order(reference in arb_mapping(), target in arb_mapping()) {
                let aligned = align(&reference, &target);
                let shared: Vec<&str> = reference.keys().filter(|k| target.get(k).is_some()).collect();
                let leading: Vec<&str> = aligned.keys().take(shared.len()).collect();
                prop_assert_eq!(leading, shared);
            }
        }
    }
}
