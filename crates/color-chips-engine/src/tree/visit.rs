use super::Node;

/// Calls `f` with the value of every text node in the tree, depth-first in
/// document order. A tree that is itself a text node is visited too.
pub fn visit_text_mut<F>(node: &mut Node, f: &mut F)
where
    F: FnMut(&mut String),
{
    match node {
        Node::Text { value } => f(value),
        Node::Root { children } | Node::Element { children, .. } => {
            for child in children {
                visit_text_mut(child, f);
            }
        }
        Node::Comment { .. } | Node::Raw { .. } => {}
    }
}

/// Calls `f` with the child list of every parent node, post-order.
///
/// A parent's list is handed to `f` only after all of its descendants have
/// been visited, so nodes that `f` inserts into the list are never walked.
pub fn visit_parents_mut<F>(node: &mut Node, f: &mut F)
where
    F: FnMut(&mut Vec<Node>),
{
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            visit_parents_mut(child, f);
        }
        f(children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::root(vec![
            Node::element("h1", vec![Node::text("one")]),
            Node::element(
                "p",
                vec![
                    Node::text("two"),
                    Node::element("em", vec![Node::text("three")]),
                ],
            ),
        ])
    }

    #[test]
    fn text_visited_in_document_order() {
        let mut tree = sample();
        let mut seen = vec![];
        visit_text_mut(&mut tree, &mut |value: &mut String| seen.push(value.clone()));
        assert_eq!(seen, vec!["one", "two", "three"]);
    }

    #[test]
    fn text_values_can_be_rewritten() {
        let mut tree = sample();
        visit_text_mut(&mut tree, &mut |value: &mut String| {
            *value = value.to_uppercase()
        });
        assert_eq!(tree.text_content(), "ONETWOTHREE");
    }

    #[test]
    fn bare_text_root_is_visited() {
        let mut tree = Node::text("solo");
        let mut count = 0;
        visit_text_mut(&mut tree, &mut |_: &mut String| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn parents_visited_post_order() {
        let mut tree = sample();
        let mut sizes = vec![];
        visit_parents_mut(&mut tree, &mut |children: &mut Vec<Node>| {
            sizes.push(children.len())
        });
        // h1, em, p, root
        assert_eq!(sizes, vec![1, 1, 2, 2]);
    }

    #[test]
    fn inserted_nodes_are_not_walked() {
        let mut tree = Node::root(vec![Node::element("p", vec![])]);
        let mut calls = 0;
        visit_parents_mut(&mut tree, &mut |children: &mut Vec<Node>| {
            calls += 1;
            children.push(Node::element("span", vec![]));
        });
        // p, root; the spans pushed into either list are never visited
        assert_eq!(calls, 2);
    }
}
