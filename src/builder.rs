//! Output structures — a persistent nested client-type tree and the
//! synthetic callable signature inserted at its leaves.

/// Node in the nested namespace → module → function tree. Branch entries
/// preserve insertion order; iteration over the sorted function catalog
/// makes the final layout deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    Branch(Vec<(String, Node)>),
}

impl Node {
    pub fn empty() -> Self {
        Node::Branch(Vec::new())
    }

    /// Look up a direct child by key.
    #[allow(dead_code)]
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Branch(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, node)| node),
            Node::Leaf(_) => None,
        }
    }
}

/// Insert `value` at `path`, returning a new tree.
///
/// The input is never mutated and every node along the inserted path is
/// newly allocated, so trees returned by earlier calls stay valid — the
/// result is independent of call order.
pub fn assoc_path(node: &Node, path: &[&str], value: &str) -> Node {
    let (key, rest) = match path.split_first() {
        Some(split) => split,
        None => return Node::Leaf(value.to_string()),
    };

    let mut entries = match node {
        Node::Branch(entries) => entries.clone(),
        // Inserting below a leaf replaces it with a branch.
        Node::Leaf(_) => Vec::new(),
    };

    match entries.iter_mut().find(|(k, _)| k.as_str() == *key) {
        Some((_, child)) => {
            let updated = assoc_path(child, rest, value);
            *child = updated;
        }
        None => entries.push((
            (*key).to_string(),
            assoc_path(&Node::empty(), rest, value),
        )),
    }

    Node::Branch(entries)
}

/// Callable signature for a matched (params, response) shape pair.
pub fn signature(params: &str, response: &str) -> String {
    format!(
        "(params: Prettify<MoodleClientFunctionTypes.{params}>) => \
         Promise<Prettify<MoodleClientFunctionTypes.{response}>>"
    )
}
