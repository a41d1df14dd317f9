use std::collections::BTreeMap;

/// Ordered mapping from child name to child node.
///
/// `BTreeMap` keeps the entries sorted by name, which is what makes directory
/// listings deterministic.
pub type Children = BTreeMap<String, Node>;

/// A single entry in the tree: either a directory holding its children by
/// name, or a file holding its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: Children },
    File { content: String },
}

impl Node {
    /// Creates an empty directory node.
    pub fn dir() -> Node {
        Node::Directory {
            children: Children::new(),
        }
    }

    /// Creates a file node with the given content.
    pub fn file<S: Into<String>>(content: S) -> Node {
        Node::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_constructor() {
        let node = Node::dir();
        assert!(node.is_dir());
        assert!(!node.is_file());
    }

    #[test]
    fn test_file_constructor() {
        let node = Node::file("Hello");
        assert!(node.is_file());
        assert!(!node.is_dir());

        match node {
            Node::File { content } => assert_eq!(content, "Hello"),
            other => panic!("Expected a file, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_has_empty_content() {
        assert_eq!(Node::file(""), Node::File { content: String::new() });
    }
}
