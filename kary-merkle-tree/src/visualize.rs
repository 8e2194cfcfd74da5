//! Visualize

use std::io::{Result, Write};

use kary_merkle_visualize::{Drawer, Visualize, visualize_children};

use crate::{MerkleNode, MerkleTree};

impl Visualize for MerkleNode {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        drawer.begin_entry()?;
        if self.is_leaf() {
            drawer.write("╴leaf ".as_bytes())?;
            drawer = self.value().visualize(drawer)?;
            drawer.end_entry()?;
            return Ok(drawer);
        }
        drawer.write("┐node ".as_bytes())?;
        drawer = self.value().visualize(drawer)?;
        drawer.end_entry()?;
        visualize_children(drawer, self.children())
    }
}

impl<H> Visualize for MerkleTree<H> {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> Result<Drawer<W>> {
        match self.root() {
            Some(root) => root.visualize(drawer),
            None => {
                drawer.write(b"<empty>")?;
                drawer.end_entry()?;
                Ok(drawer)
            }
        }
    }
}

#[cfg(test)]
mod visualize_tests {
    use kary_merkle_visualize::visualize_to_vec;
    use pretty_assertions::assert_eq;

    use crate::{IdentityHasher, MerkleTree, test_utils::values};

    #[test]
    fn test_draws_ternary_tree() {
        let mut tree = MerkleTree::new(IdentityHasher, 3).expect("arity 3");
        tree.build(values(&["a", "b"])).expect("build");

        let mut out = Vec::new();
        visualize_to_vec(&mut out, &tree);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "┐node [hex: 616262]\n\
             ├─╴leaf [hex: 61]\n\
             ├─╴leaf [hex: 62]\n\
             └─╴leaf [hex: 62]\n"
        );
    }

    #[test]
    fn test_one_line_per_node() {
        let mut tree = MerkleTree::new(IdentityHasher, 2).expect("arity 2");
        tree.build(values(&["a", "b", "c", "d", "e"])).expect("build");

        let mut out = Vec::new();
        visualize_to_vec(&mut out, &tree);
        let drawing = String::from_utf8(out).expect("utf8");
        assert_eq!(drawing.lines().count(), tree.size());
        assert_eq!(drawing.matches("╴leaf").count(), tree.padded_leaf_count());
        assert!(drawing.contains("│ │ └─╴leaf"));
    }

    #[test]
    fn test_draws_empty_tree() {
        let tree = MerkleTree::new(IdentityHasher, 2).expect("arity 2");
        let mut out = Vec::new();
        visualize_to_vec(&mut out, &tree);
        assert_eq!(String::from_utf8(out).expect("utf8"), "<empty>\n");
    }
}
