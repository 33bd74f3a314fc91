use super::*;
use agglo_core::*;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// Title printed above every rendered dendrogram.
pub const DENDROGRAM_TITLE: &str = "Hierarchical Clustering Dendrogram";

/// A vertex of a (possibly truncated) dendrogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// a single input record
    Record(Id),
    /// a subtree folded away by truncation, with its record count
    Collapsed(usize),
    /// a merge, with the distance it happened at and its record count
    Join { distance: Energy, size: usize },
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Node::Record(id) => write!(f, "{}", id),
            Node::Collapsed(n) => write!(f, "({})", n),
            Node::Join { distance, size } => write!(f, "{:.3} [{}]", distance, size),
        }
    }
}

/// Tree view of a [`Linkage`], ready for rendering.
///
/// Truncation follows the `lastp` convention: only the last `p` clusters
/// formed are shown as leaves, and anything merged before that point is
/// collapsed into a single leaf labeled with its record count.
pub struct Dendrogram {
    graph: DiGraph<Node, ()>,
    root: Option<NodeIndex>,
}

impl Dendrogram {
    /// Full tree, no truncation.
    pub fn full(linkage: &Linkage) -> Self {
        Self::truncated(linkage, linkage.n())
    }

    /// Tree showing the last `p` merged clusters as leaves.
    pub fn truncated(linkage: &Linkage, p: usize) -> Self {
        let n = linkage.n();
        let mut graph = DiGraph::new();
        let mut root = None;
        if n == 0 {
            return Self { graph, root };
        }
        let p = p.clamp(1, n);
        let cutoff = n + n - p;
        // iterative pre-order, left child first, so indices ascend left to right
        let mut stack = linkage.root().map(|r| (r, None)).into_iter().collect::<Vec<_>>();
        while let Some((node, parent)) = stack.pop() {
            let index = graph.add_node(Self::vertex(linkage, node, cutoff));
            match parent {
                Some(parent) => {
                    graph.add_edge(parent, index, ());
                }
                None => root = Some(index),
            }
            if node >= cutoff {
                if let Some(merge) = linkage.join(node) {
                    let (a, b) = merge.children();
                    stack.push((a.max(b), Some(index)));
                    stack.push((a.min(b), Some(index)));
                }
            }
        }
        Self { graph, root }
    }

    fn vertex(linkage: &Linkage, node: usize, cutoff: usize) -> Node {
        match (linkage.leaf(node), linkage.join(node)) {
            (Some(id), _) => Node::Record(id),
            (None, Some(merge)) if node >= cutoff => Node::Join {
                distance: merge.distance(),
                size: merge.size(),
            },
            _ => Node::Collapsed(linkage.size(node)),
        }
    }

    pub fn root(&self) -> Option<Node> {
        self.root.map(|r| self.graph[r])
    }

    /// leaves, left to right
    pub fn leaves(&self) -> Vec<Node> {
        let mut leaves = self.graph.externals(Outgoing).collect::<Vec<_>>();
        leaves.sort();
        leaves.into_iter().map(|i| self.graph[i]).collect()
    }

    /// children of a vertex, left to right
    fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self.graph.neighbors_directed(index, Outgoing).collect::<Vec<_>>();
        children.sort();
        children
    }
}

/// plain-text rendering, one vertex per line
impl std::fmt::Display for Dendrogram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", DENDROGRAM_TITLE)?;
        let mut stack = self
            .root
            .map(|r| (r, String::new(), String::new()))
            .into_iter()
            .collect::<Vec<_>>();
        while let Some((index, branch, indent)) = stack.pop() {
            writeln!(f, "{}{}", branch, self.graph[index])?;
            let children = self.children(index);
            let last = children.len().saturating_sub(1);
            for (i, child) in children.into_iter().enumerate().rev() {
                let (branch, extend) = match i == last {
                    true => ("└── ", "    "),
                    false => ("├── ", "│   "),
                };
                let branch = format!("{}{}", indent, branch);
                let extend = format!("{}{}", indent, extend);
                stack.push((child, branch, extend));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agglo_records::*;

    fn two_pairs() -> Linkage {
        Linkage::centroid(vec![
            Record::from((1, [0.0, 0.0])),
            Record::from((2, [0.0, 1.0])),
            Record::from((3, [10.0, 10.0])),
            Record::from((4, [10.0, 11.0])),
        ])
        .unwrap()
    }

    #[test]
    fn full_tree_shows_every_record() {
        let tree = Dendrogram::full(&two_pairs());
        assert_eq!(
            tree.leaves(),
            vec![
                Node::Record(1),
                Node::Record(2),
                Node::Record(3),
                Node::Record(4)
            ]
        );
        assert!(matches!(tree.root(), Some(Node::Join { size: 4, .. })));
    }

    #[test]
    fn truncation_collapses_early_merges() {
        let tree = Dendrogram::truncated(&two_pairs(), 2);
        assert_eq!(tree.leaves(), vec![Node::Collapsed(2), Node::Collapsed(2)]);
    }

    #[test]
    fn truncation_to_one_leaf() {
        let tree = Dendrogram::truncated(&two_pairs(), 1);
        assert_eq!(tree.root(), Some(Node::Collapsed(4)));
        assert_eq!(tree.leaves(), vec![Node::Collapsed(4)]);
    }

    #[test]
    fn last_p_leaves_cover_the_dataset() {
        let linkage = Linkage::centroid(Fixture::new(50, 2).records()).unwrap();
        let tree = Dendrogram::truncated(&linkage, DENDROGRAM_LEAVES);
        let leaves = tree.leaves();
        assert_eq!(leaves.len(), DENDROGRAM_LEAVES);
        let total = leaves
            .iter()
            .map(|leaf| match leaf {
                Node::Record(_) => 1,
                Node::Collapsed(n) => *n,
                Node::Join { .. } => panic!("join rendered as leaf"),
            })
            .sum::<usize>();
        assert_eq!(total, 50);
    }

    #[test]
    fn renders_title_and_branches() {
        let text = Dendrogram::full(&two_pairs()).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], DENDROGRAM_TITLE);
        assert_eq!(lines[1], "14.142 [4]");
        assert_eq!(lines[2], "├── 1.000 [2]");
        assert_eq!(lines[3], "│   ├── 1");
        assert_eq!(lines[4], "│   └── 2");
        assert_eq!(lines[5], "└── 1.000 [2]");
        assert_eq!(lines[6], "    ├── 3");
        assert_eq!(lines[7], "    └── 4");
    }

    #[test]
    fn single_record_renders_alone() {
        let linkage = Linkage::centroid(vec![Record::from((8, [1.0]))]).unwrap();
        let tree = Dendrogram::truncated(&linkage, DENDROGRAM_LEAVES);
        assert_eq!(tree.leaves(), vec![Node::Record(8)]);
        assert_eq!(tree.to_string(), format!("{}\n8\n", DENDROGRAM_TITLE));
    }
}
