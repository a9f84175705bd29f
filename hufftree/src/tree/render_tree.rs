use super::tree_node::{NodeId, NodeKind};
use crate::Tree;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    transition: u8, // 0 or 1
}

pub fn render_plan_to<W: core::fmt::Write>(
    graph: &Tree,
    output: &mut W,
) -> std::result::Result<(), core::fmt::Error> {
    let out = graph.render_dot().map_err(|_| core::fmt::Error)?;
    output.write_str(&out)
}

impl<'a> dot::Labeller<'a, NodeId, Edge> for Tree {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &NodeId) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n.index())).unwrap()
    }

    fn node_label(&'a self, n: &NodeId) -> dot::LabelText<'a> {
        let node = self.get_node(*n);
        let out = match node.kind() {
            NodeKind::Leaf(symbol) => format!("Cnt:{:?} Symbl:{}", node.weight(), symbol),
            NodeKind::Internal { .. } => format!("Cnt:{:?}", node.weight()),
        };
        dot::LabelText::LabelStr(out.into())
    }

    fn edge_label(&'a self, ed: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a, NodeId, Edge> for Tree {
    fn nodes(&'a self) -> dot::Nodes<'a, NodeId> {
        self.node_store().iter().map(|(id, _node)| id).collect()
    }

    fn edges(&'a self) -> dot::Edges<'a, Edge> {
        let mut edges = vec![];
        for (id, node) in self.node_store().iter() {
            if let Some((left, right)) = node.children() {
                edges.push(Edge {
                    from: id,
                    to: left,
                    transition: 0,
                });
                edges.push(Edge {
                    from: id,
                    to: right,
                    transition: 1,
                });
            }
        }
        Cow::Owned(edges)
    }

    fn source(&'a self, e: &Edge) -> NodeId {
        e.from
    }

    fn target(&'a self, e: &Edge) -> NodeId {
        e.to
    }
}
