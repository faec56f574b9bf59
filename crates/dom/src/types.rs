pub type NodeId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

impl Id {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
    },
    Text(String),
    Comment(String),
}

impl NodeKind {
    pub fn can_have_children(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Element { .. })
    }
}
