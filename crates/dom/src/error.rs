use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("unknown node {0:?}")]
    UnknownNode(Id),
    #[error("node {0:?} cannot have children")]
    NotAContainer(Id),
    #[error("node {child:?} is already attached to {parent:?}")]
    AlreadyAttached { child: Id, parent: Id },
    #[error("inserting {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: Id, child: Id },
    #[error("{reference:?} is not a child of {parent:?}")]
    InvalidSibling { parent: Id, reference: Id },
    #[error("node {0:?} has no parent")]
    Detached(Id),
    #[error("malformed markup at byte {offset}: {message}")]
    Markup { offset: usize, message: &'static str },
}
