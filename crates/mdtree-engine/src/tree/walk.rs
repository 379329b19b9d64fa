use super::node_ref::NodeRef;

/// What a visitor wants the walk to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Carry on in document order.
    Continue,
    /// Do not descend into the node just entered. Its leave event is still
    /// delivered. Has no effect on leave events or leaf nodes.
    SkipChildren,
    /// End the walk now; no further events at any level.
    Stop,
}

/// Pre-order walk event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(NodeRef<'a>),
    /// Only produced for container kinds.
    Leave(NodeRef<'a>),
}

impl<'a> WalkEvent<'a> {
    pub fn node(&self) -> NodeRef<'a> {
        match *self {
            Self::Enter(node) | Self::Leave(node) => node,
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, Self::Enter(_))
    }
}

/// Pre-order traversal over a subtree.
///
/// Container nodes produce `Enter` before their children and `Leave` after
/// them; leaf nodes produce a single `Enter`. The traversal follows sibling
/// and parent links, so it needs no stack and never leaves the starting
/// node's subtree.
#[derive(Clone)]
pub struct Preorder<'a> {
    root: NodeRef<'a>,
    next: Option<WalkEvent<'a>>,
    last: Option<WalkEvent<'a>>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: NodeRef<'a>) -> Self {
        Self {
            root,
            next: Some(WalkEvent::Enter(root)),
            last: None,
        }
    }

    /// Skips the children of the node whose `Enter` event was just returned.
    /// Its `Leave` event comes next.
    pub fn skip_subtree(&mut self) {
        if let Some(WalkEvent::Enter(node)) = self.last
            && node.is_container()
        {
            self.next = Some(WalkEvent::Leave(node));
        }
    }

    fn successor(&self, event: WalkEvent<'a>) -> Option<WalkEvent<'a>> {
        let node = match event {
            WalkEvent::Enter(node) if node.is_container() => {
                return Some(match node.first_child() {
                    Some(child) => WalkEvent::Enter(child),
                    None => WalkEvent::Leave(node),
                });
            }
            WalkEvent::Enter(node) | WalkEvent::Leave(node) => node,
        };

        if node == self.root {
            return None;
        }
        match node.next() {
            Some(sibling) => Some(WalkEvent::Enter(sibling)),
            None => node.parent().map(WalkEvent::Leave),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.next?;
        self.next = self.successor(event);
        self.last = Some(event);
        Some(event)
    }
}

/// Walks the subtree rooted at `root` depth-first, calling `visitor` with each
/// node and whether it is being entered.
///
/// Container kinds are visited twice (`entering` true, then false after all
/// children); leaf kinds once with `entering` true. The visitor steers the walk
/// with its [`WalkStatus`].
pub fn walk<'a, F>(root: NodeRef<'a>, mut visitor: F)
where
    F: FnMut(NodeRef<'a>, bool) -> WalkStatus,
{
    let mut events = root.preorder();
    while let Some(event) = events.next() {
        match visitor(event.node(), event.is_enter()) {
            WalkStatus::Continue => {}
            WalkStatus::SkipChildren => events.skip_subtree(),
            WalkStatus::Stop => return,
        }
    }
}
