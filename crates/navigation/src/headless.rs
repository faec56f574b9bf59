//! An in-memory [`EditorHost`] backed by [`FlowLayout`].
//!
//! Used by the command line demo and the tests. Geometry comes from a
//! fixed-width measurer and is recomputed after every mutation.

use crate::{EditorHost, EventOutcome, NavigationConfig, NavigationEvent};
use core_types::HDirection;
use dom::{Dom, DomError, DomRange, Id, Placement};
use layout::{ClientRects, FixedWidthMeasurer, FlowLayout, FlowLayoutOptions};

/// Caret marker drawn beside an atomic node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeCaret {
    pub node: Id,
    pub before: bool,
    pub direction: HDirection,
    /// The collapsed selection the marker stands for.
    pub range: DomRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Range(DomRange),
    Node(Id),
}

pub struct HeadlessEditor {
    dom: Dom,
    root: Id,
    measurer: FixedWidthMeasurer,
    layout_options: FlowLayoutOptions,
    layout: FlowLayout,
    config: NavigationConfig,
    selection: DomRange,
    fake_caret: Option<FakeCaret>,
    vetoed: Vec<&'static str>,
    events: Vec<NavigationEvent>,
    scrolls: Vec<ScrollTarget>,
}

impl HeadlessEditor {
    /// Parse `markup` into an editable `<body>` with default layout and
    /// configuration. The caret starts at the beginning of the body.
    pub fn new(markup: &str) -> Result<Self, DomError> {
        Self::with_options(markup, FlowLayoutOptions::default(), NavigationConfig::default())
    }

    pub fn with_options(
        markup: &str,
        layout_options: FlowLayoutOptions,
        config: NavigationConfig,
    ) -> Result<Self, DomError> {
        let mut dom = Dom::new();
        let root = dom.create_element(
            "body",
            vec![("contenteditable".to_string(), Some("true".to_string()))],
        );
        dom.append_child(dom.document(), root)?;
        dom.parse_into(root, markup)?;

        let measurer = FixedWidthMeasurer::default();
        let layout = FlowLayout::compute(&dom, root, &measurer, layout_options);
        Ok(Self {
            dom,
            root,
            measurer,
            layout_options,
            layout,
            config,
            selection: DomRange::collapsed_at(root, 0),
            fake_caret: None,
            vetoed: Vec::new(),
            events: Vec::new(),
            scrolls: Vec::new(),
        })
    }

    fn relayout(&mut self) {
        self.layout = FlowLayout::compute(&self.dom, self.root, &self.measurer, self.layout_options);
    }

    /// Descendant of the editable root reached by child indices.
    pub fn node_at(&self, path: &[usize]) -> Option<Id> {
        path.iter()
            .try_fold(self.root, |node, &index| self.dom.child(node, index))
    }

    /// First text node, in document order, whose content is exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<Id> {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.dom.text(node) == Some(text) {
                return Some(node);
            }
            stack.extend(self.dom.children(node).iter().rev().copied());
        }
        None
    }

    pub fn set_caret(&mut self, container: Id, offset: usize) {
        self.set_selection(DomRange::collapsed_at(container, offset));
    }

    /// Make listeners prevent every future event named `event_name`.
    pub fn veto(&mut self, event_name: &'static str) {
        self.vetoed.push(event_name);
    }

    pub fn fake_caret(&self) -> Option<FakeCaret> {
        self.fake_caret
    }

    pub fn events(&self) -> &[NavigationEvent] {
        &self.events
    }

    pub fn scrolls(&self) -> &[ScrollTarget] {
        &self.scrolls
    }

    /// Markup of the editable content.
    pub fn markup(&self) -> String {
        self.dom.to_markup(self.root)
    }

    /// One-line summary of the selection, e.g. `"ab"@2` or `<p>@1`, with
    /// the caret marker when one is shown.
    pub fn describe_selection(&self) -> String {
        let point = |(node, offset): (Id, usize)| match self.dom.text(node) {
            Some(text) => format!("{text:?}@{offset}"),
            None => format!("<{}>@{offset}", self.dom.name(node).unwrap_or("#document")),
        };
        let mut out = if self.selection.is_collapsed() {
            point(self.selection.start())
        } else {
            format!("{}..{}", point(self.selection.start()), point(self.selection.end()))
        };
        if let Some(caret) = self.fake_caret {
            let side = if caret.before { "before" } else { "after" };
            let name = self.dom.name(caret.node).unwrap_or("?");
            out.push_str(&format!(" [caret {side} <{name}>]"));
        }
        out
    }
}

impl EditorHost for HeadlessEditor {
    fn dom(&self) -> &Dom {
        &self.dom
    }

    fn editable_root(&self) -> Id {
        self.root
    }

    fn client_rects(&self) -> &dyn ClientRects {
        &self.layout
    }

    fn config(&self) -> &NavigationConfig {
        &self.config
    }

    fn selection(&self) -> DomRange {
        self.selection
    }

    fn set_selection(&mut self, range: DomRange) {
        if self.fake_caret.is_some_and(|caret| caret.range != range) {
            self.fake_caret = None;
        }
        self.selection = range;
    }

    fn show_caret_indicator(
        &mut self,
        direction: HDirection,
        node: Id,
        before: bool,
    ) -> Option<DomRange> {
        let parent = self.dom.parent(node)?;
        let index = self.dom.index_in_parent(node)?;
        let offset = if before { index } else { index + 1 };
        let range = DomRange::collapsed_at(parent, offset);
        self.fake_caret = Some(FakeCaret {
            node,
            before,
            direction,
            range,
        });
        Some(range)
    }

    fn scroll_into_view(&mut self, range: &DomRange) {
        self.scrolls.push(ScrollTarget::Range(*range));
    }

    fn scroll_node_into_view(&mut self, node: Id) {
        self.scrolls.push(ScrollTarget::Node(node));
    }

    fn fire(&mut self, event: &NavigationEvent) -> EventOutcome {
        self.events.push(*event);
        if self.vetoed.contains(&event.name()) {
            EventOutcome::prevented()
        } else {
            EventOutcome::default()
        }
    }

    fn create_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> Id {
        let attributes = attributes
            .iter()
            .map(|&(k, v)| (k.to_string(), Some(v.to_string())))
            .collect();
        self.dom.create_element(name, attributes)
    }

    fn append_child(&mut self, parent: Id, child: Id) -> Result<(), DomError> {
        self.dom.append_child(parent, child)?;
        self.relayout();
        Ok(())
    }

    fn insert_adjacent(
        &mut self,
        reference: Id,
        node: Id,
        placement: Placement,
    ) -> Result<(), DomError> {
        self.dom.insert_adjacent(reference, node, placement)?;
        self.relayout();
        Ok(())
    }
}
