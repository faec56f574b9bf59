//! Flow layout for editable content.
//!
//! Blocks stack vertically and span the available width. Inline content
//! flows into line boxes:
//! - every item on a line is aligned to the line top
//! - text wraps between words; a word wider than the line breaks at
//!   character boundaries
//! - trailing spaces hang past the right edge instead of wrapping
//! - `<br>` ends the line; a trailing `<br>` opens no extra line
//! - inside `<pre>` nothing wraps and `\n` is a zero-width hard break
//! - replaced elements (images, media, form controls) are fixed-size boxes
//!
//! Inline containers get one rectangle per line fragment, the union of the
//! items they contain on that line. Comments and empty inline containers
//! produce no boxes.

use crate::{ClientRects, Rectangle, TextMeasurer};
use dom::classify::{is_block, is_br, is_pre, is_replaced};
use dom::{Dom, Id, NodeKind};
use std::collections::HashMap;

const SAME_LINE_EPSILON: f32 = 0.01;

/// Per-call configuration for [`FlowLayout::compute`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayoutOptions {
    /// Content width of the layout root.
    pub width: f32,
    /// Replaced element width when the element has no `width` attribute.
    pub replaced_width: f32,
    /// Replaced element height when the element has no `height` attribute.
    pub replaced_height: f32,
    /// Height of block-level rules (`<hr>`).
    pub rule_height: f32,
}

impl Default for FlowLayoutOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            replaced_width: 100.0,
            replaced_height: 40.0,
            rule_height: 2.0,
        }
    }
}

/// Computed geometry for one layout root.
#[derive(Clone, Debug, Default)]
pub struct FlowLayout {
    node_rects: HashMap<Id, Vec<Rectangle>>,
    char_rects: HashMap<Id, Vec<Rectangle>>,
}

impl FlowLayout {
    pub fn compute(
        dom: &Dom,
        root: Id,
        measurer: &dyn TextMeasurer,
        options: FlowLayoutOptions,
    ) -> Self {
        let mut engine = FlowEngine {
            dom,
            measurer,
            options,
            out: FlowLayout::default(),
            items: Vec::new(),
        };
        let root_rect = engine.layout_block(root, 0.0, 0.0, options.width, false);
        log::trace!(
            target: "layout.flow",
            "laid out {} boxes, root height {:.1}",
            engine.out.node_rects.len(),
            root_rect.height
        );
        engine.out
    }

    /// Union of all boxes of `node`.
    pub fn bounds(&self, node: Id) -> Option<Rectangle> {
        self.node_rects
            .get(&node)?
            .iter()
            .copied()
            .reduce(Rectangle::union)
    }
}

impl ClientRects for FlowLayout {
    fn node_rects(&self, node: Id) -> Vec<Rectangle> {
        self.node_rects.get(&node).cloned().unwrap_or_default()
    }

    fn char_rect(&self, text: Id, index: usize) -> Option<Rectangle> {
        self.char_rects.get(&text)?.get(index).copied()
    }
}

/// Current line box inside one block.
struct LineCursor {
    left: f32,
    right: f32,
    x: f32,
    top: f32,
    height: f32,
    has_items: bool,
}

impl LineCursor {
    fn new(left: f32, width: f32, top: f32) -> Self {
        Self {
            left,
            right: left + width,
            x: left,
            top,
            height: 0.0,
            has_items: false,
        }
    }

    fn fits(&self, width: f32) -> bool {
        !self.has_items || self.x + width <= self.right + SAME_LINE_EPSILON
    }

    fn place(&mut self, width: f32, height: f32) -> Rectangle {
        let rect = Rectangle {
            x: self.x,
            y: self.top,
            width,
            height,
        };
        self.x += width;
        self.height = self.height.max(height);
        self.has_items = true;
        rect
    }

    fn break_line(&mut self) {
        self.top += self.height;
        self.height = 0.0;
        self.x = self.left;
        self.has_items = false;
    }

    /// Close the current line if anything was placed on it.
    fn finish_line(&mut self) {
        if self.has_items {
            self.break_line();
        }
    }
}

struct FlowEngine<'a> {
    dom: &'a Dom,
    measurer: &'a dyn TextMeasurer,
    options: FlowLayoutOptions,
    out: FlowLayout,
    /// Leaf boxes in placement order, used to size inline containers.
    items: Vec<Rectangle>,
}

impl FlowEngine<'_> {
    fn layout_block(&mut self, block: Id, x: f32, y: f32, width: f32, pre: bool) -> Rectangle {
        let height = if self.dom.name(block) == Some("hr") {
            self.options.rule_height
        } else {
            let pre = pre || is_pre(self.dom, block);
            let mut cursor = LineCursor::new(x, width, y);
            self.flow_children(block, &mut cursor, pre);
            cursor.finish_line();
            cursor.top - y
        };
        let rect = Rectangle {
            x,
            y,
            width,
            height,
        };
        self.out.node_rects.insert(block, vec![rect]);
        rect
    }

    fn flow_children(&mut self, parent: Id, cursor: &mut LineCursor, pre: bool) {
        let dom = self.dom;
        for &child in dom.children(parent) {
            match dom.kind(child) {
                Some(NodeKind::Text(text)) => self.flow_text(child, text, cursor, pre),
                Some(NodeKind::Element { .. }) => self.flow_element(child, cursor, pre),
                _ => {}
            }
        }
    }

    fn flow_element(&mut self, element: Id, cursor: &mut LineCursor, pre: bool) {
        let dom = self.dom;
        if is_br(dom, element) {
            let rect = cursor.place(0.0, self.measurer.line_height());
            self.record_item(element, rect);
            cursor.break_line();
        } else if is_block(dom, element) {
            cursor.finish_line();
            let rect = self.layout_block(
                element,
                cursor.left,
                cursor.top,
                cursor.right - cursor.left,
                pre,
            );
            cursor.top = rect.bottom();
        } else if is_replaced(dom, element) {
            let (width, height) = self.replaced_size(element);
            if !cursor.fits(width) {
                cursor.break_line();
            }
            let rect = cursor.place(width, height);
            self.record_item(element, rect);
        } else {
            let start = self.items.len();
            self.flow_children(element, cursor, pre);
            let fragments = line_fragments(&self.items[start..]);
            if !fragments.is_empty() {
                self.out.node_rects.insert(element, fragments);
            }
        }
    }

    fn flow_text(&mut self, node: Id, text: &str, cursor: &mut LineCursor, pre: bool) {
        let line_height = self.measurer.line_height();
        let chars: Vec<char> = text.chars().collect();
        let mut buf = [0u8; 4];
        let widths: Vec<f32> = chars
            .iter()
            .map(|c| self.measurer.measure(c.encode_utf8(&mut buf)))
            .collect();

        let mut rects = Vec::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            if pre {
                if chars[i] == '\n' {
                    rects.push(cursor.place(0.0, line_height));
                    cursor.break_line();
                } else {
                    rects.push(cursor.place(widths[i], line_height));
                }
                i += 1;
                continue;
            }
            if is_space(chars[i]) {
                rects.push(cursor.place(widths[i], line_height));
                i += 1;
                continue;
            }

            let end = chars[i..]
                .iter()
                .position(|&c| is_space(c))
                .map_or(chars.len(), |p| i + p);
            let word_width: f32 = widths[i..end].iter().sum();
            if !cursor.fits(word_width) {
                cursor.break_line();
            }
            for &width in &widths[i..end] {
                if !cursor.fits(width) {
                    cursor.break_line();
                }
                rects.push(cursor.place(width, line_height));
            }
            i = end;
        }

        if rects.is_empty() {
            return;
        }
        self.items.extend_from_slice(&rects);
        self.out.node_rects.insert(node, line_fragments(&rects));
        self.out.char_rects.insert(node, rects);
    }

    fn record_item(&mut self, node: Id, rect: Rectangle) {
        self.items.push(rect);
        self.out.node_rects.insert(node, vec![rect]);
    }

    fn replaced_size(&self, element: Id) -> (f32, f32) {
        let dimension = |attr: &str, fallback: f32| {
            self.dom
                .attr(element, attr)
                .and_then(|v| v.trim().trim_end_matches("px").parse::<f32>().ok())
                .unwrap_or(fallback)
        };
        (
            dimension("width", self.options.replaced_width),
            dimension("height", self.options.replaced_height),
        )
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Merge consecutive items sharing a line top into one rectangle per line.
fn line_fragments(items: &[Rectangle]) -> Vec<Rectangle> {
    let mut fragments: Vec<Rectangle> = Vec::new();
    for &item in items {
        match fragments.last_mut() {
            Some(last) if (last.y - item.y).abs() < SAME_LINE_EPSILON => {
                *last = last.union(item);
            }
            _ => fragments.push(item),
        }
    }
    fragments
}
