use dom::{Dom, Id};
use layout::{FixedWidthMeasurer, FlowLayout, FlowLayoutOptions};

pub(crate) struct Fixture {
    pub dom: Dom,
    pub root: Id,
    pub layout: FlowLayout,
}

/// Parse `markup` under an editable `<body>` and lay it out at `width` with
/// 10px characters and 20px lines.
pub(crate) fn fixture(markup: &str, width: f32) -> Fixture {
    let mut dom = Dom::new();
    let body = dom.create_element(
        "body",
        vec![("contenteditable".to_string(), Some("true".to_string()))],
    );
    dom.append_child(dom.document(), body).unwrap();
    dom.parse_into(body, markup).unwrap();
    let options = FlowLayoutOptions {
        width,
        ..FlowLayoutOptions::default()
    };
    let layout = FlowLayout::compute(&dom, body, &FixedWidthMeasurer::default(), options);
    Fixture {
        dom,
        root: body,
        layout,
    }
}

pub(crate) fn path(dom: &Dom, from: Id, indices: &[usize]) -> Id {
    indices
        .iter()
        .fold(from, |node, &i| dom.child(node, i).expect("child exists"))
}
