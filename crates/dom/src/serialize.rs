use crate::classify::is_void;
use crate::{Dom, Id, NodeKind};

impl Dom {
    /// Serialize the children of `node` (its inner markup).
    pub fn to_markup(&self, node: Id) -> String {
        let mut out = String::new();
        for &child in self.children(node) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serialize `node` itself, including its own tags.
    pub fn to_outer_markup(&self, node: Id) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: Id, out: &mut String) {
        match self.kind(node) {
            Some(NodeKind::Document) => {
                for &child in self.children(node) {
                    self.write_node(child, out);
                }
            }
            Some(NodeKind::Element { name, attributes }) => {
                out.push('<');
                out.push_str(name);
                for (key, value) in attributes {
                    out.push(' ');
                    out.push_str(key);
                    if let Some(value) = value {
                        out.push_str("=\"");
                        escape_into(value, true, out);
                        out.push('"');
                    }
                }
                out.push('>');
                if is_void(self, node) {
                    return;
                }
                for &child in self.children(node) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Some(NodeKind::Text(text)) => escape_into(text, false, out),
            Some(NodeKind::Comment(text)) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            None => {}
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Dom;

    #[test]
    fn serializes_what_it_parses() {
        let src = r#"<p>a &amp; b<br data-mce-bogus="1"><img src="x.png"></p><!--c--><pre>x</pre>"#;
        let dom = Dom::from_markup(src).unwrap();
        assert_eq!(dom.to_markup(dom.document()), src);
    }

    #[test]
    fn outer_markup_includes_own_tags() {
        let dom = Dom::from_markup(r#"<p title="say &quot;hi&quot;">x</p>"#).unwrap();
        let p = dom.first_child(dom.document()).unwrap();
        assert_eq!(
            dom.to_outer_markup(p),
            r#"<p title="say &quot;hi&quot;">x</p>"#
        );
    }
}
