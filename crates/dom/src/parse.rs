//! Markup fragment parser.
//!
//! Handles the subset editors exchange for caret tests and fixtures:
//! elements with quoted or bare attributes, void and self-closing tags,
//! comments, and named or numeric character references.
//!
//! Known limitations:
//! - no implied end tags; an unmatched end tag is ignored
//! - inter-element whitespace is dropped outside `<pre>`
//! - raw-text elements (`script`, `style`) are parsed like any other element

use crate::classify::VOID_ELEMENTS;
use crate::{Dom, DomError, Id};
use memchr::{memchr, memmem};

impl Dom {
    /// Parse a new document holding `markup`.
    pub fn from_markup(markup: &str) -> Result<Self, DomError> {
        let mut dom = Dom::new();
        let document = dom.document();
        dom.parse_into(document, markup)?;
        Ok(dom)
    }

    /// Parse `markup` and append the resulting nodes to `parent`.
    pub fn parse_into(&mut self, parent: Id, markup: &str) -> Result<(), DomError> {
        let mut parser = FragmentParser {
            dom: self,
            src: markup,
            pos: 0,
            stack: vec![parent],
            pending_text: String::new(),
        };
        parser.run()
    }
}

struct FragmentParser<'a> {
    dom: &'a mut Dom,
    src: &'a str,
    pos: usize,
    stack: Vec<Id>,
    pending_text: String,
}

impl FragmentParser<'_> {
    fn run(&mut self) -> Result<(), DomError> {
        let src = self.src;
        let bytes = src.as_bytes();
        while self.pos < bytes.len() {
            let Some(rel) = memchr(b'<', &bytes[self.pos..]) else {
                self.push_text(self.pos, bytes.len());
                self.pos = bytes.len();
                break;
            };
            let lt = self.pos + rel;
            self.push_text(self.pos, lt);
            self.pos = lt;

            let rest = &src[lt..];
            if rest.starts_with("<!--") {
                self.comment()?;
            } else if rest.starts_with("</") {
                self.end_tag()?;
            } else if rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                self.start_tag()?;
            } else {
                self.pending_text.push('<');
                self.pos += 1;
            }
        }
        self.flush_text()
    }

    fn current(&self) -> Id {
        // The stack always holds the fragment parent.
        self.stack[self.stack.len() - 1]
    }

    fn in_pre(&self) -> bool {
        self.stack
            .iter()
            .any(|&id| self.dom.name(id) == Some("pre"))
    }

    fn push_text(&mut self, from: usize, to: usize) {
        if from < to {
            decode_entities_into(&self.src[from..to], &mut self.pending_text);
        }
    }

    fn flush_text(&mut self) -> Result<(), DomError> {
        if self.pending_text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.pending_text);
        if !self.in_pre() && text.chars().all(|c| c.is_ascii_whitespace()) {
            return Ok(());
        }
        let node = self.dom.create_text(&text);
        self.dom.append_child(self.current(), node)
    }

    fn comment(&mut self) -> Result<(), DomError> {
        self.flush_text()?;
        let body_start = self.pos + 4;
        let end = memmem::find(&self.src.as_bytes()[body_start..], b"-->").ok_or(
            DomError::Markup {
                offset: self.pos,
                message: "unterminated comment",
            },
        )?;
        let node = self
            .dom
            .create_comment(&self.src[body_start..body_start + end]);
        self.dom.append_child(self.current(), node)?;
        self.pos = body_start + end + 3;
        Ok(())
    }

    fn end_tag(&mut self) -> Result<(), DomError> {
        self.flush_text()?;
        let start = self.pos;
        let close = self.find_tag_end(start)?;
        let name = self.src[start + 2..close].trim().to_ascii_lowercase();
        self.pos = close + 1;

        // Index 0 is the fragment parent and is never closed.
        if let Some(depth) = self.stack[1..]
            .iter()
            .rposition(|&id| self.dom.name(id) == Some(name.as_str()))
        {
            self.stack.truncate(depth + 1);
        } else {
            log::trace!(target: "dom.parse", "ignoring unmatched </{name}> at {start}");
        }
        Ok(())
    }

    fn start_tag(&mut self) -> Result<(), DomError> {
        self.flush_text()?;
        let start = self.pos;
        let src = self.src;
        let bytes = src.as_bytes();
        let mut i = start + 1;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        let name = src[start + 1..i].to_ascii_lowercase();

        let mut attributes: Vec<(String, Option<String>)> = Vec::new();
        let mut self_closing = false;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                None => {
                    return Err(DomError::Markup {
                        offset: start,
                        message: "unterminated start tag",
                    });
                }
                Some(b'>') => {
                    i += 1;
                    break;
                }
                Some(b'/') if bytes.get(i + 1) == Some(&b'>') => {
                    self_closing = true;
                    i += 2;
                    break;
                }
                Some(b'/') => {
                    i += 1;
                }
                Some(_) => {
                    let name_start = i;
                    while i < bytes.len()
                        && !bytes[i].is_ascii_whitespace()
                        && !matches!(bytes[i], b'=' | b'>' | b'/')
                    {
                        i += 1;
                    }
                    let attr_name = src[name_start..i].to_ascii_lowercase();
                    let mut value = None;
                    if bytes.get(i) == Some(&b'=') {
                        i += 1;
                        let (raw, next) = self.attribute_value(i)?;
                        let mut decoded = String::new();
                        decode_entities_into(raw, &mut decoded);
                        value = Some(decoded);
                        i = next;
                    }
                    if !attributes.iter().any(|(k, _)| *k == attr_name) {
                        attributes.push((attr_name, value));
                    }
                }
            }
        }
        self.pos = i;

        let node = self.dom.create_element(&name, attributes);
        self.dom.append_child(self.current(), node)?;
        if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
            self.stack.push(node);
        }
        Ok(())
    }

    fn attribute_value(&self, at: usize) -> Result<(&str, usize), DomError> {
        let bytes = self.src.as_bytes();
        match bytes.get(at) {
            Some(&quote @ (b'"' | b'\'')) => {
                let end = memchr(quote, &bytes[at + 1..]).ok_or(DomError::Markup {
                    offset: at,
                    message: "unterminated attribute value",
                })?;
                Ok((&self.src[at + 1..at + 1 + end], at + end + 2))
            }
            _ => {
                let mut end = at;
                while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                    end += 1;
                }
                Ok((&self.src[at..end], end))
            }
        }
    }

    fn find_tag_end(&self, from: usize) -> Result<usize, DomError> {
        memchr(b'>', &self.src.as_bytes()[from..])
            .map(|rel| from + rel)
            .ok_or(DomError::Markup {
                offset: from,
                message: "unterminated end tag",
            })
    }
}

fn decode_entities_into(raw: &str, out: &mut String) {
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi))) {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{A0}'),
        "zwsp" => Some('\u{200B}'),
        _ => None,
    }
}
