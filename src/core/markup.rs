// src/core/markup.rs
//! Targeted field extraction over catalog markup.
//!
//! Nothing here builds a tree. Documents are scanned as text for opening tags by
//! name, and only the handful of values callers ask for are pulled out. Tag and
//! attribute *names* compare ASCII case-insensitively; attribute *values* compare
//! exactly.
//!
//! Every lookup is first-match-wins in byte order with no notion of nesting. When
//! a tag name shows up in more than one context, narrow the haystack first with
//! [`slice_section`] rather than relying on order.

use crate::record::Field;

pub const VALUE_ATTR: &str = "value";
pub const LINK_TAG: &str = "link";
pub const LINK_KIND_ATTR: &str = "type";

/// A tag name, optionally narrowed by one `attr="value"` discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub only: Option<(&'a str, &'a str)>,
}

impl<'a> Tag<'a> {
    pub const fn named(name: &'a str) -> Self {
        Self { name, only: None }
    }

    /// `<name type="primary" …>` → `Tag::named("name").with("type", "primary")`
    pub const fn with(self, attr: &'a str, value: &'a str) -> Self {
        Self { name: self.name, only: Some((attr, value)) }
    }

    fn accepts(&self, open: &OpenTag<'_>) -> bool {
        if !open.name.eq_ignore_ascii_case(self.name) {
            return false;
        }
        match self.only {
            Some((k, v)) => open.attr(k) == Some(v),
            None => true,
        }
    }
}

/// One opening (or self-closing) tag found in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub name: &'a str,
    /// Raw text between the name and `>` (trailing `/` removed).
    pub attrs: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
    pub self_closing: bool,
}

impl<'a> OpenTag<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr(self.attrs, name)
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}

/// Parse the opening tag whose `<` sits at `lt`. Closing tags, comments and
/// processing instructions yield `None`.
fn open_tag_at(doc: &str, lt: usize) -> Option<OpenTag<'_>> {
    let bytes = doc.as_bytes();
    let name_start = lt + 1;
    let name_len = bytes.get(name_start..)?.iter().take_while(|&&b| is_name_byte(b)).count();
    if name_len == 0 {
        return None;
    }
    let name_end = name_start + name_len;
    let gt = name_end + doc[name_end..].find('>')?;

    let raw = &doc[name_end..gt];
    let self_closing = raw.trim_end().ends_with('/');
    let attrs = if self_closing { raw.trim_end().trim_end_matches('/') } else { raw };

    Some(OpenTag {
        name: &doc[name_start..name_end],
        attrs,
        start: lt,
        end: gt + 1,
        self_closing,
    })
}

/// Iterator over every opening tag accepted by a [`Tag`], document order.
pub struct OpenTags<'d, 't> {
    doc: &'d str,
    tag: Tag<'t>,
    pos: usize,
}

impl<'d> Iterator for OpenTags<'d, '_> {
    type Item = OpenTag<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rel) = self.doc.get(self.pos..)?.find('<') {
            let lt = self.pos + rel;
            self.pos = lt + 1;
            if let Some(open) = open_tag_at(self.doc, lt) {
                self.pos = open.end;
                if self.tag.accepts(&open) {
                    return Some(open);
                }
            }
        }
        self.pos = self.doc.len();
        None
    }
}

pub fn open_tags<'d, 't>(doc: &'d str, tag: Tag<'t>) -> OpenTags<'d, 't> {
    OpenTags { doc, tag, pos: 0 }
}

/// Value bound to `name` inside a raw attribute run like ` type="x" id='3'`.
pub fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let bytes = attrs.as_bytes();
    let n = bytes.len();
    let mut i = 0usize;

    while i < n {
        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }
        let key_start = i;
        while i < n && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' { i += 1; }
        let key = &attrs[key_start..i];
        if key.is_empty() {
            i += 1;
            continue;
        }

        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }
        if i >= n || bytes[i] != b'=' {
            // bare attribute, no value
            if key.eq_ignore_ascii_case(name) { return Some(""); }
            continue;
        }
        i += 1;
        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }

        let value = match bytes.get(i) {
            Some(&q @ (b'"' | b'\'')) => {
                let v_start = i + 1;
                let v_end = attrs[v_start..].find(q as char).map_or(n, |e| v_start + e);
                i = (v_end + 1).min(n);
                &attrs[v_start..v_end]
            }
            _ => {
                let v_start = i;
                while i < n && !bytes[i].is_ascii_whitespace() { i += 1; }
                &attrs[v_start..i]
            }
        };

        if key.eq_ignore_ascii_case(name) {
            return Some(value);
        }
    }
    None
}

/// First `<tag …>` accepted by `tag`, its `attr_name` value, or Unknown.
pub fn extract_attribute(doc: &str, tag: Tag<'_>, attr_name: &str) -> Field {
    open_tags(doc, tag)
        .next()
        .and_then(|open| open.attr(attr_name))
        .into()
}

/// Shorthand for the common `<tag value="…"/>` shape.
pub fn extract_value(doc: &str, tag_name: &str) -> Field {
    extract_attribute(doc, Tag::named(tag_name), VALUE_ATTR)
}

/// Byte offset of the `</name>` that closes an element whose content starts at `from`.
fn find_close(doc: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = doc.as_bytes();
    let mut pos = from;
    while let Some(rel) = doc.get(pos..)?.find("</") {
        let at = pos + rel;
        let name_start = at + 2;
        let name_end = name_start + name.len();
        let matches = doc
            .get(name_start..name_end)
            .is_some_and(|n| n.eq_ignore_ascii_case(name))
            && bytes.get(name_end).is_none_or(|&b| !is_name_byte(b));
        if matches {
            let gt = name_end + doc[name_end..].find('>')?;
            return Some((at, gt + 1));
        }
        pos = name_start;
    }
    None
}

/// Raw inner text of the first `tag_name` element. Not recursive, no decoding.
/// A self-closing element yields `Known("")`.
pub fn extract_text(doc: &str, tag_name: &str) -> Field {
    let Some(open) = open_tags(doc, Tag::named(tag_name)).next() else {
        return Field::Unknown;
    };
    if open.self_closing {
        return Field::known("");
    }
    find_close(doc, open.name, open.end)
        .map(|(close, _)| &doc[open.end..close])
        .into()
}

/// One element: its opening tag plus whatever sits before its closing tag.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    pub open: OpenTag<'a>,
    pub inner: &'a str,
}

/// Every `tag` element in order. Elements without a closing tag are skipped.
pub fn elements<'d>(doc: &'d str, tag: Tag<'_>) -> Vec<Element<'d>> {
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(open) = open_tags(&doc[from..], tag).next() {
        let open = OpenTag { start: open.start + from, end: open.end + from, ..open };
        if open.self_closing {
            out.push(Element { open, inner: "" });
            from = open.end;
            continue;
        }
        match find_close(doc, open.name, open.end) {
            Some((close, after)) => {
                out.push(Element { open, inner: &doc[open.end..close] });
                from = after;
            }
            None => from = open.end,
        }
    }
    out
}

/// Content of the first `<name …>…</name>` section, for scoping later lookups.
pub fn slice_section<'a>(doc: &'a str, name: &str) -> Option<&'a str> {
    let open = open_tags(doc, Tag::named(name)).find(|o| !o.self_closing)?;
    let (close, _) = find_close(doc, open.name, open.end)?;
    Some(&doc[open.end..close])
}

/// Display names of every `<link type="{kind}" value="…">`, document order, uncapped.
pub fn extract_links(doc: &str, kind: &str) -> Vec<String> {
    open_tags(doc, Tag::named(LINK_TAG).with(LINK_KIND_ATTR, kind))
        .filter_map(|open| open.attr(VALUE_ATTR))
        .map(String::from)
        .collect()
}

/// Presentation cap: first [`LINK_CAP`](crate::config::consts::LINK_CAP) names,
/// comma-joined, or Unknown if there are none.
pub fn display_links(names: &[String]) -> Field {
    use crate::config::consts::LINK_CAP;
    if names.is_empty() {
        return Field::Unknown;
    }
    Field::Known(names.iter().take(LINK_CAP).map(String::as_str).collect::<Vec<_>>().join(", "))
}
