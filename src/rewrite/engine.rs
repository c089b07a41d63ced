//! Replace pass: wraps every recognized symbol in a document tree.
//!
//! The input tree is never mutated. A node whose subtree contains no match
//! comes back as the same `Arc`; an element with a changed descendant is
//! rebuilt shallowly and shares every untouched child with the input.
//! Substitutes carry the marker class and are skipped on later passes, so
//! `replace(replace(n)) == replace(n)`. A substitute written under another
//! configuration is recognized by its shape (a classed element wrapping a
//! single registered glyph) and skipped as well.

use std::sync::Arc;

use tracing::trace;

use super::config::RewriteConfig;
use super::node::{text, Element, Node, NodeRef};
use crate::vocab::{Entry, Registry, Symbol};

/// Replace over the shared built-in registry with the default markup.
pub fn replace(nodes: &[NodeRef]) -> Vec<NodeRef> {
    Registry::shared().replace(nodes)
}

impl Registry {
    /// Wrap every glyph and `:alias:` occurrence in `nodes`.
    ///
    /// The result has one node per input node, except that a top-level text
    /// node containing matches expands into its fragments and substitutes.
    pub fn replace(&self, nodes: &[NodeRef]) -> Vec<NodeRef> {
        self.replace_with(nodes, RewriteConfig::shared())
    }

    pub fn replace_with(&self, nodes: &[NodeRef], config: &RewriteConfig) -> Vec<NodeRef> {
        let rewriter = Rewriter { registry: self, config };
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            rewriter.replace_node(node, false, &mut out);
        }
        out
    }
}

struct Rewriter<'a> {
    registry: &'a Registry,
    config: &'a RewriteConfig,
}

impl Rewriter<'_> {
    /// Push the replacement(s) for `node` onto `out`.
    ///
    /// `in_tooltip` is set when an ancestor already declares the tooltip
    /// attribute.
    fn replace_node(&self, node: &NodeRef, in_tooltip: bool, out: &mut Vec<NodeRef>) {
        match node.as_ref() {
            Node::Element(el) if self.is_opaque(el) => out.push(Arc::clone(node)),
            Node::Element(el) => out.push(self.replace_element(node, el, in_tooltip)),
            Node::Text(data) => self.replace_text(node, data, in_tooltip, out),
            Node::Comment(_) | Node::Doctype(_) => out.push(Arc::clone(node)),
        }
    }

    fn is_opaque(&self, el: &Element) -> bool {
        self.config.is_opaque_tag(&el.tag)
            || (self.config.skip_foreign_elements && el.namespace.is_some())
            || self.is_rendered_symbol(el)
    }

    /// A substitute left by an earlier pass, possibly one run with other
    /// markup: it carries the marker class, or it carries some class and
    /// holds nothing but one registered glyph.
    fn is_rendered_symbol(&self, el: &Element) -> bool {
        if el.has_class(&self.config.marker_class) {
            return true;
        }
        if el.attr("class").is_none() {
            return false;
        }
        match el.children.as_slice() {
            [only] => match only.as_ref() {
                Node::Text(data) => self
                    .registry
                    .lookup(data)
                    .is_some_and(|entry| entry.glyph() == Some(data.as_str())),
                _ => false,
            },
            _ => false,
        }
    }

    fn replace_element(&self, node: &NodeRef, el: &Element, in_tooltip: bool) -> NodeRef {
        let in_tooltip = in_tooltip || el.attr(&self.config.tooltip_attribute).is_some();
        let mut rebuilt: Option<Element> = None;
        let mut replaced = Vec::new();

        for (i, child) in el.children.iter().enumerate() {
            replaced.clear();
            self.replace_node(child, in_tooltip, &mut replaced);

            if let Some(copy) = rebuilt.as_mut() {
                copy.children.append(&mut replaced);
                continue;
            }
            if replaced.len() == 1 && Arc::ptr_eq(&replaced[0], child) {
                continue;
            }

            // First changed child: copy the element and share its earlier
            // children.
            let mut copy = el.shallow_clone();
            copy.children.reserve(el.children.len() + replaced.len());
            copy.children.extend(el.children[..i].iter().cloned());
            copy.children.append(&mut replaced);
            rebuilt = Some(copy);
        }

        match rebuilt {
            Some(copy) => copy.into_node(),
            None => Arc::clone(node),
        }
    }

    fn replace_text(&self, node: &NodeRef, data: &str, in_tooltip: bool, out: &mut Vec<NodeRef>) {
        let spans = self.registry.automaton().find_spans(data);
        if spans.is_empty() {
            out.push(Arc::clone(node));
            return;
        }

        let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
        let mut last = 0;
        for span in spans {
            let Some(entry) = self.registry.lookup(&data[span.clone()]) else {
                // Not resolvable: leave the matched text in the next fragment.
                trace!(key = %&data[span.clone()], "match without entry");
                continue;
            };
            if span.start > last {
                pieces.push(text(&data[last..span.start]));
            }
            pieces.push(self.substitute(entry, &data[span.clone()], in_tooltip));
            last = span.end;
        }

        if last == 0 {
            out.push(Arc::clone(node));
            return;
        }
        if last < data.len() {
            pieces.push(text(&data[last..]));
        }

        trace!(fragments = pieces.len(), "text node rewritten");
        out.append(&mut pieces);
    }

    /// Annotated element standing in for `matched`.
    fn substitute(&self, entry: &Entry, matched: &str, in_tooltip: bool) -> NodeRef {
        let config = self.config;
        let tag = match entry.symbol() {
            Symbol::Glyph(_) => &config.glyph_tag,
            Symbol::Image(_) => &config.image_tag,
        };

        let mut el = Element::new(tag);
        if !in_tooltip {
            el = el.with_attr(&config.tooltip_attribute, entry.description());
        }
        el = el.with_attr("class", &config.marker_class);

        let el = match entry.symbol() {
            Symbol::Glyph(glyph) => el.with_child(text(glyph)),
            Symbol::Image(url) => el.with_attr("src", url).with_attr("alt", matched),
        };
        el.into_node()
    }
}
