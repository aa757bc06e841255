//! Format-preserving document model for Maven POM files.
//!
//! Responsibilities:
//! - Parse a POM and report validity (root element must be `<project>`).
//! - Enumerate build sections: the root build plus one per `<profile>`.
//! - Answer plugin presence queries at document and section scope.
//! - Splice plugin/configuration fragments into the text without disturbing
//!   any byte outside the edit. A document that is never mutated serializes
//!   byte-identically, XML declaration included.
//!
//! The tree is re-parsed from the owned text inside each call; no node
//! references survive a mutation. Documents are small enough that this is
//! cheaper than keeping a self-referential tree alive.

mod error;
mod splice;

pub use error::{ParseError, PomError, PomResult};

use roxmltree::{Document, Node};
use splice::{Splice, indent_fragment, line_indent, trailing_ws_start, wrap_in_path};
use std::fmt;

/// Names a build section: the root `<build>` or one profile's `<build>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionId {
    Root,
    Profile {
        /// Declaration index under `<profiles>`.
        index: usize,
        /// The profile's `<id>` text, when declared.
        id: Option<String>,
    },
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::Root => write!(f, "root build"),
            SectionId::Profile { id: Some(id), .. } => write!(f, "profile '{id}'"),
            SectionId::Profile { index, id: None } => write!(f, "profile #{index}"),
        }
    }
}

/// One Maven POM, held as text plus a validity flag.
#[derive(Debug, Clone)]
pub struct PomDocument {
    text: String,
    valid: bool,
}

impl PomDocument {
    /// Parse `content`. Malformed XML is an error; well-formed XML with a
    /// root element other than `<project>` parses with `is_valid() == false`
    /// so the caller can skip the file instead of aborting.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let valid = {
            let doc = Document::parse(content)?;
            doc.root_element().tag_name().name() == "project"
        };
        Ok(Self {
            text: content.to_string(),
            valid,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The serialized document. Untouched bytes are the input bytes.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// The indentation step used by this document, inferred from the first
    /// indented child of the root element. Defaults to two spaces.
    pub fn indent_unit(&self) -> String {
        match Document::parse(&self.text) {
            Ok(doc) => infer_unit(&self.text, doc.root_element()),
            Err(_) => "  ".to_string(),
        }
    }

    /// All build sections in document order: root first, then profiles in
    /// declaration order. Integrators must apply in exactly this order so
    /// repeated runs produce deterministic output.
    pub fn sections(&self) -> PomResult<Vec<SectionId>> {
        let doc = self.tree()?;
        let root = doc.root_element();
        let mut out = vec![SectionId::Root];
        if let Some(profiles) = child_element(root, "profiles") {
            let iter = profiles
                .children()
                .filter(|c| c.is_element() && c.tag_name().name() == "profile");
            for (index, profile) in iter.enumerate() {
                let id = child_element(profile, "id").and_then(element_text);
                out.push(SectionId::Profile { index, id });
            }
        }
        Ok(out)
    }

    /// Whether a plugin with this artifactId is declared in any plugins list
    /// of the document (root build, profile builds, pluginManagement).
    pub fn plugin_exists_anywhere(&self, artifact_id: &str) -> bool {
        let Ok(doc) = Document::parse(&self.text) else {
            return false;
        };
        doc.descendants().any(|n| {
            n.is_element()
                && n.tag_name().name() == "plugin"
                && n.parent().is_some_and(|p| p.tag_name().name() == "plugins")
                && plugin_artifact_matches(n, artifact_id)
        })
    }

    /// Section-scoped presence check over the section's `build/plugins` and
    /// `build/pluginManagement/plugins`. Absent lists are empty, not errors.
    pub fn section_has_plugin(&self, section: &SectionId, artifact_id: &str) -> bool {
        let Ok(doc) = Document::parse(&self.text) else {
            return false;
        };
        let Some(base) = section_node(&doc, section) else {
            return false;
        };
        let Some(build) = child_element(base, "build") else {
            return false;
        };
        [
            walk(build, &["plugins"]),
            walk(build, &["pluginManagement", "plugins"]),
        ]
        .into_iter()
        .flatten()
        .any(|plugins| find_plugin(plugins, artifact_id).is_some())
    }

    /// Like [`section_has_plugin`](Self::section_has_plugin) but restricted
    /// to the section's `build/plugins` list, the only place mutations can
    /// anchor to.
    pub fn section_declares_plugin(&self, section: &SectionId, artifact_id: &str) -> bool {
        let Ok(doc) = Document::parse(&self.text) else {
            return false;
        };
        plugin_node(&doc, section, artifact_id).is_some()
    }

    /// Append a `<plugin>` fragment to the section's `build/plugins`,
    /// creating `<build>` and `<plugins>` when missing. Existing plugin
    /// declarations are not touched.
    pub fn append_plugin(&mut self, section: &SectionId, fragment: &str) -> PomResult<()> {
        self.append_fragment(Anchor::Section(section), &["build", "plugins"], fragment)
    }

    /// Append a fragment inside an existing plugin declaration, under `path`
    /// relative to the `<plugin>` element. Missing path elements are created.
    pub fn append_in_plugin(
        &mut self,
        section: &SectionId,
        artifact_id: &str,
        path: &[&str],
        fragment: &str,
    ) -> PomResult<()> {
        self.append_fragment(Anchor::Plugin(section, artifact_id), path, fragment)
    }

    /// Trimmed text of the element at `path` under the plugin declaration.
    /// `None` when the plugin, the path, or the text is absent.
    pub fn plugin_text(
        &self,
        section: &SectionId,
        artifact_id: &str,
        path: &[&str],
    ) -> Option<String> {
        let doc = Document::parse(&self.text).ok()?;
        let plugin = plugin_node(&doc, section, artifact_id)?;
        walk(plugin, path).and_then(element_text)
    }

    /// Trimmed texts of every `child` element at `path` under the plugin
    /// declaration, in document order.
    pub fn plugin_texts(
        &self,
        section: &SectionId,
        artifact_id: &str,
        path: &[&str],
        child: &str,
    ) -> Vec<String> {
        let Ok(doc) = Document::parse(&self.text) else {
            return Vec::new();
        };
        let Some(plugin) = plugin_node(&doc, section, artifact_id) else {
            return Vec::new();
        };
        let Some(target) = walk(plugin, path) else {
            return Vec::new();
        };
        target
            .children()
            .filter(|c| c.is_element() && c.tag_name().name() == child)
            .filter_map(|c| element_text(c))
            .collect()
    }

    /// Prepend `prefix` to the text of the element at `path` under the
    /// plugin declaration. Returns `false` without touching the document
    /// when the plugin, the path, or the existing text is absent; the
    /// caller owns the decision of what absence means.
    pub fn prepend_plugin_text(
        &mut self,
        section: &SectionId,
        artifact_id: &str,
        path: &[&str],
        prefix: &str,
    ) -> PomResult<bool> {
        let splice = {
            let doc = self.tree()?;
            let Some(plugin) = plugin_node(&doc, section, artifact_id) else {
                return Ok(false);
            };
            let Some(target) = walk(plugin, path) else {
                return Ok(false);
            };
            let Some(text_node) = target.children().find(|c| c.is_text()) else {
                return Ok(false);
            };
            let range = text_node.range();
            let raw = &self.text[range.clone()];
            let lead = raw.len() - raw.trim_start().len();
            Splice::insert(range.start + lead, prefix.to_string())
        };
        splice.apply(&mut self.text);
        Ok(true)
    }

    fn tree(&self) -> PomResult<Document<'_>> {
        Document::parse(&self.text).map_err(PomError::Reparse)
    }

    fn append_fragment(
        &mut self,
        anchor: Anchor<'_>,
        path: &[&str],
        fragment: &str,
    ) -> PomResult<()> {
        let splice = {
            let doc = self.tree()?;
            let unit = infer_unit(&self.text, doc.root_element());
            let base = anchor_node(&doc, &anchor)?;

            let mut current = base;
            let mut missing: &[&str] = &[];
            for (i, name) in path.iter().enumerate() {
                match child_element(current, name) {
                    Some(next) => current = next,
                    None => {
                        missing = &path[i..];
                        break;
                    }
                }
            }

            let frag = if missing.is_empty() {
                fragment.to_string()
            } else {
                wrap_in_path(fragment, missing, &unit)
            };
            build_append_splice(&self.text, current, &frag, &unit)?
        };
        splice.apply(&mut self.text);
        Ok(())
    }
}

/// Where a fragment is appended: under a section's base element, or under a
/// specific plugin declaration inside the section.
enum Anchor<'a> {
    Section(&'a SectionId),
    Plugin(&'a SectionId, &'a str),
}

fn anchor_node<'a, 'i>(doc: &'a Document<'i>, anchor: &Anchor<'_>) -> PomResult<Node<'a, 'i>> {
    match anchor {
        Anchor::Section(section) => section_node(doc, section)
            .ok_or_else(|| PomError::SectionNotFound(section.to_string())),
        Anchor::Plugin(section, artifact_id) => {
            let base = section_node(doc, section)
                .ok_or_else(|| PomError::SectionNotFound(section.to_string()))?;
            walk(base, &["build", "plugins"])
                .and_then(|plugins| find_plugin(plugins, artifact_id))
                .ok_or_else(|| PomError::PluginNotFound {
                    artifact_id: (*artifact_id).to_string(),
                    section: section.to_string(),
                })
        }
    }
}

/// Build the splice that appends `fragment` as the last child of
/// `container`, expanding self-closing containers and keeping the closing
/// tag on its own line.
fn build_append_splice(
    text: &str,
    container: Node<'_, '_>,
    fragment: &str,
    unit: &str,
) -> PomResult<Splice> {
    let range = container.range();
    let name = container.tag_name().name().to_string();
    let slice = &text[range.clone()];
    let container_indent = line_indent(text, range.start).to_string();
    let child_indent = format!("{container_indent}{unit}");
    let inner = indent_fragment(fragment, &child_indent);

    if let Some(pos) = slice.rfind(&format!("</{name}")) {
        let close_start = range.start + pos;
        let ws_start = trailing_ws_start(text, close_start);
        let ws = &text[ws_start..close_start];
        if ws.contains('\n') {
            Ok(Splice::insert(ws_start, format!("\n{inner}")))
        } else {
            Ok(Splice::replace(
                ws_start..close_start,
                format!("\n{inner}\n{container_indent}"),
            ))
        }
    } else if slice.ends_with("/>") {
        Ok(Splice::replace(
            range.end - 2..range.end,
            format!(">\n{inner}\n{container_indent}</{name}>"),
        ))
    } else {
        Err(PomError::MalformedElement(name))
    }
}

fn infer_unit(text: &str, root: Node<'_, '_>) -> String {
    for child in root.children() {
        if child.is_element() {
            let indent = line_indent(text, child.range().start);
            if !indent.is_empty() {
                return indent.to_string();
            }
        }
    }
    "  ".to_string()
}

fn child_element<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn walk<'a, 'i>(mut node: Node<'a, 'i>, path: &[&str]) -> Option<Node<'a, 'i>> {
    for name in path {
        node = child_element(node, name)?;
    }
    Some(node)
}

fn element_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn plugin_artifact_matches(plugin: Node<'_, '_>, artifact_id: &str) -> bool {
    child_element(plugin, "artifactId")
        .and_then(|n| n.text())
        .is_some_and(|t| t.trim() == artifact_id)
}

fn find_plugin<'a, 'i>(plugins: Node<'a, 'i>, artifact_id: &str) -> Option<Node<'a, 'i>> {
    plugins.children().find(|c| {
        c.is_element()
            && c.tag_name().name() == "plugin"
            && plugin_artifact_matches(*c, artifact_id)
    })
}

fn plugin_node<'a, 'i>(
    doc: &'a Document<'i>,
    section: &SectionId,
    artifact_id: &str,
) -> Option<Node<'a, 'i>> {
    let base = section_node(doc, section)?;
    let plugins = walk(base, &["build", "plugins"])?;
    find_plugin(plugins, artifact_id)
}

fn section_node<'a, 'i>(doc: &'a Document<'i>, section: &SectionId) -> Option<Node<'a, 'i>> {
    let root = doc.root_element();
    match section {
        SectionId::Root => Some(root),
        SectionId::Profile { index, .. } => child_element(root, "profiles")?
            .children()
            .filter(|c| c.is_element() && c.tag_name().name() == "profile")
            .nth(*index),
    }
}
