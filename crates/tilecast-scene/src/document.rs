//! Ordered scene document with resource-id bookkeeping.

use crate::value::Value;

/// Scene-descriptor format version for Godot 3.x text scenes.
pub const FORMAT_VERSION: u32 = 2;

/// One line of the document body.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Heading {
        kind: &'static str,
        attrs: Vec<(String, Value)>,
    },
    Record {
        key: String,
        value: Value,
    },
    Comment(String),
    Blank,
}

impl Entry {
    fn render(&self) -> String {
        match self {
            Entry::Heading { kind, attrs } => render_heading(kind, attrs),
            Entry::Record { key, value } => format!("{key} = {value}"),
            Entry::Comment(text) => format!("; {text}"),
            Entry::Blank => String::new(),
        }
    }
}

fn render_heading(kind: &str, attrs: &[(String, Value)]) -> String {
    if attrs.is_empty() {
        return format!("[{kind}]");
    }
    let attrs = attrs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{kind} {attrs}]")
}

/// An append-only `.tscn` document under construction.
///
/// External-resource and sub-resource ids are independent, monotonically
/// increasing 1-based counters. An id is assigned when the corresponding
/// heading is emitted and is never reused or renumbered afterwards; the
/// target format binds references by these numbers.
#[derive(Debug, Default)]
pub struct SceneDocument {
    entries: Vec<Entry>,
    ext_count: u32,
    sub_count: u32,
}

impl SceneDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next external-resource id (1-based).
    pub fn alloc_ext_id(&mut self) -> u32 {
        self.ext_count += 1;
        self.ext_count
    }

    /// Allocates the next sub-resource id (1-based).
    pub fn alloc_sub_id(&mut self) -> u32 {
        self.sub_count += 1;
        self.sub_count
    }

    /// Number of external-resource ids handed out so far.
    pub fn ext_count(&self) -> u32 {
        self.ext_count
    }

    /// Number of sub-resource ids handed out so far.
    pub fn sub_count(&self) -> u32 {
        self.sub_count
    }

    /// Appends a `[kind key=value …]` heading.
    pub fn push_heading(&mut self, kind: &'static str, attrs: Vec<(&str, Value)>) {
        self.entries.push(Entry::Heading {
            kind,
            attrs: attrs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        });
    }

    /// Appends a `key = value` record.
    pub fn push_record(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push(Entry::Record {
            key: key.into(),
            value,
        });
    }

    /// Appends a `; text` comment line.
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Comment(text.into()));
    }

    /// Appends an empty separator line.
    pub fn push_blank(&mut self) {
        self.entries.push(Entry::Blank);
    }

    /// Renders the complete document: the `gd_scene` descriptor, a blank
    /// line, then the body, all with `\n` line endings.
    ///
    /// `load_steps` counts every allocated resource id plus one for the
    /// scene itself.
    pub fn render(&self) -> String {
        let load_steps = self.ext_count + self.sub_count + 1;
        let descriptor = render_heading(
            "gd_scene",
            &[
                ("load_steps".to_string(), Value::Int(i64::from(load_steps))),
                ("format".to_string(), Value::Int(i64::from(FORMAT_VERSION))),
            ],
        );
        let body = self
            .entries
            .iter()
            .map(Entry::render)
            .collect::<Vec<_>>()
            .join("\n");
        format!("{descriptor}\n\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_rendering() {
        let mut doc = SceneDocument::new();
        doc.push_heading(
            "node",
            vec![
                ("name", Value::str("Root")),
                ("type", Value::str("Node2D")),
            ],
        );
        assert_eq!(
            doc.render(),
            "[gd_scene load_steps=1 format=2]\n\n[node name=\"Root\" type=\"Node2D\"]"
        );
    }

    #[test]
    fn test_heading_quotes_strings_but_not_ints() {
        let mut doc = SceneDocument::new();
        doc.push_heading(
            "ext_resource",
            vec![
                ("path", Value::str("res://a.png")),
                ("type", Value::str("Texture")),
                ("id", Value::Int(1)),
            ],
        );
        let body = doc.render();
        assert!(body.ends_with("[ext_resource path=\"res://a.png\" type=\"Texture\" id=1]"));
    }

    #[test]
    fn test_record_rendering() {
        let mut doc = SceneDocument::new();
        doc.push_record("format", Value::Int(1));
        doc.push_record("cell_size", Value::ctor("Vector2", [16, 16]));
        let body = doc.render();
        assert!(body.contains("format = 1\ncell_size = Vector2( 16, 16 )"));
    }

    #[test]
    fn test_comment_and_blank_rendering() {
        let mut doc = SceneDocument::new();
        doc.push_comment("LAYER collisions");
        doc.push_blank();
        assert_eq!(
            doc.render(),
            "[gd_scene load_steps=1 format=2]\n\n; LAYER collisions\n"
        );
    }

    #[test]
    fn test_id_counters_are_one_based_and_independent() {
        let mut doc = SceneDocument::new();
        assert_eq!(doc.alloc_ext_id(), 1);
        assert_eq!(doc.alloc_ext_id(), 2);
        assert_eq!(doc.alloc_sub_id(), 1);
        assert_eq!(doc.alloc_ext_id(), 3);
        assert_eq!(doc.ext_count(), 3);
        assert_eq!(doc.sub_count(), 1);
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut doc = SceneDocument::new();
        let mut seen = Vec::new();
        for _ in 0..10 {
            seen.push(doc.alloc_ext_id());
        }
        for pair in seen.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_load_steps_counts_all_resources_plus_scene() {
        let mut doc = SceneDocument::new();
        doc.alloc_ext_id();
        doc.alloc_ext_id();
        doc.alloc_sub_id();
        assert!(doc.render().starts_with("[gd_scene load_steps=4 format=2]"));
    }

    #[test]
    fn test_empty_document_renders_descriptor_only() {
        let doc = SceneDocument::new();
        assert_eq!(doc.render(), "[gd_scene load_steps=1 format=2]\n\n");
    }
}
