//! Tiny XML fragment builder for the rendered plugin blocks.

/// Escape text content for element bodies.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates an indented XML fragment, one element per line. The caller
/// supplies the indent unit so the fragment matches the host document.
pub(crate) struct Fragment {
    unit: String,
    depth: usize,
    out: String,
}

impl Fragment {
    pub fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            depth: 0,
            out: String::new(),
        }
    }

    fn line(&mut self, content: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.depth {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(content);
    }

    pub fn open(&mut self, name: &str) -> &mut Self {
        self.line(&format!("<{name}>"));
        self.depth += 1;
        self
    }

    pub fn close(&mut self, name: &str) -> &mut Self {
        self.depth -= 1;
        self.line(&format!("</{name}>"));
        self
    }

    pub fn leaf(&mut self, name: &str, value: &str) -> &mut Self {
        self.line(&format!("<{name}>{}</{name}>", escape(value)));
        self
    }

    /// Emit the element only when a value is present.
    pub fn leaf_opt(&mut self, name: &str, value: Option<&String>) -> &mut Self {
        if let Some(value) = value {
            self.leaf(name, value);
        }
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a & <b>"), "a &amp; &lt;b&gt;");
    }

    #[test]
    fn nests_with_the_given_unit() {
        let mut f = Fragment::new("    ");
        f.open("plugin").leaf("artifactId", "x").close("plugin");
        assert_eq!(f.finish(), "<plugin>\n    <artifactId>x</artifactId>\n</plugin>");
    }

    #[test]
    fn leaf_opt_skips_none() {
        let mut f = Fragment::new("  ");
        f.leaf_opt("proxy", None);
        assert_eq!(f.finish(), "");
    }
}
