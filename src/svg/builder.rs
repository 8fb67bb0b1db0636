//! SVG composition: the document builder and translated groups.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Builder for a complete SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a paint server or other reusable definition to `<defs>`.
    #[must_use]
    pub fn push_def<E: SvgElement>(mut self, element: &E) -> Self {
        self.defs.push(element.render());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height, self.width, self.height
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        if !self.defs.is_empty() {
            output.push_str("    <defs>\n");
            for def in &self.defs {
                for line in def.lines() {
                    let _ = writeln!(output, "        {line}");
                }
            }
            output.push_str("    </defs>\n");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

/// A `<g>` translated to `(x, y)`, holding already-rendered children.
#[derive(Debug, Default, Clone)]
pub struct Group {
    x: f64,
    y: f64,
    class: Option<String>,
    children: Vec<String>,
}

impl Group {
    #[must_use]
    pub const fn translated(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            class: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn push<E: SvgElement + ?Sized>(&mut self, element: &E) {
        let rendered = element.render();
        if !rendered.is_empty() {
            self.children.push(rendered);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let mut output = String::new();
        let class = self
            .class
            .as_ref()
            .map(|c| format!(r#" class="{}""#, html_escape(c)))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"<g transform="translate({},{})"{class}>"#,
            self.x, self.y
        );
        for child in &self.children {
            for line in child.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }
        output.push_str("</g>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
