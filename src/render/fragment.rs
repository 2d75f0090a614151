//! Owned element subtrees. A fragment is independent until something
//! appends it to a container; building one has no side effects.

/// A child of a fragment: either a nested element or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Fragment),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Fragment {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    pub fn child(mut self, fragment: Fragment) -> Self {
        self.children.push(Node::Element(fragment));
        self
    }

    pub fn append(&mut self, fragment: Fragment) {
        self.children.push(Node::Element(fragment));
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Element children only, in order.
    pub fn elements(&self) -> impl Iterator<Item = &Fragment> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this subtree, like DOM `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Fragment> {
        if self.has_class(class) {
            return Some(self);
        }
        self.elements().find_map(|el| el.find(class))
    }

    /// All elements carrying `class`, depth-first.
    pub fn find_all<'a>(&'a self, class: &str) -> Vec<&'a Fragment> {
        let mut found = Vec::new();
        self.collect_matches(class, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, class: &str, found: &mut Vec<&'a Fragment>) {
        if self.has_class(class) {
            found.push(self);
        }
        for el in self.elements() {
            el.collect_matches(class, found);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(" style=\"");
            out.push_str(&escape_attr(&style));
            out.push('"');
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Element(el) => el.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// CSS `url('...')` value for a background-image property. An empty
/// URL still yields a (broken) value; that matches how the page treats
/// missing images.
pub fn background_image(url: &str) -> String {
    format!("url('{}')", url.replace('\'', "%27"))
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
