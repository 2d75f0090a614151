//! The hosting page, modelled as an explicit value instead of a DOM
//! global so rendering is testable without a browser.

use crate::render::fragment::{escape_attr, escape_text, Fragment};

/// Id of the well-known card grid container.
pub const CARD_GRID_ID: &str = "clubCardsGrid";

/// A rendering surface: something that can hand out addressable
/// containers by id. Lookup is find-or-none; callers check for
/// absence before appending.
pub trait Surface {
    fn container_mut(&mut self, id: &str) -> Option<&mut Container>;
}

/// Look up the card grid on a surface. None when the hosting page has
/// no such container; the caller decides whether to skip or bail.
pub fn card_grid<S: Surface + ?Sized>(surface: &mut S) -> Option<&mut Container> {
    surface.container_mut(CARD_GRID_ID)
}

/// An addressable location that holds appended fragments in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Fragment>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends as the last child. No deduplication: appending the same
    /// fragment twice yields two independent copies.
    pub fn append(&mut self, fragment: Fragment) {
        self.children.push(fragment);
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    fn write_html(&self, out: &mut String) {
        out.push_str("<div id=\"");
        out.push_str(&escape_attr(&self.id));
        out.push_str("\">");
        for child in &self.children {
            out.push_str(&child.to_html());
        }
        out.push_str("</div>");
    }
}

/// A minimal HTML5 document shell with named containers in its body.
/// Styling is external; the page links a stylesheet and nothing more.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    title: String,
    containers: Vec<Container>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            containers: Vec::new(),
        }
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.push(Container::new(id));
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>");
        out.push_str(&escape_text(&self.title));
        out.push_str("</title>\n<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n");
        for container in &self.containers {
            container.write_html(&mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl Surface for HtmlPage {
    fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }
}
