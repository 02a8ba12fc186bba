//! Minimal element tree used to build the status page markup.
//!
//! Elements carry a tag, a class list, ordered attributes and children. The
//! tree is serialised with [`Element::to_html`], escaping text and attribute
//! values.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// First descendant carrying `class`, depth first. The element itself is
    /// not considered.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| match child {
            Node::Element(element) if element.has_class(class) => Some(element),
            Node::Element(element) => element.find_by_class(class),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => {
                if element.has_class(class) {
                    Some(element)
                } else {
                    element.find_by_class_mut(class)
                }
            }
            Node::Text(_) => None,
        })
    }

    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(value) => out.push_str(value),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(value) => out.push_str(&html_escape::encode_text(value)),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("a")
            .with_class("project")
            .with_attribute("href", "https://example.com/?a=1&b=2")
            .with_child(Element::new("p").with_class("name").with_text("<Demo>"))
            .with_child(
                Element::new("p")
                    .with_class("status")
                    .with_child(Element::new("span").with_class("subheading").with_text("Loading")),
            )
    }

    #[test]
    fn serialises_with_escaping() {
        let html = sample().to_html();
        assert_eq!(
            html,
            "<a class=\"project\" href=\"https://example.com/?a=1&amp;b=2\">\
             <p class=\"name\">&lt;Demo&gt;</p>\
             <p class=\"status\"><span class=\"subheading\">Loading</span></p></a>"
        );
    }

    #[test]
    fn finds_nested_elements_by_class() {
        let mut element = sample();
        assert_eq!(
            element.find_by_class("subheading").map(|el| el.text_content()),
            Some("Loading".to_string())
        );
        assert!(element.find_by_class("project").is_none());

        let status = element.find_by_class_mut("status").expect("status element");
        status.replace_children(vec![Node::Text("done".to_string())]);
        assert_eq!(element.text_content(), "<Demo>done");
    }

    #[test]
    fn mutable_lookup_reaches_deep_descendants() {
        let mut element = Element::new("div")
            .with_text("lead")
            .with_child(Element::new("p").with_class("other"))
            .with_child(
                Element::new("section")
                    .with_child(Element::new("ul").with_child(Element::new("li").with_class("target"))),
            );

        element
            .find_by_class_mut("target")
            .expect("nested target")
            .add_class("resolved");
        assert!(element.find_by_class("resolved").is_some());
        assert!(element.find_by_class_mut("missing").is_none());
    }

    #[test]
    fn classes_and_attributes_do_not_duplicate() {
        let mut element = Element::new("div").with_class("a").with_attribute("id", "x");
        element.add_class("a");
        element.add_class("b");
        element.set_attribute("id", "y");
        assert_eq!(element.classes(), &["a".to_string(), "b".to_string()]);
        assert_eq!(element.attribute("id"), Some("y"));
        assert_eq!(element.to_html(), "<div class=\"a b\" id=\"y\"></div>");
    }
}
