use serde::{Deserialize, Serialize};

/// User interaction bound to an element
///
/// Shells translate these back into events: `SelectEvent` and `RemoveEvent`
/// map one to one, `CreateEvent` is completed with the submitted form values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    SelectEvent { id: u32 },
    CreateEvent,
    RemoveEvent { id: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Empty for boolean attributes such as `required`
    pub value: String,
}

/// Declarative description of the visible tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub action: Option<Action>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Builder pattern: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Builder pattern: add a boolean attribute
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Builder pattern: bind a user interaction
    pub fn on(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    /// First element in document order matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let element = self.as_element()?;
        if predicate(element) {
            return Some(element);
        }
        element.children.iter().find_map(|child| child.find(predicate))
    }

    /// All elements in document order matching `predicate`
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(predicate, &mut found);
        found
    }

    fn collect_matching<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_matching(predicate, found);
            }
        }
    }
}
