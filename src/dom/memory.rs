use anyhow::Result;

use super::Container;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
  Text(String),
  Element(MemoryElement),
}

/// Detached element tree, rendered without a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
  tag: String,
  id: Option<String>,
  classes: Vec<String>,
  nodes: Vec<Node>,
}

impl MemoryElement {
  pub fn new(tag: impl Into<String>) -> Self {
    Self { tag: tag.into(), ..Default::default() }
  }

  pub fn with_id(id: impl Into<String>) -> Self {
    Self { id: Some(id.into()), ..Self::new("div") }
  }

  pub fn classes(&self) -> &[String] {
    &self.classes
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  /// Element children, skipping text nodes.
  pub fn children(&self) -> impl Iterator<Item = &MemoryElement> {
    self.nodes.iter().filter_map(|node| match node {
      Node::Element(element) => Some(element),
      Node::Text(_) => None,
    })
  }

  pub fn text_content(&self) -> String {
    let mut text = String::new();
    self.collect_text(&mut text);
    text
  }

  fn collect_text(&self, out: &mut String) {
    for node in &self.nodes {
      match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => element.collect_text(out),
      }
    }
  }

  pub fn to_html(&self) -> String {
    let mut html = String::new();
    self.write_html(&mut html);
    html
  }

  fn write_html(&self, out: &mut String) {
    out.push('<');
    out.push_str(&self.tag);
    if let Some(id) = &self.id {
      out.push_str(&format!(r#" id="{}""#, escape(id)));
    }
    if !self.classes.is_empty() {
      out.push_str(&format!(r#" class="{}""#, escape(&self.classes.join(" "))));
    }
    out.push('>');
    for node in &self.nodes {
      match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => element.write_html(out),
      }
    }
    out.push_str(&format!("</{}>", self.tag));
  }
}

impl Container for MemoryElement {
  fn clear(&mut self) -> Result<()> {
    self.nodes.clear();
    Ok(())
  }

  fn set_text(&mut self, text: &str) -> Result<()> {
    self.nodes = vec![Node::Text(text.to_owned())];
    Ok(())
  }

  fn append_item(&mut self, class: &str, text: &str) -> Result<()> {
    let mut item = MemoryElement::new("div");
    item.classes.push(class.to_owned());
    item.nodes.push(Node::Text(text.to_owned()));
    self.nodes.push(Node::Element(item));
    Ok(())
  }
}

fn escape(s: &str) -> String {
  let mut escaped = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
