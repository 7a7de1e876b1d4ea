// html.rs
use super::DomNode;
use scraper::{ElementRef, Html};

/// A listing page parsed with `scraper` (html5ever).
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The `<html>` element.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> DomNode for HtmlNode<'a> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn id(&self) -> Option<&str> {
        self.0.value().id()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlNode)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_siblings().find_map(ElementRef::wrap).map(HtmlNode)
    }

    fn prev_sibling(&self) -> Option<Self> {
        self.0.prev_siblings().find_map(ElementRef::wrap).map(HtmlNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .map(HtmlNode)
            .collect()
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Query;

    const PAGE: &str = r#"
        <html><body>
          <div id="wrap">
            <table>
              <tr>
                <th><div class="fl">価格</div><div class="fr">help</div></th>
                <td><p>5000万円</p><p>（税込）</p></td>
              </tr>
            </table>
          </div>
        </body></html>"#;

    #[test]
    fn navigates_from_label_to_value_cell() {
        let doc = HtmlDocument::parse(PAGE);
        let root = doc.root();

        let label = root
            .find_first(&Query::class("fl").containing("価格"))
            .expect("label present");
        assert_eq!(label.tag_name(), "div");

        let th = label.ancestor("th").expect("th ancestor");
        let td = th.next_sibling().expect("value cell");
        assert_eq!(td.tag_name(), "td");
        assert_eq!(td.text(), "5000万円（税込）");

        let paragraphs = td.find_all(&Query::tag("p"));
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].is_first_child());
        assert!(!paragraphs[1].is_first_child());
    }

    #[test]
    fn whitespace_text_between_elements_is_skipped() {
        let doc = HtmlDocument::parse(PAGE);
        let root = doc.root();

        let th = root.find_first(&Query::tag("th")).expect("th");
        // Newlines and indentation sit between </th> and <td> in the source.
        assert_eq!(th.next_sibling().map(|n| n.tag_name().to_string()), Some("td".into()));
        assert!(th.prev_sibling().is_none());
    }

    #[test]
    fn id_and_parent_lookup() {
        let doc = HtmlDocument::parse(PAGE);
        let root = doc.root();

        let wrap = root.find_first(&Query::id("wrap")).expect("#wrap");
        assert_eq!(wrap.parent().map(|p| p.tag_name().to_string()), Some("body".into()));
        assert!(root.parent().is_none());
        assert!(root.find_first(&Query::id("missing")).is_none());
    }
}
