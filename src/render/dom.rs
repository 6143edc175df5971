//! Native page host backed by `scraper`.
//!
//! The page stays a `scraper::Html` for its whole life: the container is
//! found with a CSS selector, coins are appended straight into the parsed
//! tree and the page is serialized back with `Html::html`, so everything
//! outside the appended coins round-trips the way html5ever writes it.

use ego_tree::{NodeId, Tree};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};

use super::{CoinContainer, CoinHost, RenderError, COIN_CLASS, COIN_TAG};
use crate::models::CoinDescriptor;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A parsed HTML page coins can be rendered into.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML page. Parsing never fails; malformed markup is repaired
    /// the way a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, RenderError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).collect())
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>, RenderError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).next())
    }

    /// Serialize the page, doctype included.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, RenderError> {
    Selector::parse(selector)
        .map_err(|e| RenderError::InvalidSelector(format!("{}: {}", selector, e)))
}

/// Build the element rendered for one coin.
pub fn coin_element(coin: &CoinDescriptor) -> Element {
    Element::new(
        QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(COIN_TAG)),
        vec![
            attribute("class", COIN_CLASS.to_string()),
            attribute("style", coin.inline_style()),
        ],
    )
}

fn attribute(name: &str, value: String) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}

/// The container element inside a [`Document`]'s tree.
pub struct DocumentContainer<'a> {
    tree: &'a mut Tree<Node>,
    id: NodeId,
}

impl<'a> CoinHost for &'a mut Document {
    type Container = DocumentContainer<'a>;

    fn query_container(self, selector: &str) -> Result<Option<Self::Container>, RenderError> {
        let Some(id) = self.select_first(selector)?.map(|element| element.id()) else {
            return Ok(None);
        };
        Ok(Some(DocumentContainer {
            tree: &mut self.html.tree,
            id,
        }))
    }
}

impl CoinContainer for DocumentContainer<'_> {
    fn append_coin(&mut self, coin: &CoinDescriptor) -> Result<(), RenderError> {
        let mut container = self
            .tree
            .get_mut(self.id)
            .ok_or_else(|| RenderError::Dom(format!("container node {:?} is gone", self.id)))?;
        container.append(Node::Element(coin_element(coin)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_coins, CONTAINER_SELECTOR};
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Expenses</title></head>
<body>
    <div class="coin-background" id="coins"><span class="existing">keep</span></div>
    <main><h1>Welcome</h1></main>
</body>
</html>"#;

    fn coins() -> Vec<CoinDescriptor> {
        vec![
            CoinDescriptor::new(10.0, 5.0, 3.0, 0.0),
            CoinDescriptor::new(24.0, 40.5, 8.2, 1.3),
            CoinDescriptor::new(48.0, 97.0, 12.0, 9.9),
        ]
    }

    /// Re-parse serialized output and collect `(class, style)` of every coin
    /// under the container.
    fn rendered_coins(html: &str) -> Vec<(String, String)> {
        let parsed = Html::parse_document(html);
        let selector = Selector::parse(".coin-background > div.coin").unwrap();
        parsed
            .select(&selector)
            .map(|el| {
                (
                    el.value().attr("class").unwrap_or_default().to_string(),
                    el.value().attr("style").unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_finds_container() {
        let doc = Document::parse(PAGE);
        let container = doc.select_first(CONTAINER_SELECTOR).unwrap().unwrap();
        assert_eq!(container.value().name(), "div");
        assert_eq!(container.value().id(), Some("coins"));
        assert_eq!(container.child_elements().count(), 1);
    }

    #[test]
    fn test_render_single_coin() {
        let mut doc = Document::parse(PAGE);
        let count = render_coins(&mut doc, &[CoinDescriptor::new(10.0, 5.0, 3.0, 0.0)]).unwrap();
        assert_eq!(count, 1);

        let container = doc.select_first(CONTAINER_SELECTOR).unwrap().unwrap();
        let coin = container.child_elements().last().unwrap();
        assert_eq!(coin.value().name(), "div");
        assert_eq!(coin.value().attr("class"), Some("coin"));
        assert_eq!(
            coin.value().attr("style"),
            Some("width: 10px; height: 10px; left: 5%; animation-duration: 3s; animation-delay: 0s;")
        );
    }

    #[test]
    fn test_render_preserves_order_after_existing_children() {
        let mut doc = Document::parse(PAGE);
        render_coins(&mut doc, &coins()).unwrap();

        let container = doc.select_first(CONTAINER_SELECTOR).unwrap().unwrap();
        let children: Vec<_> = container.child_elements().collect();
        assert_eq!(children.len(), 4);
        assert_eq!(children[0].value().attr("class"), Some("existing"));

        let styles: Vec<_> = children[1..]
            .iter()
            .map(|c| c.value().attr("style").unwrap())
            .collect();
        let expected: Vec<_> = coins().iter().map(|c| c.inline_style()).collect();
        assert_eq!(styles, expected);
    }

    #[test]
    fn test_render_round_trips_through_html() {
        let mut doc = Document::parse(PAGE);
        render_coins(&mut doc, &coins()).unwrap();

        let found = rendered_coins(&doc.to_html());
        let expected: Vec<_> = coins()
            .iter()
            .map(|c| ("coin".to_string(), c.inline_style()))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_render_empty_leaves_page_unchanged() {
        let mut doc = Document::parse(PAGE);
        let before = doc.to_html();
        assert_eq!(render_coins(&mut doc, &[]).unwrap(), 0);
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_render_twice_appends_twice() {
        let mut doc = Document::parse(PAGE);
        render_coins(&mut doc, &coins()).unwrap();
        render_coins(&mut doc, &coins()).unwrap();
        assert_eq!(rendered_coins(&doc.to_html()).len(), 6);
    }

    #[test]
    fn test_render_missing_container() {
        let mut doc = Document::parse("<html><body><p>No coins here</p></body></html>");
        let before = doc.to_html();

        let err = render_coins(&mut doc, &coins()).unwrap_err();
        assert!(matches!(err, RenderError::ContainerMissing(_)));
        assert_eq!(doc.to_html(), before);

        assert_eq!(render_coins(&mut doc, &[]).unwrap(), 0);
    }

    #[test]
    fn test_render_uses_first_container() {
        let mut doc = Document::parse(
            r#"<html><body><div class="coin-background" id="a"></div><div class="coin-background" id="b"></div></body></html>"#,
        );
        render_coins(&mut doc, &coins()).unwrap();

        assert_eq!(doc.select("#a > .coin").unwrap().len(), 3);
        assert!(doc.select("#b > .coin").unwrap().is_empty());
    }

    #[test]
    fn test_render_keeps_rest_of_page_intact() {
        let page = concat!(
            "<!DOCTYPE html><html><head>",
            "<script>if (a < b && c) {}</script>",
            "</head><body>",
            "<template id=\"t\"><p>row</p></template>",
            "<xmp>if (a < b && c) {}</xmp>",
            "<noembed><b>x</b></noembed>",
            "<p title=\"a &quot;quote&quot; &amp; more\">1 &lt; 2<br><!-- note --></p>",
            "<div class=\"coin-background\"></div>",
            "</body></html>",
        );
        let untouched = Document::parse(page).to_html();

        let mut doc = Document::parse(page);
        render_coins(&mut doc, &[CoinDescriptor::new(10.0, 5.0, 3.0, 0.0)]).unwrap();
        let rendered = doc.to_html();

        for fragment in [
            "<script>if (a < b && c) {}</script>",
            "<template id=\"t\"><p>row</p></template>",
            "<xmp>if (a < b && c) {}</xmp>",
            "<noembed><b>x</b></noembed>",
            "<p title=\"a &quot;quote&quot; &amp; more\">1 &lt; 2<br><!-- note --></p>",
        ] {
            assert!(rendered.contains(fragment), "lost {:?} in {}", fragment, rendered);
        }

        let coin = r#"<div class="coin" style="width: 10px; height: 10px; left: 5%; animation-duration: 3s; animation-delay: 0s;"></div>"#;
        assert_eq!(
            rendered,
            untouched.replace(
                r#"<div class="coin-background"></div>"#,
                &format!(r#"<div class="coin-background">{}</div>"#, coin)
            )
        );
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(PAGE);
        for selector in ["", "div >", "[", "#"] {
            assert!(
                matches!(doc.select_first(selector), Err(RenderError::InvalidSelector(_))),
                "selector {:?} should be rejected",
                selector
            );
        }
    }

    #[test]
    fn test_select_compound_and_combinators() {
        let doc = Document::parse(
            r#"<html><body><div class="x" id="first"><div class="x" id="inner"></div></div><div class="x" id="second"></div></body></html>"#,
        );
        let found = doc.select_first(".x").unwrap().unwrap();
        assert_eq!(found.value().id(), Some("first"));
        assert_eq!(doc.select("div.x").unwrap().len(), 3);
        assert_eq!(doc.select("#first > .x").unwrap().len(), 1);
        assert!(doc.select_first("span").unwrap().is_none());
    }

    #[test]
    fn test_coin_element_attributes() {
        let element = coin_element(&CoinDescriptor::new(24.0, 40.5, 8.2, 1.3));
        assert_eq!(element.name(), "div");
        assert!(element.has_class("coin", scraper::CaseSensitivity::CaseSensitive));
        assert_eq!(
            element.attr("style"),
            Some("width: 24px; height: 24px; left: 40.5%; animation-duration: 8.2s; animation-delay: 1.3s;")
        );
    }
}
