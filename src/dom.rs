//! DOM Helpers
//!
//! Typed lookups that report missing nodes as errors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{Error, Result};
use crate::models::PostId;

/// Attribute a control may carry with its own post id
pub const POST_ID_ATTR: &str = "data-post-id";
/// Attribute the post fragment carries
pub const POST_FRAGMENT_ATTR: &str = "data-postid";

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Dom("no document".to_string()))
}

pub fn by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::missing(format!("#{id}")))
}

pub fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement> {
    by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Dom(format!("#{id} is not an HTML element")))
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Trimmed text of the element with `id`, if it exists
pub fn text_of(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
}

/// Post id for a control: its own attribute first, then the enclosing post fragment
pub fn post_id_for(control: &Element) -> Result<PostId> {
    let own = control.get_attribute(POST_ID_ATTR);
    let raw = match own {
        Some(raw) => raw,
        None => control
            .closest(&format!("[{POST_FRAGMENT_ATTR}]"))?
            .and_then(|fragment| fragment.get_attribute(POST_FRAGMENT_ATTR))
            .ok_or_else(|| Error::missing(format!("[{POST_FRAGMENT_ATTR}]")))?,
    };
    PostId::parse(&raw).ok_or_else(|| Error::missing(format!("[{POST_FRAGMENT_ATTR}] value")))
}

pub fn set_display(element: &HtmlElement, value: &str) -> Result<()> {
    element.style().set_property("display", value)?;
    Ok(())
}

/// Create an element and cast it to its concrete type
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| Error::Dom(format!("<{tag}> has an unexpected type")))
}
