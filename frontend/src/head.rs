use log::warn;
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlHeadElement};
use yew::prelude::*;

use crate::config::{COMPANY_NAME, SITE_URL};

const JSON_LD_ID: &str = "organization-json-ld";

/// Served by Trunk from `frontend/assets/`.
pub const LOGO_PATH: &str = "/assets/logo.svg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub url: String,
}

/// Everything a page sets in `<head>`. `None` removes a tag left behind by the
/// previous page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub canonical: Option<String>,
    pub robots: Option<&'static str>,
    pub og: Option<OpenGraph>,
}

fn site_url(path: &str) -> String {
    format!("{}{}", SITE_URL, path)
}

impl PageMeta {
    pub fn home() -> Self {
        Self {
            title: "AI & Software Development | DataForge IT Solutions",
            description: Some(
                "End-to-end AI, DevOps automation, and data-engineering services that turn innovation into bottom-line impact.",
            ),
            canonical: Some(SITE_URL.to_string()),
            robots: None,
            og: Some(OpenGraph {
                title: "DataForge IT Solutions",
                description: "Strategic advisory and full-stack delivery of AI, cloud, and automation solutions.",
                url: SITE_URL.to_string(),
            }),
        }
    }

    pub fn services() -> Self {
        Self {
            title: "Services | DataForge IT Solutions",
            description: Some(
                "Explore our full-stack services: AI strategy, ML development, DevOps automation, cloud architecture, and more.",
            ),
            canonical: Some(site_url("/services")),
            robots: None,
            og: None,
        }
    }

    pub fn contact() -> Self {
        Self {
            title: "Contact | DataForge IT Solutions",
            description: Some(
                "Reach out to discuss AI integration, automation, or any data challenge. We'd love to help.",
            ),
            canonical: Some(site_url("/contact")),
            robots: None,
            og: None,
        }
    }

    /// Thank-you state of the contact page; kept out of search indexes.
    pub fn sent() -> Self {
        Self {
            title: "Message Sent | DataForge IT Solutions",
            description: None,
            canonical: None,
            robots: Some("noindex"),
            og: None,
        }
    }
}

/// schema.org Organization markup injected once by the layout.
pub fn organization_json_ld() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": COMPANY_NAME,
        "url": SITE_URL,
        "logo": format!("{}{}", SITE_URL, LOGO_PATH),
    })
}

fn document_head() -> Result<(Document, HtmlHeadElement), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    Ok((document, head))
}

/// Finds the element matching `selector` or creates it with `attrs` set.
fn upsert(
    document: &Document,
    head: &HtmlHeadElement,
    tag: &str,
    selector: &str,
    attrs: &[(&str, &str)],
) -> Result<Element, JsValue> {
    if let Some(existing) = document.query_selector(selector)? {
        return Ok(existing);
    }
    let element = document.create_element(tag)?;
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    head.append_child(&element)?;
    Ok(element)
}

fn set_meta(
    document: &Document,
    head: &HtmlHeadElement,
    key: &str,
    name: &str,
    content: Option<&str>,
) -> Result<(), JsValue> {
    let selector = format!(r#"meta[{}="{}"]"#, key, name);
    match content {
        Some(content) => {
            let meta = upsert(document, head, "meta", &selector, &[(key, name)])?;
            meta.set_attribute("content", content)
        }
        None => {
            if let Some(stale) = document.query_selector(&selector)? {
                stale.remove();
            }
            Ok(())
        }
    }
}

pub fn apply(meta: &PageMeta) -> Result<(), JsValue> {
    let (document, head) = document_head()?;
    document.set_title(meta.title);

    set_meta(&document, &head, "name", "description", meta.description)?;
    set_meta(&document, &head, "name", "robots", meta.robots)?;

    let og = meta.og.as_ref();
    set_meta(&document, &head, "property", "og:type", og.map(|_| "website"))?;
    set_meta(&document, &head, "property", "og:url", og.map(|o| o.url.as_str()))?;
    set_meta(&document, &head, "property", "og:title", og.map(|o| o.title))?;
    set_meta(&document, &head, "property", "og:description", og.map(|o| o.description))?;

    let canonical_selector = r#"link[rel="canonical"]"#;
    match &meta.canonical {
        Some(href) => {
            let link = upsert(&document, &head, "link", canonical_selector, &[("rel", "canonical")])?;
            link.set_attribute("href", href)?;
        }
        None => {
            if let Some(stale) = document.query_selector(canonical_selector)? {
                stale.remove();
            }
        }
    }
    Ok(())
}

pub fn inject_json_ld(value: &Value) -> Result<(), JsValue> {
    let (document, head) = document_head()?;
    let script = upsert(
        &document,
        &head,
        "script",
        &format!("script#{}", JSON_LD_ID),
        &[("id", JSON_LD_ID), ("type", "application/ld+json")],
    )?;
    script.set_text_content(Some(value.to_string().as_str()));
    Ok(())
}

#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        |meta| {
            if let Err(e) = apply(meta) {
                warn!("Failed to apply page metadata for {}: {:?}", meta.title, e);
            }
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_urls_follow_routes() {
        assert_eq!(PageMeta::home().canonical.as_deref(), Some(SITE_URL));
        assert_eq!(
            PageMeta::services().canonical.as_deref(),
            Some("https://dataforgeitsolutions.com/services")
        );
        assert_eq!(
            PageMeta::contact().canonical.as_deref(),
            Some("https://dataforgeitsolutions.com/contact")
        );
    }

    #[test]
    fn sent_page_is_not_indexed() {
        let meta = PageMeta::sent();
        assert_eq!(meta.robots, Some("noindex"));
        assert!(meta.canonical.is_none());
        assert!(meta.description.is_none());
    }

    #[test]
    fn only_home_carries_open_graph() {
        assert!(PageMeta::home().og.is_some());
        assert!(PageMeta::services().og.is_none());
        assert!(PageMeta::contact().og.is_none());
    }

    #[test]
    fn organization_markup_names_the_company() {
        let ld = organization_json_ld();
        assert_eq!(ld["@type"], "Organization");
        assert_eq!(ld["name"], COMPANY_NAME);
        assert_eq!(ld["logo"], "https://dataforgeitsolutions.com/assets/logo.svg");
    }

    #[test]
    fn logo_is_shipped_with_the_site() {
        let shipped = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(LOGO_PATH.trim_start_matches('/'));
        assert!(shipped.is_file(), "missing {}", shipped.display());
    }
}
