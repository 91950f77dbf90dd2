//! Element resolution against the page markup.
//!
//! Required elements fail the mount with [`Error::MissingElement`]; optional
//! ones resolve to `None` or an empty list and their effects become no-ops.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::effect::Target;
use crate::error::Error;
use crate::state::menu::LABEL_TOGGLE_MENU;
use crate::state::sections::SectionGeometry;
use crate::util::styles::{DYNAMIC_STYLES, STYLE_ELEMENT_ID};

/// Id given to the injected menu toggle so a second mount reuses it.
pub const MENU_TOGGLE_ID: &str = "portfolioMenuToggle";

const MENU_TOGGLE_ICONS: &str = r#"<i class="fas fa-chevron-right"></i><i class="fas fa-chevron-left"></i>"#;

/// Handles to every element the page behaviors touch.
pub struct Elements {
    pub root: HtmlElement,
    pub body: HtmlElement,
    /// Content sections in document order, keyed by id.
    pub sections: Vec<(String, HtmlElement)>,
    /// Nav links keyed by their `data-section` target.
    pub nav_links: Vec<(String, HtmlElement)>,
    pub sidebar: HtmlElement,
    pub overlay: HtmlElement,
    pub menu_toggle: HtmlElement,
    pub theme_toggle: HtmlElement,
    pub theme_icon: HtmlElement,
    pub mobile_theme_toggle: Option<HtmlElement>,
    pub mobile_theme_icon: Option<HtmlElement>,
    pub profile_image: Option<HtmlElement>,
    pub profile_placeholder: Option<HtmlElement>,
    pub hero_content: Vec<HtmlElement>,
    pub social_links: Vec<HtmlElement>,
    pub main_title: Option<HtmlElement>,
}

impl Elements {
    /// Resolve the document contract, injecting the menu toggle if absent.
    pub fn resolve(document: &Document) -> Result<Self, Error> {
        let root = document
            .document_element()
            .and_then(as_html)
            .ok_or(Error::MissingElement("html"))?;
        let body = document.body().ok_or(Error::MissingElement("body"))?;

        let sections = query_all(document, ".content-section")?
            .into_iter()
            .map(|el| (el.id(), el))
            .filter(|(id, _)| !id.is_empty())
            .collect();
        let nav_links = query_all(document, ".nav-link")?
            .into_iter()
            .filter_map(|el| el.get_attribute("data-section").map(|target| (target, el)))
            .collect();

        let sidebar = required(query_one(document, ".sidebar")?, "sidebar")?;
        let overlay = required(by_id(document, "sidebarOverlay"), "sidebarOverlay")?;
        let theme_toggle = required(by_id(document, "themeToggle"), "themeToggle")?;
        let theme_icon = required(by_id(document, "themeIcon"), "themeIcon")?;
        let menu_toggle = ensure_menu_toggle(document, &body)?;

        Ok(Self {
            root,
            body,
            sections,
            nav_links,
            sidebar,
            overlay,
            menu_toggle,
            theme_toggle,
            theme_icon,
            mobile_theme_toggle: by_id(document, "mobileThemeToggle"),
            mobile_theme_icon: by_id(document, "mobileThemeIcon"),
            profile_image: by_id(document, "profileImage"),
            profile_placeholder: by_id(document, "profilePlaceholder"),
            hero_content: query_all(document, ".hero-content")?,
            social_links: query_all(document, ".social-link")?,
            main_title: query_one(document, ".main-title")?,
        })
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn nav_targets(&self) -> Vec<String> {
        self.nav_links.iter().map(|(target, _)| target.clone()).collect()
    }

    /// Current top offset of every section relative to the viewport.
    pub fn measure_sections(&self) -> Vec<SectionGeometry> {
        self.sections
            .iter()
            .map(|(id, el)| SectionGeometry::new(id.clone(), el.get_bounding_client_rect().top()))
            .collect()
    }

    /// Elements addressed by `target`; empty when an optional element is absent.
    pub fn resolve_target(&self, target: &Target) -> Vec<&HtmlElement> {
        match target {
            Target::Root => vec![&self.root],
            Target::Body => vec![&self.body],
            Target::Section(id) => keyed(&self.sections, id),
            Target::NavLink(id) => keyed(&self.nav_links, id),
            Target::Sidebar => vec![&self.sidebar],
            Target::Overlay => vec![&self.overlay],
            Target::MenuToggle => vec![&self.menu_toggle],
            Target::ThemeToggle => vec![&self.theme_toggle],
            Target::ThemeIcon => vec![&self.theme_icon],
            Target::MobileThemeIcon => self.mobile_theme_icon.iter().collect(),
            Target::ProfileImage => self.profile_image.iter().collect(),
            Target::ProfilePlaceholder => self.profile_placeholder.iter().collect(),
            Target::HeroContent => self.hero_content.iter().collect(),
            Target::SocialLink(index) => self.social_links.get(*index).into_iter().collect(),
            Target::MainTitle => self.main_title.iter().collect(),
        }
    }
}

/// Append the keyframe stylesheet to `<head>` unless a previous mount did.
pub fn ensure_styles(document: &Document) -> Result<(), Error> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(DYNAMIC_STYLES));
    let head = document.head().ok_or(Error::MissingElement("head"))?;
    head.append_child(&style)?;
    Ok(())
}

fn ensure_menu_toggle(document: &Document, body: &HtmlElement) -> Result<HtmlElement, Error> {
    if let Some(existing) = by_id(document, MENU_TOGGLE_ID) {
        return Ok(existing);
    }
    let button = document.create_element("button")?.unchecked_into::<HtmlElement>();
    button.set_id(MENU_TOGGLE_ID);
    button.set_class_name("mobile-menu-toggle");
    button.set_inner_html(MENU_TOGGLE_ICONS);
    button.set_attribute("aria-label", LABEL_TOGGLE_MENU)?;
    body.append_child(&button)?;
    Ok(button)
}

fn keyed<'a>(entries: &'a [(String, HtmlElement)], id: &str) -> Vec<&'a HtmlElement> {
    entries.iter().filter(|(key, _)| key == id).map(|(_, el)| el).collect()
}

fn required(element: Option<HtmlElement>, name: &'static str) -> Result<HtmlElement, Error> {
    element.ok_or(Error::MissingElement(name))
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(as_html)
}

fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, Error> {
    Ok(document.query_selector(selector)?.and_then(as_html))
}

/// Narrow to `HtmlElement`; SVG and other foreign elements are skipped with a warning.
fn as_html(element: Element) -> Option<HtmlElement> {
    match element.dyn_into::<HtmlElement>() {
        Ok(element) => Some(element),
        Err(element) => {
            log::warn!("skipping <{}>: not an HTML element", element.tag_name());
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, Error> {
    let list = document.query_selector_all(selector)?;
    let mut elements = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.get(i) else {
            continue;
        };
        match node.dyn_into::<HtmlElement>() {
            Ok(element) => elements.push(element),
            Err(node) => log::warn!("skipping {selector} match <{}>: not an HTML element", node.node_name()),
        }
    }
    Ok(elements)
}
