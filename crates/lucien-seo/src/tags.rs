use std::collections::BTreeMap;
use std::fmt::Write;

use crate::head::{AlternateLink, HeadSink, MetaKind, escape_attr};

/// In-memory model of the managed document head region.
///
/// This is what the runtime owns instead of poking at a live document:
/// every tag the synchronizer manages, addressed by the same stable
/// identity the DOM would use (attribute pair or element id), and nothing
/// else. The embedding shell flushes it to the real head after each update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTagSet {
    title: String,
    language: String,
    metas: BTreeMap<(MetaKind, String), String>,
    canonical: Option<String>,
    alternates: Vec<AlternateLink>,
    locale_alternates: Vec<String>,
    structured_data: String,
}

impl HeadTagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Root element language tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Value of a managed single-valued meta tag, if set.
    #[must_use]
    pub fn meta(&self, kind: MetaKind, key: &str) -> Option<&str> {
        self.metas
            .get(&(kind, key.to_owned()))
            .map(String::as_str)
    }

    /// Number of managed single-valued meta tags.
    #[must_use]
    pub fn meta_count(&self) -> usize {
        self.metas.len()
    }

    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    #[must_use]
    pub fn alternates(&self) -> &[AlternateLink] {
        &self.alternates
    }

    #[must_use]
    pub fn locale_alternates(&self) -> &[String] {
        &self.locale_alternates
    }

    /// Body of the structured-data script.
    #[must_use]
    pub fn structured_data(&self) -> &str {
        &self.structured_data
    }

    /// Render the managed region as head markup, tags in stable order.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(2048);
        let _ = writeln!(html, "<title>{}</title>", escape_attr(&self.title));
        for ((kind, key), value) in &self.metas {
            let _ = writeln!(
                html,
                "<meta {}=\"{}\" content=\"{}\">",
                kind.attr(),
                escape_attr(key),
                escape_attr(value),
            );
        }
        if let Some(canonical) = &self.canonical {
            let _ = writeln!(
                html,
                "<link rel=\"canonical\" href=\"{}\">",
                escape_attr(canonical)
            );
        }
        for locale in &self.locale_alternates {
            let _ = writeln!(
                html,
                "<meta property=\"og:locale:alternate\" content=\"{}\">",
                escape_attr(locale)
            );
        }
        for alternate in &self.alternates {
            let _ = writeln!(
                html,
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                alternate.hreflang,
                escape_attr(&alternate.href),
            );
        }
        if !self.structured_data.is_empty() {
            let _ = writeln!(
                html,
                "<script id=\"structured-data\" type=\"application/ld+json\">{}</script>",
                self.structured_data,
            );
        }
        html
    }
}

impl HeadSink for HeadTagSet {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_language(&mut self, tag: &str) {
        self.language = tag.to_owned();
    }

    fn set_meta(&mut self, kind: MetaKind, key: &str, value: &str) {
        self.metas.insert((kind, key.to_owned()), value.to_owned());
    }

    fn set_canonical(&mut self, href: &str) {
        self.canonical = Some(href.to_owned());
    }

    fn replace_alternates(&mut self, alternates: &[AlternateLink]) {
        self.alternates = alternates.to_vec();
    }

    fn replace_locale_alternates(&mut self, locales: &[&str]) {
        self.locale_alternates = locales.iter().map(|&l| l.to_owned()).collect();
    }

    fn set_structured_data(&mut self, json: &str) {
        self.structured_data = json.to_owned();
    }
}
