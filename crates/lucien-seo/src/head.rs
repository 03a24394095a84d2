//! The settable-head seam and the tag rule set.
//!
//! Everything that knows *which* tags a route needs lives in [`sync_head`];
//! everything that knows *how* to write a tag lives behind [`HeadSink`].
//! Keeping the rule set target-agnostic is what lets the runtime head and
//! the generated static pages share one source of truth.

use lucien_content as content;
use lucien_routes::{Language, Route, Section};

use crate::SiteContext;
use crate::schema;

/// Attribute that identifies a single-valued meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKind {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

impl MetaKind {
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One hreflang alternate entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    /// Language tag or `x-default`.
    pub hreflang: &'static str,
    pub href: String,
}

/// A mutable document head, addressable by stable tag identity.
///
/// Single-valued tags are upserted: overwritten when present, created when
/// absent. The two multi-valued groups (hreflang alternates and
/// `og:locale:alternate`) are always dropped wholesale and re-inserted so
/// stale entries cannot accumulate across updates.
pub trait HeadSink {
    /// Replace the document title.
    fn set_title(&mut self, title: &str);

    /// Set the root element's `lang` attribute.
    fn set_language(&mut self, tag: &str);

    /// Upsert the single-valued meta tag identified by `(kind, key)`.
    fn set_meta(&mut self, kind: MetaKind, key: &str, value: &str);

    /// Upsert the canonical link.
    fn set_canonical(&mut self, href: &str);

    /// Drop every hreflang alternate link, then insert the given set.
    fn replace_alternates(&mut self, alternates: &[AlternateLink]);

    /// Drop every `og:locale:alternate` meta, then insert the given locales.
    fn replace_locale_alternates(&mut self, locales: &[&str]);

    /// Replace the structured-data script body.
    fn set_structured_data(&mut self, json: &str);
}

/// Rewrite a head to describe `route`.
///
/// The one rule set both the runtime synchronizer and the static generator
/// apply. Tags are written in a fixed order, so applying the rules twice
/// for the same route leaves any sink in an identical state.
pub fn sync_head<S: HeadSink>(sink: &mut S, route: Route, context: &SiteContext) {
    let seo = content::entry(route.section, route.language);
    let url = context.url_for(route);
    let image = format!("{}{}", context.origin(), content::OG_IMAGE_PATH);

    sink.set_language(route.language.tag());
    sink.set_title(seo.title);

    sink.set_meta(MetaKind::Name, "description", seo.description);
    sink.set_meta(MetaKind::Name, "robots", content::ROBOTS_DIRECTIVE);
    sink.set_meta(MetaKind::Name, "author", context.brand());
    sink.set_meta(MetaKind::Name, "application-name", content::APPLICATION_NAME);
    sink.set_meta(MetaKind::Name, "theme-color", content::THEME_COLOR);

    sink.set_meta(MetaKind::Property, "og:title", seo.title);
    sink.set_meta(MetaKind::Property, "og:description", seo.description);
    sink.set_meta(MetaKind::Property, "og:type", "website");
    sink.set_meta(MetaKind::Property, "og:url", &url);
    sink.set_meta(MetaKind::Property, "og:site_name", context.brand());
    sink.set_meta(MetaKind::Property, "og:locale", route.language.locale());
    sink.set_meta(MetaKind::Property, "og:image", &image);
    sink.set_meta(MetaKind::Property, "og:image:width", content::OG_IMAGE_WIDTH);
    sink.set_meta(
        MetaKind::Property,
        "og:image:height",
        content::OG_IMAGE_HEIGHT,
    );

    sink.set_meta(MetaKind::Name, "twitter:card", content::TWITTER_CARD);
    sink.set_meta(MetaKind::Name, "twitter:title", seo.title);
    sink.set_meta(MetaKind::Name, "twitter:description", seo.description);
    sink.set_meta(MetaKind::Name, "twitter:image", &image);

    sink.set_canonical(&url);
    sink.replace_locale_alternates(&[route.language.other().locale()]);
    sink.replace_alternates(&alternates_for(route.section, context));
    sink.set_structured_data(&schema::structured_data(route, context).to_string());
}

/// Alternate link set for one section: every language plus an `x-default`
/// pointing at the default language, in stable order.
#[must_use]
pub fn alternates_for(section: Section, context: &SiteContext) -> Vec<AlternateLink> {
    let mut alternates: Vec<AlternateLink> = Language::ALL
        .into_iter()
        .map(|language| AlternateLink {
            hreflang: language.tag(),
            href: context.url_for(Route::new(section, language)),
        })
        .collect();
    alternates.push(AlternateLink {
        hreflang: "x-default",
        href: context.url_for(Route::new(section, Language::DEFAULT)),
    });
    alternates
}

/// Escape a value for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
