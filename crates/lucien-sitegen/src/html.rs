//! Head rewriting over raw HTML text.
//!
//! [`HtmlDocument`] implements [`HeadSink`] with idempotent search-and-replace
//! over the template string: a tag matched by its identifying attribute is
//! substituted in place, an absent tag is inserted before `</head>`. The same
//! rule set that drives the live head therefore drives the generated pages.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use lucien_seo::{AlternateLink, HeadSink, MetaKind, escape_attr};

static HTML_LANG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<html\s+lang="[^"]*""#).unwrap());

static HTML_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<html\b").unwrap());

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<title>[^<]*</title>").unwrap());

static HEAD_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</head>").unwrap());

static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<link\s+rel="canonical"[^>]*>"#).unwrap());

/// Matches the `og:locale` meta but not `og:locale:alternate` (the closing
/// quote is part of the literal).
static OG_LOCALE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+property="og:locale"[^>]*>"#).unwrap());

/// Leading whitespace is part of the match so removal and re-insertion
/// reproduce the exact same bytes on every pass.
static ALTERNATE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s*<link\s+rel="alternate"[^>]*>"#).unwrap());

static LOCALE_ALTERNATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*<meta\s+property="og:locale:alternate"[^>]*>"#).unwrap()
});

static STRUCTURED_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*\bid="structured-data"[^>]*>.*?</script>"#).unwrap()
});

static FALLBACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?is){}.*?{}",
        regex::escape(crate::fallback::FALLBACK_START),
        regex::escape(crate::fallback::FALLBACK_END)
    ))
    .unwrap()
});

/// One HTML page under rewrite.
///
/// Holds the template text and mutates it through the [`HeadSink`] methods.
/// Rewrites are keyed on tag identity, so applying the same rule set twice
/// yields byte-identical output.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            html: template.into(),
        }
    }

    /// Whether the document can accept inserted head tags.
    #[must_use]
    pub fn has_head(&self) -> bool {
        HEAD_CLOSE_RE.is_match(&self.html)
    }

    /// Whether the document carries both fallback sentinels.
    #[must_use]
    pub fn has_fallback_block(&self) -> bool {
        FALLBACK_RE.is_match(&self.html)
    }

    /// Replace the delimited fallback block, sentinels included.
    pub fn replace_fallback(&mut self, block: &str) {
        self.html = FALLBACK_RE
            .replace(&self.html, |_: &Captures| block.to_owned())
            .into_owned();
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    #[must_use]
    pub fn as_html(&self) -> &str {
        &self.html
    }

    /// Substitute the first match of `regex`, or insert the tag before
    /// `</head>` when nothing matches.
    fn upsert(&mut self, regex: &Regex, replacement: &str) {
        if regex.is_match(&self.html) {
            self.html = regex
                .replace(&self.html, |_: &Captures| replacement.to_owned())
                .into_owned();
        } else {
            self.insert_before_head_close(replacement);
        }
    }

    fn insert_before_head_close(&mut self, tag: &str) {
        self.html = HEAD_CLOSE_RE
            .replace(&self.html, |_: &Captures| format!("{tag}\n</head>"))
            .into_owned();
    }

    /// Insert `tags` on the line after the first match of `anchor`.
    fn insert_after(&mut self, anchor: &Regex, tags: &str) {
        self.html = anchor
            .replace(&self.html, |caps: &Captures| {
                format!("{}\n    {}", &caps[0], tags)
            })
            .into_owned();
    }
}

impl HeadSink for HtmlDocument {
    fn set_title(&mut self, title: &str) {
        let replacement = format!("<title>{}</title>", escape_attr(title));
        self.upsert(&TITLE_RE, &replacement);
    }

    fn set_language(&mut self, tag: &str) {
        let replacement = format!(r#"<html lang="{}""#, escape_attr(tag));
        if HTML_LANG_RE.is_match(&self.html) {
            self.html = HTML_LANG_RE
                .replace(&self.html, |_: &Captures| replacement.clone())
                .into_owned();
        } else {
            // Root element without a lang attribute: add one.
            self.html = HTML_OPEN_RE
                .replace(&self.html, |_: &Captures| replacement.clone())
                .into_owned();
        }
    }

    fn set_meta(&mut self, kind: MetaKind, key: &str, value: &str) {
        let attr = kind.attr();
        let pattern = format!(
            r#"(?i)<meta\s+{attr}="{}"\s+content="[^"]*"\s*/?>"#,
            regex::escape(key)
        );
        let regex = Regex::new(&pattern).unwrap();
        let replacement = format!(r#"<meta {attr}="{key}" content="{}">"#, escape_attr(value));
        self.upsert(&regex, &replacement);
    }

    fn set_canonical(&mut self, href: &str) {
        let replacement = format!(r#"<link rel="canonical" href="{}">"#, escape_attr(href));
        self.upsert(&CANONICAL_RE, &replacement);
    }

    fn replace_alternates(&mut self, alternates: &[AlternateLink]) {
        self.html = ALTERNATE_LINK_RE.replace_all(&self.html, "").into_owned();
        let tags = alternates
            .iter()
            .map(|alternate| {
                format!(
                    r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                    alternate.hreflang,
                    escape_attr(&alternate.href)
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ");
        self.insert_after(&CANONICAL_RE, &tags);
    }

    fn replace_locale_alternates(&mut self, locales: &[&str]) {
        self.html = LOCALE_ALTERNATE_RE.replace_all(&self.html, "").into_owned();
        let tags = locales
            .iter()
            .map(|locale| {
                format!(
                    r#"<meta property="og:locale:alternate" content="{}">"#,
                    escape_attr(locale)
                )
            })
            .collect::<Vec<_>>()
            .join("\n    ");
        self.insert_after(&OG_LOCALE_RE, &tags);
    }

    fn set_structured_data(&mut self, json: &str) {
        let replacement =
            format!(r#"<script type="application/ld+json" id="structured-data">{json}</script>"#);
        self.upsert(&STRUCTURED_DATA_RE, &replacement);
    }
}
