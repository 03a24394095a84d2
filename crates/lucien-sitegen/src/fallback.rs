//! Static fallback body for clients without script execution.
//!
//! The template carries a delimited placeholder block between two comment
//! sentinels. Generation replaces everything between them (sentinels
//! included) with a freshly built block, so repeated builds can never
//! accumulate stale markup.

use std::fmt::Write;

use lucien_content as content;
use lucien_routes::{Language, Route, Section};
use lucien_seo::{SiteContext, escape_attr};

/// Start sentinel delimiting the replaceable fallback block.
pub const FALLBACK_START: &str = "<!-- SEO_FALLBACK_START -->";
/// End sentinel delimiting the replaceable fallback block.
pub const FALLBACK_END: &str = "<!-- SEO_FALLBACK_END -->";

/// Link color matching the client bundle's accent.
const ACCENT_COLOR: &str = "#6366f1";

/// Render the fallback block for one language.
///
/// Brand heading, summary paragraph, and a nav over every section in the
/// page's language, followed by a link row for the other language so
/// crawlers can reach both variants from any page.
#[must_use]
pub fn fallback_block(language: Language, context: &SiteContext) -> String {
    let other = language.other();
    let mut html = String::with_capacity(2048);

    let _ = writeln!(html, "{FALLBACK_START}");
    let _ = writeln!(
        html,
        r#"      <div class="seo-fallback" style="padding: 48px; max-width: 960px; margin: 0 auto; color: #ececec; font-family: 'Fira Code', monospace;">"#
    );
    let _ = writeln!(
        html,
        r#"        <h1 style="font-size: 28px; letter-spacing: 0.08em; text-transform: uppercase;">{}</h1>"#,
        escape_attr(context.brand())
    );
    let _ = writeln!(html, r#"        <p style="opacity: 0.75; margin-top: 12px;">"#);
    let _ = writeln!(html, "          {}", content::summary(language));
    let _ = writeln!(html, "        </p>");
    let _ = writeln!(
        html,
        r#"        <nav style="margin-top: 20px; display: flex; flex-wrap: wrap; gap: 12px;">"#
    );
    for section in Section::ALL {
        let _ = writeln!(
            html,
            r#"          <a href="{}" style="color: {ACCENT_COLOR}; text-decoration: none;">{}</a>"#,
            Route::new(section, language).path(),
            content::nav_label(section, language)
        );
    }
    let _ = writeln!(html, "        </nav>");
    let _ = writeln!(
        html,
        r#"        <div style="margin-top: 20px; font-size: 12px; opacity: 0.6;">"#
    );
    let links: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| {
            format!(
                r#"<a href="{}" style="color: {ACCENT_COLOR}; text-decoration: none;">{}</a>"#,
                Route::new(section, other).path(),
                content::nav_label(section, other)
            )
        })
        .collect();
    let _ = writeln!(
        html,
        "          {}: {}",
        content::language_name(other),
        links.join(",\n          ")
    );
    let _ = writeln!(html, "        </div>");
    let _ = writeln!(html, "      </div>");
    let _ = write!(html, "      {FALLBACK_END}");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_delimited_by_sentinels() {
        let block = fallback_block(Language::Cs, &SiteContext::default());
        assert!(block.starts_with(FALLBACK_START));
        assert!(block.ends_with(FALLBACK_END));
    }

    #[test]
    fn test_block_carries_brand_and_summary() {
        let context = SiteContext::default();
        let block = fallback_block(Language::En, &context);
        assert!(block.contains(">Adam Karl Lucien</h1>"));
        assert!(block.contains("System Architect, AI Engineer"));
    }

    #[test]
    fn test_nav_links_use_the_page_language() {
        let block = fallback_block(Language::En, &SiteContext::default());
        assert!(block.contains(r#"<a href="/en/modules/" style="color: #6366f1; text-decoration: none;">Modules</a>"#));
        assert!(block.contains(r#"<a href="/en/" style="color: #6366f1; text-decoration: none;">Core</a>"#));
    }

    #[test]
    fn test_second_row_links_the_other_language() {
        let en_block = fallback_block(Language::En, &SiteContext::default());
        assert!(en_block.contains("Česky:"));
        assert!(en_block.contains(r#"<a href="/signal/" style="color: #6366f1; text-decoration: none;">Signál</a>"#));

        let cs_block = fallback_block(Language::Cs, &SiteContext::default());
        assert!(cs_block.contains("English:"));
        assert!(cs_block.contains(r#"href="/en/signal/""#));
    }

    #[test]
    fn test_every_section_is_linked_in_both_rows() {
        let block = fallback_block(Language::Cs, &SiteContext::default());
        for section in Section::ALL {
            assert!(block.contains(&format!(r#"href="{}""#, Route::new(section, Language::Cs).path())));
            assert!(block.contains(&format!(r#"href="{}""#, Route::new(section, Language::En).path())));
        }
    }
}
