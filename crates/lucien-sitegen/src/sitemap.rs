//! Sitemap and robots.txt emission.
//!
//! Both outputs walk the same closed route enumeration as the page
//! generator, so the sitemap cannot drift from the set of files actually
//! written.

use std::fmt::Write;

use lucien_routes::Route;
use lucien_seo::{SiteContext, alternates_for, escape_attr};

/// Render the sitemap: one `<url>` per canonical route, each annotated
/// with `xhtml:link` alternates for both languages plus `x-default`.
#[must_use]
pub fn sitemap_xml(context: &SiteContext) -> String {
    let mut xml = String::with_capacity(8192);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for route in Route::all() {
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_attr(&context.url_for(route)));
        for alternate in alternates_for(route.section, context) {
            let _ = writeln!(
                xml,
                r#"    <xhtml:link rel="alternate" hreflang="{}" href="{}"/>"#,
                alternate.hreflang,
                escape_attr(&alternate.href)
            );
        }
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render robots.txt: allow everything and point at the sitemap by its
/// absolute URL.
#[must_use]
pub fn robots_txt(context: &SiteContext) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        context.origin()
    )
}

#[cfg(test)]
mod tests {
    use lucien_routes::Route;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sitemap_lists_every_route_once() {
        let xml = sitemap_xml(&SiteContext::default());
        assert_eq!(xml.matches("<url>").count(), Route::all().count());
        assert_eq!(xml.matches("<loc>").count(), 14);
    }

    #[test]
    fn test_every_url_carries_three_alternates() {
        let xml = sitemap_xml(&SiteContext::default());
        for block in xml.split("<url>").skip(1) {
            let entry = block.split("</url>").next().unwrap();
            assert_eq!(entry.matches("<xhtml:link").count(), 3);
            assert_eq!(entry.matches(r#"hreflang="x-default""#).count(), 1);
        }
    }

    #[test]
    fn test_alternates_include_self_and_other_language() {
        let context = SiteContext::default();
        let xml = sitemap_xml(&context);
        for route in Route::all() {
            let own = context.url_for(route);
            let other = context.url_for(Route::new(route.section, route.language.other()));
            let entry = xml
                .split("<url>")
                .find(|block| block.contains(&format!("<loc>{own}</loc>")))
                .unwrap();
            let entry = entry.split("</url>").next().unwrap();
            assert!(entry.contains(&format!(r#"href="{own}""#)));
            assert!(entry.contains(&format!(r#"href="{other}""#)));
        }
    }

    #[test]
    fn test_robots_points_at_the_sitemap() {
        let robots = robots_txt(&SiteContext::default());
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Sitemap: https://adamkarl.lucien.technology/sitemap.xml"));
    }
}
