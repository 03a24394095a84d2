use lucien_content as content;
use lucien_routes::Route;
use serde_json::{Value, json};

use crate::SiteContext;

/// Build the schema.org graph for one route.
///
/// One `Person`, one `WebSite`, one `WebPage` for the canonical URL and one
/// `Service` per advertised service, cross-linked by `@id` so crawlers see
/// a single connected entity. Serialization of the returned value is
/// deterministic (object keys are ordered), which keeps repeated head
/// rewrites byte-identical.
#[must_use]
pub fn structured_data(route: Route, context: &SiteContext) -> Value {
    let origin = context.origin();
    let person_id = format!("{origin}/#person");
    let website_id = format!("{origin}/#website");
    let url = context.url_for(route);
    let seo = content::entry(route.section, route.language);
    let language_tag = route.language.tag();

    let mut graph = vec![
        json!({
            "@type": "Person",
            "@id": person_id.as_str(),
            "name": context.brand(),
            "jobTitle": content::job_title(route.language),
            "email": format!("mailto:{}", content::EMAIL),
            "telephone": content::TELEPHONE,
            "url": format!("{origin}/"),
        }),
        json!({
            "@type": "WebSite",
            "@id": website_id.as_str(),
            "name": context.brand(),
            "url": format!("{origin}/"),
            "inLanguage": language_tag,
            "publisher": { "@id": person_id.as_str() },
        }),
        json!({
            "@type": "WebPage",
            "@id": url.as_str(),
            "url": url.as_str(),
            "name": seo.title,
            "description": seo.description,
            "inLanguage": language_tag,
            "isPartOf": { "@id": website_id.as_str() },
            "about": { "@id": person_id.as_str() },
        }),
    ];
    for service in content::services(route.language) {
        graph.push(json!({
            "@type": "Service",
            "name": service.name,
            "description": service.description,
            "provider": { "@id": person_id.as_str() },
        }));
    }

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

#[cfg(test)]
mod tests {
    use lucien_routes::{Language, Route, Section};
    use pretty_assertions::assert_eq;

    use super::structured_data;
    use crate::SiteContext;

    fn node_types(value: &serde_json::Value) -> Vec<&str> {
        value["@graph"]
            .as_array()
            .map(|nodes| {
                nodes
                    .iter()
                    .filter_map(|node| node["@type"].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_graph_contains_expected_node_types() {
        let value = structured_data(Route::default(), &SiteContext::default());
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(
            node_types(&value),
            ["Person", "WebSite", "WebPage", "Service", "Service", "Service"]
        );
    }

    #[test]
    fn test_webpage_points_at_canonical_url() {
        let context = SiteContext::default();
        let route = Route::new(Section::Signal, Language::En);
        let value = structured_data(route, &context);
        assert_eq!(value["@graph"][2]["url"], context.url_for(route));
        assert_eq!(value["@graph"][2]["isPartOf"]["@id"], value["@graph"][1]["@id"]);
    }

    #[test]
    fn test_language_flows_into_graph() {
        let cs = structured_data(Route::default(), &SiteContext::default());
        let en = structured_data(
            Route::new(Section::Core, Language::En),
            &SiteContext::default(),
        );
        assert_eq!(cs["@graph"][2]["inLanguage"], "cs");
        assert_eq!(en["@graph"][2]["inLanguage"], "en");
        assert_ne!(cs["@graph"][0]["jobTitle"], en["@graph"][0]["jobTitle"]);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let route = Route::new(Section::Resonance, Language::Cs);
        let context = SiteContext::default();
        assert_eq!(
            structured_data(route, &context).to_string(),
            structured_data(route, &context).to_string(),
        );
    }
}
