use lucien_routes::Route;

/// Where the site lives and whose name it carries.
///
/// Injected explicitly so the head rules never read ambient host state.
/// Embedders that only know the current hostname derive a context via
/// [`SiteContext::from_host`]; everything downstream is then pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    origin: String,
    brand: String,
}

impl SiteContext {
    /// Build from an explicit origin and brand name.
    ///
    /// Trailing slashes on the origin are dropped so joining it with
    /// canonical paths never doubles a separator.
    #[must_use]
    pub fn new(origin: impl Into<String>, brand: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self {
            origin,
            brand: brand.into(),
        }
    }

    /// Derive a context from a hostname: `https` origin on the bare domain
    /// with any `www.` prefix stripped, hostname standing in for the brand.
    #[must_use]
    pub fn from_host(host: &str) -> Self {
        let bare = host.strip_prefix("www.").unwrap_or(host);
        Self {
            origin: format!("https://{bare}"),
            brand: bare.to_owned(),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Absolute canonical URL for a route.
    #[must_use]
    pub fn url_for(&self, route: Route) -> String {
        format!("{}{}", self.origin, route.path())
    }
}

impl Default for SiteContext {
    /// The production site.
    fn default() -> Self {
        Self::new(lucien_content::DEFAULT_ORIGIN, lucien_content::BRAND)
    }
}
