//! Aktuelle Seiten-URL mit getrennt ersetzbarem Query und Fragment.

use anyhow::Context;
use url::Url;

/// Seiten-URL des Viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    url: Url,
}

impl PageUrl {
    /// Parst eine absolute URL.
    pub fn parse(href: &str) -> anyhow::Result<Self> {
        let url = Url::parse(href).with_context(|| format!("Ungültige Seiten-URL: {href}"))?;
        Ok(Self { url })
    }

    /// Vollständige URL als Text.
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Query-String ohne `?` (leer, wenn keiner vorhanden).
    pub fn query(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// Fragment ohne `#` (leer, wenn keines vorhanden).
    pub fn fragment(&self) -> &str {
        self.url.fragment().unwrap_or("")
    }

    /// Gleiche URL mit neuem Query; das Fragment bleibt erhalten.
    pub fn with_query(&self, query: &str) -> Self {
        let mut url = self.url.clone();
        url.set_query(Some(query).filter(|q| !q.is_empty()));
        Self { url }
    }

    /// Gleiche URL mit neuem Fragment; `None` entfernt das `#` komplett.
    pub fn with_fragment(&self, fragment: Option<&str>) -> Self {
        let mut url = self.url.clone();
        url.set_fragment(fragment.filter(|f| !f.is_empty()));
        Self { url }
    }
}

impl std::fmt::Display for PageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.href())
    }
}
