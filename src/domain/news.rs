//! News articles and the relevance rule applied to them.

/// A headline and its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
}

impl Article {
    #[must_use]
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
}

/// Decides which articles are worth texting about.
///
/// A title qualifies when it contains at least one keyword and does not
/// contain the marker the news provider uses for redacted entries. Matching
/// is case-sensitive.
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    keywords: Vec<String>,
    excluded_marker: String,
}

impl RelevanceFilter {
    #[must_use]
    pub fn new<I, S>(keywords: I, excluded_marker: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            excluded_marker: excluded_marker.into(),
        }
    }

    #[must_use]
    pub fn is_relevant(&self, title: &str) -> bool {
        !title.contains(&self.excluded_marker)
            && self.keywords.iter().any(|kw| title.contains(kw.as_str()))
    }

    /// Keep the relevant articles, preserving order.
    #[must_use]
    pub fn retain(&self, articles: Vec<Article>) -> Vec<Article> {
        articles
            .into_iter()
            .filter(|a| self.is_relevant(&a.title))
            .collect()
    }
}
