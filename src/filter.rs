/// Search text plus compliance filter, both matched case-insensitively as
/// substrings. An empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    search: String,
    compliance: String,
}

impl CaseFilter {
    pub fn new(search: &str, compliance: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            compliance: compliance.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.compliance.is_empty()
    }

    /// `text` is the card's full rendered text, `compliance` its tag attribute.
    pub fn matches(&self, text: &str, compliance: &str) -> bool {
        let matches_search = self.search.is_empty() || text.to_lowercase().contains(&self.search);
        let matches_compliance =
            self.compliance.is_empty() || compliance.to_lowercase().contains(&self.compliance);
        matches_search && matches_compliance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [(&str, &str); 2] = [("Login flow", "GDPR"), ("Payment retry", "PCI")];

    fn visible(filter: &CaseFilter) -> Vec<&'static str> {
        CARDS
            .iter()
            .filter(|(text, tags)| filter.matches(text, tags))
            .map(|(text, _)| *text)
            .collect()
    }

    #[test]
    fn search_only() {
        assert_eq!(visible(&CaseFilter::new("login", "")), vec!["Login flow"]);
    }

    #[test]
    fn compliance_only() {
        assert_eq!(visible(&CaseFilter::new("", "pci")), vec!["Payment retry"]);
    }

    #[test]
    fn both_conditions_must_hold() {
        assert!(visible(&CaseFilter::new("login", "pci")).is_empty());
        assert_eq!(visible(&CaseFilter::new("RETRY", "Pc")), vec!["Payment retry"]);
    }

    #[test]
    fn empty_filter_shows_everything() {
        let filter = CaseFilter::default();
        assert!(filter.is_empty());
        assert_eq!(visible(&filter).len(), 2);
    }
}
