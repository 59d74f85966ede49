//! Usage suggestions for keywords missing from a CV

use crate::analysis::matcher::mentions_as_substring;

/// Build one suggestion sentence per missing keyword.
///
/// A keyword already present as a case-insensitive substring anywhere in the
/// raw CV text is skipped. This is a weaker check than the analyzer's
/// whole-token match, so a keyword reported missing by the analyzer can
/// still be filtered out here; see `analysis::matcher` for why the two
/// checks stay separate.
pub fn suggest_keyword_usage(missing_keywords: &[String], cv_text: &str) -> Vec<String> {
    missing_keywords
        .iter()
        .filter(|kw| !mentions_as_substring(cv_text, kw))
        .map(|kw| {
            format!(
                "Consider including '{kw}' in your Skills or Experience section, \
                 e.g., 'Proficient in {kw}' or 'Worked on projects involving {kw}'."
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suggestion_per_absent_keyword() {
        let missing = owned(&["Docker", "Kubernetes"]);
        let suggestions = suggest_keyword_usage(&missing, "Skills: Python");

        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("'Docker'"));
        assert!(suggestions[0].contains("Proficient in Docker"));
        assert!(suggestions[1].contains("'Kubernetes'"));
    }

    #[test]
    fn test_substring_presence_filters_suggestion() {
        // "services" is missing as a token but present as a substring, so
        // the suggestion engine stays quiet about it.
        let missing = owned(&["services", "Docker"]);
        let suggestions = suggest_keyword_usage(&missing, "built microservices at scale");

        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("'Docker'"));
    }

    #[test]
    fn test_input_order_preserved() {
        let missing = owned(&["Terraform", "Ansible", "Grafana"]);
        let suggestions = suggest_keyword_usage(&missing, "");

        assert!(suggestions[0].contains("Terraform"));
        assert!(suggestions[1].contains("Ansible"));
        assert!(suggestions[2].contains("Grafana"));
    }

    #[test]
    fn test_empty_missing_list() {
        assert!(suggest_keyword_usage(&[], "any text").is_empty());
    }
}
