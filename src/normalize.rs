use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Legal suffixes that don't help telling two companies apart.
    static ref suffix_regex: Regex =
        Regex::new(r"(?i)[,.]?\s+(inc|llc|ltd|gmbh|ag|bv|sarl|corp(oration)?|co|foundation|project)\.?$")
            .unwrap();
    /// Anything that isn't a letter or a digit.
    static ref non_alnum_regex: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Reduce a company name to a comparison key: case, punctuation and legal
/// suffixes don't count.
pub fn normalize_company(org: &str) -> String {
    let lowered = org.trim().to_lowercase();
    let stripped = suffix_regex.replace(&lowered, "");
    non_alnum_regex.replace_all(&stripped, "").to_string()
}

/// Reduce a URL to a comparison key: scheme, host casing and trailing
/// slashes don't count. Empty input gives an empty key, which never matches.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
        .trim_end_matches('/');
    match stripped.split_once('/') {
        Some((host, path)) => format!("{}/{}", host.to_lowercase(), path),
        None => stripped.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_key_ignores_case_and_punctuation() {
        assert_eq!(normalize_company("Yoyodyne, Inc."), "yoyodyne");
        assert_eq!(normalize_company("YOYODYNE"), "yoyodyne");
        assert_eq!(normalize_company("Yo-Yo Dyne"), "yoyodyne");
    }

    #[test]
    fn company_key_ignores_legal_suffixes() {
        assert_eq!(normalize_company("Graph Tools Ltd"), "graphtools");
        assert_eq!(normalize_company("Graph Tools GmbH"), "graphtools");
        assert_eq!(normalize_company("Graph Tools Foundation"), "graphtools");
        assert_eq!(normalize_company("Graph Tools"), "graphtools");
    }

    #[test]
    fn company_key_keeps_distinct_names_distinct() {
        assert_ne!(normalize_company("Graph Tools"), normalize_company("Graph Tools East"));
    }

    #[test]
    fn url_key_ignores_scheme_and_trailing_slash() {
        assert_eq!(normalize_url("https://example.org/"), "example.org");
        assert_eq!(normalize_url("http://example.org"), "example.org");
        assert_eq!(normalize_url("example.org"), "example.org");
    }

    #[test]
    fn url_key_lowercases_the_host_but_not_the_path() {
        assert_eq!(
            normalize_url("https://Example.ORG/Some/Path"),
            "example.org/Some/Path"
        );
    }

    #[test]
    fn empty_url_gives_an_empty_key() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }
}
