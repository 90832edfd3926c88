use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Absolute http(s) URL with a dotted host.
    static ref website_regex: Regex = Regex::new(r"^https?://[^\s/]+\.[^\s/]+").unwrap();
    /// Hosted SVG image reference.
    static ref svg_url_regex: Regex = Regex::new(r"(?i)^https?://\S+\.svg$").unwrap();
    /// A bare twitter handle, with or without the leading @.
    static ref twitter_handle_regex: Regex = Regex::new(r"^@?([A-Za-z0-9_]{1,15})$").unwrap();
}

/// A field value the member record refuses to carry.
#[derive(Debug, PartialEq, Eq)]
pub enum MemberError {
    InvalidWebsite(String),
    InvalidLogo(String),
    InvalidTwitter(String),
}

impl Display for MemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberError::InvalidWebsite(value) => {
                write!(f, "'{}' isn't a valid website", value)
            }
            MemberError::InvalidLogo(value) => {
                write!(f, "'{}' isn't a valid logo; must be a hosted SVG", value)
            }
            MemberError::InvalidTwitter(value) => {
                write!(f, "'{}' isn't a valid twitter handle or profile", value)
            }
        }
    }
}

/// Extra member attributes carried alongside the landscape entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MemberExtra {
    pub slug: Option<String>,
    pub accepted: Option<String>,
    pub dev_stats_url: Option<String>,
    pub calendar_url: Option<String>,
    pub ical_url: Option<String>,
    pub artwork_url: Option<String>,
}

/// A normalized landscape member entry. Built once per qualifying project
/// record and never touched again after it lands in the collection.
#[derive(Debug, Clone, Default)]
pub struct Member {
    pub orgname: String,
    pub membership: String,
    pub website: Option<String>,
    pub repo_url: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub crunchbase: Option<String>,
    pub twitter: Option<String>,
    pub second_path: Vec<String>,
    pub extra: MemberExtra,
}

impl Member {
    /// Accept an absolute http(s) URL; anything else leaves the field alone.
    pub fn set_website(&mut self, website: &str) -> Result<(), MemberError> {
        let website = website.trim();
        if !website_regex.is_match(website) {
            return Err(MemberError::InvalidWebsite(website.to_string()));
        }
        self.website = Some(website.trim_end_matches('/').to_string());
        Ok(())
    }

    /// Accept a hosted SVG reference; anything else leaves the field alone.
    pub fn set_logo(&mut self, logo: &str) -> Result<(), MemberError> {
        let logo = logo.trim();
        if !svg_url_regex.is_match(logo) {
            return Err(MemberError::InvalidLogo(logo.to_string()));
        }
        self.logo = Some(logo.to_string());
        Ok(())
    }

    /// Accept a handle, an @handle, or a twitter.com / x.com profile URL,
    /// and store the canonical profile URL.
    pub fn set_twitter(&mut self, twitter: &str) -> Result<(), MemberError> {
        let trimmed = twitter.trim().trim_end_matches('/');
        let candidate = ["https://", "http://"]
            .into_iter()
            .find_map(|scheme| trimmed.strip_prefix(scheme))
            .unwrap_or(trimmed);
        let candidate = ["twitter.com/", "www.twitter.com/", "x.com/", "www.x.com/"]
            .into_iter()
            .find_map(|host| candidate.strip_prefix(host))
            .unwrap_or(candidate);

        match twitter_handle_regex.captures(candidate) {
            Some(captures) => {
                self.twitter = Some(format!("https://twitter.com/{}", &captures[1]));
                Ok(())
            }
            None => Err(MemberError::InvalidTwitter(twitter.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_must_be_an_absolute_http_url() {
        let mut member = Member::default();

        assert!(member.set_website("https://example.org/").is_ok());
        assert_eq!(member.website.as_deref(), Some("https://example.org"));

        assert_eq!(
            member.set_website("example.org"),
            Err(MemberError::InvalidWebsite("example.org".to_string()))
        );
        assert_eq!(
            member.set_website("ftp://example.org"),
            Err(MemberError::InvalidWebsite("ftp://example.org".to_string()))
        );
        // The rejected values didn't clobber the good one
        assert_eq!(member.website.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn logo_must_be_a_hosted_svg() {
        let mut member = Member::default();

        assert!(member
            .set_logo("https://artwork.example.org/proj/icon/color/proj-icon-color.svg")
            .is_ok());

        assert!(member.set_logo("https://example.org/logo.png").is_err());
        assert!(member.set_logo("logo.svg").is_err());
    }

    #[test]
    fn twitter_accepts_handles_and_profile_urls() {
        let mut member = Member::default();

        member.set_twitter("yoyodyne").unwrap();
        assert_eq!(member.twitter.as_deref(), Some("https://twitter.com/yoyodyne"));

        member.set_twitter("@yoyodyne").unwrap();
        assert_eq!(member.twitter.as_deref(), Some("https://twitter.com/yoyodyne"));

        member.set_twitter("https://twitter.com/yoyodyne/").unwrap();
        assert_eq!(member.twitter.as_deref(), Some("https://twitter.com/yoyodyne"));

        member.set_twitter("https://x.com/yoyodyne").unwrap();
        assert_eq!(member.twitter.as_deref(), Some("https://twitter.com/yoyodyne"));
    }

    #[test]
    fn twitter_rejects_things_that_are_not_handles() {
        let mut member = Member::default();

        assert!(member.set_twitter("not a handle").is_err());
        assert!(member.set_twitter("https://example.org/yoyodyne").is_err());
        assert_eq!(member.twitter, None);
    }
}
