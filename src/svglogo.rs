use base64::prelude::*;

/// Text-based placeholder logo for projects without hosted artwork.
pub struct SvgLogo {
    svg: String,
}

impl SvgLogo {
    /// Render a simple centered-text logo for the given name.
    pub fn with_name(name: &str) -> Self {
        let escaped = name
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let svg = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="100" viewBox="0 0 300 100"><rect width="300" height="100" fill="#ffffff"/><text x="150" y="55" font-family="Helvetica, Arial, sans-serif" font-size="16" text-anchor="middle" fill="#333333">{}</text></svg>"##,
            escaped
        );
        Self { svg }
    }

    pub fn as_svg(&self) -> &str {
        &self.svg
    }

    /// The logo as a data URI, ready to be used as an image reference.
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            BASE64_STANDARD.encode(&self.svg)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_carries_the_name_as_text() {
        let logo = SvgLogo::with_name("Yoyodyne");
        assert!(logo.as_svg().contains(">Yoyodyne</text>"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let logo = SvgLogo::with_name("Yoyo & <Dyne>");
        assert!(logo.as_svg().contains("Yoyo &amp; &lt;Dyne&gt;"));
    }

    #[test]
    fn data_uri_is_base64_svg() {
        let logo = SvgLogo::with_name("Yoyodyne");
        let uri = logo.data_uri();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));

        let encoded = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), logo.as_svg());
    }
}
