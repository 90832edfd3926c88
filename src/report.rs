use crate::member::Member;

/// One member flattened into a spreadsheet-friendly row.
#[derive(serde::Serialize)]
struct CatalogRow<'a> {
    #[serde(rename = "Organization")]
    organization: &'a str,
    #[serde(rename = "Website")]
    website: &'a str,
    #[serde(rename = "Repository")]
    repository: &'a str,
    #[serde(rename = "Crunchbase")]
    crunchbase: &'a str,
    #[serde(rename = "Slug")]
    slug: &'a str,
    #[serde(rename = "Accepted")]
    accepted: &'a str,
    #[serde(rename = "Categories")]
    categories: String,
}

pub fn generate_csv(members: &[Member]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for member in members {
        writer
            .serialize(CatalogRow {
                organization: &member.orgname,
                website: member.website.as_deref().unwrap_or(""),
                repository: member.repo_url.as_deref().unwrap_or(""),
                crunchbase: member.crunchbase.as_deref().unwrap_or(""),
                slug: member.extra.slug.as_deref().unwrap_or(""),
                accepted: member.extra.accepted.as_deref().unwrap_or(""),
                categories: member.second_path.join("|"),
            })
            .map_err(|e| format!("Couldn't serialize a catalog row: {e}"))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Couldn't finish the catalog CSV: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("The catalog CSV isn't valid UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{Member, MemberExtra};

    #[test]
    fn members_become_rows_under_a_header() {
        let member = Member {
            orgname: "OpenEXR".to_string(),
            membership: "All".to_string(),
            website: Some("https://openexr.example.org".to_string()),
            second_path: vec![
                "Project Group / ASWF".to_string(),
                "Technology Sector / Visual Effects".to_string(),
            ],
            extra: MemberExtra {
                slug: Some("openexr".to_string()),
                accepted: Some("2020-01-01".to_string()),
                ..MemberExtra::default()
            },
            ..Member::default()
        };

        let csv = generate_csv(&[member]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Organization,Website,Repository,Crunchbase,Slug,Accepted,Categories")
        );
        assert_eq!(
            lines.next(),
            Some(
                "OpenEXR,https://openexr.example.org,,,openexr,2020-01-01,Project Group / ASWF|Technology Sector / Visual Effects"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn no_members_means_just_nothing() {
        assert_eq!(generate_csv(&[]).unwrap(), "");
    }
}
