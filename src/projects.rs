use serde::Deserialize;

use crate::{
    config::Config,
    member::{Member, MemberExtra},
    normalize::{normalize_company, normalize_url},
    svglogo::SvgLogo,
    JsonFetcher, Reporter,
};

const ENDPOINT_URL: &str = "https://api-gw.platform.linuxfoundation.org/project-service/v1/public/projects?$filter=parentSlug%20eq%20{slug}&pageSize=2000&orderBy=name";
const SINGLE_SLUG_ENDPOINT_URL: &str =
    "https://api-gw.platform.linuxfoundation.org/project-service/v1/public/projects?slug={slug}";
const CALENDAR_URL: &str = "https://zoom-lfx.platform.linuxfoundation.org/meetings/{slug}";
const ICAL_URL: &str = "https://webcal.prod.itx.linuxfoundation.org/lfx/{project_id}";
const INSIGHTS_URL: &str =
    "https://insights.lfx.linuxfoundation.org/foundation/{parent_slug}/overview?project={slug}";

/// A project entry as the directory service returns it.
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Slug")]
    slug: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>,
    #[serde(rename = "DisplayOnWebsite", default)]
    display_on_website: bool,
    #[serde(rename = "TestRecord", default)]
    test_record: bool,
    #[serde(rename = "RepositoryURL")]
    repository_url: Option<String>,
    #[serde(rename = "StartDate")]
    start_date: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Website")]
    website: Option<String>,
    #[serde(rename = "ParentSlug")]
    parent_slug: Option<String>,
    #[serde(rename = "ProjectLogo")]
    project_logo: Option<String>,
    #[serde(rename = "CrunchbaseUrl")]
    crunchbase_url: Option<String>,
    #[serde(rename = "Twitter")]
    twitter: Option<String>,
    #[serde(rename = "HasProgramManager", default)]
    has_program_manager: bool,
    #[serde(rename = "IndustrySector")]
    industry_sector: Option<String>,
    /// Semicolon-delimited list
    #[serde(rename = "TechnologySector")]
    technology_sector: Option<String>,
    #[serde(rename = "ProjectID")]
    project_id: Option<String>,
}

/// The `Data` envelope around directory responses.
#[derive(Debug, Deserialize)]
struct ProjectListing {
    #[serde(rename = "Data")]
    data: Vec<ProjectRecord>,
}

/// Loads the sub-projects of a root project from the LFX directory and maps
/// each one into a landscape member entry.
pub struct ProjectCatalog<'a> {
    project: String,
    default_crunchbase: String,
    artwork_repo_url: Option<String>,
    filter_by_parent_slug: bool,
    active_only: bool,
    add_technology_sector: bool,
    add_industry_sector: bool,
    add_pmo_managed_status: bool,
    add_parent_project: bool,
    fetcher: &'a dyn JsonFetcher,
    reporter: &'a dyn Reporter,
    pub members: Vec<Member>,
}

impl<'a> ProjectCatalog<'a> {
    /// Build a catalog from validated configuration. No I/O happens here.
    pub fn new(config: &Config, fetcher: &'a dyn JsonFetcher, reporter: &'a dyn Reporter) -> Self {
        Self {
            project: config.slug.clone(),
            default_crunchbase: config.default_crunchbase.clone(),
            artwork_repo_url: config.artwork_repo_url.clone(),
            filter_by_parent_slug: config.filter_by_parent_slug,
            active_only: true,
            add_technology_sector: config.add_technology_sector,
            add_industry_sector: config.add_industry_sector,
            add_pmo_managed_status: config.add_pmo_managed_status,
            add_parent_project: config.add_parent_project,
            fetcher,
            reporter,
            members: Vec::new(),
        }
    }

    /// Fetch the project listing and append a member entry for every record
    /// that survives the skip rules. Listing-level fetch/parse failures
    /// abort the load; per-record anomalies never do.
    pub fn load_data(&mut self) -> Result<(), String> {
        self.reporter
            .info(&format!("Loading LFX projects data for '{}'", self.project));

        let parent = if self.filter_by_parent_slug {
            urlencoding::encode(&self.project).to_string()
        } else {
            String::new()
        };
        let body = self.fetcher.get_json(&ENDPOINT_URL.replace("{slug}", &parent))?;
        let listing: ProjectListing = serde_json::from_value(body)
            .map_err(|e| format!("The project listing doesn't look like I expected. Error: {e}"))?;

        for record in listing.data {
            if let Some(website) = record.website.as_deref() {
                let orgname = record.name.as_deref().unwrap_or("");
                if !self.find(orgname, Some(website), None, None).is_empty() {
                    continue;
                }
            }
            if self.active_only && record.status.as_deref() != Some("Active") {
                continue;
            }
            if !record.display_on_website {
                continue;
            }
            if record.test_record {
                continue;
            }

            let mut member = Member {
                membership: "All".to_string(),
                orgname: record.name.clone().unwrap_or_default(),
                ..Member::default()
            };
            self.reporter
                .info(&format!("Found LFX project '{}'", member.orgname));

            // The root project doesn't belong in its own catalog
            let slug = record.slug.clone();
            if slug.as_deref() == Some(self.project.as_str()) {
                continue;
            }

            member.repo_url = record.repository_url.clone();
            member.description = record.description.clone();

            let website_rejected = match record.website.as_deref() {
                Some(website) => match member.set_website(website) {
                    Ok(()) => false,
                    Err(e) => {
                        self.reporter
                            .info(&format!("{e} - try to add the repository URL instead"));
                        true
                    }
                },
                None => true,
            };
            if website_rejected {
                if let Some(repo_url) = record.repository_url.as_deref() {
                    if let Err(e) = member.set_website(repo_url) {
                        self.reporter.warn(&e.to_string());
                    }
                }
            }

            if self.add_parent_project {
                let parent_slug = record.parent_slug.as_deref().unwrap_or(&self.project);
                if let Some(parent_name) = self.lookup_parent_project_name_by_slug(Some(parent_slug))
                {
                    member
                        .second_path
                        .push(format!("Project Group / {}", parent_name.replace('/', ":")));
                }
            }

            match record.project_logo.as_deref() {
                Some(logo) => {
                    if let Err(e) = member.set_logo(logo) {
                        self.reporter
                            .info(&format!("{e} - will try to create a text logo"));
                        member.logo = Some(SvgLogo::with_name(&member.orgname).data_uri());
                    }
                }
                None => {
                    member.logo = Some(SvgLogo::with_name(&member.orgname).data_uri());
                }
            }

            member.crunchbase = Some(
                record
                    .crunchbase_url
                    .clone()
                    .unwrap_or_else(|| self.default_crunchbase.clone()),
            );

            if let Some(twitter) = record.twitter.as_deref() {
                if let Err(e) = member.set_twitter(twitter) {
                    self.reporter.warn(&e.to_string());
                }
            }

            if self.add_pmo_managed_status && record.has_program_manager {
                member.second_path.push("PMO Managed / All".to_string());
            }
            if self.add_industry_sector {
                if let Some(sector) = record.industry_sector.as_deref().filter(|s| !s.is_empty()) {
                    member
                        .second_path
                        .push(format!("Industry / {}", sector.replace('/', ":")));
                }
            }
            if self.add_technology_sector {
                if let Some(sectors) = record
                    .technology_sector
                    .as_deref()
                    .filter(|s| !s.is_empty())
                {
                    for sector in sectors.split(';') {
                        member
                            .second_path
                            .push(format!("Technology Sector / {}", sector.replace('/', ":")));
                    }
                }
            }

            let mut extra = MemberExtra {
                slug: slug.clone(),
                accepted: record.start_date.clone(),
                ..MemberExtra::default()
            };
            if let Some(slug) = slug.as_deref() {
                let parent_slug = record.parent_slug.as_deref().unwrap_or(&self.project);
                extra.dev_stats_url = Some(
                    INSIGHTS_URL
                        .replace("{parent_slug}", parent_slug)
                        .replace("{slug}", slug),
                );
                extra.calendar_url = Some(CALENDAR_URL.replace("{slug}", slug));
                if let Some(template) = self.artwork_repo_url.as_deref() {
                    extra.artwork_url = Some(template.replace("{slug}", slug));
                }
            }
            if let Some(project_id) = record.project_id.as_deref() {
                extra.ical_url = Some(ICAL_URL.replace("{project_id}", project_id));
            }
            member.extra = extra;

            self.members.push(member);
        }

        Ok(())
    }

    /// Resolve a project slug to its human name. `None` means "no name
    /// available" - a lookup miss is warned about, never an error.
    pub fn lookup_parent_project_name_by_slug(&self, slug: Option<&str>) -> Option<String> {
        let slug = slug.filter(|s| !s.is_empty())?;

        let url = SINGLE_SLUG_ENDPOINT_URL.replace("{slug}", &urlencoding::encode(slug));
        let listing: ProjectListing = match self.fetcher.get_json(&url).and_then(|body| {
            serde_json::from_value(body).map_err(|e| {
                format!("The single-slug response doesn't look like I expected. Error: {e}")
            })
        }) {
            Ok(listing) => listing,
            Err(e) => {
                self.reporter
                    .warn(&format!("Couldn't look up the project for slug '{slug}': {e}"));
                return None;
            }
        };

        match listing.data.into_iter().next().and_then(|record| record.name) {
            Some(name) => Some(name),
            None => {
                self.reporter
                    .warn(&format!("Couldn't find a project for slug '{slug}'"));
                None
            }
        }
    }

    /// All existing members matching the given identity. Org names compare
    /// company-normalized, websites URL-normalized; empty keys never match.
    pub fn find(
        &self,
        org: &str,
        website: Option<&str>,
        membership: Option<&str>,
        repo_url: Option<&str>,
    ) -> Vec<&Member> {
        let normalized_org = normalize_company(org);
        let normalized_website = website.map(normalize_url).unwrap_or_default();

        let mut found = Vec::new();
        for member in &self.members {
            let org_matches =
                !normalized_org.is_empty() && normalize_company(&member.orgname) == normalized_org;
            let website_matches = !normalized_website.is_empty()
                && member
                    .website
                    .as_deref()
                    .map(|w| normalize_url(w) == normalized_website)
                    .unwrap_or(false);

            let matches = if let Some(membership) = membership {
                (org_matches || website_matches) && member.membership == membership
            } else if let Some(repo_url) = repo_url {
                org_matches || website_matches || member.repo_url.as_deref() == Some(repo_url)
            } else {
                org_matches || website_matches
            };
            if matches {
                found.push(member);
            }
        }

        found
    }

    /// First member whose extra slug matches, if any.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.extra.slug.as_deref() == Some(slug))
    }
}
