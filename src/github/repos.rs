use super::client::GithubClient;
use crate::error::Result;
use crate::model::Repository;

const PER_PAGE: usize = 100;

/// List the account's active repository names, case-insensitively sorted
/// and deduplicated. Archived and disabled repositories never enter the
/// pipeline.
pub fn list_repositories(
    client: &GithubClient,
    owner: &str,
    is_organization: bool,
) -> Result<Vec<String>> {
    let kind = if is_organization { "orgs" } else { "users" };
    let base = format!("/{kind}/{owner}/repos?per_page={PER_PAGE}");

    let (mut entries, link) = client.get_list::<Repository>(&base)?;

    // A single result page carries no Link header
    let pages = link.as_deref().and_then(last_page).unwrap_or(1);
    for page in 2..=pages {
        let (more, _) = client.get_list::<Repository>(&format!("{base}&page={page}"))?;
        entries.extend(more);
    }

    Ok(sorted_active(entries))
}

/// Filter to active repositories, sort case-insensitively, drop duplicates.
pub fn sorted_active(entries: Vec<Repository>) -> Vec<String> {
    let mut names: Vec<String> = entries
        .into_iter()
        .filter(Repository::is_active)
        .map(|repo| repo.name)
        .collect();
    names.sort_by_key(|name| name.to_lowercase());
    names.dedup_by_key(|name| name.to_lowercase());
    names
}

/// Extract the final page number from a `Link` header's `rel="last"` entry.
pub fn last_page(link_header: &str) -> Option<usize> {
    for part in link_header.split(',') {
        let mut pieces = part.splitn(2, ';');
        let location = pieces.next().unwrap_or("").trim();
        let rel = pieces.next().unwrap_or("").trim();
        if rel != "rel=\"last\"" {
            continue;
        }

        let url = location.trim_start_matches('<').trim_end_matches('>');
        for param in url.split(['?', '&']).skip(1) {
            if let Some(page) = param.strip_prefix("page=") {
                return page.parse().ok();
            }
        }
    }
    None
}
