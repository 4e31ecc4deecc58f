use ghstats::github::{last_page, sorted_active};
use ghstats::model::Repository;
use pretty_assertions::assert_eq;

fn repo(name: &str, archived: bool, disabled: bool) -> Repository {
    Repository {
        name: name.to_string(),
        archived,
        disabled,
    }
}

#[test]
fn last_page_parsed_from_link_header() {
    let header = "<https://api.github.com/organizations/123/repos?per_page=100&page=2>; rel=\"next\", \
                  <https://api.github.com/organizations/123/repos?per_page=100&page=7>; rel=\"last\"";
    assert_eq!(last_page(header), Some(7));
}

#[test]
fn missing_last_rel_means_single_page() {
    let header = "<https://api.github.com/x?page=2>; rel=\"next\"";
    assert_eq!(last_page(header), None);
    assert_eq!(last_page(""), None);
}

#[test]
fn per_page_param_is_not_mistaken_for_page() {
    let header = "<https://api.github.com/x?per_page=100&page=3>; rel=\"last\"";
    assert_eq!(last_page(header), Some(3));
}

#[test]
fn sort_is_case_insensitive() {
    let repos = vec![
        repo("Zeta", false, false),
        repo("alpha", false, false),
        repo("Beta", false, false),
    ];
    assert_eq!(sorted_active(repos), vec!["alpha", "Beta", "Zeta"]);
}

#[test]
fn archived_and_disabled_repositories_are_excluded() {
    let repos = vec![
        repo("keep", false, false),
        repo("archived", true, false),
        repo("disabled", false, true),
        repo("both", true, true),
    ];
    assert_eq!(sorted_active(repos), vec!["keep"]);
}

#[test]
fn duplicate_names_are_collapsed() {
    let repos = vec![
        repo("twin", false, false),
        repo("solo", false, false),
        repo("twin", false, false),
    ];
    assert_eq!(sorted_active(repos), vec!["solo", "twin"]);
}

#[test]
fn duplicates_differing_only_in_case_are_collapsed() {
    let repos = vec![
        repo("Widget", false, false),
        repo("solo", false, false),
        repo("widget", false, false),
    ];
    let names = sorted_active(repos);
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], "solo");
    assert!(names[1].eq_ignore_ascii_case("widget"));
}

#[test]
fn result_is_independent_of_page_boundaries() {
    let all = ["Gamma", "delta", "Omega", "beta"];
    let split_a: Vec<Repository> = {
        let mut page1: Vec<Repository> = all[..1].iter().map(|n| repo(n, false, false)).collect();
        page1.extend(all[1..].iter().map(|n| repo(n, false, false)));
        page1
    };
    let split_b: Vec<Repository> = {
        let mut page1: Vec<Repository> = all[..3].iter().map(|n| repo(n, false, false)).collect();
        page1.extend(all[3..].iter().map(|n| repo(n, false, false)));
        page1
    };
    assert_eq!(sorted_active(split_a), sorted_active(split_b));
}

#[test]
fn repository_wire_shape_deserializes() {
    let json = r#"{
        "id": 99,
        "name": "widget",
        "full_name": "acme/widget",
        "archived": false,
        "disabled": false,
        "fork": true
    }"#;
    let parsed: Repository = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.name, "widget");
    assert!(parsed.is_active());

    // Fields the API may omit default to false
    let minimal: Repository = serde_json::from_str(r#"{"name": "tiny"}"#).unwrap();
    assert!(minimal.is_active());
}
