use chrono::{Duration, Utc};
use ghstats::commits::{accumulate, one_year_ago, summarize_contributors, summarize_weeks};
use ghstats::github::{Author, ContributorActivity, ContributorWeek, WeekBucket};
use ghstats::model::ContributorBreakdown;
use pretty_assertions::assert_eq;

fn days_ago(n: i64) -> i64 {
    (Utc::now() - Duration::days(n)).timestamp()
}

#[test]
fn weeks_split_at_the_year_boundary() {
    let weeks = [
        WeekBucket {
            week: days_ago(70),
            total: 3,
        },
        WeekBucket {
            week: days_ago(400),
            total: 5,
        },
    ];
    let count = summarize_weeks(&weeks, one_year_ago());
    assert_eq!(count.total, 8);
    assert_eq!(count.past_year, 3);
}

#[test]
fn past_year_never_exceeds_total() {
    let cutoff = one_year_ago();
    let cases = [
        vec![],
        vec![WeekBucket {
            week: days_ago(1),
            total: 10,
        }],
        vec![
            WeekBucket {
                week: days_ago(500),
                total: 4,
            },
            WeekBucket {
                week: days_ago(2),
                total: 1,
            },
            WeekBucket {
                week: days_ago(364),
                total: 9,
            },
        ],
    ];
    for weeks in cases {
        let count = summarize_weeks(&weeks, cutoff);
        assert!(count.past_year <= count.total);
        assert_eq!(count.total, weeks.iter().map(|w| w.total).sum::<u64>());
    }
}

fn activity(login: &str, total: u64, weeks: Vec<(i64, u64)>) -> ContributorActivity {
    ContributorActivity {
        author: Some(Author {
            login: login.to_string(),
        }),
        total,
        weeks: weeks
            .into_iter()
            .map(|(w, c)| ContributorWeek { w, c })
            .collect(),
    }
}

#[test]
fn contributor_window_rule_matches_weeks() {
    let entries = [activity(
        "alice",
        9,
        vec![(days_ago(10), 2), (days_ago(400), 7)],
    )];
    let breakdown = summarize_contributors(&entries, one_year_ago());
    assert_eq!(breakdown.total.get("alice"), Some(&9));
    assert_eq!(breakdown.past_year.get("alice"), Some(&2));
}

#[test]
fn unattributed_entries_are_skipped() {
    let entries = [ContributorActivity {
        author: None,
        total: 42,
        weeks: vec![],
    }];
    let breakdown = summarize_contributors(&entries, one_year_ago());
    assert!(breakdown.total.is_empty());
    assert!(breakdown.past_year.is_empty());
}

#[test]
fn global_accumulation_matches_per_repo_sums() {
    let cutoff = one_year_ago();
    let repo_a = summarize_contributors(
        &[
            activity("alice", 10, vec![(days_ago(5), 3)]),
            activity("bob", 2, vec![(days_ago(500), 2)]),
        ],
        cutoff,
    );
    let repo_b = summarize_contributors(&[activity("alice", 3, vec![(days_ago(30), 1)])], cutoff);

    let mut overall = ContributorBreakdown::default();
    accumulate(&mut overall, &repo_a);
    accumulate(&mut overall, &repo_b);

    for login in ["alice", "bob"] {
        let per_repo_sum: u64 = [&repo_a, &repo_b]
            .iter()
            .filter_map(|b| b.total.get(login))
            .sum();
        assert_eq!(overall.total.get(login).copied().unwrap_or(0), per_repo_sum);
    }
    assert_eq!(overall.total.get("alice"), Some(&13));
    assert_eq!(overall.past_year.get("alice"), Some(&4));
    assert_eq!(overall.past_year.get("bob"), Some(&0));
}

#[test]
fn wire_shape_deserializes() {
    let json = r#"[
        {
            "author": {"login": "alice", "id": 1},
            "total": 5,
            "weeks": [{"w": 1700000000, "a": 10, "d": 2, "c": 5}]
        },
        {
            "author": null,
            "total": 1,
            "weeks": []
        }
    ]"#;
    let entries: Vec<ContributorActivity> = serde_json::from_str(json).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].author.as_ref().unwrap().login, "alice");
    assert_eq!(entries[0].weeks[0].c, 5);
    assert!(entries[1].author.is_none());
}
