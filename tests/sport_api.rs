// tests/sport_api.rs
//
// Fixture pagination against a local mock of the matches endpoint.
//
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

use feed_scrape::config::options::{ExportOptions, SportOptions};
use feed_scrape::paginate::Delay;
use feed_scrape::runner;
use feed_scrape::scrape::collect_matches;

const PATH: &str = "/v4/competitions/BSA/matches";

fn opts(server: &ServerGuard, out: &std::path::Path) -> SportOptions {
    SportOptions {
        base_url: server.url(),
        token: "secret".into(),
        delay: Delay::None,
        export: ExportOptions::api(out.join("partidas.csv")),
        ..SportOptions::default()
    }
}

fn page_query(page: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("season".into(), "2024".into()),
        Matcher::UrlEncoded("page".into(), page.to_string()),
    ])
}

fn page_mock(server: &mut ServerGuard, page: u32, ids: &[u64]) -> Mock {
    let matches: Vec<_> = ids
        .iter()
        .map(|id| json!({
            "id": id,
            "matchday": page,
            "homeTeam": { "name": "Home" },
            "awayTeam": { "name": "Away" },
            "score": { "winner": null }
        }))
        .collect();
    server
        .mock("GET", PATH)
        .match_query(page_query(page))
        .match_header("x-auth-token", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "matches": matches }).to_string())
        .expect(1)
        .create()
}

#[test]
fn pages_until_empty_and_exports() {
    let mut server = Server::new();
    let p1 = page_mock(&mut server, 1, &[1, 2]);
    let p2 = page_mock(&mut server, 2, &[3]);
    let p3 = page_mock(&mut server, 3, &[]);
    let p4 = server
        .mock("GET", PATH)
        .match_query(page_query(4))
        .expect(0)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let summary = runner::run_sport(&opts(&server, dir.path())).unwrap();

    p1.assert();
    p2.assert();
    p3.assert();
    p4.assert();

    assert_eq!(summary.records, 3);
    let path = summary.file_written.expect("file written");
    let text = std::fs::read_to_string(path).unwrap();
    let text = text.strip_prefix('\u{feff}').expect("BOM");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id;matchday;homeTeam.name;awayTeam.name;score.winner"
    );
    assert_eq!(lines.next().unwrap(), "1;1;Home;Away;");
    assert_eq!(lines.count(), 2);
}

#[test]
fn refusals_add_nothing_and_stop() {
    for code in [401, 403, 404, 429] {
        let mut server = Server::new();
        let refused = server
            .mock("GET", PATH)
            .match_query(page_query(1))
            .with_status(code)
            .with_body(r#"{"message":"nope"}"#)
            .expect(1)
            .create();
        let never = server
            .mock("GET", PATH)
            .match_query(page_query(2))
            .expect(0)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let acc = collect_matches(&opts(&server, dir.path()));

        refused.assert();
        never.assert();
        assert!(acc.is_empty(), "status {code}");
    }
}

#[test]
fn failure_mid_way_keeps_earlier_pages() {
    let mut server = Server::new();
    let p1 = page_mock(&mut server, 1, &[10, 11]);
    let p2 = server
        .mock("GET", PATH)
        .match_query(page_query(2))
        .with_status(500)
        .with_body("upstream exploded")
        .expect(1)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let summary = runner::run_sport(&opts(&server, dir.path())).unwrap();

    p1.assert();
    p2.assert();
    assert_eq!(summary.records, 2);
    assert!(summary.file_written.is_some());
}

#[test]
fn nothing_collected_writes_nothing() {
    let mut server = Server::new();
    let _empty = page_mock(&mut server, 1, &[]);

    let dir = tempfile::tempdir().unwrap();
    let o = opts(&server, dir.path());
    let summary = runner::run_sport(&o).unwrap();

    assert_eq!(summary.records, 0);
    assert!(summary.file_written.is_none());
    assert!(!o.export.path.exists());
}

#[test]
fn unreachable_host_is_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let o = SportOptions {
        // reserved port, nothing listens there
        base_url: "http://127.0.0.1:9".into(),
        delay: Delay::None,
        export: ExportOptions::api(dir.path().join("x.csv")),
        ..SportOptions::default()
    };
    let summary = runner::run_sport(&o).unwrap();
    assert_eq!(summary.records, 0);
}

#[test]
fn page_of_empty_objects_writes_nothing() {
    let mut server = Server::new();
    let p1 = server
        .mock("GET", PATH)
        .match_query(page_query(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "matches": [{}, {}] }).to_string())
        .expect(1)
        .create();
    let p2 = page_mock(&mut server, 2, &[]);

    let dir = tempfile::tempdir().unwrap();
    let o = opts(&server, dir.path());
    let summary = runner::run_sport(&o).unwrap();

    p1.assert();
    p2.assert();
    assert_eq!(summary.records, 0);
    assert!(summary.file_written.is_none());
    assert!(!o.export.path.exists());
}
