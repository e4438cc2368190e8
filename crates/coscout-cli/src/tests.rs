use super::*;

#[test]
fn parses_scrape_with_links() {
    let cli = Cli::try_parse_from([
        "coscout-cli",
        "scrape",
        "https://www.hithorizons.com/search?Name=a",
        "https://www.hithorizons.com/search?Name=b",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Scrape { links, concurrency } => {
            assert_eq!(links.len(), 2);
            assert!(concurrency.is_none());
        }
        other => panic!("expected Scrape, got: {other:?}"),
    }
}

#[test]
fn parses_scrape_concurrency_flag() {
    let cli = Cli::try_parse_from([
        "coscout-cli",
        "scrape",
        "--concurrency",
        "4",
        "https://www.hithorizons.com/search?Name=a",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scrape {
            concurrency: Some(4),
            ..
        }
    ));
}

#[test]
fn scrape_requires_at_least_one_link() {
    assert!(Cli::try_parse_from(["coscout-cli", "scrape"]).is_err());
}

#[test]
fn parses_locate_with_base() {
    let cli = Cli::try_parse_from([
        "coscout-cli",
        "locate",
        "results.html",
        "--base",
        "https://site.example/search",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Locate { file, base } => {
            assert_eq!(file, PathBuf::from("results.html"));
            assert_eq!(base, "https://site.example/search");
        }
        other => panic!("expected Locate, got: {other:?}"),
    }
}

#[test]
fn locate_requires_base() {
    assert!(Cli::try_parse_from(["coscout-cli", "locate", "results.html"]).is_err());
}

#[test]
fn parses_extract() {
    let cli = Cli::try_parse_from(["coscout-cli", "extract", "detail.html"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Extract { .. }));
}

#[test]
fn partition_links_keeps_order_and_splits_by_host() {
    let links = vec![
        "https://www.hithorizons.com/search?Name=a".to_string(),
        "https://example.com/search?Name=b".to_string(),
        "https://www.hithorizons.com/search?Name=c".to_string(),
    ];

    let (supported, skipped) = scrape::partition_links(links, "www.hithorizons.com");

    assert_eq!(
        supported,
        vec![
            "https://www.hithorizons.com/search?Name=a",
            "https://www.hithorizons.com/search?Name=c",
        ]
    );
    assert_eq!(skipped, vec!["https://example.com/search?Name=b"]);
}
