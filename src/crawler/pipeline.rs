//! Crawl pipeline - one-hop orchestration
//!
//! The pipeline takes a fetched seed page and runs the whole detection pass:
//! enumerate anchors, resolve each href with the literal prefix rule, fetch
//! every resolved link one at a time, estimate body lengths, classify, and
//! project the article links. A single broken link never aborts the run; its
//! outcome is recorded and logged at debug level, then the loop continues.

use crate::config::Config;
use crate::crawler::classifier::classify_links;
use crate::crawler::estimator::estimate_body_length;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_links;
use crate::crawler::{ClassificationRecord, LinkLengthMap};
use crate::output::ArticleTable;
use crate::url::{resolve_link, ResolvedLink};
use crate::FetchError;
use reqwest::Client;

/// What happened to one followed link
///
/// Per-link failures are ordinary values rather than errors: the pipeline
/// drops them and continues, but every outcome is observable in the debug
/// log.
#[derive(Debug)]
pub enum LinkOutcome {
    /// Fetched and measured; contributes an entry to the length map
    Measured { url: String, length: usize },

    /// Resolved but could not be fetched; dropped
    FetchFailed { url: String, error: FetchError },

    /// The href could not be resolved to a usable URL; dropped
    Malformed { href: String },
}

/// One-hop crawl pipeline
pub struct Pipeline {
    client: Client,
    config: Config,
}

impl Pipeline {
    /// Creates a pipeline over an existing HTTP client and configuration
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Runs the full detection pass over a fetched seed page
    ///
    /// `progress` is invoked once per processed link with (done, total);
    /// it exists purely for display and has no effect on the result.
    pub async fn run(
        &self,
        seed_url: &str,
        seed_body: &str,
        progress: &mut dyn FnMut(usize, usize),
    ) -> ArticleTable {
        let lengths = self.collect_lengths(seed_url, seed_body, progress).await;
        let records = classify_links(&lengths, &self.config);
        project_articles(&records)
    }

    /// Fetches and measures every link on the seed page
    ///
    /// Returns the insertion-ordered length map; failed and malformed links
    /// contribute no entry.
    pub async fn collect_lengths(
        &self,
        seed_url: &str,
        seed_body: &str,
        progress: &mut dyn FnMut(usize, usize),
    ) -> LinkLengthMap {
        let hrefs = extract_links(seed_body);
        let total = hrefs.len();
        tracing::info!("Seed page has {} links to follow", total);

        let mut lengths = LinkLengthMap::new();

        for (done, href) in hrefs.iter().enumerate() {
            match self.process_link(seed_url, href).await {
                LinkOutcome::Measured { url, length } => {
                    tracing::debug!("Measured {} chars: {}", length, url);
                    lengths.insert(url, length);
                }
                LinkOutcome::FetchFailed { url, error } => {
                    tracing::debug!("Dropped {} (fetch failed: {})", url, error);
                }
                LinkOutcome::Malformed { href } => {
                    tracing::debug!("Dropped malformed href: {:?}", href);
                }
            }
            progress(done + 1, total);
        }

        lengths
    }

    /// Resolves, fetches, and measures a single href
    async fn process_link(&self, seed_url: &str, href: &str) -> LinkOutcome {
        let url = match resolve_link(seed_url, href) {
            ResolvedLink::Url(url) => url,
            ResolvedLink::Malformed => {
                return LinkOutcome::Malformed {
                    href: href.to_string(),
                }
            }
        };

        match fetch_page(&self.client, &url).await {
            Ok(body) => {
                let length = estimate_body_length(&body, self.config.min_paragraph_words);
                LinkOutcome::Measured { url, length }
            }
            Err(error) => LinkOutcome::FetchFailed { url, error },
        }
    }
}

/// Projects classification records down to the article links, in order
pub fn project_articles(records: &[ClassificationRecord]) -> ArticleTable {
    ArticleTable::new(
        records
            .iter()
            .filter(|record| record.is_article)
            .map(|record| record.link.clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::build_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pipeline() -> Pipeline {
        Pipeline::new(build_http_client().unwrap(), Config::default())
    }

    fn long_page(words: usize) -> String {
        format!(
            "<html><body><div><p>{}</p></div></body></html>",
            vec!["word"; words].join(" ")
        )
    }

    #[tokio::test]
    async fn test_failed_links_are_omitted_not_zeroed() {
        let server = MockServer::start().await;
        let seed = server.uri();

        Mock::given(method("GET"))
            .and(path("/good"))
            .respond_with(ResponseTemplate::new(200).set_body_string(long_page(300)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let seed_body = r#"<html><body>
            <a href="/good">good</a>
            <a href="/broken">broken</a>
        </body></html>"#;

        let lengths = pipeline()
            .collect_lengths(&seed, seed_body, &mut |_, _| {})
            .await;

        assert_eq!(lengths.len(), 1);
        assert!(lengths.get(&format!("{}/good", seed)).is_some());
        assert_eq!(lengths.get(&format!("{}/broken", seed)), None);
    }

    #[tokio::test]
    async fn test_empty_href_is_dropped_silently() {
        let server = MockServer::start().await;
        let seed = server.uri();

        let seed_body = r#"<html><body><a href="">nothing</a></body></html>"#;
        let lengths = pipeline()
            .collect_lengths(&seed, seed_body, &mut |_, _| {})
            .await;

        assert!(lengths.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_links_collapse_to_one_entry() {
        let server = MockServer::start().await;
        let seed = server.uri();

        Mock::given(method("GET"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(200).set_body_string(long_page(300)))
            .mount(&server)
            .await;

        let seed_body = r#"<html><body>
            <a href="/story">once</a>
            <a href="/story">twice</a>
        </body></html>"#;

        let lengths = pipeline()
            .collect_lengths(&seed, seed_body, &mut |_, _| {})
            .await;

        assert_eq!(lengths.len(), 1);
    }

    #[tokio::test]
    async fn test_progress_is_reported_once_per_link() {
        let server = MockServer::start().await;
        let seed = server.uri();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let seed_body = r#"<html><body>
            <a href="/a">a</a>
            <a href="/b">b</a>
            <a href="/c">c</a>
        </body></html>"#;

        let mut seen = Vec::new();
        pipeline()
            .collect_lengths(&seed, seed_body, &mut |done, total| {
                seen.push((done, total));
            })
            .await;

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_project_articles_keeps_order_and_drops_non_articles() {
        let records = vec![
            ClassificationRecord {
                link: "https://example.com/a".to_string(),
                is_article: true,
            },
            ClassificationRecord {
                link: "https://example.com/b".to_string(),
                is_article: false,
            },
            ClassificationRecord {
                link: "https://example.com/c".to_string(),
                is_article: true,
            },
        ];

        let table = project_articles(&records);
        assert_eq!(
            table.links(),
            &["https://example.com/a".to_string(), "https://example.com/c".to_string()]
        );
    }
}
