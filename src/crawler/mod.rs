//! Crawler module for the one-hop detection pass
//!
//! This module contains the crawl logic:
//! - HTTP fetching with error classification
//! - Anchor enumeration from the seed page
//! - Main-content length estimation
//! - Article classification
//! - Pipeline orchestration

mod classifier;
mod estimator;
mod fetcher;
mod lengths;
mod parser;
mod pipeline;

pub use classifier::{classify_links, ClassificationRecord};
pub use estimator::estimate_body_length;
pub use fetcher::{build_http_client, fetch_page};
pub use lengths::LinkLengthMap;
pub use parser::extract_links;
pub use pipeline::{project_articles, LinkOutcome, Pipeline};
