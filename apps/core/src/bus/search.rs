//! Simulated search, the only async surface in the core.
//!
//! `search` models the original's delayed promise: it waits a fixed delay,
//! filters the in-memory catalog, and always resolves. There is no
//! cancellation and no reentrancy guard; overlapping calls resolve
//! independently and the caller applies whichever resolves last.

use std::time::Duration;

use tracing::debug;

use super::model::{Bus, FilterCriteria, Route, SearchParams, SearchResponse};
use super::query;

/// Catalog-backed search with a fixed artificial delay.
#[derive(Debug, Clone)]
pub struct SearchService {
    catalog: Vec<Bus>,
    delay: Duration,
}

impl SearchService {
    pub fn new(catalog: Vec<Bus>, delay: Duration) -> Self {
        SearchService { catalog, delay }
    }

    /// Resolves with the buses matching the from/to/date triple.
    /// Never fails; empty params match the whole catalog.
    pub async fn search(&self, params: &SearchParams) -> SearchResponse {
        tokio::time::sleep(self.delay).await;

        let criteria = FilterCriteria {
            from: non_empty(&params.from),
            to: non_empty(&params.to),
            date: non_empty(&params.date),
            ..Default::default()
        };
        let results = query::filter(&self.catalog, &criteria);
        let total = results.len();
        debug!(total, "search resolved");
        SearchResponse { results, total }
    }

    /// All distinct origin and destination cities, sorted.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self
            .catalog
            .iter()
            .flat_map(|bus| [bus.route.from.clone(), bus.route.to.clone()])
            .collect();
        cities.sort();
        cities.dedup();
        cities
    }

    /// Routes ranked by how often they appear in the catalog, at most 10.
    /// Ties keep first-seen order.
    pub fn popular_routes(&self) -> Vec<Route> {
        let mut counts: Vec<(Route, u32)> = Vec::new();
        for bus in &self.catalog {
            match counts.iter_mut().find(|(route, _)| *route == bus.route) {
                Some((_, count)) => *count += 1,
                None => counts.push((bus.route.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(10).map(|(route, _)| route).collect()
    }

    pub fn bus_by_id(&self, id: u32) -> Option<&Bus> {
        self.catalog.iter().find(|bus| bus.id == id)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
