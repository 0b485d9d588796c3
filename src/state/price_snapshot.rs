use crate::state::quote::PriceQuote;
use std::collections::HashMap;

/// Prices from a single fetch. Never merged with an earlier snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSnapshot {
    quotes: HashMap<String, PriceQuote>,
}

impl PriceSnapshot {
    /// Build a snapshot keeping only ids that appear in `requested`.
    pub fn from_quotes<I>(requested: &[&str], quotes: I) -> Self
    where
        I: IntoIterator<Item = (String, PriceQuote)>,
    {
        let quotes = quotes
            .into_iter()
            .filter(|(id, _)| requested.contains(&id.as_str()))
            .collect();

        PriceSnapshot { quotes }
    }

    pub fn get(&self, id: &str) -> Option<&PriceQuote> {
        self.quotes.get(id)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Asset ids in the snapshot, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.quotes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
