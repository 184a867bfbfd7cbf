//! Product listing filters and the outbound catalog query they compose into.

use crate::services::errors::FilterError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Query keys understood by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Category,
    Brand,
    MinPrice,
    MaxPrice,
    InStock,
    SearchTerm,
    SortBy,
    Page,
    Limit,
    IsDeleted,
}

impl FilterKey {
    pub const USER_KEYS: [FilterKey; 6] = [
        FilterKey::Category,
        FilterKey::Brand,
        FilterKey::MinPrice,
        FilterKey::MaxPrice,
        FilterKey::InStock,
        FilterKey::SearchTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Category => "category",
            FilterKey::Brand => "brand",
            FilterKey::MinPrice => "minPrice",
            FilterKey::MaxPrice => "maxPrice",
            FilterKey::InStock => "inStock",
            FilterKey::SearchTerm => "searchTerm",
            FilterKey::SortBy => "sortBy",
            FilterKey::Page => "page",
            FilterKey::Limit => "limit",
            FilterKey::IsDeleted => "isDeleted",
        }
    }

    /// Prefix shown to shoppers in the active-filter chips.
    pub fn label_prefix(&self) -> &'static str {
        match self {
            FilterKey::Category => "Category",
            FilterKey::Brand => "Brand",
            FilterKey::MinPrice => "Min Price",
            FilterKey::MaxPrice => "Max Price",
            FilterKey::InStock => "Stock",
            FilterKey::SearchTerm => "Search",
            FilterKey::SortBy => "Sort",
            FilterKey::Page => "Page",
            FilterKey::Limit => "Limit",
            FilterKey::IsDeleted => "Deleted",
        }
    }

    /// Keys the composer appends itself; they never come from the filter set.
    pub fn is_managed(&self) -> bool {
        matches!(
            self,
            FilterKey::SortBy | FilterKey::Page | FilterKey::Limit | FilterKey::IsDeleted
        )
    }
}

impl FromStr for FilterKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FilterKey::Category),
            "brand" => Ok(FilterKey::Brand),
            "minPrice" => Ok(FilterKey::MinPrice),
            "maxPrice" => Ok(FilterKey::MaxPrice),
            "inStock" => Ok(FilterKey::InStock),
            "searchTerm" => Ok(FilterKey::SearchTerm),
            "sortBy" => Ok(FilterKey::SortBy),
            "page" => Ok(FilterKey::Page),
            "limit" => Ok(FilterKey::Limit),
            "isDeleted" => Ok(FilterKey::IsDeleted),
            other => Err(FilterError::UnknownKey(other.to_string())),
        }
    }
}

static LABEL_KEYS: Lazy<HashMap<&'static str, FilterKey>> = Lazy::new(|| {
    FilterKey::USER_KEYS
        .iter()
        .map(|key| (key.label_prefix(), *key))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParam {
    pub name: String,
    pub value: String,
}

impl FilterParam {
    pub fn new(key: FilterKey, value: impl Into<String>) -> Self {
        FilterParam {
            name: key.as_str().to_string(),
            value: value.into(),
        }
    }
}

/// Active filters, at most one per key, in the order they were last set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(FilterKey, String)>,
}

impl FilterSet {
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Replaces any previous value for `key`. Values are passed through untouched.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) -> Result<(), FilterError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FilterError::EmptyValue);
        }

        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: FilterKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.len() != before
    }

    /// Removes the entry a chip label was generated from, e.g. `"Category: Pens"`.
    pub fn remove_by_label(&mut self, label: &str) -> bool {
        let Some((prefix, _)) = label.split_once(':') else {
            return false;
        };

        match LABEL_KEYS.get(prefix.trim()) {
            Some(key) => self.remove(*key),
            None => {
                tracing::debug!("No filter matches label {:?}", label);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// User-facing filters in insertion order. Managed keys are skipped.
    pub fn user_filters(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        self.entries
            .iter()
            .filter(|(k, _)| !k.is_managed())
            .map(|(k, v)| (*k, v.as_str()))
    }

    pub fn labels(&self) -> Vec<String> {
        self.user_filters()
            .map(|(key, value)| label_for(key, value))
            .collect()
    }
}

pub fn label_for(key: FilterKey, value: &str) -> String {
    format!("{}: {}", key.label_prefix(), value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceLow => "priceLow",
            SortOrder::PriceHigh => "priceHigh",
        }
    }

    /// `sortBy` value sent upstream; featured relies on the catalog default.
    pub fn sort_by(&self) -> Option<&'static str> {
        match self {
            SortOrder::Featured => None,
            SortOrder::PriceLow => Some("price:asc"),
            SortOrder::PriceHigh => Some("price:desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortOrder::Featured),
            "priceLow" => Ok(SortOrder::PriceLow),
            "priceHigh" => Ok(SortOrder::PriceHigh),
            _ => Err(()),
        }
    }
}

/// Everything needed to ask the catalog for one page of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filters: FilterSet,
    pub search_input: String,
    pub sort: SortOrder,
    page: u32,
    limit: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        ListingQuery::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingQuery {
    pub fn new(limit: u32) -> Self {
        ListingQuery {
            filters: FilterSet::new(),
            search_input: String::new(),
            sort: SortOrder::Featured,
            page: 1,
            limit: limit.max(1),
        }
    }

    /// Builds a query from raw query-string pairs. `sort`, `page`, `limit`
    /// and `search` are recognised alongside the filter keys; anything
    /// else is dropped.
    pub fn from_pairs<I, K, V>(pairs: I, default_limit: u32) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListingQuery::new(default_limit);

        for (name, value) in pairs {
            let (name, value) = (name.as_ref(), value.as_ref());
            match name {
                "sort" => query.sort = value.parse().unwrap_or_default(),
                "page" => {
                    if let Ok(page) = value.parse() {
                        query.set_page(page);
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse::<u32>() {
                        query.limit = limit.max(1);
                    }
                }
                "search" => query.set_search(value),
                _ => match name.parse::<FilterKey>() {
                    Ok(key) if !key.is_managed() => {
                        if let Err(e) = query.filters.set(key, value) {
                            tracing::debug!("Skipping filter {}: {}", name, e);
                        }
                    }
                    Ok(_) => tracing::debug!("Ignoring managed key {}", name),
                    Err(e) => tracing::debug!("{}", e),
                },
            }
        }

        query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Free-text search feeds the `searchTerm` filter; blank input clears it.
    pub fn set_search(&mut self, input: &str) {
        self.search_input = input.to_string();
        if self.filters.set(FilterKey::SearchTerm, input).is_err() {
            self.filters.remove(FilterKey::SearchTerm);
        }
    }

    /// Drops every filter and the search input. Sort order and page are kept.
    pub fn reset(&mut self) {
        self.filters.clear();
        self.search_input.clear();
    }

    /// Outbound parameter list: user filters first, then `sortBy` when a
    /// non-default order is active, then `isDeleted`, `page` and `limit`.
    pub fn compose(&self) -> Vec<FilterParam> {
        let mut params: Vec<FilterParam> = self
            .filters
            .user_filters()
            .map(|(key, value)| FilterParam::new(key, value))
            .collect();

        if let Some(sort_by) = self.sort.sort_by() {
            params.push(FilterParam::new(FilterKey::SortBy, sort_by));
        }

        params.push(FilterParam::new(FilterKey::IsDeleted, "false"));
        params.push(FilterParam::new(FilterKey::Page, self.page.to_string()));
        params.push(FilterParam::new(FilterKey::Limit, self.limit.to_string()));

        params
    }
}
