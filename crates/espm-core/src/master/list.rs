//! Bound supplier list: the master list's items with filter, sort, and
//! selection state applied.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::models::{Supplier, SupplierId};

/// Column the master list can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    SupplierName,
    SupplierId,
    City,
    Country,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::SupplierName, Self::SupplierId, Self::City, Self::Country];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SupplierName => "SupplierName",
            Self::SupplierId => "SupplierId",
            Self::City => "City",
            Self::Country => "Country",
        }
    }

    fn compare(self, left: &Supplier, right: &Supplier) -> Ordering {
        match self {
            Self::SupplierName => compare_text(&left.supplier_name, &right.supplier_name),
            Self::SupplierId => left.supplier_id.cmp(&right.supplier_id),
            Self::City => compare_optional(left.city.as_deref(), right.city.as_deref()),
            Self::Country => compare_optional(left.country.as_deref(), right.country.as_deref()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown sort key: {value}")))
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

// Missing values sort last.
fn compare_optional(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => compare_text(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sorter {
    pub key: SortKey,
    pub descending: bool,
}

impl Sorter {
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            descending: false,
        }
    }
}

/// Filter applied to the list binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Case-insensitive substring match on the supplier name.
    NameContains(String),
    /// Case-insensitive exact match on the country.
    CountryEquals(String),
}

impl ListFilter {
    fn matches(&self, supplier: &Supplier) -> bool {
        match self {
            Self::NameContains(query) => supplier
                .supplier_name
                .to_lowercase()
                .contains(&query.trim().to_lowercase()),
            Self::CountryEquals(country) => supplier
                .country
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(country.trim())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    None,
    #[default]
    SingleSelectMaster,
    MultiSelect,
}

/// Result of the first list load, as seen by the master route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLoadOutcome {
    Loaded { first_item_path: String },
    NoItems,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct SupplierList {
    source: Vec<Supplier>,
    visible: Vec<usize>,
    filters: Vec<ListFilter>,
    sorter: Sorter,
    mode: ListMode,
    selected_path: Option<String>,
    checked: BTreeSet<SupplierId>,
    load_failed: bool,
    refresh_count: u64,
    busy_indicator_delay: u32,
}

impl SupplierList {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        let mut list = Self {
            source: suppliers,
            ..Self::default()
        };
        list.apply();
        list
    }

    /// Replace the bound data, keeping filter, sort, and selection state.
    pub fn replace_items(&mut self, suppliers: Vec<Supplier>) {
        self.source = suppliers;
        self.load_failed = false;
        self.checked
            .retain(|id| self.source.iter().any(|supplier| &supplier.supplier_id == id));
        self.apply();
    }

    pub fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    /// Visible items in display order.
    pub fn items(&self) -> Vec<&Supplier> {
        self.visible.iter().map(|&index| &self.source[index]).collect()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether the item count is known in full; client-side data always is.
    pub const fn is_length_final(&self) -> bool {
        true
    }

    pub fn filters(&self) -> &[ListFilter] {
        &self.filters
    }

    pub fn filter(&mut self, filters: Vec<ListFilter>) {
        self.filters = filters;
        self.apply();
    }

    pub const fn sorter(&self) -> Sorter {
        self.sorter
    }

    pub fn sort(&mut self, sorter: Sorter) {
        self.sorter = sorter;
        self.apply();
    }

    /// Re-apply filters and sorting to the current data.
    pub fn refresh(&mut self) {
        self.refresh_count += 1;
        self.apply();
    }

    pub const fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub const fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ListMode) {
        self.mode = mode;
    }

    pub const fn busy_indicator_delay(&self) -> u32 {
        self.busy_indicator_delay
    }

    pub fn set_busy_indicator_delay(&mut self, delay: u32) {
        self.busy_indicator_delay = delay;
    }

    /// Visible item bound to `path`.
    pub fn find_item(&self, path: &str) -> Option<&Supplier> {
        self.items()
            .into_iter()
            .find(|supplier| supplier.binding_path() == path)
    }

    pub fn first_item(&self) -> Option<&Supplier> {
        self.visible.first().map(|&index| &self.source[index])
    }

    /// Select the visible item bound to `path`.
    pub fn select(&mut self, path: &str) -> bool {
        if self.find_item(path).is_none() {
            return false;
        }
        self.selected_path = Some(path.to_string());
        true
    }

    pub fn selected_item(&self) -> Option<&Supplier> {
        self.selected_path
            .as_deref()
            .and_then(|path| self.find_item(path))
    }

    pub fn remove_selections(&mut self) {
        self.selected_path = None;
    }

    /// Mark a supplier as wanting a Mobile Card.
    pub fn check(&mut self, supplier_id: &SupplierId) -> bool {
        if self
            .source
            .iter()
            .any(|supplier| &supplier.supplier_id == supplier_id)
        {
            self.checked.insert(supplier_id.clone());
            true
        } else {
            false
        }
    }

    pub fn uncheck(&mut self, supplier_id: &SupplierId) {
        self.checked.remove(supplier_id);
    }

    pub fn check_all(&mut self) {
        self.checked = self
            .source
            .iter()
            .map(|supplier| supplier.supplier_id.clone())
            .collect();
    }

    /// Checked suppliers in catalog order, regardless of filters.
    pub fn checked_suppliers(&self) -> Vec<&Supplier> {
        self.source
            .iter()
            .filter(|supplier| self.checked.contains(&supplier.supplier_id))
            .collect()
    }

    pub fn loading_outcome(&self) -> ListLoadOutcome {
        if self.load_failed {
            return ListLoadOutcome::Failed;
        }
        self.first_item()
            .map_or(ListLoadOutcome::NoItems, |supplier| ListLoadOutcome::Loaded {
                first_item_path: supplier.binding_path(),
            })
    }

    fn apply(&mut self) {
        let mut visible = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, supplier)| self.filters.iter().all(|filter| filter.matches(supplier)))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();

        let sorter = self.sorter;
        visible.sort_by(|&left, &right| {
            let ordering = sorter.key.compare(&self.source[left], &self.source[right]);
            if sorter.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        self.visible = visible;

        if self.selected_item().is_none() {
            self.selected_path = None;
        }
    }
}
