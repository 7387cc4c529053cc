#![forbid(unsafe_code)]

//! Quick filter chips for the invoice list.
//!
//! A quick filter is a preset [`InvoiceFilter`]. Its chip is highlighted
//! when the list's current filter is exactly that preset: every field the
//! preset sets has the same value, and every field the preset leaves empty
//! is empty. Narrowing the list further (say, by typing a search) therefore
//! turns the chip off.

/// Invoice lifecycle states a list can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Due-date windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueWindow {
    Today,
    ThisWeek,
    ThisMonth,
}

/// Filter applied to the invoice list. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<String>,
    pub search: Option<String>,
    pub due: Option<DueWindow>,
}

impl InvoiceFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    #[must_use]
    pub fn due(mut self, window: DueWindow) -> Self {
        self.due = Some(window);
        self
    }

    /// Copy with blank text fields turned into `None` and the rest trimmed.
    #[must_use]
    pub fn normalized(&self) -> Self {
        fn text(value: Option<&String>) -> Option<String> {
            value
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        }
        Self {
            status: self.status,
            client_id: text(self.client_id.as_ref()),
            search: text(self.search.as_ref()),
            due: self.due,
        }
    }

    /// No field narrows the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized() == Self::default()
    }
}

/// A named preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilter {
    pub id: &'static str,
    pub label: &'static str,
    pub filter: InvoiceFilter,
}

impl QuickFilter {
    pub fn new(id: &'static str, label: &'static str, filter: InvoiceFilter) -> Self {
        Self { id, label, filter }
    }

    /// Whether `current` is exactly this preset.
    #[must_use]
    pub fn is_active(&self, current: &InvoiceFilter) -> bool {
        self.filter.normalized() == current.normalized()
    }
}

/// The chip row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFilters {
    filters: Vec<QuickFilter>,
}

impl QuickFilters {
    pub fn new(filters: Vec<QuickFilter>) -> Self {
        Self { filters }
    }

    /// All, Drafts, Overdue, Paid and Due this week.
    #[must_use]
    pub fn defaults() -> Self {
        Self::new(vec![
            QuickFilter::new("all", "All", InvoiceFilter::new()),
            QuickFilter::new(
                "drafts",
                "Drafts",
                InvoiceFilter::new().status(InvoiceStatus::Draft),
            ),
            QuickFilter::new(
                "overdue",
                "Overdue",
                InvoiceFilter::new().status(InvoiceStatus::Overdue),
            ),
            QuickFilter::new(
                "paid",
                "Paid",
                InvoiceFilter::new().status(InvoiceStatus::Paid),
            ),
            QuickFilter::new(
                "due-this-week",
                "Due this week",
                InvoiceFilter::new().due(DueWindow::ThisWeek),
            ),
        ])
    }

    #[must_use]
    pub fn filters(&self) -> &[QuickFilter] {
        &self.filters
    }

    /// The preset matching `current`, if any.
    #[must_use]
    pub fn active(&self, current: &InvoiceFilter) -> Option<&QuickFilter> {
        self.filters.iter().find(|q| q.is_active(current))
    }

    /// The filter to apply when the chip `id` is tapped.
    #[must_use]
    pub fn apply(&self, id: &str) -> Option<InvoiceFilter> {
        let found = self.filters.iter().find(|q| q.id == id);
        if found.is_none() {
            tracing::debug!(id, "unknown quick filter");
        }
        found.map(|q| q.filter.clone())
    }
}

impl Default for QuickFilters {
    fn default() -> Self {
        Self::defaults()
    }
}
