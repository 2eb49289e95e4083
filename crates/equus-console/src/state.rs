// Controller state and its read-only snapshot

/// One-based range of the records shown on the current page, as
/// `(start_item, end_item)`. Both are 0 when there are no records or when
/// the page lies past the last record.
pub fn item_range(current_page: u32, page_size: u32, total_elements: u64) -> (u64, u64) {
    let offset = u64::from(current_page) * u64::from(page_size);
    if offset >= total_elements {
        return (0, 0);
    }

    let start = offset + 1;
    let end = (offset + u64::from(page_size)).min(total_elements);
    (start, end)
}

/// Mutable state owned by one controller
#[derive(Debug)]
pub(crate) struct State<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub error: Option<String>,
    pub search_term: String,
    pub filters: Vec<(String, String)>,
}

impl<T> State<T> {
    pub fn new(page_size: u32, filters: Vec<(String, String)>) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            current_page: 0,
            page_size,
            error: None,
            search_term: String::new(),
            filters,
        }
    }

    /// Highest valid page index
    pub fn last_page(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }
}

/// Read-only view of a controller handed to the presentation layer
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerState<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filtered_content: Vec<T>,
}

impl<T> ControllerState<T> {
    pub fn start_item(&self) -> u64 {
        item_range(self.current_page, self.page_size, self.total_elements).0
    }

    pub fn end_item(&self) -> u64 {
        item_range(self.current_page, self.page_size, self.total_elements).1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    /// Footer line of the list screens
    pub fn range_label(&self) -> String {
        format!(
            "Mostrando {} - {} de {}",
            self.start_item(),
            self.end_item(),
            self.total_elements
        )
    }
}
