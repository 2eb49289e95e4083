// Controller configuration

/// Page sizes offered by every list screen
pub const PAGE_SIZES: [u32; 4] = [5, 10, 25, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const DEFAULT_SORT: &str = "id";

/// Which of several overlapping `load()` responses ends up on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Every response is applied as it arrives; the slowest one wins
    #[default]
    LastToResolve,
    /// Only the response of the most recently issued load is applied
    LatestRequest,
}

/// What to show when a reload lands past the last page, e.g. after deleting
/// the only record of the last page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPagePolicy {
    /// Show the empty content as returned
    #[default]
    Keep,
    /// Reload once at the clamped page index
    StepBack,
}

/// Configuration of one paginated controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    pub page_size: u32,
    pub allowed_page_sizes: Vec<u32>,
    pub sort: Option<String>,
    pub ordering: ResponseOrdering,
    pub empty_page: EmptyPagePolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            allowed_page_sizes: PAGE_SIZES.to_vec(),
            sort: Some(DEFAULT_SORT.to_string()),
            ordering: ResponseOrdering::default(),
            empty_page: EmptyPagePolicy::default(),
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    pub fn with_sort(mut self, sort: Option<&str>) -> Self {
        self.sort = sort.map(str::to_string);
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_empty_page_policy(mut self, policy: EmptyPagePolicy) -> Self {
        self.empty_page = policy;
        self
    }

    pub fn is_allowed_page_size(&self, size: u32) -> bool {
        size > 0 && self.allowed_page_sizes.contains(&size)
    }

    /// `page_size` if it is allowed, otherwise the default size, otherwise the
    /// first allowed size
    pub fn effective_page_size(&self) -> u32 {
        if self.is_allowed_page_size(self.page_size) {
            return self.page_size;
        }
        if self.is_allowed_page_size(DEFAULT_PAGE_SIZE) {
            return DEFAULT_PAGE_SIZE;
        }
        self.allowed_page_sizes
            .iter()
            .copied()
            .find(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
