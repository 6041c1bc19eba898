use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error as ThisError;

/// Maximum number of page-number buttons offered at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported page size {0}, expected one of 15, 25, 50")]
    Unsupported(u32),
    #[error("Page size parse error: {0:?}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Fifteen,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Fifteen, PageSize::TwentyFive, PageSize::Fifty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Fifteen => 15,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        match size {
            15 => Ok(PageSize::Fifteen),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            other => Err(Error::Unsupported(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get() as u32
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::Parse(s.to_string()))?;
        PageSize::try_from(size)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// `ceil(count / page_size)`; an empty collection has no pages.
pub fn page_count(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub page_size: PageSize,
    pub total_pages: usize,
    /// 0-based index of the first item on the page.
    pub start_index: usize,
    /// Exclusive end index, never past `total`.
    pub end_index: usize,
    pub total: usize,
}

/// Slices `filtered` into the requested page. Out-of-range pages are clamped
/// to `[1, max(total_pages, 1)]`.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: PageSize) -> Page<T> {
    let total = filtered.len();
    let total_pages = page_count(total, page_size);
    let page = page.clamp(1, total_pages.max(1));
    let start_index = ((page - 1) * page_size.get()).min(total);
    let end_index = (start_index + page_size.get()).min(total);
    Page {
        items: filtered[start_index..end_index].to_vec(),
        page,
        page_size,
        total_pages,
        start_index,
        end_index,
        total,
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation is only offered when the results overflow a single page.
    pub fn controls(&self) -> Option<PaginationControls> {
        if self.total <= self.page_size.get() {
            return None;
        }
        let buttons = (1..=self.total_pages.min(MAX_PAGE_BUTTONS))
            .map(|number| PageButton {
                number,
                current: number == self.page,
            })
            .collect();
        Some(PaginationControls {
            previous_enabled: self.page > 1,
            next_enabled: self.page < self.total_pages,
            buttons,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub buttons: Vec<PageButton>,
}

impl Display for PaginationControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |enabled: bool, label: &str| {
            if enabled {
                label.to_string()
            } else {
                format!("({label})")
            }
        };
        write!(f, "{}", mark(self.previous_enabled, "Previous"))?;
        for button in &self.buttons {
            if button.current {
                write!(f, " [{}]", button.number)?;
            } else {
                write!(f, " {}", button.number)?;
            }
        }
        write!(f, " {}", mark(self.next_enabled, "Next"))
    }
}
