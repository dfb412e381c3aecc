//! Offset pagination with Spring Data style sort expressions.
//!
//! A `sort` value is a comma separated list of properties optionally followed
//! by a direction: `name`, `date,desc`, `name,date,ASC`.

use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;
/// Highest page index, the range of a 32-bit page number. Keeps
/// `page * size` within `u64` for every allowed size.
pub const MAX_PAGE_INDEX: u64 = u32::MAX as u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Case-insensitive `asc` / `desc`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<Direction> for sea_orm::Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => sea_orm::Order::Asc,
            Direction::Desc => sea_orm::Order::Desc,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parses one `sort` query value into one order per property.
    pub fn parse_all(raw: &str) -> Vec<SortOrder> {
        let parts: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let Some((last, init)) = parts.split_last() else {
            return Vec::new();
        };

        let (properties, direction) = match Direction::parse(last) {
            Some(direction) => (init, direction),
            None => (parts.as_slice(), Direction::Asc),
        };

        properties
            .iter()
            .map(|property| SortOrder {
                property: (*property).to_string(),
                direction,
            })
            .collect()
    }
}

/// Zero-based page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// A size of zero falls back to [`DEFAULT_PAGE_SIZE`]; sizes above
    /// [`MAX_PAGE_SIZE`] and pages above [`MAX_PAGE_INDEX`] are capped.
    pub fn new(page: u64, size: u64) -> Self {
        let size = match size {
            0 => DEFAULT_PAGE_SIZE,
            s => s.min(MAX_PAGE_SIZE),
        };
        Self {
            page: page.min(MAX_PAGE_INDEX),
            size,
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the size of the whole collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            size: request.size,
        }
    }

    /// Cuts the requested page out of an already sorted collection.
    pub fn from_sorted(all: Vec<T>, request: &PageRequest) -> Self {
        let total = all.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let items = all.into_iter().skip(offset).take(size).collect();
        Self::new(items, total, request)
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}

/// Ascending order for optional values with `None` after every value, the
/// PostgreSQL default for `ORDER BY ... ASC`.
pub fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}
