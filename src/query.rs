//! Todo List Query
//!
//! Client-side view over the fetched todos: sort, then date range,
//! then status, then title search.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    DueDate,
    Title,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Sort options offered in the toolbar (value, label)
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("dueDate:asc", "Due Date ↑"),
    ("title:asc", "Title ↑"),
    ("status:asc", "Status ↑"),
    ("dueDate:desc", "Due Date ↓"),
    ("title:desc", "Title ↓"),
    ("status:desc", "Status ↓"),
];

/// Comparison key, computed once per todo; titles compare case-insensitively,
/// then by exact text
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<'a> {
    Due(DateTime<Utc>),
    Title(String, &'a str),
    Status(u8),
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse a toolbar value such as `title:desc`
    pub fn parse(value: &str) -> Option<Self> {
        let (field, direction) = value.split_once(':')?;
        let field = match field {
            "dueDate" => SortField::DueDate,
            "title" => SortField::Title,
            "status" => SortField::Status,
            _ => return None,
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return None,
        };
        Some(Self { field, direction })
    }

    fn key<'a>(&self, todo: &'a Todo) -> SortKey<'a> {
        match self.field {
            SortField::DueDate => SortKey::Due(todo.due_date),
            SortField::Title => SortKey::Title(todo.title.to_lowercase(), &todo.title),
            SortField::Status => SortKey::Status(u8::from(todo.status)),
        }
    }

    fn orient(&self, ordering: Ordering) -> Ordering {
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => StatusFilter::Active,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !todo.status,
            StatusFilter::Completed => todo.status,
        }
    }
}

/// Inclusive due-date window; `None` bounds are open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Whole-day range in `zone`: start of `from` to end of `to`
    pub fn from_days(from: Option<NaiveDate>, to: Option<NaiveDate>, zone: &impl DayOffset) -> Self {
        Self {
            start: from.and_then(|day| start_of_day(day, zone)),
            end: to.and_then(|day| end_of_day(day, zone)),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| at >= start) && self.end.map_or(true, |end| at <= end)
    }
}

/// UTC offset in effect at local midnight of a day
pub trait DayOffset {
    fn offset_on(&self, day: NaiveDate) -> FixedOffset;
}

/// A zone without daylight saving
impl DayOffset for FixedOffset {
    fn offset_on(&self, _day: NaiveDate) -> FixedOffset {
        *self
    }
}

pub fn start_of_day(day: NaiveDate, zone: &impl DayOffset) -> Option<DateTime<Utc>> {
    let naive = day.and_hms_opt(0, 0, 0)?;
    zone.offset_on(day)
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Last millisecond of `day`, just before the next local midnight
pub fn end_of_day(day: NaiveDate, zone: &impl DayOffset) -> Option<DateTime<Utc>> {
    let next = day.succ_opt()?;
    start_of_day(next, zone).map(|start| start - Duration::milliseconds(1))
}

/// Everything the toolbar controls
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoQuery {
    pub sort: Option<SortOrder>,
    pub range: DateRange,
    pub status: StatusFilter,
    pub search: String,
}

/// Derive the visible list: sort, date range, status, then title search
pub fn apply(todos: &[Todo], query: &TodoQuery) -> Vec<Todo> {
    let sorted: Vec<&Todo> = match query.sort {
        Some(order) => {
            let mut keyed: Vec<(SortKey, &Todo)> = todos.iter().map(|todo| (order.key(todo), todo)).collect();
            // stable: equal keys keep fetch order
            keyed.sort_by(|(a, _), (b, _)| order.orient(a.cmp(b)));
            keyed.into_iter().map(|(_, todo)| todo).collect()
        }
        None => todos.iter().collect(),
    };

    let needle = query.search.to_lowercase();
    sorted
        .into_iter()
        .filter(|todo| query.range.contains(todo.due_date))
        .filter(|todo| query.status.matches(todo))
        .filter(|todo| needle.is_empty() || todo.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_todo(id: &str, title: &str, due: &str, status: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("Description {}", id),
            status,
            due_date: crate::models::timestamp::parse(due).unwrap(),
            updated_at: None,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo("1", "Test Todo 1", "2023-10-01", true),
            make_todo("2", "Test Todo 2", "2023-10-02", false),
        ]
    }

    #[test]
    fn test_search_exact_title_yields_one() {
        let query = TodoQuery {
            search: "Test Todo 1".to_string(),
            ..Default::default()
        };
        let result = apply(&sample(), &query);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_title_only() {
        let todos = sample();
        let query = TodoQuery {
            search: "test todo".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&todos, &query).len(), 2);

        // "Description" appears only in descriptions
        let query = TodoQuery {
            search: "description".to_string(),
            ..Default::default()
        };
        assert!(apply(&todos, &query).is_empty());
    }

    #[test]
    fn test_no_query_keeps_input_order() {
        let todos = vec![
            make_todo("b", "B", "2023-10-05", false),
            make_todo("a", "A", "2023-10-01", false),
        ];
        assert_eq!(ids(&apply(&todos, &TodoQuery::default())), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_by_due_date_both_directions() {
        let todos = vec![
            make_todo("2", "b", "2023-10-02", false),
            make_todo("3", "c", "2023-10-03", false),
            make_todo("1", "a", "2023-10-01", false),
        ];
        let asc = TodoQuery {
            sort: Some(SortOrder::new(SortField::DueDate, SortDirection::Ascending)),
            ..Default::default()
        };
        let desc = TodoQuery {
            sort: Some(SortOrder::new(SortField::DueDate, SortDirection::Descending)),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&todos, &asc)), vec!["1", "2", "3"]);
        assert_eq!(ids(&apply(&todos, &desc)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let todos = vec![
            make_todo("1", "banana", "2023-10-01", false),
            make_todo("2", "Apple", "2023-10-01", false),
            make_todo("3", "cherry", "2023-10-01", false),
        ];
        let query = TodoQuery {
            sort: Some(SortOrder::new(SortField::Title, SortDirection::Ascending)),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&todos, &query)), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_by_status_is_stable_in_both_directions() {
        let todos = vec![
            make_todo("1", "a", "2023-10-01", true),
            make_todo("2", "b", "2023-10-01", false),
            make_todo("3", "c", "2023-10-01", true),
            make_todo("4", "d", "2023-10-01", false),
        ];
        let asc = TodoQuery {
            sort: Some(SortOrder::new(SortField::Status, SortDirection::Ascending)),
            ..Default::default()
        };
        let desc = TodoQuery {
            sort: Some(SortOrder::new(SortField::Status, SortDirection::Descending)),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&todos, &asc)), vec!["2", "4", "1", "3"]);
        assert_eq!(ids(&apply(&todos, &desc)), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_date_range_end_of_day_inclusive() {
        let todos = vec![
            make_todo("1", "start", "2023-10-01T00:00:00Z", false),
            make_todo("2", "late", "2023-10-02T23:59:59Z", false),
            make_todo("3", "after", "2023-10-03T00:00:00Z", false),
            make_todo("4", "before", "2023-09-30T23:59:59Z", false),
        ];
        let range = DateRange::from_days(
            NaiveDate::from_ymd_opt(2023, 10, 1),
            NaiveDate::from_ymd_opt(2023, 10, 2),
            &utc(),
        );
        let query = TodoQuery { range, ..Default::default() };
        assert_eq!(ids(&apply(&todos, &query)), vec!["1", "2"]);
    }

    #[test]
    fn test_date_range_honours_offset() {
        // 2023-10-02 23:30 at UTC+2 is 21:30 UTC the same day
        let todos = vec![make_todo("1", "evening", "2023-10-02T21:30:00Z", false)];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let range = DateRange::from_days(None, NaiveDate::from_ymd_opt(2023, 10, 2), &plus_two);
        let query = TodoQuery { range, ..Default::default() };
        assert_eq!(apply(&todos, &query).len(), 1);

        let range = DateRange::from_days(None, NaiveDate::from_ymd_opt(2023, 10, 1), &plus_two);
        let query = TodoQuery { range, ..Default::default() };
        assert!(apply(&todos, &query).is_empty());
    }

    /// +01:00 in winter, +02:00 from April to October
    struct CentralEurope;

    impl DayOffset for CentralEurope {
        fn offset_on(&self, day: NaiveDate) -> FixedOffset {
            let hours = if (4..=10).contains(&day.month()) { 2 } else { 1 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    #[test]
    fn test_date_range_uses_offset_of_each_day() {
        // 00:30 local on 07-15 and 07-16, summer time
        let todos = vec![
            make_todo("1", "early", "2023-07-14T22:30:00Z", false),
            make_todo("2", "next day", "2023-07-15T22:30:00Z", false),
        ];
        let range = DateRange::from_days(
            NaiveDate::from_ymd_opt(2023, 7, 15),
            NaiveDate::from_ymd_opt(2023, 7, 15),
            &CentralEurope,
        );
        let query = TodoQuery { range, ..Default::default() };
        assert_eq!(ids(&apply(&todos, &query)), vec!["1"]);
    }

    #[test]
    fn test_range_across_clock_change() {
        // last day of summer time to first full day of winter time
        let range = DateRange::from_days(
            NaiveDate::from_ymd_opt(2023, 10, 31),
            NaiveDate::from_ymd_opt(2023, 11, 1),
            &CentralEurope,
        );
        assert_eq!(range.start, crate::models::timestamp::parse("2023-10-30T22:00:00Z"));
        assert_eq!(range.end, crate::models::timestamp::parse("2023-11-01T22:59:59.999Z"));
    }

    #[test]
    fn test_open_ended_ranges() {
        let todos = sample();
        let only_start = DateRange::from_days(NaiveDate::from_ymd_opt(2023, 10, 2), None, &utc());
        let query = TodoQuery { range: only_start, ..Default::default() };
        assert_eq!(ids(&apply(&todos, &query)), vec!["2"]);
        assert!(DateRange::default().is_unbounded());
    }

    #[test]
    fn test_status_filter() {
        let todos = sample();
        let active = TodoQuery { status: StatusFilter::Active, ..Default::default() };
        let completed = TodoQuery { status: StatusFilter::Completed, ..Default::default() };
        assert_eq!(ids(&apply(&todos, &active)), vec!["2"]);
        assert_eq!(ids(&apply(&todos, &completed)), vec!["1"]);
    }

    #[test]
    fn test_combined_pipeline() {
        let todos = vec![
            make_todo("1", "Write report", "2023-10-03", false),
            make_todo("2", "write tests", "2023-10-01", false),
            make_todo("3", "Write docs", "2023-10-02", true),
            make_todo("4", "Shop", "2023-10-02", false),
        ];
        let query = TodoQuery {
            sort: Some(SortOrder::new(SortField::DueDate, SortDirection::Descending)),
            range: DateRange::from_days(
                NaiveDate::from_ymd_opt(2023, 10, 1),
                NaiveDate::from_ymd_opt(2023, 10, 3),
                &utc(),
            ),
            status: StatusFilter::Active,
            search: "WRITE".to_string(),
        };
        assert_eq!(ids(&apply(&todos, &query)), vec!["1", "2"]);
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!(
            SortOrder::parse("title:desc"),
            Some(SortOrder::new(SortField::Title, SortDirection::Descending))
        );
        assert_eq!(SortOrder::parse("title"), None);
        assert_eq!(SortOrder::parse("priority:asc"), None);
        assert!(SORT_OPTIONS.iter().all(|(value, _)| SortOrder::parse(value).is_some()));
    }
}
