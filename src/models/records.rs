//! Academic entity records served by the listing endpoints.
//!
//! Each record type carries a `schema()` describing how the query pipeline
//! reads it: filterable fields, searchable fields and the default ordering.
//! `semester` is an integer end-to-end; filters compare it through its
//! decimal string form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{FieldAccessor, ResourceSchema, SortKey, SortSpec, SortValue};

// == Event ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: EventStatus,
    pub category: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

fn event_status(e: &Event) -> String {
    e.status.as_str().to_string()
}

fn event_category(e: &Event) -> String {
    e.category.clone()
}

fn event_featured(e: &Event) -> String {
    e.featured.to_string()
}

fn event_title(e: &Event) -> String {
    e.title.clone()
}

fn event_description(e: &Event) -> String {
    e.description.clone()
}

const EVENT_FILTER_FIELDS: &[(&str, FieldAccessor<Event>)] = &[
    ("status", event_status),
    ("category", event_category),
    ("featured", event_featured),
];

const EVENT_SEARCH_FIELDS: &[FieldAccessor<Event>] =
    &[event_title, event_description, event_category];

impl Event {
    /// Featured events first, then soonest date, newest record on full ties.
    pub fn schema() -> ResourceSchema<Event> {
        ResourceSchema {
            items_key: "events",
            filter_fields: EVENT_FILTER_FIELDS,
            search_fields: EVENT_SEARCH_FIELDS,
            default_sort: SortSpec::new(vec![
                SortKey::desc(|e: &Event| SortValue::Bool(e.featured)),
                SortKey::asc(|e: &Event| SortValue::Int(e.date.timestamp())),
                SortKey::desc(|e: &Event| SortValue::Int(e.created_at.timestamp())),
            ]),
        }
    }
}

// == Note ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub semester: u8,
    pub year: String,
    /// Material kind (e.g. "lecture", "lab", "reference"); exposed as the
    /// `type` query parameter.
    pub kind: String,
    pub downloads: u32,
    pub created_at: DateTime<Utc>,
}

fn note_subject(n: &Note) -> String {
    n.subject.clone()
}

fn note_semester(n: &Note) -> String {
    n.semester.to_string()
}

fn note_year(n: &Note) -> String {
    n.year.clone()
}

fn note_kind(n: &Note) -> String {
    n.kind.clone()
}

fn note_title(n: &Note) -> String {
    n.title.clone()
}

const NOTE_FILTER_FIELDS: &[(&str, FieldAccessor<Note>)] = &[
    ("subject", note_subject),
    ("semester", note_semester),
    ("year", note_year),
    ("type", note_kind),
];

const NOTE_SEARCH_FIELDS: &[FieldAccessor<Note>] = &[note_title, note_subject];

impl Note {
    /// Newest upload first.
    pub fn schema() -> ResourceSchema<Note> {
        ResourceSchema {
            items_key: "notes",
            filter_fields: NOTE_FILTER_FIELDS,
            search_fields: NOTE_SEARCH_FIELDS,
            default_sort: SortSpec::new(vec![SortKey::desc(|n: &Note| {
                SortValue::Int(n.created_at.timestamp())
            })]),
        }
    }
}

// == Question Paper ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPaper {
    pub id: u32,
    pub subject_name: String,
    pub exam_type: String,
    pub semester: u8,
    pub year: String,
    pub downloads: u32,
    pub created_at: DateTime<Utc>,
}

fn paper_exam_type(p: &QuestionPaper) -> String {
    p.exam_type.clone()
}

fn paper_semester(p: &QuestionPaper) -> String {
    p.semester.to_string()
}

fn paper_year(p: &QuestionPaper) -> String {
    p.year.clone()
}

fn paper_subject(p: &QuestionPaper) -> String {
    p.subject_name.clone()
}

const PAPER_FILTER_FIELDS: &[(&str, FieldAccessor<QuestionPaper>)] = &[
    ("type", paper_exam_type),
    ("semester", paper_semester),
    ("year", paper_year),
];

const PAPER_SEARCH_FIELDS: &[FieldAccessor<QuestionPaper>] = &[paper_subject];

impl QuestionPaper {
    /// Newest paper first.
    pub fn schema() -> ResourceSchema<QuestionPaper> {
        ResourceSchema {
            items_key: "questionPapers",
            filter_fields: PAPER_FILTER_FIELDS,
            search_fields: PAPER_SEARCH_FIELDS,
            default_sort: SortSpec::new(vec![SortKey::desc(|p: &QuestionPaper| {
                SortValue::Int(p.created_at.timestamp())
            })]),
        }
    }
}

// == Announcement ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub target_audience: String,
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fixed total order: High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric rank used for ordering; higher means more urgent.
    pub fn rank(&self) -> i64 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

fn announcement_priority(a: &Announcement) -> String {
    a.priority.as_str().to_string()
}

fn announcement_audience(a: &Announcement) -> String {
    a.target_audience.clone()
}

fn announcement_active(a: &Announcement) -> String {
    a.is_active.to_string()
}

fn announcement_title(a: &Announcement) -> String {
    a.title.clone()
}

const ANNOUNCEMENT_FILTER_FIELDS: &[(&str, FieldAccessor<Announcement>)] = &[
    ("priority", announcement_priority),
    ("audience", announcement_audience),
    ("active", announcement_active),
];

const ANNOUNCEMENT_SEARCH_FIELDS: &[FieldAccessor<Announcement>] = &[announcement_title];

impl Announcement {
    /// Highest priority first, most recent first within a priority.
    pub fn schema() -> ResourceSchema<Announcement> {
        ResourceSchema {
            items_key: "announcements",
            filter_fields: ANNOUNCEMENT_FILTER_FIELDS,
            search_fields: ANNOUNCEMENT_SEARCH_FIELDS,
            default_sort: SortSpec::new(vec![
                SortKey::desc(|a: &Announcement| SortValue::Int(a.priority.rank())),
                SortKey::desc(|a: &Announcement| SortValue::Int(a.created_at.timestamp())),
            ]),
        }
    }
}
