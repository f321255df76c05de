//! Demo Datasets
//!
//! Seed records for the in-memory stores, standing in for real persistence.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Announcement, Event, EventStatus, Note, Priority, QuestionPaper};

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("valid seed timestamp")
}

/// Demo events across statuses and categories.
pub fn events() -> Vec<Event> {
    let mk = |id, title: &str, description: &str, date, status, category: &str, featured, created| {
        Event {
            id,
            title: title.to_string(),
            description: description.to_string(),
            date,
            status,
            category: category.to_string(),
            featured,
            created_at: created,
        }
    };

    vec![
        mk(
            1,
            "TechVista 2026",
            "Annual technical symposium with paper presentations and coding contests",
            ts(2026, 3, 14),
            EventStatus::Upcoming,
            "technical",
            true,
            ts(2025, 12, 1),
        ),
        mk(
            2,
            "Alumni Interaction Session",
            "Graduates from the 2018 batch share industry experience",
            ts(2026, 1, 20),
            EventStatus::Upcoming,
            "seminar",
            false,
            ts(2025, 11, 18),
        ),
        mk(
            3,
            "Winter Hackathon",
            "24-hour build sprint on open problem statements",
            ts(2025, 12, 19),
            EventStatus::Ongoing,
            "technical",
            true,
            ts(2025, 10, 30),
        ),
        mk(
            4,
            "Cultural Night",
            "Music and drama performances by department clubs",
            ts(2025, 11, 8),
            EventStatus::Completed,
            "cultural",
            false,
            ts(2025, 9, 25),
        ),
        mk(
            5,
            "Inter-Department Cricket Cup",
            "Knockout tournament on the main ground",
            ts(2025, 10, 12),
            EventStatus::Completed,
            "sports",
            false,
            ts(2025, 9, 2),
        ),
        mk(
            6,
            "Guest Lecture: Distributed Systems",
            "Invited talk on consensus protocols in production",
            ts(2026, 2, 5),
            EventStatus::Upcoming,
            "seminar",
            false,
            ts(2025, 12, 10),
        ),
        mk(
            7,
            "Robotics Workshop",
            "Hands-on session with line followers and manipulators",
            ts(2025, 9, 15),
            EventStatus::Cancelled,
            "technical",
            false,
            ts(2025, 8, 1),
        ),
        mk(
            8,
            "Project Expo",
            "Final-year project demonstrations open to all semesters",
            ts(2026, 4, 22),
            EventStatus::Upcoming,
            "technical",
            false,
            ts(2025, 12, 15),
        ),
    ]
}

/// Demo lecture notes across subjects and semesters.
pub fn notes() -> Vec<Note> {
    let mk = |id, title: &str, subject: &str, semester, year: &str, kind: &str, downloads, created| {
        Note {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            semester,
            year: year.to_string(),
            kind: kind.to_string(),
            downloads,
            created_at: created,
        }
    };

    vec![
        mk(
            1,
            "Unit 1: OSI and TCP/IP Models",
            "Computer Networks",
            5,
            "2025",
            "lecture",
            321,
            ts(2025, 8, 4),
        ),
        mk(
            2,
            "Unit 3: Transport Layer",
            "Computer Networks",
            5,
            "2025",
            "lecture",
            287,
            ts(2025, 9, 12),
        ),
        mk(
            3,
            "Trees and Graphs Workbook",
            "Data Structures",
            3,
            "2025",
            "reference",
            540,
            ts(2025, 7, 21),
        ),
        mk(
            4,
            "Socket Programming Lab Manual",
            "Computer Networks",
            5,
            "2024",
            "lab",
            198,
            ts(2024, 8, 30),
        ),
        mk(
            5,
            "Normalization Notes",
            "Database Systems",
            4,
            "2025",
            "lecture",
            412,
            ts(2025, 8, 18),
        ),
        mk(
            6,
            "Process Scheduling Summary",
            "Operating Systems",
            4,
            "2025",
            "lecture",
            365,
            ts(2025, 9, 2),
        ),
        mk(
            7,
            "Dynamic Programming Problem Set",
            "Algorithms",
            6,
            "2025",
            "reference",
            275,
            ts(2025, 10, 5),
        ),
        mk(
            8,
            "DBMS Lab Exercises",
            "Database Systems",
            4,
            "2024",
            "lab",
            156,
            ts(2024, 9, 14),
        ),
    ]
}

/// Demo question papers across exam types and years.
pub fn question_papers() -> Vec<QuestionPaper> {
    let mk = |id, subject: &str, exam_type: &str, semester, year: &str, downloads, created| {
        QuestionPaper {
            id,
            subject_name: subject.to_string(),
            exam_type: exam_type.to_string(),
            semester,
            year: year.to_string(),
            downloads,
            created_at: created,
        }
    };

    vec![
        mk(1, "Computer Networks", "endsem", 5, "2024", 612, ts(2024, 12, 20)),
        mk(2, "Computer Networks", "midsem", 5, "2024", 433, ts(2024, 10, 8)),
        mk(3, "Data Structures", "endsem", 3, "2024", 721, ts(2024, 12, 18)),
        mk(4, "Database Systems", "endsem", 4, "2023", 389, ts(2023, 12, 22)),
        mk(5, "Operating Systems", "midsem", 4, "2024", 298, ts(2024, 10, 10)),
        mk(6, "Algorithms", "endsem", 6, "2024", 455, ts(2024, 12, 19)),
        mk(7, "Database Systems", "midsem", 4, "2024", 244, ts(2024, 10, 9)),
    ]
}

/// Demo announcements across priorities and audiences.
pub fn announcements() -> Vec<Announcement> {
    let mk = |id, title: &str, priority, audience: &str, active, start, end, created| {
        Announcement {
            id,
            title: title.to_string(),
            priority,
            target_audience: audience.to_string(),
            is_active: active,
            start_date: start,
            end_date: end,
            created_at: created,
        }
    };

    vec![
        mk(
            1,
            "End-semester exam timetable published",
            Priority::High,
            "students",
            true,
            ts(2025, 11, 20),
            ts(2025, 12, 20),
            ts(2025, 11, 20),
        ),
        mk(
            2,
            "Library closed for stock verification",
            Priority::Medium,
            "all",
            true,
            ts(2025, 12, 1),
            ts(2025, 12, 5),
            ts(2025, 11, 25),
        ),
        mk(
            3,
            "Scholarship application window open",
            Priority::High,
            "students",
            true,
            ts(2025, 12, 2),
            ts(2026, 1, 15),
            ts(2025, 12, 2),
        ),
        mk(
            4,
            "Faculty meeting rescheduled",
            Priority::Low,
            "faculty",
            true,
            ts(2025, 12, 8),
            ts(2025, 12, 9),
            ts(2025, 12, 6),
        ),
        mk(
            5,
            "Old hostel wing maintenance notice",
            Priority::Low,
            "students",
            false,
            ts(2025, 9, 1),
            ts(2025, 9, 15),
            ts(2025, 8, 28),
        ),
        mk(
            6,
            "Revised lab safety guidelines",
            Priority::Medium,
            "all",
            true,
            ts(2025, 10, 10),
            ts(2026, 3, 31),
            ts(2025, 10, 10),
        ),
    ]
}
