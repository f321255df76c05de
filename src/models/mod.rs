//! Domain records and response models for the portal list API
//!
//! Records are the academic entities the pipeline is exercised against;
//! responses are the DTOs serialized onto the wire.

pub mod records;
pub mod responses;

// Re-export commonly used types
pub use records::{Announcement, Event, EventStatus, Note, Priority, QuestionPaper};
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, ListEnvelope};
