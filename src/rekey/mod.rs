// In: src/rekey/mod.rs

//! Offline re-keying of stored submissions.
//!
//! Every published entry is keyed by the canonical ID of its contents, so two
//! submissions of the same spelling (in either codebook version) collapse onto
//! one key. Votes cast against submitter-side IDs are resolved through the same
//! mapping.

pub mod aggregate;
pub mod model;

pub use aggregate::{aggregate, file_name_timestamp, load_submission_dir};
pub use model::{
    AggregateOutput, Author, Entry, PublishedEntry, Submission, SubmissionFile, Term, TermRecord,
    Vote, VoteIndex, VoteRecord, VoteType,
};
