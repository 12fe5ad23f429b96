//! Change reconciliation and highlight segmentation
//!
//! Given a revised document and an unordered set of change records, each
//! naming a fragment of the revised text, its original fragment and a
//! rationale, this crate carves the document into an ordered sequence of
//! unchanged and changed segments ready for presentation.
//!
//! The output always reconstructs the document exactly, changed spans never
//! overlap, and permuting the change records does not alter the segments.
//! Records that cannot be placed are dropped rather than treated as errors.
//!
//! # Example
//!
//! ```rust
//! use revmark_core::{reconcile, ChangeRecord};
//!
//! let document = "Rain fell hard yesterday.";
//! let records = vec![ChangeRecord::new("a lot", "hard", "intensity")];
//!
//! let segments = reconcile(document, &records).unwrap();
//! let texts: Vec<_> = segments.iter().map(|s| s.text).collect();
//! assert_eq!(texts, ["Rain fell ", "hard", " yesterday."]);
//! assert_eq!(segments[1].change_info().unwrap().original_fragment, "a lot");
//! ```

pub mod batch;
pub mod error;
pub mod matcher;
pub mod output;
pub mod segmenter;
pub mod types;

pub use batch::Job;
#[cfg(feature = "parallel")]
pub use batch::{reconcile_batch, reconcile_batch_with};
pub use error::{ReconcileError, Result};
pub use matcher::{FragmentMatcher, LiteralMatcher};
pub use output::{DropReason, DroppedRecord, ReconcileStats, Reconciliation};
pub use segmenter::{reconcile, Segmenter};
pub use types::{ChangeInfo, ChangeRecord, Segment, SegmentKind, Span};
