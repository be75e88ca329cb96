//! Civic Core
//!
//! Framework-free engines behind the civic-ui components:
//! - validation: rule engine, cross-field rules, character counters
//! - field / stepper: form state store and multi-step wizard controller
//! - collection: search, filter, sort and pagination over in-memory lists
//! - comments: bounded-depth comment tree
//! - events: outbound intents, authentication gate, confirmation
//! - timer: clock-driven debounce and countdown
//! - stats: aggregates over microcredit and collaboration lists
//! - forms / widgets / domain: the concrete screens built on the engines
//!
//! Nothing here touches the DOM or performs I/O, so every rule is testable natively.

pub mod collection;
pub mod comments;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod field;
pub mod format;
pub mod forms;
pub mod stats;
pub mod stepper;
pub mod tags;
pub mod timer;
pub mod validation;
pub mod widgets;

pub use config::FormLimits;
pub use error::{DomainError, DomainResult};
pub use events::{Action, AuthGate, Intent, IntentSink, ItemId, VoteDirection};
pub use field::{FieldValue, FormState, FormValues};
pub use forms::FormMode;
pub use stepper::{SteppedForm, StepDefinition, StepStatus};
pub use validation::{Rule, ValidationContext};
