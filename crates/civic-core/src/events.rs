//! Event Emission Layer
//!
//! Components never perform side effects. A gesture becomes an [`Intent`]
//! handed to an [`IntentSink`]; the parent decides what actually happens.

use serde::{Deserialize, Serialize};

use crate::field::FormValues;

pub type ItemId = u64;

/// Action that needs an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Vote,
    Support,
    Join,
    Invest,
    Contact,
    Comment,
    Reply,
    Submit,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Vote => "vote",
            Action::Support => "support",
            Action::Join => "join",
            Action::Invest => "invest",
            Action::Contact => "contact",
            Action::Comment => "comment",
            Action::Reply => "reply",
            Action::Submit => "submit",
        }
    }
}

/// Direction of an up/down vote. Neutral withdraws a previous vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
    #[default]
    Neutral,
}

impl VoteDirection {
    /// Contribution to a score
    pub fn weight(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
            VoteDirection::Neutral => 0,
        }
    }
}

/// Outbound notification asking a collaborator to perform a change
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Intent {
    Submit(FormValues),
    Cancel,
    SaveDraft(FormValues),
    Vote { id: ItemId, direction: VoteDirection },
    Support { id: ItemId },
    Join { id: ItemId },
    Leave { id: ItemId },
    Invest { id: ItemId, amount: f64 },
    Contact { id: ItemId },
    Edit { id: ItemId, content: String },
    Delete { id: ItemId },
    Reply { parent: Option<ItemId>, content: String },
    Resend,
    ValidateCode(String),
    SendVerificationCode { phone: String },
    SearchChange(String),
    FilterChange { dimension: String, value: String },
    SortChange(String),
    PageChange(usize),
    /// 1-based step number
    StepChange(usize),
    LoadMore,
    LoginRequired(Action),
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Submit(_) => "submit",
            Intent::Cancel => "cancel",
            Intent::SaveDraft(_) => "save-draft",
            Intent::Vote { .. } => "vote",
            Intent::Support { .. } => "support",
            Intent::Join { .. } => "join",
            Intent::Leave { .. } => "leave",
            Intent::Invest { .. } => "invest",
            Intent::Contact { .. } => "contact",
            Intent::Edit { .. } => "edit",
            Intent::Delete { .. } => "delete",
            Intent::Reply { .. } => "reply",
            Intent::Resend => "resend",
            Intent::ValidateCode(_) => "validate-code",
            Intent::SendVerificationCode { .. } => "send-verification-code",
            Intent::SearchChange(_) => "search-change",
            Intent::FilterChange { .. } => "filter-change",
            Intent::SortChange(_) => "sort-change",
            Intent::PageChange(_) => "page-change",
            Intent::StepChange(_) => "step-change",
            Intent::LoadMore => "load-more",
            Intent::LoginRequired(_) => "login-required",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Receiver of intents
pub trait IntentSink {
    fn emit(&mut self, intent: Intent);
}

impl IntentSink for Vec<Intent> {
    fn emit(&mut self, intent: Intent) {
        self.push(intent);
    }
}

impl<F: FnMut(Intent)> IntentSink for F {
    fn emit(&mut self, intent: Intent) {
        self(intent)
    }
}

/// Forward an optional intent, logging what went out
pub fn dispatch(sink: &mut impl IntentSink, intent: Option<Intent>) -> bool {
    match intent {
        Some(intent) => {
            log::debug!("emit {}", intent.name());
            sink.emit(intent);
            true
        }
        None => false,
    }
}

/// Checks authentication before any other rule of a gated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthGate {
    pub is_authenticated: bool,
}

impl AuthGate {
    pub fn new(is_authenticated: bool) -> Self {
        Self { is_authenticated }
    }

    /// `LoginRequired(action)` when signed out, else whatever `then` yields
    pub fn guard(&self, action: Action, then: impl FnOnce() -> Option<Intent>) -> Option<Intent> {
        if !self.is_authenticated {
            log::debug!("{} blocked: login required", action.as_str());
            return Some(Intent::LoginRequired(action));
        }
        then()
    }
}

/// Injected confirmation capability for destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Delete after asking the injected capability
pub fn confirm_delete(confirm: &impl Confirm, id: ItemId, message: &str) -> Option<Intent> {
    confirm.confirm(message).then_some(Intent::Delete { id })
}

/// Two-phase inline confirmation: request, then confirm or cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingConfirmation {
    pending: Option<ItemId>,
}

impl PendingConfirmation {
    pub fn request(&mut self, id: ItemId) {
        self.pending = Some(id);
    }

    pub fn is_pending(&self, id: ItemId) -> bool {
        self.pending == Some(id)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Delete for the pending id, if any
    pub fn confirm(&mut self) -> Option<Intent> {
        self.pending.take().map(|id| Intent::Delete { id })
    }
}
