//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;

use civic_core::events::dispatch;
use civic_core::{AuthGate, FormLimits, Intent, ItemId, ValidationContext};

/// Id of the signed-in demo user
pub const DEMO_USER_ID: ItemId = 950;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether a user is signed in - read
    pub is_authenticated: ReadSignal<bool>,
    /// Whether a user is signed in - write
    set_authenticated: WriteSignal<bool>,
    /// Configured form and list limits
    limits: StoredValue<FormLimits>,
    /// Parent handler receiving every intent
    on_intent: Callback<Intent>,
}

impl AppContext {
    pub fn new(
        is_authenticated: (ReadSignal<bool>, WriteSignal<bool>),
        limits: FormLimits,
        on_intent: Callback<Intent>,
    ) -> Self {
        Self {
            is_authenticated: is_authenticated.0,
            set_authenticated: is_authenticated.1,
            limits: StoredValue::new(limits),
            on_intent,
        }
    }

    pub fn gate(&self) -> AuthGate {
        AuthGate::new(self.is_authenticated.get())
    }

    pub fn toggle_auth(&self) {
        self.set_authenticated.update(|v| *v = !*v);
    }

    pub fn limits(&self) -> FormLimits {
        self.limits.get_value()
    }

    /// Hand an intent to the parent; `false` when there was nothing to send
    pub fn emit(&self, intent: Option<Intent>) -> bool {
        let on_intent = self.on_intent;
        dispatch(&mut |intent: Intent| on_intent.run(intent), intent)
    }

    pub fn validation(&self) -> ValidationContext {
        ValidationContext::new(today())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Milliseconds since the epoch, for the core timers
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
