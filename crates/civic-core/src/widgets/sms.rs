//! SMS code verification

use serde::Serialize;

use crate::events::Intent;
use crate::timer::Countdown;

/// One input box per digit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    digits: Vec<Option<char>>,
}

impl CodeEntry {
    pub fn new(length: usize) -> Self {
        Self {
            digits: vec![None; length],
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.iter().all(Option::is_none)
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.digits.get(index).copied().flatten()
    }

    /// Keep the last digit typed into a box. Returns whether a digit landed,
    /// so the caller can move focus to the next box.
    pub fn set_digit(&mut self, index: usize, input: &str) -> bool {
        let Some(slot) = self.digits.get_mut(index) else {
            return false;
        };
        *slot = input.chars().filter(char::is_ascii_digit).last();
        slot.is_some()
    }

    /// Fill from the first box, skipping anything that is not a digit.
    /// Returns the box to focus afterwards.
    pub fn paste(&mut self, text: &str) -> usize {
        let pasted: Vec<char> = text.chars().filter(char::is_ascii_digit).take(self.len()).collect();
        for (slot, digit) in self.digits.iter_mut().zip(pasted.iter()) {
            *slot = Some(*digit);
        }
        pasted.len().min(self.len().saturating_sub(1))
    }

    /// Backspace in box `index`: clear it, or step back when it is already empty
    pub fn backspace(&mut self, index: usize) -> usize {
        if self.digit(index).is_some() {
            self.digits[index] = None;
            return index;
        }
        let previous = index.saturating_sub(1);
        if let Some(slot) = self.digits.get_mut(previous) {
            *slot = None;
        }
        previous
    }

    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.digits.iter_mut().for_each(|slot| *slot = None);
    }
}

/// Verification status reported back by the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsState {
    #[default]
    Pending,
    Validating,
    Valid,
    Invalid,
    Expired,
}

impl SmsState {
    pub fn as_class(&self) -> &'static str {
        match self {
            SmsState::Pending => "pending",
            SmsState::Validating => "validating",
            SmsState::Valid => "valid",
            SmsState::Invalid => "invalid",
            SmsState::Expired => "expired",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SmsState::Pending => "Ingresa el código recibido",
            SmsState::Validating => "Validando código...",
            SmsState::Valid => "¡Código válido!",
            SmsState::Invalid => "Código incorrecto",
            SmsState::Expired => "Código expirado",
        }
    }
}

/// Code entry plus the resend countdown
#[derive(Debug, Clone, PartialEq)]
pub struct SmsValidator {
    pub entry: CodeEntry,
    countdown: Countdown,
    resend_secs: u64,
    state: SmsState,
    pub disabled: bool,
    pub loading: bool,
}

impl SmsValidator {
    /// The countdown starts as soon as the validator is shown
    pub fn new(code_length: usize, resend_secs: u64, now_ms: u64) -> Self {
        let mut countdown = Countdown::new(resend_secs);
        countdown.start(now_ms);
        Self {
            entry: CodeEntry::new(code_length),
            countdown,
            resend_secs,
            state: SmsState::Pending,
            disabled: false,
            loading: false,
        }
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn state(&self) -> SmsState {
        self.state
    }

    /// A rejected code empties the boxes for a fresh attempt
    pub fn set_state(&mut self, state: SmsState) {
        if state == SmsState::Invalid {
            self.entry.clear();
        }
        self.state = state;
    }

    fn complete_code(&self) -> Option<Intent> {
        self.entry
            .is_complete()
            .then(|| Intent::ValidateCode(self.entry.code()))
    }

    /// Type into one box; the last digit completing the code validates it
    pub fn input(&mut self, index: usize, text: &str) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.entry.set_digit(index, text);
        self.complete_code()
    }

    pub fn paste(&mut self, text: &str) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.entry.paste(text);
        self.complete_code()
    }

    /// Verify button
    pub fn verify(&self) -> Option<Intent> {
        if self.is_inert() {
            return None;
        }
        self.complete_code()
    }

    pub fn can_resend(&self, now_ms: u64) -> bool {
        !self.is_inert() && !self.countdown.is_active(now_ms)
    }

    /// Only once the countdown has run out; restarts it and clears the boxes
    pub fn resend(&mut self, now_ms: u64) -> Option<Intent> {
        if !self.can_resend(now_ms) {
            log::debug!("resend blocked for {}s", self.countdown.remaining_secs(now_ms));
            return None;
        }
        self.countdown.start(now_ms);
        self.entry.clear();
        self.state = SmsState::Pending;
        Some(Intent::Resend)
    }

    pub fn cancel(&self) -> Intent {
        Intent::Cancel
    }

    pub fn countdown_label(&self, now_ms: u64) -> Option<String> {
        self.countdown
            .is_active(now_ms)
            .then(|| self.countdown.label(now_ms))
    }

    pub fn help_text(&self) -> String {
        format!(
            "¿No recibiste el código? Podrás solicitar uno nuevo en {} segundos.",
            self.resend_secs
        )
    }
}
