use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::microcredit::{Microcredit, MicrocreditStatus};
use crate::events::{Action, AuthGate, Intent};
use crate::format::{euros, euros_cents};

/// Repayment plan of a loan with fixed monthly installments
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

impl PaymentSummary {
    /// (label, formatted amount) rows of the "Resumen de Pagos" box
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("Pago Mensual", euros_cents(self.monthly_payment)),
            ("Total a Devolver", euros_cents(self.total_repayment)),
            ("Intereses Totales", euros_cents(self.total_interest)),
        ]
    }
}

/// French amortization: `P·r / (1 − (1 + r)^−n)` with `r` the monthly rate.
/// A zero rate splits the principal evenly.
pub fn payment_summary(amount: f64, annual_rate_percent: f64, term_months: u32) -> Option<PaymentSummary> {
    if amount <= 0.0 || term_months == 0 || annual_rate_percent < 0.0 {
        return None;
    }
    let n = term_months as f64;
    let r = annual_rate_percent / 100.0 / 12.0;
    let monthly_payment = if r == 0.0 {
        amount / n
    } else {
        amount * r / (1.0 - (1.0 + r).powf(-n))
    };
    let total_repayment = monthly_payment * n;
    Some(PaymentSummary {
        monthly_payment,
        total_repayment,
        total_interest: total_repayment - amount,
    })
}

/// Invest button and figures of a microcredit card
#[derive(Debug, Clone, Copy)]
pub struct InvestPanel<'a> {
    pub microcredit: &'a Microcredit,
    pub minimum_investment: f64,
    pub has_invested: bool,
    pub disabled: bool,
    pub loading: bool,
}

impl<'a> InvestPanel<'a> {
    pub fn new(microcredit: &'a Microcredit, minimum_investment: f64) -> Self {
        Self {
            microcredit,
            minimum_investment,
            has_invested: false,
            disabled: false,
            loading: false,
        }
    }

    fn is_open(&self) -> bool {
        self.microcredit.status == MicrocreditStatus::Funding && !self.microcredit.is_fully_funded()
    }

    pub fn can_invest(&self) -> bool {
        self.is_open() && !self.disabled && !self.loading
    }

    /// Amount bounds: at least the minimum, at most what is still missing
    pub fn amount_error(&self, amount: f64) -> Option<String> {
        let remaining = self.microcredit.remaining();
        if !amount.is_finite() || amount < self.minimum_investment {
            Some(format!("La inversión mínima es {}", euros(self.minimum_investment)))
        } else if amount > remaining {
            Some(format!("El importe máximo disponible es {}", euros(remaining)))
        } else {
            None
        }
    }

    pub fn invest(&self, gate: AuthGate, amount: f64) -> Option<Intent> {
        if !self.can_invest() {
            return None;
        }
        gate.guard(Action::Invest, || {
            if let Some(error) = self.amount_error(amount) {
                log::debug!("invest in {} rejected: {error}", self.microcredit.id);
                return None;
            }
            Some(Intent::Invest {
                id: self.microcredit.id,
                amount,
            })
        })
    }

    pub fn contact_borrower(&self, gate: AuthGate) -> Option<Intent> {
        gate.guard(Action::Contact, || {
            Some(Intent::Contact {
                id: self.microcredit.borrower.id,
            })
        })
    }

    pub fn button_label(&self) -> &'static str {
        if self.microcredit.is_fully_funded() {
            "Completamente Financiado"
        } else {
            "Invertir"
        }
    }

    /// "Faltan 2.000€"; nothing once the goal is reached
    pub fn remaining_label(&self) -> Option<String> {
        (!self.microcredit.is_fully_funded())
            .then(|| format!("Faltan {}", euros(self.microcredit.remaining())))
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.microcredit.is_fully_funded().then_some("¡Objetivo alcanzado!")
    }

    /// Interest earned on the minimum investment over the whole term
    pub fn expected_return(&self) -> Option<f64> {
        if self.microcredit.status != MicrocreditStatus::Funding || self.minimum_investment <= 0.0 {
            return None;
        }
        payment_summary(
            self.minimum_investment,
            self.microcredit.interest_rate,
            self.microcredit.term_months,
        )
        .map(|summary| summary.total_interest)
    }

    /// "12 días restantes" while funding is open
    pub fn deadline_label(&self, today: NaiveDate) -> Option<String> {
        if self.microcredit.status != MicrocreditStatus::Funding {
            return None;
        }
        let days = (self.microcredit.deadline? - today).num_days().max(0);
        Some(if days == 1 {
            "1 día restante".to_string()
        } else {
            format!("{days} días restantes")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::microcredit::{Borrower, RiskLevel};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn microcredit(funded: f64, status: MicrocreditStatus) -> Microcredit {
        Microcredit {
            id: 1,
            title: "Expansión de Panadería Local".into(),
            description: String::new(),
            borrower: Borrower {
                id: 77,
                name: "María García".into(),
                location: Some("Madrid, España".into()),
            },
            amount_requested: 5_000.0,
            amount_funded: funded,
            interest_rate: 5.5,
            term_months: 12,
            status,
            risk_level: RiskLevel::Low,
            category: "Negocio".into(),
            deadline: NaiveDate::from_ymd_opt(2025, 3, 20),
            investors_count: 12,
        }
    }

    #[test]
    fn test_payment_summary() {
        let s = payment_summary(5_000.0, 5.5, 12).unwrap();
        assert!(close(s.monthly_payment, 429.18));
        assert!(close(s.total_repayment, 5_150.21));
        assert!(close(s.total_interest, 150.21));
        assert_eq!(s.rows()[0], ("Pago Mensual", "429.18€".to_string()));

        let s = payment_summary(10_000.0, 10.0, 24).unwrap();
        assert!(close(s.monthly_payment, 461.45));

        let flat = payment_summary(1_200.0, 0.0, 12).unwrap();
        assert_eq!(flat.monthly_payment, 100.0);
        assert_eq!(flat.total_interest, 0.0);

        assert_eq!(payment_summary(0.0, 5.0, 12), None);
        assert_eq!(payment_summary(1_000.0, 5.0, 0), None);
    }

    #[test]
    fn test_invest_bounds() {
        let m = microcredit(3_000.0, MicrocreditStatus::Funding);
        let panel = InvestPanel::new(&m, 10.0);
        let gate = AuthGate::new(true);
        assert_eq!(panel.invest(gate, 5.0), None);
        assert_eq!(panel.amount_error(5.0).as_deref(), Some("La inversión mínima es 10€"));
        assert_eq!(
            panel.amount_error(2_500.0).as_deref(),
            Some("El importe máximo disponible es 2.000€")
        );
        assert_eq!(panel.invest(gate, 2_000.0), Some(Intent::Invest { id: 1, amount: 2_000.0 }));
        assert_eq!(panel.remaining_label().as_deref(), Some("Faltan 2.000€"));
        assert_eq!(panel.banner(), None);
    }

    #[test]
    fn test_invest_login_first() {
        let m = microcredit(0.0, MicrocreditStatus::Funding);
        let panel = InvestPanel::new(&m, 10.0);
        assert_eq!(
            panel.invest(AuthGate::new(false), 1.0),
            Some(Intent::LoginRequired(Action::Invest))
        );
        assert_eq!(
            panel.contact_borrower(AuthGate::new(true)),
            Some(Intent::Contact { id: 77 })
        );
    }

    #[test]
    fn test_fully_funded() {
        let m = microcredit(5_000.0, MicrocreditStatus::Funding);
        let panel = InvestPanel::new(&m, 10.0);
        assert!(!panel.can_invest());
        assert_eq!(panel.invest(AuthGate::new(true), 100.0), None);
        assert_eq!(panel.button_label(), "Completamente Financiado");
        assert_eq!(panel.banner(), Some("¡Objetivo alcanzado!"));
        assert_eq!(panel.remaining_label(), None);
    }

    #[test]
    fn test_deadline_and_return() {
        let m = microcredit(0.0, MicrocreditStatus::Funding);
        let panel = InvestPanel::new(&m, 100.0);
        let today = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        assert_eq!(panel.deadline_label(today).as_deref(), Some("12 días restantes"));
        assert!(panel.expected_return().is_some_and(|r| r > 0.0));

        let funded = microcredit(0.0, MicrocreditStatus::Funded);
        let panel = InvestPanel::new(&funded, 100.0);
        assert_eq!(panel.deadline_label(today), None);
        assert_eq!(panel.expected_return(), None);
    }
}
