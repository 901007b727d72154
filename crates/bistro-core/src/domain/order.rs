use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub transcript: String,
    pub email: String,
}

impl OrderRequest {
    /// Build a request from untrimmed inputs.
    pub fn new(transcript: &str, email: &str) -> Self {
        Self {
            transcript: transcript.trim().to_string(),
            email: email.trim().to_string(),
        }
    }
}

/// One detected item in a server order result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub qty: u32,
    /// Unit price.
    pub price: f64,
}

impl OrderLine {
    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

/// Structured outcome of one submission attempt.
///
/// Immutable once built from a gateway response and rebuilt on every
/// attempt. `saved = false` is a normal outcome, not a transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResult {
    pub saved: bool,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub email_sent: bool,
    /// Server-supplied error message, `None` when absent or empty.
    pub error: Option<String>,
}

impl OrderResult {
    /// Receipt for this result, in server item order.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            lines: self
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name.clone(),
                    qty: item.qty,
                    line_total: item.line_total(),
                })
                .collect(),
            total: self.total,
        }
    }
}

/// A rendered receipt: one line per item plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
}

impl Receipt {
    /// The grand total line, e.g. `Total: ₹40`.
    pub fn total_line(&self) -> String {
        format!("Total: ₹{}", format_amount(self.total))
    }
}

/// One receipt row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub name: String,
    pub qty: u32,
    pub line_total: f64,
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × {} — ₹{}",
            self.name,
            self.qty,
            format_amount(self.line_total)
        )
    }
}

/// Format a rupee amount the way it is spoken and shown: integral amounts
/// without a fractional part (`40`), others with their shortest exact
/// representation (`40.5`).
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea_result() -> OrderResult {
        OrderResult {
            saved: true,
            items: vec![OrderLine {
                name: "Tea".to_string(),
                qty: 2,
                price: 20.0,
            }],
            total: 40.0,
            email_sent: true,
            error: None,
        }
    }

    #[test]
    fn receipt_line_shows_quantity_and_line_total() {
        let receipt = tea_result().receipt();
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].to_string(), "Tea × 2 — ₹40");
        assert_eq!(receipt.total_line(), "Total: ₹40");
    }

    #[test]
    fn fractional_amounts_keep_their_fraction() {
        assert_eq!(format_amount(40.5), "40.5");
        assert_eq!(format_amount(360.0), "360");
    }

    #[test]
    fn request_trims_inputs() {
        let request = OrderRequest::new("  two coke ", " a@b.c\n");
        assert_eq!(request.transcript, "two coke");
        assert_eq!(request.email, "a@b.c");
    }
}
