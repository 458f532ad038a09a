//! The cart aggregate: line entries, payment, stage machine, receipt.
//!
//! All ledger logic is implemented here as plain methods so it can be
//! unit-tested without an actor; the actor layer
//! ([`crate::order_actor`]) only routes actions to these methods.

use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders. One order exists per kiosk session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    EWallet,
    DebitCard,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::EWallet => "E-Wallet",
            PaymentMethod::DebitCard => "Debit Card",
        };
        write!(f, "{label}")
    }
}

/// Lifecycle phase of an order.
///
/// `Ordering → Payment → Completed`, with `Payment → Ordering` allowed for
/// back navigation and `Completed → Ordering` only via [`Order::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Ordering,
    Payment,
    Completed,
}

/// One row of the cart: a distinct menu item with its quantity.
///
/// The subtotal is derived, never stored, so `subtotal == unit_price ×
/// quantity` holds for every entry at all times. A quantity of zero never
/// survives a mutation; the entry is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEntry {
    pub menu_name: String,
    pub unit_price: u64,
    pub quantity: u32,
}

impl LineEntry {
    pub fn subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// Payload for creating a new order. Sessions always start with an empty
/// cart, so there is nothing to carry.
#[derive(Debug, Clone, Default)]
pub struct OrderCreate;

/// The mutable cart aggregate owned by one kiosk session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    lines: Vec<LineEntry>,
    payment_method: Option<PaymentMethod>,
    stage: Stage,
}

impl Order {
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            payment_method: None,
            stage: Stage::Ordering,
        }
    }

    /// Line entries in insertion order (which is display order).
    pub fn lines(&self) -> &[LineEntry] {
        &self.lines
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Adds `quantity` of a menu item. Quantity zero is a no-op. Adding an
    /// item already in the cart merges into the existing line, so no two
    /// lines ever share a menu name.
    pub fn add_item(&mut self, item: &crate::model::MenuItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_name == item.name) {
            line.quantity += quantity;
            return;
        }
        self.lines.push(LineEntry {
            menu_name: item.name.clone(),
            unit_price: item.price,
            quantity,
        });
    }

    /// Removes the line at `index`. Out-of-bounds indices are absorbed as
    /// no-ops: the presentation layer may issue stale-index mutations during
    /// rapid-click interaction and those must not fail the session.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Sets the quantity of the line at `index`. Zero removes the line;
    /// out-of-bounds is a no-op, same as [`Order::remove_item`].
    pub fn set_item_quantity(&mut self, index: usize, new_quantity: u32) {
        if index >= self.lines.len() {
            return;
        }
        if new_quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = new_quantity;
        }
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(LineEntry::subtotal).sum()
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Whether the given payment settles the given total. Cash requires the
    /// received amount to cover the total; e-wallet and debit payments are
    /// settled out-of-band and always pass at this layer.
    pub fn payment_complete(method: PaymentMethod, amount_received: u64, total: u64) -> bool {
        match method {
            PaymentMethod::Cash => amount_received >= total,
            PaymentMethod::EWallet | PaymentMethod::DebitCard => true,
        }
    }

    /// `Ordering → Payment`. Refused while the cart is empty.
    pub fn begin_payment(&mut self) -> Result<(), OrderError> {
        if self.stage != Stage::Ordering {
            return Err(OrderError::InvalidStage { from: self.stage });
        }
        if self.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        self.stage = Stage::Payment;
        Ok(())
    }

    /// `Payment → Ordering` (back navigation).
    pub fn back_to_ordering(&mut self) -> Result<(), OrderError> {
        if self.stage != Stage::Payment {
            return Err(OrderError::InvalidStage { from: self.stage });
        }
        self.stage = Stage::Ordering;
        Ok(())
    }

    /// `Payment → Completed`. Requires an attached payment method; for cash
    /// the received amount must cover the total, otherwise the transition is
    /// refused with the shortfall and the order is left untouched.
    pub fn complete_payment(&mut self, amount_received: Option<u64>) -> Result<(), OrderError> {
        if self.stage != Stage::Payment {
            return Err(OrderError::InvalidStage { from: self.stage });
        }
        let method = self.payment_method.ok_or(OrderError::NoPaymentMethod)?;
        let total = self.total();
        let received = amount_received.unwrap_or(0);
        if !Self::payment_complete(method, received, total) {
            return Err(OrderError::InsufficientCash {
                shortfall: total - received,
            });
        }
        self.stage = Stage::Completed;
        Ok(())
    }

    /// Clears all lines and the payment method, and returns the stage to
    /// `Ordering`. This is the only way out of `Completed`.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.payment_method = None;
        self.stage = Stage::Ordering;
    }

    /// Renders the purchase receipt. Pure with respect to the order; the
    /// timestamp is captured at generation time.
    ///
    /// The received/change/shortfall lines appear only for cash payments
    /// with a supplied amount.
    pub fn generate_receipt(&self, amount_received: Option<u64>) -> String {
        let mut receipt = String::from("=== STRUK PEMBELIAN ===\n");
        for line in &self.lines {
            receipt.push_str(&format!(
                "{} x{} = Rp{}\n",
                line.menu_name,
                line.quantity,
                format_rupiah(line.subtotal())
            ));
        }
        receipt.push_str("---------------------------\n");
        receipt.push_str(&format!("Total: Rp{}\n", format_rupiah(self.total())));
        match self.payment_method {
            Some(method) => receipt.push_str(&format!("Metode Bayar: {method}\n")),
            None => receipt.push_str("Metode Bayar: -\n"),
        }

        if self.payment_method == Some(PaymentMethod::Cash) {
            if let Some(received) = amount_received {
                let total = self.total();
                receipt.push_str(&format!("Uang Diterima: Rp{}\n", format_rupiah(received)));
                if received >= total {
                    receipt.push_str(&format!(
                        "Uang Kembali: Rp{}\n",
                        format_rupiah(received - total)
                    ));
                } else {
                    receipt.push_str(&format!(
                        "Kekurangan: Rp{}\n",
                        format_rupiah(total - received)
                    ));
                }
            }
        }

        let now = chrono::Local::now();
        receipt.push_str(&format!("Waktu: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
        receipt.push_str("===========================\nTerima kasih! 🍽️");
        receipt
    }
}

/// Formats whole rupiah with comma thousands separators: `95000` → `95,000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    fn burger() -> MenuItem {
        MenuItem::new("🍔 Burger", 25_000)
    }

    fn cola() -> MenuItem {
        MenuItem::new("🥤 Cola", 10_000)
    }

    fn order() -> Order {
        Order::new(OrderId(1))
    }

    #[test]
    fn add_item_merges_repeat_additions() {
        let mut order = order();
        order.add_item(&burger(), 2);
        order.add_item(&burger(), 3);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 5);
        assert_eq!(order.lines()[0].subtotal(), 125_000);
    }

    #[test]
    fn add_item_zero_quantity_is_noop() {
        let mut order = order();
        order.add_item(&burger(), 0);
        assert!(order.lines().is_empty());
    }

    #[test]
    fn set_quantity_zero_equals_remove() {
        let mut a = order();
        a.add_item(&burger(), 2);
        a.add_item(&cola(), 1);
        let mut b = a.clone();

        a.set_item_quantity(0, 0);
        b.remove_item(0);
        assert_eq!(a.lines(), b.lines());
    }

    #[test]
    fn out_of_bounds_mutations_are_absorbed() {
        let mut order = order();
        order.add_item(&burger(), 1);

        order.remove_item(5);
        order.set_item_quantity(5, 3);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 1);
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let mut order = order();
        order.add_item(&burger(), 3);
        order.add_item(&cola(), 2);
        assert_eq!(order.total(), 3 * 25_000 + 2 * 10_000);

        order.set_item_quantity(1, 4);
        for line in order.lines() {
            assert_eq!(line.subtotal(), line.unit_price * u64::from(line.quantity));
        }
        assert_eq!(order.total(), 3 * 25_000 + 4 * 10_000);
    }

    #[test]
    fn payment_complete_rules() {
        assert!(Order::payment_complete(PaymentMethod::Cash, 50_000, 45_000));
        assert!(!Order::payment_complete(PaymentMethod::Cash, 40_000, 45_000));
        assert!(Order::payment_complete(PaymentMethod::EWallet, 0, 45_000));
        assert!(Order::payment_complete(PaymentMethod::DebitCard, 0, 45_000));
    }

    #[test]
    fn begin_payment_refused_on_empty_cart() {
        let mut order = order();
        assert_eq!(order.begin_payment(), Err(OrderError::EmptyCart));
        assert_eq!(order.stage(), Stage::Ordering);

        order.add_item(&burger(), 1);
        order.begin_payment().unwrap();
        assert_eq!(order.stage(), Stage::Payment);
    }

    #[test]
    fn back_navigation_only_from_payment() {
        let mut order = order();
        assert!(order.back_to_ordering().is_err());

        order.add_item(&burger(), 1);
        order.begin_payment().unwrap();
        order.back_to_ordering().unwrap();
        assert_eq!(order.stage(), Stage::Ordering);
    }

    #[test]
    fn insufficient_cash_refused_with_shortfall() {
        let mut order = order();
        order.add_item(&burger(), 2); // 50,000
        order.begin_payment().unwrap();
        order.set_payment_method(PaymentMethod::Cash);

        let err = order.complete_payment(Some(45_000)).unwrap_err();
        assert_eq!(err, OrderError::InsufficientCash { shortfall: 5_000 });
        assert_eq!(order.stage(), Stage::Payment);

        order.complete_payment(Some(50_000)).unwrap();
        assert_eq!(order.stage(), Stage::Completed);
    }

    #[test]
    fn complete_payment_requires_method() {
        let mut order = order();
        order.add_item(&cola(), 1);
        order.begin_payment().unwrap();
        assert_eq!(order.complete_payment(Some(10_000)), Err(OrderError::NoPaymentMethod));
    }

    #[test]
    fn ewallet_completes_without_amount() {
        let mut order = order();
        order.add_item(&cola(), 1);
        order.begin_payment().unwrap();
        order.set_payment_method(PaymentMethod::EWallet);
        order.complete_payment(None).unwrap();
        assert_eq!(order.stage(), Stage::Completed);
    }

    #[test]
    fn reset_clears_everything() {
        let mut order = order();
        order.add_item(&burger(), 1);
        order.begin_payment().unwrap();
        order.set_payment_method(PaymentMethod::Cash);
        order.complete_payment(Some(25_000)).unwrap();

        order.reset();
        assert!(order.lines().is_empty());
        assert_eq!(order.payment_method(), None);
        assert_eq!(order.stage(), Stage::Ordering);
    }

    #[test]
    fn receipt_itemizes_cash_payment_with_change() {
        let mut order = order();
        order.add_item(&burger(), 3);
        order.add_item(&cola(), 2);
        order.set_payment_method(PaymentMethod::Cash);

        let receipt = order.generate_receipt(Some(100_000));
        let lines: Vec<&str> = receipt.lines().collect();
        assert_eq!(lines[0], "=== STRUK PEMBELIAN ===");
        assert_eq!(lines[1], "🍔 Burger x3 = Rp75,000");
        assert_eq!(lines[2], "🥤 Cola x2 = Rp20,000");
        assert_eq!(lines[3], "---------------------------");
        assert_eq!(lines[4], "Total: Rp95,000");
        assert_eq!(lines[5], "Metode Bayar: Cash");
        assert_eq!(lines[6], "Uang Diterima: Rp100,000");
        assert_eq!(lines[7], "Uang Kembali: Rp5,000");
        assert!(lines[8].starts_with("Waktu: "));
        assert_eq!(lines[9], "===========================");
        assert_eq!(lines[10], "Terima kasih! 🍽️");
    }

    #[test]
    fn receipt_reports_shortfall() {
        let mut order = order();
        order.add_item(&burger(), 2);
        order.set_payment_method(PaymentMethod::Cash);

        let receipt = order.generate_receipt(Some(40_000));
        assert!(receipt.contains("Uang Diterima: Rp40,000\n"));
        assert!(receipt.contains("Kekurangan: Rp10,000\n"));
        assert!(!receipt.contains("Uang Kembali"));
    }

    #[test]
    fn receipt_omits_cash_lines_for_ewallet() {
        let mut order = order();
        order.add_item(&cola(), 1);
        order.set_payment_method(PaymentMethod::EWallet);

        let receipt = order.generate_receipt(Some(10_000));
        assert!(receipt.contains("Metode Bayar: E-Wallet\n"));
        assert!(!receipt.contains("Uang Diterima"));
    }

    #[test]
    fn receipt_after_reset_is_empty() {
        let mut order = order();
        order.add_item(&burger(), 2);
        order.reset();

        let receipt = order.generate_receipt(None);
        assert!(receipt.contains("Total: Rp0\n"));
        assert!(receipt.contains("Metode Bayar: -\n"));
        assert!(!receipt.contains(" x"));
    }

    #[test]
    fn rupiah_formatting() {
        assert_eq!(format_rupiah(0), "0");
        assert_eq!(format_rupiah(999), "999");
        assert_eq!(format_rupiah(7_000), "7,000");
        assert_eq!(format_rupiah(95_000), "95,000");
        assert_eq!(format_rupiah(1_234_567), "1,234,567");
    }
}
