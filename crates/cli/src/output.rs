//! Terminal output for command results.

use std::fmt::Write as _;

use satellite_billing_core::PaymentMethod;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Print a rendered result to stdout.
#[allow(clippy::print_stdout)]
pub fn print(text: &str) {
    println!("{text}");
}

/// Render cards as an aligned table, one row per card in server order.
pub fn render_cards(cards: &[PaymentMethod]) -> String {
    if cards.is_empty() {
        return "No payment methods".to_string();
    }

    let mut out = format!(
        "{:<24} {:<12} {:<6} {:<8} {:<24} {:<7}\n",
        "ID", "BRAND", "LAST4", "EXPIRES", "HOLDER", "DEFAULT"
    );

    for card in cards {
        let default = match card.is_default {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        let _ = writeln!(
            out,
            "{:<24} {:<12} {:<6} {:<8} {:<24} {:<7}",
            card.id,
            card.brand,
            card.last_four,
            card.expiry(),
            card.holder_name,
            default
        );
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use satellite_billing_core::PaymentMethodId;

    use super::*;

    fn card(id: &str, is_default: Option<bool>) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new(id),
            exp_year: 2026,
            exp_month: 4,
            brand: "visa".to_string(),
            last_four: "4242".to_string(),
            holder_name: "A".to_string(),
            added_at: "2024-01-01".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_cards(&[]), "No payment methods");
    }

    #[test]
    fn test_render_keeps_order() {
        let table = render_cards(&[card("pm_2", Some(false)), card("pm_1", Some(true))]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("pm_2"));
        assert!(lines[1].contains("04/2026"));
        assert!(lines[1].trim_end().ends_with("no"));
        assert!(lines[2].starts_with("pm_1"));
        assert!(lines[2].trim_end().ends_with("yes"));
    }

    #[test]
    fn test_render_user_cards_have_no_default_column_value() {
        let table = render_cards(&[card("pm_1", None)]);
        assert!(table.lines().nth(1).is_some_and(|l| l.trim_end().ends_with('-')));
    }
}
