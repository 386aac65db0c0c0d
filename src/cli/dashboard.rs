use super::ui;
use crate::core::ledger::TransactionKind;
use crate::core::session::Session;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the dashboard view: the four overview cards followed by the
/// transaction list, newest first.
pub fn run(session: &Session) -> Result<()> {
    println!(
        "\n{}\n",
        ui::style_text("Übersicht", ui::StyleType::Title)
    );

    let mut overview = ui::new_styled_table();
    overview.add_row(vec![
        Cell::new("Aktueller Kontostand"),
        Cell::new(ui::style_text(
            &ui::euro(session.balance()),
            ui::StyleType::TotalLabel,
        )),
    ]);
    overview.add_row(vec![
        Cell::new("Monatlicher Durchschnitt"),
        Cell::new(ui::euro(session.monthly_average())),
    ]);
    overview.add_row(vec![
        Cell::new("Letzte Einnahme"),
        Cell::new(ui::style_text(
            &ui::euro(session.last_income().map_or(0.0, |t| t.amount)),
            ui::StyleType::Income,
        )),
    ]);
    overview.add_row(vec![
        Cell::new("Letzte Ausgabe"),
        Cell::new(ui::style_text(
            &ui::euro(session.last_expense().map_or(0.0, |t| t.amount)),
            ui::StyleType::Expense,
        )),
    ]);
    println!("{overview}");

    display_transactions(session);
    Ok(())
}

fn display_transactions(session: &Session) {
    println!(
        "\n{}\n",
        ui::style_text("Transaktionen", ui::StyleType::Title)
    );

    if session.transactions().is_empty() {
        println!("{}", ui::style_text("Noch keine Transaktionen", ui::StyleType::Subtle));
        return;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Datum"),
        ui::header_cell("Beschreibung"),
        ui::header_cell("Kategorie"),
        ui::header_cell("Tags"),
        ui::header_cell("Betrag"),
    ]);

    for transaction in session.transactions() {
        let category = transaction
            .category
            .map_or(String::new(), |bucket| bucket.label().to_string());
        table.add_row(vec![
            Cell::new(transaction.date.format("%d.%m.%Y").to_string()),
            Cell::new(&transaction.description),
            Cell::new(category),
            Cell::new(transaction.tags.join(", ")),
            ui::amount_cell(transaction.amount, transaction.kind == TransactionKind::Income),
        ]);
    }

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::budget::{BudgetBucket, BudgetDistribution};
    use crate::core::ledger::{TransactionInput, TransactionKind};
    use crate::core::session::Profile;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_dashboard_renders_for_populated_session() {
        let profile = Profile {
            monthly_income: 3500.0,
            budget: BudgetDistribution {
                fixed: 1750.0,
                needs: 1050.0,
                wants: 350.0,
                savings: 350.0,
            },
            categories: Vec::new(),
            savings_goals: Vec::new(),
        };
        let mut session = Session::new(profile, 5000.0);
        session
            .add_transaction(TransactionInput {
                amount: 1050.0,
                kind: TransactionKind::Expense,
                date: Utc.with_ymd_and_hms(2024, 3, 2, 10, 30, 0).unwrap(),
                description: "Miete".to_string(),
                category: Some(BudgetBucket::Needs),
                tags: vec!["wohnen".to_string()],
            })
            .unwrap();

        assert!(run(&session).is_ok());
    }

    #[test]
    fn test_dashboard_renders_for_empty_session() {
        let profile = Profile {
            monthly_income: 0.0,
            budget: BudgetDistribution {
                fixed: 0.0,
                needs: 0.0,
                wants: 0.0,
                savings: 0.0,
            },
            categories: Vec::new(),
            savings_goals: Vec::new(),
        };
        let session = Session::new(profile, 0.0);
        assert!(run(&session).is_ok());
    }
}
