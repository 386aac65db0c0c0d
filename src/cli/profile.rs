use super::ui;
use crate::core::analytics;
use crate::core::session::Session;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the profile view: income and savings-rate header, budget split,
/// spending distribution, monthly trend, categories and savings goals.
pub fn run(session: &Session) -> Result<()> {
    println!(
        "\n{}\n",
        ui::style_text("Finanzprofil", ui::StyleType::Title)
    );

    let savings_rate = session
        .savings_rate()
        .map_or("n/a".to_string(), |rate| format!("{rate:.1}%"));

    let mut header = ui::new_styled_table();
    header.add_row(vec![
        Cell::new("Monatliches Einkommen"),
        Cell::new(ui::euro(session.profile().monthly_income)),
    ]);
    header.add_row(vec![Cell::new("Sparquote"), Cell::new(savings_rate)]);
    header.add_row(vec![
        Cell::new("Aktueller Kontostand"),
        Cell::new(ui::euro(session.balance())),
    ]);
    println!("{header}");

    display_budget(session);
    display_spending(session);
    display_trend(session);
    display_categories(session);
    display_goals(session);

    Ok(())
}

fn display_budget(session: &Session) {
    println!(
        "\n{}\n",
        ui::style_text("Budgetverteilung", ui::StyleType::Title)
    );

    let profile = session.profile();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Bereich"),
        ui::header_cell("Budget"),
        ui::header_cell("Anteil"),
    ]);

    for (bucket, share) in profile.budget.shares() {
        let percentage = analytics::proportion_of(share, profile.monthly_income);
        table.add_row(vec![
            Cell::new(bucket.label()),
            Cell::new(ui::euro(share)),
            Cell::new(format!("{percentage:.1}%")),
        ]);
    }
    println!("{table}");
}

fn display_spending(session: &Session) {
    println!(
        "\n{}\n",
        ui::style_text("Ausgabenverteilung", ui::StyleType::Title)
    );

    let spending = session.spending_by_bucket();
    if spending.is_empty() {
        println!(
            "{}",
            ui::style_text("Noch keine kategorisierten Ausgaben", ui::StyleType::Subtle)
        );
        return;
    }

    let total: f64 = spending.iter().map(|(_, amount)| amount).sum();
    for (bucket, amount) in &spending {
        let percentage = analytics::proportion_of(*amount, total);
        println!(
            "{:<20} {} {:>10}",
            bucket.label(),
            ui::bar(percentage, ui::BAR_WIDTH),
            ui::euro(*amount)
        );
    }
}

fn display_trend(session: &Session) {
    println!(
        "\n{}\n",
        ui::style_text("Monatlicher Trend", ui::StyleType::Title)
    );

    for flow in session.monthly_trend() {
        // Bars are scaled against the larger of the two flows, as in the
        // original stacked chart.
        let peak = flow.income.max(flow.expenses);
        println!("{}", ui::style_text(&flow.label, ui::StyleType::TotalLabel));
        println!(
            "  {:<10} {} {:>10}",
            ui::style_text("Einnahmen", ui::StyleType::Income),
            ui::bar(analytics::proportion_of(flow.income, peak), ui::BAR_WIDTH),
            ui::euro(flow.income)
        );
        println!(
            "  {:<10} {} {:>10}",
            ui::style_text("Ausgaben", ui::StyleType::Expense),
            ui::bar(analytics::proportion_of(flow.expenses, peak), ui::BAR_WIDTH),
            ui::euro(flow.expenses)
        );
    }
}

fn display_categories(session: &Session) {
    let report = session.category_report();
    if report.is_empty() {
        return;
    }

    println!("\n{}\n", ui::style_text("Kategorien", ui::StyleType::Title));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Name"),
        ui::header_cell("Bereich"),
        ui::header_cell("Budget"),
        ui::header_cell("Ausgegeben"),
    ]);
    for status in report {
        table.add_row(vec![
            Cell::new(&status.name),
            Cell::new(status.bucket.label()),
            Cell::new(ui::euro(status.budget)),
            Cell::new(ui::euro(status.spent)),
        ]);
    }
    println!("{table}");
}

fn display_goals(session: &Session) {
    let goals = &session.profile().savings_goals;
    if goals.is_empty() {
        return;
    }

    println!("\n{}\n", ui::style_text("Sparziele", ui::StyleType::Title));

    for goal in goals {
        let progress = goal.progress();
        println!(
            "{:<20} {} {:>6.1}%  ({} / {})",
            goal.name,
            ui::bar(progress, ui::BAR_WIDTH),
            progress,
            ui::euro(goal.current_amount),
            ui::euro(goal.target_amount)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::budget::{BudgetBucket, BudgetDistribution};
    use crate::core::ledger::{TransactionInput, TransactionKind};
    use crate::core::session::{Category, Profile, SavingsGoal};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_profile_view_renders() {
        let profile = Profile {
            monthly_income: 3500.0,
            budget: BudgetDistribution {
                fixed: 1750.0,
                needs: 1050.0,
                wants: 350.0,
                savings: 350.0,
            },
            categories: vec![Category {
                id: "cat-1".to_string(),
                name: "Lebensmittel".to_string(),
                bucket: BudgetBucket::Needs,
                budget: 400.0,
            }],
            savings_goals: vec![SavingsGoal {
                id: "goal-1".to_string(),
                name: "Urlaub".to_string(),
                target_amount: 2000.0,
                current_amount: 500.0,
                deadline: None,
            }],
        };

        let mut session = Session::new(profile, 5000.0);
        for (amount, kind, category) in [
            (3500.0, TransactionKind::Income, None),
            (1050.0, TransactionKind::Expense, Some(BudgetBucket::Needs)),
            (200.0, TransactionKind::Expense, Some(BudgetBucket::Wants)),
        ] {
            session
                .add_transaction(TransactionInput {
                    amount,
                    kind,
                    date: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
                    description: "test".to_string(),
                    category,
                    tags: Vec::new(),
                })
                .unwrap();
        }

        assert!(run(&session).is_ok());
    }

    #[test]
    fn test_profile_view_handles_zero_income() {
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

        // Zero income means the savings rate is undefined; the view must show
        // the sentinel instead of crashing.
        assert!(run(&session).is_ok());
    }
}
