use super::ui;
use crate::core::metals::{Metal, SpotPriceProvider, value_in_base_currency};
use anyhow::Result;
use comfy_table::Cell;

/// Renders the precious-metals view: gold and silver quote cards plus the
/// unit-converting calculator for the requested weight.
pub fn run(provider: &dyn SpotPriceProvider, weight: f64, unit: &str) -> Result<()> {
    println!(
        "\n{}\n",
        ui::style_text("Edelmetalle", ui::StyleType::Title)
    );

    let mut quotes = ui::new_styled_table();
    quotes.set_header(vec![
        ui::header_cell("Metall"),
        ui::header_cell("Preis (oz)"),
        ui::header_cell("Veränderung"),
    ]);
    for metal in [Metal::Gold, Metal::Silver] {
        let quote = provider.quote(metal);
        quotes.add_row(vec![
            Cell::new(metal.label()),
            Cell::new(ui::euro(quote.price)),
            ui::change_cell(quote.change_24h),
        ]);
    }
    println!("{quotes}");

    let gold = provider.quote(Metal::Gold);
    let value = value_in_base_currency(weight, unit, gold.price)?;

    println!(
        "\n{}\n",
        ui::style_text("Goldrechner", ui::StyleType::Title)
    );
    println!("Gewicht: {weight} {unit}");
    println!(
        "Aktueller Wert: {}",
        ui::style_text(&ui::euro(value), ui::StyleType::TotalLabel)
    );

    Ok(())
}
