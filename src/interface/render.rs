use crate::analysis::break_even_revenue;
use crate::i18n::{Language, Localized};
use crate::models::{BatchResult, ProductReport};

/// Print the localized break-even and suggested-price blocks.
pub fn display_result(result: &BatchResult, languages: &[Language]) {
    for &language in languages {
        display_block(&result.break_even_text, language, break_even_title(language));
        display_block(&result.suggestion_text, language, suggestion_title(language));
    }
}

fn display_block(text: &Localized, language: Language, title: &str) {
    println!();
    println!("=== {} ({}) ===", title, language.label());
    println!();
    for line in text.get(language).lines() {
        println!("  {}", line);
    }
}

fn break_even_title(language: Language) -> &'static str {
    match language {
        Language::English => "Break-Even Point",
        Language::Spanish => "Punto de Equilibrio",
    }
}

fn suggestion_title(language: Language) -> &'static str {
    match language {
        Language::English => "Suggested Price",
        Language::Spanish => "Precio Sugerido",
    }
}

/// Width of the product column, in characters.
fn name_column_width(reports: &[ProductReport]) -> usize {
    reports
        .iter()
        .map(|r| r.product.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Product".len())
}

/// Display a numeric summary table of a completed batch.
pub fn display_summary(reports: &[ProductReport]) {
    if reports.is_empty() {
        return;
    }

    let max_name_len = name_column_width(reports);

    println!();
    println!("--- Summary ---");
    println!(
        "{:<width$} | {:>10} | {:>10} | {:>10} | {:>11} | {:>12} | {:>12} | {:>10}",
        "Product",
        "Fixed",
        "Variable",
        "Price",
        "Unit margin",
        "Break-even",
        "BE revenue",
        "Suggested",
        width = max_name_len
    );

    for report in reports {
        let product = &report.product;
        let quantity = report
            .break_even
            .quantity()
            .map(|q| format!("{:.2}", q))
            .unwrap_or_else(|| "n/a".to_string());
        let revenue = break_even_revenue(product.fixed_cost, product.variable_cost, product.price)
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "n/a".to_string());

        println!(
            "{:<width$} | {:>10.2} | {:>10.2} | {:>10.2} | {:>11.2} | {:>12} | {:>12} | {:>10.2}",
            product.name,
            product.fixed_cost,
            product.variable_cost,
            product.price,
            product.contribution_margin(),
            quantity,
            revenue,
            report.suggestion.suggested_price,
            width = max_name_len
        );
    }
    println!();
}
