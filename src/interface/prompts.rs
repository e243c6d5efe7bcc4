use dialoguer::{Confirm, Input};

use crate::analysis::constants::{DEFAULT_MARGIN, MARGIN_MAX, MARGIN_MIN};
use crate::error::{CalcError, Result};

/// List fields given on the command line. `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct BatchFlags {
    pub names: Option<String>,
    pub fixed_costs: Option<String>,
    pub variable_costs: Option<String>,
    pub prices: Option<String>,
}

/// Raw text of the four list fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchFields {
    pub names: String,
    pub fixed_costs: String,
    pub variable_costs: String,
    pub prices: String,
}

/// Prompt for a free-text field. Validation happens in the calculator.
pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a text field, falling back to `preset` when it is already known.
pub fn prompt_or(preset: Option<String>, prompt: &str) -> Result<String> {
    match preset {
        Some(value) => Ok(value),
        None => prompt_text(prompt),
    }
}

/// Prompt for the target profit margin.
pub fn prompt_margin() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Target profit margin in percent ({:.0}-{:.0})",
            MARGIN_MIN, MARGIN_MAX
        ))
        .default(format!("{:.0}", DEFAULT_MARGIN))
        .interact_text()?;

    parse_margin(&input)
}

/// Parse a profit margin and check it lies within the slider range.
pub fn parse_margin(input: &str) -> Result<f64> {
    let margin: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput(format!("Invalid margin: {}", input.trim())))?;

    if !(MARGIN_MIN..=MARGIN_MAX).contains(&margin) {
        return Err(CalcError::InvalidInput(format!(
            "Margin must be between {:.0} and {:.0}",
            MARGIN_MIN, MARGIN_MAX
        )));
    }

    Ok(margin)
}

/// Collect the single-product fields.
pub fn collect_single_fields() -> Result<(String, String, String)> {
    let fixed = prompt_text("Total fixed costs in dollars")?;
    let variable = prompt_text("Variable cost per unit in dollars")?;
    let price = prompt_text("Price per unit in dollars")?;
    Ok((fixed, variable, price))
}

/// Collect the list fields, prompting only for those not given as flags.
///
/// A flag given as an empty string is kept as is.
pub fn collect_batch_fields(flags: BatchFlags) -> Result<BatchFields> {
    Ok(BatchFields {
        names: prompt_or(flags.names, "Product names (comma-separated)")?,
        fixed_costs: prompt_or(flags.fixed_costs, "Fixed costs in dollars (comma-separated)")?,
        variable_costs: prompt_or(
            flags.variable_costs,
            "Variable costs per unit in dollars (comma-separated)",
        )?,
        prices: prompt_or(flags.prices, "Prices per unit in dollars (comma-separated)")?,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_margin_in_range() {
        assert_eq!(parse_margin(" 20 ").unwrap(), 20.0);
        assert_eq!(parse_margin("0").unwrap(), 0.0);
        assert_eq!(parse_margin("100").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_margin_out_of_range() {
        assert!(parse_margin("-1").is_err());
        assert!(parse_margin("100.5").is_err());
        assert!(parse_margin("twenty").is_err());
    }

    #[test]
    fn test_empty_flags_are_not_prompted() {
        let flags = BatchFlags {
            names: Some(String::new()),
            fixed_costs: Some(String::new()),
            variable_costs: Some(" ".to_string()),
            prices: Some(String::new()),
        };

        let fields = collect_batch_fields(flags).unwrap();
        assert_eq!(fields.names, "");
        assert_eq!(fields.variable_costs, " ");
        assert_eq!(fields.prices, "");
    }

    #[test]
    fn test_preset_skips_prompt() {
        let value = prompt_or(Some("A,B".to_string()), "unused").unwrap();
        assert_eq!(value, "A,B");
    }
}
