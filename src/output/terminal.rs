//! Terminal output formatting.
//!
//! Builds the screen text for the interactive shell. Nothing here touches
//! the terminal itself.

use crate::models::{Resolution, SubnetFacts};
use crate::shell::{CalcState, Field, TextField};
use colored::Colorize;

/// Title line.
pub const TITLE: &str = "CIDR Calculator";
/// Help hint shown under the results.
pub const HELP: &str = "(q to quit)";
/// Prompt in front of each input.
pub const PROMPT: &str = "> ";

/// Row of the address input in [`format_view`] output.
const ADDRESS_ROW: u16 = 2;

/// Format the seven result lines, or the single error line.
///
/// [`Resolution::Empty`] keeps the labels with blank values.
pub fn format_results(results: &Resolution) -> String {
    let facts = match results {
        Resolution::Invalid(e) => return e.to_string().red().to_string(),
        Resolution::Facts(facts) => Some(facts),
        Resolution::Empty => None,
    };
    let field = |f: fn(&SubnetFacts) -> String| facts.map(f).unwrap_or_default();
    format!(
        "CIDR Netmask: {netmask}\n\
         Wildcard Mask: {wildcard}\n\
         Total Addresses: {total}\n\
         Maximum Addresses: {max}\n\
         CIDR Network (Route): {network}\n\
         Net: CIDR Notation: {cidr}\n\
         CIDR Address Range: {range}",
        netmask = field(|f| f.netmask.to_string()),
        wildcard = field(|f| f.wildcard_mask.to_string()),
        total = field(|f| f.total_addresses.to_string()),
        max = field(|f| f.max_usable_addresses.to_string()),
        network = field(|f| f.network_address.to_string()),
        cidr = field(|f| f.cidr_notation()),
        range = field(|f| f.address_range()),
    )
}

/// Format one input line: prompt, then the text or the dimmed placeholder.
pub fn format_input(field: &TextField) -> String {
    if field.value().is_empty() {
        format!("{PROMPT}{}", field.placeholder().dimmed())
    } else {
        format!("{PROMPT}{}", field.value())
    }
}

/// Format the whole screen.
pub fn format_view(state: &CalcState) -> String {
    format!(
        "{TITLE}\n\n{address}\n{mask}\n\n{results}\n\n{HELP}",
        address = format_input(state.address()),
        mask = format_input(state.mask()),
        results = format_results(state.results()),
    )
}

/// Screen position `(column, row)` of the cursor in the focused input.
pub fn cursor_position(state: &CalcState) -> (u16, u16) {
    let (row, field) = match state.focus() {
        Field::Address => (ADDRESS_ROW, state.address()),
        Field::Mask => (ADDRESS_ROW + 1, state.mask()),
    };
    let column = PROMPT.len() + field.cursor();
    (u16::try_from(column).unwrap_or(u16::MAX), row)
}
