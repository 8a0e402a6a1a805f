use colored::{ColoredString, Colorize};
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table,
};

use crate::analysis::PanelSummary;
use crate::models::{CountryRecord, Panel, StatusLabel};

fn colored_label(label: StatusLabel) -> ColoredString {
    let text = label.to_string();
    match label {
        StatusLabel::HighlyInterconnected => text.green(),
        StatusLabel::ModeratelyInterconnected => text.yellow(),
        StatusLabel::GridConstrained => text.red(),
    }
}

/// Format the full panel as a table string.
pub fn format_panel_table(panel: &Panel) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Interconnectivity Panel".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Country",
            "ISO3",
            "Interconnectivity",
            "Gap to target",
            "Upside index",
            "Status",
        ]);

    for record in &panel.records {
        table.add_row(vec![
            Cell::new(&record.country),
            Cell::new(record.iso3.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.1}%", record.interconnectivity_pct)),
            Cell::new(format!("{:.1} pp", record.interconnection_gap_pctpt)),
            Cell::new(format!("{:.2}", record.integration_potential_index)),
            Cell::new(record.status_label.to_string()),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the full panel table.
pub fn print_panel_table(panel: &Panel) {
    print!("{}", format_panel_table(panel));
}

/// Format the detail block for one country: colored status line, the three
/// metrics at their display precision, and the narrative message.
pub fn format_country_block(record: &CountryRecord, target_pct: f64) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", colored_label(record.status_label).bold()));
    output.push_str(&format!(
        "Interconnectivity: {:.1}% | Gap to {:.0}% target: {:.1} pp | Integration upside index: {:.2}\n",
        record.interconnectivity_pct,
        target_pct,
        record.interconnection_gap_pctpt,
        record.integration_potential_index
    ));
    output.push_str(&format!("{}\n", record.ui_message.dimmed()));
    output
}

/// Print one country's detail block.
pub fn print_country_block(record: &CountryRecord, target_pct: f64) {
    print!("{}", format_country_block(record, target_pct));
}

/// Format panel-level aggregates as a table string.
pub fn format_summary_table(summary: &PanelSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Panel Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec![
        Cell::new("Countries"),
        Cell::new(format!("{}", summary.num_countries)),
    ]);
    table.add_row(vec![
        Cell::new("Target"),
        Cell::new(format!("{:.1}%", summary.target_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Mean interconnectivity"),
        Cell::new(format!("{:.1}%", summary.mean_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Range"),
        Cell::new(format!("{:.1}% to {:.1}%", summary.min_pct, summary.max_pct)),
    ]);
    table.add_row(vec![
        Cell::new("Mean gap"),
        Cell::new(format!("{:.1} pp", summary.mean_gap_pctpt)),
    ]);
    table.add_row(vec![
        Cell::new("Highly interconnected"),
        Cell::new(format!("{}", summary.highly_interconnected)),
    ]);
    table.add_row(vec![
        Cell::new("Moderately interconnected"),
        Cell::new(format!("{}", summary.moderately_interconnected)),
    ]);
    table.add_row(vec![
        Cell::new("Grid-constrained"),
        Cell::new(format!("{}", summary.grid_constrained)),
    ]);

    output.push_str(&format!("{table}"));
    output
}

/// Print panel-level aggregates.
pub fn print_summary_table(summary: &PanelSummary) {
    print!("{}", format_summary_table(summary));
}
