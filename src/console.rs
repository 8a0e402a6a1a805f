use std::io::{BufRead, Write};

use colored::Colorize;

use crate::models::Panel;
use crate::visualization::format_country_block;

/// Interactive numbered-menu loop over the panel's countries.
///
/// Prints a 1-based list of the sorted country names, then reads selections
/// until `0` or end-of-input. Out-of-range and non-numeric input gets a retry
/// prompt; the loop never exits on bad input. Generic over reader and writer
/// so tests can drive it with buffers.
pub fn run_menu<R: BufRead, W: Write>(
    panel: &Panel,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    let countries = panel.country_names();
    if countries.is_empty() {
        writeln!(output, "No countries in panel.")?;
        return Ok(());
    }

    writeln!(output, "\n{}", "Choose a country".bold().cyan())?;
    for (idx, name) in countries.iter().enumerate() {
        writeln!(output, "{:>3}. {name}", idx + 1)?;
    }
    writeln!(output, "  0. Exit")?;

    loop {
        write!(output, "\nSelection (0 to exit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like the sentinel
            break;
        }
        let trimmed = line.trim();
        if trimmed == "0" {
            break;
        }

        match trimmed.parse::<usize>() {
            Ok(n) if (1..=countries.len()).contains(&n) => {
                let name = &countries[n - 1];
                if let Some(record) = panel.get(name) {
                    writeln!(output, "\n{}", name.bold())?;
                    write!(output, "{}", format_country_block(record, panel.target_pct))?;
                }
            }
            _ => {
                writeln!(
                    output,
                    "Invalid selection '{trimmed}'. Enter a number between 1 and {}, or 0 to exit.",
                    countries.len()
                )?;
            }
        }
    }

    Ok(())
}
