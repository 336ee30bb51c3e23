use comfy_table::*;

use crate::generator::GeneratorConfig;
use crate::history::History;
use crate::strength::Strength;

fn header_cell(label: String) -> Cell {
    Cell::new(label).fg(Color::Green)
}

fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => Color::Red,
        Strength::Medium => Color::Yellow,
        Strength::Strong => Color::Green,
    }
}

/// Renders the two most recent passwords. The strength label belongs to the
/// current configuration, so only the current row carries it.
pub fn show_history_table(history: &History, strength: Strength) {
    let mut table = Table::new();
    table.set_header(
        vec!["", "Password", "Strength"]
            .iter()
            .map(|&h| header_cell(String::from(h)))
            .collect::<Vec<Cell>>(),
    );
    if let Some(current) = history.current() {
        table.add_row(vec![
            Cell::new("Current").fg(Color::Yellow),
            Cell::new(current),
            Cell::new(strength.to_string()).fg(strength_color(strength)),
        ]);
    }
    if let Some(previous) = history.previous() {
        table.add_row(vec![
            Cell::new("Previous").fg(Color::Yellow),
            Cell::new(previous),
            Cell::new(""),
        ]);
    }
    println!("{table}");
}

pub fn show_config(config: &GeneratorConfig) {
    let classes = config
        .enabled_classes()
        .iter()
        .map(|class| class.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    let classes = if classes.is_empty() {
        String::from("none (lowercase fallback)")
    } else {
        classes
    };
    println!("Length: {} | Classes: {}", config.length(), classes);
}
