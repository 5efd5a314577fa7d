use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wpm_core::RankingOutcome;
use wpm_model::Criterion;
use wpm_report::{FlightSummary, format_score, top_summaries};

use crate::commands::RankResult;

pub fn print_summary(result: &RankResult) {
    println!("Dataset: {}", result.dataset.display());
    println!(
        "Flights: {} ranked ({} ties)",
        result.outcome.len(),
        result.outcome.rank_method.as_str()
    );
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    if result.outcome.is_empty() {
        println!("No flights to rank.");
        return;
    }

    println!("{}", weights_table(&result.outcome));
    let summaries = top_summaries(&result.outcome, result.top);
    println!("Top {} flights", summaries.len());
    println!("{}", top_table(&summaries));
    if result.show_all {
        println!("{}", full_table(&result.outcome));
    }
}

fn weights_table(outcome: &RankingOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Criterion"),
        header_cell("Kind"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (criterion, weight) in outcome.weights.iter() {
        table.add_row(vec![
            Cell::new(criterion.name()),
            dim_cell(criterion.kind()),
            Cell::new(format!("{weight:.3}")),
        ]);
    }
    table
}

fn top_table(summaries: &[FlightSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Airline"),
        header_cell("Flight"),
        header_cell("Class"),
        header_cell("Price"),
        header_cell("Duration"),
        header_cell("Days left"),
        header_cell("Stops"),
        header_cell("Departure"),
        header_cell("Arrival"),
        header_cell("Score"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 4, 5, 6, 7, 10] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            rank_cell(summary.rank),
            Cell::new(&summary.airline),
            Cell::new(&summary.flight),
            Cell::new(&summary.class),
            Cell::new(format!("{:.2}", summary.price)),
            Cell::new(format!("{:.2}", summary.duration)),
            Cell::new(summary.days_left),
            Cell::new(summary.stops),
            Cell::new(&summary.departure_time),
            Cell::new(&summary.arrival_time),
            Cell::new(&summary.score).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn full_table(outcome: &RankingOutcome) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Rank"), header_cell("Flight")];
    header.extend(Criterion::ALL.iter().map(|c| header_cell(c.name())));
    header.push(header_cell("Score"));
    table.set_header(header);
    apply_table_style(&mut table);
    for ranked in &outcome.flights {
        let record = &ranked.record;
        table.add_row(vec![
            rank_cell(ranked.rank),
            Cell::new(format!("{} {}", record.airline, record.flight)),
            Cell::new(format!("{:.2}", record.price)),
            Cell::new(format!("{:.2}", record.duration)),
            Cell::new(record.days_left),
            Cell::new(ranked.attributes.stops),
            Cell::new(ranked.attributes.class),
            Cell::new(ranked.attributes.departure_score),
            Cell::new(ranked.attributes.arrival_score),
            Cell::new(format_score(ranked.score)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rank_cell(rank: usize) -> Cell {
    let cell = Cell::new(rank);
    if rank == 1 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
