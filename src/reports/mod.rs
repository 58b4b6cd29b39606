use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use echoscore::alignment::{DiffEntry, DiffType};
use echoscore::result::PracticeResult;
use echoscore::stats::HistorySummary;

const DIFF_COLUMNS: usize = 10;

fn diff_cell(entry: &DiffEntry) -> Cell {
    // Prefix markers keep the diff readable without colour
    let (text, color) = match entry.diff_type {
        DiffType::Correct => (entry.word.clone(), Color::Green),
        DiffType::Incorrect => (format!("~{}", entry.word), Color::Magenta),
        DiffType::Missing => (format!("-{}", entry.word), Color::Red),
        DiffType::Extra => (format!("+{}", entry.word), Color::Yellow),
    };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Center)
}

pub fn print_diff(entries: &[DiffEntry]) {
    println!("\nWord Diff ({} entries)", entries.len());
    if entries.is_empty() {
        println!("  (nothing to compare)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for chunk in entries.chunks(DIFF_COLUMNS) {
        table.add_row(chunk.iter().map(diff_cell).collect::<Vec<_>>());
    }
    println!("{}", table);
}

pub fn print_score_report(result: &PracticeResult, edit_distance: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Overall").fg(Color::Cyan),
        Cell::new(format!("{:.2}", result.overall_score())),
    ]);
    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(format!("{:.2}", result.accuracy_score())),
    ]);
    table.add_row(vec![
        Cell::new("Fluency"),
        Cell::new(format!("{:.2}", result.fluency_score())),
    ]);
    table.add_row(vec![
        Cell::new("Grade").add_attribute(Attribute::Bold),
        Cell::new(result.grade().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Correct / Total"),
        Cell::new(format!(
            "{} / {}",
            result.correct_words(),
            result.total_words()
        )),
    ]);
    table.add_row(vec![
        Cell::new("Missing").fg(Color::Red),
        Cell::new(result.missing_words().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Extra").fg(Color::Yellow),
        Cell::new(result.extra_words().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Edit Distance"),
        Cell::new(edit_distance.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("WER"),
        Cell::new(format!("{:.1}%", result.word_error_rate() * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Words/Min"),
        Cell::new(format!("{:.1}", result.words_per_minute())),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", table);
}

pub fn print_batch_report(results: &[PracticeResult]) {
    let mut sorted: Vec<&PracticeResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Material").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Correct").fg(Color::Green),
        Cell::new("Missing").fg(Color::Red),
        Cell::new("Extra").fg(Color::Yellow),
        Cell::new("Acc"),
        Cell::new("Flu"),
        Cell::new("Overall").fg(Color::Cyan),
        Cell::new("Grade").add_attribute(Attribute::Bold),
    ]);

    for r in sorted {
        table.add_row(vec![
            Cell::new(r.material_id()),
            Cell::new(r.total_words()),
            Cell::new(r.correct_words()),
            Cell::new(r.missing_words()),
            Cell::new(r.extra_words()),
            Cell::new(format!("{:.1}", r.accuracy_score())),
            Cell::new(format!("{:.1}", r.fluency_score())),
            Cell::new(format!("{:.2}", r.overall_score())),
            Cell::new(r.grade()),
        ]);
    }

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn print_history_summary(summary: &HistorySummary) {
    println!("\n=== HISTORY SUMMARY ===");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![Cell::new("Attempts"), Cell::new(summary.attempts)]);
    table.add_row(vec![
        Cell::new("Mean Overall").fg(Color::Cyan),
        Cell::new(format!("{:.2}", summary.mean_overall)),
    ]);
    table.add_row(vec![
        Cell::new("Mean Accuracy"),
        Cell::new(format!("{:.2}", summary.mean_accuracy)),
    ]);
    table.add_row(vec![
        Cell::new("Mean Fluency"),
        Cell::new(format!("{:.2}", summary.mean_fluency)),
    ]);
    table.add_row(vec![
        Cell::new("Best Overall"),
        Cell::new(format!("{:.2}", summary.best_overall)),
    ]);
    table.add_row(vec![
        Cell::new("WER (micro)"),
        Cell::new(format!("{:.1}%", summary.word_error_rate * 100.0)),
    ]);

    let distribution = summary
        .grade_distribution
        .iter()
        .map(|(grade, count)| format!("{}:{}", grade, count))
        .collect::<Vec<_>>()
        .join("  ");
    table.add_row(vec![Cell::new("Grades"), Cell::new(distribution)]);
    println!("{}", table);
}
