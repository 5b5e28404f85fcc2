use colored::{ColoredString, Colorize};
use healthcalc_model::bmi::{BmiCategory, BmiReport};
use healthcalc_model::body_fat::{BodyFatCategory, BodyFatResult};
use healthcalc_model::measurement::Tone;
use strum::IntoEnumIterator;

const SEGMENT_WIDTH: usize = 10;
const SCALE_WIDTH: usize = SEGMENT_WIDTH * 4;

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Warning => text.yellow(),
        Tone::Success => text.green(),
        Tone::Primary => text.blue(),
        Tone::Destructive => text.red(),
    }
}

/// Column of the scale marker for a position between 0 and 100.
fn marker_column(position: f64) -> usize {
    let column = (position.clamp(0.0, 100.0) / 100.0 * SCALE_WIDTH as f64).round() as usize;
    column.min(SCALE_WIDTH - 1)
}

fn scale(position: f64) -> String {
    let marker = marker_column(position);
    let mut bar = String::new();
    for (i, category) in BmiCategory::iter().enumerate() {
        let segment: String = (0..SEGMENT_WIDTH)
            .map(|j| {
                if i * SEGMENT_WIDTH + j == marker {
                    '|'
                } else {
                    '='
                }
            })
            .collect();
        bar.push_str(&paint(&segment, category.tone()).to_string());
    }
    bar
}

fn scale_labels() -> String {
    BmiCategory::iter()
        .map(|category| format!("{:^width$}", category.scale_label(), width = SEGMENT_WIDTH))
        .collect()
}

pub fn render_bmi(report: &BmiReport) -> String {
    let category = report.category.to_string();
    format!(
        "Your BMI: {}\nCategory: {}\n\n{}\n{}\n",
        report.value,
        paint(&category, report.category.tone()),
        scale(report.position),
        scale_labels()
    )
}

pub fn render_body_fat(result: &BodyFatResult) -> String {
    let category = match result.category {
        Some(category) => paint(&category.to_string(), category.tone()).to_string(),
        None => "-".to_owned(),
    };
    let ranges: String = BodyFatCategory::iter()
        .map(|band| format!("  - {}: {}\n", band, band.healthy_range(result.gender)))
        .collect();
    format!(
        "Your body fat: {}%\nCategory: {}\n\nHealthy ranges ({}):\n{}",
        result.value, category, result.gender, ranges
    )
}
