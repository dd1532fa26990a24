//! Output formatting for the one-shot CLI commands.

use tabled::{Table, Tabled};

use crate::services::{GameAnalysis, PlayerGames};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Debug, Tabled)]
pub struct PitchRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub raw: String,
    pub actual: String,
    pub model: String,
    pub naive: String,
    #[tabled(rename = "model %")]
    pub model_rolling: String,
}

impl PitchRow {
    pub fn rows(analysis: &GameAnalysis) -> Vec<Self> {
        analysis
            .game_stats
            .iter()
            .zip(&analysis.accuracy.model_rolling_accuracy)
            .enumerate()
            .map(|(index, (pitch, rolling))| PitchRow {
                index: index + 1,
                raw: pitch.record.pitch_type.clone(),
                actual: pitch.pitch_type_simplified.to_string(),
                model: mark(&pitch.pitch_type_predicted.to_string(), pitch.is_correct),
                naive: mark(&pitch.pitch_type_naive.to_string(), pitch.is_naive_correct),
                model_rolling: format!("{:.1}", rolling * 100.0),
            })
            .collect()
    }
}

fn mark(category: &str, correct: bool) -> String {
    if correct {
        format!("{category} ✓")
    } else {
        category.to_string()
    }
}

pub fn print_game_dates(games: &PlayerGames, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            println!("{}: {} games", games.selected_player, games.game_dates.len());
            for date in &games.game_dates {
                println!("  {date}");
            }
        }
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(games)?),
    }
    Ok(())
}

pub fn print_analysis(analysis: &GameAnalysis, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Table => {
            let rows = PitchRow::rows(analysis);
            if rows.is_empty() {
                println!("(no pitches)");
            } else {
                println!("{}", Table::new(rows));
            }
            println!(
                "model accuracy: {:.4} | naive accuracy: {:.4}",
                analysis.accuracy.model_accuracy, analysis.accuracy.naive_accuracy
            );
        }
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(analysis)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalyzedPitch, PitchCategory, PitchRecord};
    use crate::predict::AccuracySummary;
    use chrono::NaiveDate;

    #[test]
    fn test_rows_mark_correct_predictions() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 8).unwrap();
        let analysis = GameAnalysis {
            game_stats: vec![AnalyzedPitch {
                record: PitchRecord::new("SL", date),
                pitch_type_simplified: PitchCategory::Curve,
                pitch_type_predicted: PitchCategory::Fast,
                is_correct: false,
                pitch_type_naive: PitchCategory::Fast,
                is_naive_correct: false,
            }],
            accuracy: AccuracySummary {
                model_accuracy: 0.0,
                naive_accuracy: 0.0,
                model_rolling_accuracy: vec![0.0],
                naive_rolling_accuracy: vec![0.0],
            },
        };

        let rows = PitchRow::rows(&analysis);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw, "SL");
        assert_eq!(rows[0].actual, "curve");
        assert_eq!(rows[0].model, "fast");
        assert_eq!(rows[0].model_rolling, "0.0");
        assert_eq!(mark("fast", true), "fast ✓");
    }
}
