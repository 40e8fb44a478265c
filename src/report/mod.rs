//! Presentation of scan results.
//!
//! - [`console`]: colored terminal output
//! - [`pdf`]: printable A4 report
//!
//! Both, and the dashboard, grade scores through [`ScoreGrade`].

pub mod console;
pub mod pdf;

use crate::config::{FAIR_SCORE_THRESHOLD, GOOD_SCORE_THRESHOLD};

/// Qualitative band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    /// 75% and above
    Good,
    /// 40% up to 75%
    Fair,
    /// Below 40%
    Weak,
}

impl ScoreGrade {
    /// Grades a percentage score.
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_SCORE_THRESHOLD {
            ScoreGrade::Good
        } else if score >= FAIR_SCORE_THRESHOLD {
            ScoreGrade::Fair
        } else {
            ScoreGrade::Weak
        }
    }

    /// Label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Good => "Good",
            ScoreGrade::Fair => "Fair",
            ScoreGrade::Weak => "Weak",
        }
    }

    /// Hex color used by the dashboard score bar.
    pub fn hex_color(&self) -> &'static str {
        match self {
            ScoreGrade::Good => "#2ecc71",
            ScoreGrade::Fair => "#f39c12",
            ScoreGrade::Weak => "#e74c3c",
        }
    }
}

/// Formats a percentage score with one decimal, e.g. `50.0`.
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}
