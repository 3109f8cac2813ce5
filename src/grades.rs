//! Grade display helpers
//!
//! Grades are out of 20 unless a template says otherwise.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_GRADE;

/// Color band of a grade, by percentage of the maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeBand {
    /// Below 50%
    Danger,
    /// 50% to below 70%
    Warning,
    /// 70% and above
    Success,
}

impl GradeBand {
    pub fn classify(grade: f64, max_grade: f64) -> Self {
        if max_grade <= 0.0 {
            return GradeBand::Danger;
        }
        let percentage = grade / max_grade * 100.0;
        if percentage < 50.0 {
            GradeBand::Danger
        } else if percentage < 70.0 {
            GradeBand::Warning
        } else {
            GradeBand::Success
        }
    }

    /// Bootstrap text color class
    pub fn css_class(&self) -> &'static str {
        match self {
            GradeBand::Danger => "text-danger",
            GradeBand::Warning => "text-warning",
            GradeBand::Success => "text-success",
        }
    }
}

/// `<span class="text-success">15.5/20</span>`
///
/// Ties round away from zero (12.25 shows as 12.3), like the grade sheets.
pub fn format_grade(grade: f64, max_grade: Option<f64>) -> String {
    let max_grade = max_grade.unwrap_or(DEFAULT_MAX_GRADE);
    let band = GradeBand::classify(grade, max_grade);
    let shown = (grade * 10.0).round() / 10.0;
    format!("<span class=\"{}\">{:.1}/{}</span>", band.css_class(), shown, max_grade)
}

/// Arithmetic mean, 0 for no grades
pub fn calculate_average(grades: &[f64]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().sum::<f64>() / grades.len() as f64
}
