//! Goal pacing and progress

use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;
use crate::records::FinancialGoal;

/// Contribution needed each month to reach a goal by its deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPacing {
    /// Months in the goal span, both endpoints included
    pub months: i32,

    /// `target - current`; negative once the goal is exceeded
    pub remaining: f64,

    /// Required monthly contribution; never negative
    pub monthly_average: f64,

    /// User-set contribution minus the required one, when one is set
    pub contribution_gap: Option<f64>,
}

/// Goal completion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Percent complete, capped at 100
    pub progress: f64,
    /// Amount still missing, never negative
    pub remaining_value: f64,
}

/// Number of months from `start` to `end`, counting both
pub fn months_in_span(start: MonthKey, end: MonthKey) -> i32 {
    start.months_until(end) + 1
}

/// Required monthly contribution for a goal
pub fn pace_goal(goal: &FinancialGoal) -> GoalPacing {
    let months = months_in_span(goal.start_month, goal.end_month);
    let remaining = goal.target_value - goal.current_value;

    let monthly_average = if months > 0 {
        remaining.max(0.0) / months as f64
    } else {
        log::debug!(
            "goal '{}' ends ({}) before it starts ({}), no pacing",
            goal.name, goal.end_month, goal.start_month
        );
        0.0
    };

    GoalPacing {
        months,
        remaining,
        monthly_average,
        contribution_gap: goal.monthly_contribution.map(|c| c - monthly_average),
    }
}

/// Progress toward a target
pub fn goal_progress(current_value: f64, target_value: f64) -> GoalProgress {
    let progress = if target_value > 0.0 {
        (current_value / target_value * 100.0).min(100.0)
    } else {
        0.0
    };

    GoalProgress {
        progress,
        remaining_value: (target_value - current_value).max(0.0),
    }
}
