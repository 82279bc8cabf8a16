use tracing::{info, warn};

use crate::error::{AnalysisError, Result};
use crate::models::ColumnAssignment;
use crate::settings::AnalysisSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Direction,
    Speed,
}

impl ColumnRole {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnRole::Direction => "direction",
            ColumnRole::Speed => "speed",
        }
    }
}

/// A role is accepted by the first column whose lowercased name contains any
/// of the keywords.
#[derive(Debug, Clone)]
pub struct ColumnRule {
    pub role: ColumnRole,
    pub keywords: Vec<String>,
}

impl ColumnRule {
    pub fn new(role: ColumnRole, keywords: &[String]) -> Self {
        Self {
            role,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn accepts(&self, column: &str) -> bool {
        let lower = column.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// First accepting column in schema order.
    pub fn first_match<'a>(&self, columns: &'a [String]) -> Option<&'a String> {
        columns.iter().find(|c| self.accepts(c))
    }
}

pub struct ColumnResolver {
    rules: Vec<ColumnRule>,
    direction_override: Option<String>,
    speed_override: Option<String>,
}

impl ColumnResolver {
    pub fn new() -> Self {
        Self::from_settings(&AnalysisSettings::default())
    }

    pub fn from_settings(settings: &AnalysisSettings) -> Self {
        Self {
            rules: vec![
                ColumnRule::new(ColumnRole::Direction, &settings.direction_keywords),
                ColumnRule::new(ColumnRole::Speed, &settings.speed_keywords),
            ],
            direction_override: None,
            speed_override: None,
        }
    }

    pub fn with_direction_column(mut self, column: Option<String>) -> Self {
        self.direction_override = column;
        self
    }

    pub fn with_speed_column(mut self, column: Option<String>) -> Self {
        self.speed_override = column;
        self
    }

    /// Decide which columns hold direction and speed.
    ///
    /// Explicit overrides win, then keyword rules (first matching column in
    /// schema order). If either role is still unassigned, the first two
    /// columns are used positionally for both roles. An override is never
    /// replaced positionally: when the other role has no match, resolution
    /// fails with `UnresolvedColumn`.
    pub fn resolve(&self, columns: &[String]) -> Result<ColumnAssignment> {
        let direction = self.resolve_role(ColumnRole::Direction, columns)?;
        let speed = self.resolve_role(ColumnRole::Speed, columns)?;

        let (direction, _speed) = match (direction, speed) {
            (Some(direction), Some(speed)) => {
                info!(direction = %direction, speed = %speed, "Resolved wind columns");
                return Ok(ColumnAssignment::new(direction, speed));
            }
            pair => pair,
        };

        if self.direction_override.is_some() || self.speed_override.is_some() {
            let missing = if direction.is_none() {
                ColumnRole::Direction
            } else {
                ColumnRole::Speed
            };
            return Err(AnalysisError::UnresolvedColumn(missing.name().to_string()));
        }

        match columns {
            [first, second, ..] => {
                warn!(
                    direction = %first,
                    speed = %second,
                    "No column name match; falling back to the first two columns"
                );
                Ok(ColumnAssignment::new(first.clone(), second.clone()))
            }
            _ => Err(AnalysisError::InsufficientColumns {
                found: columns.len(),
            }),
        }
    }

    fn resolve_role(&self, role: ColumnRole, columns: &[String]) -> Result<Option<String>> {
        let explicit = match role {
            ColumnRole::Direction => self.direction_override.as_ref(),
            ColumnRole::Speed => self.speed_override.as_ref(),
        };

        if let Some(name) = explicit {
            if !columns.contains(name) {
                return Err(AnalysisError::ColumnNotFound(name.clone()));
            }
            return Ok(Some(name.clone()));
        }

        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.role == role)
            .find_map(|rule| rule.first_match(columns))
            .cloned())
    }
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new()
    }
}
