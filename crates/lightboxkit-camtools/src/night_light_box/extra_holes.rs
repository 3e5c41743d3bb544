//! Connector holes for the back panel
//!
//! One hole per line: `R x y width height` for a rectangle centered on
//! `(x, y)`, `C x y diameter` for a round hole. Blank lines are skipped.

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExtraHole {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        diameter: f64,
    },
}

impl ExtraHole {
    pub fn parse_list(text: &str) -> ParameterResult<Vec<ExtraHole>> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Self::parse_line(i + 1, line))
            .collect()
    }

    fn parse_line(line_no: usize, line: &str) -> ParameterResult<ExtraHole> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let error = |reason: String| {
            ParameterError::invalid("back_extra_holes", format!("line {}: {}", line_no, reason))
        };

        let (kind, rest) = match fields.split_first() {
            Some((kind, rest)) => (*kind, rest),
            None => return Err(error("empty line".to_string())),
        };

        let expected = match kind {
            "R" | "r" => 4,
            "C" | "c" => 3,
            other => return Err(error(format!("unknown hole kind '{}'", other))),
        };
        if rest.len() != expected {
            return Err(error(format!(
                "'{}' takes {} numbers, got {}",
                kind,
                expected,
                rest.len()
            )));
        }

        let mut values = Vec::with_capacity(expected);
        for field in rest {
            let value: f64 = field
                .parse()
                .map_err(|_| error(format!("'{}' is not a number", field)))?;
            if !value.is_finite() {
                return Err(error(format!("'{}' is not a finite number", field)));
            }
            values.push(value);
        }

        let hole = if expected == 4 {
            ExtraHole::Rectangle {
                x: values[0],
                y: values[1],
                width: values[2],
                height: values[3],
            }
        } else {
            ExtraHole::Circle {
                x: values[0],
                y: values[1],
                diameter: values[2],
            }
        };

        let sizes_ok = match hole {
            ExtraHole::Rectangle { width, height, .. } => width > 0.0 && height > 0.0,
            ExtraHole::Circle { diameter, .. } => diameter > 0.0,
        };
        if !sizes_ok {
            return Err(error("hole size must be positive".to_string()));
        }

        Ok(hole)
    }
}
