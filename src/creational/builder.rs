// Builder: a closure fills in the builder, construction validates it.

use crate::error::{PatternError, Result};
use std::fmt;

#[derive(Debug, Default, Clone)]
pub struct DeathStarBuilder {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl DeathStarBuilder {
    pub fn new(build: impl FnOnce(&mut DeathStarBuilder)) -> Self {
        let mut builder = Self::default();
        build(&mut builder);
        builder
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathStar {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TryFrom<&DeathStarBuilder> for DeathStar {
    type Error = PatternError;

    fn try_from(builder: &DeathStarBuilder) -> Result<Self> {
        Ok(Self {
            x: builder.x.ok_or(PatternError::IncompleteBuilder { field: "x" })?,
            y: builder.y.ok_or(PatternError::IncompleteBuilder { field: "y" })?,
            z: builder.z.ok_or(PatternError::IncompleteBuilder { field: "z" })?,
        })
    }
}

impl fmt::Display for DeathStar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Death Star at (x:{} y:{} z:{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_death_star() {
        let empire = DeathStarBuilder::new(|builder| {
            builder.x = Some(0.1);
            builder.y = Some(0.2);
            builder.z = Some(0.3);
        });

        let death_star = DeathStar::try_from(&empire).unwrap();
        assert_eq!(death_star.to_string(), "Death Star at (x:0.1 y:0.2 z:0.3)");
    }

    #[test]
    fn test_missing_coordinate() {
        let rebels = DeathStarBuilder::new(|builder| {
            builder.x = Some(1.0);
            builder.y = Some(2.0);
        });

        let result = DeathStar::try_from(&rebels);
        assert!(matches!(
            result,
            Err(PatternError::IncompleteBuilder { field: "z" })
        ));
    }

    #[test]
    fn test_first_missing_field_reported() {
        let empty = DeathStarBuilder::new(|_| {});
        let err = DeathStar::try_from(&empty).unwrap_err();
        assert_eq!(err.to_string(), "builder is missing the 'x' coordinate");
    }
}
