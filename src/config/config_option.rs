use crate::types::err::{self};

/// A bounded configuration value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// The bounds of the option, inclusive.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfRange(self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_respected() {
        let mut option = ConfigOption {
            name: "width",
            min: 1,
            max: 4,
            value: 2,
        };

        assert_eq!(option.min_max(), (1, 4));

        assert!(option.set(4).is_ok());
        assert_eq!(option.value, 4);

        assert_eq!(option.set(5), Err(err::ConfigError::OutOfRange("width")));
        assert_eq!(option.set(0), Err(err::ConfigError::OutOfRange("width")));
        assert_eq!(option.value, 4);
    }
}
