use chrono::Weekday;
use liftbook_domain::Config;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub user_name: String,
    pub week_start: Weekday,
    pub weight_unit: WeightUnit,
}

impl Settings {
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            author: self.user_name.clone(),
            week_start: self.week_start,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: String::from("You"),
            week_start: Weekday::Sun,
            weight_unit: WeightUnit::Kg,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}
