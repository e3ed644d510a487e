//! Clothing advice derived from temperature. Pure functions, no I/O, so the
//! rule table can be tested without touching the network.

/// Temperature bracket for the advisory rule table. Brackets are evaluated
/// in order and a boundary value always belongs to the upper bracket:
/// exactly 5 °C is `Cool`, exactly 25 °C is `Hot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryCategory {
    VeryCold,
    Cool,
    Pleasant,
    Hot,
}

impl AdvisoryCategory {
    pub fn for_temperature(temperature_c: f64) -> Self {
        if temperature_c < 5.0 {
            AdvisoryCategory::VeryCold
        } else if temperature_c < 15.0 {
            AdvisoryCategory::Cool
        } else if temperature_c < 25.0 {
            AdvisoryCategory::Pleasant
        } else {
            AdvisoryCategory::Hot
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            AdvisoryCategory::VeryCold => {
                "Very cold! Wear a heavy coat, scarf and hat. A bowl of hot soup goes down well."
            }
            AdvisoryCategory::Cool => "Cool out. A jacket or cardigan will do.",
            AdvisoryCategory::Pleasant => {
                "Pleasant weather! A light jacket or sweatshirt is enough. A great day to be outside."
            }
            AdvisoryCategory::Hot => {
                "Hot! T-shirt and shorts weather. Remember to drink plenty of water."
            }
        }
    }
}

/// Build the final advisory line from the temperature and the literal
/// condition description reported by the weather service.
pub fn advisory_text(temperature_c: f64, description: &str) -> String {
    let suggestion = AdvisoryCategory::for_temperature(temperature_c).suggestion();
    format!("Currently {description}. {suggestion}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_cover_all_temperatures() {
        assert_eq!(AdvisoryCategory::for_temperature(-40.0), AdvisoryCategory::VeryCold);
        assert_eq!(AdvisoryCategory::for_temperature(3.0), AdvisoryCategory::VeryCold);
        assert_eq!(AdvisoryCategory::for_temperature(4.9), AdvisoryCategory::VeryCold);
        assert_eq!(AdvisoryCategory::for_temperature(10.0), AdvisoryCategory::Cool);
        assert_eq!(AdvisoryCategory::for_temperature(14.9), AdvisoryCategory::Cool);
        assert_eq!(AdvisoryCategory::for_temperature(20.0), AdvisoryCategory::Pleasant);
        assert_eq!(AdvisoryCategory::for_temperature(24.9), AdvisoryCategory::Pleasant);
        assert_eq!(AdvisoryCategory::for_temperature(30.0), AdvisoryCategory::Hot);
        assert_eq!(AdvisoryCategory::for_temperature(45.0), AdvisoryCategory::Hot);
    }

    #[test]
    fn boundaries_belong_to_the_upper_bracket() {
        assert_eq!(AdvisoryCategory::for_temperature(5.0), AdvisoryCategory::Cool);
        assert_eq!(AdvisoryCategory::for_temperature(15.0), AdvisoryCategory::Pleasant);
        assert_eq!(AdvisoryCategory::for_temperature(25.0), AdvisoryCategory::Hot);
    }

    #[test]
    fn advisory_interpolates_the_literal_description() {
        let text = advisory_text(3.0, "kar");
        assert!(text.contains("kar"));
        assert!(text.contains("Very cold"));

        let text = advisory_text(28.0, "açık");
        assert!(text.contains("açık"));
        assert!(text.contains("shorts"));
    }
}
