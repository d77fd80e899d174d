use pontoon;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub table: ConfigTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTable {
    pub starting_bank: i64,
    pub cut_card_proportion: f64,
    pub shoe_policy: String,
}

impl TryInto<pontoon::Options> for ConfigTable {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<pontoon::Options, Self::Error> {
        let options = pontoon::Options {
            starting_bank: self.starting_bank,
            cut_card_proportion: self.cut_card_proportion,
            shoe_policy: self.shoe_policy.parse()?,
        };

        Ok(options)
    }
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}
