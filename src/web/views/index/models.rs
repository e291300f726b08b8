use crate::prelude::*;

/// Submitted search form.
///
/// Every field is optional, the missing ones are empty.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct SearchForm {
    pub city: String,
    pub type_: String,
    pub hour: String,
}

impl SearchForm {
    /// Builds the form from the decoded `key=value` pairs.
    ///
    /// A repeated field keeps its first value, unknown fields are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut city = None;
        let mut type_ = None;
        let mut hour = None;
        for (key, value) in pairs {
            let field = match key.as_str() {
                "city" => &mut city,
                "type" => &mut type_,
                "hour" => &mut hour,
                _ => continue,
            };
            if field.is_none() {
                *field = Some(value);
            }
        }
        Self {
            city: city.unwrap_or_default(),
            type_: type_.unwrap_or_default(),
            hour: hour.unwrap_or_default(),
        }
    }

    /// Parsed hour, or [`None`] when it is empty or invalid.
    pub fn hour(&self) -> Option<u32> {
        parse_hour(&self.hour)
    }
}

pub fn parse_hour(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<u32>() {
        Ok(hour) if hour <= 23 => Some(hour),
        Ok(hour) => {
            debug!(hour, "the hour is out of range, using the current one");
            None
        }
        Err(error) => {
            debug!(value, "the hour is not a number, using the current one: {}", error);
            None
        }
    }
}
