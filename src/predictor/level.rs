use std::fmt::{Display, Formatter};

use maud::Render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CrowdLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// Lowest value considered [`CrowdLevel::Medium`].
    pub const MEDIUM_THRESHOLD: u8 = 40;

    /// Lowest value considered [`CrowdLevel::High`].
    pub const HIGH_THRESHOLD: u8 = 70;

    pub const fn from_value(value: u8) -> Self {
        if value < Self::MEDIUM_THRESHOLD {
            Self::Low
        } else if value < Self::HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Message shown to the visitor next to the prediction.
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Low => "✅ Area is not crowded.",
            Self::Medium => "⚠️ Area may be moderately crowded.",
            Self::High => "❌ Area is crowded. Consider visiting later.",
        }
    }

    /// Bulma colour class.
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Low => "is-success",
            Self::Medium => "is-warning",
            Self::High => "is-danger",
        }
    }
}

impl Display for CrowdLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Render for CrowdLevel {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_boundaries_ok() {
        assert_eq!(CrowdLevel::from_value(0), CrowdLevel::Low);
        assert_eq!(CrowdLevel::from_value(39), CrowdLevel::Low);
        assert_eq!(CrowdLevel::from_value(40), CrowdLevel::Medium);
        assert_eq!(CrowdLevel::from_value(69), CrowdLevel::Medium);
        assert_eq!(CrowdLevel::from_value(70), CrowdLevel::High);
        assert_eq!(CrowdLevel::from_value(100), CrowdLevel::High);
    }

    #[test]
    fn advisories_are_distinct() {
        assert_ne!(CrowdLevel::Low.advisory(), CrowdLevel::Medium.advisory());
        assert_ne!(CrowdLevel::Medium.advisory(), CrowdLevel::High.advisory());
        assert_ne!(CrowdLevel::Low.advisory(), CrowdLevel::High.advisory());
    }
}
