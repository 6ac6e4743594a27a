// Category brackets for the two derived indices the sensor reports. Both
// mappings are total over f32 and use half-open intervals, lower bound
// inclusive, checked in ascending order.

/// Subjective comfort bracket derived from the discomfort index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiscomfortLevel {
    /// Index below 70.
    Comfortable,
    /// Index in `[70, 75)`.
    NotHot,
    /// Index in `[75, 80)`.
    SomewhatHot,
    /// Index in `[80, 85)`.
    HotSweating,
    /// Index of 85 and above.
    UnbearablyHot,
}

impl DiscomfortLevel {
    /// Classifies a discomfort index value.
    pub fn from_index(index: f32) -> Self {
        if index < 70.0 {
            DiscomfortLevel::Comfortable
        } else if index < 75.0 {
            DiscomfortLevel::NotHot
        } else if index < 80.0 {
            DiscomfortLevel::SomewhatHot
        } else if index < 85.0 {
            DiscomfortLevel::HotSweating
        } else {
            DiscomfortLevel::UnbearablyHot
        }
    }

    /// Returns a human-readable label for the bracket.
    pub fn label(self) -> &'static str {
        match self {
            DiscomfortLevel::Comfortable => "comfortable",
            DiscomfortLevel::NotHot => "not hot",
            DiscomfortLevel::SomewhatHot => "somewhat hot",
            DiscomfortLevel::HotSweating => "hot, sweating",
            DiscomfortLevel::UnbearablyHot => "unbearably hot",
        }
    }
}

/// Heat-stress bracket derived from the heat-stroke (WBGT-like) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeatStrokeRisk {
    /// Index below 25 degC.
    Caution,
    /// Index in `[25, 28)` degC.
    Warning,
    /// Index in `[28, 31)` degC.
    SevereWarning,
    /// Index of 31 degC and above.
    Danger,
}

impl HeatStrokeRisk {
    /// Classifies a heat-stroke index value, in degrees Celsius.
    pub fn from_wbgt(index: f32) -> Self {
        if index < 25.0 {
            HeatStrokeRisk::Caution
        } else if index < 28.0 {
            HeatStrokeRisk::Warning
        } else if index < 31.0 {
            HeatStrokeRisk::SevereWarning
        } else {
            HeatStrokeRisk::Danger
        }
    }

    /// Returns a human-readable label for the bracket.
    pub fn label(self) -> &'static str {
        match self {
            HeatStrokeRisk::Caution => "caution",
            HeatStrokeRisk::Warning => "warning",
            HeatStrokeRisk::SevereWarning => "severe warning",
            HeatStrokeRisk::Danger => "danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discomfort_lower_bounds_are_inclusive() {
        assert_eq!(DiscomfortLevel::from_index(69.99), DiscomfortLevel::Comfortable);
        assert_eq!(DiscomfortLevel::from_index(70.0), DiscomfortLevel::NotHot);
        assert_eq!(DiscomfortLevel::from_index(75.0), DiscomfortLevel::SomewhatHot);
        assert_eq!(DiscomfortLevel::from_index(80.0), DiscomfortLevel::HotSweating);
        assert_eq!(DiscomfortLevel::from_index(85.0), DiscomfortLevel::UnbearablyHot);
    }

    #[test]
    fn discomfort_is_total_over_extremes() {
        assert_eq!(
            DiscomfortLevel::from_index(f32::NEG_INFINITY),
            DiscomfortLevel::Comfortable
        );
        assert_eq!(
            DiscomfortLevel::from_index(f32::INFINITY),
            DiscomfortLevel::UnbearablyHot
        );
    }

    #[test]
    fn heat_stroke_lower_bounds_are_inclusive() {
        assert_eq!(HeatStrokeRisk::from_wbgt(24.99), HeatStrokeRisk::Caution);
        assert_eq!(HeatStrokeRisk::from_wbgt(25.0), HeatStrokeRisk::Warning);
        assert_eq!(HeatStrokeRisk::from_wbgt(28.0), HeatStrokeRisk::SevereWarning);
        assert_eq!(HeatStrokeRisk::from_wbgt(30.99), HeatStrokeRisk::SevereWarning);
        assert_eq!(HeatStrokeRisk::from_wbgt(31.0), HeatStrokeRisk::Danger);
    }

    #[test]
    fn brackets_are_ordered() {
        assert!(DiscomfortLevel::Comfortable < DiscomfortLevel::UnbearablyHot);
        assert!(HeatStrokeRisk::Caution < HeatStrokeRisk::Danger);
    }

    #[test]
    fn labels_match_brackets() {
        assert_eq!(DiscomfortLevel::from_index(72.0).label(), "not hot");
        assert_eq!(HeatStrokeRisk::from_wbgt(29.0).label(), "severe warning");
    }
}
