use strum_macros::{Display, EnumIter, EnumString};

/// Bayesian update used to rate a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ModelKind {
    #[default]
    #[strum(to_string = "trueskill", serialize = "true-skill")]
    TrueSkill,
    PlackettLuce
}

/// How multiple result files are turned into timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ProcessingMode {
    /// Each file starts from an empty snapshot
    #[default]
    PerSource,
    /// Ratings and the penalty look-back carry over from one file to the next
    Continuous
}

/// Order of the series in the plot data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum LegendOrder {
    #[default]
    Name,
    /// Highest final mean first
    Skill
}
