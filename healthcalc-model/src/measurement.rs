use strum::{Display, EnumString};

/// Selects the body-fat formula branch and the category table.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Names a single measurement, used to point at the offending input.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Height,
    Weight,
    Waist,
    Neck,
    Hip,
}

/// Colour intent of a category when shown to a user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Warning,
    Success,
    Primary,
    Destructive,
}
