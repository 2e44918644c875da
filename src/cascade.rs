use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A facial feature with a pre-trained cascade model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feature {
    #[default]
    FrontalFace,
    LeftEye,
    Nose,
    RightEye,
    ProfileFace,
    Mouth,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::FrontalFace,
        Feature::LeftEye,
        Feature::Nose,
        Feature::RightEye,
        Feature::ProfileFace,
        Feature::Mouth,
    ];

    /// The keyword accepted on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Feature::FrontalFace => "frontalface",
            Feature::LeftEye => "lefteye",
            Feature::Nose => "nose",
            Feature::RightEye => "righteye",
            Feature::ProfileFace => "profileface",
            Feature::Mouth => "mouth",
        }
    }

    /// File name of the cascade model for this feature.
    pub fn model_file(&self) -> &'static str {
        match self {
            Feature::FrontalFace => "seeta_fd_frontalface_v1.0.bin",
            Feature::LeftEye => "seeta_fd_lefteye_v1.0.bin",
            Feature::Nose => "seeta_fd_nose_v1.0.bin",
            Feature::RightEye => "seeta_fd_righteye_v1.0.bin",
            Feature::ProfileFace => "seeta_fd_profileface_v1.0.bin",
            Feature::Mouth => "seeta_fd_mouth_v1.0.bin",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Error)]
#[error("unknown feature '{0}', expected one of: {valid}", valid = Feature::ALL.map(|f| f.keyword()).join(", "))]
pub struct UnknownFeature(String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|f| f.keyword() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}
