use serde::{Deserialize, Serialize};

/// Fixed vocabulary of preparation techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    Shaker,
    MixingGlass,
    Built,
    Blender,
    Throwing,
}

impl Technique {
    pub const ALL: [Technique; 5] = [
        Technique::Shaker,
        Technique::MixingGlass,
        Technique::Built,
        Technique::Blender,
        Technique::Throwing,
    ];

    /// Label shown on recipe cards.
    pub fn label(&self) -> &'static str {
        match self {
            Technique::Shaker => "Shaker",
            Technique::MixingGlass => "Verre à mélange",
            Technique::Built => "Construit",
            Technique::Blender => "Blender",
            Technique::Throwing => "Throwing",
        }
    }

    /// Other spellings a suggestion may use for the same technique.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Technique::Shaker => &["shaken", "shake"],
            Technique::MixingGlass => &["mixing glass", "stirred", "stir"],
            Technique::Built => &["built", "build", "direct"],
            Technique::Blender => &["blended", "blend"],
            Technique::Throwing => &["thrown"],
        }
    }
}

impl core::fmt::Display for Technique {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
