use serde::{Deserialize, Serialize};

/// A cue table for territorial scope inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub categories: CueCategoriesDef,
    /// Province gazetteer, including accented/unaccented and co-official
    /// spelling variants. Each entry is matched as a whole word.
    pub provinces: Vec<String>,
}

/// Ordered regex sources per scope category. Every pattern that matches
/// adds one point to its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CueCategoriesDef {
    pub ue: Vec<String>,
    pub estado: Vec<String>,
    pub ccaa: Vec<String>,
    pub provincia: Vec<String>,
}
