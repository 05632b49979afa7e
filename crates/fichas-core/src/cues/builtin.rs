use crate::cues::schema::CueSetDef;
use crate::cues::CueSet;
use crate::error::FichasError;
use std::sync::LazyLock;

const TERRITORIAL_ES_JSON: &str = include_str!("../../../../cues/territorial-es.json");

/// Available predefined cue tables.
pub const PRESETS: &[&str] = &["es"];

static DEFAULT_CUE_SET: LazyLock<CueSet> = LazyLock::new(|| {
    let def: CueSetDef =
        serde_json::from_str(TERRITORIAL_ES_JSON).expect("builtin cue table is valid JSON");
    CueSet::compile(&def).expect("builtin cue table compiles")
});

/// The builtin Spanish cue table, compiled once per process.
pub fn default_cue_set() -> &'static CueSet {
    &DEFAULT_CUE_SET
}

/// Load a predefined cue table definition by name.
pub fn load_preset(name: &str) -> Result<CueSetDef, FichasError> {
    match name {
        "es" => {
            let def: CueSetDef = serde_json::from_str(TERRITORIAL_ES_JSON)?;
            Ok(def)
        }
        _ => Err(FichasError::CueSetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
