pub mod builtin;
pub mod schema;

use crate::error::FichasError;
use crate::model::TerritorialScope;
use regex::{Regex, RegexBuilder};
use schema::CueSetDef;
use std::path::Path;

/// A compiled scope cue pattern.
#[derive(Debug, Clone)]
pub struct Cue {
    pub scope: TerritorialScope,
    pub source: String,
    pub regex: Regex,
}

/// A compiled gazetteer entry.
#[derive(Debug, Clone)]
pub struct Province {
    pub name: String,
    pub regex: Regex,
}

/// Cue table compiled into regexes, ready for scoring.
///
/// Cues keep the order of the definition: EU, state, region, province,
/// each list in file order.
#[derive(Debug, Clone)]
pub struct CueSet {
    pub name: String,
    pub version: String,
    pub cues: Vec<Cue>,
    pub provinces: Vec<Province>,
}

impl CueSet {
    /// Compile a validated definition.
    pub fn compile(def: &CueSetDef) -> Result<CueSet, FichasError> {
        validate_cue_set(def)?;

        let lists = [
            (TerritorialScope::Eu, &def.categories.ue),
            (TerritorialScope::State, &def.categories.estado),
            (TerritorialScope::Region, &def.categories.ccaa),
            (TerritorialScope::Province, &def.categories.provincia),
        ];

        let mut cues = Vec::new();
        for (scope, sources) in lists {
            for source in sources {
                cues.push(Cue {
                    scope,
                    source: source.clone(),
                    regex: compile_cue(source)?,
                });
            }
        }

        let provinces = def
            .provinces
            .iter()
            .map(|name| {
                Ok(Province {
                    name: name.clone(),
                    regex: compile_province(name)?,
                })
            })
            .collect::<Result<Vec<_>, FichasError>>()?;

        Ok(CueSet {
            name: def.name.clone(),
            version: def.version.clone(),
            cues,
            provinces,
        })
    }

    pub fn cues_for(&self, scope: TerritorialScope) -> impl Iterator<Item = &Cue> {
        self.cues.iter().filter(move |c| c.scope == scope)
    }

    /// Whether any gazetteer province appears as a whole word in `text`.
    pub fn mentions_province(&self, text: &str) -> bool {
        self.provinces.iter().any(|p| p.regex.is_match(text))
    }
}

fn compile_cue(source: &str) -> Result<Regex, FichasError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| FichasError::CueSetInvalid(format!("invalid cue pattern '{}': {}", source, e)))
}

fn compile_province(name: &str) -> Result<Regex, FichasError> {
    let pattern = format!(r"\b{}\b", regex::escape(name.trim()));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| FichasError::CueSetInvalid(format!("invalid province name '{}': {}", name, e)))
}

/// Load and compile a cue table from a JSON file.
pub fn load_cue_set(path: &Path) -> Result<CueSet, FichasError> {
    let content = std::fs::read_to_string(path).map_err(|e| FichasError::CueSetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def = parse_cue_set(&content, path)?;
    CueSet::compile(&def)
}

/// Parse a cue table definition from a JSON string.
pub fn parse_cue_set(json: &str, source: &Path) -> Result<CueSetDef, FichasError> {
    let def: CueSetDef = serde_json::from_str(json).map_err(|e| FichasError::CueSetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_cue_set(&def)?;
    Ok(def)
}

/// Parse a cue table definition from a JSON string (no file path context).
pub fn parse_cue_set_str(json: &str) -> Result<CueSetDef, FichasError> {
    let def: CueSetDef = serde_json::from_str(json).map_err(FichasError::Json)?;
    validate_cue_set(&def)?;
    Ok(def)
}

/// Validate that a cue table is well-formed.
pub fn validate_cue_set(def: &CueSetDef) -> Result<(), FichasError> {
    let lists = [
        ("ue", &def.categories.ue),
        ("estado", &def.categories.estado),
        ("ccaa", &def.categories.ccaa),
        ("provincia", &def.categories.provincia),
    ];

    for (key, sources) in lists {
        if sources.is_empty() {
            return Err(FichasError::CueSetInvalid(format!(
                "category '{}' must not be empty",
                key
            )));
        }
        for source in sources {
            if source.trim().is_empty() {
                return Err(FichasError::CueSetInvalid(format!(
                    "category '{}' contains an empty pattern",
                    key
                )));
            }
            compile_cue(source)?;
        }
    }

    if def.provinces.is_empty() {
        return Err(FichasError::CueSetInvalid(
            "provinces must not be empty".into(),
        ));
    }

    if def.provinces.iter().any(|p| p.trim().is_empty()) {
        return Err(FichasError::CueSetInvalid(
            "province names must not be empty".into(),
        ));
    }

    Ok(())
}
