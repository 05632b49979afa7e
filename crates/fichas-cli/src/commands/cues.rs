use fichas_core::cues::builtin;
use fichas_core::error::FichasError;
use std::path::Path;

pub fn list() -> Result<(), FichasError> {
    println!("Available predefined cue tables:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        println!("  {:<8} {} (v{})", name, def.name, def.version);
        if let Some(ref desc) = def.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), FichasError> {
    let def = builtin::load_preset(preset)?;

    println!("{} (version {})\n", def.name, def.version);
    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    println!("Each cue pattern that matches adds 1 point to its level.");
    println!("Each province name found as a whole word adds 2 points to PROVINCE,");
    println!("and a province name inside parentheses adds 3 more.");
    println!("\"comunidad autónoma\" next to a province name moves 1 point from");
    println!("REGION and adds 2 to PROVINCE; without a province it adds 1 to REGION.");
    println!("Ties resolve PROVINCE > REGION > STATE > EU.\n");

    let lists = [
        ("EU (ue)", &def.categories.ue),
        ("STATE (estado)", &def.categories.estado),
        ("REGION (ccaa)", &def.categories.ccaa),
        ("PROVINCE (provincia)", &def.categories.provincia),
    ];
    for (label, patterns) in lists {
        println!("  {}:", label);
        for p in patterns {
            println!("    {}", p);
        }
        println!();
    }

    println!("  Gazetteer ({} names):", def.provinces.len());
    for chunk in def.provinces.chunks(6) {
        println!("    {}", chunk.join(", "));
    }
    println!();

    Ok(())
}

pub fn schema() -> Result<(), FichasError> {
    print!(
        r#"JSON Cue Table Schema
=====================

A cue table drives the territorial scope classifier. When you run
`fichas extract` or `fichas scope`, the document text is lowercased and
scored against every pattern and every province name in the table.

Top-level fields:
  name          (string, required)  Human-readable name of the table
  description   (string, optional)  What this table is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  categories    (object, required)  Cue patterns per level; exactly the
                                    keys "ue", "estado", "ccaa" and
                                    "provincia", each a non-empty array
                                    of regular expressions. Patterns are
                                    matched case-insensitively and each
                                    matching pattern adds 1 point.
  provinces     (array, required)   Province gazetteer. Names are matched
                                    case-insensitively as whole words and
                                    each one found adds 2 points to
                                    "provincia". List spelling variants
                                    (accented, co-official) separately.

Example:
{{
  "name": "Canarias",
  "version": "1.0",
  "categories": {{
    "ue": ["uni[oó]n europea", "\\bfeder\\b"],
    "estado": ["ministerio"],
    "ccaa": ["gobierno de canarias", "consejer[ií]a"],
    "provincia": ["cabildo", "ayuntamiento"]
  }},
  "provinces": ["Las Palmas", "Santa Cruz de Tenerife", "Tenerife"]
}}

Note: backslashes in patterns must be doubled inside JSON strings.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FichasError> {
    let set = fichas_core::cues::load_cue_set(file)?;

    println!("Cue table '{}' (v{}) is valid.", set.name, set.version);
    println!("  Cue patterns: {}", set.cues.len());
    println!("  Provinces: {}", set.provinces.len());

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for cue in &set.cues {
        if !seen.insert((cue.scope, cue.source.to_lowercase())) {
            warnings.push(format!("pattern '{}' is listed twice for {}", cue.source, cue.scope));
        }
    }
    let mut seen_provinces = std::collections::HashSet::new();
    for p in &set.provinces {
        if !seen_provinces.insert(p.name.to_lowercase()) {
            warnings.push(format!("province '{}' is listed twice", p.name));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
