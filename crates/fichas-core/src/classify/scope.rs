use crate::cues::CueSet;
use crate::model::TerritorialScope;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Weight of a generic institutional cue.
pub const CUE_WEIGHT: u32 = 1;
/// Weight of each gazetteer province found as a whole word.
pub const PROVINCE_NAME_WEIGHT: u32 = 2;
/// Bonus when a province name appears inside parentheses.
pub const PARENTHETICAL_PROVINCE_BONUS: u32 = 3;
/// Bonus to the province score when "comunidad autónoma" appears alongside
/// a province name.
pub const REGION_MENTION_PROVINCE_BONUS: u32 = 2;

static RE_PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("valid parenthesized regex"));
static RE_COMUNIDAD_AUTONOMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)comunidad aut[oó]noma").expect("valid comunidad regex"));

/// Tie-break order: the more specific level wins.
const PRIORITY: [TerritorialScope; 4] = [
    TerritorialScope::Province,
    TerritorialScope::Region,
    TerritorialScope::State,
    TerritorialScope::Eu,
];

/// One contribution to a scope score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreStep {
    pub scope: TerritorialScope,
    pub delta: i32,
    pub reason: String,
}

/// Per-category scores plus the evidence that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeScores {
    pub ue: u32,
    pub estado: u32,
    pub ccaa: u32,
    pub provincia: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ScoreStep>,
}

impl ScopeScores {
    pub fn get(&self, scope: TerritorialScope) -> u32 {
        match scope {
            TerritorialScope::Eu => self.ue,
            TerritorialScope::State => self.estado,
            TerritorialScope::Region => self.ccaa,
            TerritorialScope::Province => self.provincia,
        }
    }

    fn slot(&mut self, scope: TerritorialScope) -> &mut u32 {
        match scope {
            TerritorialScope::Eu => &mut self.ue,
            TerritorialScope::State => &mut self.estado,
            TerritorialScope::Region => &mut self.ccaa,
            TerritorialScope::Province => &mut self.provincia,
        }
    }

    fn add(&mut self, scope: TerritorialScope, points: u32, reason: String) {
        *self.slot(scope) += points;
        self.steps.push(ScoreStep {
            scope,
            delta: points as i32,
            reason,
        });
    }

    /// Subtract from a score, flooring at zero. Only the amount actually
    /// removed is recorded.
    fn remove(&mut self, scope: TerritorialScope, points: u32, reason: String) {
        let slot = self.slot(scope);
        let removed = points.min(*slot);
        *slot -= removed;
        self.steps.push(ScoreStep {
            scope,
            delta: -(removed as i32),
            reason,
        });
    }

    pub fn max(&self) -> u32 {
        self.ue.max(self.estado).max(self.ccaa).max(self.provincia)
    }

    /// Pick the highest-scoring scope; ties resolve Province > Region >
    /// State > EU. `None` when nothing scored.
    pub fn decide(&self) -> Option<TerritorialScope> {
        let max = self.max();
        if max == 0 {
            return None;
        }
        PRIORITY.into_iter().find(|scope| self.get(*scope) == max)
    }
}

/// Score `text` against every cue and gazetteer entry in `cues`.
pub fn score_scope(text: &str, cues: &CueSet) -> ScopeScores {
    let lower = text.to_lowercase();
    let mut scores = ScopeScores::default();

    for cue in &cues.cues {
        if cue.regex.is_match(&lower) {
            scores.add(cue.scope, CUE_WEIGHT, format!("cue '{}'", cue.source));
        }
    }

    let mut province_found = false;
    for province in &cues.provinces {
        if province.regex.is_match(&lower) {
            province_found = true;
            scores.add(
                TerritorialScope::Province,
                PROVINCE_NAME_WEIGHT,
                format!("province name '{}'", province.name),
            );
        }
    }

    let parenthetical = RE_PARENTHESIZED
        .captures_iter(&lower)
        .filter_map(|caps| caps.get(1))
        .find(|inner| cues.mentions_province(inner.as_str()));
    if let Some(inner) = parenthetical {
        scores.add(
            TerritorialScope::Province,
            PARENTHETICAL_PROVINCE_BONUS,
            format!("province name in parentheses '({})'", inner.as_str()),
        );
    }

    if RE_COMUNIDAD_AUTONOMA.is_match(&lower) {
        if province_found {
            scores.add(
                TerritorialScope::Province,
                REGION_MENTION_PROVINCE_BONUS,
                "'comunidad autónoma' mentioned alongside a province".into(),
            );
            scores.remove(
                TerritorialScope::Region,
                1,
                "'comunidad autónoma' mentioned alongside a province".into(),
            );
        } else {
            scores.add(
                TerritorialScope::Region,
                CUE_WEIGHT,
                "'comunidad autónoma' mentioned".into(),
            );
        }
    }

    scores
}

/// Infer the territorial scope of `text`, or `None` when no cue matched.
pub fn classify_scope(text: &str, cues: &CueSet) -> Option<TerritorialScope> {
    let scores = score_scope(text, cues);
    let decision = scores.decide();
    tracing::debug!(
        ue = scores.ue,
        estado = scores.estado,
        ccaa = scores.ccaa,
        provincia = scores.provincia,
        decision = ?decision,
        "territorial scope scored"
    );
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cues::parse_cue_set_str;

    fn cues() -> CueSet {
        let def = parse_cue_set_str(
            r#"{
                "name": "Test",
                "version": "1.0",
                "categories": {
                    "ue": ["uni[oó]n europea", "fondos europeos"],
                    "estado": ["ministerio", "real decreto"],
                    "ccaa": ["generalitat de catalunya", "consejer[ií]a"],
                    "provincia": ["diputaci[oó]n", "ayuntamiento"]
                },
                "provinces": ["Huesca", "Lleida", "Lérida"]
            }"#,
        )
        .unwrap();
        CueSet::compile(&def).unwrap()
    }

    #[test]
    fn test_no_cues_leaves_scope_unset() {
        let scores = score_scope("Ayuda para la compra de libros de texto.", &cues());
        assert_eq!(scores.max(), 0);
        assert_eq!(scores.decide(), None);
    }

    #[test]
    fn test_each_matching_pattern_counts_once() {
        let scores = score_scope(
            "Ministerio de Industria. Real Decreto 1/2025. El ministerio convoca...",
            &cues(),
        );
        assert_eq!(scores.estado, 2);
        assert_eq!(scores.decide(), Some(TerritorialScope::State));
    }

    #[test]
    fn test_state_beats_eu_on_tie() {
        let scores = score_scope("Ministerio, con cargo a la Unión Europea", &cues());
        assert_eq!(scores.estado, 1);
        assert_eq!(scores.ue, 1);
        assert_eq!(scores.decide(), Some(TerritorialScope::State));
    }

    #[test]
    fn test_region_beats_state_on_tie() {
        let scores = score_scope("Consejería de Empleo y Ministerio de Trabajo", &cues());
        assert_eq!(scores.ccaa, 1);
        assert_eq!(scores.estado, 1);
        assert_eq!(scores.decide(), Some(TerritorialScope::Region));
    }

    #[test]
    fn test_province_name_outweighs_region_cue() {
        let scores = score_scope(
            "Convocatoria de la Generalitat de Catalunya para empresas de Huesca",
            &cues(),
        );
        assert_eq!(scores.ccaa, 1);
        assert_eq!(scores.provincia, 2);
        assert_eq!(scores.decide(), Some(TerritorialScope::Province));
    }

    #[test]
    fn test_every_gazetteer_variant_counts() {
        let scores = score_scope("Lleida (antes Lérida)", &cues());
        // 2 + 2 for both names, +3 for the parenthetical
        assert_eq!(scores.provincia, 7);
    }

    #[test]
    fn test_parenthetical_province_bonus() {
        let scores = score_scope("Ayuntamiento de Fraga (Huesca)", &cues());
        // ayuntamiento 1 + Huesca 2 + parenthetical 3
        assert_eq!(scores.provincia, 6);
    }

    #[test]
    fn test_parenthesis_without_province_gives_no_bonus() {
        let scores = score_scope("Huesca (España)", &cues());
        assert_eq!(scores.provincia, 2);
    }

    #[test]
    fn test_comunidad_autonoma_with_province() {
        let scores = score_scope(
            "Consejería de la Comunidad Autónoma de Aragón, oficinas de Huesca",
            &cues(),
        );
        // consejería 1, then -1 for the disambiguation
        assert_eq!(scores.ccaa, 0);
        // Huesca 2 + disambiguation 2
        assert_eq!(scores.provincia, 4);
        assert_eq!(scores.decide(), Some(TerritorialScope::Province));
    }

    #[test]
    fn test_comunidad_autonoma_floor_at_zero() {
        let scores = score_scope("comunidad autonoma, Huesca", &cues());
        assert_eq!(scores.ccaa, 0);
        let removal = scores
            .steps
            .iter()
            .find(|s| s.scope == TerritorialScope::Region)
            .unwrap();
        assert_eq!(removal.delta, 0);
    }

    #[test]
    fn test_comunidad_autonoma_without_province() {
        let scores = score_scope("Ayudas de la comunidad autónoma", &cues());
        assert_eq!(scores.ccaa, 1);
        assert_eq!(scores.decide(), Some(TerritorialScope::Region));
    }

    #[test]
    fn test_steps_record_evidence() {
        let scores = score_scope("Diputación de Huesca", &cues());
        assert_eq!(scores.steps.len(), 2);
        assert!(scores.steps.iter().all(|s| s.scope == TerritorialScope::Province));
        assert!(scores.steps[1].reason.contains("Huesca"));
    }

    #[test]
    fn test_classify_scope_is_deterministic() {
        let text = "Fondos europeos gestionados por el Ministerio";
        let c = cues();
        assert_eq!(classify_scope(text, &c), classify_scope(text, &c));
    }
}
