pub mod modality;
pub mod scope;

pub use modality::{classify_modality, ModalitySignals};
pub use scope::{classify_scope, score_scope, ScopeScores, ScoreStep};
