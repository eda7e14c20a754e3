use crate::entities::ActorKind;
use crate::rules::ActorRules;

/// Rules for siege engines. Nothing is derived; the sheet shows stored values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiegeEngineRules;

impl ActorRules for SiegeEngineRules {
    fn kind(&self) -> ActorKind {
        ActorKind::SiegeEngine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ActorData, ActorRecord, SiegeEngineData};

    #[test]
    fn passes_leave_record_unchanged() {
        let mut actor = ActorRecord::new(
            "Trebuchet",
            ActorData::SiegeEngine(SiegeEngineData {
                range_bonus: 2,
                ..SiegeEngineData::default()
            }),
        );
        let before = actor.clone();
        SiegeEngineRules
            .prepare_base(&mut actor)
            .expect("siege engine base pass");
        SiegeEngineRules
            .prepare_derived(&mut actor)
            .expect("siege engine derived pass");
        assert_eq!(actor, before);
    }
}
