use crate::engine::ParameterSink;
use crate::errors::GameMasterResult;
use crate::exporter;
use crate::game_master::GameMaster;

/// Builds engine records against a loaded game master.
///
/// Holds the store by reference; create one per store and use it for every
/// creature and move request.
#[derive(Debug, Clone, Copy)]
pub struct Interface<'gm> {
    game_master: &'gm GameMaster,
}

impl<'gm> Interface<'gm> {
    pub fn new(game_master: &'gm GameMaster) -> Self {
        Interface { game_master }
    }

    pub fn game_master(&self) -> &'gm GameMaster {
        self.game_master
    }

    /// Push the store's settings into the engine. Call once before building battles.
    pub fn apply<S: ParameterSink>(&self, sink: &mut S) -> GameMasterResult<()> {
        exporter::export(self.game_master, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineParameters;
    use crate::pokemon::PokemonRequest;
    use crate::test_support::sample_game_master;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_then_build() {
        let gm = sample_game_master();
        let interface = Interface::new(&gm);
        let mut sink = EngineParameters::new();
        interface.apply(&mut sink).unwrap();
        assert_eq!(sink.effectiveness_writes, 324);

        let dragonite = interface
            .resolve_request(&PokemonRequest::new("dragonite"))
            .unwrap();
        assert_eq!(dragonite.max_hp, 168);
    }

    #[test]
    fn test_interface_over_an_empty_store() {
        let gm = GameMaster::default();
        let interface = Interface::new(&gm);
        let err = interface
            .resolve_request(&PokemonRequest::new("dragonite"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
