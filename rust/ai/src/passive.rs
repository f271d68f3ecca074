use rand::RngCore;
use shortstack_engine::betting::{BotPolicy, DecisionContext};
use shortstack_engine::player::PlayerAction;

/// Reference opponent that never folds or raises.
///
/// Calls it cannot afford are turned into folds by the betting round.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveBot;

impl BotPolicy for PassiveBot {
    fn decide(&self, _ctx: &DecisionContext<'_>, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::CheckCall
    }

    fn name(&self) -> &str {
        "passive"
    }
}
