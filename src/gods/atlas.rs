//! Atlas: may build a dome at any level.
//!
//! The player declares [`Intent::DomeBuild`] before building; the next build
//! that turn caps the cell with a dome instead of adding a block.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{standard, God, GodPower, Transition};
use crate::board::WorkerId;
use crate::core::{CharacterRuleViolation, Coord, GameError, Intent};
use crate::game::GameState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Atlas {
    dome_declared: bool,
    built: bool,
}

impl GodPower for Atlas {
    fn god(&self) -> God {
        God::Atlas
    }

    fn declare(&mut self, _state: &GameState, intent: Intent) -> Result<Transition, GameError> {
        match intent {
            Intent::DomeBuild if self.built => Err(CharacterRuleViolation::IntentUnavailable {
                god: God::Atlas,
                intent,
                reason: "the build for this turn is done",
            }
            .into()),
            Intent::DomeBuild => {
                self.dome_declared = true;
                Ok(Transition::Hold)
            }
            Intent::BuildBeforeMove { .. } | Intent::StayInPlace { .. } => {
                Err(CharacterRuleViolation::UnsupportedIntent {
                    god: God::Atlas,
                    intent,
                }
                .into())
            }
        }
    }

    fn build(&mut self, state: &mut GameState, worker: WorkerId, at: Coord) -> Result<(), GameError> {
        if self.dome_declared {
            standard::check_build(state, worker, at)?;
            state.board_mut().build_dome(at)?;
            self.dome_declared = false;
            debug!(%worker, %at, "Atlas built a dome");
        } else {
            standard::build(state, worker, at)?;
        }
        self.built = true;
        Ok(())
    }

    fn turn_state(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert("canBuildDome".to_string(), i64::from(self.dome_declared));
        map
    }
}
