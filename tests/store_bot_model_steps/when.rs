//! When steps for bot model storage BDD scenarios.

use super::world::{StoreWorld, run_async};
use rstest_bdd_macros::when;

#[when("the bot model is stored")]
fn bot_model_stored(world: &mut StoreWorld) {
    let result = run_async(world.service.store(&world.input));
    world.last_result = Some(result);
}

#[when("the bot model is stored with the simplified schema")]
fn bot_model_stored_simple(world: &mut StoreWorld) {
    let result = run_async(world.service.store_simple(&world.input));
    world.last_result = Some(result);
}
