//! Given steps for bot model storage BDD scenarios.

use super::world::{StoreWorld, bot_model_input};
use portwire::bot_model::ports::{StoreBotModelDto, StoredBotModel, store_bot_model_port};
use portwire::di::{Adapter, PortError};
use rstest_bdd_macros::given;
use serde_json::json;

#[given("recording adapters are bound to every bot model port")]
fn recording_adapters_bound(world: &mut StoreWorld) {
    world.bind_recording_adapters();
}

#[given("only the validation failure port is bound")]
fn only_validation_failure_bound(world: &mut StoreWorld) {
    world.bind_validation_failed_recorder();
}

#[given("no adapters are bound")]
fn no_adapters_bound(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    if !world.registry.is_empty() {
        return Err(eyre::eyre!("scenario registry should start empty"));
    }
    Ok(())
}

#[given(r#"the store adapter fails with "{message}""#)]
fn store_adapter_fails(world: &mut StoreWorld, message: String) {
    world.registry.bind(
        store_bot_model_port(),
        Adapter::from_fn(move |_dto: StoreBotModelDto| {
            let failure = PortError::message(message.clone());
            async move { Err::<StoredBotModel, _>(failure) }
        }),
    );
}

#[given(r#"a bot model named "{name}" in the "{niche}" niche"#)]
fn a_bot_model(world: &mut StoreWorld, name: String, niche: String) {
    world.input = bot_model_input(&name, &niche);
}

#[given(r#"the bot model slug is "{slug}""#)]
fn bot_model_slug(world: &mut StoreWorld, slug: String) -> Result<(), eyre::Report> {
    let member = world
        .input
        .get_mut("slug")
        .ok_or_else(|| eyre::eyre!("no bot model input in scenario world"))?;
    *member = json!(slug);
    Ok(())
}

#[given("the bot model platform is blank")]
fn bot_model_platform_blank(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let member = world
        .input
        .pointer_mut("/technicalSpecification/platform")
        .ok_or_else(|| eyre::eyre!("no bot model input in scenario world"))?;
    *member = json!("");
    Ok(())
}
