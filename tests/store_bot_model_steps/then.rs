//! Then steps for bot model storage BDD scenarios.

use super::world::{StoreWorld, snapshot};
use portwire::bot_model::{domain::PricingModel, ports::BotModelStoredOutput};
use rstest_bdd_macros::then;

fn succeeded(world: &StoreWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("use case failed unexpectedly: {err}")),
        None => Err(eyre::eyre!("use case has not run in scenario world")),
    }
}

#[then("the number of stored records is {count:usize}")]
fn stored_record_count(world: &mut StoreWorld, count: usize) -> Result<(), eyre::Report> {
    succeeded(world)?;
    let records = snapshot(&world.stored_records);
    if records.len() != count {
        return Err(eyre::eyre!(
            "expected {count} stored records, found {}",
            records.len()
        ));
    }
    Ok(())
}

#[then(r#"the stored notification names "{name}" in the "{niche}" niche"#)]
fn stored_notification_names(
    world: &mut StoreWorld,
    name: String,
    niche: String,
) -> Result<(), eyre::Report> {
    let notifications = snapshot(&world.stored_notifications);
    let [notification] = notifications.as_slice() else {
        return Err(eyre::eyre!(
            "expected one stored notification, found {}",
            notifications.len()
        ));
    };
    let expected = BotModelStoredOutput {
        id: "bot-model-1".to_owned(),
        name,
        niche,
    };
    if *notification != expected {
        return Err(eyre::eyre!(
            "expected notification {expected:?}, found {notification:?}"
        ));
    }
    Ok(())
}

#[then("no validation failure is reported")]
fn no_validation_failure(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let rejections = snapshot(&world.rejections);
    if !rejections.is_empty() {
        return Err(eyre::eyre!("unexpected validation failures: {rejections:?}"));
    }
    Ok(())
}

#[then(r#"the validation failure for "{operation}" reports "{message}""#)]
fn validation_failure_reports(
    world: &mut StoreWorld,
    operation: String,
    message: String,
) -> Result<(), eyre::Report> {
    succeeded(world)?;
    let rejections = snapshot(&world.rejections);
    let [rejection] = rejections.as_slice() else {
        return Err(eyre::eyre!(
            "expected one validation failure, found {}",
            rejections.len()
        ));
    };
    if rejection.operation != operation || rejection.errors != [message.clone()] {
        return Err(eyre::eyre!(
            "expected {operation} to report [{message}], found {rejection:?}"
        ));
    }
    Ok(())
}

#[then(r#"the use case fails with "{message}""#)]
fn use_case_fails_with(world: &mut StoreWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected failure '{message}', found '{err}'")),
        Some(Ok(())) => Err(eyre::eyre!("expected failure '{message}', use case succeeded")),
        None => Err(eyre::eyre!("use case has not run in scenario world")),
    }
}

#[then("no stored notification is sent")]
fn no_stored_notification(world: &mut StoreWorld) -> Result<(), eyre::Report> {
    let notifications = snapshot(&world.stored_notifications);
    if !notifications.is_empty() {
        return Err(eyre::eyre!(
            "unexpected stored notifications: {notifications:?}"
        ));
    }
    Ok(())
}

#[then(r#"the stored record uses the "{pricing}" pricing model"#)]
fn stored_record_pricing(world: &mut StoreWorld, pricing: String) -> Result<(), eyre::Report> {
    let expected = PricingModel::try_from(pricing.as_str())?;
    let records = snapshot(&world.stored_records);
    if records.iter().any(|record| record.pricing_model != expected) || records.is_empty() {
        return Err(eyre::eyre!(
            "expected every stored record to use {expected}, found {records:?}"
        ));
    }
    Ok(())
}
