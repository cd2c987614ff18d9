//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is added through the composer"#)]
fn add_task_through_composer(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.controller.open_composer();
    let draft = world
        .controller
        .composer_draft_mut()
        .ok_or_else(|| eyre::eyre!("composer should be open"))?;
    draft.title = title;
    run_async(world.controller.add_task());
    Ok(())
}

#[when("a task with a blank title is added through the composer")]
fn add_blank_task_through_composer(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.controller.open_composer();
    let draft = world
        .controller
        .composer_draft_mut()
        .ok_or_else(|| eyre::eyre!("composer should be open"))?;
    draft.title = "   ".to_owned();
    run_async(world.controller.add_task());
    Ok(())
}

#[when("the task is marked completed")]
fn mark_task_completed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let seeded = world
        .seeded_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))?;
    run_async(
        world
            .controller
            .toggle_completed(seeded.id(), seeded.completed()),
    );
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let seeded = world
        .seeded_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))?;
    run_async(world.controller.delete_task(seeded.id()));
    Ok(())
}
