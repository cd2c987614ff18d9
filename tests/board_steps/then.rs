//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use tablero::board::domain::Task;

fn expect_single_titled(tasks: &[Task], title: &str) -> Result<(), eyre::Report> {
    if tasks.len() != 1 {
        return Err(eyre::eyre!("expected exactly one task, found {}", tasks.len()));
    }
    let found = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    if found.title() != title {
        return Err(eyre::eyre!(
            "expected task titled {title:?}, found {:?}",
            found.title()
        ));
    }
    Ok(())
}

#[then(r#"the waiting stage contains exactly one task titled "{title}""#)]
fn waiting_contains_single_task(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    expect_single_titled(world.controller.board().waiting(), &title)
}

#[then(r#"the resolved stage contains exactly one task titled "{title}""#)]
fn resolved_contains_single_task(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    expect_single_titled(world.controller.board().resolved(), &title)
}

#[then("the resolved stage is empty")]
fn resolved_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.controller.board().resolved().is_empty() {
        return Err(eyre::eyre!("expected an empty resolved stage"));
    }
    Ok(())
}

#[then("the waiting stage is empty")]
fn waiting_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.controller.board().waiting().is_empty() {
        return Err(eyre::eyre!("expected an empty waiting stage"));
    }
    Ok(())
}

#[then("the board has no tasks")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = world.controller.board().task_count();
    if count != 0 {
        return Err(eyre::eyre!("expected an empty board, found {count} tasks"));
    }
    Ok(())
}

#[then("the composer stays open")]
fn composer_stays_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.controller.composer().is_open() {
        return Err(eyre::eyre!("expected the composer to remain open"));
    }
    Ok(())
}
