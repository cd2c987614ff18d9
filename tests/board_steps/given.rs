//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tablero::board::{
    domain::TaskTitle,
    ports::{NewTask, TaskStore},
};

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) {
    run_async(world.controller.refresh());
}

#[given(r#"a board holding a waiting task titled "{title}""#)]
fn board_with_waiting_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let valid = TaskTitle::new(title).wrap_err("construct seeded task title")?;
    let seeded = run_async(world.store.create(NewTask::new(valid)))
        .wrap_err("seed waiting task into the store")?;
    world.seeded_task = Some(seeded);
    run_async(world.controller.refresh());
    Ok(())
}
