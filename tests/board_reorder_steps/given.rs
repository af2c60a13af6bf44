//! Given steps for board reorder BDD scenarios.

use super::world::{BoardWorld, COLLECTION, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{Priority, Task, TaskData, TaskId, TaskStatus};

#[given(r#"a task "{id}" with status "{status}""#)]
fn task_with_status(world: &mut BoardWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = Task::new(
        TaskId::new(id.as_str())?,
        TaskData {
            title: format!("Task {id}"),
            description: String::new(),
            date: "2024-05-20".to_owned(),
            priority: Priority::Medium,
            status: parsed,
        },
    );
    world
        .store
        .insert_tasks(COLLECTION, [&task])
        .wrap_err("seed task for scenario")?;
    Ok(())
}

#[given("the board is mounted")]
fn board_is_mounted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let mut board = world.new_board()?;
    run_async(board.load()).wrap_err("load board in scenario setup")?;
    world.board = Some(board);
    Ok(())
}

#[given(r#"the store rejects reads with "{message}""#)]
fn store_rejects_reads(world: &mut BoardWorld, message: String) -> Result<(), eyre::Report> {
    world.store.fail_reads(message)?;
    Ok(())
}

#[given(r#"the store rejects writes with "{message}""#)]
fn store_rejects_writes(world: &mut BoardWorld, message: String) -> Result<(), eyre::Report> {
    world.store.fail_writes(message)?;
    Ok(())
}
