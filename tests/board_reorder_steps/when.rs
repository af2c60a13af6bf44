//! When steps for board reorder BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::board::domain::{DragOutcome, TaskStatus};

fn parse_status(label: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(label).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

fn drop_and_flush(world: &mut BoardWorld, drag: Option<DragOutcome>) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    let before = board.sequence().clone();
    let result = board.on_drag_end(drag);
    run_async(board.flush());
    world.before_drop = Some(before);
    world.last_drop_result = Some(result);
    Ok(())
}

#[when("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let mut board = world.new_board()?;
    world.last_load_error = run_async(board.load()).err();
    world.board = Some(board);
    Ok(())
}

#[when(
    r#"the card at index {source_index:usize} of "{source}" is dropped at index {destination_index:usize} of "{destination}""#
)]
fn card_is_dropped(
    world: &mut BoardWorld,
    source_index: usize,
    source: String,
    destination_index: usize,
    destination: String,
) -> Result<(), eyre::Report> {
    let drag = DragOutcome::between(
        parse_status(&source)?,
        source_index,
        parse_status(&destination)?,
        destination_index,
    );
    drop_and_flush(world, Some(drag))
}

#[when("the card is dropped outside every column")]
fn card_dropped_outside(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    drop_and_flush(world, None)
}
