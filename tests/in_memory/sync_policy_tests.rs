//! In-memory integration tests for overlapping status writes.

use std::sync::Arc;

use super::helpers::{SeededStore, seeded};
use eyre::ensure;
use rstest::rstest;
use taskboard::board::{
    domain::{DragOutcome, TaskStatus},
    services::{BoardConfig, KanbanBoard, SyncPolicy},
};

/// Drags the first "To Do" card through every other column and back.
const ROUND_TRIP: [DragOutcome; 3] = [
    DragOutcome::between(TaskStatus::ToDo, 0, TaskStatus::InProgress, 0),
    DragOutcome::between(TaskStatus::InProgress, 0, TaskStatus::Done, 0),
    DragOutcome::between(TaskStatus::Done, 0, TaskStatus::ToDo, 0),
];

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn queued_policy_lands_last_drop_last(seeded: SeededStore) -> eyre::Result<()> {
    let mut board =
        KanbanBoard::mount(Arc::new(seeded.store.clone()), BoardConfig::default()).await?;

    for drag in ROUND_TRIP {
        board.on_drag_end(Some(drag))?;
    }
    board.flush().await;

    let statuses: Vec<_> = seeded
        .store
        .writes()?
        .into_iter()
        .map(|write| write.update.status)
        .collect();
    ensure!(
        statuses == [TaskStatus::InProgress, TaskStatus::Done, TaskStatus::ToDo],
        "writes out of order: {statuses:?}"
    );
    ensure!(board.failed_writes() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn detached_policy_delivers_every_write(seeded: SeededStore) -> eyre::Result<()> {
    let config = BoardConfig::default().with_sync_policy(SyncPolicy::Detached);
    let mut board = KanbanBoard::mount(Arc::new(seeded.store.clone()), config).await?;

    for drag in ROUND_TRIP {
        board.on_drag_end(Some(drag))?;
    }
    board.flush().await;

    // Completion order is not guaranteed here, only delivery.
    let dragged = seeded.id(0)?;
    let writes = seeded.store.writes()?;
    ensure!(writes.len() == ROUND_TRIP.len());
    ensure!(
        writes.iter().all(|write| &write.id == dragged),
        "every write targets the dragged card"
    );
    ensure!(board.failed_writes() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_writes_do_not_roll_back(seeded: SeededStore) -> eyre::Result<()> {
    let mut board =
        KanbanBoard::mount(Arc::new(seeded.store.clone()), BoardConfig::default()).await?;
    seeded.store.fail_writes("quota exceeded")?;

    board.on_drag_end(Some(DragOutcome::between(
        TaskStatus::Done,
        0,
        TaskStatus::InProgress,
        0,
    )))?;
    board.flush().await;

    let moved = seeded.id(3)?;
    ensure!(board.failed_writes() == 1);
    ensure!(
        board.sequence().get(moved).map(|task| task.status()) == Some(TaskStatus::InProgress)
    );
    ensure!(seeded.stored_status(moved)? == TaskStatus::Done);
    Ok(())
}
