//! Column-derivation tests: partitioning, ordering, and stability.

use super::task;
use crate::board::domain::{Board, Stage, Task};
use rstest::{fixture, rstest};

#[fixture]
fn mixed_tasks() -> Vec<Task> {
    vec![
        task("a", "Draft proposal", false),
        task("b", "File expenses", true),
        task("c", "Review design", false),
        task("d", "Ship release", true),
        task("e", "Plan retro", false),
    ]
}

#[rstest]
fn derivation_partitions_by_completion(mixed_tasks: Vec<Task>) {
    let board = Board::derive(&mixed_tasks);

    assert!(board.waiting().iter().all(|t| !t.completed()));
    assert!(board.resolved().iter().all(Task::completed));
    assert_eq!(board.task_count(), mixed_tasks.len());
}

#[rstest]
fn derivation_preserves_input_order_within_each_stage(mixed_tasks: Vec<Task>) {
    let board = Board::derive(&mixed_tasks);

    let waiting_ids: Vec<&str> = board.waiting().iter().map(|t| t.id().as_str()).collect();
    let resolved_ids: Vec<&str> = board.resolved().iter().map(|t| t.id().as_str()).collect();

    assert_eq!(waiting_ids, ["a", "c", "e"]);
    assert_eq!(resolved_ids, ["b", "d"]);
}

#[rstest]
fn reserved_middle_stage_is_always_empty(mixed_tasks: Vec<Task>) {
    let board = Board::derive(&mixed_tasks);
    assert!(board.pending_confirmation().is_empty());
    assert!(board.stage_items(Stage::PendingConfirmation).is_empty());
}

#[rstest]
fn derivation_of_empty_input_yields_empty_board() {
    let board = Board::derive(&[]);
    assert_eq!(board, Board::default());
    assert_eq!(board.task_count(), 0);
}

#[rstest]
fn derivation_is_deterministic(mixed_tasks: Vec<Task>) {
    assert_eq!(Board::derive(&mixed_tasks), Board::derive(&mixed_tasks));
}

#[rstest]
fn contains_finds_tasks_in_any_stage(mixed_tasks: Vec<Task>) {
    let board = Board::derive(&mixed_tasks);
    assert!(board.contains(task("a", "Draft proposal", false).id()));
    assert!(board.contains(task("d", "Ship release", true).id()));
    assert!(!board.contains(task("z", "Missing", false).id()));
}
