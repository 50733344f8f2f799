//! End-to-end board gestures against the in-memory adapter.

use super::helpers::{TestBoard, demo_board, find_titled, lanes_of};
use devtasks::board::{
    domain::{TaskDraft, TaskPriority, TaskStatus},
    services::{BoardError, DeleteOutcome, SaveOutcome},
};
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
fn demo_board_matches_starter_layout(demo_board: Result<TestBoard, BoardError>) -> eyre::Result<()> {
    let board = demo_board?;
    let tasks = board.store().snapshot()?;

    ensure!(
        lanes_of(&tasks)
            == vec![
                ("Configurar Banco de Dados".to_owned(), TaskStatus::Done),
                ("Criar Rotas da API".to_owned(), TaskStatus::Doing),
                ("Estilizar Frontend".to_owned(), TaskStatus::Todo),
            ]
    );
    ensure!(find_titled(&tasks, "Estilizar Frontend")?.priority() == TaskPriority::Medium);
    Ok(())
}

#[rstest]
fn filter_then_drag_then_clear_filter(
    demo_board: Result<TestBoard, BoardError>,
) -> eyre::Result<()> {
    let mut board = demo_board?;
    board.set_filter("FRONTEND");
    let view = board.view()?;
    ensure!(view.visible_count() == 1);

    let Some(card) = view
        .lane(TaskStatus::Todo)
        .and_then(|lane| lane.tasks.first())
    else {
        bail!("filtered todo lane should show the frontend card");
    };
    board.pick_up(card.id());
    board.drop_on(TaskStatus::Doing)?;

    let filtered = board.view()?;
    ensure!(filtered.count(TaskStatus::Todo) == 0);
    ensure!(filtered.count(TaskStatus::Doing) == 1);

    board.set_filter("");
    let full = board.view()?;
    ensure!(full.count(TaskStatus::Todo) == 0);
    ensure!(full.count(TaskStatus::Doing) == 2);
    ensure!(full.count(TaskStatus::Done) == 1);
    Ok(())
}

#[rstest]
fn created_task_lands_at_end_of_its_lane(
    demo_board: Result<TestBoard, BoardError>,
) -> eyre::Result<()> {
    let mut board = demo_board?;
    board.open_new_task();
    let Some(form) = board.modal_mut().form_mut() else {
        bail!("form should be open");
    };
    *form = TaskDraft::new("Configurar CI")
        .with_description("Pipeline de build")
        .with_priority(TaskPriority::Low)
        .with_status(TaskStatus::Done);

    let SaveOutcome::Created(created) = board.save_modal()? else {
        bail!("expected creation");
    };

    let view = board.view()?;
    let Some(done) = view.lane(TaskStatus::Done) else {
        bail!("done lane missing");
    };
    ensure!(done.tasks.last().map(|task| task.id()) == Some(created.id()));
    ensure!(done.count == 2);
    Ok(())
}

#[rstest]
fn deleting_twice_is_harmless(demo_board: Result<TestBoard, BoardError>) -> eyre::Result<()> {
    let board = demo_board?;
    let id = find_titled(&board.store().snapshot()?, "Criar Rotas da API")?.id();

    ensure!(board.delete_task(id)? == DeleteOutcome::Deleted);
    ensure!(board.delete_task(id)? == DeleteOutcome::Missing);
    ensure!(board.view()?.visible_count() == 2);
    Ok(())
}
