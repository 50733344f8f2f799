//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use devtasks::board::{
    domain::TaskStatus,
    services::{BoardError, ModalError},
};
use rstest_bdd_macros::then;

#[then(r#"task "{title}" is in lane "{lane}""#)]
fn task_is_in_lane(world: &BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(lane.as_str())
        .map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))?;
    let id = world.task_id(&title)?;
    let task = world
        .board()?
        .store()
        .get(id)?
        .ok_or_else(|| eyre::eyre!("task {title} vanished"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected lane {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"lane "{lane}" shows {count:usize} tasks"#)]
fn lane_shows(world: &BoardWorld, lane: String, count: usize) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(lane.as_str())
        .map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))?;
    let shown = world.board()?.view()?.count(status);
    if shown != count {
        return Err(eyre::eyre!("lane {lane} shows {shown} tasks, expected {count}"));
    }
    Ok(())
}

#[then(r#"only "{title}" is visible"#)]
fn only_visible(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let view = world.board()?.view()?;
    let visible: Vec<&str> = view
        .lanes
        .iter()
        .flat_map(|lane| lane.tasks.iter().map(devtasks::board::domain::Task::title))
        .collect();
    if visible != [title.as_str()] {
        return Err(eyre::eyre!("expected only {title}, saw {visible:?}"));
    }
    Ok(())
}

#[then("the form is closed")]
fn form_is_closed(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.board()?.modal().is_open() {
        return Err(eyre::eyre!("expected the task form to be closed"));
    }
    Ok(())
}

#[then("the form is open")]
fn form_is_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !world.board()?.modal().is_open() {
        return Err(eyre::eyre!("expected the task form to be open"));
    }
    Ok(())
}

#[then("the save is rejected")]
fn save_is_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_save_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result"))?;

    if !matches!(result, Err(BoardError::Modal(ModalError::SaveUnavailable))) {
        return Err(eyre::eyre!("expected SaveUnavailable error, got {result:?}"));
    }
    Ok(())
}
