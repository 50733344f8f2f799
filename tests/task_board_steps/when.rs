//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use devtasks::board::domain::TaskStatus;
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn parse_lane(lane: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(lane).map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))
}

#[when(r#"the user drags "{title}" onto lane "{lane}""#)]
fn drag_onto_lane(world: &mut BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    let id = world.task_id(&title)?;
    let board = world.board_mut()?;
    board.pick_up(id);
    let _effect = board.hover(target);
    board.drop_on(target).wrap_err("drop task in scenario")?;
    Ok(())
}

#[when(r#"the user drops onto lane "{lane}" without picking anything up"#)]
fn drop_without_pick_up(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let target = parse_lane(&lane)?;
    world
        .board_mut()?
        .drop_on(target)
        .wrap_err("drop without pick-up in scenario")?;
    Ok(())
}

#[when(r#"the user filters by "{query}""#)]
fn filter_by(world: &mut BoardWorld, query: String) -> Result<(), eyre::Report> {
    world.board_mut()?.set_filter(query);
    Ok(())
}

#[when(r#"the user opens "{title}" and deletes it"#)]
fn open_and_delete(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let board = world.board_mut()?;
    if !board.open_task(id)? {
        return Err(eyre::eyre!("task {title} could not be opened"));
    }
    board
        .delete_from_modal()
        .wrap_err("delete from form in scenario")?;
    Ok(())
}

#[when("the user saves a new task without a title")]
fn save_without_title(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = world.board_mut()?;
    board.open_new_task();
    let result = board.save_modal();
    world.last_save_result = Some(result);
    Ok(())
}
