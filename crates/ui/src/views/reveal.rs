use course_core::reveal::{RevealSchedule, RevealState};
use dioxus::prelude::*;

/// Drive a staggered reveal of `rows` rows from the `visible` flag.
///
/// One task per container walks the schedule; it is cancelled whenever the
/// flag changes and, as a scope task, when the component unmounts. Hiding
/// resets every row at once.
pub fn use_staggered_reveal(rows: usize, visible: bool) -> Signal<RevealState> {
    let mut state = use_signal(|| RevealState::new(RevealSchedule::for_rows(rows)));
    let mut driver: Signal<Option<Task>> = use_signal(|| None);

    use_effect(use_reactive!(|(visible,)| {
        if let Some(task) = driver.write().take() {
            task.cancel();
        }

        if !visible {
            state.write().hide();
            return;
        }

        let generation = state.write().show();
        let schedule = state.peek().schedule();
        let task = spawn(async move {
            let started = tokio::time::Instant::now();
            for entry in schedule.entries() {
                tokio::time::sleep_until(started + entry.offset).await;
                state.write().advance(generation, started.elapsed());
            }
        });
        driver.set(Some(task));
    }));

    state
}
