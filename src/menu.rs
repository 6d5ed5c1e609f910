//! Interactive numbered menu driving the task manager.
//!
//! `MenuApp` owns the session, the input reader and the output writer for the
//! whole run. Each loop iteration prints the menu, reads one choice, gathers
//! the arguments that choice needs and dispatches to the command handlers.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::board::Session;
use crate::cmd::*;
use crate::error::TaskResult;
use crate::fields::MenuChoice;
use crate::input::LineInput;
use crate::style::Palette;

const TITLE: &str = "--- Daily Task Manager ---";

/// Menu application state.
pub struct MenuApp<R, W> {
    session: Session,
    input: LineInput<R>,
    output: W,
    palette: Palette,
    should_exit: bool,
}

impl<R: BufRead, W: Write> MenuApp<R, W> {
    /// Create a menu over `session`, reading from `reader` and writing to `output`.
    pub fn new(session: Session, reader: R, output: W, palette: Palette) -> Self {
        Self {
            session,
            input: LineInput::new(reader),
            output,
            palette,
            should_exit: false,
        }
    }

    /// Run until Exit is chosen or input runs out.
    ///
    /// Rejected operations are reported and the loop continues. Only I/O
    /// failures end the loop early. The reader is dropped on return.
    pub fn run(mut self) -> TaskResult<Session> {
        info!(capacity = self.session.history.capacity(), "task manager started");
        while !self.should_exit {
            self.render_menu()?;
            if let Err(err) = self.step() {
                if !err.is_recoverable() {
                    warn!(error = %err, "menu loop aborted");
                    return Err(err);
                }
                debug!(error = %err, detail = %err.detail(), "operation rejected");
                writeln!(self.output, "{}", self.palette.error(&err.to_string()))?;
            }
        }
        self.output.flush()?;
        info!("task manager stopped");
        Ok(self.session)
    }

    /// Print the menu and the option prompt.
    fn render_menu(&mut self) -> TaskResult<()> {
        writeln!(self.output, "\n{}", self.palette.header(TITLE))?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        self.prompt("Choose an option: ")
    }

    fn prompt(&mut self, text: &str) -> TaskResult<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one choice and carry it out.
    fn step(&mut self) -> TaskResult<()> {
        let Some(number) = self.input.read_number()? else {
            return self.exit();
        };
        let choice = MenuChoice::try_from(number)?;
        debug!(?choice, "menu choice");
        self.handle_choice(choice)
    }

    fn handle_choice(&mut self, choice: MenuChoice) -> TaskResult<()> {
        let palette = self.palette;
        match choice {
            MenuChoice::ViewTasks => cmd_view(&self.session, &mut self.output, &palette),
            MenuChoice::UpdateTask => {
                self.prompt("Enter task index to update: ")?;
                let Some(index) = self.input.read_number()? else {
                    return self.exit();
                };
                let index = self.session.board.check_index(index)?;
                self.prompt("Enter new task: ")?;
                let Some(text) = self.input.read_line()? else {
                    return self.exit();
                };
                cmd_update(&mut self.session, &mut self.output, &palette, index, &text)
            },
            MenuChoice::CompleteTask => {
                self.prompt("Enter task index to complete: ")?;
                let Some(index) = self.input.read_number()? else {
                    return self.exit();
                };
                cmd_complete(&mut self.session, &mut self.output, &palette, index)
            },
            MenuChoice::PeekCompleted => cmd_peek(&self.session, &mut self.output),
            MenuChoice::UndoCompletion => cmd_undo(&mut self.session, &mut self.output, &palette),
            MenuChoice::AddDynamic => {
                self.prompt("Enter new task description: ")?;
                let Some(text) = self.input.read_line()? else {
                    return self.exit();
                };
                cmd_add(&mut self.session, &mut self.output, &palette, &text)
            },
            MenuChoice::RemoveDynamic => {
                self.prompt("Enter the task position to remove (starting from 0): ")?;
                let Some(position) = self.input.read_number()? else {
                    return self.exit();
                };
                cmd_remove(&mut self.session, &mut self.output, &palette, position)
            },
            MenuChoice::ListDynamic => cmd_list(&self.session, &mut self.output, &palette),
            MenuChoice::Exit => self.exit(),
        }
    }

    /// Leave the loop. Reached from the Exit option and from end of input.
    fn exit(&mut self) -> TaskResult<()> {
        self.should_exit = true;
        writeln!(self.output, "\nExiting Task Manager.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_bytes(script: &[u8]) -> (Session, String) {
        let mut out = Vec::new();
        let app = MenuApp::new(
            Session::new(10),
            Cursor::new(script.to_vec()),
            &mut out,
            Palette::plain(),
        );
        let session = app.run().unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn run_script(script: &str) -> (Session, String) {
        run_bytes(script.as_bytes())
    }

    #[test]
    fn exit_ends_the_loop() {
        let (_, out) = run_script("9\n");
        assert!(out.contains("1. View Tasks"));
        assert!(out.contains("Choose an option: "));
        assert!(out.ends_with("Exiting Task Manager.\n"));
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let (_, out) = run_script("1\n");
        assert!(out.contains("0: Check Schedule"));
        assert!(out.ends_with("Exiting Task Manager.\n"));
    }

    #[test]
    fn end_of_input_mid_prompt_exits_cleanly() {
        let (session, out) = run_script("2\n0\n");
        assert!(out.contains("Enter new task: "));
        assert!(out.ends_with("Exiting Task Manager.\n"));
        assert_eq!(session.board.get(0).unwrap().description, "Check Schedule");
    }

    #[test]
    fn non_numeric_input_at_any_prompt_changes_nothing() {
        for script in ["abc\n9\n", "2\nabc\n9\n", "3\nabc\n9\n", "6\nx\n7\nabc\n9\n"] {
            let (session, out) = run_script(script);
            assert!(out.contains("Invalid input! Please enter a number."), "{script:?}");
            assert!(session.history.is_empty());
            assert!(session.board.iter().all(|(_, t)| !t.completed));
        }
    }

    #[test]
    fn invalid_input_returns_to_menu_without_prompting_text() {
        let (session, out) = run_script("2\nabc\n9\n");
        assert!(!out.contains("Enter new task: "));
        assert_eq!(session.board.get(0).unwrap().description, "Check Schedule");
        assert_eq!(out.matches("Choose an option: ").count(), 2);
    }

    #[test]
    fn unknown_choice_is_reported() {
        let (_, out) = run_script("12\n0\n9\n");
        assert_eq!(out.matches("Invalid choice! Try again.").count(), 2);
    }

    #[test]
    fn update_with_bad_index_skips_text_prompt() {
        let (_, out) = run_script("2\n7\n9\n");
        assert!(out.contains("Invalid index."));
        assert!(!out.contains("Enter new task: "));
    }

    #[test]
    fn update_rewrites_description() {
        let (session, out) = run_script("2\n1\nAttend seminar\n1\n9\n");
        assert!(out.contains("Task updated successfully."));
        assert!(out.contains("1: Attend seminar\n"));
        assert_eq!(session.board.get(1).unwrap().description, "Attend seminar");
    }

    #[test]
    fn duplicate_completion_scenario() {
        let (session, out) = run_script("3\n2\n3\n2\n5\n9\n");
        assert_eq!(out.matches("Task 'Exercise' marked as completed.").count(), 2);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.peek().unwrap().source_index, 2);
        assert!(session.board.get(2).unwrap().completed);
    }

    #[test]
    fn undo_without_history_underflows() {
        let (_, out) = run_script("5\n4\n9\n");
        assert!(out.contains("Stack Underflow! No tasks to undo."));
        assert!(out.contains("Last completed task: No completed tasks."));
    }

    #[test]
    fn dynamic_task_round_trip() {
        let (session, out) = run_script("6\nbuy milk\n6\ncall mom\n7\n0\n8\n7\n4\n9\n");
        assert!(out.contains("Task added: buy milk"));
        assert!(out.contains("Task 'buy milk' removed."));
        assert!(out.contains("Dynamic Tasks:\n0: call mom\n"));
        assert!(out.contains("Invalid position. No task removed."));
        assert_eq!(session.dynamic.display_tasks().collect::<Vec<_>>(), vec![(0, "call mom")]);
    }

    #[test]
    fn remove_from_empty_list_reports_no_tasks() {
        let (_, out) = run_script("7\n0\n8\n9\n");
        assert!(out.contains("No tasks to remove."));
        assert!(out.contains("No dynamic tasks available."));
    }

    #[test]
    fn overflow_rejects_extra_completion() {
        let mut script = String::new();
        for i in 0..11 {
            script.push_str(&format!("3\n{}\n", i % 7));
        }
        script.push_str("9\n");
        let (session, out) = run_script(&script);
        assert_eq!(session.history.len(), 10);
        assert_eq!(out.matches("Stack Overflow! Cannot add more completed tasks.").count(), 1);
        assert_eq!(session.history.peek().unwrap().source_index, 2);
    }

    #[test]
    fn invalid_utf8_at_menu_prompt_is_invalid_input() {
        let (session, out) = run_bytes(&[0xff, b'\n', b'9', b'\n']);
        assert!(out.contains("Invalid input! Please enter a number."));
        assert!(out.ends_with("Exiting Task Manager.\n"));
        assert!(session.history.is_empty());
    }

    #[test]
    fn invalid_utf8_task_text_is_kept_lossily() {
        let (session, out) = run_bytes(b"6\n\xff\xfe\n8\n9\n");
        assert!(out.contains("Dynamic Tasks:\n0: \u{fffd}\u{fffd}\n"));
        assert_eq!(session.dynamic.len(), 1);
    }
}
