//! The command loop feeding a [`BlockTable`] with parsed commands.
use crate::command::{Action, Command};
use crate::error::Error;
use crate::table::BlockTable;

use log::debug;
use std::io::Write;

/// How a simulation run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A stop command was processed.
    Stopped,
    /// The command stream ran out of records.
    Exhausted,
}

/// Run the simulation: apply every command to the `table` and write the
/// listings to `output`.
///
/// Processing ends at the first stop command or at the end of the commands.
/// The first malformed command aborts the run with its error, the commands
/// processed so far remain applied. The output is flushed in every case, that
/// does not return an I/O error.
pub fn run<const N: usize, const B: usize, I, W>(
    table: &mut BlockTable<N, B>,
    commands: I,
    mut output: W,
) -> Result<Outcome, Error>
where
    I: IntoIterator<Item = Result<Command, Error>>,
    W: Write,
{
    let result = execute(table, commands, &mut output);
    output.flush()?;
    result
}

fn execute<const N: usize, const B: usize, I, W>(
    table: &mut BlockTable<N, B>,
    commands: I,
    output: &mut W,
) -> Result<Outcome, Error>
where
    I: IntoIterator<Item = Result<Command, Error>>,
    W: Write,
{
    for command in commands {
        let Command {
            action,
            pid,
            amount,
        } = command?;
        debug!("{} {pid} {amount}", action.code());

        match action {
            Action::Allocate => {
                // amounts, that cannot be a request, fail like an allocation
                // without a fitting run
                if let Ok(bytes) = usize::try_from(amount) {
                    table.allocate(pid, bytes);
                }
            }
            Action::Release => {
                table.release(pid);
            }
            Action::Print => write!(output, "{}", table.list())?,
            Action::Reboot => table.reset(),
            Action::Stop => return Ok(Outcome::Stopped),
        }
    }
    Ok(Outcome::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::{run, Outcome};
    use crate::command::CommandReader;
    use crate::error::Error;
    use crate::table::BlockTable;

    fn simulate(input: &str) -> (Result<Outcome, Error>, String) {
        let mut table = BlockTable::<8, 16>::new();
        let mut output = Vec::new();
        let outcome = run(&mut table, CommandReader::new(input.as_bytes()), &mut output);
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn allocate_and_print() {
        let (outcome, output) = simulate("A 3 20 P 0 0");
        assert_eq!(outcome.unwrap(), Outcome::Exhausted);
        assert_eq!(
            output,
            "\
AllocatedMemBlock 1
   Process Id = 3
   MemBlocks = 2
   MemorySize = 20
AllocatedMemBlock 2
   Process Id = 0
   MemBlocks = 6
   MemorySize = 96

"
        );
    }

    #[test]
    fn stop_ignores_remaining_commands() {
        let (outcome, output) = simulate("S 0 0\nP 0 0\nX 0 0\n");
        assert_eq!(outcome.unwrap(), Outcome::Stopped);
        assert!(output.is_empty());
    }

    #[test]
    fn unknown_action_aborts_after_earlier_output() {
        let (outcome, output) = simulate("P 0 0\nQ 1 1\nP 0 0\n");
        assert!(matches!(outcome, Err(Error::UnknownAction(code)) if code == "Q"));
        assert_eq!(output.matches("AllocatedMemBlock").count(), 1);
    }

    #[test]
    fn negative_amount_is_dropped() {
        let (outcome, output) = simulate("A 1 -5\nP 0 0\n");
        assert_eq!(outcome.unwrap(), Outcome::Exhausted);
        assert!(output.contains("Process Id = 0\n   MemBlocks = 8\n"));
        assert_eq!(output.matches("AllocatedMemBlock").count(), 1);
    }

    #[test]
    fn reboot_and_release() {
        let (_, output) = simulate("A 1 16 A 2 16 R 1 0 P 0 0 Z 0 0 P 0 0");
        let listings: Vec<_> = output.split("\n\n").collect();
        // two listings and the empty remainder after the last separator
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].matches("AllocatedMemBlock").count(), 3);
        assert_eq!(listings[1].matches("AllocatedMemBlock").count(), 1);
    }
}
