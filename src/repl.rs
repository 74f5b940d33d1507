use std::io::Write;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::shell::{Reply, Shell};

/// Read lines from the terminal and evaluate them until `exit` or EOF
pub fn run(shell: &mut Shell) -> Result<()> {
    let mut rl = rl_editor()?;
    let lines = std::iter::from_fn(|| Some(rl.readline(">> ")));
    run_lines(shell, lines, &mut std::io::stdout())
}

/// Evaluate lines as the terminal hands them over, writing replies and
/// errors to `out`. Ctrl-C drops the current line; EOF or `exit` stops.
pub fn run_lines<I, W>(shell: &mut Shell, lines: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = Result<String, ReadlineError>>,
    W: Write,
{
    for line in lines {
        let input = match line {
            Ok(input) => input,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        match shell.eval_line(&input) {
            Ok(Reply::Print(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Silent) => {},
            Ok(Reply::Exit) => break,
            Err(err) => {
                log::warn!("rejected input {input:?}: {err}");
                writeln!(out, "Error: {err}")?;
            },
        }
    }

    log::info!("leaving with {} entries", shell.store().len());
    Ok(())
}

fn rl_editor() -> Result<Editor<(), DefaultHistory>> {
    let cfg = rustyline::Config::builder()
        .tab_stop(2)
        .auto_add_history(true)
        .bracketed_paste(true)
        .build();

    Ok(rustyline::DefaultEditor::with_config(cfg)?)
}
