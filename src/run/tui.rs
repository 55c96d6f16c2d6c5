//! Terminal mode implementation.

use std::io::{self, IsTerminal, Read, Write};

use crate::config::Config;
use crate::core::input::Key;
use crate::core::navigation::{Flow, Navigator};
use crate::error::{ChklistError, Result};
use crate::terminal::raw::TerminalSession;
use crate::terminal::render::Renderer;

/// Run the interactive checklist on the controlling terminal.
pub fn run_terminal_mode(config: &Config) -> Result<()> {
    let list = super::load_list(config)?;

    check_terminals(io::stdin().is_terminal(), io::stdout().is_terminal())?;

    let len = list.len();
    let renderer = Renderer::new(config.render_mode, config.completed_char);
    let mut navigator = Navigator::new(list, renderer);

    let session = TerminalSession::new(config.render_mode)?;

    // stdout stays unlocked between writes so the signal thread can still
    // reach it while the loop is blocked on input
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();

    renderer.enter(&mut stdout, len)?;
    session.claim_screen(len);
    navigator.draw(&mut stdout)?;
    stdout.flush()?;

    run_loop_with(&mut navigator, &mut stdin, &mut stdout, |nav| {
        session.track_selection(nav.selection())
    })?;

    renderer.leave(&mut stdout, len, navigator.selection())?;
    stdout.flush()?;
    session.release_screen();
    tracing::info!(selection = navigator.selection(), "checklist closed");

    drop(session);
    Ok(())
}

/// Both ends must be a terminal: input for raw keys, output for the
/// cursor-addressed drawing.
fn check_terminals(stdin_is_tty: bool, stdout_is_tty: bool) -> Result<()> {
    if !stdin_is_tty {
        return Err(ChklistError::NotATerminal { stream: "input" });
    }
    if !stdout_is_tty {
        return Err(ChklistError::NotATerminal { stream: "output" });
    }
    Ok(())
}

/// Feed input bytes to the navigator until quit or end of input.
///
/// Every byte is handled and its output flushed before the next read.
pub fn run_loop<R: Read, W: Write>(
    navigator: &mut Navigator,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    run_loop_with(navigator, input, output, |_| {})
}

/// [`run_loop`], calling `after_key` with the navigator once each key's
/// output has been flushed.
pub fn run_loop_with<R, W, F>(
    navigator: &mut Navigator,
    input: &mut R,
    output: &mut W,
    mut after_key: F,
) -> io::Result<()>
where
    R: Read,
    W: Write,
    F: FnMut(&Navigator),
{
    while let Some(byte) = read_byte(input)? {
        let flow = navigator.handle_key(Key::from_byte(byte), output)?;
        output.flush()?;
        after_key(navigator);
        if flow == Flow::Quit {
            return Ok(());
        }
    }
    tracing::debug!("input closed");
    Ok(())
}

/// Blocking read of a single byte; `None` at end of input.
pub fn read_byte<R: Read>(input: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
