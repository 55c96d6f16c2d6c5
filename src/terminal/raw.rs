use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

use crate::terminal::render::{RenderMode, leave_screen};

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);

/// The screen area held by the running checklist, read by the panic hook
/// and the signal thread.
static SCREEN: ScreenClaim = ScreenClaim::new();

const CLAIM_NONE: u8 = 0;
const CLAIM_INLINE: u8 = 1;
const CLAIM_ALTERNATE: u8 = 2;

type PanicHook = Box<dyn Fn(&std::panic::PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Which screen area a checklist holds and where its cursor is, kept in
/// atomics so cleanup on another thread can hand the screen back from the
/// right row.
#[derive(Debug)]
pub struct ScreenClaim {
    mode: AtomicU8,
    len: AtomicUsize,
    selection: AtomicUsize,
}

impl ScreenClaim {
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(CLAIM_NONE),
            len: AtomicUsize::new(0),
            selection: AtomicUsize::new(0),
        }
    }

    /// Record that `mode`'s enter sequence for a `len`-row list is written
    /// and the cursor sits on row 0.
    pub fn claim(&self, mode: RenderMode, len: usize) {
        self.len.store(len, Ordering::SeqCst);
        self.selection.store(0, Ordering::SeqCst);
        let claim = match mode {
            RenderMode::AlternateBuffer => CLAIM_ALTERNATE,
            RenderMode::Inline => CLAIM_INLINE,
        };
        self.mode.store(claim, Ordering::SeqCst);
    }

    /// Record the row the cursor was last flushed on.
    pub fn track(&self, selection: usize) {
        self.selection.store(selection, Ordering::SeqCst);
    }

    /// Forget the claim after a clean leave.
    pub fn release(&self) {
        self.mode.store(CLAIM_NONE, Ordering::SeqCst);
    }

    pub fn is_claimed(&self) -> bool {
        self.mode.load(Ordering::SeqCst) != CLAIM_NONE
    }

    /// Write the leave sequence for the claimed area and drop the claim.
    /// Writes nothing when nothing is claimed, so a second call is a no-op.
    pub fn write_release<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mode = match self.mode.swap(CLAIM_NONE, Ordering::SeqCst) {
            CLAIM_ALTERNATE => RenderMode::AlternateBuffer,
            CLAIM_INLINE => RenderMode::Inline,
            _ => return Ok(()),
        };
        leave_screen(
            out,
            mode,
            self.len.load(Ordering::SeqCst),
            self.selection.load(Ordering::SeqCst),
        )?;
        out.flush()
    }
}

impl Default for ScreenClaim {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII wrapper for raw mode and the claimed screen area.
/// Enables raw mode on creation.
/// Restores terminal state on drop, on panic, and on SIGINT/SIGTERM/SIGHUP.
pub struct TerminalSession {
    mode: RenderMode,
    original_hook: Option<PanicHook>,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    /// Enter raw mode. The screen itself is claimed later with
    /// [`TerminalSession::claim_screen`], once the enter sequence is written.
    pub fn new(mode: RenderMode) -> io::Result<Self> {
        Self::with_raw_mode(mode, crossterm::terminal::enable_raw_mode)
    }

    /// Raw mode is the last fallible step, so a failure leaves the terminal
    /// untouched.
    fn with_raw_mode(mode: RenderMode, enable: impl FnOnce() -> io::Result<()>) -> io::Result<Self> {
        #[cfg(unix)]
        let signal_guard = SignalGuard::new()?;

        enable()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        tracing::info!(?mode, "terminal raw mode enabled");

        // Set up panic hook to restore terminal before printing panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|info| {
            restore_terminal();
            eprintln!("{}", info);
        }));

        Ok(Self {
            mode,
            original_hook: Some(original_hook),
            #[cfg(unix)]
            signal_guard: Some(signal_guard),
        })
    }

    /// Record that the render mode's enter sequence for `len` rows has been
    /// written.
    pub fn claim_screen(&self, len: usize) {
        SCREEN.claim(self.mode, len);
    }

    /// Record the selected row once its cursor move has been flushed.
    pub fn track_selection(&self, selection: usize) {
        SCREEN.track(selection);
    }

    /// Record that the render mode's leave sequence has been written.
    pub fn release_screen(&self) {
        SCREEN.release();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        restore_terminal();

        // Replacing the hook while unwinding would abort the process
        if let Some(hook) = self.original_hook.take() {
            if !std::thread::panicking() {
                std::panic::set_hook(hook);
            }
        }
    }
}

/// Hand the screen back and leave raw mode. Safe to call more than once.
fn restore_terminal() {
    let mut stdout = io::stdout();

    let _ = SCREEN.write_release(&mut stdout);

    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
        let _ = crossterm::terminal::disable_raw_mode();
        tracing::info!("terminal raw mode disabled");
    }

    let _ = stdout.flush();
}

#[cfg(unix)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::warn!(signal, "termination signal received, restoring terminal");
                restore_terminal();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
