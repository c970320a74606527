//promptboard/src/main.rs
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use promptboard::app::{EventResult, PromptBoard};
use promptboard::kernel::services::adapters::{
    ensure_settings_file, load_settings, RuntimeServices,
};
use promptboard::kernel::services::ports::{ResourceLocation, DEFAULT_RESOURCE};
use promptboard::tui::crossterm::poll_input;
use promptboard::tui::terminal_guard::{
    install_panic_restore, install_termination_signals, TerminalGuard,
};
use promptboard::ui::backend::terminal::RatatuiTerminal;
use promptboard::views::board::theme::{detect_terminal_color_support, BoardTheme};

mod logging;

const IDLE_POLL: Duration = Duration::from_millis(100);
const FRAME_POLL: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let arg = std::env::args().nth(1);

    if let Err(e) = ensure_settings_file() {
        eprintln!("promptboard: cannot create settings file: {e}");
    }
    let settings = load_settings();
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let resource = arg
        .or_else(|| settings.resource.clone())
        .unwrap_or_else(|| DEFAULT_RESOURCE.to_string());
    let location = ResourceLocation::parse(&resource);
    tracing::info!(%location, "starting promptboard");

    let services = RuntimeServices::from_settings(&settings);
    let theme = BoardTheme::for_terminal(detect_terminal_color_support());
    let mut board = PromptBoard::new(location, &settings, services)?.with_theme(theme);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());
    let (signal_tx, signal_rx) = mpsc::channel();
    install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    board.start();

    let mut exit_code = None;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            exit_code = Some(signal.exit_code());
            break;
        }

        board.pump();
        board.tick();
        if board.needs_redraw() {
            terminal.draw(|backend, area| board.render(backend, area))?;
        }

        let timeout = if board.is_animating() {
            FRAME_POLL
        } else {
            IDLE_POLL
        };
        if let Some(event) = poll_input(timeout)? {
            if board.handle_input(&event) == EventResult::Quit {
                break;
            }
        }
    }

    drop(guard);
    tracing::info!("promptboard exited");
    if let Some(code) = exit_code {
        drop(logging);
        std::process::exit(code);
    }
    Ok(())
}
