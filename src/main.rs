mod app;
mod models;
mod system;
mod ui;
mod utils;

use std::env;
use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use app::{App, NavigationRequest, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use system::{open_external, FilePreferenceStore, PreferenceStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{
    components::quick_links, CommandBar, Language, LayoutMode, MessageKey, NotFoundScreen,
    PageFooter, PageHeader, QuickLinksBar, QuickLinksDropdown, QuickMenu, RadioGroup, StatusBar,
    WarningScreen,
};

/// Scoped acquisition of the terminal: raw mode, alternate screen and the
/// mouse-event stream. Restored on drop regardless of how the loop exits,
/// so the pointer capture never outlives the UI.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // best-effort restore, try every step
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

fn init_logging() -> anyhow::Result<()> {
    let Some(base) = dirs::data_local_dir() else {
        return Ok(());
    };
    let dir = base.join("startui");
    fs::create_dir_all(&dir)?;
    let file = fs::File::create(dir.join("startui.log"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err:#}");
    }

    let route = env::args().nth(1);
    let mut store =
        FilePreferenceStore::load_default().context("failed to load preferences")?;
    let language = Language::from_pref(store.get("lang").as_deref());
    let mut app = App::new(language, route.as_deref())?;

    let guard = TerminalGuard::acquire().context("failed to initialise terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut store);

    drop(guard);
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &mut FilePreferenceStore,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            app.layout.update(f.area());
            app.sync_form_states();

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, f.area());
                }
                LayoutMode::Standard => render_main_ui(f, app),
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.is_menu_open() {
                        handle_menu_keys(app, key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let (width, height) = app.layout.terminal_size();
                        let screen = Rect::new(0, 0, width, height);
                        app.handle_mouse_down(mouse.column, mouse.row, screen);
                    }
                }
                _ => {}
            }
        }

        if let Some(request) = app.take_pending_navigation() {
            handle_navigation(app, store, request)?;
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Perform the side effects queued by menu/link activations.
fn handle_navigation(
    app: &mut App,
    store: &mut FilePreferenceStore,
    request: NavigationRequest,
) -> anyhow::Result<()> {
    match request {
        NavigationRequest::External(url) => {
            tracing::info!(url = %url, "opening external link");
            if let Err(err) = open_external(&url) {
                tracing::warn!(error = %err, "browser launch failed");
                app.show_toast(err.to_string());
            }
        }
        NavigationRequest::SwitchLanguage(language) => {
            store.set("lang", language.code());
            if let Err(err) = store.save() {
                // a language switch still applies for this session
                tracing::warn!(error = %err, "could not persist language preference");
            }
            app.switch_language(language)?;
        }
    }
    Ok(())
}

fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // shared bindings
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.quit();
            return;
        }
        (_, KeyCode::Char('q')) | (_, KeyCode::F(10)) => {
            app.quit();
            return;
        }
        (_, KeyCode::F(1)) => {
            app.toggle_menu(QuickMenu::Help);
            return;
        }
        (_, KeyCode::F(2)) => {
            app.toggle_menu(QuickMenu::Language);
            return;
        }
        (_, KeyCode::F(8)) => {
            let name = app.theme_manager.toggle();
            let toast = app.i18n.msg1(MessageKey::ThemeSwitchedToast, name);
            app.show_toast(toast);
            return;
        }
        _ => {}
    }

    match app.view {
        View::Form => match code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus_next_group(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus_prev_group(),
            KeyCode::Right | KeyCode::Char('l') => app.hover_next_option(),
            KeyCode::Left | KeyCode::Char('h') => app.hover_prev_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
            _ => {}
        },
        View::NotFound => match code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => app.not_found_hover_next(),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => app.not_found_hover_prev(),
            KeyCode::Enter => app.activate_not_found_link(),
            _ => {}
        },
    }
}

fn handle_menu_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Esc) => app.close_menu(),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => app.menu_hover_next(),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => app.menu_hover_prev(),
        (_, KeyCode::Enter) => app.activate_menu_item(),
        (_, KeyCode::F(1)) => app.toggle_menu(QuickMenu::Help),
        (_, KeyCode::F(2)) => app.toggle_menu(QuickMenu::Language),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (_, KeyCode::F(10)) => app.quit(),
        _ => {}
    }
}

/// Form groups are laid out through `App::group_area` so rendering and
/// mouse hit-testing cannot drift apart.
fn render_form(f: &mut ratatui::Frame<'_>, app: &App) {
    let theme = app.theme_manager.current();
    for (index, (config, state)) in app
        .form
        .groups()
        .iter()
        .zip(&app.group_states)
        .enumerate()
    {
        let area = app.group_area(index);
        if area.height == 0 {
            break;
        }
        let group = RadioGroup::new(config, state)
            .focused(index == app.focused_group)
            .theme(theme);
        f.render_widget(group, area);
    }
}

/// Open dropdown rendered last so it overlays the page content.
fn render_dropdown_if_open(f: &mut ratatui::Frame<'_>, app: &App) {
    let Some(menu) = app.quick_links.open_menu() else {
        return;
    };
    let items = app.open_menu_items();
    let rect = quick_links::menu_rect(
        menu,
        app.layout.areas().quick_links,
        f.area(),
        items,
        app.i18n,
    );
    let dropdown = QuickLinksDropdown::new(items, &app.quick_links)
        .theme(app.theme_manager.current());
    f.render_widget(dropdown, rect);
}

fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();
    let theme = app.theme_manager.current();

    f.render_widget(PageHeader::new(app.i18n).theme(theme), areas.header);
    f.render_widget(
        QuickLinksBar::new(&app.quick_links, app.i18n).theme(theme),
        areas.quick_links,
    );

    match app.view {
        View::Form => render_form(f, app),
        View::NotFound => {
            let screen = NotFoundScreen::new(app.i18n)
                .hover(app.not_found_hover)
                .theme(theme);
            f.render_widget(screen, areas.body);
        }
    }

    f.render_widget(PageFooter::new(app.i18n).theme(theme), areas.footer);

    let summary = app.form.summary();
    let status_bar = StatusBar::new(&summary)
        .toast(app.active_toast())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    f.render_widget(CommandBar::new(app.i18n).theme(theme), areas.command_bar);

    render_dropdown_if_open(f, app);
}
