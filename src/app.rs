// Application state and event routing
//
// Owns the authoritative form model, the transient per-group mirrors, the
// quick-links menus and the current view. Key and mouse handlers mutate
// state synchronously; navigation side effects are queued and drained by
// the main loop.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::models::{FormModel, RadioGroupConfig, RadioOption, SelectionChange};
use crate::system::{lang_from_href, locale_href};
use crate::ui::components::footer::INITIALIZR_DOCS_URL;
use crate::ui::components::{footer, not_found, quick_links, radio};
use crate::ui::{
    I18n, Language, LayoutManager, LinkItem, MessageKey, QuickLinksState, QuickMenu, TextKey,
    ThemeManager,
};
use crate::utils::error::Result;

/// Rows a rendered group occupies: title, options, trailing blank.
pub const GROUP_ROWS: u16 = 3;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    NotFound,
}

/// Side effects the main loop performs on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Open an external URL in the browser.
    External(String),
    /// Re-render in the given language and persist the flag.
    SwitchLanguage(Language),
}

/// The form content of the bootstrap page, localized group titles included.
pub fn create_default_form(i18n: I18n) -> Result<FormModel> {
    let groups = vec![
        RadioGroupConfig::new(
            "project",
            i18n.tr(TextKey::GroupProject),
            vec![
                RadioOption::new("maven-project", "Maven Project", "2.1.8.RELEASE")?,
                RadioOption::new("gradle-project", "Gradle Project", "2.1.8.RELEASE")?,
            ],
            "maven-project",
        )?,
        RadioGroupConfig::new(
            "language",
            i18n.tr(TextKey::GroupLanguage),
            vec![
                RadioOption::new("java", "Java", "2.1.8.RELEASE")?,
                RadioOption::new("kotlin", "Kotlin", "2.1.8.RELEASE")?,
                RadioOption::new("groovy", "Groovy", "2.1.8.RELEASE")?,
            ],
            "java",
        )?,
        RadioGroupConfig::new(
            "bootVersion",
            i18n.tr(TextKey::GroupVersion),
            vec![
                RadioOption::new("2.2.0.M5", "2.2.0 M5", "2.2.0.M5")?,
                RadioOption::new("2.1.8.RELEASE", "2.1.8", "2.1.8.RELEASE")?,
                RadioOption::new("1.5.22.RELEASE", "1.5.22", "1.5.22.RELEASE")?,
            ],
            "2.1.8.RELEASE",
        )?,
        RadioGroupConfig::new(
            "packaging",
            i18n.tr(TextKey::GroupPackaging),
            vec![
                RadioOption::new("jar", "Jar", "2.1.8.RELEASE")?,
                RadioOption::new("war", "War", "2.1.8.RELEASE")?,
            ],
            "jar",
        )?,
    ];
    FormModel::new(groups)
}

fn create_language_menu() -> Result<Vec<LinkItem>> {
    Ok(vec![
        LinkItem::new("lang-zh", "中文", locale_href("zh"))?,
        LinkItem::new("lang-en", "English", locale_href("en"))?,
    ])
}

fn create_help_menu(i18n: I18n) -> Result<Vec<LinkItem>> {
    Ok(vec![
        LinkItem::new(
            "help-projects",
            i18n.tr(TextKey::HelpFrameworkProjects),
            INITIALIZR_DOCS_URL,
        )?
        .external(true),
        LinkItem::new(
            "help-spring-projects",
            i18n.tr(TextKey::HelpSpringProjects),
            "https://spring.io/projects",
        )?
        .external(true),
        LinkItem::new(
            "help-guides",
            i18n.tr(TextKey::HelpSpringGuides),
            "https://spring.io/guides",
        )?
        .external(true),
        LinkItem::new(
            "help-spring-blog",
            i18n.tr(TextKey::HelpWhatsNew),
            "https://spring.io/blog",
        )?
        .external(true),
        LinkItem::new(
            "help-migration",
            i18n.tr(TextKey::HelpMigration),
            "https://github.com/spring-projects/spring-boot/wiki/Spring-Boot-2.0-Migration-Guide",
        )?
        .external(true),
    ])
}

pub struct App {
    should_quit: bool,
    pub layout: LayoutManager,
    pub theme_manager: ThemeManager,
    pub i18n: I18n,
    pub view: View,
    pub form: FormModel,
    pub group_states: Vec<radio::RadioGroupState>,
    pub focused_group: usize,
    pub quick_links: QuickLinksState,
    pub language_menu: Vec<LinkItem>,
    pub help_menu: Vec<LinkItem>,
    pub not_found_hover: usize,
    pub toast_message: Option<(String, Instant)>,
    pending_navigation: Option<NavigationRequest>,
}

impl App {
    pub fn new(language: Language, route: Option<&str>) -> Result<Self> {
        let i18n = I18n::new(language);
        let form = create_default_form(i18n)?;
        let group_states = form
            .groups()
            .iter()
            .map(|group| radio::RadioGroupState::new(group.default_key.clone()))
            .collect();

        let view = match route {
            None | Some("/") => View::Form,
            Some(other) => {
                tracing::warn!(route = other, "unknown route, showing 404 view");
                View::NotFound
            }
        };

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::new(),
            i18n,
            view,
            form,
            group_states,
            focused_group: 0,
            quick_links: QuickLinksState::new(),
            language_menu: create_language_menu()?,
            help_menu: create_help_menu(i18n)?,
            not_found_hover: 0,
            toast_message: None,
            pending_navigation: None,
        })
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // --- controlled selection ---------------------------------------------

    /// Re-bind every group mirror to the form model. Runs before each
    /// render so external truth always wins over stale mirrors.
    pub fn sync_form_states(&mut self) {
        for (config, state) in self.form.groups().iter().zip(&mut self.group_states) {
            state.sync(self.form.selected_for(&config.id));
        }
    }

    /// The change callback: runs after the group mirror was updated, so a
    /// reader observes a consistent post-update view.
    fn on_selection_change(&mut self, change: SelectionChange) {
        self.form.apply(&change);
        tracing::debug!(
            group = %change.group_id,
            value = %change.value,
            version = %change.version_tag,
            "selection changed"
        );
        let toast = self.i18n.msg1(MessageKey::SelectionToast, &change.value);
        self.show_toast(toast);
    }

    /// Activate an option by key in the given group.
    pub fn activate_option(&mut self, group_index: usize, key: &str) {
        let Some(config) = self.form.groups().get(group_index) else {
            return;
        };
        let Some(state) = self.group_states.get_mut(group_index) else {
            return;
        };
        if let Some(index) = config.option_index(key) {
            state.set_hover(index);
        }
        if let Some(change) = state.activate(config, key) {
            self.on_selection_change(change);
        }
    }

    /// Activate the hovered option of the focused group (Enter/Space).
    pub fn activate_focused(&mut self) {
        let Some(config) = self.form.groups().get(self.focused_group) else {
            return;
        };
        let Some(state) = self.group_states.get_mut(self.focused_group) else {
            return;
        };
        if let Some(change) = state.activate_hovered(config) {
            self.on_selection_change(change);
        }
    }

    pub fn focus_next_group(&mut self) {
        self.focused_group = (self.focused_group + 1) % self.form.group_count();
    }

    pub fn focus_prev_group(&mut self) {
        self.focused_group = if self.focused_group == 0 {
            self.form.group_count() - 1
        } else {
            self.focused_group - 1
        };
    }

    pub fn hover_next_option(&mut self) {
        if let (Some(config), Some(state)) = (
            self.form.groups().get(self.focused_group),
            self.group_states.get_mut(self.focused_group),
        ) {
            state.hover_next(config);
        }
    }

    pub fn hover_prev_option(&mut self) {
        if let (Some(config), Some(state)) = (
            self.form.groups().get(self.focused_group),
            self.group_states.get_mut(self.focused_group),
        ) {
            state.hover_prev(config);
        }
    }

    /// Two-row area of a rendered group inside the body. Render and mouse
    /// hit-testing both go through this.
    pub fn group_area(&self, index: usize) -> Rect {
        let body = self.layout.areas().body;
        let y = body.y + index as u16 * GROUP_ROWS;
        if y + 2 > body.y + body.height {
            return Rect::default();
        }
        Rect {
            x: body.x,
            y,
            width: body.width,
            height: 2,
        }
    }

    // --- quick-links menus ------------------------------------------------

    pub fn open_menu_items(&self) -> &[LinkItem] {
        match self.quick_links.open_menu() {
            Some(QuickMenu::Language) => &self.language_menu,
            Some(QuickMenu::Help) => &self.help_menu,
            None => &[],
        }
    }

    pub fn toggle_menu(&mut self, menu: QuickMenu) {
        self.quick_links.toggle(menu);
    }

    pub fn close_menu(&mut self) {
        self.quick_links.close();
    }

    pub fn is_menu_open(&self) -> bool {
        self.quick_links.is_open()
    }

    pub fn menu_hover_next(&mut self) {
        let count = self.open_menu_items().len();
        self.quick_links.hover_next(count);
    }

    pub fn menu_hover_prev(&mut self) {
        let count = self.open_menu_items().len();
        self.quick_links.hover_prev(count);
    }

    /// Activate the hovered item of the open menu: close, then queue the
    /// navigation side effect.
    pub fn activate_menu_item(&mut self) {
        let items = match self.quick_links.open_menu() {
            Some(QuickMenu::Language) => self.language_menu.clone(),
            Some(QuickMenu::Help) => self.help_menu.clone(),
            None => return,
        };
        let Some(navigation) = self.quick_links.activate(&items) else {
            return;
        };
        if navigation.external {
            self.pending_navigation = Some(NavigationRequest::External(navigation.href));
        } else if let Some(code) = lang_from_href(&navigation.href) {
            self.pending_navigation =
                Some(NavigationRequest::SwitchLanguage(Language::from_code(code)));
        } else {
            // internal link without a locale flag: back to the form
            self.view = View::Form;
        }
    }

    /// Rebuild everything language-dependent. Selections survive; the
    /// language menu is rebuilt so its hrefs get a fresh cache buster.
    pub fn switch_language(&mut self, language: Language) -> Result<()> {
        self.i18n = I18n::new(language);
        self.help_menu = create_help_menu(self.i18n)?;
        self.language_menu = create_language_menu()?;

        let mut form = create_default_form(self.i18n)?;
        for group in self.form.groups() {
            let selected = self.form.selected_for(&group.id).to_string();
            if let Some(option) = group.option(&selected) {
                form.apply(&SelectionChange {
                    group_id: group.id.clone(),
                    value: selected,
                    version_tag: option.version_tag.clone(),
                });
            }
        }
        self.form = form;

        let toast = self
            .i18n
            .msg1(MessageKey::LanguageSwitchedToast, language.display_name());
        self.show_toast(toast);
        tracing::info!(language = language.code(), "language switched");
        Ok(())
    }

    pub fn take_pending_navigation(&mut self) -> Option<NavigationRequest> {
        self.pending_navigation.take()
    }

    // --- not-found view ---------------------------------------------------

    pub fn not_found_hover_next(&mut self) {
        self.not_found_hover = (self.not_found_hover + 1) % not_found::LINK_COUNT;
    }

    pub fn not_found_hover_prev(&mut self) {
        self.not_found_hover = if self.not_found_hover == 0 {
            not_found::LINK_COUNT - 1
        } else {
            self.not_found_hover - 1
        };
    }

    pub fn activate_not_found_link(&mut self) {
        match self.not_found_hover {
            0 => self.view = View::Form,
            1 => {
                self.pending_navigation =
                    Some(NavigationRequest::External(INITIALIZR_DOCS_URL.to_string()));
            }
            _ => {}
        }
    }

    // --- mouse routing ----------------------------------------------------

    /// Route a pointer press. While a menu is open, a press outside its
    /// rendered bounds dismisses it; presses on toggles and options behave
    /// like their keyboard activations.
    pub fn handle_mouse_down(&mut self, x: u16, y: u16, screen: Rect) {
        let quick_links_area = self.layout.areas().quick_links;

        if let Some(menu) = self.quick_links.open_menu() {
            let items = self.open_menu_items();
            let rect = quick_links::menu_rect(menu, quick_links_area, screen, items, self.i18n);
            if let Some(index) = quick_links::item_at(rect, items, x, y) {
                self.quick_links.set_hover(index);
                self.activate_menu_item();
            } else if quick_links::rect_contains(rect, x, y) {
                // inside the menu but not on an item (border): stays open
            } else if let Some(toggled) = quick_links::toggle_at(quick_links_area, self.i18n, x, y)
            {
                self.quick_links.toggle(toggled);
            } else {
                // outside-press dismiss
                self.quick_links.close();
            }
            return;
        }

        if let Some(menu) = quick_links::toggle_at(quick_links_area, self.i18n, x, y) {
            self.quick_links.toggle(menu);
            return;
        }

        if let Some(url) = footer::link_at(self.layout.areas().footer, x, y) {
            self.pending_navigation = Some(NavigationRequest::External(url.to_string()));
            return;
        }

        match self.view {
            View::Form => {
                for index in 0..self.form.group_count() {
                    let area = self.group_area(index);
                    // groups that did not fit the body are not rendered
                    if area.height == 0 {
                        continue;
                    }
                    let Some(config) = self.form.groups().get(index) else {
                        continue;
                    };
                    if let Some(key) = radio::option_at(config, area, x, y) {
                        let key = key.to_string();
                        self.focused_group = index;
                        self.activate_option(index, &key);
                        return;
                    }
                }
            }
            View::NotFound => {
                let body = self.layout.areas().body;
                if let Some(index) = not_found::link_at(body, x, y) {
                    self.not_found_hover = index;
                    self.activate_not_found_link();
                }
            }
        }
    }

    // --- toast ------------------------------------------------------------

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    pub fn active_toast(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .map(|(message, _)| message.as_str())
    }

    /// Expire the toast. Called once per loop iteration.
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.toast_message {
            if shown_at.elapsed() >= TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }
}
