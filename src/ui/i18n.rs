// Two-entry locale table keyed by the `lang` preference.
//
// The flag is read once at startup; anything other than "en" renders the
// Chinese branch, so the deterministic default language is Chinese.
#![allow(dead_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Chinese,
}

impl Default for Language {
    fn default() -> Self {
        Self::Chinese
    }
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::English,
            _ => Language::Chinese,
        }
    }

    /// Resolve the preference-store flag. Missing flag falls back to the
    /// default language.
    pub fn from_pref(value: Option<&str>) -> Self {
        value.map(Self::from_code).unwrap_or_default()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    HeaderTitle,
    HeaderTitleStrong,
    HeaderDescription,
    QuickLanguage,
    QuickHelp,
    HelpFrameworkProjects,
    HelpSpringProjects,
    HelpSpringGuides,
    HelpWhatsNew,
    HelpMigration,
    GroupProject,
    GroupLanguage,
    GroupVersion,
    GroupPackaging,
    FooterPoweredBy,
    NotFoundHint,
    NotFoundStart,
    NotFoundSite,
    CommandLanguage,
    CommandHelp,
    CommandTheme,
    CommandSelect,
    CommandQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    SelectionToast,
    LanguageSwitchedToast,
    ThemeSwitchedToast,
}

#[derive(Debug, Clone, Copy)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn tr(self, key: TextKey) -> &'static str {
        match (self.language, key) {
            (Language::English, TextKey::HeaderTitle) => "Base Framework",
            (Language::Chinese, TextKey::HeaderTitle) => "基础库项目",
            (Language::English, TextKey::HeaderTitleStrong) => "Initializr",
            (Language::Chinese, TextKey::HeaderTitleStrong) => "初始化",
            (Language::English, TextKey::HeaderDescription) => "Bootstrap your application",
            (Language::Chinese, TextKey::HeaderDescription) => "构建您的应用程序",
            (Language::English, TextKey::QuickLanguage) => "language",
            (Language::Chinese, TextKey::QuickLanguage) => "语言",
            (Language::English, TextKey::QuickHelp) => "Help",
            (Language::Chinese, TextKey::QuickHelp) => "帮助文档",
            (Language::English, TextKey::HelpFrameworkProjects) => "Base Framework Projects",
            (Language::Chinese, TextKey::HelpFrameworkProjects) => "基础库项目",
            (Language::English, TextKey::HelpSpringProjects) => "Spring Projects",
            (Language::Chinese, TextKey::HelpSpringProjects) => "Spring项目",
            (Language::English, TextKey::HelpSpringGuides) => "Spring Guides",
            (Language::Chinese, TextKey::HelpSpringGuides) => "Spring指南",
            (Language::English, TextKey::HelpWhatsNew) => "What's New With Spring",
            (Language::Chinese, TextKey::HelpWhatsNew) => "Spring新特性",
            (Language::English, TextKey::HelpMigration) => "Migrate from 1.5 => 2.0",
            (Language::Chinese, TextKey::HelpMigration) => "1.5 => 2.0迁移指南",
            (Language::English, TextKey::GroupProject) => "Project",
            (Language::Chinese, TextKey::GroupProject) => "项目类型",
            (Language::English, TextKey::GroupLanguage) => "Language",
            (Language::Chinese, TextKey::GroupLanguage) => "开发语言",
            (Language::English, TextKey::GroupVersion) => "Framework Version",
            (Language::Chinese, TextKey::GroupVersion) => "框架版本",
            (Language::English, TextKey::GroupPackaging) => "Packaging",
            (Language::Chinese, TextKey::GroupPackaging) => "打包方式",
            (Language::English, TextKey::FooterPoweredBy) => "start.base-framework.io is powered by",
            (Language::Chinese, TextKey::FooterPoweredBy) => "start.base-framework.io 由以下项目驱动",
            (Language::English, TextKey::NotFoundHint) => "You can navigate to the following pages:",
            (Language::Chinese, TextKey::NotFoundHint) => "您可以访问以下页面：",
            (Language::English, TextKey::NotFoundStart) => "Start with Base Framework Initializr",
            (Language::Chinese, TextKey::NotFoundStart) => "回到基础库项目初始化",
            (Language::English, TextKey::NotFoundSite) => "Navigate to base-framework.io",
            (Language::Chinese, TextKey::NotFoundSite) => "访问 base-framework.io",
            (Language::English, TextKey::CommandLanguage) => "Lang",
            (Language::Chinese, TextKey::CommandLanguage) => "语言",
            (Language::English, TextKey::CommandHelp) => "Help",
            (Language::Chinese, TextKey::CommandHelp) => "帮助",
            (Language::English, TextKey::CommandTheme) => "Theme",
            (Language::Chinese, TextKey::CommandTheme) => "主题",
            (Language::English, TextKey::CommandSelect) => "Select",
            (Language::Chinese, TextKey::CommandSelect) => "选择",
            (Language::English, TextKey::CommandQuit) => "Quit",
            (Language::Chinese, TextKey::CommandQuit) => "退出",
        }
    }

    /// Messages with one runtime value.
    pub fn msg1(self, key: MessageKey, value: &str) -> String {
        let template = match (self.language, key) {
            (Language::English, MessageKey::SelectionToast) => "Selected: {value}",
            (Language::Chinese, MessageKey::SelectionToast) => "已选择：{value}",
            (Language::English, MessageKey::LanguageSwitchedToast) => "Language: {value}",
            (Language::Chinese, MessageKey::LanguageSwitchedToast) => "语言：{value}",
            (Language::English, MessageKey::ThemeSwitchedToast) => "Theme: {value}",
            (Language::Chinese, MessageKey::ThemeSwitchedToast) => "主题：{value}",
        };
        template.replace("{value}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        // unknown codes fall back to the default branch
        assert_eq!(Language::from_code("ko"), Language::Chinese);
        assert_eq!(Language::from_code(""), Language::Chinese);
    }

    #[test]
    fn test_from_pref_default() {
        assert_eq!(Language::from_pref(None), Language::Chinese);
        assert_eq!(Language::from_pref(Some("en")), Language::English);
        assert_eq!(Language::from_pref(Some("zh")), Language::Chinese);
    }

    #[test]
    fn test_tr_both_languages() {
        let en = I18n::new(Language::English);
        let zh = I18n::new(Language::Chinese);
        assert_eq!(en.tr(TextKey::QuickHelp), "Help");
        assert_eq!(zh.tr(TextKey::QuickHelp), "帮助文档");
        assert_eq!(en.tr(TextKey::QuickLanguage), "language");
        assert_eq!(zh.tr(TextKey::QuickLanguage), "语言");
    }

    #[test]
    fn test_msg1() {
        let en = I18n::new(Language::English);
        assert_eq!(
            en.msg1(MessageKey::SelectionToast, "gradle-project"),
            "Selected: gradle-project"
        );
    }
}
