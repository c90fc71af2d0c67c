/// A labelled navigable entry of a dropdown list.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: &'static str,
}

impl MenuEntry {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }

    /// Route of a feature page, `/function/<target>`.
    pub fn feature_href(&self) -> String {
        format!("{}/{}", FEATURE_ROUTE_PREFIX, self.target)
    }
}

pub const BRAND_NAME: &str = "WakaWaka";
pub const BRAND_HREF: &str = "/";

pub const PRICING_LABEL: &str = "요금";
pub const PRICING_HREF: &str = "/pricing";

pub const CALL_TO_ACTION_LABEL: &str = "→ 지금 시작하기";

pub const FEATURE_ROUTE_PREFIX: &str = "/function";

pub const FEATURE_MENU: [MenuEntry; 6] = [
    MenuEntry::new("와카 숏츠", "wakashorts"),
    MenuEntry::new("와카 챗", "wakachat"),
    MenuEntry::new("클라우드 스페이스", "cloudspace"),
    MenuEntry::new("에디터", "editor"),
    MenuEntry::new("내보내기 목록", "exportlist"),
    MenuEntry::new("브랜드 관리", "brand"),
];

// Entries carry a locale code but selecting one does nothing yet.
pub const LANGUAGE_MENU: [MenuEntry; 2] = [
    MenuEntry::new("한국어", "ko"),
    MenuEntry::new("English", "en"),
];

pub const SUPPORT_ITEMS: [&str; 2] = ["문의하기", "자주 묻는 질문"];
