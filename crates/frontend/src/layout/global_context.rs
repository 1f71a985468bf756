use leptos::prelude::*;

/// Страница, отображаемая в основной области
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Cover,
    Dashboard,
    Orders,
}

impl ActivePage {
    pub fn key(&self) -> &'static str {
        match self {
            ActivePage::Cover => "cover",
            ActivePage::Dashboard => "dashboard",
            ActivePage::Orders => "orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::Cover => "Welcome",
            ActivePage::Dashboard => "eCommerce",
            ActivePage::Orders => "Order List",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<ActivePage>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::default()),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: ActivePage) {
        leptos::logging::log!("🔷 navigate: '{}'", page.key());
        self.active_page.set(page);
    }

    pub fn is_active(&self, page: ActivePage) -> bool {
        self.active_page.get() == page
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
