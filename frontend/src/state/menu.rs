//! Navbar state: the mobile menu, the highlighted link and the bar's look.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Projects,
    Services,
    About,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Home,
        NavItem::Projects,
        NavItem::Services,
        NavItem::About,
        NavItem::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Projects => "Projects",
            NavItem::Services => "Services",
            NavItem::About => "About",
            NavItem::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub active: NavItem,
}

impl Default for NavState {
    fn default() -> Self {
        Self { menu: MenuState::Closed, active: NavItem::Home }
    }
}

pub enum NavAction {
    /// The hamburger button was pressed.
    Toggle,
    /// Outside press, viewport grown to desktop, backdrop or call-to-action.
    Close,
    /// A link was chosen; highlights it and closes the menu.
    Select(NavItem),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Toggle => NavState { menu: self.menu.toggled(), ..*self },
            NavAction::Close => {
                // Unchanged state keeps the same Rc so Yew skips the render.
                if !self.menu.is_open() {
                    return self;
                }
                NavState { menu: MenuState::Closed, ..*self }
            }
            NavAction::Select(item) => NavState { menu: MenuState::Closed, active: item },
        };

        debug!("Navbar {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

/// How the bar is drawn; depends on scrolling only, never on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    /// At the top of the page: full width, links on their own pill.
    Wide,
    /// Scrolled: narrower bar on a translucent glass panel.
    Compact,
}

impl BarMode {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            BarMode::Compact
        } else {
            BarMode::Wide
        }
    }

    pub fn width_px(self) -> u32 {
        match self {
            BarMode::Wide => 1200,
            BarMode::Compact => 840,
        }
    }

    pub fn shows_glass_panel(self) -> bool {
        matches!(self, BarMode::Compact)
    }

    pub fn shows_link_pill(self) -> bool {
        matches!(self, BarMode::Wide)
    }

    pub fn class(self) -> &'static str {
        match self {
            BarMode::Wide => "wide",
            BarMode::Compact => "compact",
        }
    }
}
