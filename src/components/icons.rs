//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as Back, LuGlobe as Globe, LuMoon as Moon, LuSearch as Search, LuSun as Sun,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as Back, BsGlobe as Globe, BsMoonFill as Moon, BsSearch as Search,
        BsSunFill as Sun,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(GLOBE, Globe);
themed_icon!(MOON, Moon);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);
