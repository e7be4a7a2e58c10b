// Markup hooks and storage keys used by the web frontend.

// Loader
pub const SEL_LOADER: &str = ".loader";
pub const SEL_LOADER_PROGRESS: &str = ".loader-progress";
pub const SEL_LOADER_TEXT: &str = ".loader-text";
pub const SEL_LOADER_CURTAIN: &str = ".loader-curtain";

// Hero
pub const SEL_HERO_LINES: &str = ".line-reveal";
pub const SEL_HERO_FADES: [&str; 3] = [".hero-label", ".hero-desc", ".hero-action"];

// Scroll-linked sections
pub const SEL_SCROLL_CONTENT: &str = "[data-scroll-content]"; // translated by the virtual scroll
pub const SEL_PARALLAX_IMAGES: &str = ".reveal-image img";
pub const SEL_REVEALS: &str = "[data-reveal]";
pub const SEL_HORIZONTAL_SECTION: &str = ".scenarios-section";
pub const SEL_HORIZONTAL_TRACK: &str = ".horizontal-track";
pub const SEL_HEADER: &str = ".header";

// Cursor
pub const SEL_CURSOR_OUTER: &str = ".cursor-outer";
pub const SEL_CURSOR_INNER: &str = ".cursor-inner";
pub const SEL_CURSOR_TARGETS: &str = "[data-cursor]";
pub const CURSOR_ATTR: &str = "data-cursor";
pub const CURSOR_MAGNETIC_VALUE: &str = "-magnetic";

// Menu and navigation
pub const SEL_BURGER: &str = ".burger-trigger";
pub const SEL_MOBILE_MENU: &str = ".mobile-menu";
pub const SEL_MENU_LINKS: &str = ".m-link";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";

// Form
pub const SEL_FORM: &str = ".booking-form";
pub const SEL_SUBMIT_LABEL: &str = ".btn-submit span";
pub const FORM_ENDPOINT_ATTR: &str = "data-endpoint";

// Body state classes
pub const CLASS_HOVER_ACTIVE: &str = "hover-active";
pub const CLASS_HOVER_MAGNETIC: &str = "hover-magnetic";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "is-scrolled";
pub const CLASS_SUBMIT_OK: &str = "is-success";
pub const CLASS_SUBMIT_FAILED: &str = "is-error";

// Session persistence
pub const SESSION_VISITED_KEY: &str = "landing-motion:visited";

// Input
pub const WHEEL_LINE_PX: f64 = 16.0; // WheelEvent.deltaMode == DOM_DELTA_LINE
