//! Role-based view composition: which navigation entries, quick actions
//! and dashboard layout a role gets to see.

pub mod dashboard;
pub mod nav;

pub use dashboard::{DashboardView, StatCard, role_label, welcome_message};
pub use nav::{
    NavItem, QuickAction, nav_catalog, quick_action_catalog, visible_nav_items,
    visible_quick_actions,
};
