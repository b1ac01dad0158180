//! Component contracts for the Larder design system
//!
//! Each component follows a consistent pattern:
//! - Constructor function taking the required fields (e.g., `button("Label")`)
//! - Variant enum (e.g., `ButtonVariant`)
//! - Size enum where sizing applies (e.g., `ButtonSize`)
//! - `build()` producing the validated configuration the host renders from

pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod field;
pub mod input;
pub mod link;
pub mod page_header;
pub mod select;
pub mod spinner;
pub mod tabs;
pub mod textarea;

pub use alert::{alert, Alert, AlertBuilder, AlertSeverity};
pub use badge::{badge, Badge, BadgeBuilder, BadgeSize, BadgeVariant};
pub use button::{
    button, icon_button, Button, ButtonBuilder, ButtonSize, ButtonVariant, IconButton,
    IconButtonBuilder,
};
pub use card::{card, Card, CardBuilder, CardElevation, CardPadding};
pub use empty_state::{empty_state, EmptyState, EmptyStateAction, EmptyStateBuilder};
pub use field::{FieldSize, ValidationState};
pub use input::{input, Input, InputBuilder, InputType};
pub use link::{link, Link, LinkBuilder, LinkVariant};
pub use page_header::{page_header, Breadcrumb, PageHeader, PageHeaderBuilder};
pub use select::{select, Select, SelectBuilder, SelectOption};
pub use spinner::{loading_spinner, LoadingSpinner, LoadingSpinnerBuilder, SpinnerSize};
pub use tabs::{tab_navigation, Tab, TabNavigation, TabNavigationBuilder, TabOrientation};
pub use textarea::{textarea, Textarea, TextareaBuilder};
