// Domain layer - Dashboard model and layout rules
pub mod chart;
pub mod dashboard;
pub mod layout;
pub mod preview;
pub mod widget;
