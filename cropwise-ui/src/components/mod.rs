//! Reusable Dioxus RSX components for the CropWise views.

mod chart_container;
mod chart_header;
mod crop_card;
mod error_display;
mod gauge;
mod loading_spinner;
mod navbar;
mod notifications;
mod parameter_slider;
mod password_strength_meter;
mod soil_type_select;
mod weather_widget;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use crop_card::CropCard;
pub use error_display::ErrorDisplay;
pub use gauge::Gauge;
pub use loading_spinner::LoadingSpinner;
pub use navbar::Navbar;
pub use notifications::Notifications;
pub use parameter_slider::ParameterSlider;
pub use password_strength_meter::PasswordStrengthMeter;
pub use soil_type_select::SoilTypeSelect;
pub use weather_widget::WeatherWidget;
