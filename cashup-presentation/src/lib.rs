#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod error_presenter;
pub mod group_presenter;
pub mod settlement_presenter;

pub use currency::{CurrencyFormat, SignPlacement};
pub use error_presenter::format_cashup_error;
pub use group_presenter::GroupPresenter;
pub use settlement_presenter::SettlementPresenter;
