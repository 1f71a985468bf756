pub mod d400_ecommerce_overview;

pub use d400_ecommerce_overview::ui::EcommerceOverview;
