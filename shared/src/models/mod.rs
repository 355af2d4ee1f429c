//! Data models

mod menu_item;
mod order;
mod selection;
mod settings;

pub use menu_item::{MenuItem, PIZZA_CATEGORY};
pub use order::{
    Customer, DeliveryAddress, DeliveryDetails, Fulfillment, Order, OrderItem, OrderStatus,
    Payment,
};
pub use selection::{HalfAndHalf, ItemSelection};
pub use settings::ReceiptSettings;
